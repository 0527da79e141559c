//! Record and table data model — immutable survey rows with named-field lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Normalize a raw field value for string comparison:
/// trimmed of whitespace, surrounding quote characters stripped, case-folded.
pub fn normalize_value(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .trim()
        .to_lowercase()
}

/// One individual's row of data, keyed by a stable identifier.
///
/// Records are immutable inputs: the classification core only reads them.
/// Field lookups that fail to parse degrade to `None`, never to an error —
/// malformed data means "not a member of the category", not an abort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    id: String,
    fields: FxHashMap<String, String>,
}

impl Record {
    /// Create a record from its identifier and named fields.
    pub fn new(id: impl Into<String>, fields: FxHashMap<String, String>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// The record identifier in canonical string form — the graph node key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw field value by column name, if the column exists.
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Normalized field value: trimmed, unquoted, lowercased.
    pub fn normalized(&self, column: &str) -> Option<String> {
        self.raw(column).map(normalize_value)
    }

    /// Safe numeric parse of a field. Returns `None` for a missing column,
    /// an empty field, or text that is not a number.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        let cleaned = self
            .raw(column)?
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .trim();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse::<f64>().ok()
    }
}

/// A finite, fully-materialized sequence of records plus its column headers.
/// Row order is the input file order and is preserved through sampling.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Assemble a table from headers and records.
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    /// Column headers in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
