//! CSV table loader — delimited text file to an in-memory `Table`.

use std::path::Path;

use rustc_hash::FxHashMap;

use cohort_core::errors::LoadError;
use cohort_core::record::{Record, Table};

/// Column holding the stable record identifier.
const ID_COLUMN: &str = "id";

/// Read a comma-delimited file into a `Table`.
///
/// Field parsing handles quoted fields, embedded commas, and doubled quotes.
/// Blank lines are skipped; rows shorter than the header are padded with
/// empty fields (the classification layer treats empty as non-member), and
/// extra trailing fields are ignored. Embedded newlines inside quoted fields
/// are not supported.
pub fn load_csv(path: &Path) -> Result<Table, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => {
            return Err(LoadError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            });
        }
    };

    let mut lines = content
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty());

    let header_line = lines.next().ok_or_else(|| LoadError::EmptyFile {
        path: path.display().to_string(),
    })?;

    let headers: Vec<String> = split_fields(header_line)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let id_index = headers
        .iter()
        .position(|h| h == ID_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn {
            column: ID_COLUMN.to_string(),
        })?;

    let mut records = Vec::new();
    for line in lines {
        let mut fields = split_fields(line);
        // Short rows are padded so every header has a value.
        while fields.len() < headers.len() {
            fields.push(String::new());
        }

        let id = fields[id_index].trim().to_string();
        let field_map: FxHashMap<String, String> = headers
            .iter()
            .cloned()
            .zip(fields.into_iter())
            .collect();

        records.push(Record::new(id, field_map));
    }

    tracing::info!(
        path = %path.display(),
        columns = headers.len(),
        records = records.len(),
        "loaded table"
    );

    Ok(Table::new(headers, records))
}

/// Split one CSV line into fields.
/// Minimal RFC-4180: `"` opens a quoted field, `""` inside quotes is a
/// literal quote, commas inside quotes do not split.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("students.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_basic_table() {
        let (_dir, path) = write_csv("id,Gender,Age\n1,Female,20\n2,Male,30\n");
        let table = load_csv(&path).unwrap();

        assert_eq!(table.headers(), &["id", "Gender", "Age"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].id(), "1");
        assert_eq!(table.records()[1].raw("Gender"), Some("Male"));
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let (_dir, path) =
            write_csv("id,Sleep Duration\n1,\"7-8 hours, usually\"\n2,\"say \"\"hi\"\"\"\n");
        let table = load_csv(&path).unwrap();

        assert_eq!(
            table.records()[0].raw("Sleep Duration"),
            Some("7-8 hours, usually")
        );
        assert_eq!(table.records()[1].raw("Sleep Duration"), Some("say \"hi\""));
    }

    #[test]
    fn short_rows_are_padded_and_blank_lines_skipped() {
        let (_dir, path) = write_csv("id,Gender,Age\n\n1,Female\n");
        let table = load_csv(&path).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].raw("Age"), Some(""));
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let (_dir, path) = write_csv("id,Gender\r\n1,Female\r\n");
        let table = load_csv(&path).unwrap();

        assert_eq!(table.headers(), &["id", "Gender"]);
        assert_eq!(table.records()[0].raw("Gender"), Some("Female"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn missing_id_column_is_reported() {
        let (_dir, path) = write_csv("Gender,Age\nFemale,20\n");
        let err = load_csv(&path).unwrap_err();
        match err {
            LoadError::MissingColumn { column } => assert_eq!(column, "id"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_reported() {
        let (_dir, path) = write_csv("");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::EmptyFile { .. }));
    }
}
