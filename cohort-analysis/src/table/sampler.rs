//! Deterministic record subsampling — same seed, same subset.

use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cohort_core::record::Table;

/// Take a pseudo-random subset of `round(n * percentage / 100)` records.
///
/// The caller validates `percentage` into [0, 100] before this runs. A
/// percentage of 100 (or more) returns the table unchanged. Selected records
/// keep their input order so "first N" reporting stays stable.
pub fn sample(table: &Table, percentage: f64, seed: u64) -> Table {
    if percentage >= 100.0 {
        return table.clone();
    }

    let total = table.len();
    let amount = ((total as f64) * percentage / 100.0).round() as usize;
    let amount = amount.min(total);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut indices: Vec<usize> = index::sample(&mut rng, total, amount).into_vec();
    indices.sort_unstable();

    let records = indices
        .iter()
        .map(|&i| table.records()[i].clone())
        .collect();

    tracing::info!(total, kept = amount, percentage, seed, "sampled records");

    Table::new(table.headers().to_vec(), records)
}
