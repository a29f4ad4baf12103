// src/transform/mod.rs

pub mod clean;
pub mod dedupe;
pub mod rename;

pub use clean::{clean_currency, clean_str};
pub use dedupe::dedupe;
pub use rename::{resolve_columns, COLUMN_MAP};

use crate::ingest::RawTable;
use crate::record::Investor;
use csv::StringRecord;
use std::collections::HashMap;
use tracing::info;

/// Run the rename → clean → dedupe pipeline over a parsed table.
pub fn run(table: &RawTable) -> Vec<Investor> {
    let columns = rename::resolve_columns(&table.headers);
    let records: Vec<Investor> = table
        .rows
        .iter()
        .map(|row| build_record(&columns, row))
        .collect();
    let unique = dedupe::dedupe(records);
    info!(
        total = table.rows.len(),
        unique = unique.len(),
        "normalized and deduplicated"
    );
    unique
}

fn build_record(columns: &HashMap<&'static str, usize>, row: &StringRecord) -> Investor {
    let cell = |name: &str| columns.get(name).and_then(|&idx| row.get(idx));
    Investor {
        firm_name: clean_str(cell("firm_name")),
        website: clean_str(cell("website")),
        hq_location: clean_str(cell("hq_location")),
        investment_focus: clean_str(cell("investment_focus")),
        stages: clean_str(cell("stages")),
        investment_thesis: clean_str(cell("investment_thesis")),
        investor_type: clean_str(cell("investor_type")),
        min_check_size: clean_currency(cell("min_check_size")),
        max_check_size: clean_currency(cell("max_check_size")),
    }
}
