// src/ingest/mod.rs

use crate::error::LoadError;
use csv::StringRecord;
use std::fs::File;
use std::path::Path;
use tracing::{info, instrument};

/// A parsed CSV file: the header row plus every data row, in file order.
/// Headers are whatever the file claims; column renaming happens later.
#[derive(Debug)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

/// Read the whole source file into memory.
///
/// A missing path is `MissingFile`, reported before anything is opened. Rows
/// with the wrong field count or broken encoding abort the run as `Parse` —
/// there is no partial recovery.
#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<RawTable, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::MissingFile(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    // Exports from some spreadsheet tools prefix the first header with a BOM.
    if let Some(first) = headers.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }

    info!(rows = rows.len(), "parsed csv");
    Ok(RawTable { headers, rows })
}
