use serde::Serialize;

/// One row of the `european_investors` table.
///
/// String columns are always trimmed and never null; the check-size columns
/// are `None` when the source held no parseable amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Investor {
    pub firm_name: String,
    pub website: String,
    pub hq_location: String,
    pub investment_focus: String,
    pub stages: String,
    pub investment_thesis: String,
    pub investor_type: String,
    pub min_check_size: Option<f64>,
    pub max_check_size: Option<f64>,
}

impl Investor {
    /// Deduplication identity: first record per (firm_name, website) wins.
    pub fn identity(&self) -> (&str, &str) {
        (&self.firm_name, &self.website)
    }
}
