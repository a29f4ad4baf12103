use crate::record::Investor;
use std::collections::HashSet;

/// Drop every record whose (firm_name, website) pair was already seen,
/// keeping the first occurrence in file order.
pub fn dedupe(records: Vec<Investor>) -> Vec<Investor> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| {
            let (firm, site) = record.identity();
            seen.insert((firm.to_string(), site.to_string()))
        })
        .collect()
}
