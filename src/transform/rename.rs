use std::collections::HashMap;

/// Source spreadsheet header → destination column.
/// Source columns outside this table are dropped.
pub static COLUMN_MAP: &[(&str, &str)] = &[
    ("Investor name", "firm_name"),
    ("Website", "website"),
    ("Global HQ", "hq_location"),
    ("Countries of investment", "investment_focus"),
    ("Stage of investment", "stages"),
    ("Investment thesis", "investment_thesis"),
    ("Investor type", "investor_type"),
    ("First cheque minimum", "min_check_size"),
    ("First cheque maximum", "max_check_size"),
];

/// Resolve each destination column to its index in the file's header row.
///
/// Total over any header set: mapped columns missing from the file are simply
/// left unresolved, so downstream field lookups fall back to absent.
pub fn resolve_columns(headers: &[String]) -> HashMap<&'static str, usize> {
    let mut resolved = HashMap::with_capacity(COLUMN_MAP.len());
    for (source, target) in COLUMN_MAP {
        if let Some(idx) = headers.iter().position(|h| h == source) {
            resolved.insert(*target, idx);
        }
    }
    resolved
}
