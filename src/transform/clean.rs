use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY_JUNK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[$,\s]").expect("currency junk pattern should be valid"));

/// Coerce a raw currency cell to a number, or `None`.
///
/// Total on any input: missing or blank values, text that still fails to parse
/// after stripping `$`, `,` and whitespace, and negative or non-finite amounts
/// all coerce silently to `None`. Bad currency text never aborts a load.
pub fn clean_currency(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let stripped = CURRENCY_JUNK.replace_all(raw, "");
    stripped
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}

/// Trim a raw string cell; a missing cell becomes the empty string, never a
/// null marker.
pub fn clean_str(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbols_and_separators() {
        assert_eq!(clean_currency(Some("$1,200,000")), Some(1_200_000.0));
        assert_eq!(clean_currency(Some(" 50 000 ")), Some(50_000.0));
        assert_eq!(clean_currency(Some("250000.50")), Some(250_000.5));
    }

    #[test]
    fn missing_or_blank_is_absent() {
        assert_eq!(clean_currency(None), None);
        assert_eq!(clean_currency(Some("")), None);
        assert_eq!(clean_currency(Some("   ")), None);
    }

    #[test]
    fn unparseable_text_is_absent_not_an_error() {
        assert_eq!(clean_currency(Some("N/A")), None);
        assert_eq!(clean_currency(Some("€1,000")), None);
        assert_eq!(clean_currency(Some("$1,200,000 - $5,000,000")), None);
    }

    #[test]
    fn negative_and_non_finite_amounts_are_absent() {
        assert_eq!(clean_currency(Some("-500")), None);
        assert_eq!(clean_currency(Some("inf")), None);
        assert_eq!(clean_currency(Some("NaN")), None);
    }

    #[test]
    fn trims_strings_and_fills_missing_with_empty() {
        assert_eq!(clean_str(Some("  Acme Ventures  ")), "Acme Ventures");
        assert_eq!(clean_str(Some("acme.vc")), "acme.vc");
        assert_eq!(clean_str(None), "");
    }
}
