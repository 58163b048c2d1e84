//! Display formatting shared by the pages.

use chrono::{DateTime, NaiveDate};

/// Integer with comma thousands separators, e.g. `1,247`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render an RFC 3339 timestamp or `YYYY-MM-DD` date as `DD/MM/YYYY`.
/// Anything else is shown unchanged.
pub fn display_date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%d/%m/%Y").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Split a camelCase key into capitalised words:
/// `deforestationPrediction` → `Deforestation Prediction`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}

/// Percentage with at most one decimal and no trailing `.0`.
pub fn percent(value: f64) -> String {
    let text = format!("{value:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}%")
}

/// A number with at most one decimal and no trailing `.0`.
pub fn compact(value: f64) -> String {
    let text = format!("{value:.1}");
    text.strip_suffix(".0").map(str::to_string).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(856), "856");
        assert_eq!(thousands(1247), "1,247");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-01-15T10:30:00Z"), "15/01/2024");
        assert_eq!(display_date("2024-01-08"), "08/01/2024");
        assert_eq!(display_date("last week"), "last week");
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("claimApprovalPredictor"), "Claim Approval Predictor");
        assert_eq!(humanize_key("anomaly"), "Anomaly");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_percent_and_compact() {
        assert_eq!(percent(68.64), "68.6%");
        assert_eq!(percent(45.0), "45%");
        assert_eq!(compact(7.8), "7.8");
        assert_eq!(compact(9.0), "9");
    }
}
