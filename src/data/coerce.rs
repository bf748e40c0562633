use chrono::{DateTime, NaiveDate, NaiveDateTime};

// ---------------------------------------------------------------------------
// Cell coercion: raw text → typed optional value
// ---------------------------------------------------------------------------
//
// Every function here is total. A value that cannot be interpreted becomes
// `None`; a malformed cell never fails a load.

/// Datetime layouts tried in order before falling back to date-only layouts.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d.%m.%Y", "%b %d, %Y"];

/// Non-empty trimmed text, or `None`.
pub fn text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a price. A leading currency sign and thousands separators are
/// accepted; anything else non-numeric is missing.
pub fn price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a sales rank. Integral floats (`"1234.0"`, as written by tools
/// that store ranks in a float column) are accepted.
pub fn rank(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed
        .strip_prefix('#')
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if let Ok(i) = cleaned.parse::<i64>() {
        return Some(i);
    }
    cleaned.parse::<f64>().ok().and_then(rank_from_f64)
}

/// Integral, in-range floats only.
pub fn rank_from_f64(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Parse a date or timestamp; date-only values land at midnight.
pub fn date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_blank_is_missing() {
        assert_eq!(text("  "), None);
        assert_eq!(text(" Acme "), Some("Acme".to_string()));
    }

    #[test]
    fn test_price_coercion() {
        assert_eq!(price("19.99"), Some(19.99));
        assert_eq!(price("$ 1,299.50"), Some(1299.5));
        assert_eq!(price("free"), None);
        assert_eq!(price("NaN"), None);
        assert_eq!(price(""), None);
    }

    #[test]
    fn test_rank_coercion() {
        assert_eq!(rank("1234"), Some(1234));
        assert_eq!(rank("#12,345"), Some(12345));
        assert_eq!(rank("250.0"), Some(250));
        assert_eq!(rank("250.5"), None);
        assert_eq!(rank("n/a"), None);
    }

    #[test]
    fn test_date_coercion() {
        let midnight = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(date("2024-03-09"), Some(midnight));
        assert_eq!(date("03/09/2024"), Some(midnight));
        assert_eq!(
            date("2024-03-09 14:30:00"),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(14, 30, 0)
        );
        assert_eq!(
            date("2024-03-09T10:00:00+02:00"),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(8, 0, 0)
        );
        assert_eq!(
            date("2024-03-09T14:30:00.250"),
            NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_milli_opt(14, 30, 0, 250)
        );
        assert_eq!(date("not a date"), None);
        assert_eq!(date("2024-13-45"), None);
    }
}
