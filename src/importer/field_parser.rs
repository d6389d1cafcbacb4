// ==========================================
// Kashi Kravings Dashboard - Field Parsers
// ==========================================
// Pure normalization of raw spreadsheet/CSV cells into typed
// primitives. Every parser here is total: spreadsheet input is
// human-entered and expected to be messy, so a bad cell coerces to a
// safe default (0 / empty string) instead of failing the batch.
// ==========================================

use chrono::NaiveDate;

/// Month abbreviations as they appear in sheet exports ("31-Jan-26").
const MONTH_ABBR: [(&str, u32); 12] = [
    ("Jan", 1),
    ("Feb", 2),
    ("Mar", 3),
    ("Apr", 4),
    ("May", 5),
    ("Jun", 6),
    ("Jul", 7),
    ("Aug", 8),
    ("Sep", 9),
    ("Oct", 10),
    ("Nov", 11),
    ("Dec", 12),
];

/// Parse a currency/count cell into a non-negative finite number.
///
/// Strips the rupee glyph, thousands separators, stray quote
/// characters and whitespace. Empty cells, the "-" placeholder and
/// anything that still fails to parse all return 0. Never fails,
/// never returns NaN or a negative value.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return 0.0;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| *c != '₹' && *c != ',' && *c != '"' && !c.is_whitespace())
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Normalize a date cell to `YYYY-MM-DD`.
///
/// Accepts the four shapes seen in real submissions:
/// 1. already ISO (`2026-02-05`) - passthrough
/// 2. `M/D/YYYY` (US order, Google Forms default)
/// 3. `D-Mon-YY` / `D-Mon-YYYY` (sheet display format, e.g. `31-Jan-26`;
///    two-digit years are read as 20YY)
/// 4. `D-M-YYYY` (all-numeric dash form)
///
/// Each shape is validated against the real calendar before being
/// accepted. Anything else goes through a generic fallback chain; if
/// that also fails the result is the empty string and the caller
/// drops the record from date-keyed aggregation.
pub fn parse_date(raw: &str) -> String {
    let date_string = raw.replace('"', "");
    let date_string = date_string.trim();
    if date_string.is_empty() {
        return String::new();
    }

    // Shape 1: already ISO
    if is_iso_date_shape(date_string) {
        if let Some(iso) = checked_iso(date_string) {
            return iso;
        }
        return fallback_parse(date_string);
    }

    // Shape 2: M/D/YYYY
    let slash_parts: Vec<&str> = date_string.split('/').collect();
    if slash_parts.len() == 3 {
        if let Some(iso) = ymd_to_iso(slash_parts[2], slash_parts[0], slash_parts[1]) {
            return iso;
        }
        return fallback_parse(date_string);
    }

    // Shapes 3 and 4: dash-separated
    let dash_parts: Vec<&str> = date_string.split('-').collect();
    if dash_parts.len() == 3 {
        let (day_part, month_part, year_part) = (dash_parts[0], dash_parts[1], dash_parts[2]);

        // D-Mon-YY / D-Mon-YYYY
        if let Some((_, month)) = MONTH_ABBR.iter().find(|(abbr, _)| *abbr == month_part) {
            let full_year = if year_part.len() == 2 {
                format!("20{}", year_part)
            } else {
                year_part.to_string()
            };
            if let Some(iso) = ymd_to_iso(&full_year, &month.to_string(), day_part) {
                return iso;
            }
            return fallback_parse(date_string);
        }

        // D-M-YYYY
        if day_part.len() <= 2 {
            if let Some(iso) = ymd_to_iso(year_part, month_part, day_part) {
                return iso;
            }
        }
        return fallback_parse(date_string);
    }

    fallback_parse(date_string)
}

fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Validate an ISO-shaped string against the real calendar.
fn checked_iso(s: &str) -> Option<String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Assemble year/month/day text into a calendar-checked ISO string.
fn ymd_to_iso(year: &str, month: &str, day: &str) -> Option<String> {
    let year: i32 = year.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Last-resort parsing for shapes the fast paths don't cover
/// (full month names, RFC 3339 timestamps, slash-ISO).
fn fallback_parse(s: &str) -> String {
    const FALLBACK_FORMATS: [&str; 4] = ["%Y/%m/%d", "%d %b %Y", "%B %d, %Y", "%d %B %Y"];

    for fmt in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }

    String::new()
}

/// Split one CSV line into trimmed fields.
///
/// RFC-4180-ish: commas inside double-quoted fields are literal, and
/// a doubled quote inside a quoted field (`""`) becomes a literal
/// quote. Single-line only - embedded newlines inside quoted fields
/// are not handled (the exports this reads never produce them).
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_currency_and_separators() {
        assert_eq!(parse_number("₹1,234.50"), 1234.50);
        assert_eq!(parse_number("\"2,500\""), 2500.0);
        assert_eq!(parse_number("  42 "), 42.0);
        assert_eq!(parse_number("3.5"), 3.5);
    }

    #[test]
    fn test_parse_number_defaults_to_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("₹"), 0.0);
    }

    #[test]
    fn test_parse_number_never_negative_or_nan() {
        assert_eq!(parse_number("-50"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
    }

    #[test]
    fn test_parse_date_iso_passthrough() {
        assert_eq!(parse_date("2026-02-05"), "2026-02-05");
    }

    #[test]
    fn test_parse_date_us_slash() {
        assert_eq!(parse_date("2/5/2026"), "2026-02-05");
        assert_eq!(parse_date("12/31/2025"), "2025-12-31");
    }

    #[test]
    fn test_parse_date_day_month_abbrev() {
        assert_eq!(parse_date("1-Feb-26"), "2026-02-01");
        assert_eq!(parse_date("31-Jan-26"), "2026-01-31");
        assert_eq!(parse_date("15-Dec-2025"), "2025-12-15");
    }

    #[test]
    fn test_parse_date_numeric_dash() {
        assert_eq!(parse_date("05-02-2026"), "2026-02-05");
        assert_eq!(parse_date("5-2-2026"), "2026-02-05");
    }

    #[test]
    fn test_parse_date_quoted_input() {
        assert_eq!(parse_date("\"2/5/2026\""), "2026-02-05");
    }

    #[test]
    fn test_parse_date_invalid_returns_empty() {
        assert_eq!(parse_date(""), "");
        assert_eq!(parse_date("not a date"), "");
        assert_eq!(parse_date("13/45/2026"), "");
        assert_eq!(parse_date("2026-13-45"), "");
    }

    #[test]
    fn test_parse_csv_line_quotes_and_escapes() {
        assert_eq!(
            parse_csv_line("a,\"b,c\",\"d\"\"e\",f"),
            vec!["a", "b,c", "d\"e", "f"]
        );
    }

    #[test]
    fn test_parse_csv_line_plain_and_empty_fields() {
        assert_eq!(parse_csv_line("x,y,z"), vec!["x", "y", "z"]);
        assert_eq!(parse_csv_line("a,,c"), vec!["a", "", "c"]);
        assert_eq!(parse_csv_line(""), vec![""]);
    }

    #[test]
    fn test_parse_csv_line_trims_fields() {
        assert_eq!(parse_csv_line(" a , b "), vec!["a", "b"]);
    }
}
