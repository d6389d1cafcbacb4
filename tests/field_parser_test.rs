// ==========================================
// Kashi Kravings Dashboard - Field Parser Properties
// ==========================================
// The parsers are the blast shield between messy human input and the
// engine: these tests pin their totality and the exact normal forms.
// ==========================================

use kk_dashboard::importer::{parse_csv_line, parse_date, parse_number};

// ==========================================
// parse_number
// ==========================================

#[test]
fn parse_number_handles_currency_pollution() {
    assert_eq!(parse_number("₹1,234.50"), 1234.50);
    assert_eq!(parse_number("₹ 5,00,000"), 500000.0);
    assert_eq!(parse_number("\"1,200\""), 1200.0);
}

#[test]
fn parse_number_placeholder_values_are_zero() {
    assert_eq!(parse_number(""), 0.0);
    assert_eq!(parse_number("   "), 0.0);
    assert_eq!(parse_number("-"), 0.0);
}

#[test]
fn parse_number_is_total_and_non_negative() {
    // Every input, however broken, yields a finite number >= 0
    let hostile = [
        "abc", "12abc", "--", "1.2.3", "∞", "NaN", "nan", "-0.0", "-999", "1e309", "-1e309",
        "₹₹₹", "null", "undefined", "\"\"", "🍫", " - ",
    ];
    for raw in hostile {
        let value = parse_number(raw);
        assert!(value.is_finite(), "not finite for {:?}", raw);
        assert!(value >= 0.0, "negative for {:?}", raw);
    }
}

// ==========================================
// parse_date
// ==========================================

#[test]
fn parse_date_normalizes_all_four_shapes() {
    assert_eq!(parse_date("2026-02-05"), "2026-02-05"); // ISO passthrough
    assert_eq!(parse_date("2/5/2026"), "2026-02-05"); // M/D/YYYY
    assert_eq!(parse_date("1-Feb-26"), "2026-02-01"); // D-Mon-YY
    assert_eq!(parse_date("05-02-2026"), "2026-02-05"); // D-M-YYYY
}

#[test]
fn parse_date_month_abbreviation_table() {
    let cases = [
        ("15-Jan-26", "2026-01-15"),
        ("15-Feb-26", "2026-02-15"),
        ("15-Mar-26", "2026-03-15"),
        ("15-Apr-26", "2026-04-15"),
        ("15-May-26", "2026-05-15"),
        ("15-Jun-26", "2026-06-15"),
        ("15-Jul-26", "2026-07-15"),
        ("15-Aug-26", "2026-08-15"),
        ("15-Sep-26", "2026-09-15"),
        ("15-Oct-26", "2026-10-15"),
        ("15-Nov-26", "2026-11-15"),
        ("15-Dec-26", "2026-12-15"),
    ];
    for (raw, expected) in cases {
        assert_eq!(parse_date(raw), expected);
    }
}

#[test]
fn parse_date_rejects_impossible_calendar_dates() {
    assert_eq!(parse_date("2026-02-30"), "");
    assert_eq!(parse_date("31-Feb-26"), "");
    assert_eq!(parse_date("13/45/2026"), "");
}

#[test]
fn parse_date_unparsable_is_empty_never_panics() {
    for raw in ["", "  ", "soon", "2026", "1-2", "a-b-c", "//", "--", "🍫-🍫-🍫"] {
        assert_eq!(parse_date(raw), "");
    }
}

#[test]
fn parse_date_output_is_a_fixed_point() {
    // Normalizing an already-normalized date changes nothing
    for raw in ["2/5/2026", "1-Feb-26", "05-02-2026", "2026-02-05"] {
        let once = parse_date(raw);
        assert_eq!(parse_date(&once), once);
    }
}

// ==========================================
// parse_csv_line
// ==========================================

#[test]
fn parse_csv_line_reference_case() {
    assert_eq!(
        parse_csv_line("a,\"b,c\",\"d\"\"e\",f"),
        vec!["a", "b,c", "d\"e", "f"]
    );
}

#[test]
fn parse_csv_line_quoted_commas_stay_literal() {
    assert_eq!(
        parse_csv_line("INV-101,\"Chai, Lakshmi\",\"₹2,400\""),
        vec!["INV-101", "Chai, Lakshmi", "₹2,400"]
    );
}

#[test]
fn parse_csv_line_preserves_field_count() {
    assert_eq!(parse_csv_line(",,,").len(), 4);
    assert_eq!(parse_csv_line("one").len(), 1);
}
