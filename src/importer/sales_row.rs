// ==========================================
// Kashi Kravings Dashboard - Sales Row Builder
// ==========================================
// Maps one raw form-submission row (positional string cells) onto a
// canonical SalesRecord. The column layout is fixed by the form; all
// positions are named in one place below so a column reorder is a
// single visible change here, not a silent misread scattered across
// the codebase.
// ==========================================

use crate::domain::sales::SalesRecord;
use crate::domain::store::store_name;
use crate::importer::field_parser::{parse_date, parse_number};

/// Fixed column layout of the "Form Responses" sheet. The header is
/// sheet row 1; data rows start at row 2.
struct RawSalesRow<'a> {
    timestamp: &'a str,
    date: &'a str,
    location: &'a str,
    paan_l: &'a str,
    thandai_l: &'a str,
    gilori_l: &'a str,
    paan_s: &'a str,
    thandai_s: &'a str,
    gilori_s: &'a str,
    heritage_box9: &'a str,
    heritage_box15: &'a str,
    sale_value: &'a str,
    collection_received: &'a str,
    sample_given: &'a str,
    num_tso: &'a str,
    promotion_duration: &'a str,
    sample_consumed: &'a str,
}

impl<'a> RawSalesRow<'a> {
    /// The single place that knows column positions. Short rows read
    /// missing trailing cells as empty (the sheet API drops them).
    fn from_cells(cells: &'a [String]) -> Self {
        let cell = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");
        Self {
            timestamp: cell(0),
            date: cell(1),
            location: cell(2),
            paan_l: cell(3),
            thandai_l: cell(4),
            gilori_l: cell(5),
            paan_s: cell(6),
            thandai_s: cell(7),
            gilori_s: cell(8),
            heritage_box9: cell(9),
            heritage_box15: cell(10),
            sale_value: cell(11),
            collection_received: cell(12),
            sample_given: cell(13),
            num_tso: cell(14),
            promotion_duration: cell(15),
            sample_consumed: cell(16),
        }
    }
}

/// Build one canonical record from a raw row.
///
/// `sheet_row` is the 1-based sheet row number (header = 1) and only
/// feeds the synthetic id. Unknown store codes keep the raw code as
/// the display name.
pub fn build_sales_record(cells: &[String], sheet_row: usize) -> SalesRecord {
    let raw = RawSalesRow::from_cells(cells);
    let location = raw.location.replace('"', "").trim().to_string();

    SalesRecord {
        id: format!("row-{}", sheet_row),
        timestamp: raw.timestamp.replace('"', ""),
        date: parse_date(raw.date),
        store_name: store_name(&location),
        location,
        paan_l: parse_number(raw.paan_l),
        thandai_l: parse_number(raw.thandai_l),
        gilori_l: parse_number(raw.gilori_l),
        paan_s: parse_number(raw.paan_s),
        thandai_s: parse_number(raw.thandai_s),
        gilori_s: parse_number(raw.gilori_s),
        heritage_box9: parse_number(raw.heritage_box9),
        heritage_box15: parse_number(raw.heritage_box15),
        sale_value: parse_number(raw.sale_value),
        collection_received: parse_number(raw.collection_received),
        sample_given: parse_number(raw.sample_given),
        num_tso: parse_number(raw.num_tso),
        promotion_duration: parse_number(raw.promotion_duration),
        sample_consumed: parse_number(raw.sample_consumed),
    }
}

/// Build the canonical record list from all raw data rows (header
/// already stripped by the row source). Records missing either a
/// parseable date or a location are dropped: both keys are required
/// for aggregation.
pub fn build_sales_records(rows: &[Vec<String>]) -> Vec<SalesRecord> {
    rows.iter()
        .enumerate()
        .map(|(index, cells)| build_sales_record(cells, index + 2))
        .filter(|record| !record.date.is_empty() && !record.location.is_empty())
        .collect()
}
