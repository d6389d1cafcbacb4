// ==========================================
// Kashi Kravings Dashboard - Importer Layer
// ==========================================
// Field parsers (cell text -> typed primitives) and record builders
// (raw rows -> canonical records). Pure: no I/O, no state.
// ==========================================

pub mod error;
pub mod field_parser;
pub mod invoice_csv;
pub mod sales_row;

// Re-export the import surface
pub use error::{ImportError, ImportResult};
pub use field_parser::{parse_csv_line, parse_date, parse_number};
pub use invoice_csv::parse_invoice_csv;
pub use sales_row::{build_sales_record, build_sales_records};
