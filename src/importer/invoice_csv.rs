// ==========================================
// Kashi Kravings Dashboard - Invoice CSV Builder
// ==========================================
// Parses a MyBillBook invoice CSV export. The export carries a
// free-text preamble (business name, filter dates, blank lines)
// before the real header, so the builder scans for the line whose
// first field is exactly "Invoice No" and treats everything after it
// as data.
// ==========================================

use crate::domain::invoice::Invoice;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_parser::{parse_csv_line, parse_number};

/// Minimum field count for a well-formed data line.
const INVOICE_FIELD_COUNT: usize = 11;

/// Fixed column layout of the export, after the header row.
struct RawInvoiceRow<'a> {
    invoice_no: &'a str,
    invoice_date: &'a str,
    contact_name: &'a str,
    amount: &'a str,
    remaining_amount: &'a str,
    invoice_status: &'a str,
    due_date: &'a str,
    invoice_link: &'a str,
    payment_type: &'a str,
    party_category: &'a str,
    created_by: &'a str,
}

impl<'a> RawInvoiceRow<'a> {
    fn from_fields(fields: &'a [String]) -> Self {
        let field = |idx: usize| fields.get(idx).map(String::as_str).unwrap_or("");
        Self {
            invoice_no: field(0),
            invoice_date: field(1),
            contact_name: field(2),
            amount: field(3),
            remaining_amount: field(4),
            invoice_status: field(5),
            due_date: field(6),
            invoice_link: field(7),
            payment_type: field(8),
            party_category: field(9),
            created_by: field(10),
        }
    }
}

/// Parse a full CSV export into invoice records.
///
/// Data lines with fewer than 11 fields or an empty invoice number
/// are malformed and silently skipped; a missing header row is a
/// hard error (the upload is not an invoice export at all).
pub fn parse_invoice_csv(text: &str) -> ImportResult<Vec<Invoice>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let header_index = lines
        .iter()
        .position(|line| {
            parse_csv_line(line)
                .first()
                .is_some_and(|field| field == "Invoice No")
        })
        .ok_or(ImportError::HeaderNotFound)?;

    let mut invoices = Vec::new();
    for line in &lines[header_index + 1..] {
        let fields = parse_csv_line(line);
        if fields.len() < INVOICE_FIELD_COUNT || fields[0].is_empty() {
            continue;
        }
        invoices.push(build_invoice(&RawInvoiceRow::from_fields(&fields)));
    }

    Ok(invoices)
}

fn build_invoice(raw: &RawInvoiceRow<'_>) -> Invoice {
    Invoice {
        invoice_no: raw.invoice_no.to_string(),
        // Export dates stay DD/MM/YYYY; sorting parses them on demand
        invoice_date: raw.invoice_date.to_string(),
        contact_name: raw.contact_name.to_string(),
        amount: parse_number(raw.amount),
        remaining_amount: parse_number(raw.remaining_amount),
        invoice_status: raw.invoice_status.to_string(),
        due_date: raw.due_date.to_string(),
        invoice_link: raw.invoice_link.to_string(),
        payment_type: raw.payment_type.to_string(),
        party_category: raw.party_category.to_string(),
        created_by: raw.created_by.to_string(),
    }
}
