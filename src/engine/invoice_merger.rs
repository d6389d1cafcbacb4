// ==========================================
// Kashi Kravings Dashboard - Invoice Merger
// ==========================================
// Applies newly parsed invoice rows onto the persisted ledger.
// Merge semantics are deliberately simple: whole-record overwrite
// keyed by invoice number, last write wins. No field-level
// reconciliation, no conflict detection, no versioning.
// ==========================================

use crate::domain::invoice::{Invoice, InvoiceData, InvoiceMap};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of one merge pass, reported back to the uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeCounts {
    pub added: usize,
    pub updated: usize,
}

/// Merge parsed rows into the ledger.
///
/// An invoice number already present is overwritten entirely and
/// counted as updated; a new number is inserted and counted as added.
pub fn merge_invoices(ledger: &mut InvoiceMap, rows: Vec<Invoice>) -> MergeCounts {
    let mut counts = MergeCounts {
        added: 0,
        updated: 0,
    };

    for invoice in rows {
        if ledger.contains_key(&invoice.invoice_no) {
            counts.updated += 1;
        } else {
            counts.added += 1;
        }
        ledger.insert(invoice.invoice_no.clone(), invoice);
    }

    counts
}

/// Derive the dashboard view from the current ledger.
///
/// Pure function of the map - re-derivable at any time without
/// replaying upload history. Invoices sort by invoice date
/// descending (DD/MM/YYYY, parsed on demand); unparsable dates sort
/// last. Any status other than exactly "Paid" counts as unpaid.
pub fn build_invoice_data(ledger: &InvoiceMap) -> InvoiceData {
    let mut invoices: Vec<Invoice> = ledger.values().cloned().collect();
    invoices.sort_by(|a, b| invoice_sort_key(b).cmp(&invoice_sort_key(a)));

    let mut total_amount = 0.0;
    let mut total_remaining = 0.0;
    let mut paid_count = 0;
    let mut unpaid_count = 0;

    for invoice in &invoices {
        total_amount += invoice.amount;
        total_remaining += invoice.remaining_amount;
        if invoice.is_paid() {
            paid_count += 1;
        } else {
            unpaid_count += 1;
        }
    }

    InvoiceData {
        invoices,
        total_amount,
        total_remaining,
        paid_count,
        unpaid_count,
    }
}

/// DD/MM/YYYY export dates parsed for ordering only.
fn invoice_sort_key(invoice: &Invoice) -> NaiveDate {
    NaiveDate::parse_from_str(&invoice.invoice_date, "%d/%m/%Y").unwrap_or(NaiveDate::MIN)
}
