// ==========================================
// Kashi Kravings Dashboard - Invoice Entities
// ==========================================
// Billing documents imported from MyBillBook CSV exports. Invoice
// dates are DD/MM/YYYY text and are deliberately kept verbatim (the
// export format, not ISO): sorting parses on demand instead.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status value with special meaning: anything else counts as unpaid.
pub const INVOICE_STATUS_PAID: &str = "Paid";

/// One billing document, keyed by its invoice number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_no: String,
    /// DD/MM/YYYY text, kept as exported
    pub invoice_date: String,
    pub contact_name: String,
    pub amount: f64,
    pub remaining_amount: f64,
    /// Free-form status string; only "Paid" is significant
    pub invoice_status: String,
    /// DD/MM/YYYY text, kept as exported
    pub due_date: String,
    pub invoice_link: String,
    pub payment_type: String,
    pub party_category: String,
    pub created_by: String,
}

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.invoice_status == INVOICE_STATUS_PAID
    }
}

/// Persisted invoice ledger: invoice number -> full record.
/// BTreeMap keeps the serialized file diff-stable across saves.
pub type InvoiceMap = BTreeMap<String, Invoice>;

/// Derived view over the invoice ledger. Re-derivable from the map at
/// any time; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    /// All invoices, sorted by invoice date descending
    pub invoices: Vec<Invoice>,
    pub total_amount: f64,
    pub total_remaining: f64,
    pub paid_count: usize,
    pub unpaid_count: usize,
}
