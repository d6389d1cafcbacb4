// ==========================================
// Kashi Kravings Dashboard - Invoice API
// ==========================================
// Upload + query surface over the invoice ledger: parse the CSV
// export, merge onto the persisted map, save, report counts.
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::invoice::InvoiceData;
use crate::engine::invoice_merger::{build_invoice_data, merge_invoices};
use crate::importer::parse_invoice_csv;
use crate::repository::invoice_store::InvoiceStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of one CSV upload, reported back to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    pub added: usize,
    pub updated: usize,
    /// Ledger size after the merge
    pub total: usize,
}

/// Invoice ledger API.
pub struct InvoiceApi {
    store: Arc<dyn InvoiceStore>,
}

impl InvoiceApi {
    pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
        Self { store }
    }

    /// Derived invoice view (sorted list + totals + paid/unpaid split).
    pub async fn get_invoice_data(&self) -> ApiResult<InvoiceData> {
        let ledger = self.store.load().await?;
        Ok(build_invoice_data(&ledger))
    }

    /// Apply one CSV export to the ledger.
    ///
    /// Re-uploaded invoice numbers overwrite their existing entries
    /// entirely (last write wins).
    pub async fn upload_csv(&self, csv_text: &str) -> ApiResult<UploadSummary> {
        let rows = parse_invoice_csv(csv_text)?;
        let mut ledger = self.store.load().await?;

        let counts = merge_invoices(&mut ledger, rows);
        self.store.save(&ledger).await?;

        tracing::info!(
            added = counts.added,
            updated = counts.updated,
            total = ledger.len(),
            "invoice CSV merged"
        );

        Ok(UploadSummary {
            added: counts.added,
            updated: counts.updated,
            total: ledger.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::invoice_store::FileInvoiceStore;

    const CSV_V1: &str = "\
Invoice No,Invoice Date,Contact Name,Amount,Remaining Amount,Invoice Status,Due Date,Invoice Link,Payment Type,Party Category,Created By
INV-001,05/02/2026,Shree Ji,1000,0,Paid,12/02/2026,,UPI,Retail,admin
INV-002,06/02/2026,Blue Lassi,2000,2000,Unpaid,13/02/2026,,Cash,Retail,admin
";

    const CSV_V2: &str = "\
Invoice No,Invoice Date,Contact Name,Amount,Remaining Amount,Invoice Status,Due Date,Invoice Link,Payment Type,Party Category,Created By
INV-002,06/02/2026,Blue Lassi,2000,0,Paid,13/02/2026,,Cash,Retail,admin
INV-003,07/02/2026,GreenBerry,750,750,Unpaid,14/02/2026,,UPI,Retail,admin
";

    #[tokio::test]
    async fn test_upload_then_reupload_counts() {
        let dir = tempfile::tempdir().unwrap();
        let api = InvoiceApi::new(Arc::new(FileInvoiceStore::new(
            dir.path().join("invoices.json"),
        )));

        let first = api.upload_csv(CSV_V1).await.unwrap();
        assert_eq!((first.added, first.updated, first.total), (2, 0, 2));

        let second = api.upload_csv(CSV_V2).await.unwrap();
        assert_eq!((second.added, second.updated, second.total), (1, 1, 3));

        let data = api.get_invoice_data().await.unwrap();
        assert_eq!(data.paid_count, 2);
        assert_eq!(data.unpaid_count, 1);
        assert_eq!(data.total_remaining, 750.0);
    }

    #[tokio::test]
    async fn test_upload_without_header_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let api = InvoiceApi::new(Arc::new(FileInvoiceStore::new(
            dir.path().join("invoices.json"),
        )));

        assert!(api.upload_csv("random,text\n1,2\n").await.is_err());
        // Rejected upload must not have created the ledger file
        assert!(api.get_invoice_data().await.unwrap().invoices.is_empty());
    }
}
