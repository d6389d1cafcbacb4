// ==========================================
// Kashi Kravings Dashboard - Invoice Persistence
// ==========================================
// Keyed blob store for the invoice ledger. Whole-map granularity,
// last-writer-wins: the engine assumes nothing stronger. The on-disk
// layout is a versioned envelope; legacy files that are a bare
// {invoiceNo: Invoice} map still load.
// ==========================================

use crate::domain::invoice::InvoiceMap;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current on-disk schema version.
pub const INVOICE_FILE_VERSION: u32 = 1;

/// Persistent keyed store for the invoice ledger.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Load the full ledger. A store that has never been written
    /// loads as an empty map; a corrupt store is a hard error.
    async fn load(&self) -> RepositoryResult<InvoiceMap>;

    /// Persist the full ledger, replacing whatever was there.
    async fn save(&self, invoices: &InvoiceMap) -> RepositoryResult<()>;
}

/// Versioned envelope written to disk.
#[derive(Debug, Serialize, Deserialize)]
struct InvoiceFile {
    version: u32,
    invoices: InvoiceMap,
}

/// JSON-file-backed invoice store.
pub struct FileInvoiceStore {
    path: PathBuf,
}

impl FileInvoiceStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Accept both the versioned envelope and the legacy bare map.
    fn parse_file(raw: &str) -> RepositoryResult<InvoiceMap> {
        if let Ok(file) = serde_json::from_str::<InvoiceFile>(raw) {
            if file.version > INVOICE_FILE_VERSION {
                return Err(RepositoryError::CorruptData(format!(
                    "invoice file version {} is newer than supported version {}",
                    file.version, INVOICE_FILE_VERSION
                )));
            }
            return Ok(file.invoices);
        }
        let legacy: InvoiceMap = serde_json::from_str(raw)?;
        Ok(legacy)
    }
}

#[async_trait]
impl InvoiceStore for FileInvoiceStore {
    async fn load(&self) -> RepositoryResult<InvoiceMap> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Self::parse_file(&raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(InvoiceMap::new()),
            Err(err) => Err(RepositoryError::FileReadError(err.to_string())),
        }
    }

    async fn save(&self, invoices: &InvoiceMap) -> RepositoryResult<()> {
        let file = InvoiceFile {
            version: INVOICE_FILE_VERSION,
            invoices: invoices.clone(),
        };
        let raw = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepositoryError::FileWriteError(e.to_string()))?;
            }
        }

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| RepositoryError::FileWriteError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), count = invoices.len(), "invoice ledger saved");
        Ok(())
    }
}
