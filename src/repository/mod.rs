// ==========================================
// Kashi Kravings Dashboard - Repository Layer
// ==========================================
// Collaborator contracts (row source, invoice store) and the
// implementations this crate ships: the seeded mock source and the
// JSON-file invoice store. The live Google Sheets transport
// implements RowSource from its own crate/service.
// ==========================================

pub mod error;
pub mod invoice_store;
pub mod mock_source;
pub mod row_source;

// Re-export the repository surface
pub use error::{RepositoryError, RepositoryResult};
pub use invoice_store::{FileInvoiceStore, InvoiceStore, INVOICE_FILE_VERSION};
pub use mock_source::MockRowSource;
pub use row_source::{RawRow, RowSource};
