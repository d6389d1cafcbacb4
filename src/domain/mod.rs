// ==========================================
// Kashi Kravings Dashboard - Domain Layer
// ==========================================
// Entities and reference catalogues only. No parsing, no aggregation
// logic, no I/O: those live in importer/, engine/ and repository/.
// ==========================================

pub mod invoice;
pub mod product;
pub mod sales;
pub mod store;
pub mod summary;

// Re-export core types
pub use invoice::{Invoice, InvoiceData, InvoiceMap, INVOICE_STATUS_PAID};
pub use product::{Flavor, Product, Size, PRODUCTS, PRODUCT_COUNT};
pub use sales::SalesRecord;
pub use store::{all_stores, store_name, Store, STORES};
pub use summary::{DailySummary, DashboardData, ProductSummary, StoreSummary};
