// ==========================================
// Kashi Kravings Sales Dashboard - Core Library
// ==========================================
// Normalization & aggregation engine for the retail sales dashboard:
// messy form-submission rows and invoice CSV exports in, a
// consistent query-ready dataset out, behind a bounded-staleness
// cache. Transport (sheet API, HTTP, Telegram) lives outside.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities & catalogues
pub mod domain;

// Importer layer - field parsers & record builders
pub mod importer;

// Engine layer - aggregation, cache, invoice merge
pub mod engine;

// Repository layer - collaborator contracts & file store
pub mod repository;

// API layer - business interface
pub mod api;

// Settings
pub mod config;

// Logging setup
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain entities
pub use domain::{
    DailySummary, DashboardData, Invoice, InvoiceData, InvoiceMap, ProductSummary, SalesRecord,
    Store, StoreSummary,
};

// Engine
pub use engine::{DatasetCache, MergeCounts, DEFAULT_CACHE_TTL};

// Repository contracts
pub use repository::{FileInvoiceStore, InvoiceStore, MockRowSource, RowSource};

// API
pub use api::{DashboardApi, InvoiceApi, UploadSummary};

// Settings
pub use config::Settings;

// ==========================================
// Crate constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Kashi Kravings Sales Dashboard";
