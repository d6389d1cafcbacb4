// ==========================================
// Kashi Kravings Sales Dashboard - Console Entry
// ==========================================
// Wires the engine against the mock row source and prints the daily
// report. A deployment replaces MockRowSource with the live sheet
// transport and routes the message to the notification sink.
// ==========================================

use anyhow::Result;
use kk_dashboard::api::{format_daily_summary_message, format_inr, DashboardApi, InvoiceApi};
use kk_dashboard::config::Settings;
use kk_dashboard::engine::DatasetCache;
use kk_dashboard::repository::{FileInvoiceStore, MockRowSource};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    kk_dashboard::logging::init();

    tracing::info!("{} v{}", kk_dashboard::APP_NAME, kk_dashboard::VERSION);

    let settings = Settings::from_env();
    tracing::info!(ttl_secs = settings.cache_ttl_secs, "settings loaded");

    let cache = Arc::new(DatasetCache::new(
        Arc::new(MockRowSource::default()),
        settings.cache_ttl(),
    ));
    let dashboard = DashboardApi::new(Arc::clone(&cache));
    let invoices = InvoiceApi::new(Arc::new(FileInvoiceStore::new(&settings.invoice_file)));

    let data = dashboard.get_dashboard(false).await?;

    println!("{}", format_daily_summary_message(&data));
    println!();
    println!(
        "records={} revenue={} collection={} outstanding={} rate={:.1}%",
        data.sales_records.len(),
        format_inr(data.total_revenue),
        format_inr(data.total_collection),
        format_inr(data.total_outstanding),
        data.collection_rate,
    );

    let invoice_data = invoices.get_invoice_data().await?;
    println!(
        "invoices={} paid={} unpaid={} remaining={}",
        invoice_data.invoices.len(),
        invoice_data.paid_count,
        invoice_data.unpaid_count,
        format_inr(invoice_data.total_remaining),
    );

    Ok(())
}
