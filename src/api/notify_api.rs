// ==========================================
// Kashi Kravings Dashboard - Notification Formatting
// ==========================================
// Pure message builders for the notification sink (Telegram HTML).
// This crate owns no transport: the sink receives finished strings.
// ==========================================

use crate::domain::store::STORES;
use crate::domain::summary::DashboardData;
use chrono::{NaiveDate, Utc};

/// Render an INR amount with Indian digit grouping and no decimals:
/// `format_inr(1234567.0) == "₹12,34,567"`.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();

    // Indian grouping: last three digits, then groups of two
    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        grouped.push(c);
        let remaining = len - i - 1;
        if remaining > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
    }

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Daily summary message for the notification sink, evaluated at
/// `today`. Pulls today's slice out of the dataset; stores with no
/// submission today are omitted from the per-store section.
pub fn format_daily_summary_message_at(data: &DashboardData, today: NaiveDate) -> String {
    let today_str = today.format("%Y-%m-%d").to_string();
    let today_display = today.format("%A, %-d %B %Y").to_string();

    let today_records: Vec<_> = data
        .sales_records
        .iter()
        .filter(|r| r.date == today_str)
        .collect();

    let today_revenue: f64 = today_records.iter().map(|r| r.sale_value).sum();
    let today_units: f64 = today_records.iter().map(|r| r.total_units()).sum();

    let store_lines: Vec<String> = data
        .store_summaries
        .iter()
        .filter(|s| today_records.iter().any(|r| r.location == s.store_code))
        .map(|s| {
            let revenue: f64 = today_records
                .iter()
                .filter(|r| r.location == s.store_code)
                .map(|r| r.sale_value)
                .sum();
            format!("  • {}: {}", s.store_name, format_inr(revenue))
        })
        .collect();

    let stores_summary = if store_lines.is_empty() {
        "  No sales recorded today".to_string()
    } else {
        store_lines.join("\n")
    };

    format!(
        "<b>🍫 Kashi Kravings Daily Report</b>\n\
         <i>{today_display}</i>\n\
         \n\
         <b>📊 Today's Summary</b>\n\
         ━━━━━━━━━━━━━━━━━━\n\
         💰 Revenue: {revenue}\n\
         📦 Units Sold: {units}\n\
         🏪 Active Stores: {active}/{store_total}\n\
         \n\
         <b>🏪 Store Performance</b>\n\
         ━━━━━━━━━━━━━━━━━━\n\
         {stores_summary}\n\
         \n\
         <b>📈 Overall Stats</b>\n\
         ━━━━━━━━━━━━━━━━━━\n\
         Total Revenue: {total_revenue}",
        today_display = today_display,
        revenue = format_inr(today_revenue),
        units = today_units,
        active = data.stores_active_today,
        store_total = STORES.len(),
        stores_summary = stores_summary,
        total_revenue = format_inr(data.total_revenue),
    )
}

/// Daily summary for the current date.
pub fn format_daily_summary_message(data: &DashboardData) -> String {
    format_daily_summary_message_at(data, Utc::now().date_naive())
}

/// Alert message with a per-kind icon; unknown kinds get the
/// generic loudspeaker.
pub fn format_alert_message(kind: &str, details: &str) -> String {
    let icon = match kind {
        "low_stock" => "⚠️",
        "high_outstanding" => "💳",
        "target_achieved" => "🎯",
        "new_sale" => "🛒",
        _ => "📢",
    };

    format!(
        "{icon} <b>Kashi Kravings Alert</b>\n\n{details}\n\n<i>{timestamp}</i>",
        icon = icon,
        details = details,
        timestamp = Utc::now().format("%d/%m/%Y %H:%M:%S"),
    )
}
