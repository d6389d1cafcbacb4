// ==========================================
// Kashi Kravings Dashboard - Store Catalogue
// ==========================================
// Static reference data: store code -> display name.
// Loaded once at compile time, immutable for the process lifetime.
// ==========================================

use serde::{Deserialize, Serialize};

/// A partner store where promotional sales events run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Stable identifier used in form submissions (e.g. "KK-TRM-01")
    pub code: String,
    /// Display label for dashboards and reports
    pub name: String,
}

/// Fixed store catalogue. Codes match the dropdown options of the
/// submission form; changing an entry here must be coordinated with
/// the form owner.
pub const STORES: [(&str, &str); 8] = [
    ("KK-TRM-01", "The Ram Bhandar"),
    ("KK-LC-02", "Lakshmi Chai"),
    ("KK-DC-06", "Deena Chaat"),
    ("KK-SJ-03", "Shree Ji"),
    ("KK-BL-04", "Blue Lassi"),
    ("KK-SL-05", "Siwon Lassi"),
    ("KK-PBC-07", "Popular Baati Chokha"),
    ("KK-GB-08", "GreenBerry"),
];

/// Resolve a store code to its display name.
///
/// Unknown codes fall back to the code itself so that a new store
/// added to the form before this table is updated still shows up in
/// the dashboard instead of failing the whole batch.
pub fn store_name(code: &str) -> String {
    STORES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Full catalogue as owned entities (for config/report consumers).
pub fn all_stores() -> Vec<Store> {
    STORES
        .iter()
        .map(|(code, name)| Store {
            code: (*code).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}
