// ==========================================
// Kashi Kravings Dashboard - Sales Record
// ==========================================
// Canonical form of one promotional sales event at one store on one
// day, normalized from a raw form-submission row.
// ==========================================
// Invariants:
// - `date` is a valid ISO calendar date string (YYYY-MM-DD) or empty;
//   records with an empty date/location never reach the aggregators.
// - All numeric fields are finite and non-negative; unparsable cells
//   default to 0.
// ==========================================

use crate::domain::product::PRODUCT_COUNT;
use serde::{Deserialize, Serialize};

/// One normalized sales/promotion event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    /// Synthetic identity: "row-N" where N is the sheet row number
    pub id: String,
    /// Raw submission timestamp, kept verbatim
    pub timestamp: String,
    /// Normalized event date (YYYY-MM-DD), empty when unparsable
    pub date: String,
    /// Store code as entered in the form
    pub location: String,
    /// Resolved display name (falls back to the code)
    pub store_name: String,
    pub paan_l: f64,
    pub thandai_l: f64,
    pub gilori_l: f64,
    pub paan_s: f64,
    pub thandai_s: f64,
    pub gilori_s: f64,
    pub heritage_box9: f64,
    pub heritage_box15: f64,
    /// Billed value of the day's sales (INR)
    pub sale_value: f64,
    /// Payment actually received against the sale (INR)
    pub collection_received: f64,
    pub sample_given: f64,
    /// Promoters deployed for this event
    pub num_tso: f64,
    /// Promotion duration in hours
    pub promotion_duration: f64,
    pub sample_consumed: f64,
}

impl SalesRecord {
    /// Per-product unit counts in catalogue order
    /// (see domain::product::PRODUCTS).
    pub fn unit_counts(&self) -> [f64; PRODUCT_COUNT] {
        [
            self.paan_l,
            self.thandai_l,
            self.gilori_l,
            self.paan_s,
            self.thandai_s,
            self.gilori_s,
            self.heritage_box9,
            self.heritage_box15,
        ]
    }

    /// Total units across all eight catalogue SKUs.
    pub fn total_units(&self) -> f64 {
        self.unit_counts().iter().sum()
    }
}
