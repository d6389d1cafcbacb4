// ==========================================
// Kashi Kravings Dashboard - Product Catalogue
// ==========================================
// Fixed 8-item SKU catalogue: two sizes of three flavours plus two
// gift-box assortments. Catalogue order is load-bearing: the product
// aggregator and the sales-row column mapping both index by it.
// ==========================================

use serde::{Deserialize, Serialize};

/// Paan-sweet flavour line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flavor {
    Paan,
    Thandai,
    Gilori,
}

/// Retail pack size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    L,
    S,
}

/// One catalogue SKU. The catalogue is static reference data, so
/// this only serializes (summaries own the deserializable view).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_gift_box: bool,
}

/// Number of catalogue SKUs (also the arity of per-record unit counts).
pub const PRODUCT_COUNT: usize = 8;

/// Declared catalogue order. Must stay in sync with the form's product
/// column order (see importer::sales_row).
pub const PRODUCTS: [Product; PRODUCT_COUNT] = [
    Product {
        name: "Paan (L)",
        flavor: Some(Flavor::Paan),
        size: Some(Size::L),
        is_gift_box: false,
    },
    Product {
        name: "Thandai (L)",
        flavor: Some(Flavor::Thandai),
        size: Some(Size::L),
        is_gift_box: false,
    },
    Product {
        name: "Gilori (L)",
        flavor: Some(Flavor::Gilori),
        size: Some(Size::L),
        is_gift_box: false,
    },
    Product {
        name: "Paan (S)",
        flavor: Some(Flavor::Paan),
        size: Some(Size::S),
        is_gift_box: false,
    },
    Product {
        name: "Thandai (S)",
        flavor: Some(Flavor::Thandai),
        size: Some(Size::S),
        is_gift_box: false,
    },
    Product {
        name: "Gilori (S)",
        flavor: Some(Flavor::Gilori),
        size: Some(Size::S),
        is_gift_box: false,
    },
    Product {
        name: "Heritage Box (9)",
        flavor: None,
        size: None,
        is_gift_box: true,
    },
    Product {
        name: "Heritage Box (15)",
        flavor: None,
        size: None,
        is_gift_box: true,
    },
];
