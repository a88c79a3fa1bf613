//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as delivered by the catalog.
///
/// Field names match the product API's JSON exactly. Unknown fields (the API
/// also sends a `rating` object) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Long-form description shown in the detail view.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Image URI.
    pub image: String,
}
