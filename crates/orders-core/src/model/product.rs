use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned sequential product key
pub type ProductId = i64;

/// Product - an item that can be placed on an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Sequential integer key
    pub id: ProductId,

    /// URL-style slug, e.g. `snapon-ratchet-ring-metric-10-21`
    pub key: String,

    pub name: String,

    pub description: String,

    pub created: DateTime<Utc>,

    /// Current unit price; order lines snapshot this at creation time
    pub price: Decimal,
}
