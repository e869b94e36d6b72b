//! Seed file schema
//!
//! A seed carries reference data (customers, products) and optionally
//! historical orders with explicit lines.

use chrono::{DateTime, Utc};
use orders_core::model::{Customer, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SEED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    /// Must equal `SEED_SCHEMA_VERSION`
    pub schema_version: u32,

    #[serde(default)]
    pub customers: Vec<SeedCustomer>,

    #[serde(default)]
    pub products: Vec<SeedProduct>,

    #[serde(default)]
    pub orders: Vec<SeedOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCustomer {
    pub id: Uuid,
    pub name: String,
    pub registered: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl SeedCustomer {
    pub fn to_customer(&self) -> Customer {
        Customer::new(self.id, self.name.as_str(), self.registered, self.active)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedProduct {
    pub id: ProductId,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created: DateTime<Utc>,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOrder {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub order_number: String,
    pub created: DateTime<Utc>,
    pub lines: Vec<SeedLine>,
}

/// A historical order line
///
/// Omitted ids are generated at import; an omitted price is the product's
/// price at import time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedLine {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub product_id: ProductId,
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
}
