//! Read-side data shapes
//!
//! DTOs are built per query from procedure record sets and never written back.

use chrono::{DateTime, Utc};
use orders_core::model::ProductId;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// A row of the Orders record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub order_number: String,
    pub created: DateTime<Utc>,
}

/// A row of the Customers record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerDto {
    pub id: Uuid,
    pub name: String,
    pub registered: DateTime<Utc>,
    pub active: bool,
}

/// A row of the ProductsOrdered record set: one order line with its product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOrderedDto {
    /// Line id
    pub id: Uuid,
    pub product_id: ProductId,
    pub key: String,
    pub name: String,
    pub description: String,
    pub purchase_price: Decimal,
}

/// One order flattened from the three record sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetailsDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub order_number: String,
    pub created: DateTime<Utc>,
    /// `None` only if the Customers record set came back empty
    pub customer: Option<CustomerDto>,
    pub products_ordered: Vec<ProductOrderedDto>,
}

/// One order in a customer's order history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummaryDto {
    pub id: Uuid,
    pub order_number: String,
    pub created: DateTime<Utc>,
    pub line_count: i64,
}
