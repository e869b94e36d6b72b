use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::product::ProductId;
use crate::errors::{OrderError, Result};

/// ProductOnOrder - one line of an order
///
/// `purchase_price` is the product's price when the order was placed and is
/// independent of later price changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOnOrder {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: ProductId,
    pub purchase_price: Decimal,
}

/// Order - a customer's purchase of one or more products
///
/// Orders are created once, with at least one line, and never modified. The
/// lines are owned by the order and exposed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Generated client-side before persistence
    pub id: Uuid,

    /// Owning customer
    pub customer_id: Uuid,

    /// Caller-supplied; uniqueness is not checked
    pub order_number: String,

    pub created: DateTime<Utc>,

    lines: Vec<ProductOnOrder>,
}

impl Order {
    /// Assemble an order from already-built parts
    ///
    /// # Errors
    ///
    /// `OutOfRange` when either id is nil or `lines` is empty.
    pub fn from_parts(
        id: Uuid,
        customer_id: Uuid,
        order_number: impl Into<String>,
        created: DateTime<Utc>,
        lines: Vec<ProductOnOrder>,
    ) -> Result<Self> {
        if id.is_nil() {
            return Err(OrderError::EmptyOrderId.into());
        }
        if customer_id.is_nil() {
            return Err(OrderError::EmptyCustomerId.into());
        }
        if lines.is_empty() {
            return Err(OrderError::NoLinesOnOrder.into());
        }

        Ok(Self {
            id,
            customer_id,
            order_number: order_number.into(),
            created,
            lines,
        })
    }

    pub fn lines(&self) -> &[ProductOnOrder] {
        &self.lines
    }

    /// Sum of line purchase prices
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.purchase_price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use std::str::FromStr;

    fn line(order_id: Uuid, product_id: ProductId, price: &str) -> ProductOnOrder {
        ProductOnOrder {
            id: Uuid::new_v4(),
            order_id,
            product_id,
            purchase_price: Decimal::from_str(price).unwrap(),
        }
    }

    #[test]
    fn test_from_parts_rejects_empty_lines() {
        let err = Order::from_parts(Uuid::new_v4(), Uuid::new_v4(), "0001", Utc::now(), vec![])
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::OutOfRange);
        assert_eq!(err.field(), Some("lines"));
    }

    #[test]
    fn test_total_sums_purchase_prices() {
        let id = Uuid::new_v4();
        let order = Order::from_parts(
            id,
            Uuid::new_v4(),
            "0001",
            Utc::now(),
            vec![line(id, 8, "14.99"), line(id, 9, "29.99")],
        )
        .unwrap();

        assert_eq!(order.total(), Decimal::from_str("44.98").unwrap());
        assert_eq!(order.lines().len(), 2);
    }
}
