//! Order factory
//!
//! Pure construction of new orders and their lines. Nothing here touches the
//! store or the clock except `create_order_from`, which stamps the creation
//! time at millisecond precision, the precision the store keeps.

use chrono::{SubsecRound, Utc};
use uuid::Uuid;

use crate::errors::Result;
use crate::model::{Order, Product, ProductOnOrder};

/// Generate a fresh random order id
///
/// Ids are UUID v4; collisions are not checked.
pub fn create_new_order_id() -> Uuid {
    Uuid::new_v4()
}

/// Build one order line per product, capturing each product's current price
///
/// Lines come back in the order of `products`. An empty slice yields no lines.
pub fn create_products_on_order(order_id: Uuid, products: &[Product]) -> Vec<ProductOnOrder> {
    products
        .iter()
        .map(|product| ProductOnOrder {
            id: Uuid::new_v4(),
            order_id,
            product_id: product.id,
            purchase_price: product.price,
        })
        .collect()
}

/// Create a new order stamped with the current UTC time
///
/// # Arguments
/// * `order_id` - Id from `create_new_order_id` (must not be nil)
/// * `customer_id` - Owning customer (must not be nil)
/// * `order_number` - Caller-supplied order number
/// * `lines` - Lines built by `create_products_on_order` (must not be empty)
///
/// # Errors
/// * `OutOfRange` - nil `order_id`, nil `customer_id`, or no lines
pub fn create_order_from(
    order_id: Uuid,
    customer_id: Uuid,
    order_number: &str,
    lines: &[ProductOnOrder],
) -> Result<Order> {
    Order::from_parts(
        order_id,
        customer_id,
        order_number,
        Utc::now().trunc_subsecs(3),
        lines.to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn product(id: i64, price: &str) -> Product {
        Product {
            id,
            key: format!("product-{}", id),
            name: format!("Product {}", id),
            description: String::new(),
            created: Utc::now(),
            price: Decimal::from_str(price).unwrap(),
        }
    }

    #[test]
    fn test_lines_capture_price_and_order_id() {
        let order_id = create_new_order_id();
        let lines = create_products_on_order(order_id, &[product(8, "14.99"), product(9, "29.99")]);

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.order_id == order_id));
        assert_eq!(lines[0].product_id, 8);
        assert_eq!(lines[0].purchase_price, Decimal::from_str("14.99").unwrap());
        assert_eq!(lines[1].product_id, 9);
        assert_ne!(lines[0].id, lines[1].id);
    }

    #[test]
    fn test_no_products_no_lines() {
        assert!(create_products_on_order(create_new_order_id(), &[]).is_empty());
    }

    #[test]
    fn test_nil_order_id_is_out_of_range() {
        let lines = create_products_on_order(Uuid::nil(), &[product(1, "1.00")]);
        let err = create_order_from(Uuid::nil(), Uuid::new_v4(), "0001", &lines).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::OutOfRange);
        assert_eq!(err.field(), Some("order_id"));
    }

    #[test]
    fn test_nil_customer_id_is_out_of_range() {
        let order_id = create_new_order_id();
        let lines = create_products_on_order(order_id, &[product(1, "1.00")]);
        let err = create_order_from(order_id, Uuid::nil(), "0001", &lines).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::OutOfRange);
        assert_eq!(err.field(), Some("customer_id"));
    }

    #[test]
    fn test_lines_are_copied_into_order() {
        let order_id = create_new_order_id();
        let mut lines = create_products_on_order(order_id, &[product(1, "1.00")]);
        let order = create_order_from(order_id, Uuid::new_v4(), "0001", &lines).unwrap();

        lines.clear();
        assert_eq!(order.lines().len(), 1);
    }

    #[test]
    fn test_created_has_whole_milliseconds() {
        let order_id = create_new_order_id();
        let lines = create_products_on_order(order_id, &[product(1, "1.00")]);
        let order = create_order_from(order_id, Uuid::new_v4(), "0001", &lines).unwrap();

        assert_eq!(order.created.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
