use rusqlite::Connection;
use uuid::Uuid;

use super::{query_set, StoredProcedure};
use crate::errors::Result;
use crate::read_model::dtos::{CustomerDto, OrderDto, ProductOrderedDto};
use crate::repo::columns::{decimal_at, timestamp_at, uuid_at, uuid_param};

/// The three record sets describing one order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDetailsRecordSets {
    pub orders: Vec<OrderDto>,
    pub customers: Vec<CustomerDto>,
    pub products_ordered: Vec<ProductOrderedDto>,
}

/// `get_order_details_for_order_id(order_id)`
///
/// Returns the order row, the owning customer row and every line joined to
/// its product, lines in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetOrderDetailsForOrderId {
    pub order_id: Uuid,
}

const ORDERS_SQL: &str = "
    SELECT o.id, o.customer_id, o.order_number, o.created
    FROM orders o
    WHERE o.id = ?1";

const CUSTOMERS_SQL: &str = "
    SELECT c.id, c.name, c.registered, c.active
    FROM customer c
    JOIN orders o ON o.customer_id = c.id
    WHERE o.id = ?1";

const PRODUCTS_ORDERED_SQL: &str = "
    SELECT po.id, po.product_id, p.key, p.name, p.description, po.purchase_price
    FROM product_ordered po
    JOIN product p ON p.id = po.product_id
    WHERE po.order_id = ?1
    ORDER BY po.rowid";

impl StoredProcedure for GetOrderDetailsForOrderId {
    type Output = OrderDetailsRecordSets;

    fn name(&self) -> &'static str {
        "get_order_details_for_order_id"
    }

    fn execute(&self, conn: &Connection) -> Result<Self::Output> {
        let id = uuid_param(&self.order_id);

        let orders = query_set(conn, ORDERS_SQL, &id, |row| {
            Ok(OrderDto {
                id: uuid_at(row, 0)?,
                customer_id: uuid_at(row, 1)?,
                order_number: row.get(2)?,
                created: timestamp_at(row, 3)?,
            })
        })?;

        // Nothing else can match once the order is missing
        if orders.is_empty() {
            return Ok(OrderDetailsRecordSets::default());
        }

        let customers = query_set(conn, CUSTOMERS_SQL, &id, |row| {
            Ok(CustomerDto {
                id: uuid_at(row, 0)?,
                name: row.get(1)?,
                registered: timestamp_at(row, 2)?,
                active: row.get(3)?,
            })
        })?;

        let products_ordered = query_set(conn, PRODUCTS_ORDERED_SQL, &id, |row| {
            Ok(ProductOrderedDto {
                id: uuid_at(row, 0)?,
                product_id: row.get(1)?,
                key: row.get(2)?,
                name: row.get(3)?,
                description: row.get(4)?,
                purchase_price: decimal_at(row, 5)?,
            })
        })?;

        Ok(OrderDetailsRecordSets {
            orders,
            customers,
            products_ordered,
        })
    }
}
