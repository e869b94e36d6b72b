use rusqlite::Connection;
use uuid::Uuid;

use super::{query_set, StoredProcedure};
use crate::errors::Result;
use crate::read_model::dtos::OrderSummaryDto;
use crate::repo::columns::{timestamp_at, uuid_at, uuid_param};

/// `get_orders_for_customer_id(customer_id)`
///
/// One row per order with its line count, oldest first; ties broken by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetOrdersForCustomerId {
    pub customer_id: Uuid,
}

const SQL: &str = "
    SELECT o.id, o.order_number, o.created, COUNT(po.id)
    FROM orders o
    LEFT JOIN product_ordered po ON po.order_id = o.id
    WHERE o.customer_id = ?1
    GROUP BY o.id, o.order_number, o.created
    ORDER BY o.created, o.id";

impl StoredProcedure for GetOrdersForCustomerId {
    type Output = Vec<OrderSummaryDto>;

    fn name(&self) -> &'static str {
        "get_orders_for_customer_id"
    }

    fn execute(&self, conn: &Connection) -> Result<Self::Output> {
        query_set(conn, SQL, uuid_param(&self.customer_id), |row| {
            Ok(OrderSummaryDto {
                id: uuid_at(row, 0)?,
                order_number: row.get(1)?,
                created: timestamp_at(row, 2)?,
                line_count: row.get(3)?,
            })
        })
    }
}
