//! Order persistence for the write path
//!
//! Orders are staged in memory by the unit of work and written only when it
//! completes.

use orders_core::model::Order;
use rusqlite::Transaction;

use super::columns::{decimal_param, timestamp_param, uuid_param};
use crate::errors::{from_rusqlite, Result};

/// Collection-style access to orders pending in a unit of work
pub struct OrderRepository<'u> {
    staged: &'u mut Vec<Order>,
}

impl<'u> OrderRepository<'u> {
    pub(crate) fn new(staged: &'u mut Vec<Order>) -> Self {
        Self { staged }
    }

    /// Register a new order for insertion on commit
    pub fn add(&mut self, order: Order) {
        self.staged.push(order);
    }

    pub fn pending(&self) -> &[Order] {
        self.staged
    }
}

/// Insert an order row and its line rows within a transaction
///
/// Lines are inserted in the order's line order, which is the order the read
/// side returns them in.
pub fn insert_order_tx(tx: &Transaction, order: &Order) -> Result<()> {
    tx.execute(
        "INSERT INTO orders (id, customer_id, order_number, created) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            uuid_param(&order.id),
            uuid_param(&order.customer_id),
            order.order_number,
            timestamp_param(&order.created),
        ],
    )
    .map_err(from_rusqlite)?;

    let mut stmt = tx
        .prepare_cached(
            "INSERT INTO product_ordered (id, order_id, product_id, purchase_price)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .map_err(from_rusqlite)?;

    for line in order.lines() {
        stmt.execute(rusqlite::params![
            uuid_param(&line.id),
            uuid_param(&line.order_id),
            line.product_id,
            decimal_param(&line.purchase_price),
        ])
        .map_err(from_rusqlite)?;
    }

    Ok(())
}
