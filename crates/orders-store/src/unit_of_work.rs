//! Unit of work for the order write path
//!
//! A unit of work owns one connection for its lifetime. Repositories borrow
//! that connection; new orders are staged in memory and written in a single
//! transaction by `complete`. Dropping the unit releases the connection and
//! discards anything not yet completed.

use orders_core::logging_facility::elapsed_ms;
use orders_core::model::Order;
use orders_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::time::Instant;

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::repo::{insert_order_tx, OrderRepository, ProductRepository};

pub struct UnitOfWork {
    conn: Connection,
    staged: Vec<Order>,
}

impl UnitOfWork {
    /// Open a fresh connection for this unit
    pub fn open(config: &StoreConfig) -> Result<Self> {
        Ok(Self::from_connection(db::open(config)?))
    }

    /// Wrap an already-configured connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            staged: Vec::new(),
        }
    }

    pub fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(&self.conn)
    }

    pub fn orders(&mut self) -> OrderRepository<'_> {
        OrderRepository::new(&mut self.staged)
    }

    /// Write every staged order and its lines in one transaction
    ///
    /// Returns the number of orders written. On error the transaction is rolled
    /// back, nothing is persisted, and the driver's error is returned as a
    /// `Persistence` error with its message intact.
    pub fn complete(&mut self) -> Result<usize> {
        let count = self.staged.len();
        log_op_start!("unit_of_work_complete", order_count = count);
        let start = Instant::now();

        let result = (|| -> Result<usize> {
            let tx = self.conn.transaction().map_err(from_rusqlite)?;
            for order in &self.staged {
                insert_order_tx(&tx, order)?;
            }
            tx.commit().map_err(from_rusqlite)?;
            Ok(count)
        })();

        match &result {
            Ok(written) => {
                self.staged.clear();
                log_op_end!(
                    "unit_of_work_complete",
                    duration_ms = elapsed_ms(start),
                    order_count = *written
                );
            }
            Err(e) => {
                log_op_error!(
                    "unit_of_work_complete",
                    e.clone(),
                    duration_ms = elapsed_ms(start)
                );
            }
        }

        result
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        if !self.staged.is_empty() {
            tracing::debug!(
                discarded = self.staged.len(),
                "unit of work dropped with uncommitted orders"
            );
        }
        tracing::trace!("unit of work connection released");
    }
}
