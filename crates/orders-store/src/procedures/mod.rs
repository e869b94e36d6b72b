//! Named read queries
//!
//! Each procedure is a parameterised query that can return several record
//! sets. Procedures only read; `ReadContext::execute` supplies the
//! transaction.

pub mod get_order_details_for_order_id;
pub mod get_orders_for_customer_id;

pub use get_order_details_for_order_id::{GetOrderDetailsForOrderId, OrderDetailsRecordSets};
pub use get_orders_for_customer_id::GetOrdersForCustomerId;

use rusqlite::Connection;

use crate::errors::Result;

pub trait StoredProcedure {
    /// The record sets the procedure returns
    type Output;

    fn name(&self) -> &'static str;

    fn execute(&self, conn: &Connection) -> Result<Self::Output>;
}

/// Collect every row of `sql` bound to a single parameter
pub(crate) fn query_set<T, P, F>(conn: &Connection, sql: &str, param: P, map: F) -> Result<Vec<T>>
where
    P: rusqlite::ToSql,
    F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
{
    use crate::errors::from_rusqlite;

    let mut stmt = conn.prepare_cached(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([param], map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}
