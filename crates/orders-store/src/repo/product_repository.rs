//! Product lookups against the write store

use orders_core::model::{Product, ProductId};
use rusqlite::{params_from_iter, Connection, Row};
use std::collections::BTreeSet;

use super::columns::{decimal_at, timestamp_at};
use crate::errors::{from_rusqlite, Result};

const PRODUCT_COLUMNS: &str = "id, key, name, description, created, price";

/// Read access to the `product` table through a borrowed connection
pub struct ProductRepository<'c> {
    conn: &'c Connection,
}

impl<'c> ProductRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Products whose id is in `ids`, ordered by id
    ///
    /// Unknown ids are skipped and duplicates collapse, so the result can be
    /// shorter than `ids`. One placeholder is bound per distinct id; SQLite
    /// caps bound parameters at 32766.
    pub fn get_products_for_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
        let distinct: BTreeSet<ProductId> = ids.iter().copied().collect();
        if distinct.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; distinct.len()].join(", ");
        let sql = format!(
            "SELECT {} FROM product WHERE id IN ({}) ORDER BY id",
            PRODUCT_COLUMNS, placeholders
        );

        let mut stmt = self.conn.prepare(&sql).map_err(from_rusqlite)?;
        let products = stmt
            .query_map(params_from_iter(distinct.iter()), product_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        key: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        created: timestamp_at(row, 4)?,
        price: decimal_at(row, 5)?,
    })
}
