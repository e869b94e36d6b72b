//! Seed importer
//!
//! Imports a parsed seed in one transaction: customers and products are
//! upserted, historical orders are inserted once and skipped on re-import.

use orders_core::logging_facility::elapsed_ms;
use orders_core::model::{Customer, Order, ProductOnOrder};
use orders_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, OptionalExtension, Transaction};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use uuid::Uuid;

use crate::errors::{from_rusqlite, seed_validation, Result};
use crate::repo::columns::{decimal_param, timestamp_param, uuid_param};
use crate::repo::{insert_order_tx, ProductRepository};
use crate::seed::digest::compute_seed_digest;
use crate::seed::format::{SeedFile, SeedOrder, SeedProduct};
use crate::seed::parser::parse_seed_file;

/// What an import did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub digest: String,
    pub customers: usize,
    pub products: usize,
    pub orders_imported: usize,
    pub orders_skipped: usize,
}

/// Parse and import the seed file at `path`
pub fn import_seed_file(path: &Path, conn: &mut Connection) -> Result<SeedSummary> {
    let seed = parse_seed_file(path)?;
    import_seed(&seed, conn)
}

/// Import an already-parsed seed
///
/// Either the whole seed lands or none of it does.
pub fn import_seed(seed: &SeedFile, conn: &mut Connection) -> Result<SeedSummary> {
    log_op_start!(
        "seed_import",
        customer_count = seed.customers.len(),
        product_count = seed.products.len()
    );
    let start = Instant::now();

    let result = (|| -> Result<SeedSummary> {
        let digest = compute_seed_digest(seed)?;
        let tx = conn.transaction().map_err(from_rusqlite)?;

        for seed_customer in &seed.customers {
            upsert_customer_tx(&tx, &seed_customer.to_customer())?;
        }
        for product in &seed.products {
            upsert_product_tx(&tx, product)?;
        }

        let mut orders_imported = 0;
        let mut orders_skipped = 0;
        for seed_order in &seed.orders {
            if order_exists(&tx, seed_order.id)? {
                orders_skipped += 1;
                continue;
            }
            let order = build_order(&tx, seed_order)?;
            insert_order_tx(&tx, &order)?;
            orders_imported += 1;
        }

        tx.commit().map_err(from_rusqlite)?;

        Ok(SeedSummary {
            digest,
            customers: seed.customers.len(),
            products: seed.products.len(),
            orders_imported,
            orders_skipped,
        })
    })();

    match &result {
        Ok(summary) => {
            log_op_end!(
                "seed_import",
                duration_ms = elapsed_ms(start),
                orders_imported = summary.orders_imported,
                orders_skipped = summary.orders_skipped
            );
        }
        Err(e) => {
            log_op_error!("seed_import", e.clone(), duration_ms = elapsed_ms(start));
        }
    }

    result
}

fn upsert_customer_tx(tx: &Transaction, customer: &Customer) -> Result<()> {
    tx.execute(
        "INSERT INTO customer (id, name, registered, active)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            registered = excluded.registered,
            active = excluded.active",
        rusqlite::params![
            uuid_param(&customer.id),
            customer.name,
            timestamp_param(&customer.registered),
            customer.active,
        ],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

fn upsert_product_tx(tx: &Transaction, product: &SeedProduct) -> Result<()> {
    tx.execute(
        "INSERT INTO product (id, key, name, description, created, price)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            key = excluded.key,
            name = excluded.name,
            description = excluded.description,
            created = excluded.created,
            price = excluded.price",
        rusqlite::params![
            product.id,
            product.key,
            product.name,
            product.description,
            timestamp_param(&product.created),
            decimal_param(&product.price),
        ],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

fn order_exists(tx: &Transaction, id: Uuid) -> Result<bool> {
    let found: Option<i64> = tx
        .query_row(
            "SELECT 1 FROM orders WHERE id = ?1",
            [uuid_param(&id)],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;
    Ok(found.is_some())
}

fn customer_exists(tx: &Transaction, id: Uuid) -> Result<bool> {
    let found: Option<i64> = tx
        .query_row(
            "SELECT 1 FROM customer WHERE id = ?1",
            [uuid_param(&id)],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;
    Ok(found.is_some())
}

/// Resolve a seed order against the store as it stands inside `tx`
fn build_order(tx: &Transaction, seed_order: &SeedOrder) -> Result<Order> {
    if !customer_exists(tx, seed_order.customer_id)? {
        return Err(seed_validation(&format!(
            "Order {} references unknown customer {}",
            seed_order.id, seed_order.customer_id
        )));
    }

    let product_ids: Vec<_> = seed_order.lines.iter().map(|l| l.product_id).collect();
    let prices: HashMap<_, _> = ProductRepository::new(tx)
        .get_products_for_ids(&product_ids)?
        .into_iter()
        .map(|p| (p.id, p.price))
        .collect();

    let mut lines = Vec::with_capacity(seed_order.lines.len());
    for seed_line in &seed_order.lines {
        let current_price = prices.get(&seed_line.product_id).ok_or_else(|| {
            seed_validation(&format!(
                "Order {} references unknown product {}",
                seed_order.id, seed_line.product_id
            ))
        })?;
        lines.push(ProductOnOrder {
            id: seed_line.id.unwrap_or_else(Uuid::new_v4),
            order_id: seed_order.id,
            product_id: seed_line.product_id,
            purchase_price: seed_line.purchase_price.unwrap_or(*current_price),
        });
    }

    Order::from_parts(
        seed_order.id,
        seed_order.customer_id,
        seed_order.order_number.as_str(),
        seed_order.created,
        lines,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations;
    use crate::seed::parser::parse_seed_str;
    use orders_core::errors::ExErrorKind;
    use std::path::PathBuf;

    fn setup_test_db() -> Connection {
        let mut conn = crate::db::open_in_memory().unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    fn count(conn: &Connection, table: &str) -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
        .unwrap()
    }

    #[test]
    fn test_import_fixture_seed() {
        let mut conn = setup_test_db();

        let summary = import_seed_file(&fixtures_dir().join("seed.yaml"), &mut conn).unwrap();

        assert_eq!(summary.orders_imported, 1);
        assert_eq!(count(&conn, "customer"), summary.customers as i64);
        assert_eq!(count(&conn, "product"), summary.products as i64);
        assert_eq!(count(&conn, "product_ordered"), 3);
    }

    #[test]
    fn test_customer_rows_match_seed_entities() {
        let mut conn = setup_test_db();
        let seed = parse_seed_file(&fixtures_dir().join("seed.yaml")).unwrap();

        import_seed(&seed, &mut conn).unwrap();

        for seed_customer in &seed.customers {
            let expected = seed_customer.to_customer();
            let (name, registered, active): (String, i64, bool) = conn
                .query_row(
                    "SELECT name, registered, active FROM customer WHERE id = ?1",
                    [uuid_param(&expected.id)],
                    |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
                )
                .unwrap();
            assert_eq!(name, expected.name);
            assert_eq!(registered, timestamp_param(&expected.registered));
            assert_eq!(active, expected.active);
        }
        assert!(seed.customers.iter().any(|c| !c.active));
    }

    #[test]
    fn test_reimport_skips_existing_orders() {
        let mut conn = setup_test_db();
        let path = fixtures_dir().join("seed.yaml");

        let first = import_seed_file(&path, &mut conn).unwrap();
        let second = import_seed_file(&path, &mut conn).unwrap();

        assert_eq!(first.digest, second.digest);
        assert_eq!(second.orders_imported, 0);
        assert_eq!(second.orders_skipped, 1);
        assert_eq!(count(&conn, "product_ordered"), 3);
    }

    #[test]
    fn test_unknown_product_aborts_whole_import() {
        let mut conn = setup_test_db();
        let seed = parse_seed_str(
            r#"
schema_version: 1
customers:
  - id: 17e3a22e-07e5-4ab2-8e62-1b15f9916909
    name: Mike Finnegan
    registered: "1961-01-19T00:00:00Z"
orders:
  - id: 4a61a22a-bade-d780-bbfa-be19c7746d87
    customer_id: 17e3a22e-07e5-4ab2-8e62-1b15f9916909
    order_number: "0000001"
    created: "2016-01-02T11:08:34Z"
    lines:
      - product_id: 404
"#,
        )
        .unwrap();

        let err = import_seed(&seed, &mut conn).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
        assert!(err.message().contains("unknown product 404"));
        assert_eq!(count(&conn, "customer"), 0);
    }
}
