//! Seed digest
//!
//! A stable SHA-256 over the seed's content, independent of the order in which
//! entries appear in the file.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::seed::format::{SeedCustomer, SeedFile, SeedOrder, SeedProduct};
use orders_core::errors::{ExError, ExErrorKind};

#[derive(Serialize)]
struct CanonicalSeed<'a> {
    schema_version: u32,
    customers: Vec<&'a SeedCustomer>,
    products: Vec<&'a SeedProduct>,
    orders: Vec<&'a SeedOrder>,
}

/// Hex SHA-256 of the canonical JSON form of `seed`
///
/// Customers and orders are sorted by id and products by key; order lines keep
/// their file order because it is the order they are stored in.
pub fn compute_seed_digest(seed: &SeedFile) -> Result<String> {
    let mut customers: Vec<_> = seed.customers.iter().collect();
    customers.sort_by_key(|c| c.id);
    let mut products: Vec<_> = seed.products.iter().collect();
    products.sort_by_key(|p| p.id);
    let mut orders: Vec<_> = seed.orders.iter().collect();
    orders.sort_by_key(|o| o.id);

    let canonical = CanonicalSeed {
        schema_version: seed.schema_version,
        customers,
        products,
        orders,
    };

    let json = serde_json::to_vec(&canonical).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("seed_digest")
            .with_message(e.to_string())
    })?;

    Ok(hex::encode(Sha256::digest(&json)))
}
