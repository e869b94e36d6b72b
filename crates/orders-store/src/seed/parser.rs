//! Seed parser with validation
//!
//! Checks what can be checked without a database: schema version, unique ids
//! and keys, non-empty orders, and references between entries of the same
//! seed. References to rows already in the store are checked at import.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format::{SeedFile, SEED_SCHEMA_VERSION};

pub fn parse_seed_file(path: &Path) -> Result<SeedFile> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    parse_seed_str(&content)
}

pub fn parse_seed_str(content: &str) -> Result<SeedFile> {
    let seed: SeedFile = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &SeedFile) -> Result<()> {
    if seed.schema_version != SEED_SCHEMA_VERSION {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected {}",
            seed.schema_version, SEED_SCHEMA_VERSION
        )));
    }

    let mut customer_ids = HashSet::new();
    for customer in &seed.customers {
        if customer.id.is_nil() {
            return Err(seed_validation("Customer id must not be nil"));
        }
        if !customer_ids.insert(customer.id) {
            return Err(seed_validation(&format!(
                "Duplicate customer id {}",
                customer.id
            )));
        }
    }

    let mut product_ids = HashSet::new();
    let mut product_keys = HashSet::new();
    for product in &seed.products {
        if !product_ids.insert(product.id) {
            return Err(seed_validation(&format!(
                "Duplicate product id {}",
                product.id
            )));
        }
        if !product_keys.insert(product.key.as_str()) {
            return Err(seed_validation(&format!(
                "Duplicate product key {}",
                product.key
            )));
        }
    }

    let mut order_ids = HashSet::new();
    for order in &seed.orders {
        if !order_ids.insert(order.id) {
            return Err(seed_validation(&format!("Duplicate order id {}", order.id)));
        }
        if order.lines.is_empty() {
            return Err(seed_validation(&format!(
                "Order {} has no lines",
                order.id
            )));
        }
    }

    Ok(())
}
