//! Schema bootstrap
//!
//! - Explicit entity-to-table mapping list
//! - Runner with checksums and idempotent re-application
//! - DDL embedded at compile time

mod checksums;
mod mapping;
mod runner;

pub use checksums::compute_checksum;
pub use mapping::{order_store_mappings, TableMapping};
pub use runner::{apply_migrations, apply_schema, applied_migrations};
