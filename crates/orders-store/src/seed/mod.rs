//! Seed import
//!
//! - YAML seed schema
//! - Parser with validation
//! - Order-independent digest
//! - Transactional importer

pub mod digest;
pub mod format;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format::SeedFile;
pub use importer::{import_seed, import_seed_file, SeedSummary};
pub use parser::{parse_seed_file, parse_seed_str};
