//! Error handling for orders-store
//!
//! Store failures all surface as `ExError`; these helpers keep the kind and
//! op naming consistent across the crate.

use orders_core::errors::{ExError, ExErrorKind};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Failures decoding a stored column into a domain value
///
/// Raised inside row mappers, so they travel through `rusqlite::Error` first.
#[derive(Error, Debug)]
pub enum ColumnDecodeError {
    #[error("not a hyphenated UUID: {0}")]
    Uuid(#[from] uuid::Error),

    #[error("not a decimal amount: {0}")]
    Decimal(#[from] rust_decimal::Error),

    #[error("timestamp out of range: {0} ms")]
    Timestamp(i64),
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_entity_id(migration_id)
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_entity_id(migration_id)
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidArgument)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a configuration error
pub fn configuration(reason: &str) -> ExError {
    ExError::new(ExErrorKind::Configuration)
        .with_op("store_config")
        .with_message(reason.to_string())
}

/// Wrap a driver error, keeping the driver's message unchanged
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
