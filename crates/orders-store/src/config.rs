//! Store configuration
//!
//! A `StoreConfig` is handed to every unit of work and read context; there is
//! no process-wide default.

use orders_core::errors::{ExError, ExErrorKind};
use orders_core_types::Sensitive;

use crate::errors::{configuration, Result};

/// Environment variable consulted by `StoreConfig::from_env`
pub const CONNECTION_STRING_ENV: &str = "ORDERS_CONNECTION_STRING";

/// Where the order store lives
///
/// The connection string is an SQLite path or `file:` URI. `:memory:` is
/// accepted, but every session opened from it sees its own empty database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    connection_string: Sensitive<String>,
}

impl StoreConfig {
    /// # Errors
    /// `InvalidArgument` if the connection string is empty or blank.
    pub fn new(connection_string: impl Into<String>) -> Result<Self> {
        let connection_string = connection_string.into();
        if connection_string.trim().is_empty() {
            return Err(ExError::new(ExErrorKind::InvalidArgument)
                .with_op("store_config")
                .with_field("connection_string")
                .with_message("Connection string must not be empty"));
        }
        Ok(Self {
            connection_string: Sensitive::new(connection_string),
        })
    }

    /// Read `ORDERS_CONNECTION_STRING`, loading `.env` first if present
    ///
    /// # Errors
    /// `Configuration` if the variable is unset, `InvalidArgument` if empty.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; the variable may come from the process env
        let _ = dotenvy::dotenv();
        let value = std::env::var(CONNECTION_STRING_ENV)
            .map_err(|_| configuration(&format!("{} is not set", CONNECTION_STRING_ENV)))?;
        Self::new(value)
    }

    pub fn connection_string(&self) -> &str {
        self.connection_string.expose()
    }

    pub fn is_in_memory(&self) -> bool {
        let cs = self.connection_string();
        cs == ":memory:" || cs.contains("mode=memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_connection_string_rejected() {
        for bad in ["", "   "] {
            let err = StoreConfig::new(bad).unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
            assert_eq!(err.field(), Some("connection_string"));
        }
    }

    #[test]
    fn test_debug_redacts_connection_string() {
        let config = StoreConfig::new("/srv/orders/secret.db").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret.db"));
        assert_eq!(config.connection_string(), "/srv/orders/secret.db");
    }

    #[test]
    fn test_memory_detection() {
        assert!(StoreConfig::new(":memory:").unwrap().is_in_memory());
        assert!(StoreConfig::new("file:orders?mode=memory&cache=shared")
            .unwrap()
            .is_in_memory());
        assert!(!StoreConfig::new("orders.db").unwrap().is_in_memory());
    }
}
