//! Read-side session
//!
//! A `ReadContext` owns one connection and runs stored procedures inside a
//! read transaction, so every record set a procedure returns comes from the
//! same snapshot.

use orders_core::errors::{ExError, ExErrorKind};
use orders_core::logging_facility::elapsed_ms;
use orders_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::time::Instant;

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::procedures::StoredProcedure;

pub struct ReadContext {
    conn: Connection,
}

impl ReadContext {
    pub fn open(config: &StoreConfig) -> Result<Self> {
        Ok(Self {
            conn: db::open(config)?,
        })
    }

    /// Open from a raw connection string
    ///
    /// # Errors
    /// `InvalidArgument` if `connection_string` is empty.
    pub fn open_str(connection_string: &str) -> Result<Self> {
        if connection_string.trim().is_empty() {
            return Err(ExError::new(ExErrorKind::InvalidArgument)
                .with_op("read_context_open")
                .with_field("connection_string")
                .with_message("Connection string must not be empty"));
        }
        Self::open(&StoreConfig::new(connection_string)?)
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Run `procedure` in a read transaction and return its record sets
    pub fn execute<P: StoredProcedure>(&mut self, procedure: &P) -> Result<P::Output> {
        let name = procedure.name();
        log_op_start!("execute_procedure", procedure = name);
        let start = Instant::now();

        let result = (|| -> Result<P::Output> {
            let tx = self.conn.transaction().map_err(from_rusqlite)?;
            let output = procedure.execute(&tx)?;
            tx.commit().map_err(from_rusqlite)?;
            Ok(output)
        })();

        match &result {
            Ok(_) => {
                log_op_end!(
                    "execute_procedure",
                    duration_ms = elapsed_ms(start),
                    procedure = name
                );
            }
            Err(e) => {
                log_op_error!(
                    "execute_procedure",
                    e.clone(),
                    duration_ms = elapsed_ms(start),
                    procedure = name
                );
            }
        }

        result
    }
}

impl Drop for ReadContext {
    fn drop(&mut self) {
        tracing::trace!("read context connection released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_connection_string_rejected() {
        let err = ReadContext::open_str("").err().unwrap();
        assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
    }
}
