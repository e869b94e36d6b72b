//! Connection management

use rusqlite::Connection;
use std::time::Duration;

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, Result};

/// Open and configure a connection for `config`
pub fn open(config: &StoreConfig) -> Result<Connection> {
    let conn = Connection::open(config.connection_string()).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Enforce foreign keys and prefer WAL journaling
///
/// In-memory databases report `memory` for the journal mode and keep it.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
        row.get::<_, String>(0)
    })
    .map_err(from_rusqlite)?;

    conn.busy_timeout(Duration::from_secs(5))
        .map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_keys_enabled() {
        let conn = open_in_memory().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_file_database_uses_wal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.db");
        let config = StoreConfig::new(path.to_string_lossy()).unwrap();

        let conn = open(&config).unwrap();
        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }
}
