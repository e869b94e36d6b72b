//! Migration runner

use orders_core::{log_op_end, log_op_error, log_op_start};
use orders_core::logging_facility::elapsed_ms;
use rusqlite::{Connection, OptionalExtension};
use std::time::Instant;

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::mapping::{order_store_mappings, TableMapping};

/// Create the order store's tables if they are not there yet
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    apply_schema(conn, &order_store_mappings())
}

/// Apply `mappings` in order, each in its own transaction
///
/// A mapping already recorded in `schema_version` is skipped when its
/// checksum matches and rejected when it does not.
pub fn apply_schema(conn: &mut Connection, mappings: &[TableMapping]) -> Result<()> {
    log_op_start!("apply_schema", mapping_count = mappings.len());
    let start = Instant::now();

    let result = (|| -> Result<usize> {
        create_schema_version_table(conn)?;
        let mut applied = 0;
        for mapping in mappings {
            if apply_mapping(conn, mapping)? {
                applied += 1;
            }
        }
        Ok(applied)
    })();

    match &result {
        Ok(applied) => {
            log_op_end!("apply_schema", duration_ms = elapsed_ms(start), applied = *applied);
        }
        Err(e) => {
            log_op_error!("apply_schema", e.clone(), duration_ms = elapsed_ms(start));
        }
    }

    result.map(|_| ())
}

/// Migration ids recorded in `schema_version`, in application order
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT migration_id FROM schema_version ORDER BY id")
        .map_err(from_rusqlite)?;
    let ids = stmt
        .query_map([], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;
    Ok(ids)
}

fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT NOT NULL
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Returns true if the mapping was applied now, false if already present
fn apply_mapping(conn: &mut Connection, mapping: &TableMapping) -> Result<bool> {
    let checksum = compute_checksum(mapping.ddl);

    let recorded: Option<String> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?1",
            [mapping.id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    if let Some(recorded) = recorded {
        if recorded != checksum {
            return Err(checksum_mismatch(mapping.id, &recorded, &checksum));
        }
        return Ok(false);
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(mapping.ddl)
        .map_err(|e| migration_error(mapping.id, &e.to_string()))?;

    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![mapping.id, chrono::Utc::now().timestamp_millis(), checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(migration_id = mapping.id, table = mapping.table, "table created");
    Ok(true)
}
