// Integration tests for the schema bootstrap

use orders_store::migrations::{apply_migrations, applied_migrations, order_store_mappings};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: The schema is applied
    apply_migrations(&mut conn).unwrap();

    // Then: Every mapped table plus schema_version exists
    let tables = get_table_names(&conn);
    let mut expected: Vec<String> = order_store_mappings()
        .iter()
        .map(|m| m.table.to_string())
        .collect();
    expected.push("schema_version".to_string());
    expected.sort();
    assert_eq!(tables, expected);
}

#[test]
fn test_reapply_is_noop() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    let before: Vec<i64> = {
        let mut stmt = conn
            .prepare("SELECT applied_at FROM schema_version ORDER BY id")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap()
    };

    apply_migrations(&mut conn).unwrap();

    let after_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(after_count as usize, before.len());
}

#[test]
fn test_tampered_checksum_fails() {
    // Given: A database whose recorded checksum no longer matches the DDL
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '003_orders'",
        [],
    )
    .unwrap();

    // When: The schema is applied again
    let err = apply_migrations(&mut conn).unwrap_err();

    // Then: The mismatch is reported for that migration
    assert_eq!(err.entity_id(), Some("003_orders"));
    assert!(err.message().contains("Checksum mismatch"));
}

#[test]
fn test_order_lines_require_existing_order() {
    let mut conn = setup_test_db();
    orders_store::db::configure(&conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let result = conn.execute(
        "INSERT INTO product_ordered (id, order_id, product_id, purchase_price)
         VALUES ('l1', 'missing-order', 1, '1.00')",
        [],
    );

    assert!(result.is_err(), "foreign key on order_id must be enforced");
    assert_eq!(applied_migrations(&conn).unwrap().len(), 4);
}
