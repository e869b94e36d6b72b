#![allow(dead_code)]

use orders_store::migrations::apply_migrations;
use orders_store::seed::import_seed_file;
use orders_store::{db, StoreConfig};
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

pub const MIKE: &str = "17e3a22e-07e5-4ab2-8e62-1b15f9916909";
pub const ADA: &str = "5d7f2c1b-3f7a-4c8e-9a61-0e2b4d6f8a10";
pub const SEEDED_ORDER: &str = "4a61a22a-bade-d780-bbfa-be19c7746d87";

/// A file-backed store with the fixture seed applied
///
/// Keep the `TempDir` alive for as long as the store is used.
pub struct TestStore {
    pub dir: TempDir,
    pub config: StoreConfig,
}

impl TestStore {
    pub fn conn(&self) -> Connection {
        db::open(&self.config).unwrap()
    }

    pub fn count(&self, table: &str) -> i64 {
        self.conn()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .unwrap()
    }
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn seeded_store() -> TestStore {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.db");
    let config = StoreConfig::new(path.to_string_lossy()).unwrap();

    let mut conn = db::open(&config).unwrap();
    apply_migrations(&mut conn).unwrap();
    import_seed_file(&fixtures_dir().join("seed.yaml"), &mut conn).unwrap();

    TestStore { dir, config }
}
