#![allow(dead_code)]

use orders_engine::OrderService;
use orders_store::migrations::apply_migrations;
use orders_store::seed::import_seed_file;
use orders_store::{db, StoreConfig};
use std::path::PathBuf;
use tempfile::TempDir;
use uuid::Uuid;

pub const MIKE: &str = "17e3a22e-07e5-4ab2-8e62-1b15f9916909";
pub const SEEDED_ORDER: &str = "4a61a22a-bade-d780-bbfa-be19c7746d87";
pub const UNKNOWN_ORDER: &str = "0bab4fc6-d749-455c-afee-73cfb0a01d08";

pub fn uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap()
}

/// An order service over a seeded, file-backed store
///
/// The `TempDir` must outlive the service.
pub struct Harness {
    pub dir: TempDir,
    pub config: StoreConfig,
    pub service: OrderService,
}

impl Harness {
    pub fn count(&self, table: &str) -> i64 {
        db::open(&self.config)
            .unwrap()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .unwrap()
    }
}

pub fn seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("orders-store")
        .join("tests")
        .join("fixtures")
        .join("seed.yaml")
}

pub fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("orders.db").to_string_lossy()).unwrap();

    let mut conn = db::open(&config).unwrap();
    apply_migrations(&mut conn).unwrap();
    import_seed_file(&seed_path(), &mut conn).unwrap();
    drop(conn);

    let service = OrderService::new(config.clone());
    Harness {
        dir,
        config,
        service,
    }
}
