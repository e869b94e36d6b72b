//! Repositories over the write store

pub mod columns;
pub mod order_repository;
pub mod product_repository;

pub use order_repository::{insert_order_tx, OrderRepository};
pub use product_repository::ProductRepository;
