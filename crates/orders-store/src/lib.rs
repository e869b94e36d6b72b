//! Orders Store - relational persistence for the order system
//!
//! Provides:
//! - `StoreConfig` and connection setup
//! - Schema bootstrap from an explicit entity-to-table mapping list
//! - Product and order repositories with a unit of work for atomic writes
//! - A read context running multi-record-set stored procedures
//! - The order read model that flattens those record sets into DTOs
//! - YAML seed import

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod procedures;
pub mod read_context;
pub mod read_model;
pub mod repo;
pub mod seed;
pub mod unit_of_work;

// Re-export key types
pub use config::StoreConfig;
pub use errors::Result;
pub use read_context::ReadContext;
pub use read_model::OrderReadModel;
pub use unit_of_work::UnitOfWork;
