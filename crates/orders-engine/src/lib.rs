//! Orders Engine - orchestration layer
//!
//! Coordinates the domain model in `orders-core` with persistence in
//! `orders-store`:
//! - `OrderService` for placing and reading orders
//! - Service-level view models
//! - `apply_engine_command` / `apply_engine_query` as the single write and
//!   read entry points

pub mod commands;
pub mod models;
pub mod order_service;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
pub use order_service::OrderService;
