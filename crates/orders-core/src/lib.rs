//! Orders Core - domain model for the order write path
//!
//! This crate provides:
//! - Customer, Product, Order and ProductOnOrder entities
//! - The order factory (ids, lines, orders)
//! - The `CreateNewOrderForCustomerWithProducts` command and its validation
//! - Query result containers for the read path
//! - The canonical error and logging facilities
//!
//! Nothing here touches the store; see `orders-store` for persistence.

pub mod commands;
pub mod errors;
pub mod factory;
pub mod logging_facility;
pub mod model;
pub mod queries;

// Used by the logging macros
#[doc(hidden)]
pub use orders_core_types;

pub use commands::CreateNewOrderForCustomerWithProducts;
pub use errors::{ExError, ExErrorKind, OrderError, Result};
pub use model::{Customer, Order, Product, ProductId, ProductOnOrder};
pub use queries::{SearchResult, SingleSearchResult};
