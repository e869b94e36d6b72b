//! Core types shared across the orders crates
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging facility and its test capture
//! - **Sensitive data**: `Sensitive<T>` keeps connection strings and other
//!   secrets out of logs

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
