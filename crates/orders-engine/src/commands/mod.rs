//! Engine dispatch
//!
//! Commands write, queries only read.

pub mod engine_command;
pub mod engine_query;
