//! Structured logging for the order write and read paths
//!
//! - `init(profile)` installs the process subscriber once
//! - `log_op_start!`, `log_op_end!` and `log_op_error!` emit the canonical
//!   envelope (`component`, `op`, `event`, `duration_ms`)
//! - `test_capture` records events in memory so tests can assert on them
//!
//! ```rust
//! use orders_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{elapsed_ms, init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
