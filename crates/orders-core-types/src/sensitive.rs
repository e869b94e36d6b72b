//! Redacting wrapper for secrets
//!
//! Connection strings can embed credentials or private file paths. Wrapping
//! them in `Sensitive` means a stray `{:?}` on a config struct or a tracing
//! field never prints the value.

use serde::{Deserialize, Deserializer};
use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper that redacts its value in `Debug` and `Display`
///
/// ```
/// use orders_core_types::Sensitive;
///
/// let dsn = Sensitive::new("file:/var/lib/orders.db".to_string());
/// assert_eq!(format!("{:?}", dsn), "***REDACTED***");
/// assert_eq!(dsn.expose(), "file:/var/lib/orders.db");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the wrapped value. Call sites should pass it straight to the
    /// consumer (driver, client) and not format it.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sensitive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self)
    }
}
