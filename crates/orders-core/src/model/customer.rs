use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer - the owner of zero or more orders
///
/// Customers are never created by the write path; they arrive through seed
/// import and are only referenced by id from orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// When the customer registered
    pub registered: DateTime<Utc>,

    /// Inactive customers keep their historical orders
    pub active: bool,
}

impl Customer {
    pub fn new(id: Uuid, name: impl Into<String>, registered: DateTime<Utc>, active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            registered,
            active,
        }
    }
}
