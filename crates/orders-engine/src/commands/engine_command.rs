//! Engine-level write commands

use orders_core::commands::CreateNewOrderForCustomerWithProducts;
use orders_core::errors::{ExError, ExErrorKind, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::order_service::OrderService;

/// Commands that write to the order store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EngineCommand {
    /// Place a new order for an existing customer
    OrderCreate(CreateNewOrderForCustomerWithProducts),
}

impl EngineCommand {
    /// Decode an `OrderCreate` command from a bare command document
    ///
    /// # Errors
    /// `NullArgument` for `null`, `InvalidArgument` for malformed input.
    pub fn order_create_from_json(json: &str) -> Result<Self> {
        CreateNewOrderForCustomerWithProducts::from_json_str(json).map(Self::OrderCreate)
    }
}

/// Result of applying an engine command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum EngineCommandResult {
    OrderCreated { order_id: Uuid },
}

impl EngineCommandResult {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("engine_command_result")
                .with_message(e.to_string())
        })
    }
}

/// Apply an engine command against the store behind `service`
pub fn apply_engine_command(
    cmd: EngineCommand,
    service: &OrderService,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::OrderCreate(command) => {
            let order_id = service.create_new_order_for_customer_with_products(&command)?;
            Ok(EngineCommandResult::OrderCreated { order_id })
        }
    }
}
