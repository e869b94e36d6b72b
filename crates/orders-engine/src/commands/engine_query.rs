//! Engine-level read-only query surface
//!
//! `apply_engine_query` never writes to the store.

use orders_core::errors::{ExError, ExErrorKind, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{OrderDetailsModel, OrderSummaryModel};
use crate::order_service::OrderService;

/// Read-only queries supported by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQuery {
    /// Generate an id for a future order
    OrderNewId,
    /// Details of one order
    OrderGet { order_id: Uuid },
    /// A customer's orders, oldest first
    OrderListForCustomer { customer_id: Uuid },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EngineQueryResult {
    OrderNewId { order_id: Uuid },
    OrderGet(Box<OrderDetailsModel>),
    OrderListForCustomer { orders: Vec<OrderSummaryModel> },
}

impl EngineQueryResult {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("engine_query_result")
                .with_message(e.to_string())
        })
    }
}

pub fn apply_engine_query(query: EngineQuery, service: &OrderService) -> Result<EngineQueryResult> {
    match query {
        EngineQuery::OrderNewId => Ok(EngineQueryResult::OrderNewId {
            order_id: service.create_order_id(),
        }),
        EngineQuery::OrderGet { order_id } => service
            .get_order_for_id(order_id)
            .map(|model| EngineQueryResult::OrderGet(Box::new(model))),
        EngineQuery::OrderListForCustomer { customer_id } => {
            let orders = service.get_orders_for_customer(customer_id)?;
            Ok(EngineQueryResult::OrderListForCustomer {
                orders: orders.into_vec(),
            })
        }
    }
}
