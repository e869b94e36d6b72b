//! Order read model
//!
//! Runs the read procedures and flattens their record sets into DTOs. Each
//! call opens its own `ReadContext` and releases it before returning.

use orders_core::logging_facility::elapsed_ms;
use orders_core::queries::{SearchResult, SingleSearchResult};
use orders_core::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;
use uuid::Uuid;

use super::dtos::{OrderDetailsDto, OrderSummaryDto};
use crate::config::StoreConfig;
use crate::errors::Result;
use crate::procedures::{GetOrderDetailsForOrderId, GetOrdersForCustomerId, OrderDetailsRecordSets};
use crate::read_context::ReadContext;

pub struct OrderReadModel {
    config: StoreConfig,
}

impl OrderReadModel {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Details for one order, or a not-found result
    pub fn get_order_details(&self, order_id: Uuid) -> Result<SingleSearchResult<OrderDetailsDto>> {
        log_op_start!("get_order_details", order_id = %order_id);
        let start = Instant::now();

        let result = (|| -> Result<SingleSearchResult<OrderDetailsDto>> {
            let mut ctx = ReadContext::open(&self.config)?;
            let sets = ctx.execute(&GetOrderDetailsForOrderId { order_id })?;
            Ok(aggregate_order_details(sets))
        })();

        match &result {
            Ok(found) => {
                log_op_end!(
                    "get_order_details",
                    duration_ms = elapsed_ms(start),
                    found = found.result_was_found()
                );
            }
            Err(e) => {
                log_op_error!("get_order_details", e.clone(), duration_ms = elapsed_ms(start));
            }
        }

        result
    }

    /// A customer's orders, oldest first
    pub fn get_orders_for_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<SearchResult<OrderSummaryDto>> {
        log_op_start!("get_orders_for_customer", customer_id = %customer_id);
        let start = Instant::now();

        let result = (|| -> Result<SearchResult<OrderSummaryDto>> {
            let mut ctx = ReadContext::open(&self.config)?;
            let rows = ctx.execute(&GetOrdersForCustomerId { customer_id })?;
            Ok(SearchResult::new(rows))
        })();

        match &result {
            Ok(orders) => {
                log_op_end!(
                    "get_orders_for_customer",
                    duration_ms = elapsed_ms(start),
                    order_count = orders.len()
                );
            }
            Err(e) => {
                log_op_error!(
                    "get_orders_for_customer",
                    e.clone(),
                    duration_ms = elapsed_ms(start)
                );
            }
        }

        result
    }
}

/// Flatten the three record sets into one order
///
/// No order row means not found. Otherwise the first order row and the first
/// customer row win; any further rows in those sets are ignored. Every
/// ProductsOrdered row is kept, in the order the store returned it.
pub fn aggregate_order_details(sets: OrderDetailsRecordSets) -> SingleSearchResult<OrderDetailsDto> {
    let OrderDetailsRecordSets {
        orders,
        customers,
        products_ordered,
    } = sets;

    let Some(order) = orders.into_iter().next() else {
        return SingleSearchResult::not_found();
    };

    SingleSearchResult::found(OrderDetailsDto {
        id: order.id,
        customer_id: order.customer_id,
        order_number: order.order_number,
        created: order.created,
        customer: customers.into_iter().next(),
        products_ordered,
    })
}
