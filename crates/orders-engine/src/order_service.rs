//! Order service
//!
//! The write path validates a command, resolves its products, builds the order
//! through the factory and commits it with a unit of work. The read path goes
//! through the order read model. Every call opens its own session and releases
//! it before returning; validation failures return before any session opens.

use orders_core::commands::CreateNewOrderForCustomerWithProducts;
use orders_core::errors::{OrderError, Result};
use orders_core::factory;
use orders_core::logging_facility::elapsed_ms;
use orders_core::queries::SearchResult;
use orders_core::{log_op_end, log_op_error, log_op_start};
use orders_store::{OrderReadModel, StoreConfig, UnitOfWork};
use std::time::Instant;
use uuid::Uuid;

use crate::models::{OrderDetailsModel, OrderSummaryModel};

pub struct OrderService {
    config: StoreConfig,
    read_model: OrderReadModel,
}

impl OrderService {
    pub fn new(config: StoreConfig) -> Self {
        let read_model = OrderReadModel::new(config.clone());
        Self { config, read_model }
    }

    /// A fresh id for a new order
    pub fn create_order_id(&self) -> Uuid {
        factory::create_new_order_id()
    }

    /// Place a new order
    ///
    /// Exactly one order row and one line row per product are written, or
    /// nothing is.
    ///
    /// # Errors
    /// * `OutOfRange` - nil order id, nil customer id, or empty product list
    /// * `InvalidArgument` - product list absent
    /// * `InvalidOperation` - some product ids do not exist
    /// * `Persistence` - the commit failed (unknown customer, duplicate order id)
    pub fn create_new_order_for_customer_with_products(
        &self,
        command: &CreateNewOrderForCustomerWithProducts,
    ) -> Result<Uuid> {
        log_op_start!(
            "create_order",
            order_id = %command.order_id,
            customer_id = %command.customer_id
        );
        let start = Instant::now();

        let result = self.place_order(command);

        match &result {
            Ok(line_count) => {
                log_op_end!(
                    "create_order",
                    duration_ms = elapsed_ms(start),
                    line_count = *line_count
                );
            }
            Err(e) => {
                log_op_error!("create_order", e.clone(), duration_ms = elapsed_ms(start));
            }
        }

        result.map(|_| command.order_id)
    }

    /// Returns the number of lines written
    fn place_order(&self, command: &CreateNewOrderForCustomerWithProducts) -> Result<usize> {
        let product_ids = command.validate()?;

        let mut uow = UnitOfWork::open(&self.config)?;

        let products = uow.products().get_products_for_ids(product_ids)?;
        if products.len() < product_ids.len() {
            return Err(OrderError::ProductsNotFound {
                requested: product_ids.len(),
                missing: product_ids.len() - products.len(),
            }
            .into());
        }

        let lines = factory::create_products_on_order(command.order_id, &products);
        let order = factory::create_order_from(
            command.order_id,
            command.customer_id,
            &command.order_number,
            &lines,
        )?;

        uow.orders().add(order);
        uow.complete()?;

        Ok(lines.len())
    }

    /// Details of one order
    ///
    /// # Errors
    /// `InvalidOperation` if no order has this id.
    pub fn get_order_for_id(&self, order_id: Uuid) -> Result<OrderDetailsModel> {
        log_op_start!("get_order_for_id", order_id = %order_id);
        let start = Instant::now();

        let result = (|| -> Result<OrderDetailsModel> {
            let found = self.read_model.get_order_details(order_id)?;
            if !found.result_was_found() {
                return Err(OrderError::OrderNotFound { order_id }.into());
            }
            OrderDetailsModel::try_from(found.into_result()?)
        })();

        match &result {
            Ok(model) => {
                log_op_end!(
                    "get_order_for_id",
                    duration_ms = elapsed_ms(start),
                    line_count = model.products_on_order.len()
                );
            }
            Err(e) => {
                log_op_error!("get_order_for_id", e.clone(), duration_ms = elapsed_ms(start));
            }
        }

        result
    }

    /// A customer's orders, oldest first; empty for unknown customers
    pub fn get_orders_for_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<SearchResult<OrderSummaryModel>> {
        Ok(self
            .read_model
            .get_orders_for_customer(customer_id)?
            .map(OrderSummaryModel::from))
    }
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
