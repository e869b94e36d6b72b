//! Service-level view models
//!
//! The order service hands these out instead of read-side DTOs.

use chrono::{DateTime, Utc};
use orders_core::errors::{ExError, ExErrorKind};
use orders_core::model::ProductId;
use orders_store::read_model::{CustomerDto, OrderDetailsDto, OrderSummaryDto, ProductOrderedDto};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerModel {
    pub id: Uuid,
    pub name: String,
    pub registered_date: DateTime<Utc>,
    pub active: bool,
}

impl From<CustomerDto> for CustomerModel {
    fn from(dto: CustomerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            registered_date: dto.registered,
            active: dto.active,
        }
    }
}

/// One line of an order as the customer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductModel {
    /// Line id
    pub id: Uuid,
    pub product_id: ProductId,
    pub key: String,
    pub name: String,
    pub description: String,
    pub purchase_price: Decimal,
}

impl From<ProductOrderedDto> for ProductModel {
    fn from(dto: ProductOrderedDto) -> Self {
        Self {
            id: dto.id,
            product_id: dto.product_id,
            key: dto.key,
            name: dto.name,
            description: dto.description,
            purchase_price: dto.purchase_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetailsModel {
    pub id: Uuid,
    pub customer_order_number: String,
    pub created_on_timestamp: DateTime<Utc>,
    pub order_owner: CustomerModel,
    pub products_on_order: Vec<ProductModel>,
}

impl OrderDetailsModel {
    pub fn total(&self) -> Decimal {
        self.products_on_order.iter().map(|p| p.purchase_price).sum()
    }
}

impl TryFrom<OrderDetailsDto> for OrderDetailsModel {
    type Error = ExError;

    /// Fails with `NullArgument` when the details carry no owner
    fn try_from(dto: OrderDetailsDto) -> Result<Self, Self::Error> {
        let owner = dto.customer.ok_or_else(|| {
            ExError::new(ExErrorKind::NullArgument)
                .with_op("order_details_model")
                .with_field("order_owner")
                .with_entity_id(dto.id.to_string())
                .with_message("Order details carry no owning customer")
        })?;

        Ok(Self {
            id: dto.id,
            customer_order_number: dto.order_number,
            created_on_timestamp: dto.created,
            order_owner: owner.into(),
            products_on_order: dto.products_ordered.into_iter().map(Into::into).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummaryModel {
    pub id: Uuid,
    pub customer_order_number: String,
    pub created_on_timestamp: DateTime<Utc>,
    pub line_count: i64,
}

impl From<OrderSummaryDto> for OrderSummaryModel {
    fn from(dto: OrderSummaryDto) -> Self {
        Self {
            id: dto.id,
            customer_order_number: dto.order_number,
            created_on_timestamp: dto.created,
            line_count: dto.line_count,
        }
    }
}
