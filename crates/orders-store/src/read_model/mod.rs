//! Denormalized read path

pub mod dtos;
pub mod order_read_model;

pub use dtos::{CustomerDto, OrderDetailsDto, OrderDto, OrderSummaryDto, ProductOrderedDto};
pub use order_read_model::{aggregate_order_details, OrderReadModel};
