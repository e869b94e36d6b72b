//! Write-side command types
//!
//! Commands are plain data. They can be built in code or decoded from JSON,
//! and are validated before any store access.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ExError, ExErrorKind, OrderError, Result};
use crate::model::ProductId;

/// Place a new order for an existing customer
///
/// `order_id` normally comes from `create_new_order_id`. `product_ids` may be
/// absent in decoded input, which is distinct from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNewOrderForCustomerWithProducts {
    pub order_id: Uuid,
    pub customer_id: Uuid,
    #[serde(default)]
    pub product_ids: Option<Vec<ProductId>>,
    #[serde(default)]
    pub order_number: String,
}

impl CreateNewOrderForCustomerWithProducts {
    pub fn new(
        order_id: Uuid,
        customer_id: Uuid,
        product_ids: Vec<ProductId>,
        order_number: impl Into<String>,
    ) -> Self {
        Self {
            order_id,
            customer_id,
            product_ids: Some(product_ids),
            order_number: order_number.into(),
        }
    }

    /// Decode a command from JSON
    ///
    /// # Errors
    /// * `NullArgument` - the document is `null`
    /// * `InvalidArgument` - the document is not a well-formed command
    pub fn from_json_str(json: &str) -> Result<Self> {
        let decoded: Option<Self> = serde_json::from_str(json).map_err(|e| {
            ExError::new(ExErrorKind::InvalidArgument)
                .with_op("decode_command")
                .with_field("command")
                .with_message(format!("Malformed command: {}", e))
        })?;

        decoded.ok_or_else(|| ExError::from(OrderError::CommandMissing).with_op("decode_command"))
    }

    /// Check the command's shape and return the requested product ids
    ///
    /// Checks run in a fixed order: order id, customer id, product ids.
    ///
    /// # Errors
    /// * `OutOfRange` - nil order id, nil customer id, or empty product list
    /// * `InvalidArgument` - product list absent
    pub fn validate(&self) -> Result<&[ProductId]> {
        if self.order_id.is_nil() {
            return Err(OrderError::EmptyOrderId.into());
        }
        if self.customer_id.is_nil() {
            return Err(OrderError::EmptyCustomerId.into());
        }
        match self.product_ids.as_deref() {
            None => Err(OrderError::ProductsMissing.into()),
            Some([]) => Err(OrderError::NoProductsOnOrder.into()),
            Some(ids) => Ok(ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER: &str = "17e3a22e-07e5-4ab2-8e62-1b15f9916909";

    #[test]
    fn test_null_document_is_null_argument() {
        let err = CreateNewOrderForCustomerWithProducts::from_json_str("null").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NullArgument);
    }

    #[test]
    fn test_garbage_is_invalid_argument() {
        let err = CreateNewOrderForCustomerWithProducts::from_json_str("{\"order_id\": 7}")
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
    }

    #[test]
    fn test_absent_product_ids_decode_as_none() {
        let json = format!(
            r#"{{"order_id": "{}", "customer_id": "{}", "order_number": "42"}}"#,
            Uuid::new_v4(),
            CUSTOMER
        );
        let cmd = CreateNewOrderForCustomerWithProducts::from_json_str(&json).unwrap();
        assert_eq!(cmd.product_ids, None);

        let err = cmd.validate().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
        assert_eq!(err.field(), Some("product_ids"));
    }

    #[test]
    fn test_empty_product_ids_is_out_of_range() {
        let cmd = CreateNewOrderForCustomerWithProducts::new(
            Uuid::new_v4(),
            Uuid::parse_str(CUSTOMER).unwrap(),
            vec![],
            "42",
        );
        assert_eq!(cmd.validate().unwrap_err().kind(), ExErrorKind::OutOfRange);
    }

    #[test]
    fn test_nil_customer_checked_before_products() {
        let cmd = CreateNewOrderForCustomerWithProducts {
            order_id: Uuid::new_v4(),
            customer_id: Uuid::nil(),
            product_ids: None,
            order_number: String::new(),
        };
        let err = cmd.validate().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::OutOfRange);
        assert_eq!(err.field(), Some("customer_id"));
    }

    #[test]
    fn test_valid_command_returns_ids() {
        let cmd = CreateNewOrderForCustomerWithProducts::new(
            Uuid::new_v4(),
            Uuid::parse_str(CUSTOMER).unwrap(),
            vec![8, 9],
            "42",
        );
        assert_eq!(cmd.validate().unwrap(), &[8, 9]);
    }
}
