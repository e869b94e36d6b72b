use thiserror::Error;
use uuid::Uuid;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Argument kinds are raised synchronously before any store access.
/// `InvalidOperation` covers business rules discovered at runtime (order not
/// found, products missing). Store failures surface as `Persistence` carrying
/// the driver's own message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Argument validation
    /// A required input was not supplied at all
    NullArgument,
    /// An input was supplied but cannot be used (wrong shape, unparsable)
    InvalidArgument,
    /// An input was supplied but its value is outside the accepted domain
    /// (nil id, empty collection)
    OutOfRange,

    // Runtime business rules
    InvalidOperation,

    // Integration/IO
    Persistence,
    Serialization,
    Io,
    Configuration,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NullArgument => "ERR_NULL_ARGUMENT",
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::OutOfRange => "ERR_OUT_OF_RANGE",
            ExErrorKind::InvalidOperation => "ERR_INVALID_OPERATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for the kinds raised by input validation
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::NullArgument | ExErrorKind::InvalidArgument | ExErrorKind::OutOfRange
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus the
/// operation, offending field and entity id for the human reading the message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Name the offending input field (e.g. `command.customer_id`)
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Business rule violations raised by the order factory and order service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    /// No command was supplied
    #[error("Command must be supplied")]
    CommandMissing,

    /// Order id is the nil UUID
    #[error("Order Id must not be empty")]
    EmptyOrderId,

    /// Customer id is the nil UUID
    #[error("Customer Id must not be empty")]
    EmptyCustomerId,

    /// The command did not carry a product list at all
    #[error("Products on order must be supplied")]
    ProductsMissing,

    /// The command carried an empty product list
    #[error("An order must have products on it")]
    NoProductsOnOrder,

    /// The order factory was handed no lines
    #[error("An order must have lines on it")]
    NoLinesOnOrder,

    /// Some requested product ids do not exist in the write store
    #[error("{missing} products on order not found")]
    ProductsNotFound { requested: usize, missing: usize },

    /// The read model has no order with this id
    #[error("The requested order was not found")]
    OrderNotFound { order_id: Uuid },

    /// A not-found query result was read as if it held a value
    #[error(
        "No result was present. Check result_was_found before reading the result"
    )]
    ResultNotPresent,
}

/// Conversion from OrderError to ExError
impl From<OrderError> for ExError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::CommandMissing => ExError::new(ExErrorKind::NullArgument)
                .with_field("command")
                .with_message(message),

            OrderError::EmptyOrderId => ExError::new(ExErrorKind::OutOfRange)
                .with_field("order_id")
                .with_message(message),

            OrderError::EmptyCustomerId => ExError::new(ExErrorKind::OutOfRange)
                .with_field("customer_id")
                .with_message(message),

            OrderError::ProductsMissing => ExError::new(ExErrorKind::InvalidArgument)
                .with_field("product_ids")
                .with_message(message),

            OrderError::NoProductsOnOrder => ExError::new(ExErrorKind::OutOfRange)
                .with_field("product_ids")
                .with_message(message),

            OrderError::NoLinesOnOrder => ExError::new(ExErrorKind::OutOfRange)
                .with_field("lines")
                .with_message(message),

            OrderError::ProductsNotFound { .. } => ExError::new(ExErrorKind::InvalidOperation)
                .with_field("product_ids")
                .with_message(message),

            OrderError::OrderNotFound { order_id } => {
                ExError::new(ExErrorKind::InvalidOperation)
                    .with_entity_id(order_id.to_string())
                    .with_message(message)
            }

            OrderError::ResultNotPresent => {
                ExError::new(ExErrorKind::InvalidOperation).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            ExErrorKind::NullArgument,
            ExErrorKind::InvalidArgument,
            ExErrorKind::OutOfRange,
            ExErrorKind::InvalidOperation,
            ExErrorKind::Persistence,
            ExErrorKind::Serialization,
            ExErrorKind::Io,
            ExErrorKind::Configuration,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_names_field_and_op() {
        let err = ExError::new(ExErrorKind::OutOfRange)
            .with_op("create_order")
            .with_field("customer_id")
            .with_message("Customer Id must not be empty");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_OUT_OF_RANGE]"));
        assert!(rendered.contains("create_order"));
        assert!(rendered.contains("customer_id"));
    }

    #[test]
    fn test_products_not_found_message_counts_missing() {
        let err: ExError = OrderError::ProductsNotFound {
            requested: 3,
            missing: 2,
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::InvalidOperation);
        assert_eq!(err.message(), "2 products on order not found");
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let root = ExError::new(ExErrorKind::Persistence).with_message("disk I/O error");
        let err = ExError::new(ExErrorKind::Internal).with_source(root);
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("disk I/O error"));
    }
}
