use orders_core::errors::{ExError, ExErrorKind, OrderError};
use uuid::Uuid;

#[test]
fn test_argument_errors_classified() {
    let cases = [
        (OrderError::CommandMissing, ExErrorKind::NullArgument),
        (OrderError::ProductsMissing, ExErrorKind::InvalidArgument),
        (OrderError::EmptyOrderId, ExErrorKind::OutOfRange),
        (OrderError::EmptyCustomerId, ExErrorKind::OutOfRange),
        (OrderError::NoProductsOnOrder, ExErrorKind::OutOfRange),
    ];

    for (err, kind) in cases {
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), kind);
        assert!(ex_err.kind().is_argument_error());
        assert!(ex_err.field().is_some(), "{} names no field", ex_err);
    }
}

#[test]
fn test_order_not_found_carries_entity_id() {
    let order_id = Uuid::new_v4();
    let ex_err: ExError = OrderError::OrderNotFound { order_id }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidOperation);
    assert_eq!(ex_err.code(), "ERR_INVALID_OPERATION");
    assert_eq!(ex_err.entity_id(), Some(order_id.to_string().as_str()));
    assert!(ex_err.message().contains("requested order was not found"));
}

#[test]
fn test_runtime_errors_are_not_argument_errors() {
    for kind in [
        ExErrorKind::InvalidOperation,
        ExErrorKind::Persistence,
        ExErrorKind::Configuration,
    ] {
        assert!(!kind.is_argument_error());
    }
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::NullArgument, "ERR_NULL_ARGUMENT"),
        (ExErrorKind::InvalidArgument, "ERR_INVALID_ARGUMENT"),
        (ExErrorKind::OutOfRange, "ERR_OUT_OF_RANGE"),
        (ExErrorKind::InvalidOperation, "ERR_INVALID_OPERATION"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
