//! Entity-to-table mappings
//!
//! The schema is registered as an explicit list; `apply_schema` creates tables
//! in list order, so a table must come after every table it references.

/// One entity and the DDL that creates its table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMapping {
    /// Migration id recorded in `schema_version`
    pub id: &'static str,
    /// Domain entity stored in the table
    pub entity: &'static str,
    pub table: &'static str,
    pub ddl: &'static str,
}

/// The order store's mappings, parents first
pub fn order_store_mappings() -> Vec<TableMapping> {
    vec![
        TableMapping {
            id: "001_customer",
            entity: "Customer",
            table: "customer",
            ddl: include_str!("../../migrations/001_customer.sql"),
        },
        TableMapping {
            id: "002_product",
            entity: "Product",
            table: "product",
            ddl: include_str!("../../migrations/002_product.sql"),
        },
        TableMapping {
            id: "003_orders",
            entity: "Order",
            table: "orders",
            ddl: include_str!("../../migrations/003_orders.sql"),
        },
        TableMapping {
            id: "004_product_ordered",
            entity: "ProductOnOrder",
            table: "product_ordered",
            ddl: include_str!("../../migrations/004_product_ordered.sql"),
        },
    ]
}
