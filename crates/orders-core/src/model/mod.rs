pub mod customer;
pub mod order;
pub mod product;

pub use customer::Customer;
pub use order::{Order, ProductOnOrder};
pub use product::{Product, ProductId};
