pub mod order;
pub mod schema;
pub mod seed;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;
