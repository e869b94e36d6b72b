//! Orders CLI
//!
//! Command-line interface for the order store. Results are printed to stdout
//! as JSON; logs go to stderr.

use clap::{Parser, Subcommand};
use orders_core::logging_facility::{init, Profile};
use orders_store::StoreConfig;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "orders")]
#[command(about = "Orders - CQRS order store", long_about = None)]
struct Cli {
    /// Database path or file: URI (defaults to ORDERS_CONNECTION_STRING)
    #[arg(long, global = true)]
    db: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Schema operations
    Schema(commands::schema::SchemaArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Order operations
    Order(commands::order::OrderArgs),
}

fn store_config(db: Option<String>) -> orders_core::Result<StoreConfig> {
    match db {
        Some(db) => StoreConfig::new(db),
        None => StoreConfig::from_env(),
    }
}

fn run(cli: Cli) -> commands::CliResult {
    let config = store_config(cli.db)?;

    match cli.command {
        Commands::Schema(args) => commands::schema::execute(args, &config),
        Commands::Seed(args) => commands::seed::execute(args, &config),
        Commands::Order(args) => commands::order::execute(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
