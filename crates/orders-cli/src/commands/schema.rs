//! Schema bootstrap command
//!
//! Usage: orders schema apply

use clap::{Args, Subcommand};
use orders_store::migrations::{apply_migrations, applied_migrations};
use orders_store::{db, StoreConfig};

use super::CliResult;

#[derive(Debug, Args)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub command: SchemaCommand,
}

#[derive(Debug, Subcommand)]
pub enum SchemaCommand {
    /// Create any missing tables
    Apply,
}

pub fn execute(args: SchemaArgs, config: &StoreConfig) -> CliResult {
    match args.command {
        SchemaCommand::Apply => {
            let mut conn = db::open(config)?;
            apply_migrations(&mut conn)?;
            let applied = applied_migrations(&conn)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "applied": applied }))?
            );
            Ok(())
        }
    }
}
