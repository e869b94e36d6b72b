//! Seed import command
//!
//! Usage: orders seed import <PATH>

use clap::{Args, Subcommand};
use orders_store::migrations::apply_migrations;
use orders_store::seed::{import_seed_file, SeedSummary};
use orders_store::{db, StoreConfig};
use std::path::PathBuf;

use super::CliResult;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file, or every .yaml/.yml file in a directory
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

pub fn execute(args: SeedArgs, config: &StoreConfig) -> CliResult {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, config),
    }
}

fn execute_import(args: ImportArgs, config: &StoreConfig) -> CliResult {
    let mut conn = db::open(config)?;
    apply_migrations(&mut conn)?;

    let seed_files = if args.path.is_dir() {
        // Sorted so imports that depend on each other run in a stable order
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
            })
            .collect();
        files.sort();
        files
    } else {
        vec![args.path]
    };

    let mut summaries: Vec<SeedSummary> = Vec::with_capacity(seed_files.len());
    for seed_file in &seed_files {
        eprintln!("Importing {}...", seed_file.display());
        summaries.push(import_seed_file(seed_file, &mut conn)?);
    }

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
