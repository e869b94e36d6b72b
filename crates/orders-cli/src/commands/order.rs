//! Order commands
//!
//! Usage:
//!   orders order new-id
//!   orders order create --customer <ID> --product <ID>... [--number <N>] [--order-id <ID>]
//!   orders order create --json <FILE|->
//!   orders order show <ORDER_ID>
//!   orders order list --customer <ID>

use clap::{Args, Subcommand};
use orders_core::commands::CreateNewOrderForCustomerWithProducts;
use orders_engine::{
    apply_engine_command, apply_engine_query, EngineCommand, EngineQuery, OrderService,
};
use orders_store::StoreConfig;
use std::io::Read;
use std::path::PathBuf;
use uuid::Uuid;

use super::CliResult;

#[derive(Debug, Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// Print a fresh order id
    NewId,
    /// Place a new order
    Create(CreateArgs),
    /// Show one order with its owner and lines
    Show {
        order_id: Uuid,
    },
    /// List a customer's orders, oldest first
    List {
        #[arg(long)]
        customer: Uuid,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Read the command as JSON from a file, or stdin when `-`
    #[arg(long, conflicts_with_all = ["customer", "product", "number", "order_id"])]
    pub json: Option<PathBuf>,

    /// Owning customer
    #[arg(long, required_unless_present = "json")]
    pub customer: Option<Uuid>,

    /// Product id to put on the order (repeatable)
    #[arg(long = "product")]
    pub product: Vec<i64>,

    /// Customer's order number
    #[arg(long, default_value = "")]
    pub number: String,

    /// Use this id instead of generating one
    #[arg(long)]
    pub order_id: Option<Uuid>,
}

pub fn execute(args: OrderArgs, config: &StoreConfig) -> CliResult {
    let service = OrderService::new(config.clone());

    match args.command {
        OrderCommand::NewId => print_query(EngineQuery::OrderNewId, &service),
        OrderCommand::Show { order_id } => {
            print_query(EngineQuery::OrderGet { order_id }, &service)
        }
        OrderCommand::List { customer } => print_query(
            EngineQuery::OrderListForCustomer {
                customer_id: customer,
            },
            &service,
        ),
        OrderCommand::Create(create) => {
            let cmd = build_create_command(create, &service)?;
            let result = apply_engine_command(cmd, &service)?;
            println!("{}", result.to_json()?);
            Ok(())
        }
    }
}

fn print_query(query: EngineQuery, service: &OrderService) -> CliResult {
    let result = apply_engine_query(query, service)?;
    println!("{}", result.to_json()?);
    Ok(())
}

fn build_create_command(
    args: CreateArgs,
    service: &OrderService,
) -> Result<EngineCommand, Box<dyn std::error::Error>> {
    if let Some(path) = args.json {
        let mut json = String::new();
        if path.as_os_str() == "-" {
            std::io::stdin().read_to_string(&mut json)?;
        } else {
            json = std::fs::read_to_string(&path)?;
        }
        return Ok(EngineCommand::order_create_from_json(&json)?);
    }

    // clap guarantees a customer when --json is absent
    let customer_id = args.customer.unwrap_or_else(Uuid::nil);

    Ok(EngineCommand::OrderCreate(
        CreateNewOrderForCustomerWithProducts::new(
            args.order_id.unwrap_or_else(|| service.create_order_id()),
            customer_id,
            args.product,
            args.number,
        ),
    ))
}
