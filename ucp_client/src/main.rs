//! UCP Settlement Client: a command-line front end for the cross-border settlement API.
//!
//! Each subcommand maps to one API call; `demo` chains them the way an integrator
//! would: get a quote, acquire a settlement token for a recipient, execute the
//! settlement with an idempotency key, and wait for it to complete.
//!
//! Usage example (CLI):
//! ```bash
//! PAYOS_API_KEY=pk_test_abc ucp_client demo --corridor pix --amount 100
//! ucp_client --base-url https://sandbox.payos.com wait stl_123 --max-wait-secs 60
//! ```
#![warn(missing_docs)]
mod args;
mod report;

use crate::args::{Args, Command, DemoArgs};
use chrono::Utc;
use clap::Parser;
use log::{error, info};
use std::time::Duration;
use ucp_client::{ClientConfig, SettlementApi, SettlementClient};
use ucp_common::{Corridor, Metadata, Recipient, Result, UcpError};

fn main() -> Result<(), UcpError> {
    init_logger();
    let args = Args::parse();

    let config = ClientConfig::resolve(
        args.api_key,
        args.base_url,
        args.timeout_secs.map(Duration::from_secs),
    )?;
    let client = SettlementClient::new(config)?;
    info!("Using settlement API at {}", client.config().base_url);

    if let Err(e) = run(&client, args.command) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

fn run(client: &impl SettlementApi, command: Command) -> Result<()> {
    match command {
        Command::Quote {
            corridor,
            amount,
            currency,
        } => {
            let quote = client.get_quote(corridor, amount, &currency)?;
            report::print_quote(&quote);
        }
        Command::Settle {
            token,
            idempotency_key,
        } => {
            let settlement = client.settle(&token, idempotency_key.as_deref())?;
            report::print_settlement(&settlement);
        }
        Command::Status { id } => {
            let settlement = client.get_settlement_status(&id)?;
            report::print_settlement(&settlement);
        }
        Command::Wait { id, max_wait_secs } => {
            let settlement = client.wait_for_completion(&id, Duration::from_secs(max_wait_secs))?;
            report::print_settlement(&settlement);
        }
        Command::Demo(demo) => run_demo(client, demo)?,
    }
    Ok(())
}

fn run_demo(client: &impl SettlementApi, demo: DemoArgs) -> Result<()> {
    println!("UCP Settlement Example (Rust)\n");

    let recipient = demo_recipient(&demo)?;

    println!("1. Getting FX quote...");
    let quote = client.get_quote(demo.corridor, demo.amount, &demo.currency)?;
    report::print_quote(&quote);
    println!();

    println!("2. Acquiring settlement token...");
    let metadata = demo_metadata(&demo);
    let token = client.acquire_token(
        demo.corridor,
        demo.amount,
        &demo.currency,
        &recipient,
        Some(&metadata),
    )?;
    report::print_token(&token);
    println!();

    println!("3. Executing settlement...");
    token.ensure_live_at(Utc::now())?;
    let idempotency_key = format!("{}_{}", demo.order_id, Utc::now().timestamp());
    let settlement = client.settle(&token.token, Some(&idempotency_key))?;
    report::print_settlement(&settlement);
    println!();

    println!("4. Waiting for settlement to complete...");
    let completed =
        client.wait_for_completion(&settlement.id, Duration::from_secs(demo.max_wait_secs))?;
    report::print_settlement(&completed);
    println!();

    report::print_summary(&token, &recipient);
    Ok(())
}

fn demo_recipient(demo: &DemoArgs) -> Result<Recipient> {
    match demo.corridor {
        Corridor::Pix => Ok(Recipient::pix(
            demo.pix_key.clone(),
            demo.pix_key_type,
            demo.name.clone(),
            demo.tax_id.clone(),
        )),
        Corridor::Spei => {
            let clabe = demo
                .clabe
                .clone()
                .ok_or_else(|| UcpError::Config("--clabe is required for the spei corridor".into()))?;
            Ok(Recipient::spei(clabe, demo.name.clone(), demo.rfc.clone()))
        }
    }
}

fn demo_metadata(demo: &DemoArgs) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("order_id".into(), demo.order_id.clone().into());
    for (key, value) in &demo.metadata {
        metadata.insert(key.clone(), value.clone().into());
    }
    metadata
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
