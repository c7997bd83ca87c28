//! Command-line arguments for the settlement client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Args as ClapArgs, Parser, Subcommand};
use ucp_common::api::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_MAX_WAIT_SECS, TIMEOUT_ENV};
use ucp_common::{Corridor, PixKeyType};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// API key sent as a bearer token.
    #[clap(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Root URL of the settlement service.
    #[clap(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[clap(long, env = TIMEOUT_ENV)]
    pub timeout_secs: Option<u64>,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed on the command line.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get an FX quote.
    Quote {
        /// Payment corridor.
        #[clap(long, value_enum, default_value_t = Corridor::Pix)]
        corridor: Corridor,
        /// Amount in the source currency.
        #[clap(long)]
        amount: f64,
        /// Source currency.
        #[clap(long, default_value = "USD")]
        currency: String,
    },
    /// Execute a settlement with a previously acquired token.
    Settle {
        /// Settlement token.
        token: String,
        /// Idempotency key for safe resubmission.
        #[clap(long)]
        idempotency_key: Option<String>,
    },
    /// Print the current state of a settlement.
    Status {
        /// Settlement identifier.
        id: String,
    },
    /// Wait until a settlement completes or fails.
    Wait {
        /// Settlement identifier.
        id: String,
        /// Give up after this many seconds.
        #[clap(long, default_value_t = DEFAULT_MAX_WAIT_SECS)]
        max_wait_secs: u64,
    },
    /// Run the full quote, token, settle and wait flow.
    Demo(DemoArgs),
}

/// Inputs of the end-to-end walkthrough. Defaults reproduce a Pix payout.
#[derive(Debug, ClapArgs)]
pub struct DemoArgs {
    /// Payment corridor.
    #[clap(long, value_enum, default_value_t = Corridor::Pix)]
    pub corridor: Corridor,
    /// Amount in the source currency.
    #[clap(long, default_value_t = 100.0)]
    pub amount: f64,
    /// Source currency.
    #[clap(long, default_value = "USD")]
    pub currency: String,
    /// Recipient's full name.
    #[clap(long, default_value = "Maria Silva")]
    pub name: String,
    /// Pix key of the recipient (Pix corridor).
    #[clap(long, default_value = "maria@email.com")]
    pub pix_key: String,
    /// Kind of Pix key.
    #[clap(long, value_enum, default_value_t = PixKeyType::Email)]
    pub pix_key_type: PixKeyType,
    /// CPF/CNPJ of a Pix recipient.
    #[clap(long)]
    pub tax_id: Option<String>,
    /// CLABE of the recipient (SPEI corridor).
    #[clap(long)]
    pub clabe: Option<String>,
    /// RFC of a SPEI recipient.
    #[clap(long)]
    pub rfc: Option<String>,
    /// Order reference, sent as metadata and used in the idempotency key.
    #[clap(long, default_value = "order_12345")]
    pub order_id: String,
    /// Extra metadata entries as `key=value`.
    #[clap(long = "metadata", value_parser = parse_key_val)]
    pub metadata: Vec<(String, String)>,
    /// Give up waiting after this many seconds.
    #[clap(long, default_value_t = DEFAULT_MAX_WAIT_SECS)]
    pub max_wait_secs: u64,
}

/// Parse a single `key=value` pair.
fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {:?}", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in {:?}", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
