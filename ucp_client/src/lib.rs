//! Blocking client for the UCP cross-border settlement API.
//!
//! A settlement takes four steps against the remote service:
//!
//! 1. [`SettlementApi::get_quote`]: FX quote for a corridor and amount.
//! 2. [`SettlementApi::acquire_token`]: lock the quote for a [`Recipient`](ucp_common::Recipient).
//! 3. [`SettlementApi::settle`]: execute it, ideally with an idempotency key.
//! 4. [`SettlementApi::wait_for_completion`]: poll until `completed` or `failed`.
//!
//! ```no_run
//! use std::time::Duration;
//! use ucp_client::{ClientConfig, SettlementApi, SettlementClient};
//! use ucp_common::{Corridor, PixKeyType, Recipient};
//!
//! # fn main() -> ucp_common::Result<()> {
//! let client = SettlementClient::new(ClientConfig::from_env()?)?;
//! let recipient = Recipient::pix("maria@email.com", PixKeyType::Email, "Maria Silva", None);
//! let token = client.acquire_token(Corridor::Pix, 100.0, "USD", &recipient, None)?;
//! let settlement = client.settle(&token.token, Some("order_12345_1767225600"))?;
//! let done = client.wait_for_completion(&settlement.id, Duration::from_secs(120))?;
//! println!("{:?}", done.transfer_id);
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]
pub mod client;
pub mod config;
pub mod poller;

pub use client::{DEFAULT_MAX_WAIT, SettlementApi, SettlementClient};
pub use config::ClientConfig;
pub use poller::{Clock, SystemClock};
