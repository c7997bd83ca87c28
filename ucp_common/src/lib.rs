//!
//! Common types and utilities shared by the UCP settlement client and its tools.
//!
//! This crate aggregates:
//! - `error`: unified error type `UcpError` used across the workspace.
//! - `result`: handy `Result<T, UcpError>` alias.
//! - `corridor`: payment corridors and Pix key types.
//! - `quote`, `recipient`, `token`, `settlement`: the wire data model.
//! - `request`: JSON request payloads sent to the settlement API.
//! - `api`: endpoint paths, header names and configuration defaults.
#![warn(missing_docs)]
pub mod api;
pub mod corridor;
pub mod error;
pub mod quote;
pub mod recipient;
pub mod request;
pub mod result;
pub mod settlement;
pub mod token;

pub use corridor::{Corridor, PixKeyType};
pub use error::UcpError;
pub use quote::Quote;
pub use recipient::Recipient;
pub use result::Result;
pub use settlement::{Settlement, SettlementStatus};
pub use token::SettlementToken;

/// Free-form metadata attached verbatim to token requests.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
