//! JSON request bodies sent to the settlement API.
//!
//! Each struct mirrors one `POST` endpoint. Optional members are skipped when
//! absent so the server never sees a `null` it did not ask for.
use serde::Serialize;

use crate::Metadata;
use crate::corridor::Corridor;
use crate::recipient::Recipient;

/// Body of `POST /v1/ucp/quote`.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteRequest<'a> {
    /// Corridor to quote.
    pub corridor: Corridor,
    /// Source amount.
    pub amount: f64,
    /// Source currency.
    pub currency: &'a str,
}

/// Body of `POST /v1/ucp/tokens`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    /// Corridor to settle through.
    pub corridor: Corridor,
    /// Source amount.
    pub amount: f64,
    /// Source currency.
    pub currency: &'a str,
    /// Payout recipient.
    pub recipient: &'a Recipient,
    /// Caller metadata, attached verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a Metadata>,
}

impl<'a> TokenRequest<'a> {
    /// Builds a token request. Empty metadata is not sent.
    pub fn new(
        corridor: Corridor,
        amount: f64,
        currency: &'a str,
        recipient: &'a Recipient,
        metadata: Option<&'a Metadata>,
    ) -> Self {
        TokenRequest {
            corridor,
            amount,
            currency,
            recipient,
            metadata: metadata.filter(|m| !m.is_empty()),
        }
    }
}

/// Body of `POST /v1/ucp/settle`.
#[derive(Debug, Clone, Serialize)]
pub struct SettleRequest<'a> {
    /// Bearer value of the settlement token.
    pub token: &'a str,
    /// Caller-chosen key that makes a resubmission safe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<&'a str>,
}

impl<'a> SettleRequest<'a> {
    /// Builds a settle request. An empty idempotency key is not sent.
    pub fn new(token: &'a str, idempotency_key: Option<&'a str>) -> Self {
        SettleRequest {
            token,
            idempotency_key: idempotency_key.filter(|k| !k.is_empty()),
        }
    }
}
