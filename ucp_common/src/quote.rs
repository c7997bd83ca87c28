//! FX quote returned by the settlement service.
//!
//! Quotes are decoded from the JSON body of `POST /v1/ucp/quote` and embedded in
//! every settlement token. The client never alters a quote after decoding it:
//! the expiry keeps the server's UTC offset and fields this client does not
//! model are kept in `extra`.
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::corridor::Corridor;

/// FX quote for a single corridor and source amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Corridor the quote applies to.
    pub corridor: Corridor,
    /// Amount debited in the source currency.
    pub from_amount: f64,
    /// Source currency (e.g., `USD`).
    pub from_currency: String,
    /// Amount credited to the recipient.
    pub to_amount: f64,
    /// Payout currency, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<String>,
    /// Exchange rate applied to `from_amount`.
    pub fx_rate: f64,
    /// Fees charged in the source currency.
    pub fees: f64,
    /// Moment after which the quote can no longer be locked, in the server's offset.
    pub expires_at: DateTime<FixedOffset>,
    /// Response members not listed above, as received.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Quote {
    /// Payout currency, falling back to the corridor's currency.
    pub fn payout_currency(&self) -> &str {
        self.to_currency
            .as_deref()
            .unwrap_or_else(|| self.corridor.payout_currency())
    }
}
