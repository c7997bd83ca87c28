//! Settlement token returned by `POST /v1/ucp/tokens`.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::UcpError;
use crate::quote::Quote;
use crate::result::Result;

/// Number of characters shown by [`SettlementToken::preview`].
const PREVIEW_LEN: usize = 20;

/// Short-lived bearer credential that locks a quote for one settlement.
///
/// The token is single-use; the server rejects a second settlement with it.
/// `Debug` output hides the bearer value.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementToken {
    /// Opaque bearer value passed to `settle`.
    pub token: String,
    /// Identifier of the settlement this token will execute.
    pub settlement_id: String,
    /// Quote locked by this token.
    pub quote: Quote,
    /// Moment after which the token can no longer be settled.
    pub expires_at: DateTime<Utc>,
}

impl SettlementToken {
    /// First characters of the bearer value followed by `...`, for display.
    pub fn preview(&self) -> String {
        let head: String = self.token.chars().take(PREVIEW_LEN).collect();
        format!("{}...", head)
    }

    /// Returns `true` once `now` has reached the token's expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Fails with `UcpError::TokenExpired` when the token can no longer be settled at `now`.
    pub fn ensure_live_at(&self, now: DateTime<Utc>) -> Result<()> {
        if self.is_expired_at(now) {
            return Err(UcpError::TokenExpired {
                settlement_id: self.settlement_id.clone(),
                expires_at: self.expires_at.to_rfc3339(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for SettlementToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettlementToken")
            .field("token", &"[REDACTED]")
            .field("settlement_id", &self.settlement_id)
            .field("quote", &self.quote)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
