//! Settlement record as observed through the settlement API.
//!
//! A settlement moves `pending` → `completed` or `pending` → `failed` on the server.
//! The client only observes these transitions by reading the record again.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Server-side state of a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SettlementStatus {
    /// Submitted and not yet resolved.
    Pending,
    /// Funds delivered to the recipient.
    Completed,
    /// Rejected or reversed; see `failure_reason`.
    Failed,
    /// Any status this client does not know. Treated as not yet resolved.
    #[serde(other)]
    Unknown,
}

impl SettlementStatus {
    /// `true` for `completed` and `failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SettlementStatus::Completed | SettlementStatus::Failed)
    }
}

/// Settlement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Settlement identifier.
    pub id: String,
    /// Current state.
    pub status: SettlementStatus,
    /// Reason reported by the server for a failed settlement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Rail transfer identifier once funds were sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<String>,
    /// Moment the settlement completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Server's estimate of the completion time while pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_completion: Option<DateTime<Utc>>,
}
