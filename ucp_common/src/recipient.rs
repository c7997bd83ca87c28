//! Payout recipients, one variant per payment rail.
//!
//! A recipient is serialized as a JSON object tagged by `type` (`pix` or `spei`).
//! Optional tax identifiers are left out of the object entirely when absent.
use serde::{Deserialize, Serialize};

use crate::corridor::{Corridor, PixKeyType};

/// Recipient of a settlement payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Recipient {
    /// Brazilian Pix recipient addressed by a Pix key.
    Pix {
        /// Pix key value (e-mail, phone, CPF, CNPJ or random key).
        pix_key: String,
        /// Kind of `pix_key`.
        pix_key_type: PixKeyType,
        /// Recipient's full name.
        name: String,
        /// CPF/CNPJ of the recipient.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tax_id: Option<String>,
    },
    /// Mexican SPEI recipient addressed by a CLABE account number.
    Spei {
        /// 18-digit CLABE.
        clabe: String,
        /// Recipient's full name.
        name: String,
        /// RFC tax identifier of the recipient.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rfc: Option<String>,
    },
}

impl Recipient {
    /// Creates a Pix recipient. `tax_id` is only included when supplied.
    pub fn pix(
        pix_key: impl Into<String>,
        pix_key_type: PixKeyType,
        name: impl Into<String>,
        tax_id: Option<String>,
    ) -> Self {
        Recipient::Pix {
            pix_key: pix_key.into(),
            pix_key_type,
            name: name.into(),
            tax_id: non_empty(tax_id),
        }
    }

    /// Creates a SPEI recipient. `rfc` is only included when supplied.
    pub fn spei(clabe: impl Into<String>, name: impl Into<String>, rfc: Option<String>) -> Self {
        Recipient::Spei {
            clabe: clabe.into(),
            name: name.into(),
            rfc: non_empty(rfc),
        }
    }

    /// Corridor this recipient can be paid through.
    pub fn corridor(&self) -> Corridor {
        match self {
            Recipient::Pix { .. } => Corridor::Pix,
            Recipient::Spei { .. } => Corridor::Spei,
        }
    }

    /// Recipient's name.
    pub fn name(&self) -> &str {
        match self {
            Recipient::Pix { name, .. } | Recipient::Spei { name, .. } => name,
        }
    }

    /// Rail-specific account address: the Pix key or the CLABE.
    pub fn address(&self) -> &str {
        match self {
            Recipient::Pix { pix_key, .. } => pix_key,
            Recipient::Spei { clabe, .. } => clabe,
        }
    }
}

// An empty tax id is treated as not supplied.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
