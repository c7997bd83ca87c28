//! Payment corridors and Pix key types shared between the client and the CLI.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Cross-border payment rail a settlement is routed through.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Corridor {
    /// Brazilian instant payments.
    Pix,
    /// Mexican interbank transfers.
    Spei,
}

impl Corridor {
    /// ISO 4217 code of the currency paid out on this corridor.
    pub fn payout_currency(&self) -> &'static str {
        match self {
            Corridor::Pix => "BRL",
            Corridor::Spei => "MXN",
        }
    }
}

/// Kind of key a Pix recipient is addressed by.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PixKeyType {
    Cpf,
    Cnpj,
    Email,
    Phone,
    /// Random key issued by the recipient's bank.
    Evp,
}
