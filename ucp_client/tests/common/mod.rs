#![allow(dead_code)]

use std::time::Duration;

use httpmock::MockServer;
use serde_json::{Value, json};
use ucp_client::{ClientConfig, SettlementClient};

pub const API_KEY: &str = "pk_test_integration";

pub fn client_for(server: &MockServer) -> SettlementClient {
    let config = ClientConfig::new(API_KEY, server.base_url())
        .with_request_timeout(Duration::from_secs(5))
        .with_poll_interval(Duration::from_millis(20));
    SettlementClient::new(config).unwrap()
}

pub fn quote_json() -> Value {
    json!({
        "corridor": "pix",
        "from_amount": 100.0,
        "from_currency": "USD",
        "to_amount": 497.53,
        "to_currency": "BRL",
        "fx_rate": 4.9753,
        "fees": 1.25,
        "expires_at": "2026-01-11T09:05:00-03:00"
    })
}

pub fn token_json() -> Value {
    json!({
        "token": "ucp_tok_live_8f2b1c9d0e7a6b5c4d3e",
        "settlement_id": "stl_8f2b1c9d",
        "quote": quote_json(),
        "expires_at": "2099-01-11T12:15:00Z"
    })
}

pub fn expired_token_json() -> Value {
    let mut token = token_json();
    token["expires_at"] = json!("2026-01-11T12:15:00Z");
    token
}

pub fn settlement_json(status: &str) -> Value {
    json!({
        "id": "stl_8f2b1c9d",
        "status": status,
        "estimated_completion": "2026-01-11T12:02:00Z"
    })
}

pub fn completed_json() -> Value {
    json!({
        "id": "stl_8f2b1c9d",
        "status": "completed",
        "transfer_id": "E00000000202601111201abcdef",
        "completed_at": "2026-01-11T12:01:30Z"
    })
}
