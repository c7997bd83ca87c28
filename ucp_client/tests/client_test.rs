mod common;

use chrono::{TimeZone, Utc};
use common::{API_KEY, client_for, completed_json, quote_json, settlement_json, token_json};
use httpmock::prelude::*;
use serde_json::json;
use ucp_client::SettlementApi;
use ucp_common::{Corridor, Metadata, PixKeyType, Recipient, SettlementStatus, UcpError};

#[test]
fn quote_fields_pass_through_unchanged() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/ucp/quote")
            .body_includes("\"corridor\":\"pix\"")
            .body_includes("\"currency\":\"USD\"");
        then.status(200).json_body(quote_json());
    });

    let quote = client_for(&server).get_quote(Corridor::Pix, 100.0, "USD").unwrap();

    mock.assert();
    assert_eq!(quote.corridor, Corridor::Pix);
    assert_eq!(quote.from_amount, 100.0);
    assert_eq!(quote.from_currency, "USD");
    assert_eq!(quote.to_amount, 497.53);
    assert_eq!(quote.to_currency.as_deref(), Some("BRL"));
    assert_eq!(quote.fx_rate, 4.9753);
    assert_eq!(quote.fees, 1.25);
    assert_eq!(quote.expires_at, Utc.with_ymd_and_hms(2026, 1, 11, 12, 5, 0).unwrap());
    assert_eq!(serde_json::to_value(&quote).unwrap(), quote_json());
}

#[test]
fn every_request_carries_auth_and_agent_headers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/ucp/settlements/stl_8f2b1c9d")
            .header("authorization", format!("Bearer {}", API_KEY))
            .header_exists("ucp-agent");
        then.status(200).json_body(settlement_json("pending"));
    });

    let settlement = client_for(&server).get_settlement_status("stl_8f2b1c9d").unwrap();

    mock.assert();
    assert_eq!(settlement.status, SettlementStatus::Pending);
    assert!(settlement.estimated_completion.is_some());
}

#[test]
fn acquire_token_sends_recipient_and_metadata() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/ucp/tokens")
            .body_includes("\"type\":\"pix\"")
            .body_includes("\"pix_key\":\"maria@email.com\"")
            .body_includes("\"order_id\":\"order_12345\"")
            .body_excludes("tax_id");
        then.status(201).json_body(token_json());
    });

    let recipient = Recipient::pix("maria@email.com", PixKeyType::Email, "Maria Silva", None);
    let mut metadata = Metadata::new();
    metadata.insert("order_id".into(), json!("order_12345"));
    metadata.insert("customer_email".into(), json!("customer@example.com"));

    let token = client_for(&server)
        .acquire_token(Corridor::Pix, 100.0, "USD", &recipient, Some(&metadata))
        .unwrap();

    mock.assert();
    assert_eq!(token.settlement_id, "stl_8f2b1c9d");
    assert_eq!(token.quote.fx_rate, 4.9753);
    assert_eq!(token.preview(), "ucp_tok_live_8f2b1c9...");
}

#[test]
fn acquire_token_without_metadata_omits_the_field() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/ucp/tokens")
            .body_includes("\"clabe\":\"032180000118359719\"")
            .body_excludes("metadata");
        then.status(200).json_body(token_json());
    });

    let recipient = Recipient::spei("032180000118359719", "Juan Pérez", None);
    client_for(&server)
        .acquire_token(Corridor::Spei, 100.0, "USD", &recipient, None)
        .unwrap();

    mock.assert();
}

#[test]
fn settle_sends_idempotency_key_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/ucp/settle")
            .body_includes("\"token\":\"ucp_tok_live_8f2b1c9d0e7a6b5c4d3e\"")
            .body_includes("\"idempotency_key\":\"order_12345_1767225600\"");
        then.status(200).json_body(settlement_json("pending"));
    });

    let settlement = client_for(&server)
        .settle("ucp_tok_live_8f2b1c9d0e7a6b5c4d3e", Some("order_12345_1767225600"))
        .unwrap();

    mock.assert();
    assert_eq!(settlement.id, "stl_8f2b1c9d");
}

#[test]
fn settle_without_key_leaves_it_out() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/ucp/settle")
            .body_includes("\"token\":\"tok\"")
            .body_excludes("idempotency_key");
        then.status(200).json_body(settlement_json("pending"));
    });

    client_for(&server).settle("tok", None).unwrap();

    mock.assert();
}

#[test]
fn non_success_status_is_surfaced_unmodified() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/ucp/settle");
        then.status(409)
            .header("content-type", "application/json")
            .body(r#"{"error":"token_already_used"}"#);
    });

    let err = client_for(&server).settle("tok", Some("k1")).unwrap_err();

    mock.assert_calls(1);
    match err {
        UcpError::Http { endpoint, status, body } => {
            assert_eq!(endpoint, "/v1/ucp/settle");
            assert_eq!(status, 409);
            assert_eq!(body, r#"{"error":"token_already_used"}"#);
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/ucp/quote");
        then.status(200).body("not json");
    });

    let err = client_for(&server).get_quote(Corridor::Pix, 100.0, "USD").unwrap_err();

    assert!(matches!(err, UcpError::Decode { .. }));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let config = ucp_client::ClientConfig::new(API_KEY, "http://127.0.0.1:9")
        .with_request_timeout(std::time::Duration::from_secs(2));
    let client = ucp_client::SettlementClient::new(config).unwrap();

    let err = client.get_settlement_status("stl_1").unwrap_err();

    assert!(matches!(err, UcpError::Transport { .. }));
}

#[test]
fn completed_record_exposes_transfer_details() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/ucp/settlements/stl_8f2b1c9d");
        then.status(200).json_body(completed_json());
    });

    let settlement = client_for(&server).get_settlement_status("stl_8f2b1c9d").unwrap();

    assert_eq!(settlement.status, SettlementStatus::Completed);
    assert_eq!(settlement.transfer_id.as_deref(), Some("E00000000202601111201abcdef"));
    assert_eq!(
        settlement.completed_at,
        Some(Utc.with_ymd_and_hms(2026, 1, 11, 12, 1, 30).unwrap())
    );
}
