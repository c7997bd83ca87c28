//! Blocking HTTP client for the UCP settlement API.
//!
//! `SettlementApi` is the protocol-agnostic contract; `SettlementClient` implements
//! it over HTTP/JSON. Each call blocks until the response arrives. Non-success
//! responses are surfaced as `UcpError::Http` with the status and body untouched,
//! and no call is ever retried.
use std::time::Duration;

use log::{debug, warn};
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use ucp_common::api::{
    AGENT_HEADER, DEFAULT_MAX_WAIT_SECS, POLL_INTERVAL_SECS, QUOTE_PATH, SETTLE_PATH,
    SETTLEMENTS_PATH, TOKENS_PATH,
};
use ucp_common::request::{QuoteRequest, SettleRequest, TokenRequest};
use ucp_common::{
    Corridor, Metadata, Quote, Recipient, Result, Settlement, SettlementToken, UcpError,
};

use crate::config::ClientConfig;
use crate::poller::{Clock, SystemClock, poll_until_terminal};

/// Default upper bound for [`SettlementApi::wait_for_completion`].
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(DEFAULT_MAX_WAIT_SECS);

/// Operations offered by the settlement service.
pub trait SettlementApi {
    /// Get an FX quote for `amount` of `currency` on `corridor`.
    fn get_quote(&self, corridor: Corridor, amount: f64, currency: &str) -> Result<Quote>;

    /// Lock a quote for `recipient` and obtain a single-use settlement token.
    ///
    /// `metadata` is attached to the request verbatim when present.
    fn acquire_token(
        &self,
        corridor: Corridor,
        amount: f64,
        currency: &str,
        recipient: &Recipient,
        metadata: Option<&Metadata>,
    ) -> Result<SettlementToken>;

    /// Execute the settlement locked by `token`.
    ///
    /// Callers should pass a unique `idempotency_key` per logical settlement so a
    /// resubmission after a lost response is safe. The client does not enforce it.
    fn settle(&self, token: &str, idempotency_key: Option<&str>) -> Result<Settlement>;

    /// Read the current settlement record once.
    fn get_settlement_status(&self, id: &str) -> Result<Settlement>;

    /// Delay between two polls of `wait_for_completion`.
    fn poll_interval(&self) -> Duration {
        Duration::from_secs(POLL_INTERVAL_SECS)
    }

    /// Poll the settlement until it completes, fails, or `max_wait` elapses.
    fn wait_for_completion(&self, id: &str, max_wait: Duration) -> Result<Settlement> {
        self.wait_for_completion_with(id, max_wait, &SystemClock)
    }

    /// Same as [`SettlementApi::wait_for_completion`], timed by `clock`.
    fn wait_for_completion_with(
        &self,
        id: &str,
        max_wait: Duration,
        clock: &dyn Clock,
    ) -> Result<Settlement> {
        poll_until_terminal(id, max_wait, self.poll_interval(), clock, || {
            self.get_settlement_status(id)
        })
    }
}

/// HTTP implementation of [`SettlementApi`].
///
/// Headers (bearer authorization, content type, `UCP-Agent`) are fixed at
/// construction. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SettlementClient {
    http: Client,
    config: ClientConfig,
}

impl SettlementClient {
    /// Build a client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| UcpError::Config("API key contains characters not allowed in a header".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("ucp-agent"),
            HeaderValue::from_str(&config.agent)
                .map_err(|_| UcpError::Config(format!("invalid {} value: {:?}", AGENT_HEADER, config.agent)))?,
        );

        let http = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| UcpError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(SettlementClient { http, config })
    }

    /// Build a client from `PAYOS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// URL of one settlement record. The id is percent-encoded as a single path segment.
    fn settlement_url(&self, id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.url(SETTLEMENTS_PATH))
            .map_err(|e| UcpError::Config(format!("invalid base URL {:?}: {}", self.config.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| UcpError::Config(format!("base URL {:?} cannot carry a path", self.config.base_url)))?
            .push(id);
        Ok(url)
    }

    fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(|e| transport_error(path, e))?;
        decode_response(path, response)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let path = url.path().to_string();
        debug!("GET {}", path);
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| transport_error(&path, e))?;
        decode_response(&path, response)
    }
}

impl SettlementApi for SettlementClient {
    fn get_quote(&self, corridor: Corridor, amount: f64, currency: &str) -> Result<Quote> {
        self.post(
            QUOTE_PATH,
            &QuoteRequest {
                corridor,
                amount,
                currency,
            },
        )
    }

    fn acquire_token(
        &self,
        corridor: Corridor,
        amount: f64,
        currency: &str,
        recipient: &Recipient,
        metadata: Option<&Metadata>,
    ) -> Result<SettlementToken> {
        let request = TokenRequest::new(corridor, amount, currency, recipient, metadata);
        let token: SettlementToken = self.post(TOKENS_PATH, &request)?;
        debug!("Acquired token for settlement {}", token.settlement_id);
        Ok(token)
    }

    fn settle(&self, token: &str, idempotency_key: Option<&str>) -> Result<Settlement> {
        let request = SettleRequest::new(token, idempotency_key);
        if request.idempotency_key.is_none() {
            debug!("Settling without an idempotency key");
        }
        self.post(SETTLE_PATH, &request)
    }

    fn get_settlement_status(&self, id: &str) -> Result<Settlement> {
        self.get(self.settlement_url(id)?)
    }

    fn poll_interval(&self) -> Duration {
        self.config.poll_interval
    }
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> UcpError {
    warn!("Request to {} failed: {}", endpoint, err);
    UcpError::Transport {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    }
}

fn decode_response<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().map_err(|e| transport_error(endpoint, e))?;

    if !status.is_success() {
        warn!("{} answered {}", endpoint, status);
        return Err(UcpError::Http {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|source| UcpError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
