//! Client layer: configuration, the HTTP transport seam, and the two API operations.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiKey, BalanceResponse, BaseUrl, Dispatch, ValidationError};

const DISPATCH_PATH: &str = "/dispatch";
const BALANCE_PATH: &str = "/balance";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Request timeout applied by the built-in transport unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Boxed future returned by [`HttpTransport::send`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTTP method used by the GateWire endpoints.
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully prepared request handed to an [`HttpTransport`].
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status and raw body of a response, whatever the status.
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
/// Why an [`HttpTransport`] produced no response.
pub enum TransportFailure {
    /// The request could not be built or was never sent.
    #[error("{0}")]
    Setup(#[source] Box<dyn StdError + Send + Sync>),

    /// The request was sent but no response arrived (DNS, connect, reset, timeout).
    #[error("{0}")]
    Network(#[source] Box<dyn StdError + Send + Sync>),
}

/// The "send a request, get a response" seam.
///
/// [`GateWireClient`] uses [`ReqwestTransport`] by default; plug in another backend with
/// [`GateWireClientBuilder::transport`]. Implementations return every received response,
/// including non-2xx ones. Status handling belongs to the client.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
/// [`HttpTransport`] backed by a `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
            };
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(classify_reqwest_error)?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|err| TransportFailure::Network(Box::new(err)))?;
            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        })
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> TransportFailure {
    if err.is_builder() {
        TransportFailure::Setup(Box::new(err))
    } else {
        TransportFailure::Network(Box::new(err))
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GateWireClient`].
///
/// Every failure of an operation ends up here; no partial result is ever returned.
pub enum GateWireError {
    /// Missing or invalid client configuration (API key, base URL).
    #[error("GateWire configuration error: {0}")]
    Configuration(#[source] ValidationError),

    /// The server answered with a non-2xx status.
    ///
    /// `message` comes from the body's `message` or `error` field, or is
    /// `HTTP Error <status>` when neither is present.
    #[error("GateWire API Error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<String>,
    },

    /// The request was sent but no response was received (DNS, connect, reset, timeout).
    #[error("GateWire Network Error: no response received from server: {0}")]
    Network(#[source] Box<dyn StdError + Send + Sync>),

    /// The request failed before it was sent (serialization, request construction).
    #[error("GateWire SDK Error: {0}")]
    RequestSetup(#[source] Box<dyn StdError + Send + Sync>),

    /// A 2xx response whose body is not the expected JSON.
    #[error("GateWire invalid response (HTTP {status}): {source}")]
    InvalidResponse {
        status: u16,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("GateWire validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl GateWireError {
    /// HTTP status associated with the failure, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::InvalidResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<TransportFailure> for GateWireError {
    fn from(value: TransportFailure) -> Self {
        match value {
            TransportFailure::Setup(err) => Self::RequestSetup(err),
            TransportFailure::Network(err) => Self::Network(err),
        }
    }
}

#[derive(Clone, Default)]
/// Builder for [`GateWireClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or transport.
pub struct GateWireClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl GateWireClientBuilder {
    /// Create an empty builder. An API key must be set before [`build`](Self::build).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key sent as `Authorization: Bearer <key>`.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the base URL (default [`BaseUrl::DEFAULT`]). A trailing `/` is ignored.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the request timeout of the built-in transport (default 10 seconds).
    ///
    /// Has no effect when a custom [`transport`](Self::transport) is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header of the built-in transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom HTTP backend instead of `reqwest`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Timeout the built-in transport will use: the override, or [`DEFAULT_TIMEOUT`].
    pub fn effective_timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Build a [`GateWireClient`].
    ///
    /// Fails with [`GateWireError::Configuration`] when the API key is missing or blank, or
    /// the base URL is not an absolute `http(s)` URL. No request is made.
    pub fn build(self) -> Result<GateWireClient, GateWireError> {
        let timeout = self.effective_timeout();
        let api_key = self
            .api_key
            .ok_or(ValidationError::Empty {
                field: ApiKey::FIELD,
            })
            .and_then(ApiKey::new)
            .map_err(GateWireError::Configuration)?;

        let base_url = match self.base_url {
            Some(value) => BaseUrl::new(value).map_err(GateWireError::Configuration)?,
            None => BaseUrl::default(),
        };

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder().timeout(timeout);
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| GateWireError::RequestSetup(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(GateWireClient {
            api_key,
            base_url,
            http,
        })
    }
}

impl fmt::Debug for GateWireClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateWireClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

#[derive(Clone)]
/// GateWire API client.
///
/// Holds read-only configuration, so a single instance (or its clones) can serve
/// concurrent calls. Each call is one request/response round-trip; nothing is retried.
pub struct GateWireClient {
    api_key: ApiKey,
    base_url: BaseUrl,
    http: Arc<dyn HttpTransport>,
}

impl GateWireClient {
    /// Create a client for the production API with the default timeout.
    ///
    /// For more customization, use [`GateWireClient::builder`].
    pub fn new(api_key: impl Into<String>) -> Result<Self, GateWireError> {
        Self::builder().api_key(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> GateWireClientBuilder {
        GateWireClientBuilder::new()
    }

    /// The normalized base URL requests are sent to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Send an SMS through `POST /dispatch`.
    ///
    /// Returns the response body exactly as the API produced it.
    ///
    /// Errors:
    /// - [`GateWireError::Api`] for non-2xx responses (e.g. 402 on insufficient balance),
    /// - [`GateWireError::Network`] when no response arrives,
    /// - [`GateWireError::InvalidResponse`] when a 2xx body is not JSON.
    #[tracing::instrument(name = "gatewire.dispatch", skip_all, fields(priority = ?request.priority_route()))]
    pub async fn dispatch(&self, request: Dispatch) -> Result<serde_json::Value, GateWireError> {
        let body = crate::transport::encode_dispatch_body(&request)
            .map_err(|err| GateWireError::RequestSetup(Box::new(err)))?;

        let response = self
            .execute(HttpMethod::Post, DISPATCH_PATH, Some(body))
            .await?;

        crate::transport::decode_dispatch_json_response(&response.body).map_err(|err| {
            GateWireError::InvalidResponse {
                status: response.status,
                source: Box::new(err),
            }
        })
    }

    /// Fetch the wallet balance through `GET /balance`.
    ///
    /// The whole body is kept in [`BalanceResponse::raw`]; missing or oddly typed
    /// `balance`/`currency` fields only leave the typed views empty.
    ///
    /// Errors are the same as for [`GateWireClient::dispatch`].
    #[tracing::instrument(name = "gatewire.get_balance", skip_all)]
    pub async fn get_balance(&self) -> Result<BalanceResponse, GateWireError> {
        let response = self.execute(HttpMethod::Get, BALANCE_PATH, None).await?;

        crate::transport::decode_balance_json_response(&response.body).map_err(|err| {
            GateWireError::InvalidResponse {
                status: response.status,
                source: Box::new(err),
            }
        })
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, GateWireError> {
        let request = HttpRequest {
            method,
            url: self.base_url.endpoint(path),
            headers: vec![
                ("Authorization", self.api_key.bearer()),
                ("Content-Type", JSON_CONTENT_TYPE.to_owned()),
                ("Accept", JSON_CONTENT_TYPE.to_owned()),
            ],
            body,
        };
        tracing::debug!(method = ?request.method, url = %request.url, "sending request");

        let response = self.http.send(request).await.map_err(|err| {
            tracing::debug!(error = %err, "request failed without a response");
            GateWireError::from(err)
        })?;
        tracing::debug!(status = response.status, "received response");

        if !response.is_success() {
            let message = crate::transport::decode_api_error_message(response.status, &response.body);
            tracing::warn!(status = response.status, %message, "GateWire API error");
            let body = String::from_utf8_lossy(&response.body);
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body.into_owned())
            };
            return Err(GateWireError::Api {
                status: response.status,
                message,
                body,
            });
        }

        Ok(response)
    }
}

impl fmt::Debug for GateWireClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateWireClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;
    use std::sync::Mutex;

    use serde_json::json;

    use crate::domain::{MessageText, RawPhoneNumber, TemplateKey};

    use super::*;

    type FakeOutcome = Result<(u16, String), fn() -> TransportFailure>;

    #[derive(Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        outcomes: VecDeque<FakeOutcome>,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self::with_outcome(Ok((response_status, response_body.into())))
        }

        fn failing(failure: fn() -> TransportFailure) -> Self {
            Self::with_outcome(Err(failure))
        }

        fn with_outcome(outcome: FakeOutcome) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    outcomes: VecDeque::from([outcome]),
                })),
            }
        }

        fn last_request(&self) -> HttpRequest {
            let state = self.state.lock().unwrap();
            state.requests.last().cloned().expect("no request recorded")
        }

        fn request_count(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
            Box::pin(async move {
                let outcome = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    // The last outcome repeats once the queue is down to one entry.
                    if state.outcomes.len() > 1 {
                        state.outcomes.pop_front().unwrap()
                    } else {
                        state.outcomes.front().cloned().unwrap()
                    }
                };
                match outcome {
                    Ok((status, body)) => Ok(HttpResponse {
                        status,
                        body: body.into_bytes(),
                    }),
                    Err(failure) => Err(failure()),
                }
            })
        }
    }

    fn connection_refused() -> TransportFailure {
        TransportFailure::Network(Box::new(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }

    fn invalid_header() -> TransportFailure {
        TransportFailure::Setup(Box::new(io::Error::new(
            io::ErrorKind::InvalidInput,
            "invalid header value",
        )))
    }

    fn make_client(base_url: &str, transport: FakeTransport) -> GateWireClient {
        GateWireClient::builder()
            .api_key("sk_live_test")
            .base_url(base_url)
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    fn phone() -> RawPhoneNumber {
        RawPhoneNumber::new("+213555000000").unwrap()
    }

    fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn body_json(request: &HttpRequest) -> serde_json::Value {
        serde_json::from_slice(request.body.as_deref().expect("request has no body")).unwrap()
    }

    #[test]
    fn empty_api_key_is_a_configuration_error() {
        for key in ["", "   "] {
            let err = GateWireClient::new(key).unwrap_err();
            assert!(err.is_configuration(), "unexpected error: {err:?}");
        }
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let err = GateWireClient::builder().build().unwrap_err();
        assert!(matches!(
            err,
            GateWireError::Configuration(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn invalid_base_url_is_a_configuration_error() {
        let err = GateWireClient::builder()
            .api_key("sk_live_test")
            .base_url("gatewire.raystate.com/api/v1")
            .build()
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn new_uses_default_base_url() {
        let client = GateWireClient::new("sk_live_test").unwrap();
        assert_eq!(client.base_url().as_str(), BaseUrl::DEFAULT);
    }

    #[test]
    fn built_in_transport_defaults_to_ten_second_timeout() {
        let builder = GateWireClient::builder().api_key("sk_live_test");
        assert_eq!(builder.effective_timeout(), Duration::from_secs(10));
        assert_eq!(builder.effective_timeout(), DEFAULT_TIMEOUT);

        let builder = builder.timeout(Duration::from_millis(250));
        assert_eq!(builder.effective_timeout(), Duration::from_millis(250));
        assert!(builder.build().is_ok());
    }

    #[tokio::test]
    async fn api_key_is_sent_exactly_as_given() {
        let transport = FakeTransport::new(200, "{}");
        let client = GateWireClient::builder()
            .api_key(" sk_live_test ")
            .base_url("https://x/api")
            .transport(Arc::new(transport.clone()))
            .build()
            .unwrap();

        client.dispatch(Dispatch::new(phone())).await.unwrap();
        assert_eq!(
            header(&transport.last_request(), "authorization"),
            Some("Bearer  sk_live_test ")
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let builder = GateWireClient::builder().api_key("sk_live_secret");
        assert!(!format!("{builder:?}").contains("sk_live_secret"));

        let client = builder.build().unwrap();
        assert!(!format!("{client:?}").contains("sk_live_secret"));
    }

    #[tokio::test]
    async fn trailing_slash_does_not_change_request_url() {
        for base in ["https://x/api", "https://x/api/"] {
            let transport = FakeTransport::new(200, "{}");
            let client = make_client(base, transport.clone());

            client.dispatch(Dispatch::new(phone())).await.unwrap();
            assert_eq!(transport.last_request().url, "https://x/api/dispatch");
        }
    }

    #[tokio::test]
    async fn dispatch_posts_json_with_auth_headers() {
        let transport = FakeTransport::new(200, r#"{"id":"msg_1","status":"queued"}"#);
        let client = make_client("https://example.invalid/api/v1", transport.clone());

        let response = client.dispatch(Dispatch::new(phone())).await.unwrap();
        assert_eq!(response, json!({"id": "msg_1", "status": "queued"}));

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/api/v1/dispatch");
        assert_eq!(header(&request, "authorization"), Some("Bearer sk_live_test"));
        assert_eq!(header(&request, "content-type"), Some("application/json"));
        assert_eq!(header(&request, "accept"), Some("application/json"));
        assert_eq!(body_json(&request), json!({"phone": "+213555000000"}));
    }

    #[tokio::test]
    async fn dispatch_sends_high_priority_message() {
        let transport = FakeTransport::new(201, "{}");
        let client = make_client("https://x/api", transport.clone());

        let request = Dispatch::text(phone(), MessageText::new("hi").unwrap()).priority(true);
        client.dispatch(request).await.unwrap();

        let body = transport.last_request().body.unwrap();
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"phone":"+213555000000","message":"hi","priority":"high"}"#
        );
    }

    #[tokio::test]
    async fn dispatch_sends_template_key() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client("https://x/api", transport.clone());

        let request = Dispatch::template_only(phone(), TemplateKey::new("otp").unwrap());
        client.dispatch(request).await.unwrap();

        assert_eq!(
            body_json(&transport.last_request()),
            json!({"phone": "+213555000000", "template_key": "otp"})
        );
    }

    #[tokio::test]
    async fn dispatch_maps_api_error_message_and_status() {
        let transport = FakeTransport::new(402, r#"{"message":"Insufficient balance"}"#);
        let client = make_client("https://x/api", transport);

        let err = client.dispatch(Dispatch::new(phone())).await.unwrap_err();
        assert_eq!(err.status(), Some(402));
        assert!(err.is_api());
        assert!(err.to_string().contains("Insufficient balance"));
        assert_eq!(
            err.to_string(),
            "GateWire API Error (402): Insufficient balance"
        );
        match err {
            GateWireError::Api { message, body, .. } => {
                assert_eq!(message, "Insufficient balance");
                assert_eq!(body.as_deref(), Some(r#"{"message":"Insufficient balance"}"#));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn api_error_falls_back_to_error_field_and_status_text() {
        let transport = FakeTransport::new(401, r#"{"error":"Invalid API key"}"#);
        let client = make_client("https://x/api", transport);
        let err = client.get_balance().await.unwrap_err();
        assert_eq!(err.to_string(), "GateWire API Error (401): Invalid API key");

        let transport = FakeTransport::new(503, "  ");
        let client = make_client("https://x/api", transport);
        let err = client.get_balance().await.unwrap_err();
        assert!(matches!(
            err,
            GateWireError::Api {
                status: 503,
                ref message,
                body: None,
            } if message == "HTTP Error 503"
        ));
    }

    #[tokio::test]
    async fn network_failure_is_distinct_from_api_error() {
        let client = make_client("https://x/api", FakeTransport::failing(connection_refused));

        let err = client.dispatch(Dispatch::new(phone())).await.unwrap_err();
        assert!(err.is_network());
        assert!(!err.is_api());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("GateWire Network Error"));
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn setup_failure_maps_to_request_setup() {
        let client = make_client("https://x/api", FakeTransport::failing(invalid_header));

        let err = client.get_balance().await.unwrap_err();
        assert!(matches!(err, GateWireError::RequestSetup(_)));
        assert!(err.to_string().starts_with("GateWire SDK Error"));
    }

    #[tokio::test]
    async fn non_json_success_body_is_an_invalid_response() {
        let transport = FakeTransport::new(200, "<html>maintenance</html>");
        let client = make_client("https://x/api", transport);

        let err = client.dispatch(Dispatch::new(phone())).await.unwrap_err();
        assert!(matches!(err, GateWireError::InvalidResponse { status: 200, .. }));
    }

    #[tokio::test]
    async fn get_balance_returns_values_unmodified() {
        let transport = FakeTransport::new(200, r#"{"balance":100,"currency":"DZD"}"#);
        let client = make_client("https://x/api/", transport.clone());

        let balance = client.get_balance().await.unwrap();
        assert_eq!(balance.balance.as_ref().map(|it| it.as_str()), Some("100"));
        assert_eq!(balance.currency.as_deref(), Some("DZD"));
        assert_eq!(balance.raw, json!({"balance": 100, "currency": "DZD"}));

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://x/api/balance");
        assert_eq!(request.body, None);
        assert_eq!(header(&request, "authorization"), Some("Bearer sk_live_test"));
        assert_eq!(header(&request, "accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn get_balance_passes_unexpected_shape_through() {
        let transport = FakeTransport::new(200, r#"{"balance":100,"bonus":5}"#);
        let client = make_client("https://x/api", transport);

        let balance = client.get_balance().await.unwrap();
        assert_eq!(balance.currency, None);
        assert_eq!(balance.raw, json!({"balance": 100, "bonus": 5}));
    }

    #[tokio::test]
    async fn get_balance_rejects_non_json_body() {
        let transport = FakeTransport::new(200, "<html>maintenance</html>");
        let client = make_client("https://x/api", transport);

        let err = client.get_balance().await.unwrap_err();
        assert!(matches!(err, GateWireError::InvalidResponse { status: 200, .. }));
    }

    #[tokio::test]
    async fn concurrent_calls_share_one_client() {
        let transport = FakeTransport::new(200, r#"{"balance":"12.00","currency":"DZD"}"#);
        let client = make_client("https://x/api", transport.clone());
        let other = client.clone();

        let (first, second) = tokio::join!(client.get_balance(), other.get_balance());
        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn each_call_is_a_single_round_trip() {
        let transport = FakeTransport::with_outcome(Ok((500, "{}".to_owned())));
        let client = make_client("https://x/api", transport.clone());

        assert!(client.dispatch(Dispatch::new(phone())).await.is_err());
        assert_eq!(transport.request_count(), 1);
    }
}
