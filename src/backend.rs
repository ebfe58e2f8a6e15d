use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use futures_util::StreamExt;
use reqwest::redirect::Policy;
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::time::{timeout, Instant};
use tower_http::services::{ServeDir, ServeFile};
use url::Url;

use crate::contact::{ContactLimits, ContactMessage, RelayResponse, CONTACT_ENDPOINT};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_MAIL_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_RELAY_TIMEOUT_MS: u64 = 8_000;
const DEFAULT_RELAY_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_MAX_MESSAGE_CHARS: usize = 5_000;
const DEFAULT_RESPONSE_MAX_BYTES: usize = 4_096;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const RELAY_TIMEOUT_MS_BOUNDS: (u64, u64) = (500, 60_000);
const MAX_MESSAGE_CHARS_BOUNDS: (usize, usize) = (100, 20_000);
const RESPONSE_MAX_BYTES_BOUNDS: (usize, usize) = (256, 65_536);
/// Worst case per character is an escaped surrogate pair, `\uXXXX\uXXXX`.
const JSON_BYTES_PER_CHAR: usize = 12;
const REQUEST_BODY_OVERHEAD_BYTES: usize = 1_024;
const LOGGED_UPSTREAM_BODY_CHARS: usize = 200;
const USER_AGENT: &str = "folio-contact-relay/1.0";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct MailAccount {
    endpoint: Url,
    service_id: String,
    template_id: String,
    public_key: String,
    private_key: Option<String>,
}

#[derive(Clone)]
struct RelayRuntimeConfig {
    static_dir: PathBuf,
    mail_account: Option<MailAccount>,
    relay_timeout: Duration,
    connect_timeout: Duration,
    limits: ContactLimits,
    response_max_bytes: usize,
    log_level: LogLevel,
}

impl RelayRuntimeConfig {
    fn from_env() -> Self {
        let static_dir = parse_env_non_empty_string("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let relay_timeout_ms = parse_env_u64_with_bounds(
            "CONTACT_RELAY_TIMEOUT_MS",
            DEFAULT_RELAY_TIMEOUT_MS,
            RELAY_TIMEOUT_MS_BOUNDS,
        );
        let message_chars = parse_env_usize_with_bounds(
            "CONTACT_MAX_MESSAGE_CHARS",
            DEFAULT_MAX_MESSAGE_CHARS,
            MAX_MESSAGE_CHARS_BOUNDS,
        );
        let response_max_bytes = parse_env_usize_with_bounds(
            "CONTACT_RESPONSE_MAX_BYTES",
            DEFAULT_RESPONSE_MAX_BYTES,
            RESPONSE_MAX_BYTES_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            static_dir,
            mail_account: mail_account_from_env(),
            relay_timeout: Duration::from_millis(relay_timeout_ms),
            connect_timeout: Duration::from_millis(DEFAULT_RELAY_CONNECT_TIMEOUT_MS),
            limits: ContactLimits {
                message_chars,
                ..ContactLimits::default()
            },
            response_max_bytes,
            log_level,
        }
    }
}

fn mail_account_from_env() -> Option<MailAccount> {
    Some(MailAccount {
        endpoint: parse_env_http_url("EMAILJS_API_URL")
            .or_else(|| Url::parse(DEFAULT_MAIL_API_URL).ok())?,
        service_id: parse_env_non_empty_string("EMAILJS_SERVICE_ID")?,
        template_id: parse_env_non_empty_string("EMAILJS_TEMPLATE_ID")?,
        public_key: parse_env_non_empty_string("EMAILJS_PUBLIC_KEY")?,
        private_key: parse_env_non_empty_string("EMAILJS_PRIVATE_KEY"),
    })
}

#[derive(Clone)]
pub struct AppState {
    client: reqwest::Client,
    config: RelayRuntimeConfig,
}

#[derive(Serialize)]
struct MailApiRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    message: &'a str,
}

impl<'a> MailApiRequest<'a> {
    fn new(account: &'a MailAccount, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &account.service_id,
            template_id: &account.template_id,
            user_id: &account.public_key,
            access_token: account.private_key.as_deref(),
            template_params: TemplateParams {
                user_name: &message.name,
                user_email: &message.email,
                message: &message.message,
            },
        }
    }
}

struct RelayFailure {
    error_class: &'static str,
    status_code: Option<u16>,
    status_class: Option<&'static str>,
    upstream_body: Option<String>,
}

impl RelayFailure {
    fn new(error_class: &'static str) -> Self {
        Self {
            error_class,
            status_code: None,
            status_class: None,
            upstream_body: None,
        }
    }

    fn response_status(&self) -> StatusCode {
        if self.error_class == "upstream_timeout" {
            StatusCode::GATEWAY_TIMEOUT
        } else {
            StatusCode::BAD_GATEWAY
        }
    }
}

fn build_relay_client(config: &RelayRuntimeConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .timeout(config.relay_timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(USER_AGENT)
        .build()
}

fn request_body_limit(limits: &ContactLimits) -> usize {
    (limits.name_chars + limits.email_chars + limits.message_chars) * JSON_BYTES_PER_CHAR
        + REQUEST_BODY_OVERHEAD_BYTES
}

fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let static_service = ServeDir::new(&static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route(CONTACT_ENDPOINT, post(post_contact))
        .fallback_service(static_service)
        .with_state(state)
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let bind_address = format!("0.0.0.0:{port}");
    let config = RelayRuntimeConfig::from_env();
    let client = build_relay_client(&config)?;

    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "port": port,
            "static_dir": config.static_dir.display().to_string(),
            "relay_configured": config.mail_account.is_some(),
            "relay_timeout_ms": config.relay_timeout.as_millis(),
        }),
    );

    let app = router(AppState { client, config });
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("server listening on http://127.0.0.1:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn post_contact(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> axum::response::Response {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);

    let body = match axum::body::to_bytes(body, request_body_limit(&state.config.limits)).await {
        Ok(body) => body,
        Err(_) => {
            return reject(
                &state,
                &request_id,
                request_started_at,
                StatusCode::PAYLOAD_TOO_LARGE,
                "body_too_large",
            )
        }
    };

    log_event(
        &state.config,
        LogLevel::Info,
        "contact_request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": uri.path(),
            "body_bytes": body.len(),
        }),
    );

    let submitted = match serde_json::from_slice::<ContactMessage>(&body) {
        Ok(message) => message,
        Err(_) => {
            return reject(&state, &request_id, request_started_at, StatusCode::BAD_REQUEST, "invalid_json")
        }
    };

    let message = match submitted.validate(&state.config.limits) {
        Ok(message) => message,
        Err(error) => {
            return reject(
                &state,
                &request_id,
                request_started_at,
                StatusCode::BAD_REQUEST,
                error.as_str(),
            )
        }
    };

    let Some(account) = state.config.mail_account.as_ref() else {
        return reject(
            &state,
            &request_id,
            request_started_at,
            StatusCode::SERVICE_UNAVAILABLE,
            "relay_unconfigured",
        );
    };

    let relayed = match timeout(
        state.config.relay_timeout,
        forward_to_mail_api(&state, account, &message, &request_id),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(RelayFailure::new("upstream_timeout")),
    };

    if let Err(failure) = relayed {
        log_event(
            &state.config,
            LogLevel::Info,
            "contact_relay_failed",
            serde_json::json!({
                "request_id": request_id.as_str(),
                "error_class": failure.error_class,
                "upstream_status_code": failure.status_code,
                "upstream_status_class": failure.status_class,
            }),
        );
        if let Some(upstream_body) = failure.upstream_body.as_deref() {
            log_event(
                &state.config,
                LogLevel::Debug,
                "contact_relay_upstream_body",
                serde_json::json!({
                    "request_id": request_id.as_str(),
                    "body": upstream_body,
                }),
            );
        }
        return reject(
            &state,
            &request_id,
            request_started_at,
            failure.response_status(),
            failure.error_class,
        );
    }

    log_event(
        &state.config,
        LogLevel::Info,
        "contact_request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "status": StatusCode::OK.as_u16(),
            "duration_ms": request_started_at.elapsed().as_millis(),
            "message_chars": message.message.chars().count(),
        }),
    );

    json_response(StatusCode::OK, RelayResponse::sent(), &request_id)
}

fn reject(
    state: &AppState,
    request_id: &str,
    request_started_at: Instant,
    status: StatusCode,
    error_class: &'static str,
) -> axum::response::Response {
    log_event(
        &state.config,
        LogLevel::Info,
        "contact_request_failed",
        serde_json::json!({
            "request_id": request_id,
            "status": status.as_u16(),
            "error_class": error_class,
            "duration_ms": request_started_at.elapsed().as_millis(),
        }),
    );

    json_response(status, RelayResponse::failed(error_class), request_id)
}

async fn forward_to_mail_api(
    state: &AppState,
    account: &MailAccount,
    message: &ContactMessage,
    request_id: &str,
) -> Result<(), RelayFailure> {
    let response = state
        .client
        .post(account.endpoint.clone())
        .header(REQUEST_ID_HEADER, request_id)
        .json(&MailApiRequest::new(account, message))
        .send()
        .await
        .map_err(|error| {
            if error.is_timeout() {
                RelayFailure::new("upstream_timeout")
            } else {
                RelayFailure::new("upstream_unreachable")
            }
        })?;

    let status = response.status();
    let body = read_limited_body(response, state.config.response_max_bytes).await;

    log_event(
        &state.config,
        LogLevel::Debug,
        "contact_relay_upstream_response",
        serde_json::json!({
            "request_id": request_id,
            "upstream_status_code": status.as_u16(),
            "body_read_ok": body.is_ok(),
        }),
    );

    if !status.is_success() {
        return Err(RelayFailure {
            error_class: "upstream_status",
            status_code: Some(status.as_u16()),
            status_class: Some(http_status_class(status)),
            upstream_body: body
                .ok()
                .map(|text| text.chars().take(LOGGED_UPSTREAM_BODY_CHARS).collect()),
        });
    }

    Ok(())
}

fn http_status_class(status: reqwest::StatusCode) -> &'static str {
    if status.is_informational() {
        return "1xx";
    }

    if status.is_success() {
        return "2xx";
    }

    if status.is_redirection() {
        return "3xx";
    }

    if status.is_client_error() {
        return "4xx";
    }

    if status.is_server_error() {
        return "5xx";
    }

    "unknown"
}

async fn read_limited_body(
    response: reqwest::Response,
    max_response_bytes: usize,
) -> Result<String, &'static str> {
    let mut stream = response.bytes_stream();
    let mut body: Vec<u8> = Vec::with_capacity(max_response_bytes.min(1024));

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|_| "failed reading response body")?;

        if body.len() + chunk.len() > max_response_bytes {
            return Err("response body too large");
        }

        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).to_string())
}

fn json_response(
    status: StatusCode,
    payload: RelayResponse,
    request_id: &str,
) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response_with_request_id(status, headers, Json(payload), request_id)
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_usize_with_bounds(name: &str, default: usize, bounds: (usize, usize)) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_http_url(name: &str) -> Option<Url> {
    let value = parse_env_non_empty_string(name)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn response_with_request_id(
    status: StatusCode,
    mut headers: HeaderMap,
    payload: impl IntoResponse,
    request_id: &str,
) -> axum::response::Response {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    (status, headers, payload).into_response()
}

fn log_event(config: &RelayRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct FakeMailApi {
        status: StatusCode,
        delay: Duration,
        received: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>,
    }

    async fn fake_send(
        State(fake): State<FakeMailApi>,
        headers: HeaderMap,
        Json(payload): Json<serde_json::Value>,
    ) -> impl IntoResponse {
        tokio::time::sleep(fake.delay).await;
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        fake.received.lock().await.push((request_id, payload));

        let body = if fake.status.is_success() {
            "OK"
        } else {
            "The user ID is invalid"
        };
        (fake.status, body)
    }

    async fn spawn(app: Router) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let address = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        address
    }

    async fn spawn_fake_mail_api(status: StatusCode, delay: Duration) -> (Url, FakeMailApi) {
        let fake = FakeMailApi {
            status,
            delay,
            received: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/api/v1.0/email/send", post(fake_send))
            .with_state(fake.clone());
        let address = spawn(app).await;
        let url = Url::parse(&format!("http://{address}/api/v1.0/email/send")).expect("fake URL");
        (url, fake)
    }

    fn test_runtime_config(mail_account: Option<MailAccount>) -> RelayRuntimeConfig {
        RelayRuntimeConfig {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            mail_account,
            relay_timeout: Duration::from_millis(DEFAULT_RELAY_TIMEOUT_MS),
            connect_timeout: Duration::from_millis(DEFAULT_RELAY_CONNECT_TIMEOUT_MS),
            limits: ContactLimits::default(),
            response_max_bytes: DEFAULT_RESPONSE_MAX_BYTES,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    fn test_account(endpoint: Url, private_key: Option<&str>) -> MailAccount {
        MailAccount {
            endpoint,
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            private_key: private_key.map(ToString::to_string),
        }
    }

    fn test_state(config: RelayRuntimeConfig) -> AppState {
        let client = build_relay_client(&config).expect("client builds");
        AppState { client, config }
    }

    fn unused_url() -> Url {
        Url::parse("http://127.0.0.1:9/unused").expect("valid URL")
    }

    async fn submit(state: AppState, body: &str, request_id: Option<&str>) -> (StatusCode, HeaderMap, RelayResponse) {
        let mut headers = HeaderMap::new();
        if let Some(value) = request_id {
            headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(value).expect("header value"));
        }

        let response = post_contact(
            State(state),
            Method::POST,
            Uri::from_static("/api/contact"),
            headers,
            Body::from(body.to_string()),
        )
        .await;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        let payload = serde_json::from_slice(&bytes).expect("relay response JSON");
        (status, headers, payload)
    }

    const VALID_BODY: &str = r#"{"name":" Ada ","email":"ada@example.com","message":"Hello there"}"#;

    #[tokio::test]
    async fn invalid_submissions_are_rejected_before_relaying() {
        let state = test_state(test_runtime_config(Some(test_account(unused_url(), None))));

        let (status, headers, payload) = submit(state.clone(), "not json", Some("req-fixed")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload, RelayResponse::failed("invalid_json"));
        assert_eq!(
            headers.get(REQUEST_ID_HEADER).and_then(|value| value.to_str().ok()),
            Some("req-fixed")
        );
        assert_eq!(
            headers.get(header::CACHE_CONTROL).and_then(|value| value.to_str().ok()),
            Some("no-store")
        );

        let (status, _, payload) =
            submit(state, r#"{"name":"Ada","email":"nope","message":"hi"}"#, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload.error.as_deref(), Some("invalid_email"));
    }

    #[tokio::test]
    async fn missing_credentials_report_unavailable() {
        let state = test_state(test_runtime_config(None));

        let (status, headers, payload) = submit(state, VALID_BODY, None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.error.as_deref(), Some("relay_unconfigured"));
        let generated = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .expect("generated request id");
        assert!(generated.starts_with("req-"));
    }

    #[tokio::test]
    async fn accepted_message_is_forwarded_with_template_params() {
        let (url, fake) = spawn_fake_mail_api(StatusCode::OK, Duration::ZERO).await;
        let state = test_state(test_runtime_config(Some(test_account(url, Some("private_test")))));

        let (status, _, payload) = submit(state, VALID_BODY, Some("req-relay")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, RelayResponse::sent());

        let received = fake.received.lock().await;
        assert_eq!(received.len(), 1);
        let (request_id, body) = &received[0];
        assert_eq!(request_id.as_deref(), Some("req-relay"));
        assert_eq!(
            body,
            &serde_json::json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "public_test",
                "accessToken": "private_test",
                "template_params": {
                    "user_name": "Ada",
                    "user_email": "ada@example.com",
                    "message": "Hello there",
                },
            })
        );
    }

    #[tokio::test]
    async fn access_token_is_omitted_without_a_private_key() {
        let (url, fake) = spawn_fake_mail_api(StatusCode::OK, Duration::ZERO).await;
        let state = test_state(test_runtime_config(Some(test_account(url, None))));

        let (status, _, _) = submit(state, VALID_BODY, None).await;
        assert_eq!(status, StatusCode::OK);

        let received = fake.received.lock().await;
        assert!(received[0].1.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn upstream_rejection_maps_to_bad_gateway() {
        let (url, _fake) = spawn_fake_mail_api(StatusCode::BAD_REQUEST, Duration::ZERO).await;
        let state = test_state(test_runtime_config(Some(test_account(url, None))));

        let (status, _, payload) = submit(state, VALID_BODY, None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(payload.error.as_deref(), Some("upstream_status"));
    }

    #[tokio::test]
    async fn slow_upstream_maps_to_gateway_timeout() {
        let (url, _fake) = spawn_fake_mail_api(StatusCode::OK, Duration::from_millis(1_500)).await;
        let mut config = test_runtime_config(Some(test_account(url, None)));
        config.relay_timeout = Duration::from_millis(100);
        let state = test_state(config);

        let (status, _, payload) = submit(state, VALID_BODY, None).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(payload.error.as_deref(), Some("upstream_timeout"));
    }

    #[tokio::test]
    async fn unreachable_upstream_maps_to_bad_gateway() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind throwaway listener");
        let address = listener.local_addr().expect("throwaway address");
        drop(listener);

        let url = Url::parse(&format!("http://{address}/send")).expect("valid URL");
        let state = test_state(test_runtime_config(Some(test_account(url, None))));

        let (status, _, payload) = submit(state, VALID_BODY, None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(payload.error.as_deref(), Some("upstream_unreachable"));
    }

    #[tokio::test]
    async fn oversized_upstream_body_is_cut_off() {
        let app = Router::new().route("/big", get(|| async { "x".repeat(10_000) }));
        let address = spawn(app).await;

        let response = reqwest::get(format!("http://{address}/big"))
            .await
            .expect("fetch big body");
        assert_eq!(
            read_limited_body(response, 1_024).await,
            Err("response body too large")
        );
    }

    #[tokio::test]
    async fn router_serves_spa_shell_for_unknown_paths() {
        let static_dir = std::env::temp_dir().join(format!("folio-static-{}", generate_request_id()));
        std::fs::create_dir_all(&static_dir).expect("create static dir");
        std::fs::write(static_dir.join("index.html"), "<main>portfolio</main>").expect("write index");

        let mut config = test_runtime_config(None);
        config.static_dir = static_dir.clone();
        let address = spawn(router(test_state(config))).await;

        let shell = reqwest::get(format!("http://{address}/work/anything"))
            .await
            .expect("fetch unknown path")
            .text()
            .await
            .expect("shell body");
        assert_eq!(shell, "<main>portfolio</main>");

        let relay = reqwest::Client::new()
            .post(format!("http://{address}{CONTACT_ENDPOINT}"))
            .body(VALID_BODY)
            .send()
            .await
            .expect("post contact");
        assert_eq!(relay.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);

        let _ = std::fs::remove_dir_all(static_dir);
    }

    #[tokio::test]
    async fn router_accepts_a_long_message_of_multibyte_characters() {
        let (endpoint, fake) = spawn_fake_mail_api(StatusCode::OK, Duration::ZERO).await;
        let mut config = test_runtime_config(Some(test_account(endpoint, None)));
        config.limits.message_chars = MAX_MESSAGE_CHARS_BOUNDS.1;
        let address = spawn(router(test_state(config))).await;

        let body = serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "🚀".repeat(19_000),
        });
        let response = reqwest::Client::new()
            .post(format!("http://{address}{CONTACT_ENDPOINT}"))
            .json(&body)
            .send()
            .await
            .expect("post contact");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let payload: RelayResponse = response.json().await.expect("relay response JSON");
        assert_eq!(payload, RelayResponse::sent());
        assert_eq!(fake.received.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn oversized_request_body_is_rejected_as_json() {
        let mut config = test_runtime_config(Some(test_account(unused_url(), None)));
        config.limits.message_chars = MAX_MESSAGE_CHARS_BOUNDS.0;
        let limit = request_body_limit(&config.limits);
        let address = spawn(router(test_state(config))).await;

        let response = reqwest::Client::new()
            .post(format!("http://{address}{CONTACT_ENDPOINT}"))
            .header(REQUEST_ID_HEADER, "req-large")
            .body("x".repeat(limit + 1))
            .send()
            .await
            .expect("post contact");
        assert_eq!(response.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).and_then(|value| value.to_str().ok()),
            Some("req-large")
        );
        let payload: RelayResponse = response.json().await.expect("relay response JSON");
        assert_eq!(payload, RelayResponse::failed("body_too_large"));
    }

    #[test]
    fn body_limit_covers_the_largest_allowed_message() {
        let limits = ContactLimits {
            message_chars: MAX_MESSAGE_CHARS_BOUNDS.1,
            ..ContactLimits::default()
        };
        let widest = "\\ud83d\\ude80".repeat(limits.message_chars);
        let body = format!(r#"{{"name":"","email":"","message":"{widest}"}}"#);
        assert!(body.len() < request_body_limit(&limits));
        assert!(request_body_limit(&ContactLimits::default()) < request_body_limit(&limits));
    }

    #[test]
    fn log_levels_order_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(parse_log_level("FOLIO_TEST_UNSET_LOG_LEVEL", LogLevel::Info), LogLevel::Info);
    }

    #[test]
    fn status_classes_group_by_hundreds() {
        assert_eq!(http_status_class(reqwest::StatusCode::OK), "2xx");
        assert_eq!(http_status_class(reqwest::StatusCode::FORBIDDEN), "4xx");
        assert_eq!(http_status_class(reqwest::StatusCode::BAD_GATEWAY), "5xx");
    }
}
