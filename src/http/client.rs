//! Low-level HTTP client — `NetworkCampHttp`.
//!
//! One method per API endpoint, each returning the decoded `{ "data": [...] }`
//! envelope. All of them go through [`NetworkCampHttp::get`], which adds
//! bearer authentication and applies the retry policy.

use crate::domain::incident::Incident;
use crate::domain::latency::LatencyDaily;
use crate::domain::monitor::{Monitor, ResponsePoint};
use crate::domain::ListResponse;
use crate::error::{ApiError, HttpError};
use crate::http::retry::RetryPolicy;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::fmt;

/// Number of samples `response_series` asks for when no limit is given.
pub const DEFAULT_RESPONSE_SERIES_LIMIT: u32 = 720;

/// Low-level HTTP client for the Network Camp REST API.
#[derive(Clone)]
pub struct NetworkCampHttp {
    base_url: String,
    /// NEVER exposed publicly.
    api_key: String,
    client: Client,
    retry: RetryPolicy,
}

impl NetworkCampHttp {
    /// Create a client with a default `reqwest::Client`.
    ///
    /// `base_url` is used verbatim: request paths are appended to it as-is.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, HttpError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(base_url, api_key, client))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(base_url: &str, api_key: &str, client: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            client,
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy used by the endpoint methods.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    // ── Monitors ─────────────────────────────────────────────────────────

    /// `GET /v1/monitors`
    pub async fn list_monitors(&self) -> Result<ListResponse<Monitor>, HttpError> {
        self.get("/v1/monitors", &self.retry).await
    }

    /// `GET /v1/monitors/{monitor_id}/response-series?limit=N`
    ///
    /// `limit` defaults to [`DEFAULT_RESPONSE_SERIES_LIMIT`] and is passed
    /// through without bounds checking.
    pub async fn response_series(
        &self,
        monitor_id: &str,
        limit: Option<u32>,
    ) -> Result<ListResponse<ResponsePoint>, HttpError> {
        let path = response_series_path(monitor_id, limit);
        self.get(&path, &self.retry).await
    }

    /// `GET /v1/monitors/{monitor_id}/latency-daily`
    pub async fn latency_daily(
        &self,
        monitor_id: &str,
    ) -> Result<ListResponse<LatencyDaily>, HttpError> {
        let path = format!("/v1/monitors/{}/latency-daily", monitor_id);
        self.get(&path, &self.retry).await
    }

    // ── Incidents ────────────────────────────────────────────────────────

    /// `GET /v1/incidents`
    pub async fn list_incidents(&self) -> Result<ListResponse<Incident>, HttpError> {
        self.get("/v1/incidents", &self.retry).await
    }

    // ── Request executor ─────────────────────────────────────────────────

    /// Authenticated GET of `base_url + path`, retried under `retry`.
    ///
    /// Any failed attempt (transport error or non-2xx status) is retried
    /// until the policy is exhausted, after which a single
    /// [`HttpError::MaxRetriesExceeded`] carrying the last failure is returned.
    /// A 2xx response ends the loop: its body is decoded and returned, and a
    /// decode failure is surfaced as [`HttpError::Decode`] without retrying.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        retry: &RetryPolicy,
    ) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        let config = retry.config();

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(&url).await {
                Ok(resp) => return decode_body(resp).await,
                Err(e) => {
                    if attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        let attempts = config.total_attempts();
        let last_error = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        tracing::debug!(attempts, error = %last_error, "Giving up on request to {}", url);

        Err(HttpError::MaxRetriesExceeded {
            attempts,
            last_error,
        })
    }

    /// One attempt. Returns the response only when its status is 2xx.
    async fn do_request(&self, url: &str) -> Result<Response, HttpError> {
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let status_text = status.canonical_reason().unwrap_or_default();
        let body = match resp.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            // An unreadable error body only loses the detail.
            Err(_) => Vec::new(),
        };

        Err(ApiError::from_body(status.as_u16(), status_text, &body).into())
    }
}

impl fmt::Debug for NetworkCampHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkCampHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("retry", &self.retry)
            .finish()
    }
}

pub(crate) fn response_series_path(monitor_id: &str, limit: Option<u32>) -> String {
    format!(
        "/v1/monitors/{}/response-series?limit={}",
        monitor_id,
        limit.unwrap_or(DEFAULT_RESPONSE_SERIES_LIMIT)
    )
}

async fn decode_body<T: DeserializeOwned>(resp: Response) -> Result<T, HttpError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(HttpError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::retry::RetryConfig;
    use mockito::{Matcher, Server, ServerGuard};
    use std::time::{Duration, Instant};

    const MONITORS_BODY: &str = r#"{"data":[{"id":"m1","domainId":"d1","name":"API","type":"http","status":"up","createdAt":"2024-01-15T10:30:00Z"}]}"#;

    async fn mock_http() -> (NetworkCampHttp, ServerGuard) {
        let server = Server::new_async().await;
        let http = NetworkCampHttp::new(&server.url(), "test-key").unwrap();
        (http, server)
    }

    fn fast_retries(max_retries: u32) -> RetryPolicy {
        RetryPolicy::Custom(
            RetryConfig::standard()
                .with_max_retries(max_retries)
                .with_initial_delay(Duration::from_millis(1)),
        )
    }

    #[test]
    fn test_response_series_path_default_limit() {
        assert_eq!(
            response_series_path("m1", None),
            "/v1/monitors/m1/response-series?limit=720"
        );
        assert_eq!(
            response_series_path("m1", Some(50)),
            "/v1/monitors/m1/response-series?limit=50"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let http = NetworkCampHttp::new("https://example.test", "secret-key").unwrap();
        let debug = format!("{:?}", http);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn sends_bearer_token() {
        let (http, mut server) = mock_http().await;
        let mock = server
            .mock("GET", "/v1/monitors")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .expect(1)
            .create_async()
            .await;

        let resp = http.list_monitors().await.unwrap();
        assert!(resp.data.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn recovers_after_two_server_errors_with_standard_backoff() {
        let (http, mut server) = mock_http().await;
        let failing = server
            .mock("GET", "/v1/monitors")
            .with_status(500)
            .expect(2)
            .create_async()
            .await;
        let ok = server
            .mock("GET", "/v1/monitors")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(MONITORS_BODY)
            .expect(1)
            .create_async()
            .await;

        let started = Instant::now();
        let resp = http.list_monitors().await.unwrap();
        let elapsed = started.elapsed();

        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].id, "m1");
        assert!(elapsed >= Duration::from_millis(750), "elapsed {:?}", elapsed);
        failing.assert_async().await;
        ok.assert_async().await;
    }

    #[tokio::test]
    async fn backoff_restarts_for_each_call() {
        let (http, mut server) = mock_http().await;
        let _monitors_failing = server
            .mock("GET", "/v1/monitors")
            .with_status(500)
            .expect(2)
            .create_async()
            .await;
        let _monitors_ok = server
            .mock("GET", "/v1/monitors")
            .with_status(200)
            .with_body(MONITORS_BODY)
            .expect(1)
            .create_async()
            .await;
        let incidents_failing = server
            .mock("GET", "/v1/incidents")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;
        let incidents_ok = server
            .mock("GET", "/v1/incidents")
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .expect(1)
            .create_async()
            .await;

        http.list_monitors().await.unwrap();

        // One failure on a fresh call waits the initial 250ms, not the 1000ms
        // a carried-over schedule would have reached.
        let started = Instant::now();
        http.list_incidents().await.unwrap();
        let elapsed = started.elapsed();

        assert!(elapsed >= Duration::from_millis(250), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(750), "elapsed {:?}", elapsed);
        incidents_failing.assert_async().await;
        incidents_ok.assert_async().await;
    }

    #[tokio::test]
    async fn exhaustion_reports_attempts_and_last_error() {
        for retries in 0..=3u32 {
            let (http, mut server) = mock_http().await;
            let mock = server
                .mock("GET", "/v1/incidents")
                .with_status(500)
                .expect(retries as usize + 1)
                .create_async()
                .await;

            let err = http
                .get::<ListResponse<Incident>>("/v1/incidents", &fast_retries(retries))
                .await
                .unwrap_err();

            match &err {
                HttpError::MaxRetriesExceeded { attempts, .. } => {
                    assert_eq!(*attempts, retries + 1)
                }
                other => panic!("unexpected error: {other}"),
            }
            let msg = err.to_string();
            assert!(msg.contains(&format!("after {} attempts", retries + 1)), "{msg}");
            assert!(msg.contains("NetworkCamp API error: 500 Internal Server Error"), "{msg}");
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn success_short_circuits_remaining_retries() {
        let (http, mut server) = mock_http().await;
        let mock = server
            .mock("GET", "/v1/monitors")
            .with_status(200)
            .with_body(MONITORS_BODY)
            .expect(1)
            .create_async()
            .await;

        let resp: ListResponse<Monitor> = http.get("/v1/monitors", &fast_retries(5)).await.unwrap();
        assert_eq!(resp.data[0].domain_id, "d1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unauthorized_is_hinted_and_still_retried() {
        let (http, mut server) = mock_http().await;
        let mock = server
            .mock("GET", "/v1/monitors")
            .with_status(401)
            .with_body(r#"{"error":"invalid api key"}"#)
            .expect(3)
            .create_async()
            .await;

        let err = http
            .get::<ListResponse<Monitor>>("/v1/monitors", &fast_retries(2))
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("401 Unauthorized - invalid api key"), "{msg}");
        assert!(msg.contains("Unauthorized: check your API key"), "{msg}");
        assert!(!msg.contains("Rate limit exceeded"), "{msg}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rate_limit_is_hinted() {
        let (http, mut server) = mock_http().await;
        let _mock = server
            .mock("GET", "/v1/incidents")
            .with_status(429)
            .create_async()
            .await;

        let err = http
            .get::<ListResponse<Incident>>("/v1/incidents", &fast_retries(0))
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Rate limit exceeded: slow down requests"), "{msg}");
        assert!(!msg.contains("check your API key"), "{msg}");
    }

    #[tokio::test]
    async fn non_json_error_body_is_ignored() {
        let (http, mut server) = mock_http().await;
        let _mock = server
            .mock("GET", "/v1/incidents")
            .with_status(503)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = http
            .get::<ListResponse<Incident>>("/v1/incidents", &fast_retries(0))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "NetworkCamp SDK request failed after 1 attempts: NetworkCamp API error: 503 Service Unavailable"
        );
    }

    #[tokio::test]
    async fn last_error_wins_over_earlier_failures() {
        let (http, mut server) = mock_http().await;
        let first = server
            .mock("GET", "/v1/monitors")
            .with_status(502)
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/v1/monitors")
            .with_status(429)
            .expect(1)
            .create_async()
            .await;

        let err = http
            .get::<ListResponse<Monitor>>("/v1/monitors", &fast_retries(1))
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("429 Too Many Requests"), "{msg}");
        assert!(!msg.contains("502"), "{msg}");
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn invalid_success_body_is_not_retried() {
        let (http, mut server) = mock_http().await;
        let mock = server
            .mock("GET", "/v1/monitors")
            .with_status(200)
            .with_body("not json")
            .expect(1)
            .create_async()
            .await;

        let err = http
            .get::<ListResponse<Monitor>>("/v1/monitors", &fast_retries(3))
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)), "{err}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn transport_errors_are_retried() {
        let http = NetworkCampHttp::new("http://127.0.0.1:9", "test-key").unwrap();

        let err = http
            .get::<ListResponse<Monitor>>("/v1/monitors", &fast_retries(1))
            .await
            .unwrap_err();
        match &err {
            HttpError::MaxRetriesExceeded {
                attempts,
                last_error,
            } => {
                assert_eq!(*attempts, 2);
                assert!(last_error.starts_with("Request failed"), "{last_error}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn none_policy_makes_a_single_attempt() {
        let (http, mut server) = mock_http().await;
        let http = http.with_retry_policy(RetryPolicy::None);
        let mock = server
            .mock("GET", "/v1/monitors")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let err = http.list_monitors().await.unwrap_err();
        assert!(err.to_string().contains("after 1 attempts"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn response_series_uses_default_limit() {
        let (http, mut server) = mock_http().await;
        let mock = server
            .mock("GET", "/v1/monitors/m1/response-series")
            .match_query(Matcher::UrlEncoded("limit".into(), "720".into()))
            .with_status(200)
            .with_body(
                r#"{"data":[{"timestamp":"2024-05-01T12:00:00Z","responseTimeMs":120,"status":"up"}]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let resp = http.response_series("m1", None).await.unwrap();
        assert_eq!(resp.data[0].response_time_ms, 120.0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn response_series_passes_explicit_limit() {
        let (http, mut server) = mock_http().await;
        let mock = server
            .mock("GET", "/v1/monitors/m1/response-series")
            .match_query(Matcher::UrlEncoded("limit".into(), "0".into()))
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .expect(1)
            .create_async()
            .await;

        let resp = http.response_series("m1", Some(0)).await.unwrap();
        assert!(resp.data.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn latency_daily_hits_monitor_path() {
        let (http, mut server) = mock_http().await;
        let mock = server
            .mock("GET", "/v1/monitors/m7/latency-daily")
            .with_status(200)
            .with_body(r#"{"data":[{"date":"2024-05-01","p50":100,"p95":200,"p99":300,"count":1440}]}"#)
            .expect(1)
            .create_async()
            .await;

        let resp = http.latency_daily("m7").await.unwrap();
        assert_eq!(resp.data[0].p99, 300.0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn base_url_is_concatenated_verbatim() {
        let mut server = Server::new_async().await;
        let base = format!("{}/api", server.url());
        let http = NetworkCampHttp::new(&base, "test-key").unwrap();
        let mock = server
            .mock("GET", "/api/v1/incidents")
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .expect(1)
            .create_async()
            .await;

        http.list_incidents().await.unwrap();
        mock.assert_async().await;
    }
}
