//! HTTP client for the VEMU orchestration backend.
//!
//! This module provides:
//!
//! - `OrchestratorClient`: reqwest wrapper bound to a backend base URL
//! - `SimulationRequest`: the JSON body sent to start a simulation
//! - `SimulationResult`: the loosely-typed JSON the backend answers with
//! - `LaunchError`: the two ways a launch can fail
//!
//! The backend is treated as an opaque collaborator. Only the response's
//! `message` field is relied upon; everything else is preserved as-is and
//! shown to the user.

use serde::Serialize;
use serde_json::Value;

/// Path of the simulation launch endpoint, relative to the base URL
pub const SIMULATIONS_PATH: &str = "/api/v1/simulations";

/// Path of the backend health probe
pub const HEALTH_PATH: &str = "/health";

/// User agent for API requests
const USER_AGENT: &str = concat!("vemu-launcher/", env!("CARGO_PKG_VERSION"));

/// Body of `POST /api/v1/simulations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub app_package_id: String,
}

impl SimulationRequest {
    pub fn new(app_package_id: impl Into<String>) -> Self {
        Self {
            app_package_id: app_package_id.into(),
        }
    }
}

/// Why a launch failed
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The backend answered with a non-2xx status
    #[error("Backend returned status {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never got a usable answer (connection, TLS, bad JSON...)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Whatever JSON the orchestrator returned on success.
///
/// Deliberately untyped: the backend's schema is not pinned down, so the
/// launcher only extracts the `message` field and renders the rest verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult(Value);

impl SimulationResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Human-readable `message` field.
    ///
    /// Strings are returned as-is, other scalars and containers are
    /// rendered as compact JSON. `null` or a missing field yields `None`.
    pub fn message(&self) -> Option<String> {
        match self.0.get("message")? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Full result pretty-printed with two-space indentation
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// `simulationStatus`, if the backend reported one
    pub fn simulation_status(&self) -> Option<&str> {
        self.0.get("simulationStatus")?.as_str()
    }

    /// `initialCycle` of the simulator after reset
    pub fn initial_cycle(&self) -> Option<u64> {
        self.0.get("initialCycle")?.as_u64()
    }

    /// Number of tasks in `schedule.schedule`
    pub fn scheduled_tasks(&self) -> Option<usize> {
        self.0
            .get("schedule")?
            .get("schedule")?
            .as_array()
            .map(Vec::len)
    }
}

/// Orchestrator API client
#[derive(Clone)]
pub struct OrchestratorClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrchestratorClient {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:8080`)
    pub fn new(base_url: &str) -> Result<Self, LaunchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_http_client(base_url, client))
    }

    /// Wrap an already configured reqwest client
    pub fn with_http_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ask the orchestrator to run the full simulation workflow.
    ///
    /// One request, no retries and no timeout. A non-2xx answer becomes
    /// `LaunchError::Http` with the raw body text; anything else that goes
    /// wrong (including an unparseable success body) is `Transport`.
    pub async fn run_simulation(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, LaunchError> {
        let start = std::time::Instant::now();
        let url = self.endpoint(SIMULATIONS_PATH);
        tracing::debug!("POST {} ({})", url, request.app_package_id);

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            tracing::warn!("Orchestrator returned status {}", status);
            return Err(LaunchError::Http { status, body });
        }

        let value: Value = response.json().await?;
        tracing::info!(
            "Orchestration for {} finished in {:.1}s",
            request.app_package_id,
            start.elapsed().as_secs_f32()
        );

        Ok(SimulationResult::new(value))
    }

    /// Probe `GET /health`, returning the backend's plain-text answer
    pub async fn health(&self) -> Result<String, LaunchError> {
        let response = self.client.get(self.endpoint(HEALTH_PATH)).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LaunchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::{get, post}};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    /// Client that bypasses any system proxy so loopback servers are reachable
    pub(crate) fn local_client(base_url: &str) -> OrchestratorClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        OrchestratorClient::with_http_client(base_url, http)
    }

    /// Serve `app` on an ephemeral loopback port and return its base URL
    pub(crate) async fn spawn_server(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    /// Backend that answers every launch with a fixed status and body
    pub(crate) async fn spawn_fixed_backend(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            SIMULATIONS_PATH,
            post(move || async move { (status, body) }),
        );
        spawn_server(app).await
    }

    /// An address nothing is listening on
    pub(crate) async fn unused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let body = serde_json::to_string(&SimulationRequest::new("5g-pdsch-mock")).unwrap();
        assert_eq!(body, r#"{"appPackageId":"5g-pdsch-mock"}"#);
    }

    #[test]
    fn test_http_error_message() {
        let err = LaunchError::Http {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned status 500: internal error");
    }

    #[test]
    fn test_result_message_extraction() {
        let result = SimulationResult::new(json!({"message": "ok", "jobs": 3}));
        assert_eq!(result.message().as_deref(), Some("ok"));

        let numeric = SimulationResult::new(json!({"message": 42}));
        assert_eq!(numeric.message().as_deref(), Some("42"));

        assert_eq!(SimulationResult::new(json!({"jobs": 3})).message(), None);
        assert_eq!(SimulationResult::new(json!({"message": null})).message(), None);
        assert_eq!(SimulationResult::new(json!([1, 2])).message(), None);
    }

    #[test]
    fn test_pretty_keeps_backend_key_order() {
        let value: Value = serde_json::from_str(r#"{"message":"ok","jobs":3}"#).unwrap();
        let result = SimulationResult::new(value);
        assert_eq!(result.pretty(), "{\n  \"message\": \"ok\",\n  \"jobs\": 3\n}");
    }

    #[test]
    fn test_known_fields_are_optional() {
        let result = SimulationResult::new(json!({
            "schedule": {"schedule": [{"taskId": "TaskA"}, {"taskId": "TaskB"}]},
            "simulationStatus": "Completed (mock)",
            "initialCycle": 0,
            "message": "Orchestration finished."
        }));
        assert_eq!(result.simulation_status(), Some("Completed (mock)"));
        assert_eq!(result.initial_cycle(), Some(0));
        assert_eq!(result.scheduled_tasks(), Some(2));

        let bare = SimulationResult::new(json!({"message": "ok", "schedule": null}));
        assert_eq!(bare.simulation_status(), None);
        assert_eq!(bare.initial_cycle(), None);
        assert_eq!(bare.scheduled_tasks(), None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = local_client("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.endpoint(SIMULATIONS_PATH),
            "http://localhost:8080/api/v1/simulations"
        );
    }

    #[tokio::test]
    async fn test_run_simulation_posts_package_id() {
        let received: Arc<Mutex<Option<(Option<String>, Value)>>> = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let app = Router::new().route(
            SIMULATIONS_PATH,
            post(move |headers: axum::http::HeaderMap, Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *sink.lock().unwrap() = Some((content_type, body));
                    Json(json!({"message": "ok", "jobs": 3}))
                }
            }),
        );
        let base_url = spawn_server(app).await;

        let result = local_client(&base_url)
            .run_simulation(&SimulationRequest::new("5g-pdsch-mock"))
            .await
            .unwrap();

        assert_eq!(result.value(), &json!({"message": "ok", "jobs": 3}));
        let (content_type, body) = received.lock().unwrap().take().unwrap();
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, json!({"appPackageId": "5g-pdsch-mock"}));
    }

    #[tokio::test]
    async fn test_non_success_status_carries_body_text() {
        let base_url = spawn_fixed_backend(StatusCode::INTERNAL_SERVER_ERROR, "internal error").await;

        let err = local_client(&base_url)
            .run_simulation(&SimulationRequest::new("5g-pdsch-mock"))
            .await
            .unwrap_err();

        match err {
            LaunchError::Http { status, ref body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
        assert_eq!(err.to_string(), "Backend returned status 500: internal error");
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_transport_error() {
        let base_url = spawn_fixed_backend(StatusCode::OK, "not json").await;

        let err = local_client(&base_url)
            .run_simulation(&SimulationRequest::new("5g-pdsch-mock"))
            .await
            .unwrap_err();

        assert!(matches!(err, LaunchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let base_url = unused_base_url().await;

        let err = local_client(&base_url)
            .run_simulation(&SimulationRequest::new("5g-pdsch-mock"))
            .await
            .unwrap_err();

        let LaunchError::Transport(ref inner) = err else {
            panic!("expected transport error, got {err:?}");
        };
        assert!(inner.is_connect());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[tokio::test]
    async fn test_health_returns_text() {
        let app = Router::new().route(HEALTH_PATH, get(|| async { "Orchestrator backend is running!" }));
        let base_url = spawn_server(app).await;

        let text = local_client(&base_url).health().await.unwrap();
        assert_eq!(text, "Orchestrator backend is running!");
    }
}
