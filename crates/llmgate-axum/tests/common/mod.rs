//! Shared fixtures for llmgate-axum integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use llmgate_axum::{AxumContext, CorsConfig, create_router};
use llmgate_core::{
    ChatCompletionRequest, EmbeddingRequest, GatewayService, ModelResponse, ModelResponseRequest,
    Settings, UpstreamError, UpstreamPort,
};
use tower::ServiceExt;

/// A call the fake upstream received.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Chat(ChatCompletionRequest),
    Embedding(EmbeddingRequest),
    Response(ModelResponseRequest),
}

/// Upstream port returning canned results and recording every call.
pub struct FakeUpstream {
    chat: Result<String, UpstreamError>,
    embedding: Result<Vec<f64>, UpstreamError>,
    response: Result<ModelResponse, UpstreamError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeUpstream {
    /// Succeeds on every operation.
    pub fn new() -> Self {
        Self {
            chat: Ok("Hello there!".to_string()),
            embedding: Ok(vec![0.01, -0.02, 0.03]),
            response: Ok(ModelResponse {
                text: "Here is the generated reply.".to_string(),
                response_id: "resp_123".to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every operation with `err`.
    pub fn failing(err: UpstreamError) -> Self {
        Self {
            chat: Err(err.clone()),
            embedding: Err(err.clone()),
            response: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: Result<ModelResponse, UpstreamError>) -> Self {
        self.response = response;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl UpstreamPort for FakeUpstream {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<String, UpstreamError> {
        self.record(RecordedCall::Chat(request));
        self.chat.clone()
    }

    async fn create_embedding(&self, request: EmbeddingRequest) -> Result<Vec<f64>, UpstreamError> {
        self.record(RecordedCall::Embedding(request));
        self.embedding.clone()
    }

    async fn create_response(
        &self,
        request: ModelResponseRequest,
    ) -> Result<ModelResponse, UpstreamError> {
        self.record(RecordedCall::Response(request));
        self.response.clone()
    }
}

/// Settings with an API key and all other values at their defaults.
pub fn configured_settings() -> Settings {
    Settings {
        api_key: "sk-test".to_string(),
        ..Settings::default()
    }
}

/// Router over an arbitrary upstream port.
pub fn app_with_port(settings: Settings, upstream: Arc<dyn UpstreamPort>) -> Router {
    let gateway = GatewayService::new(Arc::new(settings), upstream);
    create_router(AxumContext::new(gateway), &CorsConfig::AllowAll)
}

/// Router over a fake upstream.
pub fn app(settings: Settings, upstream: &Arc<FakeUpstream>) -> Router {
    app_with_port(settings, upstream.clone())
}

/// Send a raw body to `uri` and return status plus parsed JSON.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// POST a JSON value to `uri`.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, &body.to_string()).await
}
