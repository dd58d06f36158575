#![allow(dead_code)]

use std::sync::Arc;

use buntai::Config;
use buntai::config::ProviderSettings;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TEST_KEY: &str = "AIzaTestKey0123456789";

pub fn endpoint(version: &str, model: &str) -> String {
    format!("/{version}/models/{model}:generateContent")
}

/// Config pointed at `server` with the given candidate matrix.
pub fn config_for(server: &MockServer, models: &[&str], versions: &[&str]) -> Arc<Config> {
    Arc::new(Config {
        provider: ProviderSettings {
            api_key: Some(TEST_KEY.into()),
            base_url: server.uri(),
            models: models.iter().map(ToString::to_string).collect(),
            api_versions: versions.iter().map(ToString::to_string).collect(),
            high_accuracy_model: None,
            timeout_secs: 5,
        },
        ..Config::default()
    })
}

pub fn reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    }))
}

pub fn error_reply(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {"code": status, "message": message, "status": "UNAVAILABLE"}
    }))
}

pub async fn mount(server: &MockServer, version: &str, model: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(endpoint(version, model)))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn body_of(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

pub fn prompt_of(request: &Request) -> String {
    body_of(request)["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn temperature_of(request: &Request) -> f64 {
    body_of(request)["generationConfig"]["temperature"]
        .as_f64()
        .unwrap()
}

pub async fn received_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}
