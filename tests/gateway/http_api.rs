use std::net::SocketAddr;

use buntai::gateway::{AppState, MAX_BODY_SIZE, build_router};
use serde_json::{Value, json};
use wiremock::MockServer;

use crate::gemini_mock::{config_for, mount, reply};

const MODEL: &str = "gemini-test";

async fn spawn_gateway(server: &MockServer) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let state = AppState::from_config(config_for(server, &[MODEL], &["v1beta"])).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });
    (addr, handle)
}

#[tokio::test]
async fn transform_round_trip_over_http() {
    let server = MockServer::start().await;
    mount(&server, "v1beta", MODEL, reply("計画は順調だ。")).await;
    let (addr, handle) = spawn_gateway(&server).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/transform"))
        .json(&json!({
            "text": "計画は順調です。",
            "writingStyle": "dearu",
            "punctuationMode": "academic"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["outputText"], "計画は順調だ．");
    assert_eq!(body["writingStyle"], "dearu");
    assert_eq!(body["punctuationMode"], "academic");
    assert_eq!(body["attempts"], 1);
    assert_eq!(body["model"], MODEL);

    handle.abort();
}

#[tokio::test]
async fn unknown_style_is_a_client_error() {
    let server = MockServer::start().await;
    let (addr, handle) = spawn_gateway(&server).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/transform"))
        .json(&json!({"text": "本文", "writingStyle": "keigo"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert!(server.received_requests().await.unwrap().is_empty());

    handle.abort();
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    let (addr, handle) = spawn_gateway(&server).await;

    // Three UTF-8 bytes per character puts the body just over the limit.
    let text = "あ".repeat(MAX_BODY_SIZE / 3 + 16);
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/stats"))
        .json(&json!({ "text": text }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 413);

    handle.abort();
}

#[tokio::test]
async fn stats_and_punctuate_work_without_upstream() {
    let server = MockServer::start().await;
    let (addr, handle) = spawn_gateway(&server).await;
    let client = reqwest::Client::new();

    let stats: Value = client
        .post(format!("http://{addr}/api/stats"))
        .json(&json!({"text": "一行目だ。\n二行目だ。"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["lines"], 2);
    assert_eq!(stats["sentences"], 2);

    let punctuated: Value = client
        .post(format!("http://{addr}/api/punctuate"))
        .json(&json!({"text": "はい、そうだ。", "punctuationMode": "western"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(punctuated["text"], "はい,そうだ.");

    assert!(server.received_requests().await.unwrap().is_empty());
    handle.abort();
}
