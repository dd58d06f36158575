use buntai::{
    BuntaiError, LlmError, PunctuationMode, StyleTransformer, TransformRequest, WritingStyle,
};
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

use crate::gemini_mock::{
    TEST_KEY, config_for, endpoint, error_reply, mount, received_paths, reply,
};

fn desumasu_request(text: &str) -> TransformRequest {
    TransformRequest::new(text, WritingStyle::Desumasu, PunctuationMode::Japanese).unwrap()
}

#[tokio::test]
async fn unsupported_version_falls_through_to_next_version() {
    let server = MockServer::start().await;
    mount(
        &server,
        "v1beta",
        "model-a",
        error_reply(404, "models/model-a is not found for API version v1beta"),
    )
    .await;
    mount(&server, "v1", "model-a", reply("明日は雨です。")).await;

    let config = config_for(&server, &["model-a", "model-b"], &["v1beta", "v1"]);
    let transformer = StyleTransformer::new(config).unwrap();
    let result = transformer
        .transform(&desumasu_request("明日は雨だ。"))
        .await
        .unwrap();

    assert_eq!(result.output_text, "明日は雨です。");
    assert_eq!(result.model, "model-a");
    assert_eq!(result.api_version, "v1");
    assert_eq!(
        received_paths(&server).await,
        vec![endpoint("v1beta", "model-a"), endpoint("v1", "model-a")]
    );
}

#[tokio::test]
async fn capacity_error_skips_remaining_versions_of_that_model() {
    let server = MockServer::start().await;
    mount(
        &server,
        "v1beta",
        "model-a",
        error_reply(429, "Resource has been exhausted (e.g. check quota)."),
    )
    .await;
    mount(&server, "v1", "model-a", reply("使われない応答です。")).await;
    mount(&server, "v1beta", "model-b", reply("予定を変更します。")).await;

    let config = config_for(&server, &["model-a", "model-b"], &["v1beta", "v1"]);
    let transformer = StyleTransformer::new(config).unwrap();
    let result = transformer
        .transform(&desumasu_request("予定を変更する。"))
        .await
        .unwrap();

    assert_eq!(result.model, "model-b");
    assert_eq!(result.api_version, "v1beta");
    assert_eq!(
        received_paths(&server).await,
        vec![endpoint("v1beta", "model-a"), endpoint("v1beta", "model-b")]
    );
}

#[tokio::test]
async fn exhausted_matrix_reports_last_error_without_key() {
    let server = MockServer::start().await;
    mount(&server, "v1beta", "model-a", error_reply(503, "overloaded")).await;
    mount(
        &server,
        "v1beta",
        "model-b",
        error_reply(500, &format!("internal failure for key={TEST_KEY}")),
    )
    .await;

    let config = config_for(&server, &["model-a", "model-b"], &["v1beta"]);
    let transformer = StyleTransformer::new(config).unwrap();
    let err = transformer
        .transform(&desumasu_request("本文だ。"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 502);
    match &err {
        BuntaiError::UpstreamFailed(LlmError::Http { status, model, .. }) => {
            assert_eq!(*status, 500);
            assert_eq!(model, "model-b");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.to_string().contains(TEST_KEY));
}

#[tokio::test]
async fn truncated_generation_is_never_returned() {
    let server = MockServer::start().await;
    mount(
        &server,
        "v1beta",
        "model-a",
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "第一章は序論である。第二章では手法を"}]},
                "finishReason": "MAX_TOKENS"
            }]
        })),
    )
    .await;

    let config = config_for(&server, &["model-a"], &["v1beta"]);
    let transformer = StyleTransformer::new(config).unwrap();
    let err = transformer
        .transform(
            &TransformRequest::new(
                "第一章は序論です。",
                WritingStyle::Dearu,
                PunctuationMode::Japanese,
            )
            .unwrap(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 502);
    assert!(matches!(
        err,
        BuntaiError::UpstreamFailed(LlmError::Truncated { ref finish_reason, .. })
            if finish_reason == "MAX_TOKENS"
    ));
}

#[tokio::test]
async fn high_accuracy_model_is_tried_first() {
    let server = MockServer::start().await;
    mount(&server, "v1beta", "model-pro", reply("精度を優先します。")).await;

    let mut config = (*config_for(&server, &["model-a"], &["v1beta"])).clone();
    config.provider.high_accuracy_model = Some("model-pro".into());
    let transformer = StyleTransformer::new(std::sync::Arc::new(config)).unwrap();

    let request = desumasu_request("精度を優先する。").with_high_accuracy(true);
    let result = transformer.transform(&request).await.unwrap();

    assert_eq!(result.model, "model-pro");
    assert_eq!(received_paths(&server).await, vec![endpoint("v1beta", "model-pro")]);
}
