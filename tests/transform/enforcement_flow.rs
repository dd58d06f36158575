use buntai::{BuntaiError, PunctuationMode, StyleTransformer, TransformRequest, WritingStyle};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::gemini_mock::{config_for, endpoint, mount, prompt_of, reply, temperature_of};

const MODEL: &str = "gemini-test";

fn request(text: &str, style: WritingStyle) -> TransformRequest {
    TransformRequest::new(text, style, PunctuationMode::Japanese).unwrap()
}

#[tokio::test]
async fn polite_output_is_corrected_on_second_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("v1beta", MODEL)))
        .respond_with(reply("会議は明日です。資料を準備した。"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "v1beta",
        MODEL,
        reply("会議は明日だ。資料を準備した。"),
    )
    .await;

    let transformer = StyleTransformer::new(config_for(&server, &[MODEL], &["v1beta"])).unwrap();
    let result = transformer
        .transform(
            &request("会議は明日です。資料を準備しました。", WritingStyle::Dearu)
                .with_temperature(0.9)
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(result.output_text, "会議は明日だ。資料を準備した。");
    assert_eq!(result.attempts, 2);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!((temperature_of(&requests[0]) - 0.9).abs() < 1e-9);
    assert!(temperature_of(&requests[1]) <= 0.3);

    let retry_prompt = prompt_of(&requests[1]);
    assert!(retry_prompt.contains("前回の出力には"));
    assert!(retry_prompt.contains("- 会議は明日です"));
    assert!(!prompt_of(&requests[0]).contains("前回の出力には"));
}

#[tokio::test]
async fn persistent_polite_output_fails_after_four_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("v1beta", MODEL)))
        .respond_with(reply("結果を報告します。"))
        .expect(4)
        .mount(&server)
        .await;

    let transformer = StyleTransformer::new(config_for(&server, &[MODEL], &["v1beta"])).unwrap();
    let err = transformer
        .transform(&request("結果を報告します。", WritingStyle::DearuNatural))
        .await
        .unwrap_err();

    assert!(matches!(err, BuntaiError::NonCompliant { .. }));
    assert_eq!(err.status_code(), 502);
    assert!(err.to_string().contains("結果を報告します"));

    let temperatures: Vec<f64> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(temperature_of)
        .collect();
    assert!(temperatures.windows(2).all(|pair| pair[1] <= pair[0]));
    assert!(temperatures[3].abs() < f64::EPSILON);
}

#[tokio::test]
async fn polite_target_style_is_accepted_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("v1beta", MODEL)))
        .respond_with(reply("ご確認ください。"))
        .expect(1)
        .mount(&server)
        .await;

    let transformer = StyleTransformer::new(config_for(&server, &[MODEL], &["v1beta"])).unwrap();
    let result = transformer
        .transform(&request("確認してほしい。", WritingStyle::DesumasuNatural))
        .await
        .unwrap();

    assert_eq!(result.output_text, "ご確認ください。");
    assert_eq!(result.attempts, 1);
}

#[tokio::test]
async fn preamble_and_fence_are_stripped_before_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("v1beta", MODEL)))
        .respond_with(reply("承知しました。\n```\n方針は決まった、と彼は述べた。\n```"))
        .expect(1)
        .mount(&server)
        .await;

    let transformer = StyleTransformer::new(config_for(&server, &[MODEL], &["v1beta"])).unwrap();
    let result = transformer
        .transform(
            &TransformRequest::new(
                "方針は決まりました、と彼は述べました。",
                WritingStyle::Dearu,
                PunctuationMode::Japanese,
            )
            .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(result.output_text, "方針は決まった、と彼は述べた。");
}

#[tokio::test]
async fn upstream_outage_on_every_attempt_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("v1beta", MODEL)))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let transformer = StyleTransformer::new(config_for(&server, &[MODEL], &["v1beta"])).unwrap();
    let err = transformer
        .transform(&request("本文です。", WritingStyle::Dearu))
        .await
        .unwrap_err();

    assert!(matches!(err, BuntaiError::UpstreamFailed(_)));
    assert_eq!(err.status_code(), 502);
    // No validation ever ran, so no escalation: two planned attempts only.
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
