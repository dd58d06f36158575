use crate::error::BuntaiError;
use crate::text::{TextStats, normalize_punctuation};
use crate::transform::TransformRequest;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use super::{AppState, PunctuateBody, TextBody, TransformBody};

fn error_response(err: &BuntaiError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), "Request failed: {err}");
    }
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

fn rejection_response(rejection: &JsonRejection) -> Response {
    tracing::debug!("Rejected request body: {rejection}");
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("invalid request body: {}", rejection.body_text()) })),
    )
        .into_response()
}

/// GET /health
pub(super) async fn handle_health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /api/transform: rewrite text into the requested sentence-ending style
pub(super) async fn handle_transform(
    State(state): State<AppState>,
    body: Result<Json<TransformBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(&rejection),
    };

    let request = TransformRequest::new(body.text, body.writing_style, body.punctuation_mode)
        .and_then(|request| match body.temperature {
            Some(temperature) => request.with_temperature(temperature),
            None => Ok(request),
        })
        .map(|request| request.with_high_accuracy(body.high_accuracy));
    let request = match request {
        Ok(request) => request,
        Err(err) => return error_response(&err),
    };

    match state.transformer.transform(&request).await {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({
                "outputText": result.output_text,
                "writingStyle": result.style,
                "punctuationMode": result.punctuation,
                "attempts": result.attempts,
                "model": result.model,
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// POST /api/ai-check: estimate how machine-generated the text reads
pub(super) async fn handle_ai_check(
    State(state): State<AppState>,
    body: Result<Json<TextBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(&rejection),
    };

    match state.analyzer.analyze(&body.text).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// POST /api/punctuate
pub(super) async fn handle_punctuate(body: Result<Json<PunctuateBody>, JsonRejection>) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(&rejection),
    };

    let text = normalize_punctuation(&body.text, body.punctuation_mode);
    (
        StatusCode::OK,
        Json(json!({
            "text": text,
            "punctuationMode": body.punctuation_mode,
        })),
    )
        .into_response()
}

/// POST /api/stats
pub(super) async fn handle_stats(body: Result<Json<TextBody>, JsonRejection>) -> Response {
    match body {
        Ok(Json(body)) => (StatusCode::OK, Json(TextStats::measure(&body.text))).into_response(),
        Err(rejection) => rejection_response(&rejection),
    }
}
