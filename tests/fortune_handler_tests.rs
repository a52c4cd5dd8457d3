//! Functional tests for the fortune handlers.
//!
//! These tests exercise the full call stack from the HTTP handlers
//! through the service layer, using a scripted completion provider in
//! place of the real API.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use natal_rust::http::handlers;
use natal_rust::http::dto::FortuneRequest;
use natal_rust::http::AppState;
use natal_rust::llm::{CompletionProvider, LlmError};
use natal_rust::models::Zodiac;
use natal_rust::services::FortuneService;

/// Provider that replies with a fixed script, or a fixed error.
struct Scripted(Result<&'static str, (u16, &'static str)>);

#[async_trait]
impl CompletionProvider for Scripted {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
        match self.0 {
            Ok(text) => Ok(text.to_string()),
            Err((status, body)) => Err(LlmError::Api {
                status,
                body: body.to_string(),
            }),
        }
    }
}

fn state_without_credential() -> AppState {
    AppState::new(Arc::new(FortuneService::disabled()))
}

fn state_with(provider: Scripted) -> AppState {
    AppState::new(Arc::new(FortuneService::new(Some(Arc::new(provider)))))
}

fn auto_request(time_unknown: bool) -> FortuneRequest {
    let birth = if time_unknown {
        serde_json::json!({"year": 1990, "month": 3, "day": 15, "timeUnknown": true})
    } else {
        serde_json::json!({
            "year": 1990, "month": 3, "day": 15, "hour": 14, "minute": 30,
            "lat": 37.5665, "lon": 126.978, "tzOffset": 9
        })
    };
    serde_json::from_value(serde_json::json!({ "birth": birth })).unwrap()
}

fn manual_request() -> FortuneRequest {
    serde_json::from_value(serde_json::json!({"sun": "Aries", "moon": "Sagittarius"})).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =========================================================
// Auto mode
// =========================================================

#[tokio::test]
async fn auto_mode_without_credential_returns_chart_and_null_fortune() {
    let result = handlers::fortune(State(state_without_credential()), Json(auto_request(false)))
        .await
        .expect("degraded auto mode is a success");

    let Json(response) = result;
    assert!(response.fortune.is_none());
    assert_eq!(response.sun, Some(Zodiac::Pisces));
    assert_eq!(response.moon, Some(Zodiac::Scorpio));
    assert_eq!(response.rising, Some(Zodiac::Leo));
    assert_eq!(response.birth_date.as_deref(), Some("1990.3.15 14:30"));

    let chart = response.chart.expect("chart present");
    assert_eq!(chart.sun.sign, Zodiac::Pisces);
    assert_eq!(chart.sun.degree, 24.4);
    assert_eq!(chart.jd, 2447965.73);
}

#[tokio::test]
async fn auto_mode_with_time_unknown_has_no_rising() {
    let result = handlers::fortune(State(state_without_credential()), Json(auto_request(true)))
        .await
        .unwrap();

    let Json(response) = result;
    assert!(response.rising.is_none());
    let chart = response.chart.expect("chart present");
    assert!(chart.rising.is_none());
    // Sun/Moon still placed from the noon default.
    assert_eq!(chart.sun.sign, Zodiac::Pisces);
    assert_eq!(response.birth_date.as_deref(), Some("1990.3.15"));
}

#[tokio::test]
async fn auto_mode_missing_day_is_a_400_naming_the_field() {
    let request: FortuneRequest =
        serde_json::from_value(serde_json::json!({"birth": {"year": 1990, "month": 3}})).unwrap();

    let err = handlers::fortune(State(state_without_credential()), Json(request))
        .await
        .unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("day"));
}

#[tokio::test]
async fn auto_mode_with_provider_returns_parsed_fortune() {
    let state = state_with(Scripted(Ok(
        "```json\n{\"path_analysis\":\"p\",\"deep_reading\":\"d\",\
         \"action_guide\":\"1. a\",\"birth_insight\":\"b\"}\n```",
    )));

    let Json(response) = handlers::fortune(State(state), Json(auto_request(false)))
        .await
        .unwrap();

    let fortune = response.fortune.expect("fortune present");
    assert_eq!(fortune["path_analysis"], "p");
    assert_eq!(fortune["birth_insight"], "b");
    assert!(response.chart.is_some());
}

#[tokio::test]
async fn auto_mode_api_failure_still_returns_the_chart() {
    let state = state_with(Scripted(Err((529, "overloaded"))));

    let err = handlers::fortune(State(state), Json(auto_request(false)))
        .await
        .unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("529"));
    // Partial progress is not lost: the computed chart rides along.
    assert_eq!(body["sun"], "Pisces");
    assert_eq!(body["chart"]["moon"]["sign"], "Scorpio");
}

#[tokio::test]
async fn auto_mode_unparseable_reply_is_a_500_with_chart() {
    let state = state_with(Scripted(Ok("the stars are silent today")));

    let err = handlers::fortune(State(state), Json(auto_request(false)))
        .await
        .unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("no parseable JSON"));
    assert_eq!(body["sun"], "Pisces");
}

// =========================================================
// Manual mode
// =========================================================

#[tokio::test]
async fn manual_mode_without_credential_is_a_500() {
    let err = handlers::fortune(State(state_without_credential()), Json(manual_request()))
        .await
        .unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("credential"));
}

#[tokio::test]
async fn manual_mode_with_provider_succeeds_without_a_chart() {
    let state = state_with(Scripted(Ok(r#"{"shop_message":"wear red"}"#)));

    let Json(response) = handlers::fortune(State(state), Json(manual_request()))
        .await
        .unwrap();

    assert!(response.chart.is_none());
    assert_eq!(response.sun, Some(Zodiac::Aries));
    assert_eq!(response.moon, Some(Zodiac::Sagittarius));
    assert_eq!(response.fortune.unwrap()["shop_message"], "wear red");
}

#[tokio::test]
async fn manual_mode_rejects_unknown_sign_names() {
    let request: FortuneRequest =
        serde_json::from_value(serde_json::json!({"sun": "Ophiuchus", "moon": "Aries"})).unwrap();

    let err = handlers::fortune(State(state_without_credential()), Json(request))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

// =========================================================
// Shape dispatch
// =========================================================

#[tokio::test]
async fn empty_body_is_a_400_with_usage_examples() {
    let err = handlers::fortune(
        State(state_without_credential()),
        Json(FortuneRequest::default()),
    )
    .await
    .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["usage"]["auto"]["birth"]["year"].is_number());
    assert!(body["usage"]["manual"]["sun"].is_string());
}

#[tokio::test]
async fn health_reports_credential_state() {
    let Json(health) = handlers::health_check(State(state_without_credential()))
        .await
        .unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.completion, "absent");
}

#[tokio::test]
async fn manual_mode_missing_moon_names_the_field() {
    let request: FortuneRequest =
        serde_json::from_value(serde_json::json!({"sun": "Aries"})).unwrap();

    let err = handlers::fortune(State(state_without_credential()), Json(request))
        .await
        .unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("moon"));
}
