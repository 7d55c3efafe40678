//! Skill Webhook Handler
//!
//! 总是返回 200 和一个完整的响应信封；请求体无法读取（如超过上限）或无法解析时走兜底回复

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use std::sync::Arc;

use crate::domain::VoiceEvent;
use crate::infrastructure::http::dto::{RequestEnvelope, ResponseEnvelope};
use crate::infrastructure::http::state::AppState;

pub async fn skill_webhook(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Json<ResponseEnvelope> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable webhook body");
            let event = VoiceEvent::other(format!("unreadable body: {}", rejection));
            return Json(ResponseEnvelope::from(state.dispatcher.dispatch(&event).await));
        }
    };

    let event = match RequestEnvelope::parse(&body) {
        Ok(envelope) => {
            if let Some(app_id) = envelope.application_id() {
                if app_id != state.skill_id {
                    tracing::warn!(
                        application_id = %app_id,
                        skill_id = %state.skill_id,
                        "Request application id differs from configured skill id"
                    );
                }
            }
            envelope.into_event()
        }
        Err(e) => VoiceEvent::other(format!("malformed request: {}", e)),
    };

    tracing::debug!(kind = %event.kind(), "Inbound voice event");

    let spoken = state.dispatcher.dispatch(&event).await;
    Json(ResponseEnvelope::from(spoken))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{UtteranceReader, VoiceEventDispatcher, APOLOGY_TEXT};
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::memory::InMemoryUtteranceStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app(store: Arc<InMemoryUtteranceStore>) -> axum::Router {
        let state = AppState::new(VoiceEventDispatcher::new(store), "amzn1.ask.skill.test");
        create_routes().with_state(Arc::new(state))
    }

    async fn post(app: axum::Router, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_capture_updates_store() {
        let store = InMemoryUtteranceStore::new().arc();
        let body = json!({
            "request": {
                "type": "IntentRequest",
                "intent": {
                    "name": "CaptureSpeechIntent",
                    "slots": {"speech": {"name": "speech", "value": "move left"}}
                }
            }
        });

        let (status, value) = post(app(store.clone()), body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["response"]["outputSpeech"]["text"], "You said: move left");
        assert_eq!(value["response"]["card"]["title"], "Speech Capture");
        assert_eq!(store.get().as_str(), "move left");
    }

    #[tokio::test]
    async fn test_malformed_body_apologizes() {
        let store = InMemoryUtteranceStore::new().arc();

        let (status, value) = post(app(store.clone()), "definitely not json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["response"]["outputSpeech"]["text"], APOLOGY_TEXT);
        assert_eq!(value["response"]["shouldEndSession"], false);
        assert_eq!(store.get().as_str(), "No speech captured yet.");
    }

    #[tokio::test]
    async fn test_oversized_body_apologizes() {
        let store = InMemoryUtteranceStore::new().arc();
        let router = create_routes()
            .layer(axum::extract::DefaultBodyLimit::max(64))
            .with_state(Arc::new(AppState::new(
                VoiceEventDispatcher::new(store.clone()),
                "amzn1.ask.skill.test",
            )));
        let body = json!({
            "request": {
                "type": "IntentRequest",
                "intent": {
                    "name": "CaptureSpeechIntent",
                    "slots": {"speech": {"name": "speech", "value": "x".repeat(256)}}
                }
            }
        });

        let (status, value) = post(router, body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["response"]["outputSpeech"]["text"], APOLOGY_TEXT);
        assert_eq!(store.get().as_str(), "No speech captured yet.");
    }

    #[tokio::test]
    async fn test_ping() {
        let store = InMemoryUtteranceStore::new().arc();
        let request = Request::builder()
            .uri("/api/ping")
            .body(Body::empty())
            .unwrap();
        let response = app(store).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
