//! 端到端：webhook 写入，get_speech 查询读出

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use voxbridge::application::{VoiceEventDispatcher, APOLOGY_TEXT, GREETING_TEXT};
use voxbridge::infrastructure::http::{AppState, HttpServer, ServerConfig};
use voxbridge::infrastructure::lifecycle::{LifecycleState, ProcessLifecycleManager};
use voxbridge::infrastructure::memory::InMemoryUtteranceStore;
use voxbridge::infrastructure::rpc::{QueryClient, RpcServerConfig};

const NOT_YET: &str = "No speech captured yet.";
const NOTHING: &str = "No speech captured.";

struct Bridge {
    router: Router,
    lifecycle: ProcessLifecycleManager,
    client: QueryClient,
}

impl Bridge {
    async fn start() -> Self {
        let store = InMemoryUtteranceStore::new().arc();

        let mut lifecycle = ProcessLifecycleManager::new(
            RpcServerConfig::new("127.0.0.1", 0),
            Duration::from_secs(2),
            store.clone(),
        );
        let rpc_addr = lifecycle.start().await.unwrap();

        let server = HttpServer::new(
            ServerConfig::new("127.0.0.1", 0),
            AppState::new(VoiceEventDispatcher::new(store), "amzn1.ask.skill.test"),
        );
        let router = server.build_router();
        let client = QueryClient::connect(rpc_addr).await.unwrap();

        Self {
            router,
            lifecycle,
            client,
        }
    }

    async fn query(&mut self) -> String {
        self.client.get_speech().await.unwrap().captured_speech
    }

    async fn stop(mut self) {
        drop(self.client);
        self.lifecycle.shutdown().await;
        assert_eq!(self.lifecycle.state(), LifecycleState::Stopped);
    }
}

async fn send_event(router: &Router, body: impl Into<Body>) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn capture(speech: Option<&str>) -> String {
    let slots = match speech {
        Some(value) => json!({"speech": {"name": "speech", "value": value}}),
        None => json!({}),
    };
    json!({
        "version": "1.0",
        "request": {
            "type": "IntentRequest",
            "requestId": "req",
            "intent": {"name": "CaptureSpeechIntent", "slots": slots}
        }
    })
    .to_string()
}

fn launch() -> String {
    json!({"version": "1.0", "request": {"type": "LaunchRequest", "requestId": "req"}}).to_string()
}

fn spoken_text(response: &Value) -> &str {
    response["response"]["outputSpeech"]["text"].as_str().unwrap()
}

#[tokio::test]
async fn query_before_capture_returns_startup_sentinel() {
    let mut bridge = Bridge::start().await;
    assert_eq!(bridge.query().await, NOT_YET);
    bridge.stop().await;
}

#[tokio::test]
async fn capture_then_query_returns_value() {
    let mut bridge = Bridge::start().await;

    for text in ["turn on the light", "  padded  ", "ünïcödé 语音"] {
        let response = send_event(&bridge.router, capture(Some(text))).await;
        assert_eq!(spoken_text(&response), format!("You said: {}", text));
        assert_eq!(bridge.query().await, text);
    }

    bridge.stop().await;
}

#[tokio::test]
async fn missing_slot_sets_distinct_sentinel() {
    let mut bridge = Bridge::start().await;

    send_event(&bridge.router, capture(None)).await;
    let value = bridge.query().await;
    assert_eq!(value, NOTHING);
    assert_ne!(value, NOT_YET);

    send_event(&bridge.router, capture(Some(""))).await;
    assert_eq!(bridge.query().await, NOTHING);

    bridge.stop().await;
}

#[tokio::test]
async fn last_write_wins() {
    let mut bridge = Bridge::start().await;

    for i in 0..20 {
        send_event(&bridge.router, capture(Some(format!("command {}", i).as_str()))).await;
    }
    assert_eq!(bridge.query().await, "command 19");

    bridge.stop().await;
}

#[tokio::test]
async fn malformed_and_unknown_events_apologize_without_writing() {
    let mut bridge = Bridge::start().await;
    send_event(&bridge.router, capture(Some("keep me"))).await;

    let bodies = vec![
        "".to_string(),
        "not json at all".to_string(),
        "[1,2,3]".to_string(),
        json!({"request": {"type": "SessionEndedRequest"}}).to_string(),
        json!({"request": {"type": "IntentRequest", "intent": {"name": "AMAZON.HelpIntent"}}})
            .to_string(),
        json!({"request": {"type": "IntentRequest"}}).to_string(),
    ];

    for body in bodies {
        let response = send_event(&bridge.router, body).await;
        assert_eq!(spoken_text(&response), APOLOGY_TEXT);
        assert_eq!(
            response["response"]["reprompt"]["outputSpeech"]["text"],
            APOLOGY_TEXT
        );
    }

    assert_eq!(bridge.query().await, "keep me");
    bridge.stop().await;
}

#[tokio::test]
async fn scenario_capture_missing_then_session_start() {
    let mut bridge = Bridge::start().await;

    send_event(&bridge.router, capture(Some("turn on the light"))).await;
    assert_eq!(bridge.query().await, "turn on the light");

    send_event(&bridge.router, capture(None)).await;
    assert_eq!(bridge.query().await, NOTHING);

    let response = send_event(&bridge.router, launch()).await;
    assert_eq!(spoken_text(&response), GREETING_TEXT);
    assert_eq!(response["response"]["card"]["title"], "Hello World");
    assert_eq!(response["response"]["shouldEndSession"], false);
    assert_eq!(bridge.query().await, NOTHING);

    bridge.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_queries_never_see_torn_values() {
    let bridge = Bridge::start().await;
    let rpc_addr = bridge.lifecycle.rpc_addr().unwrap();

    let long_a = "a".repeat(2048);
    let long_b = "b".repeat(2048);
    let allowed: Arc<Vec<String>> =
        Arc::new(vec![NOT_YET.to_string(), long_a.clone(), long_b.clone()]);

    let writer = {
        let router = bridge.router.clone();
        tokio::spawn(async move {
            for i in 0..100 {
                let text = if i % 2 == 0 { &long_a } else { &long_b };
                send_event(&router, capture(Some(text.as_str()))).await;
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let allowed = allowed.clone();
            tokio::spawn(async move {
                let mut client = QueryClient::connect(rpc_addr).await.unwrap();
                for _ in 0..100 {
                    let value = client.get_speech().await.unwrap().captured_speech;
                    assert!(allowed.contains(&value), "torn read: {} bytes", value.len());
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }

    bridge.stop().await;
}
