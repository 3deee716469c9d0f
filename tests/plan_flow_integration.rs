//! End-to-end submit flow tests against a mock backend
//!
//! Each test spins up a local HTTP server on an ephemeral port, drives the
//! update function the same way the event loop does, and asserts on the
//! resulting view state.

use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crisis_ops::app::handler::{self, Task, UpdateAction};
use crisis_ops::app::message::Message;
use crisis_ops::app::report::ReportKind;
use crisis_ops::app::state::{AnalysisPanel, AppState, Phase, StatusKind};
use crisis_ops::backend::PlanClient;
use crisis_ops::config::Settings;
use crisis_ops::core::AqiBand;

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Option<oneshot::Sender<serde_json::Value>>>>,
}

async fn get_plan(
    State(state): State<ServerState>,
    Json(payload): Json<serde_json::Value>,
) -> (StatusCode, String) {
    if let Some(tx) = state.captured.lock().unwrap().take() {
        let _ = tx.send(payload);
    }
    (state.status, state.body)
}

/// Bind a mock backend on an ephemeral port, returning its base URL and a
/// receiver for the first captured request body
async fn spawn_plan_server(
    status: StatusCode,
    body: &str,
) -> (String, oneshot::Receiver<serde_json::Value>) {
    let (tx, rx) = oneshot::channel();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let state = ServerState {
        status,
        body: body.to_string(),
        captured: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/api/get-plan", post(get_plan))
        .with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}", addr), rx)
}

const SUCCESS_BODY: &str = r#"{
    "plan": {
        "analysis": "Distribute masks near the station.",
        "actions": {
            "supply_order": { "order": true, "quantity": 500, "item": "N95 masks" }
        }
    },
    "actionsLog": [
        { "type": "email", "success": true, "destination": "ops@example.com" },
        { "type": "tweet", "success": false, "error": "rate limited" }
    ],
    "liveAqi": 175,
    "chatterCount": 5,
    "chatterTweets": [
        { "text": "tweet 0" },
        { "text": "tweet 1" },
        { "text": "tweet 2" },
        { "text": "tweet 3" },
        { "text": "tweet 4" }
    ]
}"#;

/// Drive one submission the way the event loop does: update → fetch →
/// feed the settled result back through update
async fn submit_and_settle(state: &mut AppState, client: &PlanClient) {
    let result = handler::update(state, Message::Submit);
    let Some(UpdateAction::SpawnTask(Task::FetchPlan { request })) = result.action else {
        panic!("expected a FetchPlan task");
    };
    assert_eq!(state.phase, Phase::Busy);

    let message = match client.fetch_plan(&request).await {
        Ok(response) => Message::PlanReceived(Box::new(response)),
        Err(e) => Message::PlanFailed {
            message: e.user_message(),
        },
    };
    handler::update(state, message);
}

#[tokio::test]
async fn submit_success_renders_full_report() {
    let (url, _captured) = spawn_plan_server(StatusCode::OK, SUCCESS_BODY).await;
    let client = PlanClient::new(&url).expect("client");
    let mut state = AppState::new(Settings::default());
    state.form.email = "ops@example.com".to_string();

    submit_and_settle(&mut state, &client).await;

    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.status, StatusKind::Complete);
    assert_eq!(state.aqi.band(), AqiBand::Unhealthy);
    assert_eq!(state.chatter.items.len(), 3);
    assert_eq!(state.chatter.count, 5);

    // email success, tweet failure, supply-order advisory
    assert_eq!(state.action_log.len(), 3);
    assert_eq!(state.action_log[0].kind, ReportKind::Success);
    assert_eq!(state.action_log[0].text, "Email sent to ops@example.com");
    assert_eq!(state.action_log[1].kind, ReportKind::Failure);
    assert_eq!(state.action_log[1].text, "Tweet failed: rate limited");
    assert_eq!(state.action_log[2].kind, ReportKind::Advisory);

    let raw = state.raw_json.content.as_deref().expect("raw panel visible");
    assert!(raw.contains("Distribute masks"));
}

#[tokio::test]
async fn submit_sends_exact_wire_format() {
    let (url, captured) = spawn_plan_server(StatusCode::OK, SUCCESS_BODY).await;
    let client = PlanClient::new(&url).expect("client");
    let mut state = AppState::new(Settings::default());
    state.form.is_flood_alert = true;
    state.form.email = "warden@example.com".to_string();
    // Move off the default city to make the assertion meaningful
    handler::update(&mut state, Message::CityNext);

    submit_and_settle(&mut state, &client).await;

    let body = captured.await.expect("request captured");
    assert_eq!(body["crisisData"]["selectedCity"], "Delhi");
    assert_eq!(body["crisisData"]["is_festival"], false);
    assert_eq!(body["crisisData"]["is_flood_alert"], true);
    assert_eq!(body["recipientEmail"], "warden@example.com");
}

#[tokio::test]
async fn submit_failure_shows_server_error_text() {
    let (url, _captured) =
        spawn_plan_server(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"backend down"}"#).await;
    let client = PlanClient::new(&url).expect("client");
    let mut state = AppState::new(Settings::default());

    submit_and_settle(&mut state, &client).await;

    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.status, StatusKind::Error);
    assert_eq!(
        state.analysis,
        AnalysisPanel::Failed("backend down".to_string())
    );
    assert_eq!(state.aqi.band(), AqiBand::Unknown);
    assert!(!state.raw_json.is_visible());
    assert!(state.action_log.is_empty());
}

#[tokio::test]
async fn submit_failure_synthesizes_message_from_status() {
    let (url, _captured) = spawn_plan_server(StatusCode::BAD_GATEWAY, "").await;
    let client = PlanClient::new(&url).expect("client");
    let mut state = AppState::new(Settings::default());

    submit_and_settle(&mut state, &client).await;

    assert_eq!(state.status, StatusKind::Error);
    assert_eq!(
        state.analysis,
        AnalysisPanel::Failed("HTTP error! Status: 502".to_string())
    );
}

#[tokio::test]
async fn submit_with_malformed_body_is_a_decode_failure() {
    let (url, _captured) = spawn_plan_server(StatusCode::OK, "not json at all").await;
    let client = PlanClient::new(&url).expect("client");
    let mut state = AppState::new(Settings::default());

    submit_and_settle(&mut state, &client).await;

    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.status, StatusKind::Error);
    assert!(matches!(state.analysis, AnalysisPanel::Failed(_)));
    assert_eq!(state.aqi.band(), AqiBand::Unknown);
}

#[tokio::test]
async fn submit_transport_failure_reaches_error_state() {
    // Nothing listens here; the connection is refused
    let client = PlanClient::new("http://127.0.0.1:9").expect("client");
    let mut state = AppState::new(Settings::default());

    submit_and_settle(&mut state, &client).await;

    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.status, StatusKind::Error);
    assert!(matches!(state.analysis, AnalysisPanel::Failed(_)));
}

#[tokio::test]
async fn second_submit_while_busy_dispatches_nothing() {
    let mut state = AppState::new(Settings::default());

    let first = handler::update(&mut state, Message::Submit);
    assert!(first.action.is_some());

    let second = handler::update(&mut state, Message::Submit);
    assert!(second.action.is_none());

    // Settle the first request so the trigger is usable again
    handler::update(
        &mut state,
        Message::PlanFailed {
            message: "gone".to_string(),
        },
    );
    assert_eq!(state.phase, Phase::Idle);

    let third = handler::update(&mut state, Message::Submit);
    assert!(third.action.is_some());
}

#[tokio::test]
async fn empty_chatter_renders_placeholder_and_keeps_count() {
    let body = r#"{
        "plan": {
            "analysis": "Quiet night.",
            "actions": {
                "supply_order": { "order": false, "quantity": 0, "item": "" }
            }
        },
        "actionsLog": [],
        "liveAqi": 42,
        "chatterCount": 7,
        "chatterTweets": []
    }"#;
    let (url, _captured) = spawn_plan_server(StatusCode::OK, body).await;
    let client = PlanClient::new(&url).expect("client");
    let mut state = AppState::new(Settings::default());

    submit_and_settle(&mut state, &client).await;

    assert!(state.chatter.shows_placeholder());
    assert_eq!(state.chatter.count, 7);
    assert_eq!(state.aqi.band(), AqiBand::Good);
    assert!(state.action_log.is_empty());
}
