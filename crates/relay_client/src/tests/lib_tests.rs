use super::*;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct RelayStubState {
    captured: Arc<Mutex<Option<oneshot::Sender<serde_json::Value>>>>,
    respond_with: StatusCode,
}

async fn accept_send(
    State(state): State<RelayStubState>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    if let Some(tx) = state.captured.lock().await.take() {
        let _ = tx.send(body);
    }
    state.respond_with
}

async fn spawn_relay_stub(
    respond_with: StatusCode,
) -> (String, oneshot::Receiver<serde_json::Value>) {
    let (tx, rx) = oneshot::channel();
    let state = RelayStubState {
        captured: Arc::new(Mutex::new(Some(tx))),
        respond_with,
    };
    let router = Router::new()
        .route("/api/v1.0/email/send", post(accept_send))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    (format!("http://{addr}"), rx)
}

fn settings_for(base_url: String) -> RelaySettings {
    RelaySettings {
        api_base_url: base_url,
        service_id: "service_test".into(),
        template_id: "template_test".into(),
        public_key: "public_test".into(),
    }
}

fn sample_message() -> ContactMessage {
    ContactMessage {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        message: "Interested in collaborating on an engine project.".to_string(),
    }
}

#[tokio::test]
async fn delivers_contact_message_with_identifying_tokens() {
    let (base_url, captured) = spawn_relay_stub(StatusCode::OK).await;
    let client = EmailJsClient::new(settings_for(base_url)).expect("client");

    client.send(&sample_message()).await.expect("send ok");

    let body = captured.await.expect("stub saw request");
    assert_eq!(body["service_id"], "service_test");
    assert_eq!(body["template_id"], "template_test");
    assert_eq!(body["user_id"], "public_test");
    assert_eq!(body["template_params"]["name"], "Ada Lovelace");
    assert_eq!(body["template_params"]["email"], "ada@example.com");
    assert_eq!(
        body["template_params"]["message"],
        "Interested in collaborating on an engine project."
    );
}

#[tokio::test]
async fn maps_non_success_status_to_rejected() {
    let (base_url, _captured) = spawn_relay_stub(StatusCode::BAD_REQUEST).await;
    let client = EmailJsClient::new(settings_for(base_url)).expect("client");

    let err = client.send(&sample_message()).await.expect_err("rejected");
    assert!(!err.is_transport());
    match err {
        RelayError::Rejected { status } => assert_eq!(status, StatusCode::BAD_REQUEST),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn maps_unreachable_endpoint_to_transport_error() {
    // Bind and immediately drop a listener so the port is closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = EmailJsClient::new(settings_for(format!("http://{addr}"))).expect("client");
    let err = client.send(&sample_message()).await.expect_err("transport");
    assert!(err.is_transport());
}

#[tokio::test]
async fn missing_relay_fails_every_submission() {
    let err = MissingEmailRelay
        .send(&sample_message())
        .await
        .expect_err("missing relay");
    assert!(matches!(err, RelayError::Settings(_)));
}

#[test]
fn rejects_blank_settings_at_construction() {
    let settings = RelaySettings {
        public_key: String::new(),
        ..RelaySettings::default()
    };
    assert!(matches!(
        EmailJsClient::new(settings),
        Err(RelayError::Settings(_))
    ));
}
