//! Push channel transport and end-to-end sync against the warp mock backend


use mock_backend::{MockBackend, spawn_backend};
use racedeck::SyncController;
use racedeck::config::{PushProtocol, ServerEntry};
use racedeck::models::{AppEvent, PushEvent, ServerStatus};
use racedeck::remote::{HttpServerApi, PushChannel};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(5);

async fn next_event(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> AppEvent {
    timeout(WAIT, rx.recv())
        .await
        .expect("timed out waiting for an event")
        .expect("event channel closed")
}

async fn wait_for_request(backend: &MockBackend, request: &str, count: usize) {
    timeout(WAIT, async {
        while backend.count(request) < count {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("backend never saw {} x{}", request, count));
}

fn status_update(server_id: &str, status: ServerStatus) -> PushEvent {
    PushEvent::ServerStatusUpdate {
        server_id: server_id.to_string(),
        status,
    }
}

#[tokio::test]
async fn test_json_channel_delivers_events() {
    let backend = spawn_backend().await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = PushChannel::new(
        backend.json_push_url(),
        PushProtocol::Json,
        Duration::from_millis(50),
    )
    .spawn(tx);

    assert!(matches!(next_event(&mut rx).await, AppEvent::PushConnected));

    let event = PushEvent::ConsoleUpdate {
        server_id: "fruits-line".to_string(),
        log_line: "[INF] Takumi has connected".to_string(),
    };
    backend.push.send(event.clone()).unwrap();

    match next_event(&mut rx).await {
        AppEvent::Push(received) => assert_eq!(received, event),
        other => panic!("expected a push event, got {:?}", other),
    }

    handle.abort();
}

#[tokio::test]
async fn test_socketio_handshake_heartbeat_and_events() {
    let backend = spawn_backend().await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = PushChannel::new(
        backend.socketio_push_url(),
        PushProtocol::Socketio,
        Duration::from_millis(50),
    )
    .spawn(tx);

    // Connected only after the namespace handshake
    assert!(matches!(next_event(&mut rx).await, AppEvent::PushConnected));
    assert_eq!(backend.count("SIO connect"), 1);

    // The server's ping is answered
    wait_for_request(&backend, "SIO pong", 1).await;

    // Unknown and malformed frames sent before this one are skipped
    let event = status_update("shutoku-rush-hour", ServerStatus::Running);
    backend.push.send(event.clone()).unwrap();
    match next_event(&mut rx).await {
        AppEvent::Push(received) => assert_eq!(received, event),
        other => panic!("expected a push event, got {:?}", other),
    }

    handle.abort();
}

#[tokio::test]
async fn test_channel_reconnects_after_close() {
    let backend = spawn_backend().await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = PushChannel::new(
        backend.flaky_push_url(),
        PushProtocol::Json,
        Duration::from_millis(50),
    )
    .spawn(tx);

    assert!(matches!(next_event(&mut rx).await, AppEvent::PushConnected));
    assert!(matches!(next_event(&mut rx).await, AppEvent::PushDisconnected));
    assert!(matches!(next_event(&mut rx).await, AppEvent::PushConnected));
    assert!(backend.count("WS flaky") >= 2);

    handle.abort();
}

#[tokio::test]
async fn test_unreachable_channel_reports_nothing() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = PushChannel::new(
        "ws://127.0.0.1:9/ws",
        PushProtocol::Json,
        Duration::from_millis(20),
    )
    .spawn(tx);

    // Failed attempts never count as a connection, so no disconnect either
    assert!(
        timeout(Duration::from_millis(300), rx.recv())
            .await
            .is_err()
    );

    handle.abort();
}

#[tokio::test]
async fn test_channel_stops_when_receiver_is_dropped() {
    let backend = spawn_backend().await;
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);

    let handle = PushChannel::new(
        backend.json_push_url(),
        PushProtocol::Json,
        Duration::from_millis(20),
    )
    .spawn(tx);

    timeout(WAIT, handle)
        .await
        .expect("push channel kept running without a receiver")
        .unwrap();
}

#[tokio::test]
async fn test_connect_resyncs_statuses_and_applies_pushes() {
    let backend = spawn_backend().await;
    let servers = vec![
        ServerEntry {
            id: "fruits-line".to_string(),
            name: "Fruits Line".to_string(),
        },
        ServerEntry {
            id: "shutoku-rush-hour".to_string(),
            name: "Shutoku Rush Hour".to_string(),
        },
    ];

    let (tx, mut rx) = mpsc::unbounded_channel();
    let api = Arc::new(HttpServerApi::new(&backend.base_url()));
    let mut controller = SyncController::new(&servers, api, tx.clone());
    let handle = PushChannel::new(
        backend.json_push_url(),
        PushProtocol::Json,
        Duration::from_millis(50),
    )
    .spawn(tx);

    let event = next_event(&mut rx).await;
    assert!(matches!(event, AppEvent::PushConnected));
    controller.handle_event(event);
    assert!(controller.state().push_connected());

    // Resync sweep: one status read per listed server
    for _ in 0..2 {
        let event = next_event(&mut rx).await;
        assert!(matches!(event, AppEvent::StatusLoaded(..)));
        controller.handle_event(event);
    }
    assert_eq!(backend.count("GET status fruits-line"), 1);
    assert_eq!(backend.count("GET status shutoku-rush-hour"), 1);

    let fruits = controller.state().server("fruits-line").unwrap();
    assert_eq!(fruits.status, ServerStatus::Running);
    assert_eq!(fruits.player_count, 1);
    assert_eq!(
        controller.state().server("shutoku-rush-hour").unwrap().status,
        ServerStatus::Stopped
    );

    // Select and load the snapshot
    controller.select_server("fruits-line");
    for _ in 0..2 {
        let event = next_event(&mut rx).await;
        controller.handle_event(event);
    }
    assert_eq!(controller.state().console().len(), 2);
    assert_eq!(controller.state().players()[0].name, "Takumi");

    // Pushed status for the other server, console line for the selected one
    backend
        .push
        .send(status_update("shutoku-rush-hour", ServerStatus::Starting))
        .unwrap();
    backend
        .push
        .send(PushEvent::ConsoleUpdate {
            server_id: "fruits-line".to_string(),
            log_line: "[INF] Lap completed".to_string(),
        })
        .unwrap();
    for _ in 0..2 {
        let event = next_event(&mut rx).await;
        assert!(matches!(event, AppEvent::Push(_)));
        controller.handle_event(event);
    }

    assert_eq!(
        controller.state().server("shutoku-rush-hour").unwrap().status,
        ServerStatus::Starting
    );
    assert_eq!(
        controller.state().console().last().map(String::as_str),
        Some("[INF] Lap completed")
    );

    handle.abort();
}
