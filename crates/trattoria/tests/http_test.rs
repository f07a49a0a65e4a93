use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use trattoria::http::{self, AppState};
use trattoria::lifecycle::RestaurantSystem;
use trattoria::notify::NotificationChannel;
use trattoria::order_actor::TransitionPolicy;

async fn start_server() -> (SocketAddr, Arc<NotificationChannel>) {
    let system = RestaurantSystem::new(16, TransitionPolicy::Permissive);
    system.seed_catalog().await.expect("seed catalog");
    let notifier = Arc::new(NotificationChannel::new());
    let state = AppState::new(Arc::new(system.order_service(notifier.clone())));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        // Keep the system's clients alive for as long as the server runs.
        let _system = system;
        http::serve(listener, state, std::future::pending())
            .await
            .expect("server");
    });
    (addr, notifier)
}

async fn send(
    addr: SocketAddr,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> (u16, String, String) {
    let mut stream = TcpStream::connect(addr).await.expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\n");
    req.push_str("Connection: close\r\n");
    if let Some(payload) = body {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", payload.len()));
    }
    req.push_str("\r\n");
    if let Some(payload) = body {
        req.push_str(payload);
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");

    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

fn json(body: &str) -> Value {
    serde_json::from_str(body).expect("json body")
}

const ALICE: &str = r#"{"customerName":"Alice","items":[{"id":1,"quantity":2,"price":8.99}]}"#;

#[tokio::test]
async fn health_is_ok() {
    let (addr, _) = start_server().await;
    let (status, _, body) = send(addr, "GET", "/health", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn menu_items_are_listed_and_filtered() {
    let (addr, _) = start_server().await;

    let (status, _, body) = send(addr, "GET", "/api/menu-items", None).await;
    assert_eq!(status, 200);
    let items = json(&body);
    assert_eq!(items.as_array().unwrap().len(), 8);
    assert_eq!(items[0]["name"], "Bruschetta Italiana");
    assert_eq!(items[0]["price"], 8.99);

    let (_, _, body) = send(addr, "GET", "/api/menu-items?category=desserts", None).await;
    let names: Vec<_> = json(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Tiramisu", "Cannoli"]);

    let (status, _, body) = send(addr, "GET", "/api/menu-items?category=soups", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, "[]");

    let (status, _, _) = send(addr, "GET", "/api/menu-items/3", None).await;
    assert_eq!(status, 200);
    let (status, _, body) = send(addr, "GET", "/api/menu-items/42", None).await;
    assert_eq!(status, 404);
    assert_eq!(json(&body)["message"], "Menu item not found");
}

#[tokio::test]
async fn order_lifecycle_over_http() {
    let (addr, _) = start_server().await;

    let (status, _, body) = send(addr, "POST", "/api/orders", Some(ALICE)).await;
    assert_eq!(status, 201);
    let created = json(&body);
    assert_eq!(created["id"], 1);
    assert_eq!(created["customerName"], "Alice");
    assert_eq!(created["total"], 17.98);
    assert_eq!(created["status"], "pending");
    let first_line = &created["orderItems"][0];
    assert_eq!(first_line["menuItem"]["name"], "Bruschetta Italiana");

    let (status, _, body) = send(addr, "GET", "/api/orders/1", None).await;
    assert_eq!(status, 200);
    let detail = json(&body);
    assert_eq!(detail["orderItems"][0]["quantity"], 2);
    assert_eq!(detail["orderItems"][0]["menuItemId"], 1);

    let (status, _, body) = send(
        addr,
        "PATCH",
        "/api/orders/1/status",
        Some(r#"{"status":"preparing"}"#),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(json(&body)["status"], "preparing");

    let (_, _, body) = send(addr, "GET", "/api/orders?status=preparing", None).await;
    assert_eq!(json(&body).as_array().unwrap().len(), 1);
    let (_, _, body) = send(addr, "GET", "/api/orders?status=pending", None).await;
    assert_eq!(body, "[]");

    let (status, _, body) = send(addr, "GET", "/api/dashboard/stats", None).await;
    assert_eq!(status, 200);
    let stats = json(&body);
    assert_eq!(stats["totalOrders"], 1);
    assert_eq!(stats["pendingOrders"], 0);
    assert_eq!(stats["completedOrders"], 0);
    assert_eq!(stats["revenue"], 17.98);
}

#[tokio::test]
async fn errors_map_to_status_codes() {
    let (addr, _) = start_server().await;

    let (status, _, body) = send(
        addr,
        "POST",
        "/api/orders",
        Some(r#"{"customerName":"","items":[{"id":1,"quantity":1,"price":8.99}]}"#),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(json(&body)["message"], "Customer name is required");

    let (status, _, body) = send(
        addr,
        "POST",
        "/api/orders",
        Some(r#"{"customerName":"Alice","items":[]}"#),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(json(&body)["message"], "At least one item is required");

    let (status, _, _) = send(addr, "POST", "/api/orders", Some("{not json")).await;
    assert_eq!(status, 400);

    let (status, _, _) = send(addr, "GET", "/api/orders/7", None).await;
    assert_eq!(status, 404);
    let (status, _, _) = send(addr, "GET", "/api/orders/abc", None).await;
    assert_eq!(status, 404);

    send(addr, "POST", "/api/orders", Some(ALICE)).await;
    let (status, _, body) = send(
        addr,
        "PATCH",
        "/api/orders/1/status",
        Some(r#"{"status":"shipped"}"#),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(json(&body)["message"], "Invalid status");

    let (status, _, body) = send(
        addr,
        "PATCH",
        "/api/orders/9/status",
        Some(r#"{"status":"ready"}"#),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(json(&body)["message"], "Order not found");
}

#[tokio::test]
async fn oversized_order_total_is_a_bad_request() {
    let (addr, _) = start_server().await;
    let cart = r#"{"customerName":"Eve","items":[{"id":1,"quantity":10,"price":1e28}]}"#;

    let (status, _, body) = send(addr, "POST", "/api/orders", Some(cart)).await;
    assert_eq!(status, 400);
    assert_eq!(json(&body)["message"], "Order total is too large");

    let (status, _, body) = send(addr, "GET", "/api/orders", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, "[]");
}

// --- WebSocket ---

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A dashboard viewer connected to `/ws`.
struct Viewer {
    socket: Socket,
}

impl Viewer {
    async fn connect(addr: SocketAddr) -> Self {
        let (socket, response) = connect_async(format!("ws://{addr}/ws"))
            .await
            .expect("ws handshake");
        assert_eq!(response.status(), 101);
        Self { socket }
    }

    async fn send_text(&mut self, text: &str) {
        self.socket
            .send(Message::text(text.to_owned()))
            .await
            .expect("send frame");
    }

    /// Next text message as JSON, skipping control frames.
    async fn recv_json(&mut self) -> Value {
        let next_text = async {
            loop {
                let message = self
                    .socket
                    .next()
                    .await
                    .expect("socket open")
                    .expect("frame");
                if message.is_text() {
                    return json(message.to_text().expect("utf8 text"));
                }
            }
        };
        timeout(Duration::from_secs(5), next_text)
            .await
            .expect("frame within 5s")
    }
}

#[tokio::test]
async fn viewer_gets_pong_and_order_events() {
    let (addr, notifier) = start_server().await;
    let mut viewer = Viewer::connect(addr).await;

    // The pong proves the viewer is registered before any order is placed.
    viewer.send_text(r#"{"type":"hello"}"#).await;
    let chatter = format!(r#"{{"type":"note","text":"{}"}}"#, "x".repeat(300));
    viewer.send_text(&chatter).await;
    viewer.send_text(r#"{"type":"ping"}"#).await;
    assert_eq!(viewer.recv_json().await["type"], "pong");
    assert_eq!(notifier.viewer_count(), 1);

    send(addr, "POST", "/api/orders", Some(ALICE)).await;
    let event = viewer.recv_json().await;
    assert_eq!(event["type"], "new_order");
    assert_eq!(event["order"]["customerName"], "Alice");
    assert_eq!(event["order"]["orderItems"][0]["menuItem"]["id"], 1);

    send(
        addr,
        "PATCH",
        "/api/orders/1/status",
        Some(r#"{"status":"preparing"}"#),
    )
    .await;
    let event = viewer.recv_json().await;
    assert_eq!(event["type"], "order_status_update");
    assert_eq!(event["orderId"], 1);
    assert_eq!(event["status"], "preparing");
    assert_eq!(event["order"]["status"], "preparing");
}

#[tokio::test]
async fn closed_socket_leaves_the_channel() {
    let (addr, notifier) = start_server().await;
    let mut viewer = Viewer::connect(addr).await;
    viewer.send_text(r#"{"type":"ping"}"#).await;
    viewer.recv_json().await;
    assert_eq!(notifier.viewer_count(), 1);

    viewer.socket.close(None).await.expect("close handshake");
    timeout(Duration::from_secs(5), async {
        while notifier.viewer_count() > 0 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("viewer removed after close");
}
