//! The `/ws` push endpoint.
//!
//! Each socket is split in two tasks: a writer that drains the viewer's queue into the
//! socket, and a reader that answers pings and watches for close. Whichever ends first
//! stops the other, and the viewer is then removed from the channel.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tracing::{debug, warn};

use super::AppState;
use crate::notify::{NotificationChannel, Viewer};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let notifier = state.service.notifier().clone();
    ws.on_upgrade(move |socket| serve_viewer(socket, notifier))
}

async fn serve_viewer(socket: WebSocket, notifier: Arc<NotificationChannel>) {
    let Viewer { id, mut outbox } = notifier.connect();
    let (mut sink, mut stream) = socket.split();

    let mut writer = tokio::spawn(async move {
        while let Some(text) = outbox.recv().await {
            if let Err(e) = sink.send(Message::Text(text.to_string().into())).await {
                debug!(viewer = id, error = %e, "Socket write failed");
                break;
            }
        }
    });

    let reader_notifier = notifier.clone();
    let mut reader = tokio::spawn(async move {
        while let Some(frame) = stream.next().await {
            match frame {
                Ok(Message::Text(text)) => reader_notifier.handle_viewer_text(id, text.as_str()),
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(viewer = id, error = %e, "Socket error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut writer => reader.abort(),
        _ = &mut reader => writer.abort(),
    }

    notifier.disconnect(id);
}
