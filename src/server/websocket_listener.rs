use crate::model::{ClientEvent, ClientId};
use crate::server::SessionCoordinator;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::WebSocketUpgrade;
use axum::response::IntoResponse;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    coordinator: Arc<SessionCoordinator>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| listen(socket, coordinator))
}

async fn listen(socket: WebSocket, coordinator: Arc<SessionCoordinator>) {
    let (ws_sender, ws_receiver) = socket.split();
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let client_id = coordinator.connect(tx);

    let sender_task = handle_outgoing_messages(rx, ws_sender);
    let receiver_task = handle_incoming_messages(ws_receiver, &coordinator, client_id);

    tokio::select! {
        _ = sender_task => {
            debug!("Sender task completed for client {}", client_id);
        }
        _ = receiver_task => {
            debug!("Receiver task completed for client {}", client_id);
        }
    }
    info!("Client {} disconnected", client_id);
    coordinator.disconnect(client_id);
}

async fn handle_outgoing_messages(
    mut rx: UnboundedReceiver<Message>,
    mut ws_sender: SplitSink<WebSocket, Message>,
) {
    while let Some(msg) = rx.recv().await {
        if let Err(e) = ws_sender.send(msg).await {
            debug!("Failed to send message: {}", e);
            break;
        }
    }
}

async fn handle_incoming_messages(
    mut receiver: SplitStream<WebSocket>,
    coordinator: &SessionCoordinator,
    client_id: ClientId,
) {
    while let Some(message) = receiver.next().await {
        match message {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientEvent>(&text) {
                Ok(event) => coordinator.handle_event(client_id, event),
                Err(e) => {
                    warn!("Unparseable event from {}: {}", client_id, e);
                }
            },
            Ok(Message::Close(_)) => {
                debug!("Client {} sent close", client_id);
                break;
            }
            Ok(other) => {
                debug!("Ignoring non-text frame from {}: {:?}", client_id, other);
            }
            Err(e) => {
                debug!("Failed to receive message from {}: {}", client_id, e);
                break;
            }
        }
    }
}
