use crate::model::{ClientId, RoomKey, ServerEvent};
use axum::extract::ws::Message;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Server-side handle for one connected player.
///
/// The sender feeds the connection's outgoing pump; sending never blocks, so
/// the coordinator can emit events while holding its lock.
#[derive(Debug, Clone)]
pub struct Connection {
    pub client_id: ClientId,
    pub sender: UnboundedSender<Message>,
    /// Set once the connection is paired; rooms are never reassigned.
    pub room: Option<RoomKey>,
}

impl Connection {
    pub fn new(client_id: ClientId, sender: UnboundedSender<Message>) -> Self {
        Connection {
            client_id,
            sender,
            room: None,
        }
    }

    /// Best-effort delivery. A peer that is already gone just drops the
    /// event; nothing here is an error the room cares about.
    pub fn send(&self, event: &ServerEvent) {
        let serialized = match serde_json::to_string(event) {
            Ok(serialized) => serialized,
            Err(e) => {
                debug!("Failed to serialize event for {}: {}", self.client_id, e);
                return;
            }
        };
        if let Err(e) = self.sender.send(Message::Text(serialized)) {
            debug!("Failed to send event to {}: {}", self.client_id, e);
        }
    }
}
