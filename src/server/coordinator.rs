use crate::model::{
    ClientEvent, ClientId, ClientIdGenerator, Phase, ReadyOutcome, Role, Room, RoomKey, ServerEvent,
};
use crate::server::Connection;
use axum::extract::ws::Message;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct RelayState {
    /// At most one unmatched connection, process-wide.
    waiting: Option<ClientId>,
    connections: HashMap<ClientId, Connection>,
    rooms: HashMap<RoomKey, Room>,
}

/// Matchmaker and per-room session coordinator.
///
/// One instance owns all mutable relay state behind a single mutex, so
/// pairing is atomic with respect to concurrent arrivals and a relay never
/// reads room membership while teardown is rewriting it. Nothing awaits
/// while the lock is held: outbound delivery goes through unbounded senders.
pub struct SessionCoordinator {
    ids: ClientIdGenerator,
    state: Mutex<RelayState>,
}

impl Default for SessionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCoordinator {
    pub fn new() -> Self {
        SessionCoordinator {
            ids: ClientIdGenerator::new(),
            state: Mutex::new(RelayState::default()),
        }
    }

    /// Register an arriving connection and try to pair it.
    ///
    /// The waiting occupant, if live, becomes host of the new room and the
    /// arrival becomes guest; otherwise the arrival takes the waiting slot.
    /// A stale occupant (queued, then disconnected) is never paired.
    pub fn connect(&self, sender: UnboundedSender<Message>) -> ClientId {
        let client_id = self.ids.next_id();
        let mut state = self.state.lock().expect("coordinator state poisoned");
        state
            .connections
            .insert(client_id, Connection::new(client_id, sender));

        let host_id = match state.waiting.take() {
            Some(waiting) if state.connections.contains_key(&waiting) => Some(waiting),
            Some(stale) => {
                debug!("Discarding stale waiting entry {}", stale);
                None
            }
            None => None,
        };

        match host_id {
            Some(host_id) => {
                let room = Room::new(host_id, client_id);
                let key = room.key().clone();
                info!(
                    "Paired {} (host) and {} (guest) in room {}",
                    host_id, client_id, key
                );
                if let Some(host) = state.connections.get_mut(&host_id) {
                    host.room = Some(key.clone());
                }
                if let Some(guest) = state.connections.get_mut(&client_id) {
                    guest.room = Some(key.clone());
                }
                state.rooms.insert(key, room);

                Self::send_to(
                    &state,
                    host_id,
                    &ServerEvent::PlayerRole {
                        role: Role::Host.index(),
                    },
                );
                Self::send_to(
                    &state,
                    client_id,
                    &ServerEvent::PlayerRole {
                        role: Role::Guest.index(),
                    },
                );
                Self::broadcast(&state, [host_id, client_id], &ServerEvent::PlayersConnected);
            }
            None => {
                info!("{} is waiting for an opponent", client_id);
                state.waiting = Some(client_id);
            }
        }
        client_id
    }

    /// Route one gameplay event from a client.
    ///
    /// Events from connections without a live room are silently ignored, as
    /// are events that do not fit the room's current phase.
    pub fn handle_event(&self, client_id: ClientId, event: ClientEvent) {
        let mut state = self.state.lock().expect("coordinator state poisoned");
        let Some(key) = state
            .connections
            .get(&client_id)
            .and_then(|connection| connection.room.clone())
        else {
            debug!("Ignoring event from {} without a room", client_id);
            return;
        };

        match event {
            ClientEvent::Configure { ship_count } => {
                Self::on_configure(&mut state, &key, client_id, ship_count)
            }
            ClientEvent::Ready => Self::on_ready(&mut state, &key, client_id),
            ClientEvent::Fire { coordinate } => {
                Self::relay(&state, &key, client_id, ServerEvent::OpponentFire { coordinate })
            }
            ClientEvent::FireReply(reply) => {
                Self::relay(&state, &key, client_id, ServerEvent::FireReply(reply))
            }
        }
    }

    /// Handle a dropped connection.
    ///
    /// A waiting occupant just vacates the slot. A room member triggers a
    /// one-shot `opponent-disconnected` to the other member, then the room
    /// is discarded; its key is never reused.
    pub fn disconnect(&self, client_id: ClientId) {
        let mut state = self.state.lock().expect("coordinator state poisoned");
        let connection = state.connections.remove(&client_id);

        if state.waiting == Some(client_id) {
            info!("{} left before being paired", client_id);
            state.waiting = None;
            return;
        }

        let Some(key) = connection.and_then(|connection| connection.room) else {
            debug!("{} disconnected without a room", client_id);
            return;
        };
        // The opponent may have torn the room down already.
        let Some(mut room) = state.rooms.remove(&key) else {
            return;
        };
        room.close();
        info!("Room {} closed: {} disconnected", key, client_id);
        if let Some(opponent) = room.opponent_of(client_id) {
            Self::send_to(&state, opponent, &ServerEvent::OpponentDisconnected);
        }
    }

    fn on_configure(state: &mut RelayState, key: &RoomKey, from: ClientId, ship_count: u32) {
        let Some(room) = state.rooms.get_mut(key) else {
            return;
        };
        if !room.configure(from) {
            debug!("Ignoring configure from {} in room {}", from, key);
            return;
        }
        let members = room.members();
        info!("Room {} entering placement, {} ships per fleet", key, ship_count);
        Self::broadcast(state, members, &ServerEvent::EnterPlacement { ship_count });
    }

    fn on_ready(state: &mut RelayState, key: &RoomKey, from: ClientId) {
        let Some(room) = state.rooms.get_mut(key) else {
            return;
        };
        match room.mark_ready(from) {
            ReadyOutcome::Noted => debug!("{} is ready in room {}", from, key),
            ReadyOutcome::Ignored => debug!("Ignoring ready from {} in room {}", from, key),
            ReadyOutcome::BattleStarted => {
                let members = room.members();
                info!("Room {} entering battle", key);
                Self::broadcast(state, members, &ServerEvent::BattleStart);
            }
        }
    }

    /// Forward an event to the other member of the room, never to the
    /// sender. A torn-down room or a non-battle phase makes this a no-op.
    fn relay(state: &RelayState, key: &RoomKey, from: ClientId, event: ServerEvent) {
        let Some(room) = state.rooms.get(key) else {
            return;
        };
        if room.phase() != Phase::Battle {
            debug!("Dropping relay from {} outside battle in room {}", from, key);
            return;
        }
        let Some(opponent) = room.opponent_of(from) else {
            return;
        };
        debug!("Relaying event from {} to {} in room {}", from, opponent, key);
        Self::send_to(state, opponent, &event);
    }

    fn send_to(state: &RelayState, client_id: ClientId, event: &ServerEvent) {
        if let Some(connection) = state.connections.get(&client_id) {
            connection.send(event);
        }
    }

    fn broadcast(state: &RelayState, members: [ClientId; 2], event: &ServerEvent) {
        for member in members {
            Self::send_to(state, member, event);
        }
    }
}
