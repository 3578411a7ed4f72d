use serde::{Deserialize, Serialize};

/// Result of a shot, judged by the defending client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotResult {
    Hit,
    Miss,
    Sunk,
}

/// Reply to a `fire`, produced by the defender and relayed verbatim.
///
/// The server never interprets this payload; optional fields are omitted
/// when absent so the forwarded JSON matches what the sender produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireReply {
    pub result: ShotResult,
    pub coordinate: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunk_ship_size: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_over: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

/// Events received from a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Host picks the ship count; moves the room into placement.
    #[serde(rename_all = "camelCase")]
    Configure { ship_count: u32 },
    /// Sender finished local placement.
    Ready,
    /// Shot at a cell on the opponent's board.
    Fire { coordinate: u8 },
    /// Defender's verdict on the opponent's last shot.
    FireReply(FireReply),
}

/// Events sent to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Assigned at pairing: 0 for host, 1 for guest.
    PlayerRole { role: u8 },
    /// Both players of the room are connected.
    PlayersConnected,
    #[serde(rename_all = "camelCase")]
    EnterPlacement { ship_count: u32 },
    BattleStart,
    OpponentFire { coordinate: u8 },
    FireReply(FireReply),
    OpponentDisconnected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_wire_format() {
        let event = ClientEvent::Configure { ship_count: 5 };
        let serialized = serde_json::to_string(&event).unwrap();
        assert_eq!(serialized, r#"{"event":"configure","data":{"shipCount":5}}"#);
        assert_eq!(
            serde_json::from_str::<ClientEvent>(&serialized).unwrap(),
            event
        );
    }

    #[test]
    fn ready_has_no_payload() {
        let serialized = serde_json::to_string(&ClientEvent::Ready).unwrap();
        assert_eq!(serialized, r#"{"event":"ready"}"#);
        assert_eq!(
            serde_json::from_str::<ClientEvent>(&serialized).unwrap(),
            ClientEvent::Ready
        );
    }

    #[test]
    fn fire_reply_omits_absent_fields() {
        let reply = FireReply {
            result: ShotResult::Hit,
            coordinate: 42,
            sunk_ship_size: None,
            game_over: None,
            winner: None,
        };
        let serialized = serde_json::to_string(&ServerEvent::FireReply(reply)).unwrap();
        assert_eq!(
            serialized,
            r#"{"event":"fire-reply","data":{"result":"hit","coordinate":42}}"#
        );
    }

    #[test]
    fn fire_reply_full_payload_round_trips() {
        let reply = FireReply {
            result: ShotResult::Sunk,
            coordinate: 17,
            sunk_ship_size: Some(4),
            game_over: Some(true),
            winner: Some("host".to_string()),
        };
        let serialized = serde_json::to_string(&ClientEvent::FireReply(reply.clone())).unwrap();
        assert!(serialized.contains(r#""sunkShipSize":4"#));
        assert!(serialized.contains(r#""gameOver":true"#));
        let parsed: ClientEvent = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, ClientEvent::FireReply(reply));
    }

    #[test]
    fn server_events_use_kebab_case_names() {
        assert_eq!(
            serde_json::to_string(&ServerEvent::PlayerRole { role: 0 }).unwrap(),
            r#"{"event":"player-role","data":{"role":0}}"#
        );
        assert_eq!(
            serde_json::to_string(&ServerEvent::PlayersConnected).unwrap(),
            r#"{"event":"players-connected"}"#
        );
        assert_eq!(
            serde_json::to_string(&ServerEvent::EnterPlacement { ship_count: 7 }).unwrap(),
            r#"{"event":"enter-placement","data":{"shipCount":7}}"#
        );
        assert_eq!(
            serde_json::to_string(&ServerEvent::OpponentFire { coordinate: 99 }).unwrap(),
            r#"{"event":"opponent-fire","data":{"coordinate":99}}"#
        );
        assert_eq!(
            serde_json::to_string(&ServerEvent::OpponentDisconnected).unwrap(),
            r#"{"event":"opponent-disconnected"}"#
        );
    }
}
