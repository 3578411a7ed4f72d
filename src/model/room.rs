use crate::model::{ClientId, Phase, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key identifying a room, derived from both member ids at pairing time.
///
/// Ids are monotonically increasing and never reused, and `#` cannot occur
/// in a decimal id, so a key is unique for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomKey(String);

impl RoomKey {
    pub fn derive(host: ClientId, guest: ClientId) -> Self {
        RoomKey(format!("{host}#{guest}"))
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a member signaling ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyOutcome {
    /// First member to signal ready; still waiting for the other.
    Noted,
    /// Duplicate ready from the same member, or ready outside placement.
    Ignored,
    /// Both distinct members are now ready; battle starts.
    BattleStarted,
}

/// A pairing of exactly two connections sharing one game session.
///
/// `members[0]` is always the host. The ready flags are tracked per member
/// rather than as a bare counter so that one member signaling ready twice
/// can never start the battle on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    key: RoomKey,
    members: [ClientId; 2],
    phase: Phase,
    ready: [bool; 2],
}

impl Room {
    pub fn new(host: ClientId, guest: ClientId) -> Self {
        Room {
            key: RoomKey::derive(host, guest),
            members: [host, guest],
            phase: Phase::AwaitingSetup,
            ready: [false, false],
        }
    }

    pub fn key(&self) -> &RoomKey {
        &self.key
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn host(&self) -> ClientId {
        self.members[0]
    }

    pub fn guest(&self) -> ClientId {
        self.members[1]
    }

    pub fn members(&self) -> [ClientId; 2] {
        self.members
    }

    pub fn role_of(&self, id: ClientId) -> Option<Role> {
        if id == self.members[0] {
            Some(Role::Host)
        } else if id == self.members[1] {
            Some(Role::Guest)
        } else {
            None
        }
    }

    /// The other member of the room, if `id` is a member.
    pub fn opponent_of(&self, id: ClientId) -> Option<ClientId> {
        match self.role_of(id)? {
            Role::Host => Some(self.members[1]),
            Role::Guest => Some(self.members[0]),
        }
    }

    /// Host-only transition out of setup. Returns true when the room moved
    /// to `AwaitingPlacement`; configure from the guest or in any other
    /// phase is ignored.
    pub fn configure(&mut self, by: ClientId) -> bool {
        if self.phase != Phase::AwaitingSetup || self.role_of(by) != Some(Role::Host) {
            return false;
        }
        self.phase = Phase::AwaitingPlacement;
        true
    }

    /// Record that a member finished placement.
    pub fn mark_ready(&mut self, by: ClientId) -> ReadyOutcome {
        if self.phase != Phase::AwaitingPlacement {
            return ReadyOutcome::Ignored;
        }
        let index = match self.role_of(by) {
            Some(role) => role.index() as usize,
            None => return ReadyOutcome::Ignored,
        };
        if self.ready[index] {
            return ReadyOutcome::Ignored;
        }
        self.ready[index] = true;
        if self.ready.iter().all(|ready| *ready) {
            self.phase = Phase::Battle;
            ReadyOutcome::BattleStarted
        } else {
            ReadyOutcome::Noted
        }
    }

    /// Teardown. The room is dropped right after; the key is never reused.
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
    }
}
