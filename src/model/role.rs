use serde::{Deserialize, Serialize};

/// Role of a room member, fixed at pairing time.
///
/// The host is the member that was waiting when the pair formed; only the
/// host may configure the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Host,
    Guest,
}

impl Role {
    /// Wire encoding used by the `player-role` event: 0 for host, 1 for guest.
    pub fn index(&self) -> u8 {
        match self {
            Role::Host => 0,
            Role::Guest => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_index() {
        assert_eq!(Role::Host.index(), 0);
        assert_eq!(Role::Guest.index(), 1);
    }
}
