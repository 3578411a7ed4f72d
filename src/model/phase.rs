use serde::{Deserialize, Serialize};

/// Lifecycle of a room.
///
/// A room starts in `AwaitingSetup` once two players are paired, moves to
/// `AwaitingPlacement` when the host configures the game, to `Battle` when
/// both members have signaled ready, and to `Closed` at teardown. Rooms are
/// never reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingSetup,
    AwaitingPlacement,
    Battle,
    Closed,
}
