mod client;
mod event;
mod phase;
mod role;
mod room;

pub use client::{ClientId, ClientIdGenerator};
pub use event::{ClientEvent, FireReply, ServerEvent, ShotResult};
pub use phase::Phase;
pub use role::Role;
pub use room::{ReadyOutcome, Room, RoomKey};
