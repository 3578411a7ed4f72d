pub mod config;
pub mod model;
pub mod server;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::model::ClientEvent;
    pub use crate::model::ClientId;
    pub use crate::model::FireReply;
    pub use crate::model::Phase;
    pub use crate::model::Role;
    pub use crate::model::Room;
    pub use crate::model::RoomKey;
    pub use crate::model::ServerEvent;
    pub use crate::model::ShotResult;
    pub use crate::server::SessionCoordinator;
}
