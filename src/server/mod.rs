mod connection;
mod coordinator;
mod error;
pub mod route;
pub mod websocket_listener;

pub use connection::Connection;
pub use coordinator::SessionCoordinator;
pub use error::ServerError;
pub use route::create_session_route;
