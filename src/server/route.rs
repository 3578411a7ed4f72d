use crate::server::{websocket_listener, SessionCoordinator};
use axum::extract::WebSocketUpgrade;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn create_session_route(coordinator: Arc<SessionCoordinator>) -> Router {
    Router::new().route(
        "/session",
        get(move |ws: WebSocketUpgrade| {
            websocket_listener::handle_websocket(ws, coordinator.clone())
        }),
    )
}
