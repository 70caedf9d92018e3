//! roomloop - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(dashboard))
        .route("/my-rooms", get(list_my_rooms))
        .route("/explore", get(explore_rooms))
        .route("/create-room", get(create_room_form).post(create_room))
        .nest("/room", configure_room_routes())
        .nest("/friends", configure_friend_routes())
        .route("/users/search", get(search_invitable_users))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes del dettaglio stanza e della chat
fn configure_room_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/{room_id}", get(get_room))
        .route("/{room_id}/messages", post(send_message))
        .route("/{room_id}/reactions", post(react_in_room))
        .route("/{room_id}/join", post(join_room))
        .route("/{room_id}/reminder", post(remind_me))
        .route("/{room_id}/session", delete(leave_room))
}

/// Configura le routes della pagina amici
fn configure_friend_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_friends))
        .route("/requests/{request_id}/{action}", post(respond_to_friend_request))
        .route("/{friend_id}/join", post(join_friend_room))
}
