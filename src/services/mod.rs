//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo corrisponde a una pagina dell'applicazione e restituisce i dati
//! derivati che la pagina mostra.

pub mod create_room;
pub mod dashboard;
pub mod friends;
pub mod rooms;
pub mod users;

// Re-exports per facilitare l'import
pub use create_room::{create_room, create_room_form};
pub use dashboard::dashboard;
pub use friends::{join_friend_room, list_friends, respond_to_friend_request};
pub use rooms::{
    explore_rooms, get_room, join_room, leave_room, list_my_rooms, react_in_room, remind_me,
    send_message,
};
pub use users::search_invitable_users;

use crate::core::AppError;
use axum::http::Uri;
use tracing::warn;

/// Fallback per i path non mappati
pub async fn not_found(uri: Uri) -> AppError {
    warn!(path = %uri.path(), "No route matches path");
    AppError::not_found("Page not found").with_details(format!("no page at {}", uri.path()))
}
