//! User services - Ricerca utenti per il selettore di inviti

use crate::core::AppState;
use crate::dtos::UserSearchQuery;
use crate::entities::InvitableUser;
use axum::extract::{Json, Query, State};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[instrument(skip(state, params), fields(search = %params.search))]
pub async fn search_invitable_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserSearchQuery>, // /users/search?search=ja&exclude=1,4
) -> Json<Vec<InvitableUser>> {
    debug!("Searching invitable users");
    let users = state
        .friends
        .search_invitable(&params.search, &params.excluded_ids());
    info!("Found {} invitable users", users.len());
    Json(users)
}
