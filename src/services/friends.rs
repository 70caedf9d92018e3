//! Friends services - Amici e richieste di amicizia

use crate::core::{AppError, AppState};
use crate::dtos::{FriendCountsDTO, FriendsQuery, FriendsViewDTO, NoticeDTO};
use crate::entities::FriendStatus;
use crate::repositories::{Read, ReadAll};
use axum::extract::{Json, Path, Query, State};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state, params), fields(search = %params.search, tab = ?params.tab))]
pub async fn list_friends(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FriendsQuery>, // /friends?search=ja&tab=online
) -> Json<FriendsViewDTO> {
    debug!("Listing friends");
    // 1. Filtrare gli amici per username (case-insensitive)
    // 2. Restringere alla tab scelta (tutti / online / in una stanza)
    let friends: Vec<_> = state
        .friends
        .search_by_username_partial(&params.search)
        .into_iter()
        .filter(|f| params.tab.includes(f))
        .collect();

    let requests = state.friends.pending_requests();
    let counts = FriendCountsDTO {
        all: state.friends.read_all().len(),
        online: state.friends.count_active(),
        in_room: state.friends.count_with_status(FriendStatus::InRoom),
        requests: requests.len(),
    };

    info!("Found {} friends", friends.len());
    Json(FriendsViewDTO {
        tab: params.tab,
        search: params.search,
        friends,
        requests,
        counts,
    })
}

#[instrument(skip(state), fields(request_id = %request_id, action = %action))]
pub async fn respond_to_friend_request(
    State(state): State<Arc<AppState>>,
    Path((request_id, action)): Path<(String, String)>,
) -> Result<Json<NoticeDTO>, AppError> {
    // le richieste sono dati di esempio: la risposta è solo una notifica
    let request = state.friends.find_request(&request_id).ok_or_else(|| {
        warn!("Friend request not found");
        AppError::not_found("Friend request not found")
    })?;

    let notice = match action.as_str() {
        "accept" => format!("{} added to your friends list", request.username),
        "decline" => format!("{} request declined", request.username),
        _ => {
            warn!("Unknown friend request action");
            return Err(AppError::bad_request("Unknown action")
                .with_details("expected 'accept' or 'decline'"));
        }
    };

    info!("Friend request answered");
    Ok(Json(NoticeDTO::new(notice)))
}

#[instrument(skip(state), fields(friend_id = %friend_id))]
pub async fn join_friend_room(
    State(state): State<Arc<AppState>>,
    Path(friend_id): Path<String>,
) -> Result<Json<NoticeDTO>, AppError> {
    let friend = state.friends.read(&friend_id).ok_or_else(|| {
        warn!("Friend not found");
        AppError::not_found("Friend not found")
    })?;

    let Some(room_name) = friend.room_name.filter(|_| friend.status == FriendStatus::InRoom) else {
        warn!("Friend is not in a room");
        return Err(AppError::bad_request("Friend is not in a room"));
    };

    info!(room_id = ?friend.room_id, "Joining friend's room");
    Ok(Json(NoticeDTO::new(format!("Joining {room_name}..."))))
}
