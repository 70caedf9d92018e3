//! Room services - Esplora, le mie stanze, dettaglio e chat

use crate::core::{AppError, AppState};
use crate::dtos::{
    CreateMessageDTO, MessageDTO, NoticeDTO, ReactionRequestDTO, RoomCardDTO, RoomDetailDTO,
    RoomFilterQuery, RoomListDTO, SendMessageDTO,
};
use crate::entities::{Room, RoomStatus, StatusFilter, TagFilter, filter_rooms};
use crate::repositories::mock::mock_reactions;
use crate::repositories::{Create, Delete, Read};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Emoji disponibili per reagire in una stanza live
pub const REACTION_PALETTE: [&str; 6] = ["👍", "🔥", "👏", "❤️", "🎉", "🙌"];

fn room_list(rooms: &[Room], status: StatusFilter, tag: TagFilter, now: &DateTime<Utc>) -> RoomListDTO {
    let filtered = filter_rooms(rooms, status, tag, now);
    RoomListDTO {
        status,
        tag,
        count: filtered.len(),
        rooms: RoomCardDTO::from_rooms(&filtered, now),
    }
}

fn find_room(state: &AppState, room_id: &str) -> Result<Room, AppError> {
    state.rooms.read(room_id).ok_or_else(|| {
        warn!("Room not found");
        AppError::not_found("Room not found").with_details(format!("no room with id '{room_id}'"))
    })
}

#[instrument(skip(state, params))]
pub async fn explore_rooms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RoomFilterQuery>, // /explore?status=live&tag=work
) -> Json<RoomListDTO> {
    // Explore mostra solo stanze pubbliche e parte dal filtro "live"
    let status = params.status.unwrap_or(StatusFilter::Live);
    let tag = params.tag.unwrap_or_default();
    debug!(?status, ?tag, "Exploring public rooms");

    let list = room_list(&state.rooms.find_many_public(), status, tag, &state.now());
    info!("Found {} public rooms", list.count);
    Json(list)
}

#[instrument(skip(state, params), fields(user = %state.current_user))]
pub async fn list_my_rooms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RoomFilterQuery>,
) -> Json<RoomListDTO> {
    let status = params.status.unwrap_or_default();
    let tag = params.tag.unwrap_or_default();
    debug!(?status, ?tag, "Listing rooms created by current user");

    let mine = state.rooms.find_many_by_owner(&state.current_user);
    let list = room_list(&mine, status, tag, &state.now());
    info!("Found {} own rooms", list.count);
    Json(list)
}

#[instrument(skip(state), fields(room_id = %room_id))]
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDTO>, AppError> {
    debug!("Opening room");
    // 1. Cercare la stanza, id sconosciuto -> 404
    // 2. Derivare lo stato all'istante corrente
    // 3. Aprire la sessione di chat (trascrizione iniziale solo se live)
    // 4. Reazioni: palette se live, conteggi statici se chiusa, niente se programmata
    let room = find_room(&state, &room_id)?;
    let now = state.now();
    let status = room.status_at(&now);

    let messages = state
        .msg
        .open_session(&room, &now)
        .into_iter()
        .map(|m| MessageDTO::from_message(m, &state.current_user))
        .collect();

    let (reaction_palette, reactions) = match status {
        RoomStatus::Live => (REACTION_PALETTE.iter().map(|e| e.to_string()).collect(), Vec::new()),
        RoomStatus::Closed => (Vec::new(), mock_reactions()),
        RoomStatus::Scheduled => (Vec::new(), Vec::new()),
    };

    let starts_in_seconds =
        (status == RoomStatus::Scheduled).then(|| (room.start_time - now).num_seconds());

    info!(?status, "Room opened");
    Ok(Json(RoomDetailDTO {
        room: RoomCardDTO::from_room(&room, &now),
        participants: room.participants.clone(),
        messages,
        can_chat: status == RoomStatus::Live,
        reaction_palette,
        reactions,
        starts_in_seconds,
    }))
}

#[instrument(skip(state, body), fields(room_id = %room_id, user = %state.current_user))]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Json(body): Json<SendMessageDTO>,
) -> Result<Json<Vec<MessageDTO>>, AppError> {
    debug!("Sending chat message");
    // 1. La stanza deve esistere ed essere live
    // 2. Testo vuoto -> nessun effetto, si restituisce la chat invariata
    // 3. Append in coda con timestamp corrente e autore = utente corrente
    let room = find_room(&state, &room_id)?;
    let now = state.now();

    if room.status_at(&now) != RoomStatus::Live {
        warn!("Message sent to a room that is not live");
        return Err(AppError::bad_request("Room is not live"));
    }

    body.validate()?;

    // la sessione potrebbe non essere ancora aperta (messaggio senza passare dal dettaglio)
    state.msg.open_session(&room, &now);

    if body.text.trim().is_empty() {
        debug!("Empty message ignored");
    } else {
        state.msg.create(&CreateMessageDTO {
            room_id: room.id.clone(),
            text: body.text,
            username: state.current_user.clone(),
            timestamp: now,
        });
        info!("Message appended to room chat");
    }

    let messages = state
        .msg
        .find_many_by_room_id(&room.id)
        .into_iter()
        .map(|m| MessageDTO::from_message(m, &state.current_user))
        .collect();

    Ok(Json(messages))
}

#[instrument(skip(state, body), fields(room_id = %room_id, emoji = %body.emoji))]
pub async fn react_in_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Json(body): Json<ReactionRequestDTO>,
) -> Result<Json<NoticeDTO>, AppError> {
    // le reazioni producono solo una notifica, i conteggi restano quelli mock
    let room = find_room(&state, &room_id)?;

    if room.status_at(&state.now()) != RoomStatus::Live {
        warn!("Reaction in a room that is not live");
        return Err(AppError::bad_request("Room is not live"));
    }

    if !REACTION_PALETTE.contains(&body.emoji.as_str()) {
        warn!("Unknown reaction");
        return Err(AppError::bad_request("Unknown reaction")
            .with_details(format!("allowed: {}", REACTION_PALETTE.join(" "))));
    }

    Ok(Json(NoticeDTO::new(format!("You reacted with {}", body.emoji))))
}

#[instrument(skip(state), fields(room_id = %room_id, user = %state.current_user))]
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<NoticeDTO>, AppError> {
    // "Join Room" esiste solo sulle stanze live, la lista partecipanti resta quella mock
    let room = find_room(&state, &room_id)?;

    if room.status_at(&state.now()) != RoomStatus::Live {
        warn!("Join on a room that is not live");
        return Err(AppError::bad_request("Room is not live"));
    }

    info!("Joined room");
    Ok(Json(NoticeDTO::new("Joined the room!")))
}

#[instrument(skip(state), fields(room_id = %room_id))]
pub async fn remind_me(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<NoticeDTO>, AppError> {
    let room = find_room(&state, &room_id)?;

    if room.status_at(&state.now()) != RoomStatus::Scheduled {
        warn!("Reminder on a room that is not scheduled");
        return Err(AppError::bad_request("Room is not scheduled"));
    }

    debug!(start_time = %room.start_time, "Reminder requested");
    Ok(Json(NoticeDTO::new("You'll be reminded when the room goes live!")))
}

#[instrument(skip(state), fields(room_id = %room_id))]
pub async fn leave_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<StatusCode, AppError> {
    // uscire dalla pagina scarta la chat locale della stanza
    find_room(&state, &room_id)?;
    if state.msg.delete(&room_id) {
        info!("Chat session discarded");
    } else {
        debug!("No chat session to discard");
    }
    Ok(StatusCode::NO_CONTENT)
}
