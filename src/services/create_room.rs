//! Create room services - Form di creazione di una stanza

use crate::core::{AppError, AppState};
use crate::dtos::{CreateRoomDTO, CreateRoomFormDTO, RoomCardDTO, RoomCreatedDTO};
use axum::extract::{Json, State};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Pagina verso cui il client viene rimandato dopo la creazione
pub const CREATED_REDIRECT: &str = "/my-rooms";

#[debug_handler]
pub async fn create_room_form(State(_state): State<Arc<AppState>>) -> Json<CreateRoomFormDTO> {
    Json(CreateRoomFormDTO::default())
}

#[instrument(skip(state, body), fields(user = %state.current_user, tag = ?body.tag))]
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRoomDTO>,
) -> Result<Json<RoomCreatedDTO>, AppError> {
    debug!("Submitting create room form");
    // 1. Campi obbligatori: titolo, descrizione, inizio, fine, tag
    // 2. Eventuali slot orari applicati a inizio e fine
    // 3. La fine deve essere successiva all'inizio
    // 4. Vincoli di campo (capienza >= 2, lunghezze)
    // 5. Nessun salvataggio: si restituisce l'anteprima e la pagina di redirect
    let validated = body.validate_submission().inspect_err(|e| {
        warn!(
            status = %e.status(),
            reason = e.message(),
            details = ?e.details(),
            "Create room form rejected"
        );
    })?;

    let invited = validated.invited_users.len();
    let preview = validated.into_preview(&state.current_user);

    info!(invited, "Room '{}' created (not persisted)", preview.title);
    Ok(Json(RoomCreatedDTO {
        message: "Room created successfully!".to_string(),
        redirect_to: CREATED_REDIRECT.to_string(),
        room: RoomCardDTO::from_room(&preview, &state.now()),
    }))
}
