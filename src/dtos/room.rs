//! Room DTOs - Card, dettaglio e form di creazione delle stanze

use super::message::MessageDTO;
use crate::core::AppError;
use crate::entities::{InvitableUser, Reaction, Room, RoomStatus, RoomTag, StatusFilter, TagFilter};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Partecipanti mostrati come avatar sulla card, gli altri finiscono nel "+N"
const PARTICIPANT_PREVIEW: usize = 3;

/// Capienza minima accettata dal form di creazione
pub const MIN_PARTICIPANTS: u32 = 2;

lazy_static! {
    // slot di mezz'ora del selettore orario, 00:00 .. 23:30
    static ref TIME_SLOT: Regex =
        Regex::new(r"^([01][0-9]|2[0-3]):(00|30)$").expect("time slot pattern is valid");
}

/// Card di una stanza con stato ed etichette derivati all'istante della richiesta
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoomCardDTO {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_private: bool,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_participants: Option<u32>,
    pub tag: RoomTag,
    pub tag_label: String,
    pub status: RoomStatus,
    pub status_label: String,
    pub participant_count: usize,
    pub participants_preview: Vec<String>,
    pub extra_participants: usize,
    pub capacity: String,
    pub action: String,
    pub link: String,
}

impl RoomCardDTO {
    pub fn from_room(room: &Room, now: &DateTime<Utc>) -> Self {
        let status = room.status_at(now);
        Self {
            id: room.id.clone(),
            title: room.title.clone(),
            description: room.description.clone(),
            is_private: room.is_private,
            start_time: room.start_time,
            end_time: room.end_time,
            max_participants: room.max_participants,
            tag: room.tag,
            tag_label: room.tag.label().to_string(),
            status,
            status_label: status.label().to_string(),
            participant_count: room.participants.len(),
            participants_preview: room
                .participants
                .iter()
                .take(PARTICIPANT_PREVIEW)
                .cloned()
                .collect(),
            extra_participants: room.participants.len().saturating_sub(PARTICIPANT_PREVIEW),
            capacity: room.capacity_label(),
            action: status.card_action().to_string(),
            link: format!("/room/{}", room.id),
        }
    }

    pub fn from_rooms(rooms: &[Room], now: &DateTime<Utc>) -> Vec<Self> {
        rooms.iter().map(|r| Self::from_room(r, now)).collect()
    }
}

/// Lista di stanze filtrate (Explore / My Rooms) con i selettori applicati
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoomListDTO {
    pub status: StatusFilter,
    pub tag: TagFilter,
    pub count: usize,
    pub rooms: Vec<RoomCardDTO>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoomDetailDTO {
    pub room: RoomCardDTO,
    pub participants: Vec<String>,
    pub messages: Vec<MessageDTO>,
    // la chat accetta messaggi solo mentre la stanza è live
    pub can_chat: bool,
    pub reaction_palette: Vec<String>,
    pub reactions: Vec<Reaction>,
    pub starts_in_seconds: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TagOptionDTO {
    pub value: RoomTag,
    pub label: String,
}

/// Opzioni del form di creazione (GET /create-room)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateRoomFormDTO {
    pub tags: Vec<TagOptionDTO>,
    pub default_tag: RoomTag,
    pub min_participants: u32,
    pub time_slots: Vec<String>,
}

impl Default for CreateRoomFormDTO {
    fn default() -> Self {
        Self {
            tags: RoomTag::ALL
                .iter()
                .map(|tag| TagOptionDTO {
                    value: *tag,
                    label: tag.label().to_string(),
                })
                .collect(),
            default_tag: RoomTag::default(),
            min_participants: MIN_PARTICIPANTS,
            time_slots: time_slots(),
        }
    }
}

/// I 48 slot di mezz'ora di una giornata
pub fn time_slots() -> Vec<String> {
    (0..24)
        .flat_map(|hour| [0, 30].map(|minute| format!("{hour:02}:{minute:02}")))
        .collect()
}

/// Replace the time of day of `instant` with a `HH:MM` half-hour slot.
///
/// Returns `None` when the slot is not one of [`time_slots`].
pub fn apply_time_slot(instant: &DateTime<Utc>, slot: &str) -> Option<DateTime<Utc>> {
    let captures = TIME_SLOT.captures(slot)?;
    let hour = captures.get(1)?.as_str().parse::<u32>().ok()?;
    let minute = captures.get(2)?.as_str().parse::<u32>().ok()?;
    instant
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .map(|naive| naive.and_utc())
}

/// Body di POST /create-room
///
/// Tutti i campi sono opzionali in deserializzazione: i mancanti vengono
/// segnalati tutti insieme da [`CreateRoomDTO::validate_submission`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct CreateRoomDTO {
    #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,

    // sovrascrivono l'orario di start_time / end_time, formato HH:MM
    pub start_slot: Option<String>,
    pub end_slot: Option<String>,

    pub tag: Option<RoomTag>,

    #[validate(range(min = 2, message = "A room must allow at least 2 participants"))]
    pub max_participants: Option<u32>,

    pub is_private: bool,
    pub invited_users: Vec<InvitableUser>,
}

/// Form che ha superato la validazione, pronto per l'anteprima
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRoom {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub tag: RoomTag,
    pub max_participants: Option<u32>,
    pub is_private: bool,
    pub invited_users: Vec<InvitableUser>,
}

impl ValidatedRoom {
    /// Anteprima della stanza creata; non viene salvata da nessuna parte
    pub fn into_preview(self, owner: &str) -> Room {
        Room {
            id: "draft".to_string(),
            title: self.title,
            description: self.description,
            is_private: self.is_private,
            start_time: self.start_time,
            end_time: self.end_time,
            max_participants: self.max_participants,
            tag: self.tag,
            participants: vec![owner.to_string()],
            created_by: owner.to_string(),
        }
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl CreateRoomDTO {
    /// Validates the form the same way the submit button does:
    /// required fields first, then the time window, then field constraints.
    pub fn validate_submission(&self) -> Result<ValidatedRoom, AppError> {
        let title = present(&self.title);
        let description = present(&self.description);

        let missing: Vec<&str> = [
            ("title", title.is_none()),
            ("description", description.is_none()),
            ("start_time", self.start_time.is_none()),
            ("end_time", self.end_time.is_none()),
            ("tag", self.tag.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, is_missing)| is_missing.then_some(field))
        .collect();

        let (Some(title), Some(description), Some(start), Some(end), Some(tag)) =
            (title, description, self.start_time, self.end_time, self.tag)
        else {
            return Err(AppError::bad_request("Please fill in all required fields")
                .with_details(format!("missing: {}", missing.join(", "))));
        };

        let start_time = with_slot(start, self.start_slot.as_deref())?;
        let end_time = with_slot(end, self.end_slot.as_deref())?;

        if start_time >= end_time {
            return Err(AppError::bad_request("End time must be after start time"));
        }

        self.validate()?;

        Ok(ValidatedRoom {
            title,
            description,
            start_time,
            end_time,
            tag,
            max_participants: self.max_participants,
            is_private: self.is_private,
            // gli inviti hanno senso solo per le stanze private
            invited_users: if self.is_private {
                self.invited_users.clone()
            } else {
                Vec::new()
            },
        })
    }
}

fn with_slot(instant: DateTime<Utc>, slot: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    match slot {
        None => Ok(instant),
        Some(slot) => apply_time_slot(&instant, slot).ok_or_else(|| {
            AppError::bad_request("Invalid time slot")
                .with_details(format!("'{slot}' is not a half-hour HH:MM slot"))
        }),
    }
}

/// Risposta di una creazione riuscita: il client naviga verso `redirect_to`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoomCreatedDTO {
    pub message: String,
    pub redirect_to: String,
    pub room: RoomCardDTO,
}
