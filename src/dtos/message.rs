//! Message DTOs - Data Transfer Objects per messaggi e notifiche

use crate::entities::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Messaggio come viene mostrato nella chat
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageDTO {
    pub id: String,
    pub text: String,
    pub username: String,
    pub timestamp: DateTime<Utc>,
    // true se l'autore è l'utente corrente (bolla evidenziata)
    pub is_own: bool,
}

impl MessageDTO {
    pub fn from_message(value: Message, current_user: &str) -> Self {
        let is_own = value.username == current_user;
        Self {
            id: value.id,
            text: value.text,
            username: value.username,
            timestamp: value.timestamp,
            is_own,
        }
    }
}

/// Body di POST /room/{id}/messages
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct SendMessageDTO {
    #[validate(length(max = 5000, message = "Message content must be at most 5000 characters"))]
    pub text: String,
}

/// DTO per creare un nuovo messaggio (senza id, generato dal repository)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateMessageDTO {
    pub room_id: String,
    pub text: String,
    pub username: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReactionRequestDTO {
    pub emoji: String,
}

/// Notifica transitoria (toast), non modifica nessun dato
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NoticeDTO {
    pub message: String,
}

impl NoticeDTO {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
