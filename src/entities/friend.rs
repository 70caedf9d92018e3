//! Friend entity - Amici, richieste di amicizia e utenti invitabili

use super::enums::FriendStatus;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: String,
    pub username: String,
    pub status: FriendStatus,
    // valorizzati solo quando status == InRoom
    pub room_id: Option<String>,
    pub room_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FriendRequest {
    pub id: String,
    pub username: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvitableUser {
    pub id: String,
    pub username: String,
}
