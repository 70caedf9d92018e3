//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};

// ********************* ENUMERAZIONI UTILI **********************//

/// Fase del ciclo di vita di una stanza, sempre derivata da (start, end, now)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Scheduled,
    Live,
    Closed,
}

impl RoomStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RoomStatus::Scheduled => "Scheduled",
            RoomStatus::Live => "Live",
            RoomStatus::Closed => "Closed",
        }
    }

    /// Testo del pulsante mostrato sulla card della stanza
    pub fn card_action(&self) -> &'static str {
        match self {
            RoomStatus::Scheduled => "Details",
            RoomStatus::Live => "Join",
            RoomStatus::Closed => "View Summary",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomTag {
    #[default]
    Hangout,
    Work,
    Brainstorm,
    Wellness,
}

impl RoomTag {
    pub const ALL: [RoomTag; 4] = [
        RoomTag::Hangout,
        RoomTag::Work,
        RoomTag::Brainstorm,
        RoomTag::Wellness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomTag::Hangout => "Hangout",
            RoomTag::Work => "Work",
            RoomTag::Brainstorm => "Brainstorm",
            RoomTag::Wellness => "Wellness",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FriendStatus {
    Online,
    Offline,
    InRoom,
}

impl FriendStatus {
    /// Un amico è "attivo" se online oppure dentro una stanza
    pub fn is_active(&self) -> bool {
        matches!(self, FriendStatus::Online | FriendStatus::InRoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&RoomStatus::Live).unwrap(), "\"live\"");
        assert_eq!(serde_json::to_string(&RoomTag::Brainstorm).unwrap(), "\"brainstorm\"");
        assert_eq!(serde_json::to_string(&FriendStatus::InRoom).unwrap(), "\"in-room\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(RoomTag::Wellness.label(), "Wellness");
        assert_eq!(RoomStatus::Closed.card_action(), "View Summary");
        assert!(FriendStatus::InRoom.is_active());
        assert!(!FriendStatus::Offline.is_active());
    }
}
