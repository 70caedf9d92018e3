//! Query DTOs - Data Transfer Objects per query string di filtro e ricerca

use crate::entities::{Friend, FriendStatus, StatusFilter, TagFilter};
use serde::{Deserialize, Serialize};

/// Query parameters dei filtri stanza: un selettore assente vale il default della pagina
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RoomFilterQuery {
    pub status: Option<StatusFilter>,
    pub tag: Option<TagFilter>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FriendsTab {
    #[default]
    All,
    Online,
    InRoom,
}

impl FriendsTab {
    pub fn includes(&self, friend: &Friend) -> bool {
        match self {
            FriendsTab::All => true,
            FriendsTab::Online => friend.status.is_active(),
            FriendsTab::InRoom => friend.status == FriendStatus::InRoom,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct FriendsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub tab: FriendsTab,
}

/// DTO per query parameters del selettore di inviti (/users/search?search=ja&exclude=1,4)
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UserSearchQuery {
    #[serde(default)]
    pub search: String,
    pub exclude: Option<String>,
}

impl UserSearchQuery {
    /// Id già invitati, separati da virgola
    pub fn excluded_ids(&self) -> Vec<String> {
        self.exclude
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_ids_parsing() {
        let query = UserSearchQuery {
            search: "ja".to_string(),
            exclude: Some(" 1, ,4".to_string()),
        };
        assert_eq!(query.excluded_ids(), vec!["1", "4"]);
        assert!(UserSearchQuery::default().excluded_ids().is_empty());
    }
}
