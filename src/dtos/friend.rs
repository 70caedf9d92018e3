//! Friend DTOs - Vista della pagina amici

use super::query::FriendsTab;
use crate::entities::{Friend, FriendRequest};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FriendCountsDTO {
    pub all: usize,
    pub online: usize,
    pub in_room: usize,
    pub requests: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FriendsViewDTO {
    pub tab: FriendsTab,
    pub search: String,
    pub friends: Vec<Friend>,
    pub requests: Vec<FriendRequest>,
    pub counts: FriendCountsDTO,
}
