//! FriendRepository - Amici, richieste e directory utenti (dati statici)

use super::mock::{mock_friend_requests, mock_friends, mock_invitable_users};
use super::{Read, ReadAll};
use crate::entities::{Friend, FriendRequest, FriendStatus, InvitableUser};

/// Lunghezza minima della query per il selettore di inviti
pub const INVITE_SEARCH_MIN_LEN: usize = 2;

// FRIEND REPO
pub struct FriendRepository {
    friends: Vec<Friend>,
    requests: Vec<FriendRequest>,
    directory: Vec<InvitableUser>,
}

impl FriendRepository {
    pub fn new(
        friends: Vec<Friend>,
        requests: Vec<FriendRequest>,
        directory: Vec<InvitableUser>,
    ) -> Self {
        Self {
            friends,
            requests,
            directory,
        }
    }

    pub fn seeded() -> Self {
        Self::new(mock_friends(), mock_friend_requests(), mock_invitable_users())
    }

    /// Case-insensitive substring search on the username.
    ///
    /// An empty query matches every friend.
    pub fn search_by_username_partial(&self, query: &str) -> Vec<Friend> {
        let query = query.to_lowercase();
        self.friends
            .iter()
            .filter(|f| f.username.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    pub fn count_active(&self) -> usize {
        self.friends.iter().filter(|f| f.status.is_active()).count()
    }

    pub fn count_with_status(&self, status: FriendStatus) -> usize {
        self.friends.iter().filter(|f| f.status == status).count()
    }

    pub fn pending_requests(&self) -> Vec<FriendRequest> {
        self.requests.clone()
    }

    pub fn find_request(&self, request_id: &str) -> Option<FriendRequest> {
        self.requests.iter().find(|r| r.id == request_id).cloned()
    }

    /// Users matching `query` that have not been invited yet
    ///
    /// Queries shorter than [`INVITE_SEARCH_MIN_LEN`] characters return nothing.
    pub fn search_invitable(&self, query: &str, already_invited: &[String]) -> Vec<InvitableUser> {
        if query.chars().count() < INVITE_SEARCH_MIN_LEN {
            return Vec::new();
        }
        let query = query.to_lowercase();
        self.directory
            .iter()
            .filter(|u| u.username.to_lowercase().contains(&query))
            .filter(|u| !already_invited.contains(&u.id))
            .cloned()
            .collect()
    }
}

impl Read<Friend, str> for FriendRepository {
    fn read(&self, id: &str) -> Option<Friend> {
        self.friends.iter().find(|f| f.id == id).cloned()
    }
}

impl ReadAll<Friend> for FriendRepository {
    fn read_all(&self) -> Vec<Friend> {
        self.friends.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let repo = FriendRepository::seeded();
        let found = repo.search_by_username_partial("JANE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "jane_smith");
        assert_eq!(repo.search_by_username_partial("").len(), 5);
    }

    #[test]
    fn test_counts() {
        let repo = FriendRepository::seeded();
        assert_eq!(repo.count_active(), 4);
        assert_eq!(repo.count_with_status(FriendStatus::InRoom), 2);
        assert_eq!(repo.pending_requests().len(), 2);
    }

    #[test]
    fn test_invite_search_needs_two_chars_and_skips_invited() {
        let repo = FriendRepository::seeded();
        assert!(repo.search_invitable("j", &[]).is_empty());

        let all_j: Vec<String> = repo
            .search_invitable("_s", &[])
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(all_j, vec!["taylor_swift", "jane_smith"]);

        let remaining = repo.search_invitable("_s", &["2".to_string()]);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].username, "jane_smith");
    }

    #[test]
    fn test_read_friend() {
        let repo = FriendRepository::seeded();
        let alex = repo.read("1").unwrap();
        assert_eq!(alex.room_id.as_deref(), Some("room-1"));
        assert!(repo.read("99").is_none());
    }
}
