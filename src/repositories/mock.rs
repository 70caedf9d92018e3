//! Mock data - Generatore di stanze sintetiche e dati statici di esempio
//!
//! Le stanze vengono divise in tre coorti in base all'indice modulo 3
//! (live / closed / scheduled). La finestra temporale di ogni coorte corrisponde
//! allo stato voluto all'istante `now` della generazione.

use crate::entities::{Friend, FriendRequest, FriendStatus, InvitableUser, Reaction, Room, RoomTag};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

const TITLES: [&str; 10] = [
    "Friday Night Doodles",
    "Bug Bash Session",
    "Weekly Catchup",
    "Book Club Discussion",
    "Coding Sprint",
    "Meditation Circle",
    "Brainstorm New Ideas",
    "Product Demo",
    "Quick Planning",
    "Design Feedback",
];

const DESCRIPTIONS: [&str; 10] = [
    "Join us for a casual drawing session where we can chat and sketch together!",
    "Let's squash those bugs together before the weekend. Bring your debuggers!",
    "Our regular catchup to discuss the week and plan ahead.",
    "Discussing 'Atomic Habits' by James Clear - chapters 4-6.",
    "Sprint to finish the auth module together. Helping hands welcome!",
    "15-minute meditation break to reset and refocus.",
    "Open brainstorming for the upcoming marketing campaign.",
    "Quick demo of the new features. Feedback welcome!",
    "Planning the next sprint tasks and priorities.",
    "Reviewing the latest design mockups. Designers and developers welcome!",
];

/// Generate `count` rooms whose time windows are anchored to `now`.
///
/// Room `i` lands in the live cohort when `i % 3 == 0`, closed when
/// `i % 3 == 1` and scheduled otherwise. Every other field is drawn from
/// `rng`, so a seeded generator always yields the same rooms.
pub fn generate_mock_rooms<R: Rng + ?Sized>(
    count: usize,
    current_user: &str,
    now: &DateTime<Utc>,
    rng: &mut R,
) -> Vec<Room> {
    (0..count)
        .map(|i| {
            let (start_time, end_time) = match i % 3 {
                0 => (*now - Duration::hours(1), *now + Duration::hours(1)),
                1 => (*now - Duration::hours(5), *now - Duration::hours(2)),
                _ => {
                    let start = *now + Duration::hours(rng.gen_range(1..=48));
                    (start, start + Duration::hours(rng.gen_range(1..=3)))
                }
            };

            let tag = *RoomTag::ALL.choose(rng).unwrap_or(&RoomTag::Hangout);
            let title = TITLES.choose(rng).unwrap_or(&TITLES[0]);
            let description = DESCRIPTIONS.choose(rng).unwrap_or(&DESCRIPTIONS[0]);
            let is_private = rng.gen_bool(0.5);
            let max_participants = if rng.gen_bool(0.7) {
                Some(rng.gen_range(5..=14))
            } else {
                None
            };

            let participant_count = rng.gen_range(1..=5);
            let participants = (0..participant_count)
                .map(|j| format!("User{i}{j}"))
                .collect();

            Room {
                id: format!("room-{}", i + 1),
                title: title.to_string(),
                description: description.to_string(),
                is_private,
                start_time,
                end_time,
                max_participants,
                tag,
                participants,
                created_by: if i % 2 == 0 {
                    current_user.to_string()
                } else {
                    format!("User{i}")
                },
            }
        })
        .collect()
}

pub fn mock_friends() -> Vec<Friend> {
    let friend = |id: &str, username: &str, status, room: Option<(&str, &str)>| Friend {
        id: id.to_string(),
        username: username.to_string(),
        status,
        room_id: room.map(|(id, _)| id.to_string()),
        room_name: room.map(|(_, name)| name.to_string()),
    };

    vec![
        friend("1", "alex_morgan", FriendStatus::InRoom, Some(("room-1", "Friday Night Doodles"))),
        friend("2", "taylor_swift", FriendStatus::Online, None),
        friend("3", "john_doe", FriendStatus::Offline, None),
        friend("4", "jane_smith", FriendStatus::Online, None),
        friend("5", "dev_ninja", FriendStatus::InRoom, Some(("room-3", "Bug Bash Session"))),
    ]
}

pub fn mock_friend_requests() -> Vec<FriendRequest> {
    [("6", "code_wizard"), ("7", "design_guru")]
        .into_iter()
        .map(|(id, username)| FriendRequest {
            id: id.to_string(),
            username: username.to_string(),
        })
        .collect()
}

/// Directory usata dal selettore di inviti del form di creazione
pub fn mock_invitable_users() -> Vec<InvitableUser> {
    [
        ("1", "alex_morgan"),
        ("2", "taylor_swift"),
        ("3", "john_doe"),
        ("4", "jane_smith"),
        ("5", "dev_ninja"),
    ]
    .into_iter()
    .map(|(id, username)| InvitableUser {
        id: id.to_string(),
        username: username.to_string(),
    })
    .collect()
}

/// Conteggi statici mostrati nel riepilogo di una stanza chiusa
pub fn mock_reactions() -> Vec<Reaction> {
    let users = |n: usize| (1..=n).map(|k| format!("User{k}")).collect::<Vec<_>>();
    [("👍", 5), ("🔥", 3), ("👏", 2), ("❤️", 4)]
        .into_iter()
        .map(|(emoji, count)| Reaction {
            emoji: emoji.to_string(),
            count: count as u32,
            users: users(count),
        })
        .collect()
}
