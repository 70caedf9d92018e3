//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs prodotti dalle view e ricevuti dai form.
//! I DTOs separano la rappresentazione esterna (JSON) dalle entities: stato ed etichette
//! derivate vengono calcolati qui, al momento della richiesta.

pub mod dashboard;
pub mod friend;
pub mod message;
pub mod query;
pub mod room;

// Re-exports per facilitare l'import
pub use dashboard::{DashboardDTO, QuickStatsDTO};
pub use friend::{FriendCountsDTO, FriendsViewDTO};
pub use message::{CreateMessageDTO, MessageDTO, NoticeDTO, ReactionRequestDTO, SendMessageDTO};
pub use query::{FriendsQuery, FriendsTab, RoomFilterQuery, UserSearchQuery};
pub use room::{
    CreateRoomDTO, CreateRoomFormDTO, RoomCardDTO, RoomCreatedDTO, RoomDetailDTO, RoomListDTO,
    TagOptionDTO, ValidatedRoom, apply_time_slot, time_slots,
};
