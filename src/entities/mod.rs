//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità che descrivono i dati mock tenuti in memoria.
//! Lo stato di una stanza non è un campo: viene derivato dall'orario corrente (vedi `room`).

pub mod enums;
pub mod filter;
pub mod friend;
pub mod message;
pub mod room;

// Re-exports per facilitare l'import
pub use enums::{FriendStatus, RoomStatus, RoomTag};
pub use filter::{StatusFilter, TagFilter, filter_rooms};
pub use friend::{Friend, FriendRequest, InvitableUser};
pub use message::{Message, Reaction};
pub use room::{Room, derive_status};
