//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Non esiste un database: ogni repository è uno store in memoria costruito esplicitamente
//! all'avvio (o nei test) e iniettato nello stato applicativo. La casualità dei dati mock
//! passa sempre da un seed esplicito, così i test sono riproducibili.

// ************************* MODULI REPOSITORY ************************* //

pub mod friend;
pub mod message;
pub mod mock;
pub mod room;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use friend::FriendRepository;
pub use message::MessageRepository;
pub use room::RoomRepository;
