//! Message entity - Messaggi effimeri della chat di una stanza

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    // autore del messaggio, stringa libera (nessuna integrità referenziale)
    pub username: String,
    pub timestamp: DateTime<Utc>,
}

/// Conteggio statico delle reazioni mostrato a stanza chiusa
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
    pub users: Vec<String>,
}
