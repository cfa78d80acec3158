use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::{Column, Item, ItemKind};

/// Every state change on the board produces an Event.
/// The CLI prints them; a richer front end would subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// An available item moved into its kind column; a countdown is now
    /// pending.
    ItemShelved {
        id: String,
        name: String,
        kind: ItemKind,
        column: Column,
        return_in_ms: u64,
        at: DateTime<Utc>,
    },
    /// A column item was returned to the pool manually, before its
    /// countdown fired.
    ItemReturned {
        id: String,
        name: String,
        kind: ItemKind,
        column: Column,
        at: DateTime<Utc>,
    },
    /// A countdown fired and the item went back to the pool.
    ItemExpired {
        id: String,
        name: String,
        kind: ItemKind,
        column: Column,
        at: DateTime<Utc>,
    },
    BoardReset {
        at: DateTime<Utc>,
    },
    BoardSnapshot {
        available: Vec<Item>,
        fruits: Vec<Item>,
        vegetables: Vec<Item>,
        pending_returns: usize,
        at: DateTime<Utc>,
    },
}
