//! Board engine implementation.
//!
//! The board is a wall-clock-based state machine. It does not use internal
//! threads - the caller is responsible for calling `tick()` periodically so
//! that elapsed countdowns fire.
//!
//! ## State Transitions (per item)
//!
//! ```text
//! Available -> (pick) -> InColumn[countdown] -> (expiry | put_back) -> Available
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut board = SortBoard::seeded(5000);
//! board.pick("Apple-0")?;
//! // In a loop:
//! for event in board.tick() { /* item returned to the pool */ }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::registry::{build_items, default_seeds, Item, ItemKind};
use crate::error::BoardError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Fruits,
    Vegetables,
}

impl Column {
    pub fn for_kind(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Fruit => Column::Fruits,
            ItemKind::Vegetable => Column::Vegetables,
        }
    }
}

/// Where an item currently lives on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Available,
    InColumn(Column),
}

/// A scheduled auto-return. Entries are kept in creation order so that
/// simultaneous expiries fire in pick order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Countdown {
    item_id: String,
    /// Epoch milliseconds at which the item returns to the pool.
    deadline_ms: u64,
}

/// Core board state machine.
///
/// Operates on wall-clock deltas -- no internal thread. The caller is
/// responsible for calling `tick()` periodically. All mutation goes through
/// `&mut self`, so there is exactly one writer and no re-entrancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortBoard {
    /// Registry order, used by `reset()`.
    registry: Vec<Item>,
    available: Vec<Item>,
    fruits: Vec<Item>,
    vegetables: Vec<Item>,
    /// At most one entry per item id; an entry exists iff the item is in
    /// a column.
    countdowns: Vec<Countdown>,
    /// Countdown duration in milliseconds.
    return_delay_ms: u64,
}

impl SortBoard {
    /// Create a board with every item in the available pool.
    pub fn new(items: Vec<Item>, return_delay_ms: u64) -> Self {
        Self {
            registry: items.clone(),
            available: items,
            fruits: Vec::new(),
            vegetables: Vec::new(),
            countdowns: Vec::new(),
            return_delay_ms,
        }
    }

    /// Create a board from the stock registry.
    pub fn seeded(return_delay_ms: u64) -> Self {
        Self::new(build_items(&default_seeds()), return_delay_ms)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn available(&self) -> &[Item] {
        &self.available
    }

    pub fn fruits(&self) -> &[Item] {
        &self.fruits
    }

    pub fn vegetables(&self) -> &[Item] {
        &self.vegetables
    }

    pub fn column(&self, column: Column) -> &[Item] {
        match column {
            Column::Fruits => &self.fruits,
            Column::Vegetables => &self.vegetables,
        }
    }

    pub fn return_delay_ms(&self) -> u64 {
        self.return_delay_ms
    }

    /// Number of countdowns currently pending.
    pub fn pending_returns(&self) -> usize {
        self.countdowns.len()
    }

    /// Epoch-ms deadline of the item's countdown, if one is pending.
    pub fn return_at(&self, id: &str) -> Option<u64> {
        self.countdowns
            .iter()
            .find(|c| c.item_id == id)
            .map(|c| c.deadline_ms)
    }

    /// Milliseconds until the item auto-returns, measured at `now_ms`.
    pub fn remaining_ms(&self, id: &str, now_ms: u64) -> Option<u64> {
        self.return_at(id).map(|d| d.saturating_sub(now_ms))
    }

    /// Find an item anywhere on the board by exact id or case-insensitive
    /// name.
    pub fn locate(&self, key: &str) -> Option<(&Item, Slot)> {
        let matches = |item: &Item| item.id == key || item.name.eq_ignore_ascii_case(key);
        if let Some(item) = self.available.iter().find(|i| matches(i)) {
            return Some((item, Slot::Available));
        }
        if let Some(item) = self.fruits.iter().find(|i| matches(i)) {
            return Some((item, Slot::InColumn(Column::Fruits)));
        }
        if let Some(item) = self.vegetables.iter().find(|i| matches(i)) {
            return Some((item, Slot::InColumn(Column::Vegetables)));
        }
        None
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::BoardSnapshot {
            available: self.available.clone(),
            fruits: self.fruits.clone(),
            vegetables: self.vegetables.clone(),
            pending_returns: self.countdowns.len(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Move an available item into its kind column and schedule its
    /// auto-return after the configured delay.
    ///
    /// # Errors
    ///
    /// `NotAvailable` if the item is already in a column, `UnknownItem`
    /// if the id matches nothing on the board.
    pub fn pick(&mut self, id: &str) -> Result<Event, BoardError> {
        self.pick_at(id, now_ms())
    }

    /// `pick` with an explicit clock, used by simulations and tests.
    pub fn pick_at(&mut self, id: &str, now_ms: u64) -> Result<Event, BoardError> {
        let Some(pos) = self.available.iter().position(|i| i.id == id) else {
            return Err(if self.column_position(id).is_some() {
                BoardError::NotAvailable { id: id.to_string() }
            } else {
                BoardError::UnknownItem { id: id.to_string() }
            });
        };
        let item = self.available.remove(pos);

        // Invariant: an available item never has a live countdown.
        debug_assert!(!self.countdowns.iter().any(|c| c.item_id == item.id));
        let deadline_ms = now_ms.saturating_add(self.return_delay_ms);
        self.countdowns.push(Countdown {
            item_id: item.id.clone(),
            deadline_ms,
        });
        log::debug!("countdown scheduled for {} at {}", item.id, deadline_ms);

        let column = Column::for_kind(item.kind);
        let event = Event::ItemShelved {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind,
            column,
            return_in_ms: self.return_delay_ms,
            at: Utc::now(),
        };
        self.column_mut(column).push(item);
        Ok(event)
    }

    /// Manually return a column item to the end of the available pool,
    /// cancelling its countdown so it can never fire afterwards.
    ///
    /// # Errors
    ///
    /// `NotInColumn` if the item is sitting in the available pool,
    /// `UnknownItem` if the id matches nothing on the board.
    pub fn put_back(&mut self, id: &str) -> Result<Event, BoardError> {
        let Some((column, pos)) = self.column_position(id) else {
            return Err(if self.available.iter().any(|i| i.id == id) {
                BoardError::NotInColumn { id: id.to_string() }
            } else {
                BoardError::UnknownItem { id: id.to_string() }
            });
        };
        // Cancel before moving so a later tick cannot observe the deadline.
        self.cancel_countdown(id);
        let item = self.column_mut(column).remove(pos);
        let event = Event::ItemReturned {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind,
            column,
            at: Utc::now(),
        };
        self.available.push(item);
        Ok(event)
    }

    /// Fire every countdown whose deadline has elapsed. Call periodically.
    pub fn tick(&mut self) -> Vec<Event> {
        self.tick_at(now_ms())
    }

    /// `tick` with an explicit clock, used by simulations and tests.
    ///
    /// Expired items move to the end of the available pool in countdown
    /// creation order (pick order).
    pub fn tick_at(&mut self, now_ms: u64) -> Vec<Event> {
        let due: Vec<String> = self
            .countdowns
            .iter()
            .filter(|c| c.deadline_ms <= now_ms)
            .map(|c| c.item_id.clone())
            .collect();

        let mut events = Vec::with_capacity(due.len());
        for id in due {
            self.countdowns.retain(|c| c.item_id != id);
            let Some((column, pos)) = self.column_position(&id) else {
                debug_assert!(false, "countdown for item not in a column: {id}");
                continue;
            };
            let item = self.column_mut(column).remove(pos);
            log::debug!("countdown fired for {}", item.id);
            events.push(Event::ItemExpired {
                id: item.id.clone(),
                name: item.name.clone(),
                kind: item.kind,
                column,
                at: Utc::now(),
            });
            self.available.push(item);
        }
        events
    }

    /// Teardown/restart: cancel every pending countdown and put the whole
    /// registry back in the available pool, in registry order. No stale
    /// countdown survives a reset.
    pub fn reset(&mut self) -> Event {
        if !self.countdowns.is_empty() {
            log::debug!("cancelling {} pending countdowns", self.countdowns.len());
        }
        self.countdowns.clear();
        self.available = self.registry.clone();
        self.fruits.clear();
        self.vegetables.clear();
        Event::BoardReset { at: Utc::now() }
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Idempotent: cancelling an absent countdown is a no-op.
    fn cancel_countdown(&mut self, id: &str) -> bool {
        let before = self.countdowns.len();
        self.countdowns.retain(|c| c.item_id != id);
        let cancelled = self.countdowns.len() != before;
        if cancelled {
            log::debug!("countdown cancelled for {id}");
        }
        cancelled
    }

    fn column_position(&self, id: &str) -> Option<(Column, usize)> {
        if let Some(pos) = self.fruits.iter().position(|i| i.id == id) {
            return Some((Column::Fruits, pos));
        }
        if let Some(pos) = self.vegetables.iter().position(|i| i.id == id) {
            return Some((Column::Vegetables, pos));
        }
        None
    }

    fn column_mut(&mut self, column: Column) -> &mut Vec<Item> {
        match column {
            Column::Fruits => &mut self.fruits,
            Column::Vegetables => &mut self.vegetables,
        }
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
