mod engine;
mod registry;

pub use engine::{Column, Slot, SortBoard};
pub use registry::{build_items, default_seeds, Item, ItemKind, SeedItem};
