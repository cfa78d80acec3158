//! # Sortboard Core Library
//!
//! This library provides the core logic for the sortboard item sorter.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary; any richer front end is a thin layer over
//! the same core library.
//!
//! ## Architecture
//!
//! - **Board Engine**: A wall-clock-based state machine that requires the
//!   caller to periodically invoke `tick()` so elapsed countdowns fire
//! - **Registry**: The fixed item set, partitioned into the available pool
//!   and the two kind columns
//! - **Config**: TOML-based configuration (return delay, seed overrides)
//!
//! ## Key Components
//!
//! - [`SortBoard`]: Core board state machine
//! - [`Config`]: Application configuration management
//! - [`Event`]: Serialized record of every state change

pub mod board;
pub mod config;
pub mod error;
pub mod events;

pub use board::{build_items, default_seeds, Column, Item, ItemKind, SeedItem, Slot, SortBoard};
pub use config::Config;
pub use error::{BoardError, ConfigError, CoreError, Result};
pub use events::Event;
