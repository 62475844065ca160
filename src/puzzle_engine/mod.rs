//! Core puzzle engine — word lists, tile banks, and attempt state.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: puzzle items, status, picks, slot views |
//! | `alphabet`   | Latin + Cyrillic letter classes and filler letters |
//! | `normalizer` | Canonical form used for every word comparison |
//! | `bank`       | Tile arena with Fisher-Yates shuffled generation |
//! | `engine`     | `Puzzle` — pick / remove / hint / check / reset |
//! | `ingest`     | Text, CSV and JSON word-list parsing |
//! | `dedupe`     | Unique, capped, display-cased word lists |
//! | `active_set` | Play-order list with a wrapping cursor |
//! | `session`    | Store-backed session tying list and puzzle together |
//! | `config`     | `PuzzleConfig` tunables |
//! | `error`      | `IngestionError` |

pub mod active_set;
pub mod alphabet;
pub mod bank;
pub mod config;
pub mod dedupe;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod models;
pub mod normalizer;
pub mod session;

pub use active_set::ActiveSet;
pub use bank::Bank;
pub use config::PuzzleConfig;
pub use dedupe::dedupe;
pub use engine::Puzzle;
pub use error::IngestionError;
pub use ingest::{parse, Format};
pub use models::{Pick, PuzzleItem, Slot, SlotContent, Status};
pub use normalizer::normalize;
pub use session::{default_items, FileStore, MemoryStore, Session, SessionStore};
