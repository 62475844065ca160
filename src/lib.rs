//! # word_puzzle
//!
//! Engine for a letter-tile word puzzle: the player rebuilds a target word
//! (which may contain spaces and punctuation) by picking letters from a
//! shuffled bank, optionally asking for hints along the way.
//!
//! ## How it works
//!
//! 1. A word list comes from the built-in defaults, a previously stored
//!    session, or [`Session::ingest`] on text / CSV / JSON input. Lists are
//!    deduplicated on their [`normalize`]d form and capped at 20 words.
//! 2. For each word a [`Bank`] is generated: every letter of the word plus
//!    random Latin and Cyrillic fillers, shuffled.
//! 3. The [`Puzzle`] tracks picks (as indices into the bank, so each one can
//!    be undone exactly), revealed hint letters, and whether the last check
//!    was correct.
//!
//! ## Key features
//!
//! - **Punctuation aware**: spaces and punctuation in a target are shown as-is
//!   and never need to be picked; comparisons ignore case and punctuation.
//! - **Injected storage**: anything implementing [`SessionStore`] can persist
//!   the word list. [`MemoryStore`] and [`FileStore`] are provided.
//! - **Reproducible when needed**: set `rng_seed` in [`PuzzleConfig`] to get
//!   the same banks every run.
//!
//! ## Quick start
//!
//! ```rust
//! use word_puzzle::{Format, MemoryStore, PuzzleConfig, Session, Status};
//!
//! let mut session = Session::open(MemoryStore::new(), PuzzleConfig::default());
//! session.ingest("Owl | Hunts at night\nFox", Format::Text).unwrap();
//!
//! let puzzle = session.puzzle_mut();
//! for letter in "owl".chars() {
//!     puzzle.pick_letter(letter);
//! }
//! assert_eq!(puzzle.check(), Status::Correct);
//!
//! session.next();
//! assert_eq!(session.puzzle().target(), "FOX");
//! ```

pub mod puzzle_engine;

// Convenience re-exports so callers can use `word_puzzle::Session`
// directly without reaching into `puzzle_engine::`.
pub use puzzle_engine::{
    dedupe, default_items, normalize, parse, ActiveSet, Bank, FileStore, Format,
    IngestionError, MemoryStore, Pick, Puzzle, PuzzleConfig, PuzzleItem, Session,
    SessionStore, Slot, SlotContent, Status,
};
