//! Tunables for bank generation, ingestion and persistence.
//!
//! Every field has a default, so a partial JSON document only overrides what
//! it names:
//!
//! ```rust
//! use word_puzzle::PuzzleConfig;
//!
//! let config = PuzzleConfig::from_json(r#"{ "max_words": 5, "rng_seed": 7 }"#).unwrap();
//! assert_eq!(config.max_words, 5);
//! assert_eq!(config.bank_max, 16);
//! ```

use serde::{Deserialize, Serialize};

/// Session Store key the active word list is written under.
pub const DEFAULT_STORAGE_KEY: &str = "word_puzzle.active_set";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Cap applied after deduplicating an ingested list.
    pub max_words: usize,

    // Bank size = clamp(target letters + padding, min, max)
    pub bank_padding: usize,
    pub bank_min: usize,
    pub bank_max: usize,

    pub storage_key: String,

    /// Fixed seed for banks and reshuffles; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            max_words: 20,
            bank_padding: 6,
            bank_min: 12,
            bank_max: 16,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            rng_seed: None,
        }
    }
}

impl PuzzleConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Number of tiles a bank for a `seed_len`-char target should hold.
    ///
    /// Never smaller than `seed_len`, so every target letter fits even when
    /// the target is longer than `bank_max`.
    pub fn bank_size(&self, seed_len: usize) -> usize {
        let max = self.bank_max.max(self.bank_min);
        (seed_len + self.bank_padding).clamp(self.bank_min, max).max(seed_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_size_is_clamped() {
        let c = PuzzleConfig::default();
        assert_eq!(c.bank_size(0), 12);
        assert_eq!(c.bank_size(3), 12);
        assert_eq!(c.bank_size(6), 12);
        assert_eq!(c.bank_size(8), 14);
        assert_eq!(c.bank_size(10), 16);
        assert_eq!(c.bank_size(14), 16);
    }

    #[test]
    fn long_targets_keep_every_letter() {
        assert_eq!(PuzzleConfig::default().bank_size(21), 21);
    }

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(PuzzleConfig::from_json("{}").unwrap(), PuzzleConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(PuzzleConfig::from_json("{ max_words: }").is_err());
    }
}
