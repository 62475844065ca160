use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Puzzle items
// ---------------------------------------------------------------------------

/// One puzzle: the literal target word plus an optional free-text hint.
///
/// `word` is kept exactly as stored (punctuation, spaces and casing survive);
/// only comparisons go through [`normalize`](crate::normalize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleItem {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PuzzleItem {
    pub fn new(word: impl Into<String>) -> Self {
        PuzzleItem { word: word.into(), hint: None }
    }

    pub fn with_hint(word: impl Into<String>, hint: impl Into<String>) -> Self {
        PuzzleItem { word: word.into(), hint: Some(hint.into()) }
    }
}

impl fmt::Display for PuzzleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} | {}", self.word, hint),
            None       => write!(f, "{}", self.word),
        }
    }
}

// ---------------------------------------------------------------------------
// Puzzle state
// ---------------------------------------------------------------------------

/// Where an attempt stands.
///
/// Only `Idle` accepts picks, removals and checks. `Correct` and `Wrong` are
/// locked until the engine is reset or the session moves to the next word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Idle,
    Correct,
    Wrong,
}

impl Status {
    pub fn accepts_input(self) -> bool {
        matches!(self, Status::Idle)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle    => write!(f, "in progress"),
            Status::Correct => write!(f, "correct"),
            Status::Wrong   => write!(f, "wrong"),
        }
    }
}

/// A tile moved from the bank into the answer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub letter: char,
    /// Bank position the letter came from; it stays empty while picked.
    pub tile: usize,
}

/// Derived view of one target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub ch: char,
    pub is_letter: bool,
    pub revealed: bool,
}

/// What the answer row shows at one target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotContent {
    /// Space or punctuation, shown verbatim and never pickable.
    Fixed(char),
    /// Letter given away by a hint.
    Revealed(char),
    /// Letter placed by the player.
    Picked(char),
    Empty,
}

impl SlotContent {
    pub fn char(self) -> Option<char> {
        match self {
            SlotContent::Fixed(c) | SlotContent::Revealed(c) | SlotContent::Picked(c) => Some(c),
            SlotContent::Empty => None,
        }
    }
}

impl fmt::Display for SlotContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.char() {
            Some(c) => write!(f, "{}", c),
            None    => write!(f, "_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_row_renders_as_plain_text() {
        let row = [
            SlotContent::Revealed('I'),
            SlotContent::Picked('C'),
            SlotContent::Empty,
            SlotContent::Fixed(' '),
        ];
        let text: String = row.iter().map(|c| c.to_string()).collect();
        assert_eq!(text, "IC_ ");
        assert_eq!(SlotContent::Empty.char(), None);
        assert_eq!(Status::Idle.to_string(), "in progress");
    }
}
