//! Stateful core of one puzzle attempt.
//!
//! The bank is a fixed arena and the pick stack stores arena indices, so every
//! `pick` / `remove_last` pair is a single reversible move between the two.
//! Hints never touch either collection: they only change how the first
//! `revealed` letter slots are read.

use log::debug;
use rand::Rng;
use crate::puzzle_engine::{
    alphabet::{display_upper, is_letter},
    bank::Bank,
    config::PuzzleConfig,
    models::{Pick, Slot, SlotContent, Status},
    normalizer::normalize,
};

#[derive(Debug, Clone)]
pub struct Puzzle {
    target: String,
    target_key: String,
    letter_count: usize,
    bank: Bank,
    picked: Vec<Pick>,
    revealed: usize,
    status: Status,
}

impl Puzzle {
    /// Start an attempt at `target` with a freshly generated bank.
    pub fn new<R: Rng>(target: &str, config: &PuzzleConfig, rng: &mut R) -> Self {
        let target_key = normalize(target);
        let bank = Bank::generate(&target_key, config, rng);
        Self::with_bank(target, bank)
    }

    /// Start an attempt with a caller-supplied bank.
    pub fn with_bank(target: &str, bank: Bank) -> Self {
        Puzzle {
            target: target.to_string(),
            target_key: normalize(target),
            letter_count: target.chars().filter(|&c| is_letter(c)).count(),
            bank,
            picked: Vec::new(),
            revealed: 0,
            status: Status::Idle,
        }
    }

    // ── queries ──────────────────────────────────────────────────────────────

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn picked(&self) -> &[Pick] {
        &self.picked
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of target positions that take a letter.
    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    /// Letter slots currently covered by a hint or a pick.
    pub fn filled_count(&self) -> usize {
        self.picked.len() + self.revealed
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() >= self.letter_count
    }

    pub fn slots(&self) -> Vec<Slot> {
        let mut letter_index = 0;
        self.target
            .chars()
            .map(|ch| {
                let is_letter = is_letter(ch);
                let revealed = is_letter && letter_index < self.revealed;
                if is_letter {
                    letter_index += 1;
                }
                Slot { ch, is_letter, revealed }
            })
            .collect()
    }

    /// What the answer row shows, position by position.
    ///
    /// Letter slot `k` past the revealed prefix shows `picked[k - revealed]`.
    pub fn contents(&self) -> Vec<SlotContent> {
        let mut letter_index = 0;
        self.target
            .chars()
            .map(|ch| {
                if !is_letter(ch) {
                    return SlotContent::Fixed(ch);
                }
                let k = letter_index;
                letter_index += 1;
                if k < self.revealed {
                    SlotContent::Revealed(display_upper(ch))
                } else {
                    match self.picked.get(k - self.revealed) {
                        Some(pick) => SlotContent::Picked(pick.letter),
                        None => SlotContent::Empty,
                    }
                }
            })
            .collect()
    }

    /// The string `check` compares against the target.
    ///
    /// Letter slots with nothing in them are skipped, so a short answer never
    /// matches.
    pub fn candidate(&self) -> String {
        self.target
            .chars()
            .zip(self.contents())
            .filter_map(|(ch, content)| match content {
                SlotContent::Fixed(_) | SlotContent::Revealed(_) => Some(ch),
                SlotContent::Picked(letter) => Some(letter),
                SlotContent::Empty => None,
            })
            .collect()
    }

    // ── operations ───────────────────────────────────────────────────────────

    /// Move the tile at `tile` into the next open letter slot.
    pub fn pick(&mut self, tile: usize) -> bool {
        if !self.status.accepts_input() || self.is_full() {
            return false;
        }
        match self.bank.take(tile) {
            Some(letter) => {
                self.picked.push(Pick { letter, tile });
                true
            }
            None => false,
        }
    }

    /// Pick the first available tile showing `letter`, ignoring case.
    pub fn pick_letter(&mut self, letter: char) -> bool {
        match self.bank.position_of(display_upper(letter)) {
            Some(tile) => self.pick(tile),
            None => false,
        }
    }

    /// Return the most recent pick to the bank position it came from.
    pub fn remove_last(&mut self) -> bool {
        if !self.status.accepts_input() {
            return false;
        }
        match self.picked.pop() {
            Some(pick) => self.bank.restore(pick.tile, pick.letter),
            None => false,
        }
    }

    /// Reveal the next letter slot, left to right. Allowed in every state.
    pub fn hint(&mut self) -> bool {
        if self.revealed >= self.letter_count {
            return false;
        }
        self.revealed += 1;
        true
    }

    /// Compare the answer row with the target.
    ///
    /// A full row locks the attempt as `Correct` or `Wrong`. A row with open
    /// letter slots reports `Wrong` but stays `Idle` so it can be finished.
    /// Outside `Idle` this is a no-op that reports the current status.
    pub fn check(&mut self) -> Status {
        if !self.status.accepts_input() {
            return self.status;
        }
        let candidate = self.candidate();
        let verdict = if normalize(&candidate) == self.target_key {
            Status::Correct
        } else {
            Status::Wrong
        };
        if self.is_full() {
            self.status = verdict;
        }
        debug!("Checked {:?} against {:?}: {} (now {:?})", candidate, self.target, verdict, self.status);
        verdict
    }

    /// Clear picks and hints and reshuffle what is left in the bank.
    ///
    /// Letters sitting in the answer row are discarded, not returned: their
    /// bank positions stay empty.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.bank.reshuffle_remaining(rng);
        self.picked.clear();
        self.revealed = 0;
        self.status = Status::Idle;
    }
}
