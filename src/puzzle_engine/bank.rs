use rand::Rng;
use crate::puzzle_engine::{
    alphabet::{display_upper, filler, FILLER_COUNT},
    config::PuzzleConfig,
};

/// Fixed arena of letter tiles the player picks from.
///
/// A position holds `None` while its letter sits in the answer row. Tiles are
/// only ever moved between the arena and the pick stack, never created or
/// destroyed. The arena length is fixed for the life of the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    tiles: Vec<Option<char>>,
}

impl Bank {
    /// Build a shuffled bank for an already-normalized target.
    ///
    /// Every char of the target goes in upper-cased, then random fillers from
    /// both alphabets pad the bank to `config.bank_size`.
    pub fn generate<R: Rng>(normalized: &str, config: &PuzzleConfig, rng: &mut R) -> Self {
        let mut letters: Vec<char> = normalized.chars().map(display_upper).collect();
        let size = config.bank_size(letters.len());

        while letters.len() < size {
            letters.push(filler(rng.gen_range(0..FILLER_COUNT)));
        }
        shuffle(&mut letters, rng);

        Bank { tiles: letters.into_iter().map(Some).collect() }
    }

    /// Arena with tiles in the given order, unshuffled.
    pub fn from_letters(letters: &[char]) -> Self {
        Bank { tiles: letters.iter().copied().map(Some).collect() }
    }

    pub fn tiles(&self) -> &[Option<char>] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.tiles.get(index).copied().flatten()
    }

    /// Letters still available, in arena order.
    pub fn remaining(&self) -> impl Iterator<Item = char> + '_ {
        self.tiles.iter().filter_map(|t| *t)
    }

    /// First arena position holding `letter`.
    pub fn position_of(&self, letter: char) -> Option<usize> {
        self.tiles.iter().position(|t| *t == Some(letter))
    }

    /// Empty the tile at `index`, returning its letter.
    pub fn take(&mut self, index: usize) -> Option<char> {
        self.tiles.get_mut(index).and_then(Option::take)
    }

    /// Put `letter` back at `index`. Only an empty position accepts a letter.
    pub fn restore(&mut self, index: usize, letter: char) -> bool {
        match self.tiles.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(letter);
                true
            }
            _ => false,
        }
    }

    /// Shuffle the letters still present among the occupied positions.
    /// Empty positions stay empty.
    pub fn reshuffle_remaining<R: Rng>(&mut self, rng: &mut R) {
        let mut letters: Vec<char> = self.remaining().collect();
        shuffle(&mut letters, rng);
        let occupied = self.tiles.iter_mut().filter(|t| t.is_some());
        for (tile, letter) in occupied.zip(letters) {
            *tile = Some(letter);
        }
    }
}

// Fisher-Yates shuffle
fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
