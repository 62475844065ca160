use std::collections::HashSet;
use crate::puzzle_engine::{models::PuzzleItem, normalizer::normalize};

/// Keep the first item for each normalized word, up to `max_count` items.
///
/// Kept words are upper-cased for display; hints pass through untouched.
/// Items whose normalized word is empty are skipped entirely.
pub fn dedupe(items: &[PuzzleItem], max_count: usize) -> Vec<PuzzleItem> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| {
            let key = normalize(&item.word);
            !key.is_empty() && seen.insert(key)
        })
        .take(max_count)
        .map(|item| PuzzleItem {
            word: item.word.to_uppercase(),
            hint: item.hint.clone(),
        })
        .collect()
}
