use crate::puzzle_engine::models::PuzzleItem;

/// Ordered word list in play order, with a cursor that wraps around.
///
/// The cursor is always a valid position while the list is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet {
    items: Vec<PuzzleItem>,
    index: usize,
}

impl ActiveSet {
    pub fn new(items: Vec<PuzzleItem>) -> Self {
        ActiveSet { items, index: 0 }
    }

    pub fn items(&self) -> &[PuzzleItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&PuzzleItem> {
        self.items.get(self.index)
    }

    /// Move to the next item, wrapping to the first after the last.
    pub fn advance(&mut self) -> Option<&PuzzleItem> {
        if self.items.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.items.len();
        self.current()
    }

    /// Swap in a whole new list and rewind to its start.
    pub fn replace(&mut self, items: Vec<PuzzleItem>) {
        self.items = items;
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> ActiveSet {
        ActiveSet::new(words.iter().map(|w| PuzzleItem::new(*w)).collect())
    }

    #[test]
    fn advance_wraps_to_start() {
        let mut s = set(&["A", "B", "C"]);
        assert_eq!(s.advance().map(|i| i.word.as_str()), Some("B"));
        assert_eq!(s.advance().map(|i| i.word.as_str()), Some("C"));
        assert_eq!(s.advance().map(|i| i.word.as_str()), Some("A"));
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn empty_set_has_no_current() {
        let mut s = ActiveSet::default();
        assert!(s.current().is_none());
        assert!(s.advance().is_none());
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn replace_rewinds() {
        let mut s = set(&["A", "B"]);
        s.advance();
        s.replace(vec![PuzzleItem::new("X")]);
        assert_eq!(s.index(), 0);
        assert_eq!(s.current(), Some(&PuzzleItem::new("X")));
    }
}
