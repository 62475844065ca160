//! The active word list, its persistence, and the puzzle being played.
//!
//! Storage is injected through [`SessionStore`], a plain key-value text store.
//! The session reads it once on [`Session::open`], writes it after each
//! successful ingestion and clears it on [`Session::reset_to_default`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::puzzle_engine::{
    active_set::ActiveSet,
    config::PuzzleConfig,
    dedupe::dedupe,
    engine::Puzzle,
    error::IngestionError,
    ingest::{parse, Format},
    models::PuzzleItem,
};

/// Built-in puzzles used until a word list is ingested.
pub fn default_items() -> Vec<PuzzleItem> {
    vec![
        PuzzleItem::with_hint("DRAGON", "A fire-breathing creature from legends"),
        PuzzleItem::with_hint("PANDA", "A black-and-white bear that eats bamboo"),
        PuzzleItem::with_hint("RAINBOW", "Colourful arc in the sky after rain"),
        PuzzleItem::with_hint("MOTHER-IN-LAW", "Your spouse's mother"),
        PuzzleItem::with_hint("ICE CREAM", "A frozen dessert"),
    ]
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// Opaque key-value text storage. Last write wins.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-process store, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Keeps each key as `<key>.json` inside a directory.
///
/// I/O failures are logged and otherwise behave like a missing key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read session key {} from {}: {}", key, self.dir.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let result = fs::create_dir_all(&self.dir).and_then(|_| fs::write(self.path(key), value));
        if let Err(e) = result {
            warn!("Failed to write session key {} to {}: {}", key, self.dir.display(), e);
        }
    }

    fn remove(&mut self, key: &str) {
        match fs::remove_file(self.path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove session key {} from {}: {}", key, self.dir.display(), e),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct Session<S: SessionStore> {
    store: S,
    config: PuzzleConfig,
    rng: StdRng,
    words: ActiveSet,
    puzzle: Puzzle,
}

impl<S: SessionStore> Session<S> {
    /// Restore the stored word list, or fall back to the built-in one.
    pub fn open(store: S, config: PuzzleConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let words = ActiveSet::new(restore(&store, &config).unwrap_or_else(default_items));
        let target = words.current().map(|item| item.word.clone()).unwrap_or_default();
        let puzzle = Puzzle::new(&target, &config, &mut rng);

        Session { store, config, rng, words, puzzle }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn words(&self) -> &ActiveSet {
        &self.words
    }

    pub fn current_item(&self) -> Option<&PuzzleItem> {
        self.words.current()
    }

    /// 1-based position of the current word and the list length.
    pub fn position(&self) -> (usize, usize) {
        (self.words.index() + 1, self.words.len())
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn puzzle_mut(&mut self) -> &mut Puzzle {
        &mut self.puzzle
    }

    /// Move to the next word (wrapping) with a fresh bank.
    pub fn next(&mut self) {
        self.words.advance();
        self.start_puzzle();
        debug!("Advanced to word {}/{}", self.words.index() + 1, self.words.len());
    }

    /// Reset the current attempt, reshuffling the remaining tiles.
    pub fn restart(&mut self) {
        self.puzzle.reset(&mut self.rng);
    }

    /// Replace the word list with the parsed, deduplicated contents of `raw`.
    ///
    /// On error nothing changes: list, cursor, puzzle and store are untouched.
    pub fn ingest(&mut self, raw: &str, format: Format) -> Result<usize, IngestionError> {
        let parsed = parse(raw, format)?;
        let items = dedupe(&parsed, self.config.max_words);
        if items.is_empty() {
            return Err(IngestionError::EmptyResult { format });
        }

        match serde_json::to_string(&items) {
            Ok(json) => self.store.set(&self.config.storage_key, &json),
            Err(e) => warn!("Failed to serialise word list for storage: {}", e),
        }
        let count = items.len();
        info!("Ingested {} words ({} parsed) from {} input", count, parsed.len(), format);
        self.words.replace(items);
        self.start_puzzle();
        Ok(count)
    }

    /// Forget the stored list and go back to the built-in puzzles.
    pub fn reset_to_default(&mut self) {
        self.store.remove(&self.config.storage_key);
        self.words.replace(default_items());
        self.start_puzzle();
        info!("Reset to {} default words", self.words.len());
    }

    fn start_puzzle(&mut self) {
        let target = self.words.current().map(|item| item.word.as_str()).unwrap_or_default();
        self.puzzle = Puzzle::new(target, &self.config, &mut self.rng);
    }
}

/// Load the stored word list, held to the same rules as freshly ingested input.
fn restore(store: &impl SessionStore, config: &PuzzleConfig) -> Option<Vec<PuzzleItem>> {
    let key = &config.storage_key;
    let raw = store.get(key)?;
    match serde_json::from_str::<Vec<PuzzleItem>>(&raw) {
        Ok(stored) => {
            let items = dedupe(&stored, config.max_words);
            if items.is_empty() {
                warn!("Stored word list under {} has no usable words, using defaults", key);
                return None;
            }
            info!("Restored {} words ({} stored) from session store", items.len(), stored.len());
            Some(items)
        }
        Err(e) => {
            warn!("Ignoring corrupt stored word list under {}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_engine::models::Status;

    fn seeded() -> PuzzleConfig {
        PuzzleConfig { rng_seed: Some(42), ..PuzzleConfig::default() }
    }

    fn stored(session: &Session<MemoryStore>) -> Option<String> {
        session.store().get(&session.config().storage_key)
    }

    #[test]
    fn fresh_session_uses_defaults() {
        let session = Session::open(MemoryStore::new(), seeded());
        assert_eq!(session.words().items(), default_items().as_slice());
        assert_eq!(session.position(), (1, 5));
        assert_eq!(session.puzzle().target(), "DRAGON");
        assert_eq!(session.puzzle().status(), Status::Idle);
    }

    #[test]
    fn ingest_persists_and_rewinds() {
        let mut session = Session::open(MemoryStore::new(), seeded());
        session.next();
        let count = session.ingest("owl | night bird\nfox", Format::Text).unwrap();
        assert_eq!(count, 2);
        assert_eq!(session.position(), (1, 2));
        assert_eq!(session.puzzle().target(), "OWL");
        assert_eq!(session.current_item().and_then(|i| i.hint.as_deref()), Some("night bird"));

        let reopened = Session::open(session.store().clone(), seeded());
        assert_eq!(reopened.words().items(), session.words().items());
    }

    #[test]
    fn failed_ingest_changes_nothing() {
        let mut session = Session::open(MemoryStore::new(), seeded());
        session.next();
        session.puzzle_mut().hint();

        let err = session.ingest("not json", Format::Json).unwrap_err();
        assert!(matches!(err, IngestionError::Parse { .. }));
        let err = session.ingest("-- \n ...", Format::Text).unwrap_err();
        assert_eq!(err, IngestionError::EmptyResult { format: Format::Text });

        assert_eq!(session.position(), (2, 5));
        assert_eq!(session.puzzle().target(), "PANDA");
        assert_eq!(session.puzzle().revealed(), 1);
        assert_eq!(stored(&session), None);
    }

    #[test]
    fn next_wraps_and_starts_fresh() {
        let mut session = Session::open(MemoryStore::new(), seeded());
        session.puzzle_mut().hint();
        for _ in 0..5 {
            session.next();
        }
        assert_eq!(session.position(), (1, 5));
        assert_eq!(session.puzzle().revealed(), 0);
        assert!(session.puzzle().picked().is_empty());
    }

    #[test]
    fn reset_to_default_clears_store() {
        let mut session = Session::open(MemoryStore::new(), seeded());
        session.ingest("owl\nfox\ncat", Format::Text).unwrap();
        session.next();
        assert!(stored(&session).is_some());

        session.reset_to_default();
        assert_eq!(stored(&session), None);
        assert_eq!(session.position(), (1, 5));
        assert_eq!(session.puzzle().target(), "DRAGON");
    }

    #[test]
    fn corrupt_store_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(&PuzzleConfig::default().storage_key, "{ definitely not a list");
        let session = Session::open(store, seeded());
        assert_eq!(session.words().len(), 5);
    }

    #[test]
    fn stored_list_is_deduplicated_and_capped() {
        let mut store = MemoryStore::new();
        let mut stored = vec![
            PuzzleItem::with_hint("owl", "hoots"),
            PuzzleItem::new("OWL"),
            PuzzleItem::new("--"),
        ];
        stored.extend((0..25u8).map(|i| PuzzleItem::new(format!("word{}", (b'a' + i) as char))));
        store.set(&PuzzleConfig::default().storage_key, &serde_json::to_string(&stored).unwrap());
        let session = Session::open(store, seeded());
        assert_eq!(session.words().len(), 20);
        assert_eq!(session.words().items()[0], PuzzleItem::with_hint("OWL", "hoots"));
        assert_eq!(session.words().items()[1].word, "WORDA");
    }

    #[test]
    fn stored_list_without_words_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(&PuzzleConfig::default().storage_key, r#"[{"word": "!?"}, {"word": " "}]"#);
        let session = Session::open(store, seeded());
        assert_eq!(session.words().items(), default_items().as_slice());
    }

    #[test]
    fn restart_keeps_the_word() {
        let mut session = Session::open(MemoryStore::new(), seeded());
        session.puzzle_mut().pick_letter('D');
        session.puzzle_mut().check();
        session.restart();
        let p = session.puzzle();
        assert_eq!(p.target(), "DRAGON");
        assert_eq!(p.status(), Status::Idle);
        assert!(p.picked().is_empty());
        assert_eq!(p.bank().len(), 12);
        assert_eq!(p.bank().remaining().count(), 11);
    }

    #[test]
    fn file_store_round_trips_and_removes() {
        let dir = std::env::temp_dir().join(format!("word_puzzle_store_{}", std::process::id()));
        let mut store = FileStore::new(&dir);
        assert_eq!(store.get("k"), None);
        store.set("k", "[1,2]");
        assert_eq!(store.get("k").as_deref(), Some("[1,2]"));
        store.remove("k");
        store.remove("k");
        assert_eq!(store.get("k"), None);
        let _ = fs::remove_dir_all(&dir);
    }
}
