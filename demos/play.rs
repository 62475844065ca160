//! Scripted walkthrough of a puzzle session.
//!
//! Run with: `RUST_LOG=debug cargo run --example play`
//!
//! 1. **Defaults** — a fresh session starts on the built-in word list.
//! 2. **Solving** — letters are picked, one is undone, a hint is used, and the
//!    answer is checked.
//! 3. **Ingestion** — a CSV list replaces the defaults; a broken JSON list is
//!    rejected without touching it.
//! 4. **Reset** — back to the defaults, store cleared.
//!
//! A fixed `rng_seed` keeps the printed banks identical between runs.

use word_puzzle::{Format, MemoryStore, Puzzle, PuzzleConfig, Session};

/// Print the answer row, the bank, and the attempt status.
fn print_puzzle(puzzle: &Puzzle, hint: Option<&str>) {
    let row: Vec<String> = puzzle.contents().iter().map(|c| c.to_string()).collect();
    let bank: Vec<String> = puzzle
        .bank()
        .tiles()
        .iter()
        .map(|t| t.map(String::from).unwrap_or_else(|| "·".to_string()))
        .collect();
    println!("  Answer: {}", row.join(" "));
    println!("  Bank:   {}", bank.join(" "));
    if let Some(hint) = hint {
        println!("  Hint:   {hint}");
    }
    println!(
        "  Filled: {}/{}  Revealed: {}  Status: {}",
        puzzle.filled_count(),
        puzzle.letter_count(),
        puzzle.revealed(),
        puzzle.status()
    );
    println!();
}

fn show(session: &Session<MemoryStore>) {
    let (at, total) = session.position();
    let hint = session.current_item().and_then(|i| i.hint.as_deref());
    println!("━━ Word {at}/{total} ━━");
    print_puzzle(session.puzzle(), hint);
}

fn main() {
    env_logger::init();

    let config = PuzzleConfig { rng_seed: Some(2024), ..PuzzleConfig::default() };
    let mut session = Session::open(MemoryStore::new(), config);

    // ── Defaults ─────────────────────────────────────────────────────────────
    println!();
    println!("══ Built-in words ══");
    println!();
    show(&session);

    // ── Solving ──────────────────────────────────────────────────────────────
    println!("══ Hint D, pick R G, undo G, finish A G O N ══");
    println!();
    let puzzle = session.puzzle_mut();
    puzzle.hint();
    for letter in "RG".chars() {
        puzzle.pick_letter(letter);
    }
    puzzle.remove_last();
    for letter in "AGON".chars() {
        puzzle.pick_letter(letter);
    }
    let verdict = puzzle.check();
    println!("  check() → {verdict}");
    show(&session);

    // Punctuated targets: hyphens are shown, never picked
    session.next();
    session.next();
    session.next();
    show(&session);

    // ── Ingestion ────────────────────────────────────────────────────────────
    println!("══ Ingest a CSV list ══");
    println!();
    let csv = "word;hint\nЁлка;Новогоднее дерево\nPanda,bamboo fan\nPANDA,duplicate\nice cream\tcold";
    match session.ingest(csv, Format::Csv) {
        Ok(count) => println!("  Loaded {count} words"),
        Err(e) => println!("  Rejected: {e} (expected {})", e.guidance()),
    }
    for item in session.words().items() {
        println!("    {item}");
    }
    println!();
    show(&session);

    println!("══ Ingest broken JSON ══");
    println!();
    if let Err(e) = session.ingest(r#"[{"word": "owl""#, Format::Json) {
        println!("  Rejected: {e}");
        println!("  Expected: {}", e.guidance());
        println!("  Still {} words active", session.words().len());
    }
    println!();

    // ── Reset ────────────────────────────────────────────────────────────────
    println!("══ Reset to defaults ══");
    println!();
    session.reset_to_default();
    show(&session);
}
