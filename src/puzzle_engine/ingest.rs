//! Turns raw word-list text into puzzle items.
//!
//! | Format | Shape |
//! |--------|-------|
//! | `Text` | `WORD` or `WORD | HINT` per line |
//! | `Csv`  | `word,hint` rows, delimiter `,` `;` or tab chosen per line, optional `word` header |
//! | `Json` | array of `{ "word": ..., "hint": ... }` objects |
//!
//! Empty words are dropped in every format. A list that parses but leaves no
//! words behind is an [`IngestionError::EmptyResult`], distinct from a
//! structural [`IngestionError::Parse`] failure.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::puzzle_engine::{error::IngestionError, models::PuzzleItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Csv,
    Json,
}

impl Format {
    /// Pick a format from a file name's extension; unknown names are text.
    pub fn from_file_name(name: impl AsRef<Path>) -> Self {
        let ext = name
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json")        => Format::Json,
            Some("csv" | "tsv") => Format::Csv,
            _                   => Format::Text,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Csv  => write!(f, "CSV"),
            Format::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "csv"          => Ok(Format::Csv),
            "json"         => Ok(Format::Json),
            other          => Err(format!("unknown word list format '{other}'")),
        }
    }
}

/// Parse `raw` as `format`, failing if nothing usable is found.
pub fn parse(raw: &str, format: Format) -> Result<Vec<PuzzleItem>, IngestionError> {
    // Spreadsheet exports often start with a UTF-8 byte order mark
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let items = match format {
        Format::Text => parse_text(raw),
        Format::Csv  => parse_csv(raw),
        Format::Json => parse_json(raw)?,
    };
    if items.is_empty() {
        return Err(IngestionError::EmptyResult { format });
    }
    Ok(items)
}

/// Build an item from trimmed parts; `None` when the word is empty.
fn item(word: &str, hint: Option<&str>) -> Option<PuzzleItem> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    let hint = hint.map(str::trim).filter(|h| !h.is_empty());
    Some(PuzzleItem {
        word: word.to_string(),
        hint: hint.map(str::to_string),
    })
}

fn lines(raw: &str) -> impl Iterator<Item = &str> {
    // `lines()` already drops the `\r` of CRLF endings
    raw.lines().map(str::trim).filter(|l| !l.is_empty())
}

fn parse_text(raw: &str) -> Vec<PuzzleItem> {
    lines(raw)
        .filter_map(|line| match line.split_once('|') {
            Some((word, hint)) => item(word, Some(hint)),
            None => item(line, None),
        })
        .collect()
}

/// Split on whichever of `,` `;` or tab comes first in the line, then trim
/// every cell.
fn split_row(line: &str) -> Vec<&str> {
    let delimiter = line
        .find(|c| matches!(c, ',' | ';' | '\t'))
        .and_then(|at| line[at..].chars().next());
    match delimiter {
        Some(delimiter) => line.split(delimiter).map(str::trim).collect(),
        None => vec![line.trim()],
    }
}

fn parse_csv(raw: &str) -> Vec<PuzzleItem> {
    // Lines are split untrimmed so a leading tab still marks an empty word cell
    let mut rows = raw
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(split_row)
        .peekable();
    if rows
        .peek()
        .and_then(|row| row.first())
        .is_some_and(|cell| cell.eq_ignore_ascii_case("word"))
    {
        rows.next();
    }
    rows.filter_map(|row| item(row[0], row.get(1).copied())).collect()
}

/// Text form of a scalar JSON field; structured values yield nothing.
fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b)   => Some(b.to_string()),
        _ => None,
    }
}

fn parse_json(raw: &str) -> Result<Vec<PuzzleItem>, IngestionError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| IngestionError::Parse {
        format: Format::Json,
        reason: e.to_string(),
    })?;
    let Value::Array(entries) = value else {
        return Err(IngestionError::Parse {
            format: Format::Json,
            reason: "expected an array of word objects".to_string(),
        });
    };

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let word = field_text(entry.get("word"))?;
            let hint = field_text(entry.get("hint"));
            item(&word, hint.as_deref())
        })
        .collect())
}
