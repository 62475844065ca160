use thiserror::Error;
use crate::puzzle_engine::ingest::Format;

/// Why an ingested word list was rejected.
///
/// Either way the previously active list stays in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestionError {
    #[error("could not read {format} input: {reason}")]
    Parse { format: Format, reason: String },
    #[error("no words found in {format} input")]
    EmptyResult { format: Format },
}

impl IngestionError {
    pub fn format(&self) -> Format {
        match self {
            IngestionError::Parse { format, .. } | IngestionError::EmptyResult { format } => *format,
        }
    }

    /// Short advice on what a valid file of this format looks like.
    pub fn guidance(&self) -> &'static str {
        match self.format() {
            Format::Text => "one word per line, optionally followed by `| hint`",
            Format::Csv  => "rows of `word,hint` (`;` or tab also work), optional `word` header",
            Format::Json => r#"an array like [{"word": "...", "hint": "..."}]"#,
        }
    }
}
