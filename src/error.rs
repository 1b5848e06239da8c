// src/error.rs

/// Failures parsing one raw HTML payload.
///
/// Scraped markup is routinely malformed, so the parser is best-effort and
/// only refuses input it cannot treat as HTML at all. A missing field during
/// extraction is never an error; it surfaces as field absence in the record.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty or whitespace-only")]
    EmptyInput,
    #[error("input did not produce any markup nodes")]
    NoMarkup,
}
