//! Error types for the commedia pipeline.
//!
//! This module defines all error types that can occur while extracting,
//! segmenting, emitting and querying the text.

use crate::model::Cantica;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction and lookup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be read
    #[error("Cannot read input '{path}': {reason}")]
    Input {
        /// Path as given by the caller
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// The PDF library failed to open or extract the document
    #[error("PDF extraction failed for '{path}': {reason}")]
    Pdf {
        /// Path as given by the caller
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// Requested page range does not fit the document
    #[error("Invalid page range {start}..={end}: document has {page_count} pages")]
    InvalidPageRange {
        /// First requested page (1-based)
        start: usize,
        /// Last requested page (1-based, inclusive)
        end: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A noise pattern is not a valid regular expression
    #[error("Invalid noise pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Citation text matched none of the accepted forms
    #[error("Malformed citation '{0}': expected '<cantica> <canto> [vv.] <verse>[-<verse>]'")]
    MalformedCitation(String),

    /// Division name not recognised
    #[error("Unknown cantica '{0}'")]
    UnknownCantica(String),

    /// Canto number outside the cantica
    #[error("Canto {canto} out of range for {cantica} (1..={max})")]
    CantoOutOfRange {
        /// Division
        cantica: Cantica,
        /// Requested canto
        canto: u32,
        /// Number of cantos in the division
        max: u32,
    },

    /// Verse range is empty or starts at zero
    #[error("Invalid verse range {start}-{end}")]
    InvalidVerseRange {
        /// First verse
        start: u32,
        /// Last verse
        end: u32,
    },

    /// Canto is valid but was not emitted into the corpus
    #[error("{cantica} {canto} not found in corpus")]
    CantoNotFound {
        /// Division
        cantica: Cantica,
        /// Canto number
        canto: u32,
    },

    /// Verse range reaches past the end of the canto
    #[error("Verses {start}-{end} out of range for {cantica} {canto}: canto has {available} verses")]
    VerseOutOfRange {
        /// Division
        cantica: Cantica,
        /// Canto number
        canto: u32,
        /// First verse
        start: u32,
        /// Last verse
        end: u32,
        /// Verses present in the canto
        available: u32,
    },

    /// Verse identifier is not of the form `inf.05.061`
    #[error("Invalid verse identifier '{0}'")]
    InvalidVerseId(String),
}
