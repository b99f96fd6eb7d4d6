//! Emitted JSON documents: one per canto, plus the manifest.
//!
//! Field order is fixed by the struct definitions and no run-dependent data
//! (timestamps, absolute output paths) is stored, so serializing the same
//! input twice yields identical bytes.

use crate::error::{Error, Result};
use crate::model::{Cantica, VerseId};
use serde::{Deserialize, Serialize};

/// A single verse with its annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Canonical identifier
    pub id: VerseId,
    /// Verse number within the canto, 1-based
    pub number: u32,
    /// Tercet index within the canto, 0-based
    pub tercet: u32,
    /// Cleaned text as extracted
    pub text_original: String,
    /// Search-normalized text
    pub text_normalized: String,
    /// Final word, lower-cased
    pub last_word: String,
    /// Terza rima label (ABA BCB CDC ...), lower case
    pub rhyme_letter: String,
    /// `<s>` markup for the verse
    pub ssml: String,
}

/// Three consecutive verses (fewer for the closing line of a canto).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tercet {
    /// Span identifier, e.g. `inf.05.061-063`
    pub id: String,
    /// Tercet index within the canto, 0-based
    pub index: u32,
    /// First verse number
    pub start_verse: u32,
    /// Last verse number
    pub end_verse: u32,
    /// Whether the tercet has all three verses
    pub complete: bool,
    /// Positional rhyme pattern within the tercet (`aba`, or a prefix of it
    /// for a partial tercet). The same for every tercet; the chained terza
    /// rima labels are on the member verses as [`Verse::rhyme_letter`].
    pub rhyme_scheme: String,
    /// Member verse identifiers
    pub verses: Vec<VerseId>,
}

/// A window of consecutive verses for recitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecitationBlock {
    /// Span identifier
    pub id: String,
    /// First verse number
    pub start_verse: u32,
    /// Last verse number
    pub end_verse: u32,
    /// Member verse identifiers
    pub verses: Vec<VerseId>,
    /// `<p>` markup with pauses
    pub ssml: String,
}

/// Element counts for a canto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Number of verses
    pub verses: usize,
    /// Number of tercets, including a final partial one
    pub tercets: usize,
    /// Number of recitation blocks
    pub recitation_blocks: usize,
}

/// Where a canto came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Input file as given on the command line
    pub file: String,
    /// First and last page, 1-based inclusive
    pub pages: [usize; 2],
}

/// Everything emitted for one canto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantoDocument {
    /// Division
    pub cantica: Cantica,
    /// Canto number
    pub canto: u32,
    /// Provenance
    pub source: Source,
    /// Element counts
    pub counts: Counts,
    /// Verses in order
    pub verses: Vec<Verse>,
    /// Tercets in order
    pub tercets: Vec<Tercet>,
    /// Recitation blocks in order
    pub recitation_blocks: Vec<RecitationBlock>,
}

impl CantoDocument {
    /// File name the canto is written to, e.g. `inf_05.json`.
    pub fn file_name(&self) -> String {
        canto_file_name(self.cantica, self.canto)
    }

    /// Verses `start..=end`, failing if the range leaves the canto.
    pub fn verse_range(&self, start: u32, end: u32) -> Result<&[Verse]> {
        if start == 0 || start > end {
            return Err(Error::InvalidVerseRange { start, end });
        }
        let available = self.verses.len() as u32;
        if end > available {
            return Err(Error::VerseOutOfRange {
                cantica: self.cantica,
                canto: self.canto,
                start,
                end,
                available,
            });
        }
        Ok(&self.verses[(start - 1) as usize..end as usize])
    }
}

/// File name for a canto document.
pub fn canto_file_name(cantica: Cantica, canto: u32) -> String {
    format!("{}_{:02}.json", cantica.code(), canto)
}

/// Manifest entry for one emitted canto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Division
    pub cantica: Cantica,
    /// Canto number
    pub canto: u32,
    /// File name relative to the manifest
    pub file: String,
    /// First and last source page
    pub pages: [usize; 2],
    /// Element counts
    pub counts: Counts,
}

/// Index of an output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Input file as given on the command line
    pub source: String,
    /// Emitted cantos in order of appearance
    pub cantos: Vec<ManifestEntry>,
}

impl Manifest {
    /// File name of the manifest inside an output directory.
    pub const FILE_NAME: &'static str = "manifest.json";

    /// Find the entry for a canto.
    pub fn entry(&self, cantica: Cantica, canto: u32) -> Option<&ManifestEntry> {
        self.cantos
            .iter()
            .find(|e| e.cantica == cantica && e.canto == canto)
    }

    /// Total verses across all cantos.
    pub fn verse_count(&self) -> usize {
        self.cantos.iter().map(|e| e.counts.verses).sum()
    }
}
