//! Canonical structure of the work: canticas and verse identifiers.
//!
//! A verse identifier is derived only from (cantica, canto, verse number) and
//! is written as `<code>.<canto:02>.<verse:03>`, e.g. `inf.05.061`. Tercet and
//! recitation block identifiers extend it with a verse span
//! (`inf.05.061-063`).

use crate::error::{Error, Result};
use crate::labels::parse_roman;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three top-level divisions of the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cantica {
    /// First cantica, 34 cantos
    Inferno,
    /// Second cantica, 33 cantos
    Purgatorio,
    /// Third cantica, 33 cantos
    Paradiso,
}

impl Cantica {
    /// All canticas in canonical order.
    pub const ALL: [Cantica; 3] = [Cantica::Inferno, Cantica::Purgatorio, Cantica::Paradiso];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inferno => "Inferno",
            Self::Purgatorio => "Purgatorio",
            Self::Paradiso => "Paradiso",
        }
    }

    /// Short code used in identifiers and file names.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Inferno => "inf",
            Self::Purgatorio => "purg",
            Self::Paradiso => "par",
        }
    }

    /// Position in the work, 1-based.
    pub fn ordinal(&self) -> u32 {
        match self {
            Self::Inferno => 1,
            Self::Purgatorio => 2,
            Self::Paradiso => 3,
        }
    }

    /// Number of cantos in this cantica (Inferno carries the proem canto).
    pub fn canto_count(&self) -> u32 {
        match self {
            Self::Inferno => 34,
            Self::Purgatorio | Self::Paradiso => 33,
        }
    }

    /// Check that `canto` exists in this cantica.
    pub fn check_canto(&self, canto: u32) -> Result<()> {
        if canto == 0 || canto > self.canto_count() {
            return Err(Error::CantoOutOfRange {
                cantica: *self,
                canto,
                max: self.canto_count(),
            });
        }
        Ok(())
    }

    /// Look a cantica up by exact short code (`inf`, `purg`, `par`).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Look a cantica up by a loose name.
    ///
    /// Accepts the full name, any prefix of at least three letters
    /// (`inf`, `purg`, `parad`), an optional trailing `.`, the Roman ordinal
    /// (`I`..`III`) or the Arabic ordinal (`1`..`3`). Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().trim_end_matches('.').to_lowercase();
        if lower.is_empty() {
            return None;
        }

        if let Ok(n) = lower.parse::<u32>() {
            return Self::from_ordinal(n);
        }
        if let Some(n) = parse_roman(&lower) {
            return Self::from_ordinal(n);
        }

        if lower.chars().count() < 3 {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|c| c.name().to_lowercase().starts_with(&lower))
    }

    fn from_ordinal(n: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.ordinal() == n)
    }
}

impl fmt::Display for Cantica {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cantica {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownCantica(s.to_string()))
    }
}

/// Stable identifier of a single verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct VerseId {
    /// Division
    pub cantica: Cantica,
    /// Canto number, 1-based
    pub canto: u32,
    /// Verse number within the canto, 1-based
    pub verse: u32,
}

impl VerseId {
    /// Create a verse identifier.
    pub fn new(cantica: Cantica, canto: u32, verse: u32) -> Self {
        Self {
            cantica,
            canto,
            verse,
        }
    }

    /// Identifier of a verse span within the same canto.
    pub fn span(&self, end_verse: u32) -> String {
        span_id(self.cantica, self.canto, self.verse, end_verse)
    }
}

/// Identifier for a verse span, e.g. `inf.05.061-072`.
pub fn span_id(cantica: Cantica, canto: u32, start: u32, end: u32) -> String {
    format!("{}.{:02}.{:03}-{:03}", cantica.code(), canto, start, end)
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}.{:03}", self.cantica.code(), self.canto, self.verse)
    }
}

impl FromStr for VerseId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidVerseId(s.to_string());
        let mut parts = s.split('.');

        let cantica = parts.next().and_then(Cantica::from_code).ok_or_else(invalid)?;
        let canto = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let verse = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;

        if parts.next().is_some() || canto == 0 || verse == 0 {
            return Err(invalid());
        }
        Ok(Self::new(cantica, canto, verse))
    }
}

impl From<VerseId> for String {
    fn from(id: VerseId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for VerseId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
