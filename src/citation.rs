//! Free-form citation parsing.
//!
//! Accepts the ways a reader writes a reference to a passage and resolves
//! them to a `(cantica, canto, first verse, last verse)` tuple:
//!
//! - `Inferno V vv. 61–72`
//! - `inferno 5 61-72`
//! - `Inf. V, 61`
//! - `Purg. XXXIII, vv. 142—145`
//! - `II 1 1-6` (cantica by ordinal)
//!
//! Parsing only checks the citation against the shape of the work (canto
//! counts); whether the verses exist is decided against the emitted corpus
//! by [`Corpus::resolve`](crate::corpus::Corpus::resolve).

use crate::error::{Error, Result};
use crate::labels::{parse_roman, to_roman};
use crate::model::Cantica;
use regex::Regex;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::OnceLock;

/// A reference to an inclusive verse range within one canto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Citation {
    /// Division
    pub cantica: Cantica,
    /// Canto number
    pub canto: u32,
    /// First verse
    pub start: u32,
    /// Last verse, inclusive
    pub end: u32,
}

impl Citation {
    /// Create a citation, checking the canto and the verse range.
    pub fn new(cantica: Cantica, canto: u32, start: u32, end: u32) -> Result<Self> {
        cantica.check_canto(canto)?;
        if start == 0 || start > end {
            return Err(Error::InvalidVerseRange { start, end });
        }
        Ok(Self {
            cantica,
            canto,
            start,
            end,
        })
    }

    /// Parse a free-form citation.
    pub fn parse(text: &str) -> Result<Self> {
        let normalized = normalize_citation(text);
        let caps = citation_regex()
            .and_then(|re| re.captures(&normalized))
            .ok_or_else(|| Error::MalformedCitation(text.to_string()))?;

        let cantica_text = &caps["cantica"];
        let cantica = Cantica::from_name(cantica_text)
            .ok_or_else(|| Error::UnknownCantica(cantica_text.to_string()))?;

        let canto = parse_number(&caps["canto"])
            .ok_or_else(|| Error::MalformedCitation(text.to_string()))?;

        let start = caps["start"]
            .parse::<u32>()
            .map_err(|_| Error::MalformedCitation(text.to_string()))?;
        let end = match caps.name("end") {
            Some(m) => m
                .as_str()
                .parse::<u32>()
                .map_err(|_| Error::MalformedCitation(text.to_string()))?,
            None => start,
        };

        let citation = Self::new(cantica, canto, start, end)?;
        log::debug!("Parsed citation '{}' as {:?}", text, citation.as_tuple());
        Ok(citation)
    }

    /// The citation as a plain tuple.
    pub fn as_tuple(&self) -> (Cantica, u32, u32, u32) {
        (self.cantica, self.canto, self.start, self.end)
    }

    /// Cited verse numbers.
    pub fn verses(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    /// Number of cited verses.
    pub fn verse_count(&self) -> usize {
        (self.end - self.start + 1) as usize
    }
}

impl FromStr for Citation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canto = to_roman(self.canto, true);
        if self.start == self.end {
            write!(f, "{} {}, v. {}", self.cantica, canto, self.start)
        } else {
            write!(f, "{} {}, vv. {}-{}", self.cantica, canto, self.start, self.end)
        }
    }
}

/// Fold case, unify dash variants and collapse whitespace.
pub fn normalize_citation(text: &str) -> String {
    let dashed: String = text
        .chars()
        .map(|c| match c {
            '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}' => '-',
            _ => c,
        })
        .collect::<String>()
        .to_lowercase();

    dashed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_number(text: &str) -> Option<u32> {
    if text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().ok()
    } else {
        parse_roman(text)
    }
}

static CITATION_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// `<cantica> <canto> <start>[-<end>]` over normalized text. Canto and
/// start verse must be separated; `inferno 12` names no verse.
fn citation_regex() -> Option<&'static Regex> {
    CITATION_REGEX
        .get_or_init(|| {
            Regex::new(
                r"^(?P<cantica>[a-zàèéìòù]+|[123])(?:\.\s*|\s+)(?P<canto>[ivxlc]+|\d+)(?:\s*[,:.]\s*|\s+)(?:vv?\.?\s*)?(?P<start>\d+)(?:\s*-\s*(?P<end>\d+))?\.?$",
            )
            .ok()
        })
        .as_ref()
}
