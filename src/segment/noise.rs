//! Running header, page number and illustration caption detection.
//!
//! Every pattern is matched case-insensitively against a whole cleaned line.
//! Lines that match nothing pass through as verse text, so a new edition
//! with unfamiliar page furniture usually needs extra patterns rather than
//! code changes (see [`NoiseConfig::extra_patterns`]).
//!
//! [`NoiseConfig::extra_patterns`]: crate::config::NoiseConfig::extra_patterns

use crate::config::NoiseConfig;
use crate::error::Result;
use lazy_static::lazy_static;
use regex::{RegexSet, RegexSetBuilder};

/// Built-in patterns for the Treves / Liber Liber edition.
pub const DEFAULT_NOISE_PATTERNS: &[&str] = &[
    // Running headers and front matter
    r"^\s*LA\s+DIVINA\s+COMMEDIA\s*$",
    r"^\s*DANTE\s+ALIGHIERI\s*$",
    r"^\s*Propriet[aà]\s+letteraria.*$",
    r"^\s*Milano\.\s*[–-]\s*Tip\.\s*Treves\.\s*$",
    r"^\s*PREFAZIONE\s*$",
    r"^\s*INDICE.*$",
    r"^\s*Liber\s+Liber\s*$",
    // Footers: bare page numbers
    r"^\s*\d+\s*$",
    // Illustration captions
    r"^\s*Raffaello\..*$",
    r"^\s*Michelangelo\..*$",
    r"^\s*Luca\s+Signorelli\..*$",
    r"^\s*Disegno\s+di\s+.*$",
    r"^\s*Miniatura\s+del\s+.*$",
    r"^\s*Pagina\s+del\s+Dante.*$",
];

lazy_static! {
    static ref DEFAULT_NOISE: RegexSet = build_set(DEFAULT_NOISE_PATTERNS.iter().copied()).unwrap();
}

fn build_set<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<RegexSet> {
    Ok(RegexSetBuilder::new(patterns).case_insensitive(true).build()?)
}

/// Classifies lines as page furniture.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    use_defaults: bool,
    extra: RegexSet,
}

impl NoiseFilter {
    /// Build a filter from configuration, compiling any extra patterns.
    pub fn new(config: &NoiseConfig) -> Result<Self> {
        let extra = build_set(config.extra_patterns.iter().map(String::as_str))?;
        Ok(Self {
            use_defaults: config.use_defaults,
            extra,
        })
    }

    /// Filter using only the built-in patterns.
    pub fn default_patterns() -> Self {
        Self {
            use_defaults: true,
            extra: RegexSet::empty(),
        }
    }

    /// Check whether a cleaned line is noise.
    pub fn is_noise(&self, line: &str) -> bool {
        (self.use_defaults && DEFAULT_NOISE.is_match(line)) || self.extra.is_match(line)
    }

    /// Number of active patterns.
    pub fn pattern_count(&self) -> usize {
        let defaults = if self.use_defaults {
            DEFAULT_NOISE.len()
        } else {
            0
        };
        defaults + self.extra.len()
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::default_patterns()
    }
}
