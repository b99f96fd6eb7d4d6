//! Pipeline configuration.
//!
//! Every section has working defaults; a TOML file may override any subset:
//!
//! ```toml
//! [blocks]
//! size = 9
//! overlap = 3
//!
//! [ssml]
//! verse_pause_ms = 150
//! tercet_pause_ms = 400
//!
//! [noise]
//! extra_patterns = ['^\s*EDIZIONE\s+PETROCCHI\s*$']
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Recitation block windowing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    /// Verses per block; 0 disables blocks
    pub size: usize,
    /// Verses shared by consecutive blocks
    pub overlap: usize,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            size: 12,
            overlap: 0,
        }
    }
}

impl BlockConfig {
    /// Set the block size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the overlap between consecutive blocks.
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Distance between the first verses of consecutive blocks.
    pub fn step(&self) -> usize {
        self.size.saturating_sub(self.overlap).max(1)
    }
}

/// Pause durations and language for SSML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsmlConfig {
    /// Pause after a verse inside a tercet
    pub verse_pause_ms: u32,
    /// Pause after the verse closing a tercet
    pub tercet_pause_ms: u32,
    /// `xml:lang` of standalone documents
    pub language: String,
}

impl Default for SsmlConfig {
    fn default() -> Self {
        Self {
            verse_pause_ms: 120,
            tercet_pause_ms: 220,
            language: "it-IT".to_string(),
        }
    }
}

impl SsmlConfig {
    /// Set the pause after each verse.
    pub fn with_verse_pause_ms(mut self, ms: u32) -> Self {
        self.verse_pause_ms = ms;
        self
    }

    /// Set the pause at tercet boundaries.
    pub fn with_tercet_pause_ms(mut self, ms: u32) -> Self {
        self.tercet_pause_ms = ms;
        self
    }

    /// Set the document language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Noise pattern selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Apply the built-in patterns
    pub use_defaults: bool,
    /// Additional case-insensitive regexes matched against whole lines
    pub extra_patterns: Vec<String>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            use_defaults: true,
            extra_patterns: Vec::new(),
        }
    }
}

impl NoiseConfig {
    /// Add an extra noise pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.extra_patterns.push(pattern.into());
        self
    }
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Recitation block windowing
    pub blocks: BlockConfig,
    /// SSML rendering
    pub ssml: SsmlConfig,
    /// Page furniture patterns
    pub noise: NoiseConfig,
}

impl PipelineConfig {
    /// Create configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::Input {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        log::info!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Replace block settings.
    pub fn with_blocks(mut self, blocks: BlockConfig) -> Self {
        self.blocks = blocks;
        self
    }

    /// Replace SSML settings.
    pub fn with_ssml(mut self, ssml: SsmlConfig) -> Self {
        self.ssml = ssml;
        self
    }

    /// Replace noise settings.
    pub fn with_noise(mut self, noise: NoiseConfig) -> Self {
        self.noise = noise;
        self
    }

    /// Check settings for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.blocks.size > 0 && self.blocks.overlap >= self.blocks.size {
            return Err(Error::InvalidConfig(format!(
                "block overlap ({}) must be smaller than block size ({})",
                self.blocks.overlap, self.blocks.size
            )));
        }
        if self.ssml.verse_pause_ms == 0 || self.ssml.tercet_pause_ms == 0 {
            return Err(Error::InvalidConfig("pause durations must be positive".to_string()));
        }
        if self.ssml.language.trim().is_empty() {
            return Err(Error::InvalidConfig("SSML language must not be empty".to_string()));
        }
        for pattern in &self.noise.extra_patterns {
            regex::Regex::new(pattern)?;
        }
        Ok(())
    }
}
