//! # Commedia
//!
//! Extracts Dante's *Commedia* from a PDF into canonical structure and
//! serves two consumers: text-to-speech (SSML recitation markup) and
//! retrieval (citation lookup).
//!
//! ## Pipeline
//!
//! ```text
//! PDF / text pages
//!     ↓
//! [segment]   (noise stripping, cantica and canto boundaries)
//!     ↓
//! [annotate]  (verse ids, tercets, rhyme labels, recitation blocks)
//!     ↓
//! <code>_<NN>.json per canto + manifest.json
//!     ↓
//! [corpus]    (citation → verses → SSML)
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use commedia::{Corpus, Pipeline, PipelineConfig};
//! use commedia::source::PdfPageSource;
//!
//! # fn main() -> commedia::Result<()> {
//! let pipeline = Pipeline::new(PipelineConfig::default())?;
//! let mut pdf = PdfPageSource::open("commedia.pdf")?;
//! pipeline.run_batch(&mut pdf, "out".as_ref())?;
//!
//! let corpus = Corpus::open("out")?;
//! let passage = corpus.lookup("Inferno V vv. 121–123")?;
//! println!("{}", passage.to_ssml(pipeline.renderer()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Structure of the work
pub mod labels;
pub mod model;

// Text cleanup and segmentation
pub mod segment;

// Annotation and emitted documents
pub mod annotate;
pub mod document;
pub mod ssml;

// Lookup
pub mod citation;
pub mod corpus;

// Orchestration
pub mod config;
pub mod pipeline;
pub mod source;

// Re-exports
pub use citation::Citation;
pub use config::{BlockConfig, NoiseConfig, PipelineConfig, SsmlConfig};
pub use corpus::{Corpus, Passage};
pub use document::{CantoDocument, Manifest, RecitationBlock, Tercet, Verse};
pub use error::{Error, Result};
pub use model::{Cantica, VerseId};
pub use pipeline::{BatchSummary, Pipeline};
pub use ssml::SsmlRenderer;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "commedia");
    }
}
