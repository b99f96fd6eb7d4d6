//! Structural segmentation of extracted page text.
//!
//! ```text
//! page text
//!     ↓
//! [clean]      (soft hyphens, trimming, empty lines)
//!     ↓
//! [NoiseFilter] (running headers, page numbers, illustration captions)
//!     ↓
//! [StructuralSegmenter] (cantica / canto boundaries, order-of-appearance numbering)
//!     ↓
//! SegmentedCanto[]
//! ```

pub mod clean;
pub mod noise;
pub mod segmenter;

pub use noise::{NoiseFilter, DEFAULT_NOISE_PATTERNS};
pub use segmenter::{SegmentedCanto, StructuralSegmenter};
