//! The extraction pipeline: segment → annotate → emit.
//!
//! ```text
//! PageSource ──pages──► StructuralSegmenter ──SegmentedCanto[]──► annotate
//!            ──CantoDocument[]──► <outdir>/<code>_<NN>.json + manifest.json
//! ```

use crate::annotate::build_document;
use crate::config::PipelineConfig;
use crate::document::{CantoDocument, Manifest, ManifestEntry};
use crate::error::Result;
use crate::model::Cantica;
use crate::segment::{NoiseFilter, SegmentedCanto, StructuralSegmenter};
use crate::source::PageSource;
use crate::ssml::SsmlRenderer;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Path of the written manifest
    pub manifest: PathBuf,
    /// Number of canto documents written
    pub cantos: usize,
    /// Total verses across all cantos
    pub verses: usize,
}

/// Configured pipeline, reusable across inputs.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    segmenter: StructuralSegmenter,
    renderer: SsmlRenderer,
}

impl Pipeline {
    /// Create a pipeline, validating the configuration.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let noise = NoiseFilter::new(&config.noise)?;
        log::debug!("Noise filter has {} patterns", noise.pattern_count());
        Ok(Self {
            segmenter: StructuralSegmenter::new(noise),
            renderer: SsmlRenderer::new(config.ssml.clone()),
            config,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// SSML renderer built from the configuration.
    pub fn renderer(&self) -> &SsmlRenderer {
        &self.renderer
    }

    /// Segment and annotate a whole work held in memory.
    pub fn build_documents<S: AsRef<str>>(&self, source_name: &str, pages: &[S]) -> Vec<CantoDocument> {
        self.segmenter
            .segment(pages)
            .iter()
            .map(|canto| build_document(canto, source_name, &self.config, &self.renderer))
            .collect()
    }

    /// Run the full-work pipeline and write documents plus manifest.
    pub fn run_batch(&self, source: &mut dyn PageSource, outdir: &Path) -> Result<BatchSummary> {
        let pages = source.pages()?;
        log::info!("Extracted {} pages from {}", pages.len(), source.name());

        let documents = self.build_documents(source.name(), &pages);
        std::fs::create_dir_all(outdir)?;

        let mut entries = Vec::with_capacity(documents.len());
        for doc in &documents {
            let file = doc.file_name();
            write_json(&outdir.join(&file), doc)?;
            entries.push(ManifestEntry {
                cantica: doc.cantica,
                canto: doc.canto,
                file,
                pages: doc.source.pages,
                counts: doc.counts,
            });
        }

        let manifest = Manifest {
            source: source.name().to_string(),
            cantos: entries,
        };
        let manifest_path = outdir.join(Manifest::FILE_NAME);
        write_json(&manifest_path, &manifest)?;

        let summary = BatchSummary {
            manifest: manifest_path,
            cantos: manifest.cantos.len(),
            verses: manifest.verse_count(),
        };
        log::info!(
            "Wrote {} cantos ({} verses) to {}",
            summary.cantos,
            summary.verses,
            outdir.display()
        );
        Ok(summary)
    }

    /// Extract a single canto from a known page range (1-based, inclusive).
    ///
    /// Every probable verse in the range belongs to the canto; headings are
    /// skipped and not used for numbering.
    pub fn extract_canto(
        &self,
        source: &mut dyn PageSource,
        cantica: Cantica,
        canto: u32,
        start_page: usize,
        end_page: usize,
    ) -> Result<CantoDocument> {
        cantica.check_canto(canto)?;
        let pages = source.page_range(start_page, end_page)?;
        let segmented = SegmentedCanto {
            cantica,
            canto,
            pages: (start_page, end_page),
            lines: self.segmenter.collect_verses(&pages),
        };
        log::info!(
            "{} {}: {} verses on pages {}-{}",
            cantica,
            canto,
            segmented.lines.len(),
            start_page,
            end_page
        );
        Ok(build_document(&segmented, source.name(), &self.config, &self.renderer))
    }
}

/// Write a value as pretty JSON with a trailing newline.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    std::fs::write(path, text)?;
    Ok(())
}
