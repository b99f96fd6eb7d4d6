//! Citation lookup over an emitted output directory.

use crate::citation::Citation;
use crate::document::{CantoDocument, Manifest, Verse};
use crate::error::{Error, Result};
use crate::model::Cantica;
use crate::ssml::SsmlRenderer;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Verses resolved from a citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// The citation as resolved
    pub citation: Citation,
    /// Cited verses in order
    pub verses: Vec<Verse>,
}

impl Passage {
    /// Standalone SSML document for the passage.
    pub fn to_ssml(&self, renderer: &SsmlRenderer) -> String {
        renderer.document(
            self.verses
                .iter()
                .map(|v| (v.number, v.text_original.as_str())),
        )
    }

    /// Plain text, one verse per line.
    pub fn text(&self) -> String {
        self.verses
            .iter()
            .map(|v| v.text_original.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An output directory produced by the batch pipeline.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    manifest: Manifest,
}

impl Corpus {
    /// Open a directory containing `manifest.json`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        let manifest: Manifest = read_json(&root.join(Manifest::FILE_NAME))?;
        log::info!(
            "Opened corpus {} ({} cantos, {} verses)",
            root.display(),
            manifest.cantos.len(),
            manifest.verse_count()
        );
        Ok(Self { root, manifest })
    }

    /// The directory manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Load one canto document.
    pub fn load_canto(&self, cantica: Cantica, canto: u32) -> Result<CantoDocument> {
        let entry = self
            .manifest
            .entry(cantica, canto)
            .ok_or(Error::CantoNotFound { cantica, canto })?;
        read_json(&self.root.join(&entry.file))
    }

    /// Resolve a citation to its verses.
    ///
    /// Fails when the canto is missing or any cited verse lies beyond the end
    /// of the canto; a partial range is never returned.
    pub fn resolve(&self, citation: &Citation) -> Result<Passage> {
        let doc = self.load_canto(citation.cantica, citation.canto)?;
        let verses = doc.verse_range(citation.start, citation.end)?.to_vec();
        log::debug!("Resolved {} to {} verses", citation, verses.len());
        Ok(Passage {
            citation: *citation,
            verses,
        })
    }

    /// Parse and resolve citation text in one step.
    pub fn lookup(&self, text: &str) -> Result<Passage> {
        self.resolve(&Citation::parse(text)?)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Input {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_directory() {
        let result = Corpus::open("/nonexistent/commedia-out");
        assert!(matches!(result, Err(Error::Input { .. })));
    }
}
