//! Page text sources.
//!
//! The pipeline only needs the text of each page in order. PDFs are read
//! through `pdf_oxide`; text that was already extracted (for instance by
//! `pdftotext`, which separates pages with a form feed) can be fed directly.

use crate::error::{Error, Result};
use std::path::Path;

/// Page separator in plain-text extractions.
pub const FORM_FEED: char = '\u{000C}';

/// Supplies page text in reading order.
pub trait PageSource {
    /// Name recorded as the source in emitted documents.
    fn name(&self) -> &str;

    /// Number of pages.
    fn page_count(&mut self) -> Result<usize>;

    /// Text of a page by 0-based index.
    fn page_text(&mut self, index: usize) -> Result<String>;

    /// Text of every page.
    fn pages(&mut self) -> Result<Vec<String>> {
        let count = self.page_count()?;
        (0..count).map(|i| self.page_text(i)).collect()
    }

    /// Text of pages `start..=end`, 1-based.
    fn page_range(&mut self, start: usize, end: usize) -> Result<Vec<String>> {
        let page_count = self.page_count()?;
        if start < 1 || end > page_count || start > end {
            return Err(Error::InvalidPageRange {
                start,
                end,
                page_count,
            });
        }
        (start - 1..end).map(|i| self.page_text(i)).collect()
    }
}

/// Pages of a PDF file.
pub struct PdfPageSource {
    name: String,
    doc: pdf_oxide::PdfDocument,
}

impl PdfPageSource {
    /// Open a PDF file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        if !path.is_file() {
            return Err(Error::Input {
                path: name,
                reason: "no such file".to_string(),
            });
        }
        let doc = pdf_oxide::PdfDocument::open(path).map_err(|e| Error::Pdf {
            path: name.clone(),
            reason: e.to_string(),
        })?;
        log::info!("Opened PDF {}", name);
        Ok(Self { name, doc })
    }

    fn pdf_error(&self, e: pdf_oxide::Error) -> Error {
        Error::Pdf {
            path: self.name.clone(),
            reason: e.to_string(),
        }
    }
}

impl PageSource for PdfPageSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&mut self) -> Result<usize> {
        self.doc.page_count().map_err(|e| self.pdf_error(e))
    }

    fn page_text(&mut self, index: usize) -> Result<String> {
        log::trace!("Extracting page {} of {}", index + 1, self.name);
        self.doc.extract_text(index).map_err(|e| self.pdf_error(e))
    }
}

/// Pages held in memory, typically split from a form-feed separated file.
#[derive(Debug, Clone)]
pub struct TextPageSource {
    name: String,
    pages: Vec<String>,
}

impl TextPageSource {
    /// Wrap already separated pages.
    pub fn new(name: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    /// Split text on form feeds. A trailing form feed does not add a page.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let mut pages: Vec<String> = text.split(FORM_FEED).map(str::to_string).collect();
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }
        Self::new(name, pages)
    }

    /// Read a form-feed separated text file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| Error::Input {
            path: name.clone(),
            reason: e.to_string(),
        })?;
        let source = Self::from_text(name, &text);
        log::info!("Read {} text pages from {}", source.pages.len(), source.name);
        Ok(source)
    }
}

impl PageSource for TextPageSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&mut self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page_text(&mut self, index: usize) -> Result<String> {
        self.pages.get(index).cloned().ok_or(Error::InvalidPageRange {
            start: index + 1,
            end: index + 1,
            page_count: self.pages.len(),
        })
    }
}

/// Open a source by path: `.txt` files, or any file when `force_text` is
/// set, are read as form-feed separated text; everything else as PDF.
pub fn open_source(path: impl AsRef<Path>, force_text: bool) -> Result<Box<dyn PageSource>> {
    let path = path.as_ref();
    let is_text = force_text
        || path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if is_text {
        Ok(Box::new(TextPageSource::open(path)?))
    } else {
        Ok(Box::new(PdfPageSource::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_on_form_feed() {
        let mut source = TextPageSource::from_text("t", "uno\n\u{000C}due\n\u{000C}");
        assert_eq!(source.page_count().unwrap(), 2);
        assert_eq!(source.page_text(1).unwrap(), "due\n");
    }

    #[test]
    fn test_single_page_without_form_feed() {
        let mut source = TextPageSource::from_text("t", "solo");
        assert_eq!(source.pages().unwrap(), vec!["solo".to_string()]);
    }

    #[test]
    fn test_page_range() {
        let mut source = TextPageSource::new("t", vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(source.page_range(2, 3).unwrap(), vec!["b".to_string(), "c".to_string()]);
        assert!(matches!(source.page_range(0, 1), Err(Error::InvalidPageRange { .. })));
        assert!(matches!(source.page_range(3, 2), Err(Error::InvalidPageRange { .. })));
        assert!(matches!(
            source.page_range(1, 4),
            Err(Error::InvalidPageRange { page_count: 3, .. })
        ));
    }

    #[test]
    fn test_missing_pdf_is_input_error() {
        let result = PdfPageSource::open("/nonexistent/commedia.pdf");
        assert!(matches!(result, Err(Error::Input { .. })));
    }

    #[test]
    fn test_open_source_missing_text_file() {
        assert!(matches!(open_source("/nonexistent/pages.txt", false), Err(Error::Input { .. })));
    }
}
