//! Cantica and canto boundary detection.
//!
//! Cantos are numbered by order of appearance within their cantica; the
//! ordinal word in the heading (`CANTO TRENTESIMOTERZO`) is never parsed. A
//! dropped or duplicated heading therefore shifts every later canto of the
//! same cantica, which is logged when the count runs past the canonical one.

use super::clean::{is_caps_title, page_lines, word_char_count};
use super::noise::NoiseFilter;
use crate::model::Cantica;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A line holding only a cantica name
    static ref RE_CANTICA_HEADING: Regex =
        Regex::new(r"(?i)^\s*(INFERNO|PURGATORIO|PARADISO)\s*$").unwrap();

    /// `CANTO PRIMO`, `CANTO VENTESIMO QUINTO`, `CANTO XXXIV`
    static ref RE_CANTO_HEADING: Regex =
        Regex::new(r"^\s*CANTO\s+[A-ZÀÈÉÌÒÙ]+(\s+[A-ZÀÈÉÌÒÙ]+)?\s*$").unwrap();
}

/// Minimum number of word characters for a line to count as a verse.
const MIN_VERSE_WORD_CHARS: usize = 2;

/// Verses of one canto as found in the page stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedCanto {
    /// Division the canto belongs to
    pub cantica: Cantica,
    /// Order of appearance within the cantica, 1-based
    pub canto: u32,
    /// First and last page spanned, 1-based inclusive
    pub pages: (usize, usize),
    /// Cleaned verse lines in reading order
    pub lines: Vec<String>,
}

/// Canto under construction.
#[derive(Debug)]
struct OpenCanto {
    cantica: Cantica,
    canto: u32,
    first_page: usize,
    last_page: usize,
    lines: Vec<String>,
}

impl OpenCanto {
    fn close(self) -> SegmentedCanto {
        SegmentedCanto {
            cantica: self.cantica,
            canto: self.canto,
            pages: (self.first_page + 1, self.last_page + 1),
            lines: self.lines,
        }
    }
}

/// Turns a page stream into cantos of verse lines.
#[derive(Debug, Clone, Default)]
pub struct StructuralSegmenter {
    noise: NoiseFilter,
}

impl StructuralSegmenter {
    /// Create a segmenter with the given noise filter.
    pub fn new(noise: NoiseFilter) -> Self {
        Self { noise }
    }

    /// The noise filter in use.
    pub fn noise(&self) -> &NoiseFilter {
        &self.noise
    }

    /// Recognise a cantica heading line.
    pub fn cantica_heading(line: &str) -> Option<Cantica> {
        RE_CANTICA_HEADING
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| Cantica::from_name(m.as_str()))
    }

    /// Recognise a canto heading line.
    pub fn is_canto_heading(line: &str) -> bool {
        RE_CANTO_HEADING.is_match(line)
    }

    /// Decide whether a cleaned line is verse text.
    pub fn is_probable_verse(&self, line: &str) -> bool {
        if line.is_empty() || self.noise.is_noise(line) {
            return false;
        }
        if Self::is_canto_heading(line) || Self::cantica_heading(line).is_some() {
            return false;
        }
        if is_caps_title(line) {
            return false;
        }
        word_char_count(line) >= MIN_VERSE_WORD_CHARS
    }

    /// Segment a whole work.
    ///
    /// A cantica heading for a different cantica closes the open canto; a
    /// repeat of the current cantica name is treated as a running header.
    /// Canto headings seen before any cantica heading are ignored.
    pub fn segment<S: AsRef<str>>(&self, pages: &[S]) -> Vec<SegmentedCanto> {
        let mut cantos = Vec::new();
        let mut current: Option<Cantica> = None;
        let mut open: Option<OpenCanto> = None;
        let mut counters = [0u32; 3];

        for (page_idx, page) in pages.iter().enumerate() {
            for line in page_lines(page.as_ref()) {
                if let Some(cantica) = Self::cantica_heading(&line) {
                    if current != Some(cantica) {
                        log::info!("Cantica {} begins on page {}", cantica, page_idx + 1);
                        cantos.extend(open.take().map(OpenCanto::close));
                        current = Some(cantica);
                    }
                    continue;
                }

                if Self::is_canto_heading(&line) {
                    let Some(cantica) = current else {
                        log::debug!("Ignoring '{}' on page {}: no cantica yet", line, page_idx + 1);
                        continue;
                    };
                    cantos.extend(open.take().map(OpenCanto::close));

                    let counter = &mut counters[(cantica.ordinal() - 1) as usize];
                    *counter += 1;
                    if *counter > cantica.canto_count() {
                        log::warn!(
                            "{} has more than {} canto headings (page {}); numbering may be shifted",
                            cantica,
                            cantica.canto_count(),
                            page_idx + 1
                        );
                    }
                    log::debug!("{} canto {} starts on page {}", cantica, counter, page_idx + 1);
                    open = Some(OpenCanto {
                        cantica,
                        canto: *counter,
                        first_page: page_idx,
                        last_page: page_idx,
                        lines: Vec::new(),
                    });
                    continue;
                }

                if let Some(canto) = open.as_mut() {
                    if self.is_probable_verse(&line) {
                        canto.lines.push(line);
                        canto.last_page = page_idx;
                    }
                }
            }
        }

        cantos.extend(open.take().map(OpenCanto::close));
        log::info!("Segmented {} cantos from {} pages", cantos.len(), pages.len());
        cantos
    }

    /// Collect every probable verse from the pages, ignoring headings.
    ///
    /// Used when the caller already knows which canto a page range holds.
    pub fn collect_verses<S: AsRef<str>>(&self, pages: &[S]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|page| page_lines(page.as_ref()))
            .filter(|line| self.is_probable_verse(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cantica_heading() {
        assert_eq!(StructuralSegmenter::cantica_heading("INFERNO"), Some(Cantica::Inferno));
        assert_eq!(StructuralSegmenter::cantica_heading(" Paradiso "), Some(Cantica::Paradiso));
        assert_eq!(StructuralSegmenter::cantica_heading("INFERNO I"), None);
    }

    #[test]
    fn test_canto_heading() {
        assert!(StructuralSegmenter::is_canto_heading("CANTO PRIMO"));
        assert!(StructuralSegmenter::is_canto_heading("CANTO VENTESIMO QUINTO"));
        assert!(StructuralSegmenter::is_canto_heading("CANTO XXXIV"));
        assert!(!StructuralSegmenter::is_canto_heading("Canto primo"));
        assert!(!StructuralSegmenter::is_canto_heading("CANTO"));
    }

    #[test]
    fn test_probable_verse() {
        let seg = StructuralSegmenter::default();
        assert!(seg.is_probable_verse("Nel mezzo del cammin di nostra vita"));
        assert!(!seg.is_probable_verse("DANTE ALIGHIERI"));
        assert!(!seg.is_probable_verse("CANTO PRIMO"));
        assert!(!seg.is_probable_verse("NOTE"));
        assert!(!seg.is_probable_verse("37"));
        assert!(!seg.is_probable_verse("* * *"));
    }

    #[test]
    fn test_segment_numbers_by_appearance() {
        let seg = StructuralSegmenter::default();
        let pages = vec![
            "INFERNO\nCANTO PRIMO\nNel mezzo del cammin di nostra vita\nmi ritrovai per una selva oscura,",
            "CANTO SECONDO\nLo giorno se n'andava, e l'aere bruno",
        ];
        let cantos = seg.segment(&pages);
        assert_eq!(cantos.len(), 2);
        assert_eq!(cantos[0].canto, 1);
        assert_eq!(cantos[0].lines.len(), 2);
        assert_eq!(cantos[0].pages, (1, 1));
        assert_eq!(cantos[1].canto, 2);
        assert_eq!(cantos[1].pages, (2, 2));
    }

    #[test]
    fn test_canto_before_cantica_is_ignored() {
        let seg = StructuralSegmenter::default();
        let pages = vec!["CANTO PRIMO\nverso senza cantica alcuna"];
        assert!(seg.segment(&pages).is_empty());
    }

    #[test]
    fn test_collect_verses_skips_headings() {
        let seg = StructuralSegmenter::default();
        let pages = vec!["CANTO QUINTO\nCosì discesi del cerchio primaio\n12"];
        assert_eq!(seg.collect_verses(&pages), vec!["Così discesi del cerchio primaio".to_string()]);
    }
}
