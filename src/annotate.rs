//! Verse annotation, tercet grouping and recitation blocks.
//!
//! Identifiers, tercet membership and rhyme labels are pure functions of
//! (cantica, canto, verse number). Recitation blocks are derived afterwards
//! and never influence them.

use crate::config::{BlockConfig, PipelineConfig};
use crate::document::{CantoDocument, Counts, RecitationBlock, Source, Tercet, Verse};
use crate::labels::to_alpha;
use crate::model::{span_id, Cantica, VerseId};
use crate::segment::clean::{last_word, normalize_verse};
use crate::segment::SegmentedCanto;
use crate::ssml::SsmlRenderer;

/// Positional rhyme pattern of a full tercet, independent of its index.
const TERCET_SCHEME: &str = "aba";

/// Tercet index (0-based) of a 1-based verse number.
pub fn tercet_index(number: u32) -> u32 {
    debug_assert!(number > 0, "verse numbers start at 1");
    (number - 1) / 3
}

/// Terza rima label of a verse.
///
/// Tercet `k` rhymes `x y x` where `x` is the middle rhyme of tercet `k - 1`,
/// giving ABA BCB CDC ... The closing single line of a canto (position 0 of
/// its tercet) picks up the middle rhyme of the last full tercet, which the
/// same rule yields.
pub fn rhyme_letter(number: u32) -> String {
    let tercet = tercet_index(number);
    let position = (number - 1) % 3;
    let rhyme = if position == 1 { tercet + 1 } else { tercet };
    to_alpha(rhyme + 1, false)
}

/// Annotate the cleaned lines of a canto as numbered verses.
pub fn annotate_verses(
    cantica: Cantica,
    canto: u32,
    lines: &[String],
    renderer: &SsmlRenderer,
) -> Vec<Verse> {
    lines
        .iter()
        .zip(1u32..)
        .map(|(text, number)| Verse {
            id: VerseId::new(cantica, canto, number),
            number,
            tercet: tercet_index(number),
            text_original: text.clone(),
            text_normalized: normalize_verse(text),
            last_word: last_word(text),
            rhyme_letter: rhyme_letter(number),
            ssml: renderer.verse(text),
        })
        .collect()
}

/// Group verses into tercets; a trailing group of one or two verses is kept.
pub fn group_tercets(verses: &[Verse]) -> Vec<Tercet> {
    verses
        .chunks(3)
        .map(|chunk| {
            let first = &chunk[0];
            let last = &chunk[chunk.len() - 1];
            Tercet {
                id: first.id.span(last.number),
                index: first.tercet,
                start_verse: first.number,
                end_verse: last.number,
                complete: chunk.len() == 3,
                rhyme_scheme: TERCET_SCHEME[..chunk.len()].to_string(),
                verses: chunk.iter().map(|v| v.id).collect(),
            }
        })
        .collect()
}

/// Slice verses into recitation blocks of `size` verses advancing by `step`.
///
/// The last block always ends at the final verse; no block is emitted past it.
pub fn recitation_blocks(
    verses: &[Verse],
    config: &BlockConfig,
    renderer: &SsmlRenderer,
) -> Vec<RecitationBlock> {
    if config.size == 0 || verses.is_empty() {
        return Vec::new();
    }

    let step = config.step();
    let mut blocks = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + config.size).min(verses.len());
        let chunk = &verses[start..end];
        let first = &chunk[0];
        let last = &chunk[chunk.len() - 1];
        blocks.push(RecitationBlock {
            id: span_id(first.id.cantica, first.id.canto, first.number, last.number),
            start_verse: first.number,
            end_verse: last.number,
            verses: chunk.iter().map(|v| v.id).collect(),
            ssml: renderer.block(chunk.iter().map(|v| (v.number, v.text_original.as_str()))),
        });

        if start + config.size >= verses.len() {
            break;
        }
        start += step;
    }
    blocks
}

/// Build the full document for a segmented canto.
pub fn build_document(
    segmented: &SegmentedCanto,
    source_file: &str,
    config: &PipelineConfig,
    renderer: &SsmlRenderer,
) -> CantoDocument {
    let verses = annotate_verses(segmented.cantica, segmented.canto, &segmented.lines, renderer);
    let tercets = group_tercets(&verses);
    let blocks = recitation_blocks(&verses, &config.blocks, renderer);

    log::debug!(
        "{} {}: {} verses, {} tercets, {} blocks",
        segmented.cantica,
        segmented.canto,
        verses.len(),
        tercets.len(),
        blocks.len()
    );

    CantoDocument {
        cantica: segmented.cantica,
        canto: segmented.canto,
        source: Source {
            file: source_file.to_string(),
            pages: [segmented.pages.0, segmented.pages.1],
        },
        counts: Counts {
            verses: verses.len(),
            tercets: tercets.len(),
            recitation_blocks: blocks.len(),
        },
        verses,
        tercets,
        recitation_blocks: blocks,
    }
}
