//! Line-level cleanup and verse text helpers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Short upper-case lines: section titles, running heads in small caps
    static ref RE_CAPS_LINE: Regex = Regex::new(r"^[A-Z\s\.\-]+$").unwrap();

    /// Runs of whitespace
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Soft hyphen (U+00AD), left behind by justified typesetting.
const SOFT_HYPHEN: char = '\u{00AD}';

/// Maximum word count for an all-caps line to be treated as a title.
const MAX_CAPS_TITLE_WORDS: usize = 4;

/// Remove soft hyphens and surrounding whitespace.
pub fn clean_line(line: &str) -> String {
    line.replace(SOFT_HYPHEN, "").trim().to_string()
}

/// Split a page into cleaned, non-empty lines.
pub fn page_lines(page: &str) -> Vec<String> {
    page.lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Check for short all-caps lines such as `PREFAZIONE` or `NOTE AL TESTO`.
pub fn is_caps_title(line: &str) -> bool {
    RE_CAPS_LINE.is_match(line) && line.split_whitespace().count() <= MAX_CAPS_TITLE_WORDS
}

/// Count word characters (letters, digits, underscore).
pub fn word_char_count(line: &str) -> usize {
    line.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .count()
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{2018}' | '\u{02BC}' | '`')
}

/// Normalized form of a verse for full-text indexing.
///
/// Lower-cases, folds typographic apostrophes to `'`, replaces every other
/// non-alphanumeric character by a space and collapses whitespace.
pub fn normalize_verse(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|c| *c != SOFT_HYPHEN)
        .map(|c| {
            if is_apostrophe(c) {
                '\''
            } else if c.is_alphanumeric() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase();

    RE_WHITESPACE.replace_all(folded.trim(), " ").into_owned()
}

/// Final word of a verse, lower-cased (the rhyme word).
///
/// Words are runs of letters and apostrophes; an empty string is returned
/// for lines without letters.
pub fn last_word(text: &str) -> String {
    text.split(|c: char| !(c.is_alphabetic() || is_apostrophe(c)))
        .filter(|token| token.chars().any(char::is_alphabetic))
        .last()
        .map(str::to_lowercase)
        .unwrap_or_default()
}
