//! SSML markup for recitation.
//!
//! Each verse becomes an `<s>` element followed by a `<break>`. The pause is
//! the longer tercet pause when the verse closes a tercet, which is decided
//! by its canonical number (`number % 3 == 0`), not by its position in the
//! rendered range. A range starting mid-tercet therefore still pauses at the
//! real tercet boundaries.

use crate::config::SsmlConfig;
use std::borrow::Cow;

/// Escape text for inclusion in XML character data or attributes.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Renders verses into SSML fragments and documents.
#[derive(Debug, Clone, Default)]
pub struct SsmlRenderer {
    config: SsmlConfig,
}

impl SsmlRenderer {
    /// Create a renderer with the given pause settings.
    pub fn new(config: SsmlConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    pub fn config(&self) -> &SsmlConfig {
        &self.config
    }

    /// Markup for a single verse, without any pause.
    pub fn verse(&self, text: &str) -> String {
        format!("<s>{}</s>", escape_xml(text))
    }

    /// Pause duration after verse `number`.
    pub fn pause_after(&self, number: u32) -> u32 {
        if number % 3 == 0 {
            self.config.tercet_pause_ms
        } else {
            self.config.verse_pause_ms
        }
    }

    /// Paragraph of verses with pauses, from `(number, text)` pairs.
    pub fn block<'a, I>(&self, verses: I) -> String
    where
        I: IntoIterator<Item = (u32, &'a str)>,
    {
        let mut out = String::from("<p>");
        for (number, text) in verses {
            out.push_str(&self.verse(text));
            out.push_str(&format!("<break time='{}ms'/>", self.pause_after(number)));
        }
        out.push_str("</p>");
        out
    }

    /// Standalone `<speak>` document for a range of verses.
    pub fn document<'a, I>(&self, verses: I) -> String
    where
        I: IntoIterator<Item = (u32, &'a str)>,
    {
        format!(
            "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" xml:lang=\"{}\">{}</speak>\n",
            escape_xml(&self.config.language),
            self.block(verses)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("plain"), "plain");
        assert!(matches!(escape_xml("plain"), Cow::Borrowed(_)));
        assert_eq!(escape_xml("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_xml("l'amor"), "l&apos;amor");
    }

    #[test]
    fn test_verse_markup() {
        let renderer = SsmlRenderer::default();
        assert_eq!(renderer.verse("Nel mezzo"), "<s>Nel mezzo</s>");
    }

    #[test]
    fn test_block_pauses_follow_tercets() {
        let renderer = SsmlRenderer::default();
        let block = renderer.block(vec![(1, "uno"), (2, "due"), (3, "tre"), (4, "quattro")]);
        assert_eq!(
            block,
            "<p><s>uno</s><break time='120ms'/><s>due</s><break time='120ms'/>\
             <s>tre</s><break time='220ms'/><s>quattro</s><break time='120ms'/></p>"
        );
    }

    #[test]
    fn test_block_starting_mid_tercet() {
        let renderer = SsmlRenderer::default();
        let block = renderer.block(vec![(62, "b"), (63, "c"), (64, "a")]);
        assert_eq!(
            block,
            "<p><s>b</s><break time='120ms'/><s>c</s><break time='220ms'/>\
             <s>a</s><break time='120ms'/></p>"
        );
    }

    #[test]
    fn test_configured_pauses() {
        let renderer = SsmlRenderer::new(
            SsmlConfig::default()
                .with_verse_pause_ms(300)
                .with_tercet_pause_ms(900),
        );
        assert_eq!(renderer.pause_after(2), 300);
        assert_eq!(renderer.pause_after(3), 900);
    }

    #[test]
    fn test_document_wraps_speak() {
        let renderer = SsmlRenderer::default();
        let doc = renderer.document(vec![(1, "uno")]);
        assert!(doc.starts_with("<speak version=\"1.0\""));
        assert!(doc.contains("xml:lang=\"it-IT\""));
        assert!(doc.ends_with("</p></speak>\n"));
    }
}
