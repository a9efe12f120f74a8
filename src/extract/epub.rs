//! EPUB text extraction.
//!
//! Spine items are read in reading order with the `epub` crate; each XHTML
//! item is reduced to text with `scraper`. Block elements become paragraphs
//! separated by blank lines.

use std::io::Cursor;
use std::sync::OnceLock;

use scraper::{Html, Selector};

use super::{DocumentFormat, ExtractError, Extractor};

pub struct EpubExtractor;

impl Extractor for EpubExtractor {
    fn extract(&self, data: Vec<u8>) -> Result<String, ExtractError> {
        let mut doc = epub::doc::EpubDoc::from_reader(Cursor::new(data))
            .map_err(|e| ExtractError::Parse { format: DocumentFormat::Epub, message: e.to_string() })?;

        let mut chapters = Vec::new();
        for chapter_idx in 0..doc.get_num_chapters() {
            doc.set_current_chapter(chapter_idx);
            let Some((content, _mime)) = doc.get_current_str() else {
                continue;
            };
            let text = html_to_text(&content);
            if !text.is_empty() {
                chapters.push(text);
            }
        }

        if chapters.is_empty() {
            return Err(ExtractError::Empty { format: DocumentFormat::Epub });
        }
        Ok(chapters.join("\n\n"))
    }
}

fn block_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse("h1, h2, h3, h4, h5, h6, p, li, blockquote, pre").expect("static selector")
    })
}

fn body_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("body").expect("static selector"))
}

/// Reduce one XHTML spine item to plain text.
///
/// Falls back to the whole `<body>` text when the item has no recognised
/// block elements (some converters emit bare `<div>` trees).
pub(crate) fn html_to_text(content: &str) -> String {
    let html = Html::parse_document(content);

    let blocks: Vec<String> = html
        .select(block_selector())
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .collect();
    if !blocks.is_empty() {
        return blocks.join("\n\n");
    }

    html.select(body_selector())
        .next()
        .map(|body| normalize_whitespace(&body.text().collect::<String>()))
        .unwrap_or_default()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "epub_test.rs"]
mod tests;
