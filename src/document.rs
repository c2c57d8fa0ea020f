//! # Document sentence chunking
//!
//! Page text extraction is an external collaborator ([`TextExtractor`]); so
//! is sentence tokenization ([`SentenceTokenizer`]). [`extract_sentences`]
//! wires the two together: pages are joined with a single space, the result
//! is trimmed, and the text is split into sentences.
//!
//! ## Example
//!
//! ```rust
//! use bitga::document::{extract_sentences, PlainTextExtractor, PunctuationTokenizer};
//!
//! let bytes = "First page. Still first!\x0cSecond page?".as_bytes();
//! let doc = extract_sentences(&PlainTextExtractor, &PunctuationTokenizer, bytes).unwrap();
//!
//! assert_eq!(doc.page_count, 2);
//! assert_eq!(doc.sentences, vec!["First page.", "Still first!", "Second page?"]);
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeneticError, Result};

/// Pulls the text of each page out of an encoded document.
pub trait TextExtractor {
    /// Returns one string per page. Pages without text yield an empty string.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Document` if the document cannot be read.
    fn extract_pages(&self, document: &[u8]) -> Result<Vec<String>>;
}

/// Splits running text into sentences.
pub trait SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Reads UTF-8 text, with form feeds separating pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_pages(&self, document: &[u8]) -> Result<Vec<String>> {
        let text = std::str::from_utf8(document).map_err(|e| {
            GeneticError::Document(format!("Document is not valid UTF-8: {}", e))
        })?;
        Ok(text.split('\x0c').map(str::to_string).collect())
    }
}

/// Ends a sentence at `.`, `!` or `?` (optionally followed by closing quotes
/// or brackets) when whitespace or the end of text comes next.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationTokenizer;

impl SentenceTokenizer for PunctuationTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut pending = false;

        for (idx, c) in text.char_indices() {
            if matches!(c, '.' | '!' | '?') {
                pending = true;
            } else if pending && c.is_whitespace() {
                push_trimmed(&mut sentences, &text[start..idx]);
                start = idx;
                pending = false;
            } else if !(pending && matches!(c, '"' | '\'' | '”' | '’' | ')' | ']')) {
                pending = false;
            }
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }
}

fn push_trimmed(sentences: &mut Vec<String>, chunk: &str) {
    let chunk = chunk.trim();
    if !chunk.is_empty() {
        sentences.push(chunk.to_string());
    }
}

/// Text and sentences of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSentences {
    pub page_count: usize,
    pub full_text: String,
    pub sentences: Vec<String>,
}

impl DocumentSentences {
    /// Number of characters in the extracted text.
    pub fn char_count(&self) -> usize {
        self.full_text.chars().count()
    }

    /// Characters `range.start..range.end` of the text, or `None` if the text
    /// is shorter than `range.end`.
    pub fn excerpt(&self, range: Range<usize>) -> Option<String> {
        if range.start > range.end || self.char_count() < range.end {
            return None;
        }
        Some(
            self.full_text
                .chars()
                .skip(range.start)
                .take(range.end - range.start)
                .collect(),
        )
    }

    /// The first `n` sentences.
    pub fn head(&self, n: usize) -> &[String] {
        &self.sentences[..n.min(self.sentences.len())]
    }
}

/// Extracts a document's text and splits it into sentences.
///
/// # Errors
///
/// Returns the extractor's error if the document cannot be read, and
/// `GeneticError::EmptyDocument` if no text was extracted.
pub fn extract_sentences<E, T>(
    extractor: &E,
    tokenizer: &T,
    document: &[u8],
) -> Result<DocumentSentences>
where
    E: TextExtractor + ?Sized,
    T: SentenceTokenizer + ?Sized,
{
    let pages = extractor.extract_pages(document)?;
    let full_text = pages.join(" ").trim().to_string();

    if full_text.is_empty() {
        return Err(GeneticError::EmptyDocument);
    }

    let sentences = tokenizer.tokenize(&full_text);
    debug!(
        pages = pages.len(),
        chars = full_text.len(),
        sentences = sentences.len(),
        "document chunked"
    );

    Ok(DocumentSentences {
        page_count: pages.len(),
        full_text,
        sentences,
    })
}
