//! Cleanup and segmentation of already-assembled text.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::trace;

use crate::cli::SentenceMode;
use crate::model::{ParagraphReport, VocabularyEntry};

mod normalize;
mod segment;
mod sentences;
mod vocabulary;

pub use normalize::{normalize_line_endings, normalize_text};
pub use segment::Segmenter;
pub use sentences::SentenceSplitter;
pub use vocabulary::VocabularyExtractor;

/// Splits `text` into runs of non-blank lines. A line holding only whitespace
/// separates two blocks; consecutive separators collapse.
fn blank_line_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::<Vec<&str>>::new();
    let mut current = Vec::<&str>::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line);
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Paragraph and sentence segmentation bundled for callers that want the
/// final per-paragraph sentence lists.
#[derive(Debug)]
pub struct TextPipeline {
    segmenter: Segmenter,
    splitter: SentenceSplitter,
    mode: SentenceMode,
}

impl TextPipeline {
    pub fn new(mode: SentenceMode) -> Result<Self> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            splitter: SentenceSplitter::new()?,
            mode,
        })
    }

    pub fn paragraphs(&self, text: &str) -> Vec<ParagraphReport> {
        self.segmenter
            .split_paragraphs(text)
            .into_iter()
            .map(|paragraph| {
                let sentences = self.splitter.split(&paragraph, self.mode);
                ParagraphReport {
                    text: paragraph,
                    sentences,
                }
            })
            .collect()
    }
}
