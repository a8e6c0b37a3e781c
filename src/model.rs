use serde::{Deserialize, Serialize};

use crate::layout::{BreakReason, LayoutThresholds};

/// A recognized word with its bounding box, in whatever units the source
/// engine reports (PDF points or image pixels).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub top: f64,
    pub bottom: f64,
    pub x0: f64,
}

impl Token {
    pub fn new(text: impl Into<String>, top: f64, bottom: f64, x0: f64) -> Self {
        Self {
            text: text.into(),
            top,
            bottom,
            x0,
        }
    }
}

/// Token as supplied by an external collaborator. Accepts either `bottom` or
/// `height`, and either `x0` or `left`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRecord {
    pub text: String,
    pub top: f64,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(alias = "left")]
    pub x0: f64,
}

impl From<TokenRecord> for Token {
    fn from(record: TokenRecord) -> Self {
        let bottom = record
            .bottom
            .or_else(|| record.height.map(|height| record.top + height))
            .unwrap_or(record.top);

        Token {
            text: record.text,
            top: record.top,
            bottom,
            x0: record.x0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageTokenRecord {
    #[serde(default)]
    pub page: Option<usize>,
    pub tokens: Vec<TokenRecord>,
}

/// Tokens for one page or image, in source order.
#[derive(Debug, Clone, Default)]
pub struct PageTokens {
    pub page_number: usize,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub text: String,
    pub top: f64,
    pub bottom: f64,
    pub x0: f64,
}

impl Line {
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphReport {
    pub text: String,
    pub sentences: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: String,
    pub meaning: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub page_number: usize,
    pub token_count: usize,
    pub line_count: usize,
    pub paragraph_count: usize,
    pub thresholds: Option<LayoutThresholds>,
    pub breaks: Vec<ParagraphBreak>,
}

/// A paragraph opened at `line_index` of the page because `reason` fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphBreak {
    pub line_index: usize,
    pub reason: BreakReason,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub report_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub backend: String,
    pub backend_reason: String,
    pub page_count: usize,
    pub header_lines_removed: usize,
    pub footer_lines_removed: usize,
    pub pages: Vec<PageReport>,
    pub paragraphs: Vec<ParagraphReport>,
    pub words: Vec<VocabularyEntry>,
    pub study_id: Option<i64>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentationReport {
    pub paragraphs: Vec<ParagraphReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudySummary {
    pub id: i64,
    pub title: String,
    pub source_path: Option<String>,
    pub current_step: i64,
    pub word_count: i64,
    pub last_studied_at: String,
    pub created_at: String,
}

/// One saved study with its segmented paragraphs.
#[derive(Debug, Clone, Serialize)]
pub struct StudyDetail {
    pub id: i64,
    pub title: String,
    pub source_path: Option<String>,
    pub source_sha256: Option<String>,
    pub english_text: String,
    pub paragraphs: Vec<ParagraphReport>,
    pub current_step: i64,
    pub word_count: i64,
    pub last_studied_at: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordRow {
    pub id: i64,
    pub word: String,
    pub meaning: String,
    pub study_id: Option<i64>,
    pub study_title: Option<String>,
    pub known: bool,
}
