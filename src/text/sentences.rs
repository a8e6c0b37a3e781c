use super::*;

const ELLIPSIS: &str = "...";
const ELLIPSIS_PLACEHOLDER: &str = "\u{E000}ELLIPSIS\u{E000}";

#[derive(Debug)]
pub struct SentenceSplitter {
    strict_boundary: Regex,
    loose_boundary: Regex,
}

impl SentenceSplitter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            strict_boundary: Regex::new(r"[.!?]\s+[A-Z]")
                .context("failed to compile strict sentence boundary regex")?,
            loose_boundary: Regex::new(r"[.!?]\s+")
                .context("failed to compile loose sentence boundary regex")?,
        })
    }

    /// Splits a paragraph into sentences after `.`, `?` or `!` followed by
    /// whitespace. Strict mode also requires an uppercase letter after the
    /// whitespace. An ellipsis never ends a sentence.
    pub fn split(&self, text: &str, mode: SentenceMode) -> Vec<String> {
        let protected = text.replace(ELLIPSIS, ELLIPSIS_PLACEHOLDER);
        let boundary = match mode {
            SentenceMode::Strict => &self.strict_boundary,
            SentenceMode::Loose => &self.loose_boundary,
        };

        let mut pieces = Vec::<&str>::new();
        let mut start = 0usize;
        for found in boundary.find_iter(&protected) {
            let end = found.start() + 1;
            pieces.push(&protected[start..end]);
            start = end;
        }
        pieces.push(&protected[start..]);

        pieces
            .into_iter()
            .map(|piece| piece.replace(ELLIPSIS_PLACEHOLDER, ELLIPSIS))
            .map(|sentence| sentence.trim().to_string())
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}
