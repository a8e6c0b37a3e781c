use super::*;

const MIN_WORD_CHARS: usize = 3;

#[derive(Debug)]
pub struct VocabularyExtractor {
    word_regex: Regex,
}

impl VocabularyExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word_regex: Regex::new(r"\b[a-zA-Z]+\b")
                .context("failed to compile vocabulary word regex")?,
        })
    }

    /// Distinct lowercase Latin-alphabet words of at least three letters,
    /// sorted, each with an empty meaning for the learner to fill in.
    pub fn extract(&self, text: &str) -> Vec<VocabularyEntry> {
        let lowered = text.to_lowercase();

        self.word_regex
            .find_iter(&lowered)
            .map(|found| found.as_str())
            .filter(|word| word.len() >= MIN_WORD_CHARS)
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(|word| VocabularyEntry {
                word: word.to_string(),
                meaning: String::new(),
            })
            .collect()
    }
}
