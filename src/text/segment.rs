use super::*;

/// Lines that carry document furniture rather than body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonBodyKind {
    Title,
    Author,
    Chapter,
}

impl NonBodyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Chapter => "chapter",
        }
    }
}

enum LinePattern {
    TitleCase,
    Regex(&'static str),
}

const NON_BODY_DETECTORS: [(NonBodyKind, LinePattern); 4] = [
    (NonBodyKind::Title, LinePattern::TitleCase),
    (NonBodyKind::Author, LinePattern::Regex(r"(?i)^By\s+[A-Z]")),
    (
        NonBodyKind::Chapter,
        LinePattern::Regex(r"(?i)^\d+\s+CHAPTER\s+\d+"),
    ),
    (NonBodyKind::Chapter, LinePattern::Regex(r"(?i)^CHAPTER\s+\d+")),
];

const TITLE_MIN_WORDS: usize = 2;
const TITLE_MAX_WORDS: usize = 7;
const TITLE_CASE_RATIO: f64 = 0.7;
const TITLE_BREAKING_PUNCTUATION: [char; 6] = ['.', '?', '!', ':', ';', ','];

// A sentence end, then "(n)", then the capital opening the next paragraph.
const EMBEDDED_MARKER_PATTERN: &str = r"[.!?]\s*\(\d+\)\s+[A-Z]";
const INLINE_MARKER_PATTERN: &str = r"\s*\(\d+\)\s+";
/// Leading paragraph numbers such as "1.", "(2)" or "3 -". The group repeats,
/// so "1. 2) Text" loses both markers in one pass; a line that opens with
/// bare numbers loses all of them too ("2024 2025 budgets rose." becomes
/// "budgets rose.").
const LEADING_MARKER_PATTERN: &str = r"^(?:\(?\d+\)?[.)\-—\s]+)+";

#[derive(Debug)]
enum LineMatcher {
    TitleCase,
    Pattern(Regex),
}

#[derive(Debug)]
struct LineDetector {
    kind: NonBodyKind,
    matcher: LineMatcher,
}

impl LineDetector {
    fn matches(&self, line: &str) -> bool {
        match &self.matcher {
            LineMatcher::TitleCase => looks_like_title(line),
            LineMatcher::Pattern(regex) => regex.is_match(line),
        }
    }
}

#[derive(Debug)]
pub struct Segmenter {
    detectors: Vec<LineDetector>,
    embedded_marker: Regex,
    inline_marker: Regex,
    leading_marker: Regex,
}

impl Segmenter {
    pub fn new() -> Result<Self> {
        let detectors = NON_BODY_DETECTORS
            .iter()
            .map(|(kind, pattern)| -> Result<LineDetector> {
                let matcher = match pattern {
                    LinePattern::TitleCase => LineMatcher::TitleCase,
                    LinePattern::Regex(source) => {
                        LineMatcher::Pattern(Regex::new(source).with_context(|| {
                            format!("failed to compile {} line regex", kind.as_str())
                        })?)
                    }
                };
                Ok(LineDetector {
                    kind: *kind,
                    matcher,
                })
            })
            .collect::<Result<Vec<LineDetector>>>()?;

        Ok(Self {
            detectors,
            embedded_marker: Regex::new(EMBEDDED_MARKER_PATTERN)
                .context("failed to compile embedded paragraph marker regex")?,
            inline_marker: Regex::new(INLINE_MARKER_PATTERN)
                .context("failed to compile inline paragraph marker regex")?,
            leading_marker: Regex::new(LEADING_MARKER_PATTERN)
                .context("failed to compile leading paragraph marker regex")?,
        })
    }

    pub fn classify_line(&self, line: &str) -> Option<NonBodyKind> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        self.detectors
            .iter()
            .find(|detector| detector.matches(line))
            .map(|detector| detector.kind)
    }

    /// Splits document text into body paragraphs. Never returns an empty list:
    /// blank input yields a single empty string.
    pub fn split_paragraphs(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![String::new()];
        }

        let normalized = normalize_line_endings(text);
        let mut paragraphs = Vec::<String>::new();

        for block in blank_line_blocks(&normalized) {
            let body = self.body_lines(block.into_iter());
            if body.is_empty() {
                continue;
            }
            paragraphs.extend(self.split_on_embedded_markers(&body.join(" ")));
        }

        if paragraphs.is_empty() {
            let body = self.body_lines(normalized.split('\n'));
            if !body.is_empty() {
                paragraphs.extend(self.split_on_embedded_markers(&body.join(" ")));
            }

            if paragraphs.is_empty() {
                paragraphs.push(normalized.trim().to_string());
            }
        }

        let cleaned = paragraphs
            .iter()
            .filter_map(|paragraph| self.clean_fragment(paragraph))
            .collect::<Vec<String>>();

        if cleaned.is_empty() {
            paragraphs
        } else {
            cleaned
        }
    }

    pub fn strip_leading_marker(&self, text: &str) -> String {
        self.leading_marker.replace(text, "").into_owned()
    }

    fn body_lines<'a>(&self, lines: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        lines
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| match self.classify_line(line) {
                Some(kind) => {
                    trace!(kind = kind.as_str(), line = %line, "dropped non-body line");
                    false
                }
                None => true,
            })
            .collect()
    }

    fn split_on_embedded_markers(&self, combined: &str) -> Vec<String> {
        let split_points = self
            .embedded_marker
            .find_iter(combined)
            .map(|found| found.start() + 1)
            .collect::<Vec<usize>>();

        if split_points.is_empty() {
            let cleaned = self.strip_leading_marker(combined);
            let cleaned = cleaned.trim();
            return if cleaned.is_empty() {
                Vec::new()
            } else {
                vec![cleaned.to_string()]
            };
        }

        let mut parts = Vec::<&str>::new();
        let mut current = 0usize;
        for split_point in split_points {
            let part = combined[current..split_point].trim();
            if !part.is_empty() {
                parts.push(part);
            }
            current = split_point;
        }

        let tail = combined[current..].trim();
        if !tail.is_empty() {
            parts.push(tail);
        }

        parts
            .into_iter()
            .filter_map(|part| self.clean_fragment(part))
            .collect()
    }

    fn clean_fragment(&self, fragment: &str) -> Option<String> {
        let without_inline = self.inline_marker.replace_all(fragment, " ");
        let without_leading = self.leading_marker.replace(&without_inline, "");
        let cleaned = without_leading.trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.to_string())
        }
    }
}

fn looks_like_title(line: &str) -> bool {
    let starts_uppercase = line
        .chars()
        .next()
        .map(char::is_uppercase)
        .unwrap_or(false);
    if !starts_uppercase {
        return false;
    }

    if line.contains(&TITLE_BREAKING_PUNCTUATION[..]) {
        return false;
    }

    let words = line.split_whitespace().collect::<Vec<&str>>();
    if !(TITLE_MIN_WORDS..=TITLE_MAX_WORDS).contains(&words.len()) {
        return false;
    }

    let title_case_count = words
        .iter()
        .filter(|word| {
            word.chars()
                .next()
                .map(char::is_uppercase)
                .unwrap_or(false)
        })
        .count();

    title_case_count as f64 >= words.len() as f64 * TITLE_CASE_RATIO
}
