use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakReason {
    VerticalGap,
    Indent,
    Dedent,
    SentenceSpacing,
}

impl BreakReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VerticalGap => "vertical_gap",
            Self::Indent => "indent",
            Self::Dedent => "dedent",
            Self::SentenceSpacing => "sentence_spacing",
        }
    }
}

struct BreakRule {
    reason: BreakReason,
    applies: fn(&Line, &Line, &LayoutThresholds) -> bool,
}

/// Evaluated top to bottom; the first rule that applies starts a new paragraph.
const BREAK_RULES: [BreakRule; 4] = [
    BreakRule {
        reason: BreakReason::VerticalGap,
        applies: breaks_on_vertical_gap,
    },
    BreakRule {
        reason: BreakReason::Indent,
        applies: breaks_on_indent,
    },
    BreakRule {
        reason: BreakReason::Dedent,
        applies: breaks_on_dedent,
    },
    BreakRule {
        reason: BreakReason::SentenceSpacing,
        applies: breaks_on_sentence_spacing,
    },
];

fn breaks_on_vertical_gap(previous: &Line, current: &Line, thresholds: &LayoutThresholds) -> bool {
    current.top - previous.bottom > thresholds.gap_threshold
}

fn breaks_on_indent(previous: &Line, current: &Line, thresholds: &LayoutThresholds) -> bool {
    current.x0 - previous.x0 >= thresholds.indent_threshold
}

fn breaks_on_dedent(previous: &Line, current: &Line, thresholds: &LayoutThresholds) -> bool {
    current.x0 - previous.x0 <= -thresholds.negative_indent_threshold
}

fn breaks_on_sentence_spacing(
    previous: &Line,
    current: &Line,
    thresholds: &LayoutThresholds,
) -> bool {
    let ends_sentence = previous
        .text
        .trim_end()
        .ends_with(|character: char| matches!(character, '.' | '?' | '!'));
    let starts_uppercase = current
        .text
        .trim_start()
        .chars()
        .next()
        .map(char::is_uppercase)
        .unwrap_or(false);

    ends_sentence
        && starts_uppercase
        && current.top - previous.bottom > thresholds.sentence_gap_threshold
}

pub fn classify_break(
    previous: &Line,
    current: &Line,
    thresholds: &LayoutThresholds,
) -> Option<BreakReason> {
    BREAK_RULES
        .iter()
        .find(|rule| (rule.applies)(previous, current, thresholds))
        .map(|rule| rule.reason)
}

#[derive(Debug, Clone)]
pub struct PageReconstruction {
    pub thresholds: LayoutThresholds,
    pub paragraphs: Vec<String>,
    /// The line texts behind each entry of `paragraphs`, after dehyphenation.
    pub paragraph_lines: Vec<Vec<String>>,
    /// Index of the line that opened each paragraph after the first, with the
    /// rule that fired.
    pub breaks: Vec<(usize, BreakReason)>,
}

/// Groups the ordered lines of one page into paragraphs.
pub fn reconstruct_page(lines: &[Line], params: &LayoutParams) -> PageReconstruction {
    let thresholds = LayoutThresholds::from_lines(lines, params);
    debug!(
        lines = lines.len(),
        base_height = thresholds.base_height,
        median_gap = thresholds.median_gap,
        gap_threshold = thresholds.gap_threshold,
        indent_threshold = thresholds.indent_threshold,
        "derived layout thresholds"
    );

    let mut paragraph_lines = Vec::<Vec<String>>::new();
    let mut breaks = Vec::<(usize, BreakReason)>::new();
    let mut current = Vec::<String>::new();

    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            if let Some(reason) = classify_break(&lines[index - 1], line, &thresholds) {
                trace!(line = index, rule = reason.as_str(), "paragraph break");
                breaks.push((index, reason));
                flush_paragraph(&mut paragraph_lines, &mut current);
            }
        }

        append_line(&mut current, &line.text, params.dehyphenate);
    }
    flush_paragraph(&mut paragraph_lines, &mut current);

    let paragraphs = paragraph_lines
        .iter()
        .map(|block| block.join(" "))
        .collect::<Vec<String>>();

    PageReconstruction {
        thresholds,
        paragraphs,
        paragraph_lines,
        breaks,
    }
}

fn flush_paragraph(paragraphs: &mut Vec<Vec<String>>, current: &mut Vec<String>) {
    let block = std::mem::take(current)
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<String>>();
    if !block.is_empty() {
        paragraphs.push(block);
    }
}

fn append_line(paragraph: &mut Vec<String>, line: &str, dehyphenate: bool) {
    if dehyphenate {
        if let Some(previous) = paragraph.last_mut() {
            if should_merge_hyphenated_pair(previous, line) {
                let kept = previous.trim_end().trim_end_matches('-').len();
                previous.truncate(kept);
                previous.push_str(line.trim_start());
                return;
            }
        }
    }

    paragraph.push(line.to_string());
}

fn should_merge_hyphenated_pair(current: &str, next: &str) -> bool {
    let left = current.trim_end();
    if !left.ends_with('-') {
        return false;
    }

    let starts_with_lowercase = next
        .trim_start()
        .chars()
        .next()
        .map(char::is_lowercase)
        .unwrap_or(false);
    if !starts_with_lowercase {
        return false;
    }

    left.trim_end_matches('-')
        .chars()
        .last()
        .map(char::is_alphabetic)
        .unwrap_or(false)
}
