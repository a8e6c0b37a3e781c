use super::*;

pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Cleans a text blob that has no positional data: each blank-line-delimited
/// block becomes one line of single-spaced text, blocks separated by a blank
/// line.
pub fn normalize_text(raw: &str) -> String {
    let normalized = normalize_line_endings(raw);

    blank_line_blocks(&normalized)
        .into_iter()
        .map(|block| {
            block
                .iter()
                .flat_map(|line| line.split_whitespace())
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<String>>()
        .join("\n\n")
}
