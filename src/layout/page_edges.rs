use super::*;

const MIN_REPEATED_PAGES: usize = 3;
const MAX_EDGE_LINE_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageEdgeStats {
    pub header_lines_removed: usize,
    pub footer_lines_removed: usize,
}

/// Removes running headers and footers: a first (or last) line whose
/// normalized text opens (or closes) at least three pages.
pub fn strip_repeated_page_edges(pages: &mut [Vec<Line>]) -> PageEdgeStats {
    let header_candidates = detect_repeated_edge_lines(pages, true);
    let footer_candidates = detect_repeated_edge_lines(pages, false);
    let mut stats = PageEdgeStats::default();

    if header_candidates.is_empty() && footer_candidates.is_empty() {
        return stats;
    }

    for lines in pages.iter_mut() {
        if let Some(first) = lines.first() {
            if header_candidates.contains_key(&normalize_edge_line(&first.text)) {
                lines.remove(0);
                stats.header_lines_removed += 1;
            }
        }

        if let Some(last) = lines.last() {
            if footer_candidates.contains_key(&normalize_edge_line(&last.text)) {
                lines.pop();
                stats.footer_lines_removed += 1;
            }
        }
    }

    debug!(
        headers = stats.header_lines_removed,
        footers = stats.footer_lines_removed,
        "stripped repeated page edges"
    );
    stats
}

fn detect_repeated_edge_lines(pages: &[Vec<Line>], header: bool) -> HashMap<String, usize> {
    let mut counts = HashMap::<String, usize>::new();
    for lines in pages {
        let candidate = if header { lines.first() } else { lines.last() };
        let Some(candidate) = candidate else {
            continue;
        };

        let normalized = normalize_edge_line(&candidate.text);
        if normalized.is_empty() || normalized.chars().count() > MAX_EDGE_LINE_CHARS {
            continue;
        }
        *counts.entry(normalized).or_insert(0) += 1;
    }

    counts.retain(|_, count| *count >= MIN_REPEATED_PAGES);
    counts
}

fn normalize_edge_line(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}
