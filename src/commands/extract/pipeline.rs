use super::*;

#[derive(Debug, Clone, Default)]
pub(super) struct DocumentReconstruction {
    pub(super) paragraphs: Vec<String>,
    /// Each paragraph's lines joined with `\n`, parallel to `paragraphs`.
    pub(super) paragraph_blocks: Vec<String>,
    pub(super) page_reports: Vec<PageReport>,
    pub(super) edge_stats: PageEdgeStats,
}

impl DocumentReconstruction {
    /// Reconstructed paragraphs separated by blank lines, one source line per
    /// text line, so the segmenter classifies title and author lines on their
    /// own.
    pub(super) fn document_text(&self) -> String {
        self.paragraph_blocks.join("\n\n")
    }
}

/// Builds lines for every page, optionally strips running headers and
/// footers, then reconstructs paragraphs page by page in page order.
pub(super) fn reconstruct_document(
    pages: &[PageTokens],
    params: &LayoutParams,
    strip_page_edges: bool,
) -> DocumentReconstruction {
    let mut page_lines = pages
        .iter()
        .map(|page| build_lines(&page.tokens, params))
        .collect::<Vec<Vec<Line>>>();

    let edge_stats = if strip_page_edges {
        strip_repeated_page_edges(&mut page_lines)
    } else {
        PageEdgeStats::default()
    };

    let mut reconstruction = DocumentReconstruction {
        edge_stats,
        ..DocumentReconstruction::default()
    };

    for (page, lines) in pages.iter().zip(&page_lines) {
        let page_result = reconstruct_page(lines, params);
        reconstruction.page_reports.push(PageReport {
            page_number: page.page_number,
            token_count: page.tokens.len(),
            line_count: lines.len(),
            paragraph_count: page_result.paragraphs.len(),
            thresholds: (!lines.is_empty()).then_some(page_result.thresholds),
            breaks: page_result
                .breaks
                .iter()
                .map(|(line_index, reason)| ParagraphBreak {
                    line_index: *line_index,
                    reason: *reason,
                })
                .collect(),
        });
        reconstruction.paragraphs.extend(page_result.paragraphs);
        reconstruction.paragraph_blocks.extend(
            page_result
                .paragraph_lines
                .iter()
                .map(|block| block.join("\n")),
        );
    }

    reconstruction
}

pub(super) fn should_run_ocr(mode: OcrMode, positional_text_empty: bool) -> bool {
    match mode {
        OcrMode::Off => false,
        OcrMode::Auto => positional_text_empty,
        OcrMode::Force => true,
    }
}

pub(super) fn default_title(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|value| value.to_str())
        .map(|value| value.replace(['_', '-'], " ").trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "Untitled study".to_string())
}
