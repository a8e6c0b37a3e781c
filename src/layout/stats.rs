use super::*;

/// Per-page statistics and the paragraph-break thresholds derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutThresholds {
    pub base_height: f64,
    pub median_gap: f64,
    pub gap_threshold: f64,
    pub indent_threshold: f64,
    pub negative_indent_threshold: f64,
    pub sentence_gap_threshold: f64,
}

impl LayoutThresholds {
    pub fn from_lines(lines: &[Line], params: &LayoutParams) -> Self {
        let heights = lines.iter().map(Line::height).collect::<Vec<f64>>();
        let base_height = median(&heights).unwrap_or(params.fallback_base_height);

        let median_gap = if lines.len() < 2 {
            base_height * params.fallback_gap_ratio
        } else {
            let gaps = lines
                .windows(2)
                .map(|pair| (pair[1].top - pair[0].bottom).max(0.0))
                .collect::<Vec<f64>>();
            median(&gaps).unwrap_or(base_height * params.fallback_gap_ratio)
        };

        let gap_threshold =
            (median_gap * params.gap_median_factor).max(base_height * params.gap_height_factor);
        let indent_threshold = params
            .min_indent
            .max(base_height * params.indent_height_factor);

        Self {
            base_height,
            median_gap,
            gap_threshold,
            indent_threshold,
            negative_indent_threshold: indent_threshold * params.dedent_factor,
            sentence_gap_threshold: median_gap * params.sentence_gap_factor,
        }
    }
}

/// Standard median: the middle value, or the mean of the two middle values
/// for an even count. `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}
