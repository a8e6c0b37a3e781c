//! Geometric reconstruction of lines and paragraphs from positioned tokens.
//!
//! Nothing here performs I/O. Every threshold that depends on font size or
//! scan resolution is recomputed from the lines of the page being processed;
//! only the multipliers applied to those statistics are fixed.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::model::{Line, Token};

mod lines;
mod page_edges;
mod paragraphs;
mod stats;
#[cfg(test)]
mod tests;

pub use lines::build_lines;
pub use page_edges::{PageEdgeStats, strip_repeated_page_edges};
pub use paragraphs::{BreakReason, reconstruct_page};
pub use stats::LayoutThresholds;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Maximum distance between a token's top and the first token of the
    /// running line for the token to join that line.
    pub line_threshold: f64,
    pub fallback_base_height: f64,
    pub fallback_gap_ratio: f64,
    pub gap_median_factor: f64,
    pub gap_height_factor: f64,
    pub min_indent: f64,
    pub indent_height_factor: f64,
    pub dedent_factor: f64,
    pub sentence_gap_factor: f64,
    pub dehyphenate: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            line_threshold: 3.0,
            fallback_base_height: 12.0,
            fallback_gap_ratio: 0.4,
            gap_median_factor: 2.2,
            gap_height_factor: 1.3,
            min_indent: 12.0,
            indent_height_factor: 1.5,
            dedent_factor: 1.5,
            sentence_gap_factor: 1.2,
            dehyphenate: false,
        }
    }
}
