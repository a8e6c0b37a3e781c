use anyhow::Result;
use tracing::info;

use crate::cli::SegmentArgs;
use crate::model::SegmentationReport;
use crate::text::{TextPipeline, normalize_line_endings};
use crate::util::{print_json_pretty, read_text_input};

#[cfg(test)]
mod tests;

pub fn run(args: SegmentArgs) -> Result<()> {
    let raw = read_text_input(&args.input)?;

    let pipeline = TextPipeline::new(args.sentence_mode)?;
    let report = segment_text(&pipeline, &raw);

    info!(
        input = %args.input,
        sentence_mode = args.sentence_mode.as_str(),
        paragraphs = report.paragraphs.len(),
        "segmented text"
    );

    print_json_pretty(&report)
}

/// Plain text keeps its line structure so title and author lines are
/// classified one by one.
fn segment_text(pipeline: &TextPipeline, raw: &str) -> SegmentationReport {
    SegmentationReport {
        paragraphs: pipeline.paragraphs(&normalize_line_endings(raw)),
    }
}
