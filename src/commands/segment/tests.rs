use super::*;
use crate::cli::SentenceMode;

fn pipeline() -> TextPipeline {
    TextPipeline::new(SentenceMode::Strict).expect("pipeline should build")
}

#[test]
fn title_at_top_of_a_block_is_dropped() {
    let report = segment_text(
        &pipeline(),
        "Title Goes Here\r\nThis is the body. It has two sentences.\r\n",
    );

    assert_eq!(report.paragraphs.len(), 1);
    assert_eq!(
        report.paragraphs[0].text,
        "This is the body. It has two sentences."
    );
    assert_eq!(
        report.paragraphs[0].sentences,
        vec!["This is the body.", "It has two sentences."]
    );
}

#[test]
fn wrapped_body_lines_are_joined_and_furniture_removed() {
    let raw = "The Long Road Home\nBy Mara Quill\n\nChapter 4\nThe rain had not stopped\nfor three days.\n\nNobody left the house.";
    let report = segment_text(&pipeline(), raw);

    let texts = report
        .paragraphs
        .iter()
        .map(|paragraph| paragraph.text.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(
        texts,
        vec![
            "The rain had not stopped for three days.",
            "Nobody left the house."
        ]
    );
}
