use super::*;

fn token(text: &str, top: f64, bottom: f64, x0: f64) -> Token {
    Token::new(text, top, bottom, x0)
}

fn line(text: &str, top: f64, bottom: f64, x0: f64) -> Line {
    Line {
        text: text.to_string(),
        top,
        bottom,
        x0,
    }
}

fn paragraphs_of(lines: &[Line], params: &LayoutParams) -> Vec<String> {
    reconstruct_page(lines, params).paragraphs
}

#[test]
fn build_lines_groups_tokens_on_the_same_row_in_x_order() {
    let tokens = vec![
        token("world", 100.4, 110.0, 60.0),
        token("Second", 130.0, 140.0, 10.0),
        token("Hello", 101.2, 111.0, 10.0),
        token("row", 129.0, 139.5, 70.0),
    ];

    let lines = build_lines(&tokens, &LayoutParams::default());
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0].text, "Hello world");
    assert_eq!(lines[0].top, 100.4);
    assert_eq!(lines[0].bottom, 111.0);
    assert_eq!(lines[0].x0, 10.0);

    assert_eq!(lines[1].text, "Second row");
    assert_eq!(lines[1].top, 129.0);
    assert_eq!(lines[1].bottom, 140.0);
}

#[test]
fn build_lines_starts_new_line_beyond_threshold() {
    let tokens = vec![
        token("alpha", 10.0, 20.0, 0.0),
        token("beta", 13.0, 23.0, 40.0),
        token("gamma", 13.5, 23.5, 80.0),
    ];

    let lines = build_lines(&tokens, &LayoutParams::default());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "alpha beta");
    assert_eq!(lines[1].text, "gamma");
}

#[test]
fn build_lines_keeps_stray_token_and_drops_blank_tokens() {
    let tokens = vec![
        token("   ", 5.0, 15.0, 0.0),
        token("lonely", 300.0, 310.0, 200.0),
    ];

    let lines = build_lines(&tokens, &LayoutParams::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "lonely");
    assert!(lines.iter().all(|line| !line.text.is_empty()));
}

#[test]
fn build_lines_returns_nothing_for_empty_input() {
    assert!(build_lines(&[], &LayoutParams::default()).is_empty());
}

#[test]
fn median_handles_odd_even_and_empty_inputs() {
    assert_eq!(stats::median(&[3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(stats::median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    assert_eq!(stats::median(&[]), None);
}

#[test]
fn thresholds_fall_back_without_enough_lines() {
    let params = LayoutParams::default();

    let empty = LayoutThresholds::from_lines(&[], &params);
    assert_eq!(empty.base_height, 12.0);
    assert!((empty.median_gap - 4.8).abs() < 1e-9);
    assert!((empty.gap_threshold - 15.6).abs() < 1e-9);
    assert_eq!(empty.indent_threshold, 18.0);
    assert_eq!(empty.negative_indent_threshold, 27.0);

    let single = LayoutThresholds::from_lines(&[line("Only", 0.0, 20.0, 0.0)], &params);
    assert_eq!(single.base_height, 20.0);
    assert_eq!(single.median_gap, 8.0);
}

#[test]
fn thresholds_clamp_overlapping_lines_to_zero_gap() {
    let lines = vec![
        line("a", 0.0, 10.0, 0.0),
        line("b", 8.0, 18.0, 0.0),
        line("c", 20.0, 30.0, 0.0),
    ];

    let thresholds = LayoutThresholds::from_lines(&lines, &LayoutParams::default());
    assert_eq!(thresholds.median_gap, 1.0);
    assert_eq!(thresholds.gap_threshold, 13.0);
    assert_eq!(thresholds.indent_threshold, 15.0);
}

#[test]
fn intro_line_followed_by_dedented_body_forms_two_paragraphs() {
    let lines = vec![
        line("Intro Paragraph", 0.0, 10.0, 50.0),
        line("First line of body.", 40.0, 50.0, 10.0),
    ];

    let paragraphs = paragraphs_of(&lines, &LayoutParams::default());
    assert_eq!(
        paragraphs,
        vec![
            "Intro Paragraph".to_string(),
            "First line of body.".to_string()
        ]
    );
}

#[test]
fn tightly_set_lines_stay_in_one_paragraph() {
    let lines = vec![
        line("The quick brown fox", 0.0, 10.0, 10.0),
        line("jumps over the lazy", 12.0, 22.0, 10.0),
        line("dog near the river.", 24.0, 34.0, 11.0),
    ];

    let reconstruction = reconstruct_page(&lines, &LayoutParams::default());
    assert!(reconstruction.breaks.is_empty());
    assert_eq!(
        reconstruction.paragraphs,
        vec!["The quick brown fox jumps over the lazy dog near the river.".to_string()]
    );
}

#[test]
fn paragraph_lines_keep_the_source_line_texts() {
    let lines = vec![
        line("By the harbor", 0.0, 10.0, 10.0),
        line("the lamps were lit.", 12.0, 22.0, 10.0),
        line("Nobody came home.", 40.0, 50.0, 10.0),
    ];

    let reconstruction = reconstruct_page(&lines, &LayoutParams::default());
    assert_eq!(
        reconstruction.paragraph_lines,
        vec![
            vec!["By the harbor".to_string(), "the lamps were lit.".to_string()],
            vec!["Nobody came home.".to_string()],
        ]
    );
    assert_eq!(
        reconstruction.paragraphs,
        vec!["By the harbor the lamps were lit.", "Nobody came home."]
    );
}

#[test]
fn first_line_indent_opens_new_paragraph() {
    let lines = vec![
        line("ends the first paragraph", 0.0, 10.0, 10.0),
        line("and wraps here", 12.0, 22.0, 10.0),
        line("an indented opening line", 24.0, 34.0, 30.0),
        line("continues flush left", 36.0, 46.0, 10.0),
    ];

    let reconstruction = reconstruct_page(&lines, &LayoutParams::default());
    assert_eq!(reconstruction.breaks, vec![(2, BreakReason::Indent)]);
    assert_eq!(reconstruction.paragraphs.len(), 2);
    assert_eq!(
        reconstruction.paragraphs[1],
        "an indented opening line continues flush left"
    );
}

#[test]
fn vertical_gap_rule_takes_priority_over_indent() {
    let lines = vec![
        line("block one", 0.0, 10.0, 10.0),
        line("still block one", 12.0, 22.0, 10.0),
        line("block two", 22.0, 32.0, 10.0),
        line("far below and indented", 100.0, 110.0, 60.0),
    ];

    let reconstruction = reconstruct_page(&lines, &LayoutParams::default());
    assert_eq!(reconstruction.breaks, vec![(3, BreakReason::VerticalGap)]);
}

#[test]
fn sentence_end_with_extra_spacing_opens_new_paragraph() {
    let lines = vec![
        line("The first sentence runs on", 0.0, 10.0, 10.0),
        line("and ends here.", 12.0, 22.0, 10.0),
        line("Another paragraph starts.", 26.0, 36.0, 10.0),
        line("and continues", 38.0, 48.0, 10.0),
    ];

    let reconstruction = reconstruct_page(&lines, &LayoutParams::default());
    assert_eq!(
        reconstruction.breaks,
        vec![(2, BreakReason::SentenceSpacing)]
    );
    assert_eq!(
        reconstruction.paragraphs,
        vec![
            "The first sentence runs on and ends here.".to_string(),
            "Another paragraph starts. and continues".to_string(),
        ]
    );
}

#[test]
fn sentence_end_without_extra_spacing_does_not_break() {
    let previous = line("A complete sentence.", 0.0, 10.0, 10.0);
    let current = line("Next sentence here", 12.0, 22.0, 10.0);
    let thresholds = LayoutThresholds::from_lines(
        &[previous.clone(), current.clone()],
        &LayoutParams::default(),
    );

    assert_eq!(
        paragraphs::classify_break(&previous, &current, &thresholds),
        None
    );
}

#[test]
fn reconstruction_partitions_lines_without_loss_or_duplication() {
    let lines = vec![
        line("Heading Line", 0.0, 14.0, 80.0),
        line("Body starts here and", 40.0, 50.0, 10.0),
        line("keeps going.", 52.0, 62.0, 10.0),
        line("Indented start", 64.0, 74.0, 40.0),
        line("wraps again.", 76.0, 86.0, 10.0),
        line("Far away", 200.0, 210.0, 10.0),
    ];

    let paragraphs = paragraphs_of(&lines, &LayoutParams::default());
    let rejoined = paragraphs.join(" ");
    let expected = lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<&str>>()
        .join(" ");
    assert_eq!(rejoined, expected);
    assert!(paragraphs.len() >= 3);
}

#[test]
fn dehyphenation_joins_split_words_when_enabled() {
    let lines = vec![
        line("an extraordi-", 0.0, 10.0, 10.0),
        line("nary result", 12.0, 22.0, 10.0),
        line("and a well-", 24.0, 34.0, 10.0),
        line("Known name", 36.0, 46.0, 10.0),
    ];

    let params = LayoutParams {
        dehyphenate: true,
        ..LayoutParams::default()
    };
    assert_eq!(
        paragraphs_of(&lines, &params),
        vec!["an extraordinary result and a well- Known name".to_string()]
    );

    assert_eq!(
        paragraphs_of(&lines, &LayoutParams::default()),
        vec!["an extraordi- nary result and a well- Known name".to_string()]
    );
}

#[test]
fn empty_page_reconstructs_to_no_paragraphs() {
    let reconstruction = reconstruct_page(&[], &LayoutParams::default());
    assert!(reconstruction.paragraphs.is_empty());
    assert_eq!(reconstruction.thresholds.base_height, 12.0);
}

#[test]
fn repeated_headers_and_footers_are_stripped_from_three_pages() {
    let page = |number: usize| {
        vec![
            line("The  Daily   Reader", 0.0, 10.0, 10.0),
            line(&format!("Body text of page {number}."), 30.0, 40.0, 10.0),
            line("Confidential draft", 700.0, 710.0, 10.0),
        ]
    };
    let mut pages = vec![page(1), page(2), page(3)];

    let stats = strip_repeated_page_edges(&mut pages);
    assert_eq!(stats.header_lines_removed, 3);
    assert_eq!(stats.footer_lines_removed, 3);
    for (index, lines) in pages.iter().enumerate() {
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, format!("Body text of page {}.", index + 1));
    }
}

#[test]
fn page_edges_seen_on_fewer_than_three_pages_are_kept() {
    let mut pages = vec![
        vec![line("Header", 0.0, 10.0, 0.0), line("one", 20.0, 30.0, 0.0)],
        vec![line("Header", 0.0, 10.0, 0.0), line("two", 20.0, 30.0, 0.0)],
    ];

    let stats = strip_repeated_page_edges(&mut pages);
    assert_eq!(stats, PageEdgeStats::default());
    assert_eq!(pages[0].len(), 2);
}
