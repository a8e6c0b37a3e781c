use super::*;

#[test]
fn source_kind_follows_file_extension() {
    assert_eq!(
        SourceKind::from_path(Path::new("scan.PDF")).expect("pdf"),
        SourceKind::Pdf
    );
    assert_eq!(
        SourceKind::from_path(Path::new("photo.jpeg")).expect("image"),
        SourceKind::Image
    );
    assert_eq!(
        SourceKind::from_path(Path::new("ocr/tokens.json")).expect("json"),
        SourceKind::TokensJson
    );
    assert_eq!(
        SourceKind::from_path(Path::new("notes.txt")).expect("txt"),
        SourceKind::PlainText
    );
    assert!(SourceKind::from_path(Path::new("slides.pptx")).is_err());
    assert!(SourceKind::from_path(Path::new("README")).is_err());
}

#[test]
fn parse_bbox_pages_reads_words_per_page() {
    let raw = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN">
<html xmlns="http://www.w3.org/1999/xhtml">
<head><title></title></head>
<body>
<doc>
  <page width="612.000000" height="792.000000">
    <word xMin="72.000000" yMin="90.500000" xMax="110.200000" yMax="102.500000">Fish</word>
    <word xMin="114.000000" yMin="90.500000" xMax="150.000000" yMax="102.500000">&amp;</word>
    <word xMin="154.000000" yMin="90.500000" xMax="190.000000" yMax="102.500000">Chips</word>
  </page>
  <page width="612.000000" height="792.000000">
  </page>
  <page width="612.000000" height="792.000000">
    <word xMin="72.000000" yMin="100.000000" xMax="99.000000" yMax="112.000000">&lt;end&gt;</word>
  </page>
</doc>
</body>
</html>
"#;

    let pages = pdftotext::parse_bbox_pages(raw).expect("bbox output should parse");
    assert_eq!(pages.len(), 3);

    assert_eq!(pages[0].page_number, 1);
    let texts = pages[0]
        .tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(texts, vec!["Fish", "&", "Chips"]);
    assert_eq!(pages[0].tokens[0].top, 90.5);
    assert_eq!(pages[0].tokens[0].bottom, 102.5);
    assert_eq!(pages[0].tokens[0].x0, 72.0);

    assert!(pages[1].tokens.is_empty());
    assert_eq!(pages[2].page_number, 3);
    assert_eq!(pages[2].tokens[0].text, "<end>");
}

#[test]
fn parse_tsv_pages_keeps_confident_word_rows() {
    let raw = [
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext",
        "1\t1\t0\t0\t0\t0\t0\t0\t800\t600\t-1\t",
        "4\t1\t1\t1\t1\t0\t40\t50\t300\t20\t-1\t",
        "5\t1\t1\t1\t1\t1\t40\t50\t60\t20\t96.5\tHello",
        "5\t1\t1\t1\t1\t2\t110\t52\t70\t18\t91.2\tworld",
        "5\t1\t1\t1\t1\t3\t190\t52\t10\t18\t-1\t ",
        "5\t1\t1\t1\t2\t1\t40\t80\t70\t20\t88\tagain",
    ]
    .join("\n");

    let pages = tesseract::parse_tsv_pages(&raw);
    assert_eq!(pages.len(), 1);

    let tokens = &pages[0].tokens;
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], Token::new("Hello", 50.0, 70.0, 40.0));
    assert_eq!(tokens[1], Token::new("world", 52.0, 70.0, 110.0));
    assert_eq!(tokens[2].text, "again");
}

#[test]
fn parse_tsv_pages_returns_nothing_for_header_only_output() {
    let raw = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";
    assert!(tesseract::parse_tsv_pages(raw).is_empty());
}

#[test]
fn parse_token_pages_accepts_page_lists_and_flat_lists() {
    let paged = br#"[
        {"page": 4, "tokens": [{"text": "Hi", "top": 10, "height": 8, "left": 5}]},
        {"tokens": [{"text": "there", "top": 30, "bottom": 40, "x0": 6}]}
    ]"#;
    let pages = tokens_json::parse_token_pages(paged).expect("paged tokens should parse");
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].page_number, 4);
    assert_eq!(pages[0].tokens[0], Token::new("Hi", 10.0, 18.0, 5.0));
    assert_eq!(pages[1].page_number, 2);
    assert_eq!(pages[1].tokens[0], Token::new("there", 30.0, 40.0, 6.0));

    let flat = br#"[{"text": "solo", "top": 1.5, "x0": 2}]"#;
    let pages = tokens_json::parse_token_pages(flat).expect("flat tokens should parse");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].tokens[0], Token::new("solo", 1.5, 1.5, 2.0));
}

#[test]
fn parse_token_pages_rejects_malformed_json() {
    assert!(tokens_json::parse_token_pages(br#"{"tokens": 3}"#).is_err());
    assert!(tokens_json::parse_token_pages(b"not json").is_err());
}
