use super::*;

pub fn run(args: ExtractArgs) -> Result<()> {
    let kind = SourceKind::from_path(&args.input)?;
    let params = LayoutParams {
        line_threshold: args.line_threshold,
        dehyphenate: args.dehyphenate,
        ..LayoutParams::default()
    };

    info!(
        path = %args.input.display(),
        kind = kind.as_str(),
        ocr_mode = args.ocr_mode.as_str(),
        sentence_mode = args.sentence_mode.as_str(),
        "starting extraction"
    );

    let source_sha256 = sha256_file(&args.input)?;
    let mut document = acquire_document(&args, kind, &params)?;

    if document.text.trim().is_empty() {
        if args.fail_on_empty {
            bail!("no extractable text found in {}", args.input.display());
        }
        warn!(path = %args.input.display(), "no extractable text found");
        document
            .warnings
            .push(format!("no extractable text found in {}", args.input.display()));
    }

    let pipeline = TextPipeline::new(args.sentence_mode)?;
    let paragraphs = pipeline.paragraphs(&document.text);
    let words = VocabularyExtractor::new()?.extract(&document.text);

    let study_id = match &args.db_path {
        Some(db_path) => {
            let title = args
                .title
                .clone()
                .unwrap_or_else(|| default_title(&args.input));
            let source_path = args.input.display().to_string();
            let mut connection = open_store(db_path)?;
            let study = NewStudy {
                title: &title,
                source_path: Some(&source_path),
                source_sha256: Some(&source_sha256),
                english_text: &document.text,
                paragraphs: &paragraphs,
                current_step: 1,
                words: &words,
            };
            Some(insert_study(&mut connection, &study)?)
        }
        None => None,
    };

    let report = ExtractionReport {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        source_path: args.input.display().to_string(),
        source_sha256,
        backend: document.backend.to_string(),
        backend_reason: document.reason,
        page_count: document.page_count,
        header_lines_removed: document.reconstruction.edge_stats.header_lines_removed,
        footer_lines_removed: document.reconstruction.edge_stats.footer_lines_removed,
        pages: document.reconstruction.page_reports,
        paragraphs,
        words,
        study_id,
        warnings: document.warnings,
    };

    info!(
        backend = %report.backend,
        pages = report.page_count,
        paragraphs = report.paragraphs.len(),
        words = report.words.len(),
        warnings = report.warnings.len(),
        "extraction complete"
    );

    match &args.output {
        Some(output) => {
            write_json_pretty(output, &report)?;
            info!(path = %output.display(), "wrote extraction report");
        }
        None => print_json_pretty(&report)?,
    }

    Ok(())
}
