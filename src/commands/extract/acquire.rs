use super::*;

/// Text recovered from one input, before segmentation.
#[derive(Debug, Clone)]
pub(super) struct AcquiredDocument {
    pub(super) text: String,
    pub(super) page_count: usize,
    pub(super) reconstruction: DocumentReconstruction,
    pub(super) backend: &'static str,
    pub(super) reason: String,
    pub(super) warnings: Vec<String>,
}

impl AcquiredDocument {
    fn from_reconstruction(
        page_count: usize,
        reconstruction: DocumentReconstruction,
        backend: &'static str,
        reason: &str,
    ) -> Self {
        Self {
            text: reconstruction.document_text(),
            page_count,
            reconstruction,
            backend,
            reason: reason.to_string(),
            warnings: Vec::new(),
        }
    }

    fn plain(text: String, page_count: usize, backend: &'static str, reason: &str) -> Self {
        Self {
            text,
            page_count,
            reconstruction: DocumentReconstruction::default(),
            backend,
            reason: reason.to_string(),
            warnings: Vec::new(),
        }
    }
}

pub(super) fn acquire_document(
    args: &ExtractArgs,
    kind: SourceKind,
    params: &LayoutParams,
) -> Result<AcquiredDocument> {
    let strip_page_edges = !args.keep_page_edges;

    match kind {
        SourceKind::PlainText => {
            let raw = std::fs::read_to_string(&args.input)
                .with_context(|| format!("failed to read {}", args.input.display()))?;
            Ok(AcquiredDocument::plain(
                normalize_line_endings(&raw),
                0,
                "plain_text",
                "plain_text_input",
            ))
        }
        SourceKind::TokensJson => {
            let pages = load_token_pages(&args.input)?;
            let reconstruction = reconstruct_document(&pages, params, strip_page_edges);
            Ok(AcquiredDocument::from_reconstruction(
                pages.len(),
                reconstruction,
                "tokens_json",
                "positioned_tokens",
            ))
        }
        SourceKind::Image => acquire_image(args, params, strip_page_edges),
        SourceKind::Pdf => acquire_pdf(args, params, strip_page_edges),
    }
}

fn acquire_image(
    args: &ExtractArgs,
    params: &LayoutParams,
    strip_page_edges: bool,
) -> Result<AcquiredDocument> {
    if !command_available("tesseract", &["--version"]) {
        bail!(
            "tesseract is required to read image input {}",
            args.input.display()
        );
    }

    let pages = extract_image_positioned_pages(&args.input, &args.ocr_lang)?;
    let reconstruction = reconstruct_document(&pages, params, strip_page_edges);
    if !reconstruction.paragraphs.is_empty() {
        return Ok(AcquiredDocument::from_reconstruction(
            pages.len(),
            reconstruction,
            "ocr",
            "ocr_image_input",
        ));
    }

    let raw = extract_image_plain_text(&args.input, &args.ocr_lang)?;
    let mut document =
        AcquiredDocument::plain(normalize_text(&raw), pages.len(), "ocr_plain", "ocr_no_word_boxes");
    document
        .warnings
        .push("tesseract returned no word boxes; used plain OCR text".to_string());
    Ok(document)
}

fn acquire_pdf(
    args: &ExtractArgs,
    params: &LayoutParams,
    strip_page_edges: bool,
) -> Result<AcquiredDocument> {
    let text_layer = extract_pdf_positioned_pages(&args.input, args.max_pages)?;
    let page_count = text_layer.len();
    let mut document = AcquiredDocument::from_reconstruction(
        page_count,
        reconstruct_document(&text_layer, params, strip_page_edges),
        "text_layer",
        "text_layer_default",
    );
    if document.reconstruction.paragraphs.is_empty() {
        document.reason = "text_layer_empty".to_string();
    }

    let ocr_mode = args.ocr_mode;
    if page_count > 0 && should_run_ocr(ocr_mode, document.reconstruction.paragraphs.is_empty()) {
        apply_pdf_ocr(args, params, strip_page_edges, &mut document)?;
    }

    if document.reconstruction.paragraphs.is_empty() {
        let raw = extract_pdf_plain_text(&args.input, args.max_pages)?;
        let text = normalize_text(&raw);
        if !text.is_empty() {
            warn!(path = %args.input.display(), "positional reconstruction empty; using plain text layer");
            document.text = text;
            document.backend = "text_layer_plain";
            document.reason = "positional_reconstruction_empty".to_string();
        }
    }

    Ok(document)
}

fn apply_pdf_ocr(
    args: &ExtractArgs,
    params: &LayoutParams,
    strip_page_edges: bool,
    document: &mut AcquiredDocument,
) -> Result<()> {
    let ocr_mode = args.ocr_mode;

    if !command_available("pdftoppm", &["-v"]) || !command_available("tesseract", &["--version"])
    {
        let message = format!(
            "OCR mode '{}' requested for {} pages but pdftoppm/tesseract are unavailable",
            ocr_mode.as_str(),
            document.page_count
        );
        if matches!(ocr_mode, OcrMode::Force) {
            bail!(message);
        }
        warn!(path = %args.input.display(), "{message}");
        document.warnings.push(message);
        document.reason = "ocr_unavailable_text_layer_fallback".to_string();
        return Ok(());
    }

    info!(
        path = %args.input.display(),
        pages = document.page_count,
        ocr_mode = ocr_mode.as_str(),
        "running OCR"
    );

    match ocr_pdf_pages(&args.input, document.page_count, &args.ocr_lang) {
        Ok(pages) => {
            let reconstruction = reconstruct_document(&pages, params, strip_page_edges);
            if reconstruction.paragraphs.is_empty() && matches!(ocr_mode, OcrMode::Auto) {
                document.warnings.push(format!(
                    "OCR text was empty for {} in auto mode",
                    args.input.display()
                ));
                document.reason = "ocr_empty_text_layer_fallback".to_string();
                return Ok(());
            }

            document.text = reconstruction.document_text();
            document.reconstruction = reconstruction;
            document.backend = "ocr";
            document.reason = if matches!(ocr_mode, OcrMode::Force) {
                "ocr_force_mode".to_string()
            } else {
                "ocr_auto_empty_text_layer".to_string()
            };
        }
        Err(error) => {
            if matches!(ocr_mode, OcrMode::Force) {
                return Err(error)
                    .with_context(|| format!("failed OCR extraction for {}", args.input.display()));
            }

            document.warnings.push(format!(
                "OCR fallback failed for {}: {}",
                args.input.display(),
                error
            ));
            document.reason = "ocr_failed_text_layer_fallback".to_string();
        }
    }

    Ok(())
}
