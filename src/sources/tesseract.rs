use super::*;

const TSV_WORD_LEVEL: i64 = 5;
const TSV_COLUMNS: usize = 12;
const OCR_RENDER_DPI: u32 = 300;

/// Word boxes recognized in an image, grouped by the TSV page number.
pub fn extract_image_positioned_pages(image_path: &Path, lang: &str) -> Result<Vec<PageTokens>> {
    let raw = run_tesseract(image_path, lang, true)?;
    Ok(parse_tsv_pages(&raw))
}

pub fn extract_image_plain_text(image_path: &Path, lang: &str) -> Result<String> {
    run_tesseract(image_path, lang, false)
}

/// Renders each PDF page to PNG and recognizes it. Used when the PDF has no
/// usable text layer.
pub fn ocr_pdf_pages(pdf_path: &Path, page_count: usize, lang: &str) -> Result<Vec<PageTokens>> {
    let mut pages = Vec::<PageTokens>::with_capacity(page_count);

    for page_number in 1..=page_count {
        let png_path = render_pdf_page(pdf_path, page_number)?;
        let recognized = run_tesseract(&png_path, lang, true);
        let _ = fs::remove_file(&png_path);

        let tokens = parse_tsv_pages(&recognized?)
            .into_iter()
            .flat_map(|page| page.tokens)
            .collect::<Vec<Token>>();
        pages.push(PageTokens {
            page_number,
            tokens,
        });
    }

    Ok(pages)
}

fn run_tesseract(image_path: &Path, lang: &str, tsv: bool) -> Result<String> {
    let mut command = Command::new("tesseract");
    command.arg(image_path).arg("stdout").arg("-l").arg(lang);
    if tsv {
        command.arg("tsv");
    }

    let raw = run_tool(&mut command, "tesseract", image_path)?;
    Ok(raw.trim().to_string())
}

fn render_pdf_page(pdf_path: &Path, page_number: usize) -> Result<PathBuf> {
    let pdf_stem = pdf_path
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("pdf");
    let safe_stem = pdf_stem
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() {
                character
            } else {
                '_'
            }
        })
        .collect::<String>();

    let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let output_root = std::env::temp_dir().join(format!(
        "docreflow_ocr_{}_{}_{}_{}",
        safe_stem,
        std::process::id(),
        page_number,
        stamp
    ));
    let png_path = PathBuf::from(format!("{}.png", output_root.display()));

    let mut command = Command::new("pdftoppm");
    command
        .arg("-f")
        .arg(page_number.to_string())
        .arg("-l")
        .arg(page_number.to_string())
        .arg("-r")
        .arg(OCR_RENDER_DPI.to_string())
        .arg("-singlefile")
        .arg("-png")
        .arg(pdf_path)
        .arg(&output_root);
    run_tool(&mut command, "pdftoppm", pdf_path)?;

    if !png_path.exists() {
        bail!(
            "pdftoppm did not produce expected image for {} page {}",
            pdf_path.display(),
            page_number
        );
    }

    Ok(png_path)
}

pub(super) fn parse_tsv_pages(raw: &str) -> Vec<PageTokens> {
    let mut pages = BTreeMap::<i64, Vec<Token>>::new();

    for (index, row) in raw.lines().enumerate() {
        if index == 0 && row.starts_with("level") {
            continue;
        }

        let columns = row.split('\t').collect::<Vec<&str>>();
        if columns.len() < TSV_COLUMNS {
            continue;
        }

        let level = columns[0].trim().parse::<i64>().unwrap_or(0);
        if level != TSV_WORD_LEVEL {
            continue;
        }

        let confidence = columns[10].trim().parse::<f64>().unwrap_or(-1.0);
        let text = columns[11].trim();
        if text.is_empty() || confidence < 0.0 {
            continue;
        }

        let page_number = columns[1].trim().parse::<i64>().unwrap_or(1);
        let left = columns[6].trim().parse::<f64>();
        let top = columns[7].trim().parse::<f64>();
        let height = columns[9].trim().parse::<f64>();
        let (Ok(left), Ok(top), Ok(height)) = (left, top, height) else {
            continue;
        };

        pages
            .entry(page_number)
            .or_default()
            .push(Token::new(text, top, top + height, left));
    }

    pages
        .into_iter()
        .enumerate()
        .map(|(index, (_, tokens))| PageTokens {
            page_number: index + 1,
            tokens,
        })
        .collect()
}
