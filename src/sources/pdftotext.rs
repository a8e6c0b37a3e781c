use super::*;

const BBOX_PATTERN: &str = r#"(?s)<page\b[^>]*>|<word\s+xMin="([^"]*)"\s+yMin="([^"]*)"\s+xMax="([^"]*)"\s+yMax="([^"]*)"\s*>(.*?)</word>"#;

/// Word boxes from the PDF text layer, one entry per page (including pages
/// without any words).
pub fn extract_pdf_positioned_pages(
    pdf_path: &Path,
    max_pages: Option<usize>,
) -> Result<Vec<PageTokens>> {
    let mut command = Command::new("pdftotext");
    command.arg("-bbox").arg("-enc").arg("UTF-8").arg("-f").arg("1");
    if let Some(max_pages) = max_pages {
        command.arg("-l").arg(max_pages.to_string());
    }
    command.arg(pdf_path).arg("-");

    let raw = run_tool(&mut command, "pdftotext", pdf_path)?;
    parse_bbox_pages(&raw)
}

/// Layout-free text layer; page breaks become blank lines.
pub fn extract_pdf_plain_text(pdf_path: &Path, max_pages: Option<usize>) -> Result<String> {
    let mut command = Command::new("pdftotext");
    command.arg("-enc").arg("UTF-8").arg("-f").arg("1");
    if let Some(max_pages) = max_pages {
        command.arg("-l").arg(max_pages.to_string());
    }
    command.arg(pdf_path).arg("-");

    let raw = run_tool(&mut command, "pdftotext", pdf_path)?;
    Ok(raw.replace('\u{000C}', "\n\n"))
}

pub(super) fn parse_bbox_pages(raw: &str) -> Result<Vec<PageTokens>> {
    let pattern = Regex::new(BBOX_PATTERN).context("failed to compile pdftotext bbox regex")?;
    let mut pages = Vec::<PageTokens>::new();

    for captures in pattern.captures_iter(raw) {
        let Some(x_min) = captures.get(1) else {
            pages.push(PageTokens {
                page_number: pages.len() + 1,
                tokens: Vec::new(),
            });
            continue;
        };

        let coordinates = (
            x_min.as_str().parse::<f64>(),
            captures[2].parse::<f64>(),
            captures[4].parse::<f64>(),
        );
        let (Ok(x0), Ok(top), Ok(bottom)) = coordinates else {
            continue;
        };

        let text = decode_entities(captures[5].trim());
        if text.is_empty() {
            continue;
        }

        if pages.is_empty() {
            pages.push(PageTokens {
                page_number: 1,
                tokens: Vec::new(),
            });
        }
        if let Some(page) = pages.last_mut() {
            page.tokens.push(Token::new(text, top, bottom, x0));
        }
    }

    Ok(pages)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
