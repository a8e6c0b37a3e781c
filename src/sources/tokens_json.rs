use super::*;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenDocument {
    Pages(Vec<PageTokenRecord>),
    Flat(Vec<TokenRecord>),
}

pub fn load_token_pages(path: &Path) -> Result<Vec<PageTokens>> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_token_pages(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

pub(super) fn parse_token_pages(raw: &[u8]) -> Result<Vec<PageTokens>> {
    let document: TokenDocument =
        serde_json::from_slice(raw).context("token JSON is neither a page list nor a token list")?;

    let pages = match document {
        TokenDocument::Pages(records) => records
            .into_iter()
            .enumerate()
            .map(|(index, record)| PageTokens {
                page_number: record.page.unwrap_or(index + 1),
                tokens: record.tokens.into_iter().map(Token::from).collect(),
            })
            .collect(),
        TokenDocument::Flat(records) => vec![PageTokens {
            page_number: 1,
            tokens: records.into_iter().map(Token::from).collect(),
        }],
    };

    Ok(pages)
}
