//! Positioned-token and plain-text sources backed by poppler-utils and
//! tesseract, plus token JSON supplied by an external engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use regex::Regex;
use serde::Deserialize;

use crate::model::{PageTokenRecord, PageTokens, Token, TokenRecord};

mod pdftotext;
mod tesseract;
#[cfg(test)]
mod tests;
mod tokens_json;

pub use pdftotext::{extract_pdf_plain_text, extract_pdf_positioned_pages};
pub use tesseract::{extract_image_plain_text, extract_image_positioned_pages, ocr_pdf_pages};
pub use tokens_json::load_token_pages;

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff"];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SourceKind {
    Pdf,
    Image,
    TokensJson,
    PlainText,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|value| value.to_str())
            .map(|value| value.to_ascii_lowercase())
            .with_context(|| format!("input has no file extension: {}", path.display()))?;

        if extension == "pdf" {
            return Ok(Self::Pdf);
        }
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Ok(Self::Image);
        }
        if extension == "json" {
            return Ok(Self::TokensJson);
        }
        if extension == "txt" {
            return Ok(Self::PlainText);
        }

        bail!(
            "unsupported input type '.{}' for {}",
            extension,
            path.display()
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::TokensJson => "tokens_json",
            Self::PlainText => "plain_text",
        }
    }
}

pub fn command_available(program: &str, version_args: &[&str]) -> bool {
    Command::new(program).args(version_args).output().is_ok()
}

fn run_tool(command: &mut Command, program: &str, subject: &Path) -> Result<String> {
    let output = command
        .output()
        .with_context(|| format!("failed to execute {} for {}", program, subject.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "{} returned non-zero exit status for {}: {}",
            program,
            subject.display(),
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).replace('\u{0000}', ""))
}
