use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::cli::{ExtractArgs, OcrMode};
use crate::layout::{
    LayoutParams, PageEdgeStats, build_lines, reconstruct_page, strip_repeated_page_edges,
};
use crate::model::{ExtractionReport, Line, PageReport, PageTokens, ParagraphBreak};
use crate::sources::{
    SourceKind, command_available, extract_image_plain_text, extract_image_positioned_pages,
    extract_pdf_plain_text, extract_pdf_positioned_pages, load_token_pages, ocr_pdf_pages,
};
use crate::store::{NewStudy, insert_study, open_store};
use crate::text::{
    TextPipeline, VocabularyExtractor, normalize_line_endings, normalize_text,
};
use crate::util::{now_utc_string, print_json_pretty, sha256_file, write_json_pretty};

const REPORT_VERSION: u32 = 1;

mod acquire;
mod pipeline;
mod run;

pub use run::run;

use acquire::*;
use pipeline::*;
