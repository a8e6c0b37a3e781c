use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "docreflow",
    version,
    about = "Rebuild reading-order paragraphs and sentences from scanned or digital documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
    Segment(SegmentArgs),
    Study(StudyArgs),
    Vocab(VocabArgs),
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// PDF, image, token JSON or plain text file.
    pub input: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub title: Option<String>,

    /// Save the result as a study in this SQLite file.
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OcrMode::Auto)]
    pub ocr_mode: OcrMode,

    #[arg(long, default_value = "eng")]
    pub ocr_lang: String,

    #[arg(long)]
    pub max_pages: Option<usize>,

    #[arg(long, default_value_t = 3.0)]
    pub line_threshold: f64,

    #[arg(long, default_value_t = false)]
    pub dehyphenate: bool,

    #[arg(long, default_value_t = false)]
    pub keep_page_edges: bool,

    #[arg(long, value_enum, default_value_t = SentenceMode::Strict)]
    pub sentence_mode: SentenceMode,

    #[arg(long, default_value_t = false)]
    pub fail_on_empty: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OcrMode {
    Off,
    Auto,
    Force,
}

impl OcrMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Auto => "auto",
            Self::Force => "force",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SentenceMode {
    /// Break only before an uppercase letter.
    #[default]
    Strict,
    /// Break after any terminal punctuation followed by whitespace.
    Loose,
}

impl SentenceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Loose => "loose",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SegmentArgs {
    /// Plain text file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: String,

    #[arg(long, value_enum, default_value_t = SentenceMode::Strict)]
    pub sentence_mode: SentenceMode,
}

#[derive(Args, Debug, Clone)]
pub struct StudyArgs {
    #[arg(long)]
    pub db_path: PathBuf,

    #[command(subcommand)]
    pub action: StudyAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum StudyAction {
    List,
    Show {
        study_id: i64,
    },
    /// Record how far the learner has progressed.
    Step {
        study_id: i64,

        #[arg(long)]
        step: i64,
    },
    Delete {
        study_id: i64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct VocabArgs {
    #[arg(long)]
    pub db_path: PathBuf,

    #[command(subcommand)]
    pub action: VocabAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum VocabAction {
    List {
        #[arg(long)]
        study_id: Option<i64>,

        #[arg(long, default_value_t = false)]
        unknown_only: bool,
    },
    Add {
        word: String,

        #[arg(long, default_value = "")]
        meaning: String,

        #[arg(long)]
        study_id: Option<i64>,
    },
    Meaning {
        word_id: i64,

        meaning: String,
    },
    Mark {
        word_id: i64,

        #[arg(long, action = clap::ArgAction::Set)]
        known: bool,
    },
    Delete {
        word_id: i64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long)]
    pub db_path: PathBuf,
}
