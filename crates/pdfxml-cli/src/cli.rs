use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pdfxml::ColumnRange;

/// Extract text fragments and tables from pdftohtml `-xml` documents.
#[derive(Debug, Parser)]
#[command(name = "pdfxml", about, version)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Group text fragments into table rows by column position
    Tables(TablesArgs),

    /// List text fragments with coordinates
    Text {
        /// Path to the pdf2xml file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Apply Unicode normalization to fragment text
        #[arg(long, value_enum)]
        unicode_norm: Option<UnicodeNormArg>,
    },

    /// Show document and per-page information
    Info {
        /// Path to the pdf2xml file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = InfoFormat::Text)]
        format: InfoFormat,
    },

    /// Print the document outline as flattened bookmarks
    Outline {
        /// Path to the pdf2xml file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = InfoFormat::Text)]
        format: InfoFormat,
    },
}

/// Arguments of the `tables` subcommand.
#[derive(Debug, Args)]
pub struct TablesArgs {
    /// Path to the pdf2xml file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Column by horizontal range FROM:TO of fragment lefts (repeatable, in column order)
    #[arg(
        long = "range",
        value_name = "FROM:TO",
        value_parser = parse_column_range,
        allow_hyphen_values = true,
        conflicts_with = "positions",
        required_unless_present = "positions"
    )]
    pub ranges: Vec<ColumnRange>,

    /// Column centers, comma separated; each column spans the position +/- variance/2
    #[arg(long, value_name = "P1,P2,..", value_delimiter = ',', allow_negative_numbers = true)]
    pub positions: Vec<i64>,

    /// Width of each column around its position (used with --positions)
    #[arg(long, requires = "positions", conflicts_with = "ranges")]
    pub variance: Option<u32>,

    /// Number of column slots per row. Default: number of ranges or positions
    #[arg(long)]
    pub columns: Option<usize>,

    /// Lowest fragment top to include
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<i64>,

    /// Highest fragment top to include
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<i64>,

    /// Maximum distance below a row's first fragment that still counts as the same row
    #[arg(long, default_value_t = 0)]
    pub tolerance: u32,

    /// Drop rows with fewer filled columns
    #[arg(long, value_name = "N")]
    pub min_cells: Option<usize>,

    /// Drop rows where this column (0-indexed) is empty (repeatable)
    #[arg(long, value_name = "COL")]
    pub require: Vec<usize>,

    /// Drop rows where column COL does not match REGEX (repeatable)
    #[arg(long = "match", value_name = "COL=REGEX", value_parser = parse_column_pattern)]
    pub patterns: Vec<ColumnPattern>,

    /// Apply Unicode normalization to fragment text
    #[arg(long, value_enum)]
    pub unicode_norm: Option<UnicodeNormArg>,
}

/// A `--match` argument: column index and uncompiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPattern {
    pub column: usize,
    pub pattern: String,
}

fn parse_column_range(s: &str) -> Result<ColumnRange, String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{s}'"))?;
    let from: i64 = from
        .trim()
        .parse()
        .map_err(|_| format!("invalid range start: '{from}'"))?;
    let to: i64 = to
        .trim()
        .parse()
        .map_err(|_| format!("invalid range end: '{to}'"))?;
    Ok(ColumnRange::new(from, to))
}

fn parse_column_pattern(s: &str) -> Result<ColumnPattern, String> {
    let (column, pattern) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COL=REGEX, got '{s}'"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column index: '{column}'"))?;
    Ok(ColumnPattern {
        column,
        pattern: pattern.to_string(),
    })
}

/// Output format for fragment and table listings.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
    /// Comma-separated values
    Csv,
}

/// Output format for document summaries.
#[derive(Debug, Clone, ValueEnum)]
pub enum InfoFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// Unicode normalization form for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnicodeNormArg {
    /// Canonical Decomposition, followed by Canonical Composition
    Nfc,
    /// Canonical Decomposition
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition
    Nfkc,
    /// Compatibility Decomposition
    Nfkd,
}

impl UnicodeNormArg {
    /// Convert to the core library's `UnicodeNorm` enum.
    pub fn to_unicode_norm(self) -> pdfxml::UnicodeNorm {
        match self {
            UnicodeNormArg::Nfc => pdfxml::UnicodeNorm::Nfc,
            UnicodeNormArg::Nfd => pdfxml::UnicodeNorm::Nfd,
            UnicodeNormArg::Nfkc => pdfxml::UnicodeNorm::Nfkc,
            UnicodeNormArg::Nfkd => pdfxml::UnicodeNorm::Nfkd,
        }
    }
}
