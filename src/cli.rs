//! Command-line interface definition using clap.
//!
//! [`ReportFormat`] is usable outside the CLI context as well:
//!
//! ```rust
//! use chatlens::cli::ReportFormat;
//!
//! let format: ReportFormat = "json".parse().unwrap();
//! assert_eq!(format, ReportFormat::Json);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Parse an exported WhatsApp chat transcript and print descriptive
/// statistics: message counts, busiest senders, word and emoji frequency,
/// and temporal activity patterns.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --sender Alice
    chatlens chat.txt --format json
    chatlens chat.txt --export records.csv")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Restrict statistics to one sender (default: the whole group)
    #[arg(short, long, value_name = "NAME")]
    pub sender: Option<String>,

    /// Report output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Also write the parsed record table to this CSV file
    #[cfg(feature = "csv-output")]
    #[arg(long, value_name = "PATH")]
    pub export: Option<String>,
}

/// Report rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable sections on stdout
    #[default]
    Text,

    /// The full report as a JSON document
    Json,
}

impl ReportFormat {
    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json"]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}
