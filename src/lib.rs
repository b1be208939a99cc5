//! # Chatlens
//!
//! A Rust library for parsing exported WhatsApp-style chat transcripts into
//! structured records and computing descriptive statistics over them.
//!
//! ## Overview
//!
//! Two logical components:
//!
//! - [`parser`] — converts raw transcript text into an ordered sequence of
//!   typed [`Message`] records, using date-format detection and delimiter
//!   splitting. Format ambiguity (day-first vs month-first) is resolved
//!   batch-first: one format must explain every timestamp in the export
//!   before per-row best effort kicks in.
//! - [`analytics`] — pure query functions over the record slice, each
//!   optionally filtered by sender: message/word/media/link counts, busiest
//!   senders, word and emoji frequency, monthly and daily timelines, weekday
//!   and month activity, and an hour×weekday heatmap.
//!
//! The whole record sequence lives in memory for one analysis session; there
//! is no persistence and no streaming ingestion.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let raw = "1/1/23, 10:00 - Alice: hello friend\n\
//!                1/1/23, 10:05 - Bob: hi there\n\
//!                1/1/23, 10:06 - Alice has left\n";
//!
//!     let records = parse_transcript(raw)?;
//!     assert_eq!(records.len(), 3);
//!
//!     let stats = fetch_stats(&records, &SenderFilter::Overall);
//!     assert_eq!(stats.words, 7);
//!
//!     // One struct with every metric, e.g. for a dashboard
//!     let report = Report::build(&records, &SenderFilter::Overall);
//!     assert_eq!(report.busiest.len(), 3);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! A transcript with no recognizable timestamp delimiters fails hard with
//! [`ChatlensError::UnparseableTranscript`] — callers must not render zeroed
//! charts over it. Individual unparseable timestamps are *not* errors: those
//! records keep a null timestamp, stay in count/word/emoji metrics, and drop
//! out of temporal aggregations.
//!
//! ## Module Structure
//!
//! - [`parser`] — [`TranscriptParser`](parser::TranscriptParser),
//!   [`parse_transcript`](parser::parse_transcript)
//! - [`message`] — [`Message`], [`Sender`](message::Sender),
//!   [`Calendar`](message::Calendar)
//! - [`analytics`] — [`SenderFilter`](analytics::SenderFilter) and the
//!   metric functions
//! - [`report`] — [`Report`](report::Report), every metric in one struct
//! - [`export`] — CSV export of the record table (feature `csv-output`)
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — [`ChatlensError`], [`Result`]
//! - [`prelude`] — convenient re-exports

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
#[cfg(feature = "csv-output")]
pub mod export;
pub mod message;
pub mod parser;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{Message, Sender};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::message::{Calendar, GROUP_NOTIFICATION, MEDIA_OMITTED, Message, Sender};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse_transcript};

    // Analytics
    pub use crate::analytics::{
        SenderFilter, activity_heatmap, busiest_senders, daily_timeline, emoji_counts,
        fetch_stats, month_activity, monthly_timeline, most_common_words, sender_roster,
        weekday_activity, word_cloud_text,
    };

    // Aggregated report
    pub use crate::report::Report;

    // CSV export
    #[cfg(feature = "csv-output")]
    pub use crate::export::write_csv;
}
