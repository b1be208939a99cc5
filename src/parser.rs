//! Transcript parser: raw export text to ordered message records.
//!
//! WhatsApp writes one delimiter per message:
//!
//! ```text
//! 1/15/24, 10:30 AM - Alice: Hello
//! 15/01/2024, 10:30 - Alice: Hello
//! ```
//!
//! The delimiter (not the newline) is the record boundary, so bodies spanning
//! several physical lines stay a single record. Exports vary by locale in
//! day/month order, year width, and clock notation; the parser resolves that
//! ambiguity *batch-first*: it picks the first candidate format that explains
//! every timestamp in the transcript, and only when no single format does,
//! falls back to per-row best effort (rows that still fail get a null
//! timestamp). This keeps one export from silently mixing day-first and
//! month-first readings.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{ChatlensError, Result};
use crate::message::{Message, Sender};

/// Timestamp delimiter: `D/M/YY, H:MM - ` with optional meridiem, tolerant of
/// 1- or 2-digit day/month/hour and 2- or 4-digit year.
const DELIMITER_PATTERN: &str = r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?:\s[APap][Mm])?\s-\s";

/// Shortest non-greedy run up to the first `: ` splits off the sender.
/// Dotall so a sender prefix is still found when the body is multi-line.
const SENDER_PATTERN: &str = r"(?s)^(.+?):\s(.*)$";

/// Candidate timestamp formats, in trial order: day-first before month-first,
/// 24-hour before 12-hour. Each includes the trailing `" - "` of the raw
/// delimiter match.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%y, %H:%M - ",
    "%d/%m/%Y, %H:%M - ",
    "%m/%d/%y, %H:%M - ",
    "%m/%d/%Y, %H:%M - ",
    "%d/%m/%y, %I:%M %p - ",
    "%d/%m/%Y, %I:%M %p - ",
    "%m/%d/%y, %I:%M %p - ",
    "%m/%d/%Y, %I:%M %p - ",
];

/// Parser for exported chat transcripts.
///
/// Compiles its patterns once; reusable across transcripts.
///
/// # Example
///
/// ```
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse_str("1/1/23, 10:00 - Alice: hello\n")?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct TranscriptParser {
    delimiter: Regex,
    sender: Regex,
}

impl TranscriptParser {
    /// Creates a parser with the standard delimiter and sender patterns.
    pub fn new() -> Self {
        Self {
            // Both patterns are static and known-valid
            delimiter: Regex::new(DELIMITER_PATTERN).unwrap(),
            sender: Regex::new(SENDER_PATTERN).unwrap(),
        }
    }

    /// Parses a transcript file.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::Io`] if the file cannot be read;
    /// [`ChatlensError::UnparseableTranscript`] if it contains no timestamp
    /// delimiters at all.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content).map_err(|e| match e {
            ChatlensError::UnparseableTranscript { path: None } => {
                ChatlensError::unparseable_file(path)
            }
            other => other,
        })
    }

    /// Parses raw transcript text.
    ///
    /// Returns one record per delimiter match, in transcript order. Text
    /// before the first delimiter (the export header) is discarded.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::UnparseableTranscript`] when no delimiter matches;
    /// callers must treat that as a hard failure for the whole transcript
    /// rather than rendering zeroed analytics. Individual timestamps that
    /// resist every candidate format are *not* errors: those records carry a
    /// null timestamp and drop out of temporal aggregations only.
    pub fn parse_str(&self, raw: &str) -> Result<Vec<Message>> {
        let matches: Vec<regex::Match<'_>> = self.delimiter.find_iter(raw).collect();
        if matches.is_empty() {
            return Err(ChatlensError::unparseable());
        }

        let stamps: Vec<&str> = matches.iter().map(|m| m.as_str()).collect();
        let timestamps = parse_timestamps(&stamps);

        let mut records = Vec::with_capacity(matches.len());
        for (i, m) in matches.iter().enumerate() {
            let end = matches.get(i + 1).map_or(raw.len(), |next| next.start());
            let body = trim_line_terminator(&raw[m.end()..end]);

            let (sender, text) = self.split_sender(body);
            let mut record = Message::new(sender, text);
            if let Some(ts) = timestamps[i] {
                record = record.with_timestamp(ts);
            }
            records.push(record);
        }

        debug!(records = records.len(), "parsed transcript");
        Ok(records)
    }

    /// Splits a leading `Sender: ` prefix off a message body.
    ///
    /// Bodies without one are system/notification lines.
    fn split_sender(&self, body: &str) -> (Sender, String) {
        match self.sender.captures(body) {
            Some(caps) => (Sender::named(&caps[1]), caps[2].to_string()),
            None => (Sender::System, body.to_string()),
        }
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses raw transcript text with a fresh [`TranscriptParser`].
pub fn parse_transcript(raw: &str) -> Result<Vec<Message>> {
    TranscriptParser::new().parse_str(raw)
}

/// Drops the line terminator separating a body from the next delimiter.
fn trim_line_terminator(body: &str) -> &str {
    let body = body.strip_suffix('\n').unwrap_or(body);
    body.strip_suffix('\r').unwrap_or(body)
}

/// Parses every raw delimiter string in the batch.
///
/// Batch-consistent first: the first format in [`DATE_FORMATS`] that parses
/// *every* stamp wins, so one export never mixes date conventions. If no
/// format explains the whole batch, falls back to lenient per-row parsing;
/// rows that still fail become `None` rather than aborting the parse.
fn parse_timestamps(stamps: &[&str]) -> Vec<Option<NaiveDateTime>> {
    for format in DATE_FORMATS {
        let parsed: std::result::Result<Vec<NaiveDateTime>, _> = stamps
            .iter()
            .map(|s| NaiveDateTime::parse_from_str(s, format))
            .collect();

        if let Ok(all) = parsed {
            debug!(format, "date format explains every timestamp in the batch");
            return all.into_iter().map(Some).collect();
        }
    }

    warn!("no single date format explains the whole batch; using per-row fallback");
    stamps
        .iter()
        .map(|s| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        })
        .collect()
}
