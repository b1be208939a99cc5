//! Headline counts and per-sender activity.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{SenderFilter, count_by_first_seen, filtered};
use crate::message::Message;

/// URLs counted as links: scheme-anchored or `www.`-prefixed runs.
/// Compiled once; the pattern is static and known-valid.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)[^\s]+").unwrap());

/// How many senders the busiest-senders table names.
const TOP_SENDERS: usize = 5;

/// Scale factor for two-decimal rounding of the percentage table.
const SHARE_DECIMALS: f64 = 100.0;

/// The four headline counts for a transcript view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatStats {
    /// Total records in the filtered view.
    pub messages: u64,
    /// Whitespace-split token count over all bodies.
    pub words: u64,
    /// Bodies equal to the omitted-attachment placeholder.
    pub media: u64,
    /// URL matches across all bodies.
    pub links: u64,
}

/// A sender and their message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    pub sender: String,
    pub count: u64,
}

/// A sender and their share of all messages, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderShare {
    pub sender: String,
    pub percent: f64,
}

/// Computes message, word, media, and link counts for the filtered view.
///
/// An empty filtered subset yields all-zero stats.
///
/// # Example
///
/// ```
/// use chatlens::analytics::{SenderFilter, fetch_stats};
/// use chatlens::parser::parse_transcript;
///
/// let records = parse_transcript("1/1/23, 10:00 - Alice: hello world\n")?;
/// let stats = fetch_stats(&records, &SenderFilter::Overall);
/// assert_eq!(stats.messages, 1);
/// assert_eq!(stats.words, 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn fetch_stats(records: &[Message], filter: &SenderFilter) -> ChatStats {
    let mut stats = ChatStats::default();
    for record in filtered(records, filter) {
        stats.messages += 1;
        stats.words += record.word_count() as u64;
        if record.is_media() {
            stats.media += 1;
        }
        stats.links += URL_REGEX.find_iter(&record.text).count() as u64;
    }
    stats
}

/// Ranks senders by message count over the whole transcript (group view;
/// no sender filter applies).
///
/// Returns the top-5 table and a percentage-of-total row for every sender,
/// both descending by count with ties in first-encounter order. The system
/// sentinel ranks like any participant. Empty input yields empty tables.
pub fn busiest_senders(records: &[Message]) -> (Vec<SenderCount>, Vec<SenderShare>) {
    let total = records.len() as f64;
    let counted = count_by_first_seen(records.iter().map(|r| r.sender.label().to_string()));

    let shares = counted
        .iter()
        .map(|(sender, count)| SenderShare {
            sender: sender.clone(),
            percent: ((*count as f64 / total) * 100.0 * SHARE_DECIMALS).round() / SHARE_DECIMALS,
        })
        .collect();

    let top = counted
        .into_iter()
        .take(TOP_SENDERS)
        .map(|(sender, count)| SenderCount { sender, count })
        .collect();

    (top, shares)
}

/// The selector list a dashboard offers: `"Overall"` followed by every named
/// sender, sorted, with the notification sentinel excluded.
pub fn sender_roster(records: &[Message]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .filter(|r| !r.is_notification())
        .map(|r| r.sender.label().to_string())
        .collect();
    names.sort();
    names.dedup();
    names.insert(0, super::OVERALL.to_string());
    names
}
