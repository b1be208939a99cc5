//! Pure query functions over a parsed record sequence.
//!
//! Every metric takes the full record slice plus a [`SenderFilter`] and
//! re-filters on each call; there are no maintained aggregates. Functions
//! given an empty filtered subset return empty/zero-valued results rather
//! than failing, so callers branch on emptiness before rendering.
//!
//! Records with a null timestamp participate in count/word/emoji metrics and
//! contribute nothing to temporal ones.

mod stats;
mod timeline;
mod words;

pub use stats::{ChatStats, SenderCount, SenderShare, busiest_senders, fetch_stats, sender_roster};
pub use timeline::{
    ActivityCount, ActivityHeatmap, DailyRow, MonthlyRow, activity_heatmap, daily_timeline,
    month_activity, monthly_timeline, weekday_activity,
};
pub use words::{EmojiCount, WordCount, emoji_counts, most_common_words, word_cloud_text};

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Label selecting the unfiltered view of a transcript.
pub const OVERALL: &str = "Overall";

/// Restricts analytics to one sender's records, or none.
///
/// The string `"Overall"` maps to [`SenderFilter::Overall`]; any other value
/// matches records whose sender label equals it exactly (the system sentinel
/// `group_notification` is selectable like any participant).
///
/// # Example
///
/// ```
/// use chatlens::analytics::SenderFilter;
///
/// assert_eq!(SenderFilter::from("Overall"), SenderFilter::Overall);
/// assert_eq!(
///     SenderFilter::from("Alice"),
///     SenderFilter::Sender("Alice".to_string()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SenderFilter {
    /// No restriction; every record participates.
    Overall,
    /// Only records whose sender label equals this value.
    Sender(String),
}

impl SenderFilter {
    /// Returns `true` if the record passes this filter.
    pub fn matches(&self, record: &Message) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::Sender(name) => record.sender.label() == name,
        }
    }

    /// The label this filter was built from.
    pub fn label(&self) -> &str {
        match self {
            SenderFilter::Overall => OVERALL,
            SenderFilter::Sender(name) => name,
        }
    }
}

impl From<&str> for SenderFilter {
    fn from(s: &str) -> Self {
        if s == OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::Sender(s.to_string())
        }
    }
}

impl From<Option<&str>> for SenderFilter {
    /// `None` selects the unfiltered view (CLI convenience).
    fn from(s: Option<&str>) -> Self {
        s.map_or(SenderFilter::Overall, SenderFilter::from)
    }
}

impl std::fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Iterator over the records passing `filter`, in transcript order.
pub(crate) fn filtered<'a>(
    records: &'a [Message],
    filter: &'a SenderFilter,
) -> impl Iterator<Item = &'a Message> {
    records.iter().filter(move |r| filter.matches(r))
}

/// Counts occurrences, returning `(key, count)` pairs sorted by count
/// descending with ties kept in first-seen order.
///
/// The stable sort over a first-seen-ordered accumulator is what makes the
/// tie-break deterministic instead of hash-map-incidental.
pub(crate) fn count_by_first_seen<K, I>(keys: I) -> Vec<(K, u64)>
where
    K: std::hash::Hash + Eq + Clone,
    I: IntoIterator<Item = K>,
{
    use std::collections::HashMap;

    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, u64)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
