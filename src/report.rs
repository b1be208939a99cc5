//! One-shot aggregation of every metric for a single transcript view.
//!
//! [`Report`] is what the CLI renders and what an embedding dashboard would
//! request once per sender selection. Each field is independently computed
//! by the corresponding [`analytics`](crate::analytics) function; building a
//! report for an empty filtered view succeeds and yields empty/zero parts.

use serde::{Deserialize, Serialize};

use crate::analytics::{
    ActivityCount, ActivityHeatmap, ChatStats, DailyRow, EmojiCount, MonthlyRow, SenderCount,
    SenderFilter, SenderShare, WordCount, activity_heatmap, busiest_senders, daily_timeline,
    emoji_counts, fetch_stats, month_activity, monthly_timeline, most_common_words,
    sender_roster, weekday_activity,
};
use crate::message::Message;

/// Every metric for one sender selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The selection this report was built for.
    pub filter: SenderFilter,
    /// Message/word/media/link counts.
    pub stats: ChatStats,
    /// Top senders by message count; only populated for the Overall view
    /// (a single-sender view has nothing to rank).
    pub busiest: Vec<SenderCount>,
    /// Percentage-of-total per sender; Overall view only.
    pub sender_shares: Vec<SenderShare>,
    /// Selector list: `"Overall"` plus every named sender.
    pub roster: Vec<String>,
    /// Top-20 words.
    pub common_words: Vec<WordCount>,
    /// All emoji with counts, descending.
    pub emoji: Vec<EmojiCount>,
    /// Message count per (year, month), chronological.
    pub monthly: Vec<MonthlyRow>,
    /// Message count per calendar date, chronological.
    pub daily: Vec<DailyRow>,
    /// Message count per weekday name, descending.
    pub weekdays: Vec<ActivityCount>,
    /// Message count per month name, descending.
    pub months: Vec<ActivityCount>,
    /// Hour-of-day by day-of-week message counts.
    pub heatmap: ActivityHeatmap,
}

impl Report {
    /// Computes every metric over `records` for the given filter.
    pub fn build(records: &[Message], filter: &SenderFilter) -> Self {
        let (busiest, sender_shares) = if matches!(filter, SenderFilter::Overall) {
            busiest_senders(records)
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            filter: filter.clone(),
            stats: fetch_stats(records, filter),
            busiest,
            sender_shares,
            roster: sender_roster(records),
            common_words: most_common_words(records, filter),
            emoji: emoji_counts(records, filter),
            monthly: monthly_timeline(records, filter),
            daily: daily_timeline(records, filter),
            weekdays: weekday_activity(records, filter),
            months: month_activity(records, filter),
            heatmap: activity_heatmap(records, filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_transcript;

    const RAW: &str = "1/1/23, 10:00 - Alice: hello 🎉\n\
                       1/1/23, 10:05 - Bob: hi there\n\
                       1/1/23, 10:06 - Alice has left\n";

    #[test]
    fn test_overall_report() {
        let records = parse_transcript(RAW).unwrap();
        let report = Report::build(&records, &SenderFilter::Overall);

        assert_eq!(report.stats.messages, 3);
        assert_eq!(report.busiest.len(), 3);
        assert_eq!(report.roster, ["Overall", "Alice", "Bob"]);
        assert_eq!(report.emoji.len(), 1);
        assert_eq!(report.monthly.len(), 1);
        assert_eq!(report.heatmap.total(), 3);
    }

    #[test]
    fn test_sender_report_skips_ranking() {
        let records = parse_transcript(RAW).unwrap();
        let report = Report::build(&records, &SenderFilter::from("Alice"));

        assert_eq!(report.stats.messages, 1);
        assert!(report.busiest.is_empty());
        assert!(report.sender_shares.is_empty());
        assert_eq!(report.heatmap.total(), 1);
    }

    #[test]
    fn test_report_serializes() {
        let records = parse_transcript(RAW).unwrap();
        let report = Report::build(&records, &SenderFilter::Overall);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("group_notification"));
        assert!(json.contains("January-2023"));
    }
}
