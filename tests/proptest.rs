//! Property-based tests for chatlens.
//!
//! These generate random transcripts and record sequences to pin down the
//! cross-metric invariants.

use proptest::prelude::*;

use chatlens::parser::{TranscriptParser, parse_transcript};
use chatlens::prelude::*;

/// Generate a random parsed record using fast strategies (no regex!)
fn arb_record() -> impl Strategy<Value = Message> {
    (
        prop::sample::select(vec![
            Sender::named("Alice"),
            Sender::named("Bob"),
            Sender::named("Charlie"),
            Sender::named("Иван"),
            Sender::System,
        ]),
        prop::sample::select(vec![
            "Hello".to_string(),
            "Hi there!".to_string(),
            "How are you?".to_string(),
            "<Media omitted>".to_string(),
            "check https://example.com now".to_string(),
            "Привет мир".to_string(),
            "🎉🔥 emoji".to_string(),
            String::new(),
            "   ".to_string(),
        ]),
        // day 1-28, month 1-12, hour, minute; None = unparseable stamp
        prop::option::of((1u32..=28, 1u32..=12, 0u32..24, 0u32..60)),
    )
        .prop_map(|(sender, text, dt)| {
            let record = Message::new(sender, text);
            match dt {
                Some((day, month, hour, minute)) => record.with_timestamp(
                    chrono::NaiveDate::from_ymd_opt(2023, month, day)
                        .unwrap()
                        .and_hms_opt(hour, minute, 0)
                        .unwrap(),
                ),
                None => record,
            }
        })
}

/// Generate a random but well-formed transcript line.
fn arb_line() -> impl Strategy<Value = String> {
    (
        1u32..=28,
        1u32..=12,
        0u32..24,
        0u32..60,
        prop::sample::select(vec!["Alice", "Bob", "Charlie"]),
        prop::sample::select(vec!["hello", "hi there", "ok", "🎉", "see you"]),
        prop::bool::ANY,
    )
        .prop_map(|(day, month, hour, minute, sender, body, notification)| {
            if notification {
                format!("{day}/{month}/23, {hour}:{minute:02} - {sender} left")
            } else {
                format!("{day}/{month}/23, {hour}:{minute:02} - {sender}: {body}")
            }
        })
}

proptest! {
    #[test]
    fn prop_record_count_equals_line_count(lines in prop::collection::vec(arb_line(), 1..50)) {
        let raw = lines.join("\n");
        let records = parse_transcript(&raw).unwrap();
        prop_assert_eq!(records.len(), lines.len());
    }

    #[test]
    fn prop_parsing_is_deterministic(lines in prop::collection::vec(arb_line(), 1..30)) {
        let raw = lines.join("\n");
        let parser = TranscriptParser::new();
        prop_assert_eq!(parser.parse_str(&raw).unwrap(), parser.parse_str(&raw).unwrap());
    }

    #[test]
    fn prop_sender_counts_sum_to_overall(records in prop::collection::vec(arb_record(), 0..80)) {
        let overall = fetch_stats(&records, &SenderFilter::Overall);
        let (_, shares) = busiest_senders(&records);
        let summed: u64 = shares
            .iter()
            .map(|s| fetch_stats(&records, &SenderFilter::from(s.sender.as_str())).messages)
            .sum();
        prop_assert_eq!(summed, overall.messages);
    }

    #[test]
    fn prop_heatmap_total_equals_dated_count(records in prop::collection::vec(arb_record(), 0..80)) {
        for filter in [SenderFilter::Overall, SenderFilter::from("Alice")] {
            let dated = records
                .iter()
                .filter(|r| filter.matches(r) && r.timestamp.is_some())
                .count() as u64;
            prop_assert_eq!(activity_heatmap(&records, &filter).total(), dated);
        }
    }

    #[test]
    fn prop_monthly_timeline_sums_and_is_strictly_ordered(
        records in prop::collection::vec(arb_record(), 0..80),
    ) {
        let filter = SenderFilter::Overall;
        let rows = monthly_timeline(&records, &filter);

        let dated = records.iter().filter(|r| r.timestamp.is_some()).count() as u64;
        let summed: u64 = rows.iter().map(|r| r.count).sum();
        prop_assert_eq!(summed, dated);

        let keys: Vec<(i32, u32)> = rows.iter().map(|r| (r.year, r.month)).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_daily_timeline_consistent_with_weekdays(
        records in prop::collection::vec(arb_record(), 0..80),
    ) {
        let filter = SenderFilter::Overall;
        let daily: u64 = daily_timeline(&records, &filter).iter().map(|r| r.count).sum();
        let weekly: u64 = weekday_activity(&records, &filter).iter().map(|r| r.count).sum();
        prop_assert_eq!(daily, weekly);
    }

    #[test]
    fn prop_word_counts_bounded_by_cloud_text(
        records in prop::collection::vec(arb_record(), 0..50),
    ) {
        let filter = SenderFilter::Overall;
        let stats = fetch_stats(&records, &filter);
        let cloud_tokens = word_cloud_text(&records, &filter).split_whitespace().count() as u64;
        prop_assert_eq!(stats.words, cloud_tokens);
    }

    #[test]
    fn prop_emoji_counts_sorted_descending(records in prop::collection::vec(arb_record(), 0..50)) {
        let counts = emoji_counts(&records, &SenderFilter::Overall);
        prop_assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn prop_most_common_words_capped_and_sorted(
        records in prop::collection::vec(arb_record(), 0..50),
    ) {
        let words = most_common_words(&records, &SenderFilter::Overall);
        prop_assert!(words.len() <= 20);
        prop_assert!(words.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
