//! Temporal aggregations: timelines, activity maps, and the hour×weekday
//! heatmap.
//!
//! Every function here keys off the cached [`Calendar`] fields, so records
//! whose timestamp failed to parse contribute nothing.
//!
//! [`Calendar`]: crate::message::Calendar

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{SenderFilter, count_by_first_seen, filtered};
use crate::message::{Message, month_name, weekday_name};

/// One monthly-timeline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRow {
    pub year: i32,
    /// Month number, 1-12. Grouping key together with `year`; the name alone
    /// would merge the same month across years.
    pub month: u32,
    /// Display label, `"<MonthName>-<Year>"`.
    pub label: String,
    pub count: u64,
}

/// One daily-timeline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub count: u64,
}

/// A labeled activity bucket (weekday or month name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub label: String,
    pub count: u64,
}

/// Message count per hour of day and day of week.
///
/// Rows are weekdays Monday-first, columns are hours 0-23; combinations with
/// no messages hold zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHeatmap {
    cells: [[u64; 24]; 7],
}

impl ActivityHeatmap {
    /// Row labels, in row order.
    pub const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Cell count for a weekday and hour.
    ///
    /// # Panics
    ///
    /// Panics if `hour >= 24`.
    pub fn get(&self, weekday: Weekday, hour: u32) -> u64 {
        self.cells[weekday.num_days_from_monday() as usize][hour as usize]
    }

    /// One weekday's 24 hourly counts.
    pub fn row(&self, weekday: Weekday) -> &[u64; 24] {
        &self.cells[weekday.num_days_from_monday() as usize]
    }

    /// Sum of all cells; equals the filtered count of records with a
    /// parseable timestamp.
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    /// `true` when no record contributed.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Message count per distinct (year, month), chronological.
///
/// # Example
///
/// ```
/// use chatlens::analytics::{SenderFilter, monthly_timeline};
/// use chatlens::parser::parse_transcript;
///
/// let records = parse_transcript(
///     "1/12/22, 10:00 - Alice: december\n1/1/23, 10:00 - Alice: january\n",
/// )?;
/// let rows = monthly_timeline(&records, &SenderFilter::Overall);
/// assert_eq!(rows[0].label, "December-2022");
/// assert_eq!(rows[1].label, "January-2023");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn monthly_timeline(records: &[Message], filter: &SenderFilter) -> Vec<MonthlyRow> {
    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for cal in filtered(records, filter).filter_map(|r| r.calendar()) {
        *buckets.entry((cal.year, cal.month)).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month), count)| MonthlyRow {
            year,
            month,
            label: format!("{}-{}", month_name(month), year),
            count,
        })
        .collect()
}

/// Message count per distinct calendar date, chronological.
pub fn daily_timeline(records: &[Message], filter: &SenderFilter) -> Vec<DailyRow> {
    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for cal in filtered(records, filter).filter_map(|r| r.calendar()) {
        *buckets.entry(cal.date).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DailyRow { date, count })
        .collect()
}

/// Message count per weekday name, descending by count.
pub fn weekday_activity(records: &[Message], filter: &SenderFilter) -> Vec<ActivityCount> {
    count_by_first_seen(
        filtered(records, filter)
            .filter_map(|r| r.calendar())
            .map(|cal| cal.weekday_name()),
    )
    .into_iter()
    .map(|(label, count)| ActivityCount {
        label: label.to_string(),
        count,
    })
    .collect()
}

/// Message count per month name, descending by count.
pub fn month_activity(records: &[Message], filter: &SenderFilter) -> Vec<ActivityCount> {
    count_by_first_seen(
        filtered(records, filter)
            .filter_map(|r| r.calendar())
            .map(|cal| cal.month_name()),
    )
    .into_iter()
    .map(|(label, count)| ActivityCount {
        label: label.to_string(),
        count,
    })
    .collect()
}

/// Builds the hour×weekday heatmap for the filtered view.
pub fn activity_heatmap(records: &[Message], filter: &SenderFilter) -> ActivityHeatmap {
    let mut cells = [[0u64; 24]; 7];
    for cal in filtered(records, filter).filter_map(|r| r.calendar()) {
        cells[cal.weekday.num_days_from_monday() as usize][cal.hour as usize] += 1;
    }
    ActivityHeatmap { cells }
}
