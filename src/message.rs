//! The parsed message record and its derived calendar fields.
//!
//! [`Message`] is the unit entity of a parsed transcript: one record per
//! timestamp delimiter found in the raw text. All analytics functions operate
//! over `&[Message]` without mutating it.
//!
//! # Examples
//!
//! ```
//! use chatlens::{Message, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! let msg = Message::new(Sender::named("Alice"), "hello").with_timestamp(ts);
//! assert_eq!(msg.sender().label(), "Alice");
//! assert_eq!(msg.calendar().unwrap().month_name(), "January");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Placeholder body WhatsApp writes in place of an omitted attachment.
///
/// The parser passes it through as ordinary text; analytics recognize it by
/// exact match (after trailing-whitespace trim) when counting media messages.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Label under which system/notification records are reported.
///
/// Matches the column value the exported transcripts' analytics conventions
/// use for authorless lines (join/leave/encryption notices).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// The author of a message: a named participant, or the system.
///
/// Transcript lines without a `Name: ` prefix have no author; modeling that
/// as a distinct variant (rather than a magic string) keeps downstream
/// filtering exhaustive-checked. [`Sender::System`] still displays and
/// serializes as [`GROUP_NOTIFICATION`] so tabular output matches what chat
/// analytics dashboards conventionally show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sender {
    /// A message with a `Name: ` prefix.
    Named(String),
    /// A system/service line (group created, user left, encryption notice).
    System,
}

impl Sender {
    /// Creates a named sender.
    pub fn named(name: impl Into<String>) -> Self {
        Sender::Named(name.into())
    }

    /// Returns the display label: the participant name, or
    /// [`GROUP_NOTIFICATION`] for system lines.
    pub fn label(&self) -> &str {
        match self {
            Sender::Named(name) => name,
            Sender::System => GROUP_NOTIFICATION,
        }
    }

    /// Returns `true` for system/notification lines.
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Sender {
    fn from(s: String) -> Self {
        if s == GROUP_NOTIFICATION {
            Sender::System
        } else {
            Sender::Named(s)
        }
    }
}

impl From<Sender> for String {
    fn from(sender: Sender) -> String {
        sender.label().to_string()
    }
}

/// Calendar fields derived from a record's timestamp.
///
/// Computed once at parse time and cached on the record; temporal analytics
/// read these instead of re-deriving from the timestamp per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Date without time of day.
    pub date: NaiveDate,
    /// Day of week.
    pub weekday: Weekday,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
}

impl Calendar {
    /// Derives all calendar fields from a timestamp.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            date: dt.date(),
            weekday: dt.weekday(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }

    /// Full English month name ("January" through "December").
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Full English weekday name ("Monday" through "Sunday").
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// Full English name for a 1-based month number.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`. [`Calendar`] only ever holds valid
/// months, so this is unreachable for parsed records.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => unreachable!("month out of range: {month}"),
    }
}

/// Full English name for a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One parsed transcript record.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | [`Sender`] | Named participant or system sentinel |
/// | `text` | `String` | Message body; multi-line bodies keep their inner newlines |
/// | `timestamp` | `Option<NaiveDateTime>` | Naive local time as written in the export |
/// | `calendar` | `Option<Calendar>` | Cached derived fields, `Some` iff `timestamp` is |
///
/// A `None` timestamp means every candidate date format failed for that row;
/// such records are excluded from temporal aggregations but still count in
/// message/word/emoji analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message author, or the system sentinel.
    pub sender: Sender,

    /// Text content of the message.
    pub text: String,

    /// When the message was sent, as written in the export (no timezone).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Derived calendar fields, cached at parse time.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub calendar: Option<Calendar>,
}

impl Message {
    /// Creates a record with no timestamp.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: None,
            calendar: None,
        }
    }

    /// Builder method setting the timestamp and deriving the calendar fields.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self.calendar = Some(Calendar::from_datetime(ts));
        self
    }

    /// Returns the sender.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the timestamp, if one parsed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the cached calendar fields, if the timestamp parsed.
    pub fn calendar(&self) -> Option<&Calendar> {
        self.calendar.as_ref()
    }

    /// Returns `true` for system/notification records.
    pub fn is_notification(&self) -> bool {
        self.sender.is_system()
    }

    /// Returns `true` if the body is the omitted-attachment placeholder.
    pub fn is_media(&self) -> bool {
        self.text.trim_end() == MEDIA_OMITTED
    }

    /// Number of whitespace-separated tokens in the body.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
