//! Word frequency, word-cloud input, and emoji frequency.

use serde::{Deserialize, Serialize};

use super::{SenderFilter, count_by_first_seen, filtered};
use crate::message::Message;

/// How many entries `most_common_words` returns.
const TOP_WORDS: usize = 20;

/// A word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// An emoji and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: u64,
}

/// Top-20 whitespace-split tokens by frequency, descending, ties first-seen.
///
/// Tokens are counted verbatim: no case folding or stopword removal, which
/// is the rendering collaborator's concern.
pub fn most_common_words(records: &[Message], filter: &SenderFilter) -> Vec<WordCount> {
    count_by_first_seen(
        filtered(records, filter)
            .flat_map(|r| r.text.split_whitespace())
            .map(str::to_string),
    )
    .into_iter()
    .take(TOP_WORDS)
    .map(|(word, count)| WordCount { word, count })
    .collect()
}

/// Space-joined concatenation of all filtered message bodies.
///
/// This is the raw input a word-cloud renderer consumes; case and stopword
/// filtering stay with the renderer.
pub fn word_cloud_text(records: &[Message], filter: &SenderFilter) -> String {
    let bodies: Vec<&str> = filtered(records, filter).map(|r| r.text.as_str()).collect();
    bodies.join(" ")
}

/// All emoji found in the filtered bodies with their counts, descending,
/// ties first-seen.
///
/// Bodies are scanned character by character against the known emoji set, so
/// identical emoji accumulate one combined count.
///
/// # Example
///
/// ```
/// use chatlens::analytics::{SenderFilter, emoji_counts};
/// use chatlens::parser::parse_transcript;
///
/// let records = parse_transcript("1/1/23, 10:00 - Alice: nice 🎉🎉🔥\n")?;
/// let counts = emoji_counts(&records, &SenderFilter::Overall);
/// assert_eq!(counts[0].emoji, "🎉");
/// assert_eq!(counts[0].count, 2);
/// assert_eq!(counts[1].count, 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn emoji_counts(records: &[Message], filter: &SenderFilter) -> Vec<EmojiCount> {
    let mut buf = [0u8; 4];
    count_by_first_seen(
        filtered(records, filter)
            .flat_map(|r| r.text.chars())
            .filter(|c| emojis::get(c.encode_utf8(&mut buf)).is_some())
            .map(|c| c.to_string()),
    )
    .into_iter()
    .map(|(emoji, count)| EmojiCount { emoji, count })
    .collect()
}
