//! CSV export of the parsed record table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::message::Message;

/// Writes the record table to CSV.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Sender`, `Message`
/// - Encoding: UTF-8
///
/// The date column is empty for records whose timestamp failed every
/// candidate format.
pub fn write_csv(records: &[Message], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv_to(records, file)
}

/// Writes the record table to any writer; see [`write_csv`].
pub fn write_csv_to<W: Write>(records: &[Message], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    writer.write_record(["Date", "Sender", "Message"])?;

    for record in records {
        let date = record
            .timestamp
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        writer.write_record([date.as_str(), record.sender.label(), &record.text])?;
    }

    writer.flush()?;
    Ok(())
}
