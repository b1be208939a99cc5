//! # chatlens CLI
//!
//! Parses a transcript, builds the full report for the selected view, and
//! renders it as text sections or JSON.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::analytics::SenderFilter;
use chatlens::cli::{Args, ReportFormat};
use chatlens::parser::TranscriptParser;
use chatlens::report::Report;
use chatlens::{ChatlensError, Message};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let filter = SenderFilter::from(args.sender.as_deref());

    let parse_start = Instant::now();
    let records = TranscriptParser::new().parse(Path::new(&args.input))?;
    let parse_time = parse_start.elapsed();

    let report = Report::build(&records, &filter);

    match args.format {
        ReportFormat::Text => {
            print_text_report(&args.input, &records, &report);
            println!();
            println!("⚡ Parsed {} records in {:.2}s (total {:.2}s)",
                records.len(),
                parse_time.as_secs_f64(),
                total_start.elapsed().as_secs_f64(),
            );
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    #[cfg(feature = "csv-output")]
    if let Some(ref export) = args.export {
        chatlens::export::write_csv(&records, Path::new(export))?;
        eprintln!("💾 Record table written to {}", export);
    }

    Ok(())
}

fn print_text_report(input: &str, records: &[Message], report: &Report) {
    println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", input);
    println!("👤 View:    {}", report.filter);
    println!("👥 Senders: {}", report.roster.len().saturating_sub(1));
    println!();

    println!("📊 Totals");
    println!("   Messages: {}", report.stats.messages);
    println!("   Words:    {}", report.stats.words);
    println!("   Media:    {}", report.stats.media);
    println!("   Links:    {}", report.stats.links);

    if !report.busiest.is_empty() {
        println!();
        println!("🏆 Busiest senders");
        for entry in &report.busiest {
            let share = report
                .sender_shares
                .iter()
                .find(|s| s.sender == entry.sender)
                .map_or(0.0, |s| s.percent);
            println!("   {:<24} {:>6}  ({:.2}%)", entry.sender, entry.count, share);
        }
    }

    if !report.common_words.is_empty() {
        println!();
        println!("💬 Most common words");
        for word in report.common_words.iter().take(10) {
            println!("   {:<24} {:>6}", word.word, word.count);
        }
    }

    if report.emoji.is_empty() {
        println!();
        println!("😶 No emojis found in this view.");
    } else {
        println!();
        println!("😀 Emoji");
        for emoji in report.emoji.iter().take(10) {
            println!("   {:<4} {:>6}", emoji.emoji, emoji.count);
        }
    }

    if !report.monthly.is_empty() {
        println!();
        println!("📅 Monthly timeline");
        for row in &report.monthly {
            println!("   {:<16} {:>6}", row.label, row.count);
        }
    }

    if !report.weekdays.is_empty() {
        println!();
        println!("🗓  Weekday activity");
        for row in &report.weekdays {
            println!("   {:<12} {:>6}", row.label, row.count);
        }
    }

    if !report.heatmap.is_empty() {
        println!();
        println!("🕒 Hour × weekday heatmap (rows Monday-first, columns 0-23)");
        for weekday in chatlens::analytics::ActivityHeatmap::WEEKDAYS {
            let cells = report.heatmap.row(weekday);
            let rendered: Vec<String> = cells.iter().map(|c| format!("{c:>3}")).collect();
            println!("   {:<4}{}", format!("{weekday}"), rendered.join(""));
        }
    }

    let dated = records.iter().filter(|r| r.timestamp.is_some()).count();
    if dated < records.len() {
        println!();
        println!(
            "⚠️  {} record(s) have no parseable timestamp and are excluded from temporal charts",
            records.len() - dated
        );
    }
}
