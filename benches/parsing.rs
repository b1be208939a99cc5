//! Benchmarks for chatlens parsing and analytics.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::analytics::{
    SenderFilter, activity_heatmap, busiest_senders, emoji_counts, fetch_stats, monthly_timeline,
    most_common_words,
};
use chatlens::parser::TranscriptParser;
use chatlens::report::Report;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = match i % 3 {
            0 => "Alice",
            1 => "Bob",
            _ => "Charlie",
        };
        let day = i % 28 + 1;
        let month = i % 12 + 1;
        let hour = i % 24;
        let minute = i % 60;
        let body = match i % 5 {
            0 => format!("{}: message number {} 🎉", sender, i),
            1 => format!("{}: <Media omitted>", sender),
            2 => format!("{}: see https://example.com/{}", sender, i),
            3 => "Alice added Bob".to_string(),
            _ => format!("{}: just a plain chat line number {}", sender, i),
        };
        lines.push(format!("{}/{}/23, {}:{:02} - {}", day, month, hour, minute, body));
    }
    lines.join("\n")
}

// =============================================================================
// Parsing benchmarks
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for count in [100, 1_000, 10_000] {
        let raw = generate_transcript(count);
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &raw, |b, raw| {
            let parser = TranscriptParser::new();
            b.iter(|| parser.parse_str(black_box(raw)).unwrap());
        });
    }

    group.finish();
}

// =============================================================================
// Analytics benchmarks
// =============================================================================

fn bench_analytics(c: &mut Criterion) {
    let raw = generate_transcript(10_000);
    let records = TranscriptParser::new().parse_str(&raw).unwrap();
    let filter = SenderFilter::Overall;

    let mut group = c.benchmark_group("analytics");
    group.throughput(Throughput::Elements(records.len() as u64));

    group.bench_function("fetch_stats", |b| {
        b.iter(|| fetch_stats(black_box(&records), &filter));
    });
    group.bench_function("busiest_senders", |b| {
        b.iter(|| busiest_senders(black_box(&records)));
    });
    group.bench_function("most_common_words", |b| {
        b.iter(|| most_common_words(black_box(&records), &filter));
    });
    group.bench_function("emoji_counts", |b| {
        b.iter(|| emoji_counts(black_box(&records), &filter));
    });
    group.bench_function("monthly_timeline", |b| {
        b.iter(|| monthly_timeline(black_box(&records), &filter));
    });
    group.bench_function("activity_heatmap", |b| {
        b.iter(|| activity_heatmap(black_box(&records), &filter));
    });
    group.bench_function("full_report", |b| {
        b.iter(|| Report::build(black_box(&records), &filter));
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_analytics);
criterion_main!(benches);
