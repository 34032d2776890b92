//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatstats::ChatstatsError;
use chatstats::cli::Args;
use chatstats::core::{Aggregator, ChartData, build_report};
use chatstats::diagnostics::TracingDiagnostics;
use chatstats::format::{OutputFormat, write_to_format};
use chatstats::ingest::read_sources;
use chatstats::readers::MessengerReader;

const BAR_WIDTH: usize = 30;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    // Print header
    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Sources:  {}", args.files.len());
    if !args.keywords.is_empty() {
        println!("🔑 Keywords: {}", args.keywords.join(", "));
    }
    if let Some(ref output) = args.output {
        println!("💾 Output:   {} ({})", output, args.format);
    }
    println!();

    // Step 1: Read every source concurrently
    let reader = MessengerReader::with_config(args.messenger_config());
    let config = args.ingest_config();
    println!(
        "⏳ Reading {} file(s) with up to {} reader(s)...",
        args.files.len(),
        config.worker_count(args.files.len())
    );
    let read_start = Instant::now();
    let ingestion = read_sources(&reader, &args.files, &config, &TracingDiagnostics)?;
    let missing = ingestion
        .outcomes()
        .iter()
        .filter(|o| !o.warnings().is_empty())
        .count();
    println!(
        "   Found {} messages ({:.2}s)",
        ingestion.message_count(),
        read_start.elapsed().as_secs_f64()
    );
    if missing > 0 {
        println!("   ⚠️  {} file(s) not found", missing);
    }

    // Step 2: Group by sender
    let aggregator =
        Aggregator::from_ingestion(ingestion, config.failure_policy, &TracingDiagnostics)?;

    println!();
    println!("👥 Senders:");
    if aggregator.is_empty() {
        println!("   (no messages)");
    }
    for person in aggregator.persons() {
        let stats = person.basic_info();
        println!(
            "   {:<20}: {:<4} messages, {:<5} words, {:<5} characters",
            person.name(),
            stats.messages_sent,
            stats.word_count,
            stats.char_count
        );
        if args.verbose {
            let top: Vec<String> = person
                .top_words(5)
                .into_iter()
                .map(|(word, count)| format!("{} ({})", word, count))
                .collect();
            if !top.is_empty() {
                println!("      top words: {}", top.join(", "));
            }
        }
    }

    let totals = aggregator.totals();
    println!();
    println!("📈 Total:");
    println!(
        "   {} messages, {} words, {} characters from {} sender(s)",
        totals.messages_sent,
        totals.word_count,
        totals.char_count,
        aggregator.len()
    );
    println!("   {:.1} words per message", totals.words_per_message());

    // Step 3: Keywords
    if !args.keywords.is_empty() {
        let counts = aggregator.count(&args.keywords);
        println!();
        println!("🔑 Keywords:");
        for (keyword, count) in &counts {
            println!("   {:<20}: {}", keyword, count);
        }
    }

    // Step 4: Report
    if let Some(ref output) = args.output {
        let report = build_report(&aggregator, &args.keywords);
        let lib_format: OutputFormat = args.format.into();
        println!();
        println!("💾 Writing {}...", lib_format);
        let write_start = Instant::now();
        write_to_format(&report, output, lib_format)?;
        println!(
            "   Written {} row(s) to {} in {:.2}s",
            report.len(),
            output,
            write_start.elapsed().as_secs_f64()
        );
    }

    // Step 5: Chart
    if let Some(kind) = args.chart_kind() {
        let chart = match kind.metric() {
            Some(metric) => aggregator.chart_data(metric),
            None => aggregator.keyword_chart_data(&args.keywords),
        };
        println!();
        print_chart(&chart);

        if let Some(ref path) = args.chart_data {
            write_chart_data(&chart, path)?;
            println!("   Chart data saved to {}", path);
        }
    }

    println!();
    println!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// Prints a text rendering of the chart's slices.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn print_chart(chart: &ChartData) {
    println!("🥧 {}:", chart.title);
    let total = chart.total();
    if total == 0 {
        println!("   (nothing to chart)");
        return;
    }

    for (label, value) in chart.labels.iter().zip(&chart.values) {
        let share = *value as f64 / total as f64;
        let filled = (share * BAR_WIDTH as f64).round() as usize;
        println!(
            "   {:<20} {:<width$} {:>5.1}% ({})",
            label,
            "█".repeat(filled),
            share * 100.0,
            value,
            width = BAR_WIDTH
        );
    }
}

fn write_chart_data(chart: &ChartData, path: &str) -> Result<(), ChatstatsError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, chart)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
