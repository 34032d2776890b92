//! Example: Using chatstats as a library
//!
//! This example demonstrates how to use chatstats in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatstats::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatstats Library Usage Examples ===\n");

    // Example 1: Counting keywords in one message
    println!("1. Keyword counting (longest first, matches removed):");
    let msg = MessageRecord::new("Alice", "Worldwide hello, helloworld!");
    let counts = msg.count(&["world", "wide", "hello", "lo"]);
    for (keyword, count) in &counts {
        println!("   {:<8} {}", keyword, count);
    }

    // Example 2: Reading exports held in memory
    println!("\n2. Reading Messenger exports:");
    let reader = MessengerReader::new();
    let first = reader.read_str(
        r#"{"messages": [
            {"sender_name": "Alice", "content": "Hello world", "timestamp_ms": 1705314600000},
            {"sender_name": "Bob", "content": "blah blah"},
            {"sender_name": "Alice", "content": "How are you?"}
        ]}"#,
    )?;
    let second = reader.read_str(
        r#"{"messages": [
            {"sender_name": "Alice", "content": "Still here"},
            {"sender_name": "Carol", "photos": [{"uri": "cat.jpg"}]}
        ]}"#,
    )?;
    println!("   {} + {} messages", first.len(), second.len());

    // Example 3: Grouping by sender, keeping source order
    println!("\n3. Grouping by sender:");
    let aggregator = Aggregator::from_index(AggregationIndex::build(vec![first, second]));
    for person in aggregator.persons() {
        let texts: Vec<_> = person.messages().iter().map(MessageRecord::text).collect();
        println!("   {}: {:?}", person.name(), texts);
    }

    // Example 4: Per-person statistics
    println!("\n4. Statistics:");
    for person in &aggregator {
        let stats = person.basic_info();
        println!(
            "   {:<6}: {} messages, {} words, {} characters",
            person.name(),
            stats.messages_sent,
            stats.word_count,
            stats.char_count
        );
    }
    let totals = aggregator.totals();
    println!("   Total: {} messages, {} words", totals.messages_sent, totals.word_count);

    // Example 5: Keyword totals across everyone
    println!("\n5. Keyword totals:");
    let keywords = ["hello", "world", "blah"];
    println!("   {}", serde_json::to_string(&aggregator.count(&keywords))?);

    // Example 6: Report rows and chart data
    println!("\n6. Report and chart data:");
    let report = build_report(&aggregator, &keywords);
    println!("   {}", serde_json::to_string(&report[0])?);
    let chart = aggregator.chart_data(ChartMetric::Words);
    println!("   {} -> {:?} = {:?}", chart.title, chart.labels, chart.values);

    // Example 7: Collecting warnings instead of logging them
    println!("\n7. Missing sources degrade to warnings:");
    let sink = RecordingDiagnostics::new();
    let empty = Aggregator::from_sources_with(
        &reader,
        &["does_not_exist.json"],
        &IngestConfig::new(),
        &sink,
    )?;
    println!("   {} senders, warnings: {:?}", empty.len(), sink.warnings());

    println!("\n=== Done! ===");
    Ok(())
}
