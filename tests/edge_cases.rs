//! Edge case tests for chatstats
//!
//! These tests cover boundary conditions in counting, grouping, reading,
//! and report output that the unit tests only touch lightly.

use chatstats::MessageRecord;
use chatstats::core::output::{to_csv, to_json, to_jsonl};
use chatstats::core::{
    AggregationIndex, Aggregator, ChartMetric, PersonProfile, build_report, count_keywords,
};
use chatstats::reader::SourceReader;
use chatstats::readers::MessengerReader;
use chrono::{Datelike, TimeZone, Utc};

fn aggregator_of(records: Vec<MessageRecord>) -> Aggregator {
    Aggregator::from_index(AggregationIndex::from_records(records))
}

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_char_count_uses_scalar_values() {
    let profile = PersonProfile::new(
        "Иван",
        vec![
            MessageRecord::new("Иван", "Привет мир"),
            MessageRecord::new("Иван", "🎉🔥"),
        ],
    );
    assert_eq!(profile.char_count(), 12);
    assert_eq!(profile.word_count(), 3);
}

#[test]
fn test_combining_diacritics_count_separately() {
    // "e" followed by a combining acute accent
    let profile = PersonProfile::new("Zoë", vec![MessageRecord::new("Zoë", "cafe\u{301}")]);
    assert_eq!(profile.char_count(), 5);
    assert_eq!(profile.word_count(), 1);
}

#[test]
fn test_cyrillic_keyword_case_folding() {
    let counts = count_keywords("ПРИВЕТ привет Привет", &["привет"]);
    assert_eq!(counts.get("привет"), Some(3));
}

#[test]
fn test_word_frequencies_fold_case() {
    let profile = PersonProfile::new(
        "Alice",
        vec![MessageRecord::new("Alice", "Hello HELLO hello\tworld\nWorld")],
    );
    assert_eq!(profile.word_frequencies().get("hello"), Some(&3));
    assert_eq!(profile.word_frequencies().get("world"), Some(&2));
    assert_eq!(profile.word_count(), 5);
}

#[test]
fn test_zero_width_characters_in_sender() {
    let aggregator = aggregator_of(vec![
        MessageRecord::new("User\u{200B}Name", "a"),
        MessageRecord::new("UserName", "b"),
    ]);
    // distinct senders, nothing is normalized
    assert_eq!(aggregator.len(), 2);
}

// =========================================================================
// Keyword boundary tests
// =========================================================================

#[test]
fn test_overlapping_occurrences_are_not_double_counted() {
    let counts = count_keywords("lololo", &["lolo", "lo"]);
    assert_eq!(counts.get("lolo"), Some(1));
    assert_eq!(counts.get("lo"), Some(1));
}

#[test]
fn test_removal_can_join_fragments() {
    // removing "world" leaves "hello" + "lo" glued together
    let counts = count_keywords("helworldlo", &["world", "lo", "hello"]);
    assert_eq!(counts.get("world"), Some(1));
    assert_eq!(counts.get("hello"), Some(1));
    assert_eq!(counts.get("lo"), Some(0));
}

#[test]
fn test_empty_keyword_counts_zero() {
    let counts = count_keywords("anything at all", &["", "a"]);
    assert_eq!(counts.get(""), Some(0));
    assert_eq!(counts.get("a"), Some(3));
}

#[test]
fn test_keyword_longer_than_text() {
    let counts = count_keywords("hi", &["hello"]);
    assert_eq!(counts.get("hello"), Some(0));
}

#[test]
fn test_whitespace_keyword() {
    let counts = count_keywords("a b c", &[" "]);
    assert_eq!(counts.get(" "), Some(2));
}

#[test]
fn test_empty_text_reports_every_keyword() {
    let counts = count_keywords("", &["x", "y"]);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.total(), 0);
}

#[test]
fn test_no_keywords() {
    let counts = count_keywords::<&str>("hello", &[]);
    assert!(counts.is_empty());
}

#[test]
fn test_very_long_content() {
    let text = "hello ".repeat(10_000);
    let profile = PersonProfile::new("Alice", vec![MessageRecord::new("Alice", text)]);
    assert_eq!(profile.word_count(), 10_000);
    assert_eq!(profile.char_count(), 60_000);
    assert_eq!(profile.count(&["hello"]).get("hello"), Some(10_000));
}

// =========================================================================
// Grouping boundary tests
// =========================================================================

#[test]
fn test_empty_sender_is_a_person() {
    let aggregator = aggregator_of(vec![
        MessageRecord::new("", "anonymous"),
        MessageRecord::new("Alice", "hi"),
        MessageRecord::new("", "again"),
    ]);
    assert_eq!(aggregator.names().collect::<Vec<_>>(), vec!["", "Alice"]);
    assert_eq!(aggregator.person("").map(PersonProfile::message_count), Some(2));
}

#[test]
fn test_whitespace_only_messages_are_counted() {
    let aggregator = aggregator_of(vec![MessageRecord::new("Bob", "   ")]);
    let stats = aggregator.person("Bob").map(PersonProfile::basic_info);
    let stats = stats.unwrap();
    assert_eq!(stats.messages_sent, 1);
    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.char_count, 3);
}

#[test]
fn test_empty_aggregator() {
    let aggregator = Aggregator::new();
    assert!(aggregator.is_empty());
    assert_eq!(aggregator.totals().words_per_message(), 0.0);
    assert_eq!(aggregator.count(&["x"]).get("x"), Some(0));

    let chart = aggregator.chart_data(ChartMetric::Messages);
    assert!(chart.labels.is_empty());
    assert_eq!(chart.total(), 0);
}

#[test]
fn test_sender_case_is_significant() {
    let aggregator = aggregator_of(vec![
        MessageRecord::new("alice", "a"),
        MessageRecord::new("Alice", "b"),
    ]);
    assert_eq!(aggregator.len(), 2);
}

// =========================================================================
// Timestamp tests
// =========================================================================

#[test]
fn test_timestamp_unix_epoch() {
    let msg = MessageRecord::new("A", "x").with_sent_at(0);
    assert_eq!(msg.sent_at_datetime(), Utc.timestamp_opt(0, 0).single());
}

#[test]
fn test_timestamp_far_future() {
    let ns = 4_102_444_800_000_000_000; // 2100-01-01
    let msg = MessageRecord::new("A", "x").with_sent_at(ns);
    assert_eq!(msg.sent_at_datetime().map(|dt| dt.year()), Some(2100));
}

#[test]
fn test_profile_time_range_skips_unknown() {
    let profile = PersonProfile::new(
        "A",
        vec![
            MessageRecord::new("A", "no time"),
            MessageRecord::new("A", "later").with_sent_at(2_000_000_000),
            MessageRecord::new("A", "earlier").with_sent_at(1_000_000_000),
        ],
    );
    assert_eq!(profile.first_sent_at(), Utc.timestamp_opt(1, 0).single());
    assert_eq!(profile.last_sent_at(), Utc.timestamp_opt(2, 0).single());
}

// =========================================================================
// Messenger document tests
// =========================================================================

#[test]
fn test_null_document_is_empty() {
    let reader = MessengerReader::new();
    assert!(reader.read_str("null").unwrap().is_empty());
}

#[test]
fn test_whitespace_document_is_empty() {
    let reader = MessengerReader::new();
    assert!(reader.read_str("  \n\t ").unwrap().is_empty());
}

#[test]
fn test_null_messages_is_empty() {
    let reader = MessengerReader::new();
    assert!(reader.read_str(r#"{"messages": null}"#).unwrap().is_empty());
}

#[test]
fn test_message_without_any_fields() {
    let reader = MessengerReader::new();
    let messages = reader.read_str(r#"{"messages": [{}]}"#).unwrap();
    assert_eq!(messages, vec![MessageRecord::default()]);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let reader = MessengerReader::new();
    let messages = reader
        .read_str(
            r#"{"is_still_participant": true, "messages": [
                {"sender_name": "A", "content": "x", "reactions": [{"reaction": "👍"}], "type": "Generic"}
            ]}"#,
        )
        .unwrap();
    assert_eq!(messages.len(), 1);
}

#[test]
fn test_malformed_timestamps_are_dropped() {
    let reader = MessengerReader::new();
    for stamp in [
        r#""timestamp_ms": "later""#,
        r#""timestamp_ns": 1.7e18"#,
        r#""timestamp_ns": 10000000000000000000"#,
    ] {
        let doc = format!(r#"{{"messages": [{{"sender_name": "A", "content": "x", {stamp}}}]}}"#);
        let messages = reader.read_str(&doc).unwrap();
        assert_eq!(messages.len(), 1, "{stamp}");
        assert_eq!(messages[0].sender(), "A");
        assert_eq!(messages[0].sent_at(), None, "{stamp}");
    }
}

#[test]
fn test_off_type_content_becomes_empty() {
    let reader = MessengerReader::new();
    let messages = reader
        .read_str(r#"{"messages": [{"sender_name": "A", "content": {"text": "x"}}]}"#)
        .unwrap();
    assert_eq!(messages, vec![MessageRecord::new("A", "")]);
}

#[test]
fn test_messages_not_an_array_fails() {
    let reader = MessengerReader::new();
    let err = reader.read_str(r#"{"messages": 5}"#).unwrap_err();
    assert!(err.is_parse());
}

// =========================================================================
// Report escaping tests
// =========================================================================

#[test]
fn test_csv_escaping_special_chars() {
    let aggregator = aggregator_of(vec![MessageRecord::new("Doe; \"Johnny\"", "hi")]);
    let csv = to_csv(&build_report(&aggregator, &[] as &[&str])).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Name;Messages;Words;Characters"));
    assert_eq!(lines.next(), Some("\"Doe; \"\"Johnny\"\"\";1;1;2"));
}

#[test]
fn test_csv_keyword_with_delimiter() {
    let aggregator = aggregator_of(vec![MessageRecord::new("A", "a;b a;b")]);
    let csv = to_csv(&build_report(&aggregator, &["a;b"])).unwrap();
    assert!(csv.starts_with("Name;Messages;Words;Characters;\"a;b\"\n"));
    assert!(csv.contains("A;1;2;7;2"));
}

#[test]
fn test_json_escaping_special_chars() {
    let aggregator = aggregator_of(vec![MessageRecord::new("Quote\"d\nName", "x")]);
    let json = to_json(&build_report(&aggregator, &[] as &[&str])).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["name"], "Quote\"d\nName");
}

#[test]
fn test_jsonl_each_line_valid() {
    let aggregator = aggregator_of(vec![
        MessageRecord::new("Line\nBreak", "x"),
        MessageRecord::new("Иван", "y"),
    ]);
    let jsonl = to_jsonl(&build_report(&aggregator, &["x"])).unwrap();
    let lines: Vec<_> = jsonl.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let row: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(row["keywords"].is_object());
    }
}

#[test]
fn test_empty_report() {
    let csv = to_csv(&[]).unwrap();
    assert_eq!(csv, "Name;Messages;Words;Characters\n");
    assert_eq!(to_json(&[]).unwrap(), "[]");
}
