//! Synthetic Messenger export generator for benchmarks and manual testing.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [files] [messages] [output_dir]
//! Example: cargo run --features gen-test --bin gen_test -- 4 100000 inbox
//!
//! Writes `message_1.json` .. `message_N.json` into `output_dir`.

use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::json;

const ZALGO_CHARS: &[char] = &[
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0304}', '\u{0305}', '\u{0306}', '\u{0307}',
    '\u{0308}', '\u{0309}', '\u{030A}', '\u{030B}', '\u{030C}', '\u{030D}', '\u{030E}', '\u{030F}',
];

const EMOJIS: &[&str] = &["😀", "😂", "😍", "🤔", "🔥", "👍", "❤️", "🏳️‍🌈", "👨‍👩‍👧‍👦"];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "User;With;Semicolons",
    "User\"With\"Quotes",
    "",
    "🔥FireUser🔥",
];

const WORDS: &[&str] = &[
    "hello", "world", "blah", "helloworld", "worldwide", "lol", "ok", "see", "you", "tomorrow",
    "Hello", "WORLD", "yes", "no", "maybe",
];

// 2024-01-01T00:00:00Z
const START_NS: i64 = 1_704_067_200_000_000_000;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let files: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(3).map(String::as_str).unwrap_or("inbox");

    println!("🧪 Messenger Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Files:    {}", files);
    println!("   Messages: {} per file", count);
    println!("   Output:   {}", output);
    println!();

    fs::create_dir_all(output)?;
    let start = Instant::now();
    let mut bytes_written = 0;
    let mut rng = rand::thread_rng();

    for n in 1..=files {
        let path = Path::new(output).join(format!("message_{}.json", n));
        bytes_written += generate_messenger(&mut rng, count, &path)?;
        println!("   Wrote {}", path.display());
    }

    let elapsed = start.elapsed();
    let total = files * count;
    println!("\n✅ Done!");
    println!("   Size:  {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    println!("   Speed: {:.0} msg/s", total as f64 / elapsed.as_secs_f64());

    Ok(())
}

/// Writes one export with `count` messages, newest first as Meta does.
/// Returns the number of bytes written.
fn generate_messenger(rng: &mut impl Rng, count: usize, path: &Path) -> io::Result<usize> {
    let mut writer = BufWriter::with_capacity(1024 * 1024, File::create(path)?);
    let mut bytes_written = 0;

    let participants: Vec<_> = SENDERS.iter().map(|name| json!({ "name": name })).collect();
    let header = format!(
        "{{\n  \"participants\": {},\n  \"messages\": [\n",
        serde_json::to_string(&participants)?
    );
    writer.write_all(header.as_bytes())?;
    bytes_written += header.len();

    for i in 0..count {
        let sender = SENDERS.choose(rng).copied().unwrap_or("Alice");
        let timestamp_ms = (START_NS / 1_000_000) + ((count - i) as i64) * 60_000;

        let mut message = json!({
            "sender_name": sender,
            "timestamp_ms": timestamp_ms,
        });
        // Roughly one in twenty messages is a photo without text content
        if i % 20 != 7 {
            message["content"] = json!(generate_content(rng, i));
        } else {
            message["photos"] = json!([{ "uri": format!("photos/{}.jpg", i) }]);
        }

        let comma = if i + 1 < count { "," } else { "" };
        let line = format!("    {}{}\n", serde_json::to_string(&message)?, comma);
        writer.write_all(line.as_bytes())?;
        bytes_written += line.len();
    }

    let footer = "  ]\n}\n";
    writer.write_all(footer.as_bytes())?;
    bytes_written += footer.len();
    writer.flush()?;

    Ok(bytes_written)
}

fn generate_content(rng: &mut impl Rng, index: usize) -> String {
    match index % 10 {
        // Plain sentences built from keyword-heavy vocabulary
        0..=4 => {
            let len = rng.gen_range(1..=12);
            (0..len)
                .filter_map(|_| WORDS.choose(rng).copied())
                .collect::<Vec<_>>()
                .join(" ")
        }
        5 => format!("Message with semicolons; here; and; there; index={}", index),
        6 => format!("Message with\nnewlines\nand\ttabs #{}", index),
        7 => {
            let emojis: String = (0..20).filter_map(|_| EMOJIS.choose(rng).copied()).collect();
            format!("Emoji spam: {} #{}", emojis, index)
        }
        8 => generate_zalgo("hello world", rng),
        _ => format!("Mixed: Hello Привет 你好 🌍 #{}", index),
    }
}

fn generate_zalgo(text: &str, rng: &mut impl Rng) -> String {
    let mut result = String::new();
    for c in text.chars() {
        result.push(c);
        for _ in 0..rng.gen_range(1..=5) {
            result.push(ZALGO_CHARS[rng.gen_range(0..ZALGO_CHARS.len())]);
        }
    }
    result
}
