//! Messenger export structures and record conversion.
//!
//! A Messenger export is a JSON document with a top-level `messages` array:
//!
//! ```json
//! { "messages": [
//!     { "sender_name": "Alice", "content": "Hi", "timestamp_ns": 1705315800000000000 }
//! ] }
//! ```
//!
//! Every field of a message object is optional. Missing fields fall back to
//! an empty sender, empty text, and no timestamp. A field holding a value of
//! the wrong type is treated as missing; only a document that is not JSON at
//! all fails to parse.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::MessageRecord;

/// Raw Messenger message structure for deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct MessengerRawMessage {
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub timestamp_ns: Option<i64>,
    /// Newer Meta exports carry milliseconds instead of nanoseconds.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub timestamp_ms: Option<i64>,
}

/// Accepts any JSON value; keeps it only if it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Accepts any JSON value; keeps it only if it is an integer that fits `i64`.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| v.as_i64()))
}

/// Messenger export wrapper.
#[derive(Debug, Default, Deserialize)]
pub struct MessengerExport {
    #[serde(default)]
    pub messages: Option<Vec<MessengerRawMessage>>,
}

/// Fix Meta's broken encoding (Mojibake).
///
/// Meta exports UTF-8 text as if each byte were an ISO-8859-1 character, so
/// "Привет" arrives as "ÐŸÑ€Ð¸Ð²ÐµÑ‚". Each char is taken as its byte value
/// and the bytes are decoded again as UTF-8.
///
/// Text that cannot be mojibake (any char above U+00FF) or that does not
/// decode cleanly is returned unchanged.
pub fn fix_mojibake_encoding(s: &str) -> String {
    if s.chars().any(|c| u32::from(c) > 0xFF) {
        return s.to_string();
    }
    let bytes: Vec<u8> = s.chars().map(|c| c as u8).collect();
    String::from_utf8(bytes).unwrap_or_else(|_| s.to_string())
}

/// Returns the send time in nanoseconds, preferring `timestamp_ns`.
pub fn resolve_timestamp_ns(msg: &MessengerRawMessage) -> Option<i64> {
    msg.timestamp_ns
        .or_else(|| msg.timestamp_ms.and_then(|ms| ms.checked_mul(1_000_000)))
}

/// Converts a raw Messenger message into a [`MessageRecord`].
///
/// Messages without content are kept with empty text.
pub fn parse_messenger_message(msg: MessengerRawMessage, fix_encoding: bool) -> MessageRecord {
    let sent_at = resolve_timestamp_ns(&msg);
    let sender = msg.sender_name.unwrap_or_default();
    let text = msg.content.unwrap_or_default();

    if fix_encoding {
        MessageRecord::with_metadata(
            fix_mojibake_encoding(&sender),
            fix_mojibake_encoding(&text),
            sent_at,
        )
    } else {
        MessageRecord::with_metadata(sender, text, sent_at)
    }
}
