//! Export structures and per-message conversion, shared by the readers.

pub mod messenger;

pub use messenger::{
    MessengerExport, MessengerRawMessage, fix_mojibake_encoding, parse_messenger_message,
};
