//! Source readers, one per supported export schema.
//!
//! Each reader implements [`SourceReader`](crate::reader::SourceReader).
//!
//! - [`MessengerReader`] - Facebook Messenger JSON exports

mod messenger;

pub use messenger::MessengerReader;
