//! Messenger JSON export reader.
//!
//! Reads the `message_N.json` files produced by Facebook's "Download Your
//! Information" tool. Messages are returned in file order.

use std::path::Path;

use crate::MessageRecord;
use crate::config::MessengerConfig;
use crate::diagnostics::Diagnostics;
use crate::error::ChatstatsError;
use crate::parsing::messenger::{MessengerExport, parse_messenger_message};
use crate::reader::{ExportSchema, SourceReader, load_source};

/// Reader for Messenger JSON exports.
///
/// # Example
///
/// ```rust
/// use chatstats::readers::MessengerReader;
/// use chatstats::reader::SourceReader;
///
/// let reader = MessengerReader::new();
/// let messages = reader.read_str(r#"{"messages": [{"sender_name": "Alice", "content": "Hi"}]}"#)?;
/// assert_eq!(messages[0].sender(), "Alice");
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessengerReader {
    config: MessengerConfig,
}

impl MessengerReader {
    /// Creates a new reader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with custom configuration.
    pub fn with_config(config: MessengerConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &MessengerConfig {
        &self.config
    }

    fn parse_content(
        &self,
        content: &str,
        path: Option<&Path>,
    ) -> Result<Vec<MessageRecord>, ChatstatsError> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let export: Option<MessengerExport> = serde_json::from_str(content)
            .map_err(|e| ChatstatsError::messenger_parse(e, path.map(Path::to_path_buf)))?;

        let fix = self.config.fix_encoding;
        Ok(export
            .and_then(|export| export.messages)
            .unwrap_or_default()
            .into_iter()
            .map(|msg| parse_messenger_message(msg, fix))
            .collect())
    }
}

impl SourceReader for MessengerReader {
    fn name(&self) -> &'static str {
        "Messenger"
    }

    fn schema(&self) -> ExportSchema {
        ExportSchema::Messenger
    }

    fn read(
        &self,
        path: &Path,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Vec<MessageRecord>, ChatstatsError> {
        match load_source(path, diagnostics)? {
            Some(content) => {
                let messages = self.parse_content(&content, Some(path))?;
                tracing::debug!(path = %path.display(), count = messages.len(), "parsed source");
                Ok(messages)
            }
            None => Ok(Vec::new()),
        }
    }

    fn read_str(&self, content: &str) -> Result<Vec<MessageRecord>, ChatstatsError> {
        self.parse_content(content, None)
    }
}
