//! Value formatting and error rendering.

use crate::{StaticMessages, WikiTextEscaper};
use bucket_core::{CellValue, ColumnType, PageConfig, Scalar};
use bucket_interface::{MessageResolver, TextEscaper};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::warn;

/// Turns bucket query results into wiki markup.
///
/// Holds no per-request state; one formatter can serve every render.
#[derive(Clone)]
pub struct ResultFormatter {
    pub(crate) config: PageConfig,
    pub(crate) escaper: Arc<dyn TextEscaper>,
    pub(crate) messages: Arc<dyn MessageResolver>,
}

impl std::fmt::Debug for ResultFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultFormatter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

impl ResultFormatter {
    /// Creates a formatter using wikitext escaping and English messages.
    pub fn new(config: PageConfig) -> Self {
        let escaper = Arc::new(WikiTextEscaper::new(config.magic_links().as_slice()));
        Self {
            config,
            escaper,
            messages: Arc::new(StaticMessages::english()),
        }
    }

    /// Replaces the text escaper.
    pub fn with_escaper(mut self, escaper: Arc<dyn TextEscaper>) -> Self {
        self.escaper = escaper;
        self
    }

    /// Replaces the message resolver.
    pub fn with_messages(mut self, messages: Arc<dyn MessageResolver>) -> Self {
        self.messages = messages;
        self
    }

    /// Rendering configuration.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Formats one cell according to its column's declared type.
    ///
    /// Repeated cells become a run of `<li>` fragments, one per non-empty
    /// element. Page titles become internal links, text is escaped, booleans
    /// read `True`/`False`, and every other type is emitted as-is.
    pub fn format_value(&self, value: &CellValue, data_type: &ColumnType, repeated: bool) -> String {
        match value {
            CellValue::Null => String::new(),
            CellValue::Scalar(scalar) if !repeated => self.format_scalar(scalar, data_type),
            // A list in a single-valued column still renders as a list.
            _ => self.format_list(value, data_type),
        }
    }

    fn format_list(&self, value: &CellValue, data_type: &ColumnType) -> String {
        let items = list_items(value);
        let mut out = String::new();
        for item in items.iter() {
            let formatted = match item {
                Some(scalar) => self.format_scalar(scalar, data_type),
                None => self.format_null_element(data_type),
            };
            if !formatted.is_empty() {
                out.push_str(&format!("<li class=\"{}\">", self.config.list_class()));
                out.push_str(&formatted);
            }
        }
        out
    }

    fn format_scalar(&self, scalar: &Scalar, data_type: &ColumnType) -> String {
        match data_type {
            ColumnType::Page if !scalar.is_empty() => {
                format!("[[:{}]]", self.escaper.escape(&scalar.to_string()))
            }
            ColumnType::Text => self.escaper.escape(&scalar.to_string()),
            ColumnType::Boolean => {
                if scalar.is_truthy() {
                    "True".to_string()
                } else {
                    "False".to_string()
                }
            }
            _ => scalar.to_string(),
        }
    }

    // A null element is empty text, except that booleans read it as false.
    fn format_null_element(&self, data_type: &ColumnType) -> String {
        match data_type {
            ColumnType::Boolean => "False".to_string(),
            _ => String::new(),
        }
    }

    /// Escapes `message` and wraps it in the error style.
    pub fn print_error(&self, message: &str) -> String {
        format!(
            "<strong class=\"{}\">{}</strong>",
            self.config.error_class(),
            self.escaper.escape(message)
        )
    }
}

/// Elements of a repeated cell.
///
/// Text is read as a serialized JSON array; anything that does not decode to
/// an array yields no elements, and so does a bare number or boolean.
fn list_items(value: &CellValue) -> Cow<'_, [Option<Scalar>]> {
    match value {
        CellValue::Null => Cow::Borrowed(&[]),
        CellValue::Sequence(items) => Cow::Borrowed(items.as_slice()),
        CellValue::Scalar(Scalar::Text(encoded)) => {
            let decoded = serde_json::from_str::<serde_json::Value>(encoded)
                .map_err(|e| e.to_string())
                .and_then(|json| CellValue::from_json(&json).map_err(|e| e.to_string()));
            match decoded {
                Ok(CellValue::Sequence(items)) => Cow::Owned(items),
                Ok(_) => {
                    warn!(value = %encoded, "Repeated value is not a list");
                    Cow::Borrowed(&[])
                }
                Err(error) => {
                    warn!(value = %encoded, %error, "Could not decode repeated value");
                    Cow::Borrowed(&[])
                }
            }
        }
        CellValue::Scalar(other) => {
            warn!(value = %other, "Repeated value is not a list");
            Cow::Borrowed(&[])
        }
    }
}
