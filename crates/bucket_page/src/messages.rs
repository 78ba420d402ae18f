//! In-memory interface messages.

use bucket_interface::MessageResolver;
use std::collections::HashMap;

/// Label of the previous-page button.
pub const MSG_PREVIOUS: &str = "bucket-previous";
/// Label of the next-page button.
pub const MSG_NEXT: &str = "bucket-next";
/// Tooltip of the previous-page button, `$1` is the page size.
pub const MSG_PREVIOUS_RESULTS: &str = "bucket-previous-results";
/// Tooltip of the next-page button, `$1` is the page size.
pub const MSG_NEXT_RESULTS: &str = "bucket-next-results";

/// Message table held in memory.
///
/// Unknown keys resolve to `⧼key⧽`, the way the wiki shows missing messages.
#[derive(Debug, Clone, Default)]
pub struct StaticMessages {
    messages: HashMap<String, String>,
}

impl StaticMessages {
    /// Creates an empty message table.
    pub fn new() -> Self {
        Self::default()
    }

    /// English messages for the pagination controls.
    pub fn english() -> Self {
        Self::new()
            .with_message(MSG_PREVIOUS, "Previous")
            .with_message(MSG_NEXT, "Next")
            .with_message(MSG_PREVIOUS_RESULTS, "Previous $1 results")
            .with_message(MSG_NEXT_RESULTS, "Next $1 results")
    }

    /// Adds or replaces a message.
    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }
}

impl MessageResolver for StaticMessages {
    fn message(&self, key: &str, params: &[&str]) -> String {
        match self.messages.get(key) {
            Some(text) => substitute(text, params),
            None => format!("⧼{}⧽", key),
        }
    }
}

/// Replaces `$1`..`$n` with the matching parameter. Placeholders without a
/// parameter are left as written.
fn substitute(text: &str, params: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let param = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| params.get(index));
        match param {
            Some(value) => {
                out.push_str(value);
                rest = &after[digits..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
