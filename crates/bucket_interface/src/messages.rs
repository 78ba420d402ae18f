//! Localized message lookup capability.

/// Resolves interface messages by key.
pub trait MessageResolver: Send + Sync {
    /// Text of the message `key` with `$1`, `$2`, ... replaced by `params`.
    fn message(&self, key: &str, params: &[&str]) -> String;

    /// Text of a message that takes no parameters.
    fn plain(&self, key: &str) -> String {
        self.message(key, &[])
    }
}
