//! Markup escaping capability.

/// Escapes untrusted text before it is embedded in markup.
///
/// Implementations must be total: every input string has an escaped form.
pub trait TextEscaper: Send + Sync {
    /// Escapes `text` so it renders literally.
    fn escape(&self, text: &str) -> String;
}

impl<F> TextEscaper for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn escape(&self, text: &str) -> String {
        self(text)
    }
}
