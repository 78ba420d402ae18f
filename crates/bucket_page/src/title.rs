//! Page titles and local link targets.

use bucket_core::{PageConfig, QueryParams};

/// A wiki page that links are built relative to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageTitle {
    text: String,
}

impl PageTitle {
    /// Creates a title from its display text, e.g. `Special:Bucket/exchange`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
        }
    }

    /// Display text of the title.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Storage form of the title: spaces become underscores.
    pub fn db_key(&self) -> String {
        self.text.replace(' ', "_")
    }

    /// Relative URL of the page with `query` appended.
    ///
    /// Without a query the pretty article path is used; with one, the entry
    /// script is addressed with an explicit `title` parameter.
    pub fn local_url(&self, query: &QueryParams, config: &PageConfig) -> String {
        let key = encode_title(&self.db_key());
        if query.is_empty() {
            config.article_path().replace("$1", &key)
        } else {
            format!(
                "{}?title={}&{}",
                config.script_path(),
                key,
                encode_query(query)
            )
        }
    }
}

impl std::fmt::Display for PageTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Percent-encodes a title, leaving characters that are safe in wiki paths.
fn encode_title(key: &str) -> String {
    percent_encode(key, |b| {
        b.is_ascii_alphanumeric() || b"-_.~;:@$!*(),/".contains(&b)
    }, false)
}

/// Form-encodes query parameters, joined with `&`.
fn encode_query(query: &QueryParams) -> String {
    query
        .iter()
        .map(|(name, value)| format!("{}={}", encode_form(name), encode_form(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_form(text: &str) -> String {
    percent_encode(text, |b| b.is_ascii_alphanumeric() || b"-_.".contains(&b), true)
}

fn percent_encode(text: &str, keep: impl Fn(u8) -> bool, space_as_plus: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for b in text.bytes() {
        if keep(b) {
            out.push(char::from(b));
        } else if b == b' ' && space_as_plus {
            out.push('+');
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_query_uses_article_path() {
        let title = PageTitle::new("Main Page");
        assert_eq!(
            title.local_url(&QueryParams::new(), &PageConfig::default()),
            "/wiki/Main_Page"
        );
    }

    #[test]
    fn test_url_with_query_uses_script() {
        let title = PageTitle::new("Special:Bucket/exchange");
        let query = QueryParams::new()
            .with("limit", 20)
            .with("where", "name = 'a b'");
        assert_eq!(
            title.local_url(&query, &PageConfig::default()),
            "/index.php?title=Special:Bucket/exchange&limit=20&where=name+%3D+%27a+b%27"
        );
    }

    #[test]
    fn test_title_encoding() {
        assert_eq!(encode_title("A&B?C"), "A%26B%3FC");
        assert_eq!(encode_title("Café"), "Caf%C3%A9");
    }
}
