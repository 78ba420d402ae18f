//! Wikitext and HTML escaping.

use bucket_interface::TextEscaper;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// URL protocols that are recognized without a `//` after the colon.
const COLON_PROTOCOLS: &[&str] = &[
    "bitcoin", "geo", "magnet", "mailto", "matrix", "news", "sip", "sips", "sms", "tel", "urn",
    "xmpp",
];

static COLON_PROTOCOL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = COLON_PROTOCOLS.join("|");
    // Word boundaries count ASCII letters only, so a protocol name glued to
    // an accented letter still gets escaped.
    Regex::new(&format!(r"(?i)(?-u:\b)({}):", alternatives)).expect("protocol pattern is valid")
});

/// Fixed token replacements. Line-start tokens are keyed with the preceding
/// newline or carriage return.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\"", "&#34;"),
    ("&", "&#38;"),
    ("'", "&#39;"),
    ("<", "&#60;"),
    ("=", "&#61;"),
    (">", "&#62;"),
    ("[", "&#91;"),
    ("]", "&#93;"),
    ("{", "&#123;"),
    ("|", "&#124;"),
    ("}", "&#125;"),
    (";", "&#59;"),
    ("!!", "&#33;!"),
    ("\n!", "\n&#33;"),
    ("\r!", "\r&#33;"),
    ("\n#", "\n&#35;"),
    ("\r#", "\r&#35;"),
    ("\n*", "\n&#42;"),
    ("\r*", "\r&#42;"),
    ("\n:", "\n&#58;"),
    ("\r:", "\r&#58;"),
    ("\n ", "\n&#32;"),
    ("\r ", "\r&#32;"),
    ("\n\n", "\n&#10;"),
    ("\r\n", "&#13;\n"),
    ("\n\r", "\n&#13;"),
    ("\r\r", "\r&#13;"),
    ("\n\t", "\n&#9;"),
    ("\r\t", "\r&#9;"),
    ("\n----", "\n&#45;---"),
    ("\r----", "\r&#45;---"),
    ("__", "_&#95;"),
    ("://", "&#58;//"),
    ("~~~", "~~&#126;"),
];

/// Escapes text so the wiki parser renders it literally.
///
/// Every token that could start markup is replaced by a numeric entity.
/// At each position the longest matching token wins; replaced text is never
/// rescanned.
#[derive(Debug, Clone)]
pub struct WikiTextEscaper {
    /// Replacements grouped by the first character of their token, longest
    /// token first.
    table: HashMap<char, Vec<(String, String)>>,
}

impl WikiTextEscaper {
    /// Creates an escaper that also protects the given magic-link prefixes
    /// (`ISBN`, `RFC`, `PMID`) when they are followed by whitespace.
    pub fn new<S: AsRef<str>>(magic_links: &[S]) -> Self {
        let mut entries: Vec<(String, String)> = REPLACEMENTS
            .iter()
            .map(|(token, entity)| (token.to_string(), entity.to_string()))
            .collect();

        for magic in magic_links {
            let magic = magic.as_ref();
            for (space, entity) in [
                (' ', "&#32;"),
                ('\t', "&#9;"),
                ('\r', "&#13;"),
                ('\n', "&#10;"),
                ('\u{c}', "&#12;"),
            ] {
                entries.push((format!("{}{}", magic, space), format!("{}{}", magic, entity)));
            }
        }

        let mut table: HashMap<char, Vec<(String, String)>> = HashMap::new();
        for (token, entity) in entries {
            if let Some(first) = token.chars().next() {
                table.entry(first).or_default().push((token, entity));
            }
        }
        for candidates in table.values_mut() {
            candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }

        Self { table }
    }

    fn replace_tokens(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            let matched = self.table.get(&c).and_then(|candidates| {
                candidates
                    .iter()
                    .find(|(token, _)| rest.starts_with(token.as_str()))
            });
            match matched {
                Some((token, entity)) => {
                    out.push_str(entity);
                    rest = &rest[token.len()..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        out
    }
}

impl Default for WikiTextEscaper {
    fn default() -> Self {
        Self::new::<&str>(&[])
    }
}

impl TextEscaper for WikiTextEscaper {
    fn escape(&self, text: &str) -> String {
        // The leading newline lets line-start tokens match at the very start.
        let replaced = self.replace_tokens(&format!("\n{}", text));
        let replaced = replaced.strip_prefix('\n').unwrap_or(&replaced);
        COLON_PROTOCOL_PATTERN
            .replace_all(replaced, "$1&#58;")
            .into_owned()
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(WikiTextEscaper::default().escape("Hello world"), "Hello world");
    }

    #[test]
    fn test_markup_characters() {
        let escaper = WikiTextEscaper::default();
        assert_eq!(escaper.escape("[[Main Page]]"), "&#91;&#91;Main Page&#93;&#93;");
        assert_eq!(escaper.escape("{{tpl|a=b}}"), "&#123;&#123;tpl&#124;a&#61;b&#125;&#125;");
        assert_eq!(escaper.escape("<b>"), "&#60;b&#62;");
        assert_eq!(escaper.escape("''x''"), "&#39;&#39;x&#39;&#39;");
    }

    #[test]
    fn test_line_start_tokens() {
        let escaper = WikiTextEscaper::default();
        assert_eq!(escaper.escape("* item"), "&#42; item");
        assert_eq!(escaper.escape("a\n#b"), "a\n&#35;b");
        assert_eq!(escaper.escape(":indent"), "&#58;indent");
        assert_eq!(escaper.escape("----"), "&#45;---");
        assert_eq!(escaper.escape("a*b"), "a*b");
    }

    #[test]
    fn test_multi_character_tokens() {
        let escaper = WikiTextEscaper::default();
        assert_eq!(escaper.escape("__TOC__"), "_&#95;TOC_&#95;");
        assert_eq!(escaper.escape("~~~~"), "~~&#126;~");
        assert_eq!(escaper.escape("a!!b"), "a&#33;!b");
    }

    #[test]
    fn test_protocols() {
        let escaper = WikiTextEscaper::default();
        assert_eq!(escaper.escape("https://example.org"), "https&#58;//example.org");
        assert_eq!(escaper.escape("MAILTO:me"), "MAILTO&#58;me");
        assert_eq!(escaper.escape("ratio 1:2"), "ratio 1:2");
        assert_eq!(escaper.escape("émailto:x"), "émailto&#58;x");
        assert_eq!(escaper.escape("xmailto:x"), "xmailto:x");
    }

    #[test]
    fn test_magic_links() {
        let escaper = WikiTextEscaper::new(&["ISBN"]);
        assert_eq!(escaper.escape("ISBN 123"), "ISBN&#32;123");
        assert_eq!(WikiTextEscaper::default().escape("ISBN 123"), "ISBN 123");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;"
        );
    }
}
