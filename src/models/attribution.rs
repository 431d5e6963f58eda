//! The rendered annotation for a single line.
//!
//! An `Attribution` keeps its subject and body unencoded; encoding happens
//! when the mail-to URI is produced so the raw text stays inspectable.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use super::AuthorInfo;

/// Bytes left alone in URI data: ASCII alphanumerics plus `-`, `_`, `.`, `~`.
const URI_DATA: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub author: AuthorInfo,
    pub subject: String,
    pub body: String,
}

impl Attribution {
    /// `mailto:` URI with the subject and body percent-encoded.
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.author.email,
            encode_uri_data(&self.subject),
            encode_uri_data(&self.body),
        )
    }

    /// HTML anchor linking the author's name to `mailto_uri`.
    pub fn to_html_anchor(&self) -> String {
        format!(
            "<a href='{}'>{}</a>",
            escape_html(&self.mailto_uri()),
            escape_html(&self.author.name),
        )
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html_anchor())
    }
}

pub fn encode_uri_data(text: &str) -> String {
    utf8_percent_encode(text, URI_DATA).to_string()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn sample() -> Attribution {
        Attribution {
            author: AuthorInfo {
                name: "Jo <Ops> & Co".to_string(),
                email: "jo@example.com".to_string(),
            },
            subject: "Email from source browser".to_string(),
            body: "\n\nFile: src/a b.rs\nLine: 3\n\ncommit abc\n".to_string(),
        }
    }

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode_uri_data("aZ09-_.~"), "aZ09-_.~");
        assert_eq!(encode_uri_data("a b\n&?=/"), "a%20b%0A%26%3F%3D%2F");
        assert_eq!(encode_uri_data("é"), "%C3%A9");
    }

    #[test]
    fn test_mailto_uri_decodes_to_body() {
        let attribution = sample();
        let uri = attribution.mailto_uri();
        assert!(uri.starts_with("mailto:jo@example.com?subject=Email%20from%20source%20browser&body="));

        let encoded_body = uri.split("&body=").nth(1).unwrap();
        assert!(!encoded_body.contains(' '));
        assert!(!encoded_body.contains('\n'));
        let decoded = percent_decode_str(encoded_body).decode_utf8().unwrap();
        assert_eq!(decoded, attribution.body);
    }

    #[test]
    fn test_anchor_escapes_name() {
        let anchor = sample().to_string();
        assert!(anchor.starts_with("<a href='mailto:jo@example.com?subject="));
        assert!(anchor.ends_with(">Jo &lt;Ops&gt; &amp; Co</a>"));
    }
}
