//! HTML and URL escaping helpers.
//!
//! Two distinct policies: entity escaping for element content, and byte-wise
//! percent escaping for `href` attribute values. Link labels go through the
//! former, link URLs through the latter.

use std::borrow::Cow;
use std::io::{self, Write};
use std::slice;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

/// Bytes percent-encoded by [`escape_href`]: everything except ASCII
/// alphanumerics and the URL punctuation `!#$&*+,-./:;=?@[]_~`.
const HREF_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'?')
    .remove(b'@')
    .remove(b'[')
    .remove(b']')
    .remove(b'_')
    .remove(b'~');

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Characters rewritten by [`escape_html`].
const HTML_ESCAPABLE: &[char] = &['&', '<', '>', '"', '\''];

/// Escape text for HTML element content.
///
/// Rewrites `&`, `<`, `>`, `"` and `'` to entity references and leaves every
/// other character untouched. Borrows the input when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(HTML_ESCAPABLE) else {
        return Cow::Borrowed(text);
    };
    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Write a single character to `out`, escaped for HTML element content.
pub(crate) fn write_escaped<W: Write>(out: &mut W, c: char) -> io::Result<()> {
    match c {
        '&' => out.write_all(b"&amp;"),
        '<' => out.write_all(b"&lt;"),
        '>' => out.write_all(b"&gt;"),
        '"' => out.write_all(b"&#34;"),
        '\'' => out.write_all(b"&#39;"),
        _ => {
            let mut buf = [0u8; 4];
            out.write_all(c.encode_utf8(&mut buf).as_bytes())
        }
    }
}

/// Percent-encode a URL for use in an `href` attribute value.
///
/// ASCII alphanumerics and URL punctuation pass through unchanged, as does a
/// `%` that already heads a valid `%XX` triplet. Every other byte is encoded
/// with lowercase hex, so `<` becomes `%3c` and non-ASCII characters are
/// encoded per UTF-8 byte.
pub fn escape_href(url: &str) -> String {
    let bytes = url.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    for (i, &b) in bytes.iter().enumerate() {
        // Pre-encoded sequences pass through untouched.
        if b == b'%'
            && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
        {
            out.push('%');
            continue;
        }
        match percent_encode(slice::from_ref(&b), HREF_ENCODE_SET).next() {
            Some(plain) if plain.len() == 1 => out.push_str(plain),
            _ => {
                out.push('%');
                out.push(HEX_DIGITS[usize::from(b >> 4)] as char);
                out.push(HEX_DIGITS[usize::from(b & 0xf)] as char);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html_entities() {
        assert_eq!(
            escape_html("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#39;xss&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html(r#"a "quoted" & more"#), "a &#34;quoted&#34; &amp; more");
    }

    #[test]
    fn test_escape_html_borrows_clean_text() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
        assert!(matches!(escape_html(""), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_html_preserves_unicode() {
        assert_eq!(escape_html("héllo <wörld>"), "héllo &lt;wörld&gt;");
    }

    #[test]
    fn test_write_escaped_single_chars() {
        let mut out = Vec::new();
        for c in "<>&\"'é".chars() {
            write_escaped(&mut out, c).unwrap();
        }
        assert_eq!(out, "&lt;&gt;&amp;&#34;&#39;é".as_bytes());
    }

    #[test]
    fn test_escape_href_lowercase_hex() {
        assert_eq!(escape_href("<a"), "%3ca");
        assert_eq!(escape_href("a b"), "a%20b");
        assert_eq!(escape_href("\"x\""), "%22x%22");
    }

    #[test]
    fn test_escape_href_safe_punctuation_untouched() {
        let url = "https://example.com/a/b?q=1&x=2#frag";
        assert_eq!(escape_href(url), url);
    }

    #[test]
    fn test_escape_href_preencoded_passthrough() {
        assert_eq!(escape_href("a%20b"), "a%20b");
        // A bare percent is not a valid triplet and gets encoded.
        assert_eq!(escape_href("100%"), "100%25");
        assert_eq!(escape_href("%zz"), "%25zz");
    }

    #[test]
    fn test_escape_href_non_ascii_per_byte() {
        assert_eq!(escape_href("é"), "%c3%a9");
    }
}
