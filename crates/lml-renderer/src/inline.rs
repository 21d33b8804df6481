//! Inline renderer: the per-line character state machine.
//!
//! Walks a paragraph line rune by rune interpreting the control characters
//! `\`, `*`, `` ` ``, `[` and `]`, writing HTML fragments to the output sink
//! as it goes. All state is local to one call; nothing survives the line.

use std::io::Write;
use std::mem;

use crate::error::LineError;
use crate::escape::{escape_href, escape_html, write_escaped};

const BOLD_START: &[u8] = b"<strong>";
const BOLD_END: &[u8] = b"</strong>";
const CODE_START: &[u8] = b"<code>";
const CODE_END: &[u8] = b"</code>";

/// Interpretation mode for the next rune.
///
/// Code and link modes are mutually exclusive by construction. Bold and
/// escape-pending are tracked separately: an open bold span stays meaningful
/// across code spans, and an escape modifies the next rune in any mode.
enum Mode {
    Default,
    /// Inside `` ` ``…`` ` ``. Holds the byte offset of the opening backtick.
    InCode { opened: usize },
    /// Inside `[`…`]`. Accumulates raw content for the URL/label split.
    InLink { opened: usize, content: String },
}

/// Render one paragraph line's content to `out`.
///
/// Offsets in returned errors are byte offsets within `line`.
pub(crate) fn render_line<W: Write>(line: &str, out: &mut W) -> Result<(), LineError> {
    let mut mode = Mode::Default;
    let mut bold_open: Option<usize> = None;
    let mut escape_pending = false;

    for (offset, c) in line.char_indices() {
        if escape_pending {
            escape_pending = false;
            // Escaped runes are literal data. Inside a link they are buffered
            // raw; escaping happens when the link is rendered.
            if let Mode::InLink { content, .. } = &mut mode {
                content.push(c);
            } else {
                write_escaped(out, c)?;
            }
            continue;
        }
        match mode {
            Mode::InLink { ref mut content, .. } => match c {
                '\\' => escape_pending = true,
                ']' => {
                    render_link(&mem::take(content), out)?;
                    mode = Mode::Default;
                }
                // No other character is special inside a link.
                _ => content.push(c),
            },
            Mode::InCode { .. } => match c {
                '\\' => escape_pending = true,
                '`' => {
                    out.write_all(CODE_END)?;
                    mode = Mode::Default;
                }
                _ => write_escaped(out, c)?,
            },
            Mode::Default => match c {
                '\\' => escape_pending = true,
                '*' => {
                    if bold_open.is_some() {
                        out.write_all(BOLD_END)?;
                        bold_open = None;
                    } else {
                        out.write_all(BOLD_START)?;
                        bold_open = Some(offset);
                    }
                }
                '`' => {
                    out.write_all(CODE_START)?;
                    mode = Mode::InCode { opened: offset };
                }
                '[' => {
                    mode = Mode::InLink {
                        opened: offset,
                        content: String::new(),
                    };
                }
                _ => write_escaped(out, c)?,
            },
        }
    }

    // A trailing lone `\` simply drops; only unclosed spans are errors.
    if let Some(offset) = bold_open {
        return Err(LineError::UnclosedBold { offset });
    }
    match mode {
        Mode::Default => Ok(()),
        Mode::InCode { opened } => Err(LineError::UnclosedCode { offset: opened }),
        Mode::InLink { opened, .. } => Err(LineError::UnclosedLink { offset: opened }),
    }
}

/// Render a closed link's accumulated content as an anchor element.
///
/// The content splits on the first space into URL and label; both halves must
/// be non-empty. The URL is escaped for the `href` attribute context, the
/// label for element content.
fn render_link<W: Write>(content: &str, out: &mut W) -> Result<(), LineError> {
    let (url, label) = content.split_once(' ').unwrap_or((content, ""));
    if url.is_empty() || label.is_empty() {
        return Err(LineError::MalformedLink {
            content: content.to_owned(),
        });
    }
    write!(
        out,
        r#"<a href="{}">{}</a>"#,
        escape_href(url),
        escape_html(label)
    )?;
    Ok(())
}
