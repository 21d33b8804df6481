//! Block scanner: drives line-by-line rendering of an LML document.

use std::io::{BufRead, Write};

use crate::error::RenderError;
use crate::escape::escape_html;
use crate::inline::render_line;

const CODE_BLOCK_START: &[u8] = b"<pre><code>";
const CODE_BLOCK_END: &[u8] = b"</code></pre>\n";
const TEXT_BLOCK_START: &[u8] = b"<p>";
const TEXT_BLOCK_END: &[u8] = b"\n</p>\n";

/// A line consisting solely of three backticks toggles code-block mode.
const FENCE: &str = "```";

/// Render an LML document from `input` to `output`.
///
/// Reads the document line by line and writes HTML fragments incrementally:
/// each non-empty line outside a fence becomes its own `<p>` block with
/// inline interpretation, fenced regions become `<pre><code>` blocks whose
/// content is passed through verbatim (entity-escaped only), and blank lines
/// outside a fence produce no output. The first error aborts the render;
/// fragments already written stay in the sink.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// lml_renderer::render("*Hello*, `world`".as_bytes(), &mut out).unwrap();
/// assert_eq!(out, b"<p><strong>Hello</strong>, <code>world</code>\n</p>\n");
/// ```
pub fn render<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), RenderError> {
    // Line number where the open fence started, None outside a fence.
    let mut fence_opened: Option<usize> = None;
    let mut line_no = 0_usize;

    for line in input.lines() {
        let line = line?;
        line_no += 1;

        if line == FENCE {
            if fence_opened.take().is_some() {
                output.write_all(CODE_BLOCK_END)?;
            } else {
                fence_opened = Some(line_no);
                output.write_all(CODE_BLOCK_START)?;
            }
        } else if fence_opened.is_some() {
            output.write_all(escape_html(&line).as_bytes())?;
            output.write_all(b"\n")?;
        } else if !line.is_empty() {
            output.write_all(TEXT_BLOCK_START)?;
            render_line(&line, &mut output).map_err(|source| RenderError::Line {
                line: line_no,
                source,
            })?;
            output.write_all(TEXT_BLOCK_END)?;
        }
        // Blank lines outside a fence emit nothing.
    }

    if let Some(line) = fence_opened {
        return Err(RenderError::UnclosedCodeBlock { line });
    }
    tracing::trace!("rendered document of {line_no} lines");
    Ok(())
}

/// Render an LML document held in a string, returning the HTML.
pub fn render_to_string(input: &str) -> Result<String, RenderError> {
    let mut out = Vec::with_capacity(input.len() * 2);
    render(input.as_bytes(), &mut out)?;
    // The renderer only writes complete UTF-8 sequences.
    Ok(String::from_utf8(out).expect("renderer output is valid UTF-8"))
}
