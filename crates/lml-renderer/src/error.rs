//! Error types for LML rendering.

use std::io;

/// Error from rendering a single paragraph line.
///
/// Offsets are byte offsets within the line, counted from 0, recorded at the
/// moment the offending control character was consumed.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// A bold span (`*`) was opened but never closed on this line.
    #[error("unclosed bold text (*) at position: {offset}")]
    UnclosedBold {
        /// Byte offset of the opening `*`.
        offset: usize,
    },

    /// An inline code span (`` ` ``) was opened but never closed on this line.
    #[error("unclosed code text (`) at position: {offset}")]
    UnclosedCode {
        /// Byte offset of the opening backtick.
        offset: usize,
    },

    /// A link (`[`) was opened but never closed on this line.
    #[error("unclosed link ([) at position: {offset}")]
    UnclosedLink {
        /// Byte offset of the opening `[`.
        offset: usize,
    },

    /// A closed link did not split into a non-empty URL and a non-empty label.
    #[error("links must have a URL and a label separated by a space, found: {content}")]
    MalformedLink {
        /// The raw accumulated link content.
        content: String,
    },

    /// The output sink rejected a write.
    #[error("I/O error")]
    Io(#[from] io::Error),
}

/// Error from rendering an LML document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A paragraph line failed to render.
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number within the document.
        line: usize,
        /// The underlying line error.
        source: LineError,
    },

    /// The document ended while a code fence was still open.
    #[error("unclosed code block (```) on line: {line}")]
    UnclosedCodeBlock {
        /// 1-based line number of the opening fence.
        line: usize,
    },

    /// Reading input or writing output failed.
    #[error("I/O error")]
    Io(#[from] io::Error),
}
