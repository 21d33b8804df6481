//! Renderer for LML, a line-oriented markup language for trusted author
//! content, producing a restricted HTML subset.
//!
//! An LML document is a sequence of physical lines. A line of exactly three
//! backticks toggles a fenced code block (`<pre><code>`…`</code></pre>`);
//! every other non-empty line outside a fence becomes its own `<p>` block.
//! Within a paragraph line, `*` toggles `<strong>`, `` ` `` opens and closes
//! `<code>`, `[url label]` renders a link, and `\` escapes the next
//! character. Text is entity-escaped for HTML; link URLs are additionally
//! percent-escaped for the `href` attribute context.
//!
//! Malformed markup is a hard stop: an inline construct left open at the end
//! of its line, or a fence left open at the end of the document, fails the
//! whole render rather than emitting broken HTML.
//!
//! # Example
//!
//! ```
//! use lml_renderer::render_to_string;
//!
//! let html = render_to_string("*Hello*, `world`").unwrap();
//! assert_eq!(html, "<p><strong>Hello</strong>, <code>world</code>\n</p>\n");
//! ```
//!
//! For streaming use, [`render`] takes any [`BufRead`](std::io::BufRead)
//! input and writes fragments incrementally to any
//! [`Write`](std::io::Write) sink.

mod error;
mod escape;
mod inline;
mod render;

pub use error::{LineError, RenderError};
pub use escape::{escape_href, escape_html};
pub use render::{render, render_to_string};
