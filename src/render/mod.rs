//! Output renderers for mounted views.
//!
//! - [`HtmlRenderer`] serializes a node tree to markup and collects the
//!   styles it uses into a [`StyleSheet`](crate::StyleSheet).
//! - [`PageRenderer`] wraps that markup in the host page through a
//!   minijinja template.
//! - [`TerminalRenderer`] previews the tree with console styles.

mod html;
mod page;
mod terminal;

pub use html::HtmlRenderer;
pub use page::PageRenderer;
pub use terminal::TerminalRenderer;
