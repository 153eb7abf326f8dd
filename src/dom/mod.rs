//! Markup trees, host documents and queries.
//!
//! Views build [`Node`] trees with the element constructors ([`div`],
//! [`button`], ...). A [`Document`] provides the named container a tree is
//! mounted into, and [`Screen`] finds elements by text or accessible role.

mod document;
mod node;
mod query;

pub use document::Document;
pub use node::{a, button, code, div, fragment, h1, h2, img, p, span, text, Element, Node, NodePath};
pub use query::{Found, QueryError, Screen};
