//! The style compilation primitive.
//!
//! [`css`] turns a [`StyleObject`] into a [`SerializedStyles`] handle: the
//! object is serialized to compact declaration text (`key:value;` and
//! `selector{...}`), and the text is hashed into a stable class name.
//! Nothing is validated. Unknown properties and malformed values are written
//! exactly as given and left for the consumer of the style sheet to ignore.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::animation::Keyframes;
use super::value::{StyleObject, StyleValue};

/// Properties whose numeric values are written without a `px` unit.
static UNITLESS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "animation-iteration-count",
        "aspect-ratio",
        "border-image-outset",
        "border-image-slice",
        "border-image-width",
        "column-count",
        "columns",
        "flex",
        "flex-grow",
        "flex-positive",
        "flex-shrink",
        "flex-negative",
        "flex-order",
        "grid-row",
        "grid-row-end",
        "grid-row-span",
        "grid-row-start",
        "grid-column",
        "grid-column-end",
        "grid-column-span",
        "grid-column-start",
        "font-weight",
        "line-height",
        "opacity",
        "order",
        "orphans",
        "scale",
        "tab-size",
        "widows",
        "z-index",
        "zoom",
        "-webkit-line-clamp",
        "fill-opacity",
        "flood-opacity",
        "stop-opacity",
        "stroke-dasharray",
        "stroke-dashoffset",
        "stroke-miterlimit",
        "stroke-opacity",
        "stroke-width",
    ]
    .into_iter()
    .collect()
});

/// A compiled style handle, ready to attach to a markup node.
///
/// Handles are opaque to views: they are produced by [`css`],
/// [`css_props`](super::css_props) and [`css_template`](super::css_template)
/// and consumed by a [`StyleSheet`](super::StyleSheet).
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedStyles {
    name: String,
    styles: String,
    rules: StyleObject,
}

impl SerializedStyles {
    /// The content hash identifying these styles.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class name a renderer attaches to the styled node.
    pub fn class_name(&self) -> String {
        format!("css-{}", self.name)
    }

    /// The serialized declaration text.
    pub fn styles(&self) -> &str {
        &self.styles
    }

    /// The compiled rule tree.
    pub fn rules(&self) -> &StyleObject {
        &self.rules
    }

    /// Keyframes these styles depend on.
    pub fn keyframes(&self) -> Vec<&Keyframes> {
        self.rules.keyframes()
    }

    /// Returns the serialized value of a top-level declaration.
    ///
    /// The property may be given in camelCase or hyphenated form.
    pub fn declaration(&self, property: &str) -> Option<String> {
        let wanted = property_name(property);
        self.rules.iter().rev().find_map(|(key, value)| match value {
            StyleValue::Block(_) => None,
            _ if property_name(key) == wanted => Some(property_value(&wanted, value)),
            _ => None,
        })
    }

    /// Combines several handles into one, in order.
    ///
    /// Later declarations win; nested blocks with the same selector merge.
    pub fn compose(handles: &[&SerializedStyles]) -> SerializedStyles {
        let mut rules = StyleObject::new();
        for handle in handles {
            rules.merge(&handle.rules);
        }
        css(&rules)
    }
}

/// Compiles a style object into a [`SerializedStyles`] handle.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::{css, StyleObject};
///
/// let layout = css(&StyleObject::new()
///     .set("display", "flex")
///     .set("flexDirection", "row")
///     .set("gap", 48));
///
/// assert_eq!(layout.styles(), "display:flex;flex-direction:row;gap:48px;");
/// assert!(layout.class_name().starts_with("css-"));
/// ```
pub fn css(rules: &StyleObject) -> SerializedStyles {
    let styles = serialize_object(rules);
    let name = hash(&styles);
    tracing::trace!(%name, "compiled styles");
    SerializedStyles {
        name,
        styles,
        rules: rules.clone(),
    }
}

pub(crate) fn serialize_object(rules: &StyleObject) -> String {
    let mut out = String::new();
    for (key, value) in rules.iter() {
        match value {
            StyleValue::Block(inner) => {
                out.push_str(key);
                out.push('{');
                out.push_str(&serialize_object(inner));
                out.push('}');
            }
            _ => out.push_str(&declaration(key, value)),
        }
    }
    out
}

/// Serializes one flat declaration as `name:value;`.
pub(crate) fn declaration(key: &str, value: &StyleValue) -> String {
    let name = property_name(key);
    let value = property_value(&name, value);
    format!("{}:{};", name, value)
}

/// Hyphenates camelCase property names; custom properties are kept as written.
pub(crate) fn property_name(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }
    let mut name = String::with_capacity(key.len() + 4);
    if key
        .strip_prefix("ms")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
    {
        name.push('-');
    }
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

pub(crate) fn property_value(name: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Property(text) => text.clone(),
        StyleValue::Number(n) if *n == 0.0 || UNITLESS.contains(name) || name.starts_with("--") => {
            format!("{}", n)
        }
        StyleValue::Number(n) => format!("{}px", n),
        StyleValue::Block(inner) => serialize_object(inner),
    }
}

/// MurmurHash2 of the serialized text, written in base 36.
pub(crate) fn hash(text: &str) -> String {
    const M: u32 = 0x5bd1_e995;
    let bytes = text.as_bytes();
    let mut h: u32 = 0;

    let mut chunks = bytes.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> 24;
        h = k.wrapping_mul(M) ^ h.wrapping_mul(M);
    }

    let tail = chunks.remainder();
    if tail.len() == 3 {
        h ^= u32::from(tail[2]) << 16;
    }
    if tail.len() >= 2 {
        h ^= u32::from(tail[1]) << 8;
    }
    if !tail.is_empty() {
        h ^= u32::from(tail[0]);
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;
    to_base36(h)
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
