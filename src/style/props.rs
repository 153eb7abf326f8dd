//! Compiling named style declaration sets.

use indexmap::IndexMap;

use super::serialize::{css, SerializedStyles};
use super::value::StyleObject;

/// Named style objects, keyed by selector-like names such as `"logo"` or `"card"`.
pub type StylesObject = IndexMap<String, StyleObject>;

/// Compiled handles under the same names as their [`StylesObject`] source.
pub type SerializedStylesObject = IndexMap<String, SerializedStyles>;

/// Compiles every entry of a declaration set with [`css`].
///
/// The output has exactly the input's keys, in the input's order. The
/// conversion never fails and performs no validation.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::{css_props, StyleObject, StylesObject};
///
/// let mut styles = StylesObject::new();
/// styles.insert("card".into(), StyleObject::new().set("padding", "2em"));
/// styles.insert("readTheDocs".into(), StyleObject::new().set("color", "#888"));
///
/// let compiled = css_props(&styles);
/// assert_eq!(compiled.len(), 2);
/// assert_eq!(compiled["card"].styles(), "padding:2em;");
/// ```
pub fn css_props(styles: &StylesObject) -> SerializedStylesObject {
    styles
        .iter()
        .map(|(selector, properties)| (selector.clone(), css(properties)))
        .collect()
}
