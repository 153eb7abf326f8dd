//! Style objects: the typed body of a CSS rule.

use indexmap::IndexMap;

use super::animation::Keyframes;

/// A single entry of a [`StyleObject`].
///
/// Flat declarations are either text or numbers; nested blocks carry
/// pseudo-selector (`&:hover`) or at-rule (`@media ...`) scoped rules.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A declaration value written as text, passed through verbatim.
    Property(String),
    /// A numeric declaration value; non-zero values get a `px` unit unless the
    /// property is unitless.
    Number(f64),
    /// A nested rule keyed by its selector or at-rule prelude.
    Block(StyleObject),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Property(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Property(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<u16> for StyleValue {
    fn from(value: u16) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<StyleObject> for StyleValue {
    fn from(value: StyleObject) -> Self {
        StyleValue::Block(value)
    }
}

/// An insertion-ordered map of style properties and nested rules.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::StyleObject;
///
/// let logo = StyleObject::new()
///     .set("height", "6em")
///     .set("willChange", "filter")
///     .block("&:hover", StyleObject::new().set("filter", "drop-shadow(0 0 2em #646cffaa)"));
///
/// assert_eq!(logo.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    entries: IndexMap<String, StyleValue>,
    keyframes: Vec<Keyframes>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property or nested rule, returning the object for chaining.
    ///
    /// Setting an existing key replaces its value in place.
    pub fn set<V: Into<StyleValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a nested rule under a selector or at-rule prelude.
    pub fn block(self, selector: &str, rules: StyleObject) -> Self {
        self.set(selector, StyleValue::Block(rules))
    }

    /// Sets `animation` to run the given keyframes, recording them as a dependency.
    pub fn animation(mut self, keyframes: &Keyframes, timing: &str) -> Self {
        self.uses(keyframes);
        self.set("animation", format!("{} {}", keyframes.name(), timing))
    }

    /// Inserts a property or nested rule in place.
    pub fn insert<V: Into<StyleValue>>(&mut self, key: &str, value: V) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Records keyframes referenced by this object so style sheets emit them.
    pub fn uses(&mut self, keyframes: &Keyframes) {
        if !self.keyframes.iter().any(|k| k.name() == keyframes.name()) {
            self.keyframes.push(keyframes.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All keyframes referenced by this object and its nested blocks.
    pub fn keyframes(&self) -> Vec<&Keyframes> {
        let mut found: Vec<&Keyframes> = Vec::new();
        self.collect_keyframes(&mut found);
        found
    }

    fn collect_keyframes<'a>(&'a self, found: &mut Vec<&'a Keyframes>) {
        for keyframes in &self.keyframes {
            if !found.iter().any(|k| k.name() == keyframes.name()) {
                found.push(keyframes);
            }
        }
        for value in self.entries.values() {
            if let StyleValue::Block(inner) = value {
                inner.collect_keyframes(found);
            }
        }
    }

    /// Merges `other` into this object.
    ///
    /// Later declarations replace earlier ones; nested blocks under the same
    /// key are merged recursively.
    pub fn merge(&mut self, other: &StyleObject) {
        for (key, value) in &other.entries {
            match (self.entries.get_mut(key), value) {
                (Some(StyleValue::Block(existing)), StyleValue::Block(incoming)) => {
                    existing.merge(incoming);
                }
                _ => {
                    self.entries.insert(key.clone(), value.clone());
                }
            }
        }
        for keyframes in &other.keyframes {
            self.uses(keyframes);
        }
    }
}
