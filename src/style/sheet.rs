//! Style sheet assembly.
//!
//! A [`StyleSheet`] is where compiled handles become CSS rules. Each handle
//! is inserted once under its class name; nested blocks are resolved against
//! the class selector:
//!
//! | Nested key | Emitted as |
//! |------------|------------|
//! | `&:hover` | `.css-abc:hover{...}` |
//! | `@media (...)` | `@media (...){.css-abc{...}}` |
//! | `img` | `.css-abc img{...}` |
//!
//! Selectors and values are emitted as written, so a handle compiled from
//! `&:hover: { ... }` yields the (ignored by browsers) `.css-abc:hover:{...}`.

use indexmap::IndexMap;

use super::serialize::{declaration, SerializedStyles};
use super::value::{StyleObject, StyleValue};

/// An ordered, de-duplicated collection of rules and keyframes.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: IndexMap<String, Vec<String>>,
    keyframes: IndexMap<String, String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a handle, returning the class name to attach to the node.
    ///
    /// Inserting the same styles twice is a no-op.
    pub fn insert(&mut self, styles: &SerializedStyles) -> String {
        let class = styles.class_name();
        if !self.rules.contains_key(&class) {
            let mut rules = Vec::new();
            emit_rules(&format!(".{}", class), styles.rules(), &mut rules);
            self.rules.insert(class.clone(), rules);
        }
        for keyframes in styles.keyframes() {
            self.keyframes
                .entry(keyframes.name().to_string())
                .or_insert_with(|| keyframes.to_css());
        }
        class
    }

    pub fn contains(&self, class: &str) -> bool {
        self.rules.contains_key(class)
    }

    /// Number of distinct class rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.keyframes.is_empty()
    }

    /// Emits the sheet, keyframes first, one rule per line.
    pub fn to_css(&self) -> String {
        let mut lines: Vec<&str> = self.keyframes.values().map(String::as_str).collect();
        for rules in self.rules.values() {
            lines.extend(rules.iter().map(String::as_str));
        }
        lines.join("\n")
    }
}

fn emit_rules(selector: &str, rules: &StyleObject, out: &mut Vec<String>) {
    let mut declarations = String::new();
    let mut nested = Vec::new();
    for (key, value) in rules.iter() {
        match value {
            StyleValue::Block(inner) => nested.push((key, inner)),
            _ => declarations.push_str(&declaration(key, value)),
        }
    }

    if !declarations.is_empty() {
        out.push(format!("{}{{{}}}", selector, declarations));
    }

    for (key, inner) in nested {
        if key.starts_with('@') {
            let mut body = Vec::new();
            emit_rules(selector, inner, &mut body);
            out.push(format!("{}{{{}}}", key, body.concat()));
        } else {
            emit_rules(&resolve_selector(selector, key), inner, out);
        }
    }
}

fn resolve_selector(parent: &str, key: &str) -> String {
    key.split(',')
        .map(|part| {
            let part = part.trim();
            if part.contains('&') {
                part.replace('&', parent)
            } else {
                format!("{} {}", parent, part)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
