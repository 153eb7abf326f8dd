//! Named animations.

use std::fmt;

use super::serialize::{hash, serialize_object};
use super::template::parse_rules;
use super::value::StyleObject;

/// A named `@keyframes` animation.
///
/// The name is derived from the frames, so identical animations share a name.
/// `Display` writes the name, which lets keyframes be interpolated directly
/// into an `animation` value.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    name: String,
    frames: StyleObject,
}

impl Keyframes {
    /// Creates keyframes from a frame object (`from`, `to`, `50%`, ...).
    pub fn new(frames: StyleObject) -> Self {
        let name = format!("animation-{}", hash(&serialize_object(&frames)));
        Self { name, frames }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &StyleObject {
        &self.frames
    }

    /// The `@keyframes` rule for a style sheet.
    pub fn to_css(&self) -> String {
        format!("@keyframes {}{{{}}}", self.name, serialize_object(&self.frames))
    }
}

impl fmt::Display for Keyframes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Compiles keyframes written as CSS text.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::keyframes;
///
/// let spin = keyframes("from { transform: rotate(0deg); } to { transform: rotate(360deg); }");
/// assert!(spin.name().starts_with("animation-"));
/// assert!(spin.to_css().contains("to{transform:rotate(360deg);}"));
/// ```
pub fn keyframes(source: &str) -> Keyframes {
    Keyframes::new(parse_rules(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_writes_name() {
        let spin = keyframes("to { opacity: 1; }");
        assert_eq!(format!("{} infinite 20s linear", spin), format!("{} infinite 20s linear", spin.name()));
    }

    #[test]
    fn test_identical_frames_share_a_name() {
        let a = keyframes("from { opacity: 0 } to { opacity: 1 }");
        let b = keyframes("from{opacity:0}to{opacity:1}");
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_to_css() {
        let spin = keyframes("from { transform: rotate(0deg); }");
        assert_eq!(
            spin.to_css(),
            format!("@keyframes {}{{from{{transform:rotate(0deg);}}}}", spin.name())
        );
    }
}
