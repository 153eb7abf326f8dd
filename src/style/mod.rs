//! Style system: objects, compilation, templates and sheets.
//!
//! This module provides the three ways to produce a compiled handle:
//!
//! - [`css`]: compile one [`StyleObject`] built in code
//! - [`css_props`]: compile a named set of objects ([`StylesObject`]) into a
//!   same-keyed [`SerializedStylesObject`]
//! - [`css_template`]: compile CSS text with interpolated theme tokens
//!
//! All three produce [`SerializedStyles`], which a [`StyleSheet`] turns into
//! CSS rules. [`Keyframes`] name animations referenced from any of them.

mod animation;
mod error;
mod props;
mod serialize;
mod sheet;
mod template;
mod value;

pub use animation::{keyframes, Keyframes};
pub use error::StyleError;
pub use props::{css_props, SerializedStylesObject, StylesObject};
pub use serialize::{css, SerializedStyles};
pub use sheet::StyleSheet;
pub use template::css_template;
pub use value::{StyleObject, StyleValue};
