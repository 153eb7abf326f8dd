//! Themed component scaffold with three interchangeable styling paths.
//!
//! A view receives a read-only [`Theme`] through its [`Context`] and attaches
//! compiled style handles ([`SerializedStyles`]) to markup nodes. Handles
//! come from three places that all compile to the same thing:
//!
//! - **Style objects** built in code and compiled with [`css`]
//! - **Declaration sets**: named objects compiled at once with [`css_props`]
//! - **Template styles**: CSS text with `{{ theme... }}` interpolations,
//!   compiled with [`css_template`]
//!
//! # Quick Start
//!
//! ```rust
//! use styled_scaffold::{css, css_template, StyleObject, Theme};
//!
//! let theme = Theme::new();
//! let from_object = css(&StyleObject::new()
//!     .set("color", "#888")
//!     .set("fontWeight", theme.typography().font_weight_bold));
//! let from_template = css_template(
//!     "color: #888; font-weight: {{ theme.typography.font_weight_bold }};",
//!     &theme,
//!     &[],
//! ).unwrap();
//!
//! assert_eq!(from_object.styles(), from_template.styles());
//! assert_eq!(from_object.class_name(), from_template.class_name());
//! ```
//!
//! # Mounting
//!
//! Components implement [`Component`] and are mounted into a named container
//! of a [`Document`] under a [`ThemeProvider`]:
//!
//! ```rust
//! use styled_scaffold::{app::App, create_root, scaffold_theme, Document, ThemeProvider};
//!
//! let provider = ThemeProvider::new(scaffold_theme());
//! let mut mounted = create_root(Document::with_container("root"), "root")
//!     .unwrap()
//!     .render(&provider, App::new());
//!
//! let button = mounted.screen().get_all_by_role("button").unwrap()[0].path().clone();
//! mounted.click(&button);
//! assert_eq!(mounted.screen().get_all_by_text("count is 1").unwrap().len(), 3);
//! ```
//!
//! # Modules
//!
//! - [`theme`]: design tokens, YAML options, light/dark selection
//! - [`style`]: style objects, compilation, templates, keyframes, sheets
//! - [`dom`]: markup nodes, host documents, testing queries
//! - [`render`]: HTML, page and terminal output
//! - [`app`]: the scaffold's root view

pub mod app;
mod context;
pub mod dom;
mod error;
pub mod render;
mod runtime;
pub mod style;
pub mod theme;
mod util;

pub use context::{Context, ThemeProvider, ThemeSource};
pub use dom::Document;
pub use error::MountError;
pub use runtime::{create_root, Component, Mounted, Root};
pub use style::{
    css, css_props, css_template, keyframes, Keyframes, SerializedStyles, SerializedStylesObject,
    StyleError, StyleObject, StyleSheet, StyleValue, StylesObject,
};
pub use theme::{
    create_theme, scaffold_theme, AdaptiveTheme, ColorMode, Theme, ThemeLoadError, ThemeOptions,
};
pub use util::{parse_color, rgb_to_ansi256, truncate_to_width, Rgb};
