//! Theme configuration: design tokens shared by every view.
//!
//! This module provides:
//!
//! - [`Theme`]: palette, typography and elevation tokens built by [`create_theme`]
//! - [`ThemeOptions`]: partial options, deserializable from YAML
//! - [`AdaptiveTheme`]: light/dark theme pairs with OS detection
//! - [`ColorMode`]: light or dark color mode enum
//! - [`scaffold_theme`]: the theme this scaffold renders with
//!
//! Themes are read-only once built; views receive them through a
//! [`Context`](crate::Context).

mod adaptive;
mod palette;
mod scaffold;
mod shadows;
#[allow(clippy::module_inception)]
mod theme;
mod typography;

pub use adaptive::{detect_color_mode, set_theme_detector, AdaptiveTheme, ColorMode};
pub use palette::{
    contrast_text, BackgroundColors, CommonColorOptions, CommonColors, Palette, PaletteColor,
    PaletteColorOptions, PaletteMode, PaletteOptions, ShadeKey, TextColors, CONTRAST_THRESHOLD,
    TONAL_OFFSET,
};
pub use scaffold::{scaffold_options, scaffold_overrides, scaffold_theme, SCAFFOLD_SHADOW_6};
pub use shadows::{default_shadows, SHADOW_COUNT};
pub use theme::{create_theme, load_options, Theme, ThemeLoadError, ThemeOptions};
pub use typography::{FontFamily, Typography, TypographyOptions};
