//! Theme struct and construction.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::palette::{Palette, PaletteOptions};
use super::shadows::default_shadows;
use super::typography::{Typography, TypographyOptions};

/// Options accepted by [`create_theme`]; every field is optional.
///
/// Options deserialize from YAML (or any serde format):
///
/// ```yaml
/// palette:
///   primary: { main: "#ffb900", light: "#fedc81" }
///   grey: { 500: "#708090" }
/// typography:
///   font_family: ['"Nunito Sans"', sans-serif]
///   font_weight_bold: 700
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub palette: PaletteOptions,
    pub typography: TypographyOptions,
}

/// Design tokens shared read-only by every view.
///
/// A theme is built once with [`create_theme`]. The only change allowed
/// afterwards is [`Theme::with_shadow`], applied right after construction.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::{create_theme, ThemeOptions};
///
/// let theme = create_theme(ThemeOptions::default())
///     .with_shadow(6, "0 3px 6px rgba(0, 0, 0, 0.16)");
///
/// assert_eq!(theme.typography().font_weight_bold, 700);
/// assert_eq!(theme.shadow(6), Some("0 3px 6px rgba(0, 0, 0, 0.16)"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    palette: Palette,
    typography: Typography,
    shadows: Vec<String>,
}

/// Builds a theme, filling every unset option with its default.
///
/// Color strings and weights are not validated.
pub fn create_theme(options: ThemeOptions) -> Theme {
    Theme {
        palette: Palette::from_options(&options.palette),
        typography: Typography::from_options(&options.typography),
        shadows: default_shadows(),
    }
}

impl Theme {
    /// Creates a theme with default tokens.
    pub fn new() -> Self {
        create_theme(ThemeOptions::default())
    }

    /// Loads theme options from YAML text.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeLoadError> {
        let options: ThemeOptions = serde_yaml::from_str(source)?;
        Ok(create_theme(options))
    }

    /// Loads theme options from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ThemeLoadError> {
        Ok(create_theme(load_options(path)?))
    }

    /// Replaces one elevation shadow. Indices past the end are ignored.
    pub fn with_shadow(mut self, index: usize, shadow: &str) -> Self {
        if let Some(slot) = self.shadows.get_mut(index) {
            *slot = shadow.to_string();
        }
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    pub fn shadows(&self) -> &[String] {
        &self.shadows
    }

    pub fn shadow(&self, elevation: usize) -> Option<&str> {
        self.shadows.get(elevation).map(String::as_str)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads [`ThemeOptions`] from a YAML file.
pub fn load_options(path: impl AsRef<Path>) -> Result<ThemeOptions, ThemeLoadError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ThemeLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_yaml::from_str(&source)?)
}

/// Error returned when theme options cannot be loaded.
#[derive(Debug, Error)]
pub enum ThemeLoadError {
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme options: {0}")]
    Parse(#[from] serde_yaml::Error),
}
