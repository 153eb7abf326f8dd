//! Typography tokens.

use serde::{Deserialize, Serialize};

/// Resolved typography settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typography {
    /// Comma-joined fallback list, ready for `font-family`.
    pub font_family: String,
    pub font_size: f64,
    pub html_font_size: f64,
    pub font_weight_light: u16,
    pub font_weight_regular: u16,
    pub font_weight_medium: u16,
    pub font_weight_bold: u16,
}

/// A font family written either as one string or as an ordered fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FontFamily {
    Joined(String),
    Fallbacks(Vec<String>),
}

impl FontFamily {
    /// Builds a family from an ordered fallback list.
    pub fn fallbacks<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FontFamily::Fallbacks(families.into_iter().map(Into::into).collect())
    }

    fn joined(&self) -> String {
        match self {
            FontFamily::Joined(family) => family.clone(),
            FontFamily::Fallbacks(families) => families.join(","),
        }
    }
}

/// Typography options; unset fields take the defaults.
///
/// Weights are taken as given. Nothing checks that they fall in the usual
/// 100 to 900 range.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypographyOptions {
    pub font_family: Option<FontFamily>,
    pub font_size: Option<f64>,
    pub html_font_size: Option<f64>,
    pub font_weight_light: Option<u16>,
    pub font_weight_regular: Option<u16>,
    pub font_weight_medium: Option<u16>,
    pub font_weight_bold: Option<u16>,
}

impl Typography {
    pub fn from_options(options: &TypographyOptions) -> Self {
        Self {
            font_family: options
                .font_family
                .as_ref()
                .map(FontFamily::joined)
                .unwrap_or_else(|| r#""Roboto", "Helvetica", "Arial", sans-serif"#.to_string()),
            font_size: options.font_size.unwrap_or(14.0),
            html_font_size: options.html_font_size.unwrap_or(16.0),
            font_weight_light: options.font_weight_light.unwrap_or(300),
            font_weight_regular: options.font_weight_regular.unwrap_or(400),
            font_weight_medium: options.font_weight_medium.unwrap_or(500),
            font_weight_bold: options.font_weight_bold.unwrap_or(700),
        }
    }
}
