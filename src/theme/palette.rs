//! Palette tokens and shade derivation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::{contrast_ratio, darken, format_rgb, lighten, parse_color, Rgb};

/// Offset used to derive `light` and `dark` shades from `main`.
pub const TONAL_OFFSET: f64 = 0.2;

/// Minimum contrast ratio before dark text is preferred over white.
pub const CONTRAST_THRESHOLD: f64 = 3.0;

const DARK_TEXT: &str = "rgba(0, 0, 0, 0.87)";
const LIGHT_TEXT: &str = "#fff";

/// Light or dark palette mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    #[default]
    Light,
    Dark,
}

/// A color with its derived shades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub light: String,
    pub main: String,
    pub dark: String,
    pub contrast_text: String,
}

impl PaletteColor {
    fn preset(light: &str, main: &str, dark: &str) -> Self {
        Self {
            light: light.to_string(),
            main: main.to_string(),
            dark: dark.to_string(),
            contrast_text: contrast_text(main),
        }
    }

    /// Completes a partially specified color.
    ///
    /// Without a `main` the preset is used as is. Missing shades are derived
    /// from `main`; when `main` isn't a parseable color the shades repeat it.
    pub(crate) fn resolve(options: Option<&PaletteColorOptions>, preset: PaletteColor) -> Self {
        let Some(options) = options else {
            return preset;
        };
        let Some(main) = options.main.clone() else {
            return preset;
        };

        let parsed = parse_color(&main);
        let derive = |shift: fn(Rgb, f64) -> Rgb| match parsed {
            Some(rgb) => format_rgb(shift(rgb, TONAL_OFFSET)),
            None => main.clone(),
        };

        Self {
            light: options.light.clone().unwrap_or_else(|| derive(lighten)),
            dark: options.dark.clone().unwrap_or_else(|| derive(darken)),
            contrast_text: options
                .contrast_text
                .clone()
                .unwrap_or_else(|| contrast_text(&main)),
            main,
        }
    }
}

/// Picks white text when it contrasts enough with `background`, dark text otherwise.
///
/// Unparseable backgrounds get dark text.
pub fn contrast_text(background: &str) -> String {
    match parse_color(background) {
        Some(rgb) if contrast_ratio(rgb, Rgb(255, 255, 255)) >= CONTRAST_THRESHOLD => {
            LIGHT_TEXT.to_string()
        }
        _ => DARK_TEXT.to_string(),
    }
}

/// User-supplied color shades; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteColorOptions {
    pub light: Option<String>,
    pub main: Option<String>,
    pub dark: Option<String>,
    pub contrast_text: Option<String>,
}

impl PaletteColorOptions {
    /// Options with only `main` set.
    pub fn main(main: &str) -> Self {
        Self {
            main: Some(main.to_string()),
            ..Default::default()
        }
    }

    pub fn with_light(mut self, light: &str) -> Self {
        self.light = Some(light.to_string());
        self
    }

    pub fn with_dark(mut self, dark: &str) -> Self {
        self.dark = Some(dark.to_string());
        self
    }
}

/// Pure black and white.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonColors {
    pub black: String,
    pub white: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommonColorOptions {
    pub black: Option<String>,
    pub white: Option<String>,
}

/// Text colors for the palette mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub disabled: String,
}

/// Background colors for the palette mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    pub default: String,
    pub paper: String,
}

/// A grey shade key; YAML files may write shades as numbers (`100`) or names (`A100`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
pub enum ShadeKey {
    Number(u16),
    Name(String),
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeKey::Number(n) => write!(f, "{}", n),
            ShadeKey::Name(name) => f.write_str(name),
        }
    }
}

impl From<u16> for ShadeKey {
    fn from(value: u16) -> Self {
        ShadeKey::Number(value)
    }
}

/// The resolved palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub mode: PaletteMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub error: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
    pub success: PaletteColor,
    pub common: CommonColors,
    pub grey: BTreeMap<String, String>,
    pub text: TextColors,
    pub background: BackgroundColors,
    pub divider: String,
}

/// Palette options as written in code or a theme file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    pub mode: Option<PaletteMode>,
    pub primary: Option<PaletteColorOptions>,
    pub secondary: Option<PaletteColorOptions>,
    pub error: Option<PaletteColorOptions>,
    pub warning: Option<PaletteColorOptions>,
    pub info: Option<PaletteColorOptions>,
    pub success: Option<PaletteColorOptions>,
    pub common: Option<CommonColorOptions>,
    pub grey: BTreeMap<ShadeKey, String>,
}

impl Palette {
    /// Resolves palette options against the presets for their mode.
    pub fn from_options(options: &PaletteOptions) -> Self {
        let mode = options.mode.unwrap_or_default();
        let presets = Presets::for_mode(mode);

        let common = options.common.clone().unwrap_or_default();
        let mut grey = default_grey();
        for (shade, color) in &options.grey {
            grey.insert(shade.to_string(), color.clone());
        }

        let (text, background, divider) = match mode {
            PaletteMode::Light => (
                TextColors {
                    primary: DARK_TEXT.to_string(),
                    secondary: "rgba(0, 0, 0, 0.6)".to_string(),
                    disabled: "rgba(0, 0, 0, 0.38)".to_string(),
                },
                BackgroundColors {
                    default: "#fff".to_string(),
                    paper: "#fff".to_string(),
                },
                "rgba(0, 0, 0, 0.12)".to_string(),
            ),
            PaletteMode::Dark => (
                TextColors {
                    primary: "#fff".to_string(),
                    secondary: "rgba(255, 255, 255, 0.7)".to_string(),
                    disabled: "rgba(255, 255, 255, 0.5)".to_string(),
                },
                BackgroundColors {
                    default: "#121212".to_string(),
                    paper: "#121212".to_string(),
                },
                "rgba(255, 255, 255, 0.12)".to_string(),
            ),
        };

        Self {
            mode,
            primary: PaletteColor::resolve(options.primary.as_ref(), presets.primary),
            secondary: PaletteColor::resolve(options.secondary.as_ref(), presets.secondary),
            error: PaletteColor::resolve(options.error.as_ref(), presets.error),
            warning: PaletteColor::resolve(options.warning.as_ref(), presets.warning),
            info: PaletteColor::resolve(options.info.as_ref(), presets.info),
            success: PaletteColor::resolve(options.success.as_ref(), presets.success),
            common: CommonColors {
                black: common.black.unwrap_or_else(|| "#000".to_string()),
                white: common.white.unwrap_or_else(|| "#fff".to_string()),
            },
            grey,
            text,
            background,
            divider,
        }
    }
}

struct Presets {
    primary: PaletteColor,
    secondary: PaletteColor,
    error: PaletteColor,
    warning: PaletteColor,
    info: PaletteColor,
    success: PaletteColor,
}

impl Presets {
    fn for_mode(mode: PaletteMode) -> Self {
        match mode {
            PaletteMode::Light => Self {
                primary: PaletteColor::preset("#42a5f5", "#1976d2", "#1565c0"),
                secondary: PaletteColor::preset("#ba68c8", "#9c27b0", "#7b1fa2"),
                error: PaletteColor::preset("#ef5350", "#d32f2f", "#c62828"),
                warning: PaletteColor::preset("#ff9800", "#ed6c02", "#e65100"),
                info: PaletteColor::preset("#03a9f4", "#0288d1", "#01579b"),
                success: PaletteColor::preset("#4caf50", "#2e7d32", "#1b5e20"),
            },
            PaletteMode::Dark => Self {
                primary: PaletteColor::preset("#e3f2fd", "#90caf9", "#42a5f5"),
                secondary: PaletteColor::preset("#f3e5f5", "#ce93d8", "#ab47bc"),
                error: PaletteColor::preset("#e57373", "#f44336", "#d32f2f"),
                warning: PaletteColor::preset("#ffb74d", "#ffa726", "#f57c00"),
                info: PaletteColor::preset("#4fc3f7", "#29b6f6", "#0288d1"),
                success: PaletteColor::preset("#81c784", "#66bb6a", "#388e3c"),
            },
        }
    }
}

fn default_grey() -> BTreeMap<String, String> {
    [
        ("50", "#fafafa"),
        ("100", "#f5f5f5"),
        ("200", "#eeeeee"),
        ("300", "#e0e0e0"),
        ("400", "#bdbdbd"),
        ("500", "#9e9e9e"),
        ("600", "#757575"),
        ("700", "#616161"),
        ("800", "#424242"),
        ("900", "#212121"),
        ("A100", "#f5f5f5"),
        ("A200", "#eeeeee"),
        ("A400", "#bdbdbd"),
        ("A700", "#616161"),
    ]
    .into_iter()
    .map(|(shade, color)| (shade.to_string(), color.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_shades_are_derived() {
        let color = PaletteColor::resolve(
            Some(&PaletteColorOptions::main("#ffb900")),
            Presets::for_mode(PaletteMode::Light).primary,
        );
        assert_eq!(color.main, "#ffb900");
        assert_eq!(color.light, "rgb(255, 199, 51)");
        assert_eq!(color.dark, "rgb(204, 148, 0)");
    }

    #[test]
    fn test_given_shades_win() {
        let options = PaletteColorOptions::main("#ffb900")
            .with_light("#fedc81")
            .with_dark("#9b937e");
        let color = PaletteColor::resolve(Some(&options), Presets::for_mode(PaletteMode::Light).primary);
        assert_eq!(color.light, "#fedc81");
        assert_eq!(color.dark, "#9b937e");
    }

    #[test]
    fn test_unparseable_main_is_carried_verbatim() {
        let color = PaletteColor::resolve(
            Some(&PaletteColorOptions::main("not-a-color")),
            Presets::for_mode(PaletteMode::Light).primary,
        );
        assert_eq!(color.light, "not-a-color");
        assert_eq!(color.dark, "not-a-color");
        assert_eq!(color.contrast_text, DARK_TEXT);
    }

    #[test]
    fn test_missing_main_uses_preset() {
        let preset = Presets::for_mode(PaletteMode::Dark).primary;
        let color = PaletteColor::resolve(Some(&PaletteColorOptions::default()), preset.clone());
        assert_eq!(color, preset);
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text("#3602E6"), LIGHT_TEXT);
        assert_eq!(contrast_text("#ffb900"), DARK_TEXT);
        assert_eq!(contrast_text("#1976d2"), LIGHT_TEXT);
    }

    #[test]
    fn test_grey_overrides_merge_with_defaults() {
        let mut options = PaletteOptions::default();
        options.grey.insert(ShadeKey::from(500), "#708090".to_string());
        options.grey.insert(ShadeKey::Name("A100".into()), "#ffffff".to_string());

        let palette = Palette::from_options(&options);
        assert_eq!(palette.grey["500"], "#708090");
        assert_eq!(palette.grey["A100"], "#ffffff");
        assert_eq!(palette.grey["900"], "#212121");
    }

    #[test]
    fn test_dark_mode_text_and_presets() {
        let options = PaletteOptions {
            mode: Some(PaletteMode::Dark),
            ..Default::default()
        };
        let palette = Palette::from_options(&options);
        assert_eq!(palette.text.primary, "#fff");
        assert_eq!(palette.background.default, "#121212");
        assert_eq!(palette.primary.main, "#90caf9");
    }
}
