//! The scaffold's own theme.

use super::palette::{CommonColorOptions, PaletteColorOptions, PaletteOptions, ShadeKey};
use super::theme::{create_theme, Theme, ThemeOptions};
use super::typography::{FontFamily, TypographyOptions};

/// Elevation 6 is softened right after the theme is built.
pub const SCAFFOLD_SHADOW_6: &str = "0 3px 6px rgba(0, 0, 0, 0.16), 0 3px 6px rgba(0, 0, 0, 0.05)";

/// Options for the scaffold theme: amber primary, indigo secondary, Nunito Sans.
///
/// The bold weight is deliberately `1` so it is easy to see that theme values
/// reach every style path unmodified.
pub fn scaffold_options() -> ThemeOptions {
    let grey = [
        (100, "#f4f4f4"),
        (200, "#e0e0e0"),
        (300, "#cbcbcb"),
        (400, "#bfbfbf"),
        (500, "#708090"),
        (600, "#666666"),
        (800, "#2b2821"),
    ]
    .into_iter()
    .map(|(shade, color)| (ShadeKey::from(shade), color.to_string()))
    .collect();

    ThemeOptions {
        palette: PaletteOptions {
            primary: Some(
                PaletteColorOptions::main("#ffb900")
                    .with_light("#fedc81")
                    .with_dark("#9b937e"),
            ),
            secondary: Some(PaletteColorOptions::main("#3602E6").with_light("#c8b8ff")),
            success: Some(PaletteColorOptions::main("#84d27a")),
            error: Some(PaletteColorOptions::main("#ff8662")),
            common: Some(CommonColorOptions {
                black: Some("#000".to_string()),
                white: Some("#fff".to_string()),
            }),
            grey,
            ..Default::default()
        },
        typography: TypographyOptions {
            font_family: Some(FontFamily::fallbacks([r#""Nunito Sans""#, "sans-serif"])),
            font_weight_regular: Some(400),
            font_weight_bold: Some(1),
            ..Default::default()
        },
    }
}

/// The one-off change applied to a freshly built scaffold theme.
pub fn scaffold_overrides(theme: Theme) -> Theme {
    theme.with_shadow(6, SCAFFOLD_SHADOW_6)
}

/// Builds the scaffold theme.
pub fn scaffold_theme() -> Theme {
    scaffold_overrides(create_theme(scaffold_options()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_tokens() {
        let theme = scaffold_theme();
        assert_eq!(theme.palette().primary.main, "#ffb900");
        assert_eq!(theme.palette().primary.light, "#fedc81");
        assert_eq!(theme.palette().secondary.dark, "rgb(43, 1, 184)");
        assert_eq!(theme.palette().grey["500"], "#708090");
        assert_eq!(theme.typography().font_family, r#""Nunito Sans",sans-serif"#);
        assert_eq!(theme.typography().font_weight_bold, 1);
    }

    #[test]
    fn test_shadow_override() {
        let theme = scaffold_theme();
        assert_eq!(theme.shadow(6), Some(SCAFFOLD_SHADOW_6));
        assert_eq!(theme.shadow(0), Some("none"));
        assert_ne!(theme.shadow(5), Some(SCAFFOLD_SHADOW_6));
    }
}
