//! Adaptive themes that respond to the system color mode.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::palette::PaletteMode;
use super::theme::{create_theme, Theme, ThemeOptions};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl From<ColorMode> for PaletteMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => PaletteMode::Light,
            ColorMode::Dark => PaletteMode::Dark,
        }
    }
}

/// A theme that adapts to the user's display mode.
///
/// Holds a light and a dark theme and picks one from the OS setting when the
/// theme is provided to a view tree.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::{AdaptiveTheme, ThemeOptions};
///
/// let adaptive = AdaptiveTheme::from_options(ThemeOptions::default());
/// assert_eq!(adaptive.light().palette().text.primary, "rgba(0, 0, 0, 0.87)");
/// assert_eq!(adaptive.dark().palette().text.primary, "#fff");
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Builds both variants from the same options, overriding the palette mode.
    pub fn from_options(options: ThemeOptions) -> Self {
        let build = |mode: PaletteMode| {
            let mut options = options.clone();
            options.palette.mode = Some(mode);
            create_theme(options)
        };
        Self::new(build(PaletteMode::Light), build(PaletteMode::Dark))
    }

    /// Applies the same post-construction change to both variants.
    pub fn map(self, f: impl Fn(Theme) -> Theme) -> Self {
        Self::new(f(self.light), f(self.dark))
    }

    pub fn light(&self) -> &Theme {
        &self.light
    }

    pub fn dark(&self) -> &Theme {
        &self.dark
    }

    /// Returns the variant for a color mode.
    pub fn variant(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Resolves to the appropriate theme based on the current color mode.
    pub(crate) fn resolve(&self) -> Theme {
        self.variant(detect_color_mode()).clone()
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Returns the color mode reported by the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_adaptive_theme_uses_detector() {
        let adaptive = AdaptiveTheme::from_options(ThemeOptions::default());

        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(adaptive.resolve().palette().mode, PaletteMode::Dark);

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(adaptive.resolve().palette().mode, PaletteMode::Light);
    }

    #[test]
    fn test_map_applies_to_both_variants() {
        let adaptive = AdaptiveTheme::from_options(ThemeOptions::default())
            .map(|theme| theme.with_shadow(6, "custom"));
        assert_eq!(adaptive.light().shadow(6), Some("custom"));
        assert_eq!(adaptive.dark().shadow(6), Some("custom"));
    }
}
