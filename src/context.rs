//! Theme propagation through a view tree.
//!
//! A [`ThemeProvider`] owns the resolved theme; every view receives a
//! [`Context`] that borrows it read-only. Views never reach for a global.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::theme::{AdaptiveTheme, Theme};

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(Theme::new);

/// Where a provider gets its theme from.
#[derive(Debug, Clone)]
pub enum ThemeSource {
    /// A fixed theme.
    Fixed(Theme),
    /// A light/dark pair, resolved against the OS color mode when provided.
    Adaptive(AdaptiveTheme),
}

impl ThemeSource {
    fn resolve(&self) -> Theme {
        match self {
            ThemeSource::Fixed(theme) => theme.clone(),
            ThemeSource::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl From<Theme> for ThemeSource {
    fn from(theme: Theme) -> Self {
        ThemeSource::Fixed(theme)
    }
}

impl From<AdaptiveTheme> for ThemeSource {
    fn from(adaptive: AdaptiveTheme) -> Self {
        ThemeSource::Adaptive(adaptive)
    }
}

/// Supplies one theme to every view rendered beneath it.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::{scaffold_theme, ThemeProvider};
///
/// let provider = ThemeProvider::new(scaffold_theme());
/// let cx = provider.context();
/// assert_eq!(cx.theme().typography().font_weight_bold, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    theme: Arc<Theme>,
}

impl ThemeProvider {
    /// Resolves the source once; adaptive themes are not re-detected later.
    pub fn new(source: impl Into<ThemeSource>) -> Self {
        Self {
            theme: Arc::new(source.into().resolve()),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// A context carrying this provider's theme.
    pub fn context(&self) -> Context {
        Context {
            theme: Some(Arc::clone(&self.theme)),
        }
    }
}

/// What a view can read from its surroundings.
///
/// A context without a provider falls back to the default theme.
#[derive(Debug, Clone, Default)]
pub struct Context {
    theme: Option<Arc<Theme>>,
}

impl Context {
    pub fn theme(&self) -> &Theme {
        self.theme.as_deref().unwrap_or(&*DEFAULT_THEME)
    }

    /// Whether a provider supplied the theme.
    pub fn has_provider(&self) -> bool {
        self.theme.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{scaffold_theme, set_theme_detector, ColorMode, PaletteMode, ThemeOptions};
    use serial_test::serial;

    #[test]
    fn test_context_without_provider_uses_default_theme() {
        let cx = Context::default();
        assert!(!cx.has_provider());
        assert_eq!(cx.theme(), &Theme::default());
    }

    #[test]
    fn test_provider_shares_one_theme() {
        let provider = ThemeProvider::new(scaffold_theme());
        let a = provider.context();
        let b = provider.context();
        assert!(std::ptr::eq(a.theme(), b.theme()));
        assert_eq!(a.theme().typography().font_weight_bold, 1);
    }

    #[test]
    #[serial]
    fn test_adaptive_source_resolves_once() {
        set_theme_detector(|| ColorMode::Dark);
        let provider = ThemeProvider::new(AdaptiveTheme::from_options(ThemeOptions::default()));
        set_theme_detector(|| ColorMode::Light);

        assert_eq!(provider.context().theme().palette().mode, PaletteMode::Dark);
    }
}
