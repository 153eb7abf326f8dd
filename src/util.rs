//! Utility functions for color math and text fitting.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// An opaque RGB color decoded from a CSS color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(...)` and `rgba(...)`.
///
/// Alpha is discarded. Anything else (named colors, `hsl()`, malformed input)
/// yields `None`; callers are expected to carry the original string through.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::{parse_color, Rgb};
///
/// assert_eq!(parse_color("#ffb900"), Some(Rgb(255, 185, 0)));
/// assert_eq!(parse_color("#fff"), Some(Rgb(255, 255, 255)));
/// assert_eq!(parse_color("rgba(0, 0, 0, 0.87)"), Some(Rgb(0, 0, 0)));
/// assert_eq!(parse_color("styles.invalid"), None);
/// ```
pub fn parse_color(value: &str) -> Option<Rgb> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut channels = inner.split(',').map(|part| part.trim().parse::<f64>().ok());
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    Some(Rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b)))
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 | 4 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 | 8 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Formats a color the way derived palette shades are written: `rgb(r, g, b)`.
pub fn format_rgb(Rgb(r, g, b): Rgb) -> String {
    format!("rgb({}, {}, {})", r, g, b)
}

/// Mixes the color towards white by `coefficient` (0.0 to 1.0).
pub fn lighten(Rgb(r, g, b): Rgb, coefficient: f64) -> Rgb {
    let mix = |c: u8| (c as f64 + (255.0 - c as f64) * coefficient) as u8;
    Rgb(mix(r), mix(g), mix(b))
}

/// Mixes the color towards black by `coefficient` (0.0 to 1.0).
pub fn darken(Rgb(r, g, b): Rgb, coefficient: f64) -> Rgb {
    let mix = |c: u8| (c as f64 * (1.0 - coefficient)) as u8;
    Rgb(mix(r), mix(g), mix(b))
}

/// Relative luminance as defined by WCAG 2.0.
pub fn luminance(Rgb(r, g, b): Rgb) -> f64 {
    let linear = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// WCAG contrast ratio between two colors, from 1.0 to 21.0.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let (la, lb) = (luminance(a), luminance(b));
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::{rgb_to_ansi256, Rgb};
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256(Rgb(255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256(Rgb(0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256(Rgb(r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Uses Unicode width calculations for proper handling of CJK and other wide characters.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_hex_forms() {
        assert_eq!(parse_color("#888"), Some(Rgb(136, 136, 136)));
        assert_eq!(parse_color("#3602E6"), Some(Rgb(0x36, 0x02, 0xe6)));
        assert_eq!(parse_color("#646cffaa"), Some(Rgb(0x64, 0x6c, 0xff)));
    }

    #[test]
    fn test_parse_color_functional() {
        assert_eq!(parse_color("rgb(254, 199, 51)"), Some(Rgb(254, 199, 51)));
        assert_eq!(parse_color("rgba(255, 255, 255, 0.7)"), Some(Rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert_eq!(parse_color("'altStyles.invalid'"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#ggg"), None);
        assert_eq!(parse_color("rgb(1, 2)"), None);
    }

    #[test]
    fn test_lighten_and_darken() {
        let main = Rgb(255, 185, 0);
        assert_eq!(lighten(main, 0.2), Rgb(255, 199, 51));
        assert_eq!(darken(main, 0.2), Rgb(204, 148, 0));
        assert_eq!(format_rgb(darken(main, 0.2)), "rgb(204, 148, 0)");
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        let black = Rgb(0, 0, 0);
        let white = Rgb(255, 255, 255);
        assert!((contrast_ratio(black, white) - 21.0).abs() < 1e-9);
        assert!((contrast_ratio(white, white) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256(Rgb(0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256(Rgb(255, 255, 255)), 231);
        let mid = rgb_to_ansi256(Rgb(128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256(Rgb(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(Rgb(0, 0, 255)), 21);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Hello World", 7), "Hello …");
        assert_eq!(truncate_to_width("12345", 5), "12345");
        assert_eq!(truncate_to_width("", 5), "");
        assert_eq!(truncate_to_width("Hello", 0), "…");
    }
}
