//! Template styles: CSS text with interpolated theme tokens.
//!
//! A template is rendered with MiniJinja, with the theme available as
//! `theme` and each named interpolation (usually keyframes) available under
//! its own name:
//!
//! ```text
//! color: #888;
//! font-weight: {{ theme.typography.font_weight_bold }};
//! @media (prefers-reduced-motion: no-preference) {
//!   animation: {{ logo_spin }} infinite 20s linear;
//! }
//! ```
//!
//! The rendered text is tokenized with `cssparser` into a [`StyleObject`] and
//! compiled like any other object. Declarations are split at the first `:`
//! and kept verbatim; a trailing declaration without `;` is accepted. Nothing
//! is validated, so a selector such as `&:hover:` or a quoted color value is
//! carried into the compiled handle as written.

use std::collections::BTreeMap;
use std::sync::Mutex;

use cssparser::{ParseError, Parser, ParserInput, SourcePosition, Token};
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use tracing::trace;

use super::error::StyleError;
use super::animation::Keyframes;
use super::serialize::{css, hash, SerializedStyles};
use super::value::{StyleObject, StyleValue};
use crate::theme::Theme;

/// Compiled style templates, keyed by a hash of their source.
static STYLE_TEMPLATES: Lazy<Mutex<Environment<'static>>> =
    Lazy::new(|| Mutex::new(Environment::new()));

/// Compiles a CSS template against a theme.
///
/// Templates are compiled once and reused on later calls with the same
/// source. Only the interpolated keyframes whose names end up in the
/// rendered CSS are recorded on the handle.
///
/// # Errors
///
/// Returns [`StyleError::Template`] if the template has invalid syntax or
/// fails to render. Invalid CSS never produces an error.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::{css_template, Theme};
///
/// let theme = Theme::new();
/// let styles = css_template(
///     "color: #888; font-weight: {{ theme.typography.font_weight_bold }};",
///     &theme,
///     &[],
/// ).unwrap();
///
/// assert_eq!(styles.styles(), "color:#888;font-weight:700;");
/// ```
pub fn css_template(
    source: &str,
    theme: &Theme,
    interpolations: &[(&str, &Keyframes)],
) -> Result<SerializedStyles, StyleError> {
    let text = render_source(source, theme, interpolations)?;
    let mut rules = parse_rules(&text);
    for (_, keyframes) in interpolations {
        if text.contains(keyframes.name()) {
            rules.uses(keyframes);
        }
    }
    Ok(css(&rules))
}

fn render_source(
    source: &str,
    theme: &Theme,
    interpolations: &[(&str, &Keyframes)],
) -> Result<String, StyleError> {
    let mut context: BTreeMap<String, Value> = BTreeMap::new();
    context.insert("theme".to_string(), Value::from_serialize(theme));
    for (name, keyframes) in interpolations {
        context.insert(name.to_string(), Value::from(keyframes.name().to_string()));
    }

    let name = format!("css-{}", hash(source));
    let mut env = STYLE_TEMPLATES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let cached = env
        .get_template(&name)
        .is_ok_and(|tmpl| tmpl.source() == source);
    if !cached {
        trace!(template = %name, "compiling style template");
        env.add_template_owned(name.clone(), source.to_string())?;
    }

    let tmpl = env.get_template(&name)?;
    Ok(tmpl.render(&context)?)
}

/// Tokenizes CSS rule-body text into a style object.
///
/// Comments are dropped; everything else is kept as written.
pub(crate) fn parse_rules(text: &str) -> StyleObject {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut rules = StyleObject::new();
    // Unbalanced input ends the body early; whatever was read is kept.
    let _ = parse_body::<()>(&mut parser, &mut rules);
    rules
}

enum Step {
    Declaration,
    Block,
    End,
}

fn parse_body<'i, 't, E>(
    parser: &mut Parser<'i, 't>,
    rules: &mut StyleObject,
) -> Result<(), ParseError<'i, E>> {
    loop {
        let mut head = String::new();
        let step = loop {
            let start = parser.position();
            let token = match parser.next_including_whitespace_and_comments() {
                Ok(token) => token.clone(),
                Err(_) => break Step::End,
            };
            match token {
                Token::Semicolon => break Step::Declaration,
                Token::CurlyBracketBlock => break Step::Block,
                token => append_token(parser, &token, start, &mut head)?,
            }
        };

        let head = head.trim();
        match step {
            Step::Declaration => push_declaration(rules, head),
            Step::Block => {
                let mut nested = StyleObject::new();
                parser.parse_nested_block(|inner| parse_body(inner, &mut nested))?;
                rules.insert(head, StyleValue::Block(nested));
            }
            Step::End => {
                push_declaration(rules, head);
                return Ok(());
            }
        }
    }
}

/// Appends the source text of a token just read from `parser`.
///
/// Blocks are copied through their closing delimiter, with comments inside
/// them dropped as well.
fn append_token<'i, 't, E>(
    parser: &mut Parser<'i, 't>,
    token: &Token<'i>,
    start: SourcePosition,
    out: &mut String,
) -> Result<(), ParseError<'i, E>> {
    let closing = match token {
        Token::Comment(_) => return Ok(()),
        Token::Function(_) | Token::ParenthesisBlock => ")",
        Token::SquareBracketBlock => "]",
        Token::CurlyBracketBlock => "}",
        _ => {
            out.push_str(parser.slice_from(start));
            return Ok(());
        }
    };
    out.push_str(parser.slice_from(start));
    parser.parse_nested_block(|inner| copy_tokens(inner, out))?;
    out.push_str(closing);
    Ok(())
}

fn copy_tokens<'i, 't, E>(
    parser: &mut Parser<'i, 't>,
    out: &mut String,
) -> Result<(), ParseError<'i, E>> {
    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        append_token(parser, &token, start, out)?;
    }
}

fn push_declaration(rules: &mut StyleObject, text: &str) {
    if text.is_empty() {
        return;
    }
    match text.split_once(':') {
        Some((name, value)) => rules.insert(name.trim(), value.trim()),
        None => rules.insert(text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::keyframes;
    use crate::theme::{create_theme, ThemeOptions, TypographyOptions};

    fn theme_with_bold(bold: u16) -> Theme {
        create_theme(ThemeOptions {
            typography: TypographyOptions {
                font_weight_bold: Some(bold),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    #[test]
    fn test_parse_declarations() {
        let rules = parse_rules("height: 6em;\n  padding: 2em;\n  transition: filter 300ms");
        let keys: Vec<&str> = rules.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["height", "padding", "transition"]);
        assert_eq!(rules.get("transition"), Some(&StyleValue::from("filter 300ms")));
    }

    #[test]
    fn test_parse_nested_blocks_keep_selector_verbatim() {
        let rules = parse_rules("&:hover: {\n filter: drop-shadow(0 0 2em #646cffaa);\n}");
        match rules.get("&:hover:") {
            Some(StyleValue::Block(inner)) => {
                assert_eq!(
                    inner.get("filter"),
                    Some(&StyleValue::from("drop-shadow(0 0 2em #646cffaa)"))
                );
            }
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_keeps_invalid_values() {
        let rules = parse_rules("color: 'altStyles.invalid';");
        assert_eq!(rules.get("color"), Some(&StyleValue::from("'altStyles.invalid'")));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_rules("").is_empty());
        assert!(parse_rules("   \n ").is_empty());
    }

    #[test]
    fn test_template_interpolates_theme_verbatim() {
        let theme = theme_with_bold(1);
        let styles = css_template(
            "color: 'readTheDocs.invalid';\nfont-weight: {{ theme.typography.font_weight_bold }};",
            &theme,
            &[],
        )
        .unwrap();
        assert_eq!(styles.styles(), "color:'readTheDocs.invalid';font-weight:1;");
    }

    #[test]
    fn test_template_records_keyframes() {
        let theme = Theme::new();
        let spin = keyframes("from { transform: rotate(0deg); } to { transform: rotate(360deg); }");
        let styles = css_template(
            "@media (prefers-reduced-motion: no-preference) { animation: {{ logo_spin }} infinite 20s linear; }",
            &theme,
            &[("logo_spin", &spin)],
        )
        .unwrap();

        assert!(styles.styles().contains(spin.name()));
        assert_eq!(styles.keyframes().len(), 1);
    }

    #[test]
    fn test_parse_drops_comment_before_declaration() {
        let rules = parse_rules("/* caption */\ncolor: #888;\nfont-weight: 700;");
        let keys: Vec<&str> = rules.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "font-weight"]);
        assert_eq!(rules.get("color"), Some(&StyleValue::from("#888")));
    }

    #[test]
    fn test_parse_comment_with_colon_does_not_split_declaration() {
        let rules = parse_rules("/* note: old value */ padding: 2em;");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get("padding"), Some(&StyleValue::from("2em")));
    }

    #[test]
    fn test_parse_comment_before_nested_block() {
        let rules = parse_rules("/* hover state */\n&:hover {\n /* glow */ filter: drop-shadow(0 0 2em /* indigo */ #646cffaa);\n}");
        let keys: Vec<&str> = rules.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["&:hover"]);
        match rules.get("&:hover") {
            Some(StyleValue::Block(inner)) => {
                assert_eq!(
                    inner.get("filter"),
                    Some(&StyleValue::from("drop-shadow(0 0 2em  #646cffaa)"))
                );
            }
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_keeps_function_arguments() {
        let rules = parse_rules("transform: rotate(360deg) scale(1.5); color: rgb(0, 0, 0)");
        assert_eq!(
            rules.get("transform"),
            Some(&StyleValue::from("rotate(360deg) scale(1.5)"))
        );
        assert_eq!(rules.get("color"), Some(&StyleValue::from("rgb(0, 0, 0)")));
    }

    #[test]
    fn test_commented_template_matches_object_styles() {
        let theme = Theme::new();
        let styles = css_template(
            "/* caption */\ncolor: #888;\nfont-weight: {{ theme.typography.font_weight_bold }};",
            &theme,
            &[],
        )
        .unwrap();
        let object = css(&StyleObject::new().set("color", "#888").set("fontWeight", 700));

        assert_eq!(styles.styles(), "color:#888;font-weight:700;");
        assert_eq!(styles.declaration("color").as_deref(), Some("#888"));
        assert_eq!(styles.class_name(), object.class_name());
    }

    #[test]
    fn test_template_skips_unreferenced_keyframes() {
        let theme = Theme::new();
        let spin = keyframes("from { opacity: 0; } to { opacity: 1; }");
        let styles = css_template("padding: 2em;", &theme, &[("logo_spin", &spin)]).unwrap();

        assert_eq!(styles.styles(), "padding:2em;");
        assert!(styles.keyframes().is_empty());
    }

    #[test]
    fn test_template_is_compiled_once() {
        let source = "margin: {{ theme.typography.font_weight_bold }}px;";
        let theme = theme_with_bold(3);
        let first = css_template(source, &theme, &[]).unwrap();
        let second = css_template(source, &theme_with_bold(4), &[]).unwrap();

        assert_eq!(first.styles(), "margin:3px;");
        assert_eq!(second.styles(), "margin:4px;");
        let env = STYLE_TEMPLATES.lock().unwrap();
        assert_eq!(env.templates().filter(|(_, tmpl)| tmpl.source() == source).count(), 1);
    }

    #[test]
    fn test_template_syntax_error() {
        let theme = Theme::new();
        let result = css_template("color: {{ unclosed", &theme, &[]);
        assert!(matches!(result, Err(StyleError::Template(_))));
    }
}
