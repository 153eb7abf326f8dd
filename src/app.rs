//! The root view: a counter shown in three panels, one per styling path.
//!
//! | Panel | Card and caption styles |
//! |-------|-------------------------|
//! | Individual Styles | inline object, standalone template |
//! | Utils.cssProps Styles | [`make_object_styles`] |
//! | CSS Object Styles | [`make_template_styles`] |
//!
//! Every counter button sends [`Message::Increment`] to the same count.

use once_cell::sync::Lazy;
use tracing::{error, warn};

use crate::context::Context;
use crate::dom::{a, button, code, div, fragment, h1, h2, img, p, Element, Node};
use crate::runtime::Component;
use crate::style::{
    css, css_props, css_template, keyframes, Keyframes, SerializedStyles,
    SerializedStylesObject, StyleError, StyleObject, StylesObject,
};
use crate::theme::Theme;

pub static LOGO_SPIN: Lazy<Keyframes> = Lazy::new(|| {
    keyframes(
        "from {
            transform: rotate(0deg);
        }
        to {
            transform: rotate(360deg);
        }",
    )
});

const TEMPLATE_LOGO: &str = "
    height: 6em;
    padding: 2em;
    transition: filter 300ms;
    will-change: filter;

    &:hover: {
        filter: drop-shadow(0 0 2em #646cffaa);
    }
";

const TEMPLATE_REACT: &str = "
    &:hover: {
        filter: drop-shadow(0 0 2em #61dafbaa);
    }
";

const TEMPLATE_ANIMATE_SPIN: &str = "
    @media (prefers-reduced-motion: no-preference): {
        animation: {{ logo_spin }} infinite 20s linear;
    }
";

const TEMPLATE_CARD: &str = "
    padding: 2em;
";

const TEMPLATE_READ_THE_DOCS: &str = "
    color: 'altStyles.invalid';
    font-weight: {{ theme.typography.font_weight_bold }};
";

const INDIVIDUAL_READ_THE_DOCS: &str = "
    color: 'readTheDocs.invalid';
    font-weight: {{ theme.typography.font_weight_bold }};
";

/// Object styles compiled through [`css_props`].
///
/// The logo padding is deliberately not a length; it is emitted as written.
pub fn make_object_styles(theme: &Theme) -> SerializedStylesObject {
    let mut styles = StylesObject::new();
    styles.insert(
        "logo".into(),
        StyleObject::new()
            .set("transition", "filter 300ms")
            .set("height", "6em")
            .set("willChange", "filter")
            .set("padding", "styles.invalid")
            .block(
                "&:hover",
                StyleObject::new().set("filter", "drop-shadow(0 0 2em #646cffaa)"),
            ),
    );
    styles.insert(
        "react".into(),
        StyleObject::new().block(
            "&:hover",
            StyleObject::new().set("filter", "drop-shadow(0 0 2em #61dafbaa)"),
        ),
    );
    styles.insert(
        "animate_spin".into(),
        StyleObject::new().block(
            "@media (prefers-reduced-motion: no-preference)",
            StyleObject::new().animation(&LOGO_SPIN, "infinite 20s linear"),
        ),
    );
    styles.insert("card".into(), StyleObject::new().set("padding", "2em"));
    styles.insert(
        "read_the_docs".into(),
        StyleObject::new()
            .set("fontWeight", theme.typography().font_weight_bold)
            .set("color", "#888"),
    );
    css_props(&styles)
}

/// The same five entries as [`make_object_styles`], written as templates.
///
/// Selectors are kept exactly as written, including the trailing `:` of
/// `&:hover:` that browsers ignore.
pub fn make_template_styles(theme: &Theme) -> Result<SerializedStylesObject, StyleError> {
    let spin: &Keyframes = &LOGO_SPIN;
    let sources: [(&str, &str); 5] = [
        ("logo", TEMPLATE_LOGO),
        ("react", TEMPLATE_REACT),
        ("animate_spin", TEMPLATE_ANIMATE_SPIN),
        ("card", TEMPLATE_CARD),
        ("read_the_docs", TEMPLATE_READ_THE_DOCS),
    ];
    sources
        .into_iter()
        .map(|(name, source)| {
            let styles = css_template(source, theme, &[("logo_spin", spin)])?;
            Ok((name.to_string(), styles))
        })
        .collect()
}

/// Row layout for the three panels.
pub fn layout() -> SerializedStyles {
    css(&StyleObject::new()
        .set("display", "flex")
        .set("flexDirection", "row")
        .set("gap", "48px")
        .set("justifyContent", "space-between"))
}

/// Caption styles of the first panel, compiled on their own.
pub fn individual_read_the_docs(theme: &Theme) -> Result<SerializedStyles, StyleError> {
    css_template(INDIVIDUAL_READ_THE_DOCS, theme, &[])
}

/// Messages the root view handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Increment,
}

/// The root view component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct App {
    count: u64,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Component for App {
    type Message = Message;

    fn update(&mut self, message: Message) {
        match message {
            Message::Increment => self.count += 1,
        }
    }

    fn view(&self, cx: &Context) -> Node<Message> {
        let theme = cx.theme();
        let styles = make_object_styles(theme);
        let alt_styles = make_template_styles(theme).unwrap_or_else(|err| {
            error!(%err, "template styles failed to compile");
            SerializedStylesObject::new()
        });
        let read_the_docs = individual_read_the_docs(theme)
            .map_err(|err| warn!(%err, "caption styles failed to compile"))
            .ok();
        let inline_card = css(&StyleObject::new().set("padding", "2em"));

        fragment([
            div()
                .child(
                    a().attr("href", "https://vitejs.dev")
                        .attr("target", "_blank")
                        .child(
                            img()
                                .attr("src", "/vite.svg")
                                .css_opt(styles.get("logo"))
                                .attr("alt", "Vite logo"),
                        ),
                )
                .child(
                    a().attr("href", "https://react.dev")
                        .attr("target", "_blank")
                        .child(
                            img()
                                .attr("src", "/assets/react.svg")
                                .css_opt(styles.get("logo"))
                                .css_opt(styles.get("react"))
                                .css_opt(styles.get("animate_spin"))
                                .attr("alt", "React logo"),
                        ),
                ),
            h1().child("Vite + React"),
            div()
                .css(&layout())
                .child(self.panel(
                    "Individual Styles",
                    Some(&inline_card),
                    read_the_docs.as_ref(),
                ))
                .child(self.panel(
                    "Utils.cssProps Styles",
                    styles.get("card"),
                    styles.get("read_the_docs"),
                ))
                .child(self.panel(
                    "CSS Object Styles",
                    alt_styles.get("card"),
                    alt_styles.get("read_the_docs"),
                )),
        ])
    }
}

impl App {
    fn panel(
        &self,
        title: &str,
        card: Option<&SerializedStyles>,
        caption: Option<&SerializedStyles>,
    ) -> Element<Message> {
        div()
            .child(h2().child(title))
            .child(
                div()
                    .css_opt(card)
                    .child(
                        button()
                            .on_click(Message::Increment)
                            .child("count is ")
                            .child(self.count.to_string()),
                    )
                    .child(
                        p().child("Edit ")
                            .child(code().child("src/App.tsx"))
                            .child(" and save to test HMR"),
                    ),
            )
            .child(
                p().css_opt(caption)
                    .child("Click on the Vite and React logos to learn more"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::scaffold_theme;

    #[test]
    fn test_object_styles_keys() {
        let styles = make_object_styles(&Theme::new());
        let keys: Vec<&str> = styles.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["logo", "react", "animate_spin", "card", "read_the_docs"]);
    }

    #[test]
    fn test_object_styles_keep_invalid_padding() {
        let styles = make_object_styles(&Theme::new());
        assert_eq!(styles["logo"].declaration("padding").as_deref(), Some("styles.invalid"));
        assert_eq!(styles["read_the_docs"].styles(), "font-weight:700;color:#888;");
    }

    #[test]
    fn test_template_styles_match_object_keys() {
        let theme = scaffold_theme();
        let object = make_object_styles(&theme);
        let template = make_template_styles(&theme).unwrap();
        assert!(object.keys().eq(template.keys()));
        assert_eq!(
            template["read_the_docs"].styles(),
            "color:'altStyles.invalid';font-weight:1;"
        );
    }

    #[test]
    fn test_animate_spin_carries_keyframes() {
        let theme = Theme::new();
        let object = make_object_styles(&theme);
        let template = make_template_styles(&theme).unwrap();
        for styles in [&object["animate_spin"], &template["animate_spin"]] {
            let names: Vec<&str> = styles.keyframes().iter().map(|k| k.name()).collect();
            assert_eq!(names, vec![LOGO_SPIN.name()]);
        }
    }

    #[test]
    fn test_only_animate_spin_template_needs_keyframes() {
        let template = make_template_styles(&Theme::new()).unwrap();
        for name in ["logo", "react", "card", "read_the_docs"] {
            assert!(template[name].keyframes().is_empty(), "{} has keyframes", name);
        }
    }

    #[test]
    fn test_layout() {
        assert_eq!(
            layout().styles(),
            "display:flex;flex-direction:row;gap:48px;justify-content:space-between;"
        );
    }

    #[test]
    fn test_update_increments() {
        let mut app = App::new();
        app.update(Message::Increment);
        app.update(Message::Increment);
        assert_eq!(app.count(), 2);
    }
}
