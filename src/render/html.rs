//! Markup serialization.

use std::fmt::Write;

use minijinja::HtmlEscape;
use tracing::debug;

use crate::dom::{Element, Node};
use crate::style::StyleSheet;

/// Elements serialized without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Serializes a node tree to HTML, registering each element's styles.
///
/// Styled elements get the composed handle's class name appended to their
/// `class` attribute; the matching rules land in the sheet.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::dom::{button, Node};
/// use styled_scaffold::render::HtmlRenderer;
/// use styled_scaffold::{css, StyleObject, StyleSheet};
///
/// let card = css(&StyleObject::new().set("padding", "2em"));
/// let tree: Node<()> = button().css(&card).child("count is 0").into();
///
/// let mut sheet = StyleSheet::new();
/// let html = HtmlRenderer::new(&mut sheet).render(&tree);
///
/// assert_eq!(html, format!(r#"<button class="{}">count is 0</button>"#, card.class_name()));
/// assert!(sheet.contains(&card.class_name()));
/// ```
pub struct HtmlRenderer<'a> {
    sheet: &'a mut StyleSheet,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(sheet: &'a mut StyleSheet) -> Self {
        Self { sheet }
    }

    pub fn render<M>(&mut self, node: &Node<M>) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        debug!(bytes = out.len(), rules = self.sheet.len(), "rendered markup");
        out
    }

    fn write_node<M>(&mut self, node: &Node<M>, out: &mut String) {
        match node {
            Node::Text(text) => {
                let _ = write!(out, "{}", HtmlEscape(text));
            }
            Node::Fragment(children) => {
                for child in children {
                    self.write_node(child, out);
                }
            }
            Node::Element(element) => self.write_element(element, out),
        }
    }

    fn write_element<M>(&mut self, element: &Element<M>, out: &mut String) {
        let class = element
            .composed_styles()
            .map(|styles| self.sheet.insert(&styles));

        let _ = write!(out, "<{}", element.tag());
        let mut wrote_class = false;
        for (name, value) in element.attrs() {
            if name == "class" {
                if let Some(class) = &class {
                    let _ = write!(out, r#" class="{} {}""#, HtmlEscape(value), class);
                    wrote_class = true;
                    continue;
                }
            }
            let _ = write!(out, r#" {}="{}""#, name, HtmlEscape(value));
        }
        if let (Some(class), false) = (&class, wrote_class) {
            let _ = write!(out, r#" class="{}""#, class);
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&element.tag()) {
            return;
        }
        for child in element.child_nodes() {
            self.write_node(child, out);
        }
        let _ = write!(out, "</{}>", element.tag());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{a, code, div, fragment, img, p};
    use crate::style::{css, SerializedStyles, StyleObject};

    #[test]
    fn test_void_elements_and_attributes() {
        let tree: Node<()> = a()
            .attr("href", "https://vitejs.dev")
            .attr("target", "_blank")
            .child(img().attr("src", "/vite.svg").attr("alt", "Vite logo"))
            .into();
        let mut sheet = StyleSheet::new();
        assert_eq!(
            HtmlRenderer::new(&mut sheet).render(&tree),
            r#"<a href="https:&#x2f;&#x2f;vitejs.dev" target="_blank"><img src="&#x2f;vite.svg" alt="Vite logo"></a>"#
        );
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_text_is_escaped() {
        let tree: Node<()> = p()
            .child("Edit ")
            .child(code().child("<App />"))
            .child(" & save")
            .into();
        let mut sheet = StyleSheet::new();
        assert_eq!(
            HtmlRenderer::new(&mut sheet).render(&tree),
            "<p>Edit <code>&lt;App &#x2f;&gt;</code> &amp; save</p>"
        );
    }

    #[test]
    fn test_composed_styles_get_one_class() {
        let logo = css(&StyleObject::new().set("height", "6em"));
        let spin = css(&StyleObject::new().set("padding", "1.5em"));
        let tree: Node<()> = fragment([
            img().css(&logo).css(&spin).attr("class", "logo"),
            div().css(&logo).child("x"),
        ]);

        let mut sheet = StyleSheet::new();
        let html = HtmlRenderer::new(&mut sheet).render(&tree);
        let composed = SerializedStyles::compose(&[&logo, &spin]).class_name();

        assert_eq!(
            html,
            format!(
                r#"<img class="logo {}"><div class="{}">x</div>"#,
                composed,
                logo.class_name()
            )
        );
        assert_eq!(sheet.len(), 2);
    }
}
