//! Host page rendering.

use minijinja::{context, Environment, Error};

use crate::dom::Document;
use crate::style::StyleSheet;

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ title }}</title>
    {%- if css %}
    <style>
{{ css|safe }}
    </style>
    {%- endif %}
  </head>
  <body>
    {%- for id in containers %}
    <div id="{{ id }}">{% if id == mounted %}{{ body|safe }}{% endif %}</div>
    {%- endfor %}
  </body>
</html>
"#;

/// Renders the host document around mounted markup.
///
/// The page template is compiled once; `.html` auto-escaping applies to the
/// title and container ids, while the style sheet and body are inserted as
/// already-serialized markup.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// # Errors
    ///
    /// Returns an error if the page template fails to compile.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template("page.html", PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders the page with `body` inside the `mounted` container.
    pub fn render(
        &self,
        document: &Document,
        mounted: &str,
        sheet: &StyleSheet,
        body: &str,
    ) -> Result<String, Error> {
        let template = self.env.get_template("page.html")?;
        template.render(context! {
            title => document.get_title(),
            containers => document.containers(),
            css => sheet.to_css(),
            mounted => mounted,
            body => body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{css, StyleObject};

    #[test]
    fn test_page_wraps_body_in_container() {
        let document = Document::with_container("root")
            .container("portal")
            .title("Vite + React & co");
        let page = PageRenderer::new()
            .unwrap()
            .render(&document, "root", &StyleSheet::new(), "<h1>Vite + React</h1>")
            .unwrap();

        assert!(page.contains("<title>Vite + React &amp; co</title>"));
        assert!(page.contains(r#"<div id="root"><h1>Vite + React</h1></div>"#));
        assert!(page.contains(r#"<div id="portal"></div>"#));
        assert!(!page.contains("<style>"));
    }

    #[test]
    fn test_page_includes_sheet() {
        let card = css(&StyleObject::new().set("padding", "2em"));
        let mut sheet = StyleSheet::new();
        let class = sheet.insert(&card);

        let page = PageRenderer::new()
            .unwrap()
            .render(&Document::with_container("root"), "root", &sheet, "")
            .unwrap();

        assert!(page.contains(&format!(".{}{{padding:2em;}}", class)));
    }
}
