//! Terminal preview of a rendered tree.
//!
//! Block elements (`div`, `h1`, `h2`, `p`) start new lines, everything else
//! flows inline. A flex container laid out as a row renders its children as
//! side-by-side columns. Colors and weights come from each element's
//! composed styles:
//!
//! | Source | Terminal style |
//! |--------|----------------|
//! | `color` declaration | nearest ANSI 256 foreground |
//! | `font-weight` of 600 or more, `bold` | bold |
//! | `h1`, `h2` | bold |
//! | `code` | cyan |
//!
//! Values that are not colors or weights (`'altStyles.invalid'`) are ignored.

use console::{Color, Style};
use unicode_width::UnicodeWidthStr;

use crate::dom::{Element, Node};
use crate::util::{parse_color, rgb_to_ansi256, truncate_to_width};

/// Spaces between columns of a row layout.
const COLUMN_GAP: usize = 3;

const BLOCK_TAGS: &[&str] = &["div", "h1", "h2", "p"];

#[derive(Debug, Clone)]
struct Span {
    text: String,
    style: Style,
}

type Line = Vec<Span>;

/// Renders a node tree as styled terminal lines.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::dom::{button, div, h1, Node};
/// use styled_scaffold::render::TerminalRenderer;
///
/// let tree: Node<()> = div()
///     .child(h1().child("Vite + React"))
///     .child(button().child("count is 0"))
///     .into();
///
/// let text = TerminalRenderer::new(40).with_color(false).render(&tree);
/// assert_eq!(text, "Vite + React\n[ count is 0 ]");
/// ```
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    width: usize,
    use_color: bool,
}

impl TerminalRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            use_color: true,
        }
    }

    /// Disables ANSI styling for plain text output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn render<M>(&self, node: &Node<M>) -> String {
        self.block(node, self.width, &Style::new())
            .iter()
            .map(|line| self.paint(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paint(&self, line: &[Span]) -> String {
        line.iter()
            .map(|span| {
                if self.use_color {
                    span.style
                        .clone()
                        .force_styling(true)
                        .apply_to(&span.text)
                        .to_string()
                } else {
                    span.text.clone()
                }
            })
            .collect()
    }

    fn block<M>(&self, node: &Node<M>, width: usize, style: &Style) -> Vec<Line> {
        match node {
            Node::Element(element) if is_block(element) => {
                let style = element_style(element, style);
                if is_row(element) {
                    self.columns(element.child_nodes(), width, &style)
                } else {
                    self.sequence(element.child_nodes(), width, &style)
                }
            }
            Node::Fragment(children) => self.sequence(children, width, style),
            _ => self.sequence(std::slice::from_ref(node), width, style),
        }
    }

    fn sequence<M>(&self, nodes: &[Node<M>], width: usize, style: &Style) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut run = Line::new();
        for node in nodes {
            let starts_block = match node {
                Node::Element(element) => is_block(element),
                Node::Fragment(_) => true,
                Node::Text(_) => false,
            };
            if starts_block {
                flush(&mut run, width, &mut lines);
                lines.extend(self.block(node, width, style));
            } else {
                inline(node, style, &mut run);
            }
        }
        flush(&mut run, width, &mut lines);
        lines
    }

    fn columns<M>(&self, nodes: &[Node<M>], width: usize, style: &Style) -> Vec<Line> {
        let items: Vec<&Node<M>> = nodes
            .iter()
            .filter(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()))
            .collect();
        if items.is_empty() {
            return Vec::new();
        }

        let count = items.len();
        let column = (width.saturating_sub(COLUMN_GAP * (count - 1)) / count).max(1);
        let cells: Vec<Vec<Line>> = items
            .iter()
            .map(|node| self.block(node, column, style))
            .collect();
        let rows = cells.iter().map(Vec::len).max().unwrap_or(0);

        (0..rows)
            .map(|row| {
                let mut line = Line::new();
                for (index, cell) in cells.iter().enumerate() {
                    let content = cell.get(row).cloned().unwrap_or_default();
                    let used = line_width(&content);
                    line.extend(content);
                    if index + 1 < count {
                        line.push(Span {
                            text: " ".repeat(column.saturating_sub(used) + COLUMN_GAP),
                            style: Style::new(),
                        });
                    }
                }
                while line.last().is_some_and(|span| span.text.trim().is_empty()) {
                    line.pop();
                }
                line
            })
            .collect()
    }
}

fn inline<M>(node: &Node<M>, style: &Style, run: &mut Line) {
    match node {
        Node::Text(text) => run.push(Span {
            text: text.clone(),
            style: style.clone(),
        }),
        Node::Fragment(children) => {
            for child in children {
                inline(child, style, run);
            }
        }
        Node::Element(element) => {
            let style = element_style(element, style);
            let span = |text: String| Span {
                text,
                style: style.clone(),
            };
            match element.tag() {
                "img" => run.push(span(format!(
                    "[img: {}]",
                    element.get_attr("alt").unwrap_or_default()
                ))),
                "button" => {
                    run.push(span("[ ".to_string()));
                    for child in element.child_nodes() {
                        inline(child, &style, run);
                    }
                    run.push(span(" ]".to_string()));
                }
                _ => {
                    for child in element.child_nodes() {
                        inline(child, &style, run);
                    }
                }
            }
        }
    }
}

fn flush(run: &mut Line, width: usize, lines: &mut Vec<Line>) {
    let line = std::mem::take(run);
    if line.iter().any(|span| !span.text.trim().is_empty()) {
        lines.push(fit(line, width));
    }
}

/// Truncates a line to `width` columns, keeping each span's style.
fn fit(line: Line, width: usize) -> Line {
    let plain: String = line.iter().map(|span| span.text.as_str()).collect();
    let truncated = truncate_to_width(&plain, width);
    if truncated == plain {
        return line;
    }

    let mut chars = truncated.chars();
    let mut fitted = Line::new();
    for span in line {
        let text: String = chars.by_ref().take(span.text.chars().count()).collect();
        if text.is_empty() {
            break;
        }
        fitted.push(Span {
            text,
            style: span.style,
        });
    }
    fitted
}

fn line_width(line: &[Span]) -> usize {
    line.iter().map(|span| span.text.width()).sum()
}

fn is_block<M>(element: &Element<M>) -> bool {
    BLOCK_TAGS.contains(&element.tag())
}

fn is_row<M>(element: &Element<M>) -> bool {
    let Some(styles) = element.composed_styles() else {
        return false;
    };
    styles.declaration("display").as_deref() == Some("flex")
        && !matches!(
            styles.declaration("flex-direction").as_deref(),
            Some("column") | Some("column-reverse")
        )
}

fn element_style<M>(element: &Element<M>, parent: &Style) -> Style {
    let mut style = parent.clone();
    match element.tag() {
        "h1" | "h2" => style = style.bold(),
        "code" => style = style.cyan(),
        _ => {}
    }

    if let Some(styles) = element.composed_styles() {
        if let Some(rgb) = styles.declaration("color").and_then(|value| parse_color(&value)) {
            style = style.fg(Color::Color256(rgb_to_ansi256(rgb)));
        }
        if styles
            .declaration("font-weight")
            .is_some_and(|weight| is_bold_weight(&weight))
        {
            style = style.bold();
        }
    }
    style
}

fn is_bold_weight(weight: &str) -> bool {
    match weight.trim() {
        "bold" | "bolder" => true,
        numeric => numeric.parse::<f64>().is_ok_and(|value| value >= 600.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{code, div, img, p};
    use crate::style::{css, StyleObject};

    fn plain(node: &Node<()>, width: usize) -> String {
        TerminalRenderer::new(width).with_color(false).render(node)
    }

    #[test]
    fn test_inline_content() {
        let tree: Node<()> = div()
            .child(img().attr("alt", "Vite logo"))
            .child(" ")
            .child(img().attr("alt", "React logo"))
            .child(p().child("Edit ").child(code().child("src/App.tsx")).child(" and save"))
            .into();
        assert_eq!(
            plain(&tree, 80),
            "[img: Vite logo] [img: React logo]\nEdit src/App.tsx and save"
        );
    }

    #[test]
    fn test_row_layout_renders_columns() {
        let layout = css(&StyleObject::new()
            .set("display", "flex")
            .set("flexDirection", "row"));
        let tree: Node<()> = div()
            .css(&layout)
            .child(div().child(p().child("one")).child(p().child("two")))
            .child(div().child(p().child("three")))
            .into();

        assert_eq!(plain(&tree, 20), "one        three\ntwo");
    }

    #[test]
    fn test_column_layout_stacks() {
        let layout = css(&StyleObject::new()
            .set("display", "flex")
            .set("flexDirection", "column"));
        let tree: Node<()> = div()
            .css(&layout)
            .child(p().child("one"))
            .child(p().child("two"))
            .into();

        assert_eq!(plain(&tree, 20), "one\ntwo");
    }

    #[test]
    fn test_long_lines_are_truncated() {
        let tree: Node<()> = p().child("Click on the ").child("Vite and React logos").into();
        assert_eq!(plain(&tree, 16), "Click on the Vi…");
    }

    #[test]
    fn test_color_and_weight_from_styles() {
        let docs = css(&StyleObject::new().set("color", "#888").set("fontWeight", 700));
        let tree: Node<()> = p().css(&docs).child("learn more").into();

        let styled = TerminalRenderer::new(40).render(&tree);
        assert!(styled.contains("38;5;244"));
        assert!(styled.contains("\x1b[1m"));
        assert!(styled.contains("learn more"));
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let docs = css(&StyleObject::new()
            .set("color", "'altStyles.invalid'")
            .set("fontWeight", 1));
        let tree: Node<()> = p().css(&docs).child("learn more").into();

        assert_eq!(TerminalRenderer::new(40).render(&tree), "learn more");
    }

    #[test]
    fn test_bold_weights() {
        assert!(is_bold_weight("700"));
        assert!(is_bold_weight("bold"));
        assert!(!is_bold_weight("1"));
        assert!(!is_bold_weight("normal"));
    }
}
