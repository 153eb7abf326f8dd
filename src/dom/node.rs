//! Markup nodes.

use indexmap::IndexMap;

use crate::style::SerializedStyles;

/// A node of a rendered view.
///
/// `M` is the message an element sends when clicked.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<M> {
    Element(Element<M>),
    Text(String),
    /// Children without a wrapping element.
    Fragment(Vec<Node<M>>),
}

impl<M> Node<M> {
    pub fn as_element(&self) -> Option<&Element<M>> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Children of an element or fragment; text has none.
    pub fn children(&self) -> &[Node<M>] {
        match self {
            Node::Element(element) => &element.children,
            Node::Fragment(children) => children,
            Node::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            _ => self.children().iter().map(Node::text_content).collect(),
        }
    }

    /// Follows child indices from this node.
    pub fn at(&self, path: &NodePath) -> Option<&Node<M>> {
        path.0
            .iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }
}

impl<M> From<Element<M>> for Node<M> {
    fn from(element: Element<M>) -> Self {
        Node::Element(element)
    }
}

impl<M> From<&str> for Node<M> {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl<M> From<String> for Node<M> {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Child indices leading from a root node to a descendant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(pub Vec<usize>);

impl NodePath {
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        NodePath(indices)
    }
}

/// An element with attributes, styles, an optional click message and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<M> {
    tag: String,
    attrs: IndexMap<String, String>,
    css: Vec<SerializedStyles>,
    on_click: Option<M>,
    children: Vec<Node<M>>,
}

impl<M> Element<M> {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: IndexMap::new(),
            css: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Attaches a compiled style handle. Several handles compose in order.
    pub fn css(mut self, styles: &SerializedStyles) -> Self {
        self.css.push(styles.clone());
        self
    }

    /// Attaches a handle if present; a missing handle leaves the element unstyled.
    pub fn css_opt(mut self, styles: Option<&SerializedStyles>) -> Self {
        self.css.extend(styles.cloned());
        self
    }

    /// Sets the message sent when the element is clicked.
    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }

    pub fn child(mut self, child: impl Into<Node<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node<M>>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The attached handles, in attachment order.
    pub fn styles(&self) -> &[SerializedStyles] {
        &self.css
    }

    /// The attached handles composed into one, or `None` when unstyled.
    pub fn composed_styles(&self) -> Option<SerializedStyles> {
        match self.css.as_slice() {
            [] => None,
            [single] => Some(single.clone()),
            many => Some(SerializedStyles::compose(&many.iter().collect::<Vec<_>>())),
        }
    }

    pub fn message(&self) -> Option<&M> {
        self.on_click.as_ref()
    }

    pub fn child_nodes(&self) -> &[Node<M>] {
        &self.children
    }

    /// Text of the direct text children, as testing queries match it.
    pub fn own_text(&self) -> String {
        fn collect<M>(nodes: &[Node<M>], out: &mut String) {
            for node in nodes {
                match node {
                    Node::Text(text) => out.push_str(text),
                    Node::Fragment(children) => collect(children, out),
                    Node::Element(_) => {}
                }
            }
        }
        let mut text = String::new();
        collect(&self.children, &mut text);
        text
    }

    /// The accessible role: an explicit `role` attribute, else the tag's implicit role.
    ///
    /// Images with alternative text report `image`; queries also accept `img`.
    pub fn role(&self) -> Option<&str> {
        if let Some(role) = self.get_attr("role") {
            return Some(role);
        }
        match self.tag.as_str() {
            "img" => match self.get_attr("alt") {
                Some("") => Some("presentation"),
                _ => Some("image"),
            },
            "button" => Some("button"),
            "a" if self.attrs.contains_key("href") => Some("link"),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some("heading"),
            "p" => Some("paragraph"),
            "code" => Some("code"),
            _ => None,
        }
    }
}

/// Creates a text node.
pub fn text<M>(content: impl Into<String>) -> Node<M> {
    Node::Text(content.into())
}

/// Groups nodes without a wrapping element.
pub fn fragment<M, I, N>(children: I) -> Node<M>
where
    I: IntoIterator<Item = N>,
    N: Into<Node<M>>,
{
    Node::Fragment(children.into_iter().map(Into::into).collect())
}

macro_rules! element_constructors {
    ( $( $name:ident ),+ ) => {
        $(
            #[doc = concat!("Creates a `<", stringify!($name), ">` element.")]
            pub fn $name<M>() -> Element<M> {
                Element::new(stringify!($name))
            }
        )+
    };
}

element_constructors!(div, a, img, h1, h2, p, code, button, span);
