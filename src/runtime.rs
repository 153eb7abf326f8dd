//! Mounting components and dispatching events.
//!
//! The runtime is single threaded and synchronous: a click looks up the
//! clicked element's message, hands it to [`Component::update`] and renders
//! the component again before returning.

use tracing::debug;

use crate::context::{Context, ThemeProvider};
use crate::dom::{Document, Node, NodePath, Screen};
use crate::error::MountError;
use crate::render::{HtmlRenderer, PageRenderer};
use crate::style::StyleSheet;

/// A renderable unit with local state.
pub trait Component {
    /// What elements of this component send when clicked.
    type Message: Clone;

    /// Applies a message to the component's state.
    fn update(&mut self, message: Self::Message);

    /// Builds the markup for the current state.
    fn view(&self, cx: &Context) -> Node<Self::Message>;
}

/// A container in a document, ready to render into.
#[derive(Debug)]
pub struct Root {
    document: Document,
    container: String,
}

/// Locates the mount container.
///
/// # Errors
///
/// Returns [`MountError::ContainerNotFound`] when the document has no
/// container named `id`. Nothing is rendered in that case.
pub fn create_root(document: Document, id: &str) -> Result<Root, MountError> {
    if !document.has_container(id) {
        return Err(MountError::ContainerNotFound { id: id.to_string() });
    }
    debug!(container = id, "created root");
    Ok(Root {
        document,
        container: id.to_string(),
    })
}

impl Root {
    /// Renders a component inside a theme provider.
    pub fn render<C: Component>(self, provider: &ThemeProvider, component: C) -> Mounted<C> {
        let context = provider.context();
        let tree = component.view(&context);
        debug!(container = %self.container, "mounted component");
        Mounted {
            document: self.document,
            container: self.container,
            context,
            component,
            tree,
            renders: 1,
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }
}

/// A mounted component and its latest rendered tree.
pub struct Mounted<C: Component> {
    document: Document,
    container: String,
    context: Context,
    component: C,
    tree: Node<C::Message>,
    renders: usize,
}

impl<C: Component> Mounted<C> {
    /// Sends a message to the component and re-renders.
    pub fn dispatch(&mut self, message: C::Message) {
        self.component.update(message);
        self.tree = self.component.view(&self.context);
        self.renders += 1;
        debug!(renders = self.renders, "re-rendered after dispatch");
    }

    /// Clicks the element at `path` in the current tree.
    ///
    /// Returns `false` without re-rendering when there is no element at the
    /// path or the element has no click handler.
    pub fn click(&mut self, path: &NodePath) -> bool {
        let message = self
            .tree
            .at(path)
            .and_then(Node::as_element)
            .and_then(|element| element.message())
            .cloned();
        match message {
            Some(message) => {
                self.dispatch(message);
                true
            }
            None => {
                debug!(?path, "click without handler ignored");
                false
            }
        }
    }

    pub fn screen(&self) -> Screen<'_, C::Message> {
        Screen::new(&self.tree)
    }

    pub fn tree(&self) -> &Node<C::Message> {
        &self.tree
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    /// Number of render passes so far, including the initial mount.
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Renders the tree to markup, collecting its styles into `sheet`.
    pub fn to_markup(&self, sheet: &mut StyleSheet) -> String {
        HtmlRenderer::new(sheet).render(&self.tree)
    }

    /// Renders the whole host page: style sheet plus the mounted markup.
    pub fn to_page(&self) -> Result<String, minijinja::Error> {
        let mut sheet = StyleSheet::new();
        let body = self.to_markup(&mut sheet);
        PageRenderer::new()?.render(&self.document, &self.container, &sheet, &body)
    }
}
