//! Queries over a rendered tree, in the manner of DOM testing libraries.
//!
//! `get_*` queries expect exactly one match, `get_all_*` at least one, and
//! `query_*` never fail. Text matching compares an element's own text (its
//! direct text children) after trimming and collapsing whitespace.

use thiserror::Error;

use super::node::{Element, Node, NodePath};

/// Error returned when a `get_*` query does not find exactly what it expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unable to find an element matching {0}")]
    NotFound(String),
    #[error("found {count} elements matching {query}, expected one")]
    Multiple { query: String, count: usize },
}

/// An element located by a query, with its path from the queried root.
#[derive(Debug)]
pub struct Found<'a, M> {
    path: NodePath,
    element: &'a Element<M>,
}

impl<'a, M> Found<'a, M> {
    pub fn path(&self) -> &NodePath {
        &self.path
    }

    pub fn into_path(self) -> NodePath {
        self.path
    }

    pub fn element(&self) -> &'a Element<M> {
        self.element
    }
}

impl<M> std::ops::Deref for Found<'_, M> {
    type Target = Element<M>;

    fn deref(&self) -> &Self::Target {
        self.element
    }
}

/// Query entry point over a rendered tree.
#[derive(Debug)]
pub struct Screen<'a, M> {
    root: &'a Node<M>,
}

impl<'a, M> Screen<'a, M> {
    pub fn new(root: &'a Node<M>) -> Self {
        Self { root }
    }

    /// All elements in document order.
    pub fn elements(&self) -> Vec<Found<'a, M>> {
        let mut found = Vec::new();
        walk(self.root, NodePath::default(), &mut found);
        found
    }

    pub fn query_all_by_text(&self, text: &str) -> Vec<Found<'a, M>> {
        let wanted = normalize(text);
        self.filter(|element| normalize(&element.own_text()) == wanted)
    }

    pub fn query_all_by_role(&self, role: &str) -> Vec<Found<'a, M>> {
        let wanted = canonical_role(role);
        self.filter(|element| element.role().map(canonical_role) == Some(wanted))
    }

    pub fn query_by_text(&self, text: &str) -> Result<Option<Found<'a, M>>, QueryError> {
        at_most_one(self.query_all_by_text(text), || format!("text {:?}", text))
    }

    pub fn get_by_text(&self, text: &str) -> Result<Found<'a, M>, QueryError> {
        let query = || format!("text {:?}", text);
        at_most_one(self.query_all_by_text(text), query)?.ok_or_else(|| QueryError::NotFound(query()))
    }

    pub fn get_all_by_text(&self, text: &str) -> Result<Vec<Found<'a, M>>, QueryError> {
        at_least_one(self.query_all_by_text(text), || format!("text {:?}", text))
    }

    pub fn get_by_role(&self, role: &str) -> Result<Found<'a, M>, QueryError> {
        let query = || format!("role {:?}", role);
        at_most_one(self.query_all_by_role(role), query)?.ok_or_else(|| QueryError::NotFound(query()))
    }

    pub fn get_all_by_role(&self, role: &str) -> Result<Vec<Found<'a, M>>, QueryError> {
        at_least_one(self.query_all_by_role(role), || format!("role {:?}", role))
    }

    fn filter(&self, predicate: impl Fn(&Element<M>) -> bool) -> Vec<Found<'a, M>> {
        self.elements()
            .into_iter()
            .filter(|found| predicate(found.element))
            .collect()
    }
}

fn walk<'a, M>(node: &'a Node<M>, path: NodePath, found: &mut Vec<Found<'a, M>>) {
    if let Node::Element(element) = node {
        found.push(Found {
            path: path.clone(),
            element,
        });
    }
    for (index, child) in node.children().iter().enumerate() {
        walk(child, path.child(index), found);
    }
}

fn at_most_one<'a, M>(
    mut matches: Vec<Found<'a, M>>,
    query: impl Fn() -> String,
) -> Result<Option<Found<'a, M>>, QueryError> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        count => Err(QueryError::Multiple {
            query: query(),
            count,
        }),
    }
}

fn at_least_one<'a, M>(
    matches: Vec<Found<'a, M>>,
    query: impl Fn() -> String,
) -> Result<Vec<Found<'a, M>>, QueryError> {
    if matches.is_empty() {
        Err(QueryError::NotFound(query()))
    } else {
        Ok(matches)
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn canonical_role(role: &str) -> &str {
    match role {
        "img" => "image",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{button, div, fragment, h1, img};

    fn tree() -> Node<u8> {
        fragment([
            div()
                .child(img().attr("alt", "Vite logo"))
                .child(img().attr("alt", "React logo")),
            h1().child("Vite + React"),
            div()
                .child(button().on_click(1).child("count is ").child("0"))
                .child(button().on_click(2).child("count is ").child("0")),
        ])
    }

    #[test]
    fn test_get_by_text() {
        let tree = tree();
        let screen = Screen::new(&tree);
        let heading = screen.get_by_text("Vite + React").unwrap();
        assert_eq!(heading.tag(), "h1");
        assert_eq!(heading.path(), &NodePath(vec![1]));
    }

    #[test]
    fn test_text_is_normalized() {
        let tree = tree();
        let screen = Screen::new(&tree);
        assert!(screen.get_by_text("  Vite   +  React ").is_ok());
    }

    #[test]
    fn test_get_by_text_multiple() {
        let tree = tree();
        let screen = Screen::new(&tree);
        assert_eq!(
            screen.get_by_text("count is 0").unwrap_err(),
            QueryError::Multiple {
                query: "text \"count is 0\"".to_string(),
                count: 2
            }
        );
        assert_eq!(screen.get_all_by_text("count is 0").unwrap().len(), 2);
    }

    #[test]
    fn test_roles_accept_img_alias() {
        let tree = tree();
        let screen = Screen::new(&tree);
        assert_eq!(screen.get_all_by_role("image").unwrap().len(), 2);
        assert_eq!(screen.get_all_by_role("img").unwrap().len(), 2);
    }

    #[test]
    fn test_missing_matches() {
        let tree = tree();
        let screen = Screen::new(&tree);
        assert!(screen.query_by_text("nothing here").unwrap().is_none());
        assert!(matches!(
            screen.get_all_by_role("dialog"),
            Err(QueryError::NotFound(_))
        ));
        let err = screen.get_by_role("dialog").unwrap_err();
        assert_eq!(err.to_string(), "unable to find an element matching role \"dialog\"");
    }
}
