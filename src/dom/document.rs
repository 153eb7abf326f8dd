//! The host document that views mount into.

/// A host document with named mount containers.
///
/// # Example
///
/// ```rust
/// use styled_scaffold::Document;
///
/// let document = Document::with_container("root").title("Vite + React");
/// assert!(document.has_container("root"));
/// assert!(!Document::empty().has_container("root"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: String,
    containers: Vec<String>,
}

impl Document {
    /// A document without containers; mounting into it always fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A document with one container.
    pub fn with_container(id: &str) -> Self {
        Self::empty().container(id)
    }

    /// Adds a container, returning the document for chaining.
    pub fn container(mut self, id: &str) -> Self {
        if !self.has_container(id) {
            self.containers.push(id.to_string());
        }
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.iter().any(|c| c == id)
    }

    pub fn containers(&self) -> &[String] {
        &self.containers
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containers_are_unique() {
        let document = Document::with_container("root").container("root").container("modal");
        assert_eq!(document.containers(), ["root".to_string(), "modal".to_string()]);
    }
}
