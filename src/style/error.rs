//! Style compilation errors.

use thiserror::Error;

/// Error returned when a style template cannot be compiled.
///
/// Only the template layer can fail. CSS content is never validated, so a
/// malformed property or value compiles into the handle unchanged.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The template has invalid syntax or failed to render.
    #[error("invalid style template: {0}")]
    Template(#[from] minijinja::Error),
}
