//! Mount errors.

use thiserror::Error;

/// Error returned when a view cannot be mounted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// The host document has no container with the requested id.
    #[error("failed to find the root element `#{id}`")]
    ContainerNotFound { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_not_found_display() {
        let err = MountError::ContainerNotFound { id: "root".into() };
        assert_eq!(err.to_string(), "failed to find the root element `#root`");
    }
}
