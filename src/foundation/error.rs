/// Convenience result type used across snapscroll.
pub type ScrollResult<T> = Result<T, ScrollError>;

/// Error taxonomy for layout, snapping and controller setup.
///
/// None of these are fatal: the controller refuses the operation, leaves its state unchanged and
/// reports the error to whoever asked for initialization.
#[derive(thiserror::Error, Debug)]
pub enum ScrollError {
    /// Layout was asked to arrange an empty element collection.
    #[error("no elements to arrange")]
    NoElements,

    /// A collaborator required at initialization was not provided.
    #[error("missing dependency: {0}")]
    MissingDependency(String),

    /// A slide index outside `[0, len)` was requested.
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides available.
        len: usize,
    },

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollError {
    /// Build a [`ScrollError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ScrollError::MissingDependency`] value.
    pub fn missing_dependency(what: impl Into<String>) -> Self {
        Self::MissingDependency(what.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
