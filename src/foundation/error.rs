/// Convenience result type used across rigpose.
pub type RigposeResult<T> = Result<T, RigposeError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Only hard failures live here. Missing joints, degenerate frame ranges, degenerate
/// geometry and blank references are recovered where they occur.
#[derive(thiserror::Error, Debug)]
pub enum RigposeError {
    /// Invalid user-provided configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors reported by the rig source while sampling bone positions.
    #[error("rig error: {0}")]
    Rig(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RigposeError {
    /// Build a [`RigposeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RigposeError::Rig`] value.
    pub fn rig(msg: impl Into<String>) -> Self {
        Self::Rig(msg.into())
    }

    /// Build a [`RigposeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
