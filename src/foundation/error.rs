/// Result alias used across the crate.
pub type UnwrappedResult<T> = Result<T, UnwrappedError>;

#[derive(thiserror::Error, Debug)]
/// Error type for loading, validating and planning.
pub enum UnwrappedError {
    /// Input record or configuration failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Scene series could not be placed on the timeline.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, passed through unchanged.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UnwrappedError {
    /// Build a [`UnwrappedError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UnwrappedError::Timeline`].
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`UnwrappedError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
