/// Convenience result type used across keepsake.
pub type KeepsakeResult<T> = Result<T, KeepsakeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Runtime effects never fail: a missing target or a bad hover color degrades to a
/// skipped effect or a default tint. These variants cover load-time problems
/// (configuration, authored timelines) and host IO.
#[derive(thiserror::Error, Debug)]
pub enum KeepsakeError {
    /// Invalid user-provided configuration or timeline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or sampling keyframe tracks.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while laying out story cards or connectors.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while building or rasterizing a snapshot.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeepsakeError {
    /// Build a [`KeepsakeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeepsakeError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`KeepsakeError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`KeepsakeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`KeepsakeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for KeepsakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
