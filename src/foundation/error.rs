/// Convenience result type used across the crate.
pub type LiquidResult<T> = Result<T, LiquidError>;

/// Top-level error taxonomy used by public APIs.
///
/// Geometry never produces errors: degenerate input degrades to an empty or full path instead.
#[derive(thiserror::Error, Debug)]
pub enum LiquidError {
    /// Invalid caller-provided data (data set, canvas, sample time).
    #[error("validation error: {0}")]
    Validation(String),

    /// Series configuration that cannot be degraded to a default.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while validating or sampling timelines.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LiquidError {
    /// Build a [`LiquidError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LiquidError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LiquidError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`LiquidError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LiquidError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
