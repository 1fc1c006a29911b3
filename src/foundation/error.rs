/// Result alias used across the crate.
pub type ReelResult<T> = Result<T, ReelError>;

/// Error type for scheduling, generation and frame output.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid configuration or timing input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Generator weights or inference failure.
    #[error("model error: {0}")]
    Model(String),

    /// Frame sink failure (composition, encoding or write).
    #[error("sink error: {0}")]
    Sink(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, usually I/O with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Model`].
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Build a [`ReelError::Sink`].
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    /// Build a [`ReelError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
