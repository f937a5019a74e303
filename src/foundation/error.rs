/// Convenience alias for results produced by this crate.
pub type InkscribeResult<T> = Result<T, InkscribeError>;

/// Error taxonomy for signature rendering.
///
/// `Validation` is the only recoverable class (bad user input, reported before
/// any frame is generated). Everything else is fatal for the whole render: no
/// retries, no partial output.
#[derive(thiserror::Error, Debug)]
pub enum InkscribeError {
    /// Bad user input (empty name, invalid canvas, malformed definition).
    #[error("validation error: {0}")]
    Validation(String),

    /// A fixed asset is missing, unreadable, or corrupt.
    #[error("asset error: {0}")]
    Asset(String),

    /// Frame rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// The downstream encoder failed to produce a file.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkscribeError {
    /// Build a [`InkscribeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`InkscribeError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`InkscribeError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`InkscribeError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
