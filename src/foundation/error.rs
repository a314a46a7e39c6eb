/// Convenience result type used across memeframe.
pub type MemeResult<T> = Result<T, MemeError>;

/// Top-level error taxonomy used by memeframe APIs.
#[derive(thiserror::Error, Debug)]
pub enum MemeError {
    /// A container or content dimension handed to the fit calculator is not a positive finite
    /// number, or the fitted result degenerated.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while drawing to or reading back a render surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors reported by a speech synthesizer.
    #[error("speech error: {0}")]
    Speech(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MemeError {
    /// Build a [`MemeError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`MemeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MemeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MemeError::Speech`] value.
    pub fn speech(msg: impl Into<String>) -> Self {
        Self::Speech(msg.into())
    }

    /// Whether this error came from the fit calculator rejecting its inputs.
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, Self::InvalidDimension(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
