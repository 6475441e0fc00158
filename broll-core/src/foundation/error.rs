/// Convenience result type used across broll.
pub type BrollResult<T> = Result<T, BrollError>;

/// Error taxonomy for the fallible boundaries of the crate.
///
/// Prompt mapping and frame composition never fail; errors only come from loading or
/// overriding configurations, baking clips and sampling photos.
#[derive(thiserror::Error, Debug)]
pub enum BrollError {
    /// Invalid user-provided configuration or clip data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed color value.
    #[error("color error: {0}")]
    Color(String),

    /// Errors while reading or sampling a reference photo.
    #[error("sampling error: {0}")]
    Sampling(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrollError {
    /// Build a [`BrollError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrollError::Color`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`BrollError::Sampling`] value.
    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling(msg.into())
    }

    /// Build a [`BrollError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
