/// Convenience result type used across the crate.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy for composing a card.
///
/// Every failure is terminal for the request that produced it; nothing is retried and no
/// partial output is written.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Background image or font file is missing or cannot be decoded.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// Encoding the PNG or writing it to the output path failed.
    #[error("image write error: {0}")]
    ImageWrite(String),

    /// A size, font size, or configuration option is malformed or out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl CardError {
    /// Build a [`CardError::ImageLoad`] value.
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build a [`CardError::ImageWrite`] value.
    pub fn image_write(msg: impl Into<String>) -> Self {
        Self::ImageWrite(msg.into())
    }

    /// Build a [`CardError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
