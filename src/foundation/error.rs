/// Convenience result type used across the carousel engine.
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every failure is scoped to the smallest unit possible (one file, one
/// slide, one export); batch operations collect these instead of aborting
/// sibling work.
#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    /// An input file could not be decoded into an image payload.
    #[error("decode error: {0}")]
    Decode(String),

    /// The slide store is already at its maximum live slide count.
    #[error("capacity error: {0}")]
    Capacity(String),

    /// A slide's image payload is not in the expected self-describing form.
    #[error("image encoding error: {0}")]
    ImageEncoding(String),

    /// An AI edit could not be started or its collaborator call failed.
    #[error("ai edit error: {0}")]
    AiEdit(String),

    /// The compositor could not produce a final raster for a slide.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarouselError {
    /// Build a [`CarouselError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CarouselError::Capacity`] value.
    pub fn capacity(msg: impl Into<String>) -> Self {
        Self::Capacity(msg.into())
    }

    /// Build a [`CarouselError::ImageEncoding`] value.
    pub fn image_encoding(msg: impl Into<String>) -> Self {
        Self::ImageEncoding(msg.into())
    }

    /// Build a [`CarouselError::AiEdit`] value.
    pub fn ai_edit(msg: impl Into<String>) -> Self {
        Self::AiEdit(msg.into())
    }

    /// Build a [`CarouselError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
