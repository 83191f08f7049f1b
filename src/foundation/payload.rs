use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::foundation::error::{CarouselError, CarouselResult};

/// Mime type assigned to images returned by the AI edit collaborator.
pub const JPEG_MIME: &str = "image/jpeg";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Self-describing image payload: encoded bytes tagged with their mime type.
///
/// This is the single image currency of the engine. Slides hold two of
/// these (original and current), the edit boundary decomposes one into
/// `(bytes, mime)` for the collaborator call, and the compositor decodes
/// one into pixels. The bytes are shared via `Arc` so cloning a slide or
/// snapshotting the store never copies pixel data.
pub struct ImagePayload {
    mime_type: String,
    data: Arc<Vec<u8>>,
}

impl ImagePayload {
    /// Build a payload from a mime type and encoded image bytes.
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: Arc::new(data),
        }
    }

    /// Mime type tag, e.g. `image/png`.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Encoded image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Check the payload can be decomposed for the edit collaborator.
    ///
    /// Fails with [`CarouselError::ImageEncoding`] when the bytes are empty
    /// or the tag is not an `image/*` mime type.
    pub fn verify_encoded(&self) -> CarouselResult<()> {
        if self.data.is_empty() {
            return Err(CarouselError::image_encoding("payload has no image bytes"));
        }
        if !self.mime_type.starts_with("image/") {
            return Err(CarouselError::image_encoding(format!(
                "'{}' is not an image mime type",
                self.mime_type
            )));
        }
        Ok(())
    }

    /// Parse a `data:<mime>;base64,<body>` URL into a payload.
    pub fn from_data_url(url: &str) -> CarouselResult<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| CarouselError::image_encoding("missing 'data:' prefix"))?;
        let (mime_type, body) = rest
            .split_once(";base64,")
            .ok_or_else(|| CarouselError::image_encoding("missing ';base64,' separator"))?;
        if mime_type.is_empty() {
            return Err(CarouselError::image_encoding("empty mime type"));
        }
        let data = STANDARD
            .decode(body)
            .map_err(|e| CarouselError::image_encoding(format!("invalid base64 body: {e}")))?;
        Ok(Self::new(mime_type, data))
    }

    /// Render the payload back into a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(self.data.as_slice()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/payload.rs"]
mod tests;
