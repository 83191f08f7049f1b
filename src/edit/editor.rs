/// Ways the AI edit collaborator can fail.
///
/// These mirror what the remote service actually reports: a response with
/// no content at all, a response that carried text but no image, or a
/// transport-level failure. All of them are retryable from the caller's
/// point of view; the engine itself never retries.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum EditFailure {
    /// The service returned no response content at all.
    #[error("no content returned from image editor")]
    NoContent,

    /// The service responded, but no image data was found in the response.
    #[error("no image data found in editor response")]
    NoImageInResponse,

    /// The request itself failed (network, auth, quota).
    #[error("editor transport failure: {0}")]
    Transport(String),
}

/// Opaque generative image-edit capability.
///
/// Implementations wrap whatever remote service performs the edit. The
/// contract is single-shot: one input image plus an instruction, one output
/// image (assumed JPEG-compatible) or one [`EditFailure`].
pub trait ImageEditor {
    /// Transform `image` (with mime type `mime_type`) per `instruction`.
    fn edit_image(
        &mut self,
        image: &[u8],
        mime_type: &str,
        instruction: &str,
    ) -> Result<Vec<u8>, EditFailure>;
}
