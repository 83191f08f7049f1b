use crate::foundation::payload::ImagePayload;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Opaque slide identifier, unique within a store and never reused.
pub struct SlideId(pub(crate) u64);

impl SlideId {
    /// Construct a [`SlideId`] from a raw 64-bit value.
    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw 64-bit identifier.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One unit of the carousel: an image plus headline/body text and edit state.
pub struct Slide {
    /// Store-assigned identity, immutable.
    pub id: SlideId,
    /// Image payload as received at upload, immutable after creation.
    pub original_image: ImagePayload,
    /// Image payload actively displayed and exported.
    ///
    /// Starts equal to `original_image`; an AI edit result replaces it and
    /// a reset puts the original back.
    pub current_image: ImagePayload,
    /// Headline text, default empty.
    pub title: String,
    /// Body text, default empty.
    pub body: String,
    /// True only while an AI edit is in flight for this slide.
    pub is_processing: bool,
}

impl Slide {
    pub(crate) fn new(id: SlideId, image: ImagePayload) -> Self {
        Self {
            id,
            original_image: image.clone(),
            current_image: image,
            title: String::new(),
            body: String::new(),
            is_processing: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Partial-field update for one slide, merged atomically by the store.
///
/// Unset fields leave the slide untouched. Identity and the original image
/// are deliberately not patchable.
pub struct SlidePatch {
    /// Replacement headline text.
    pub title: Option<String>,
    /// Replacement body text.
    pub body: Option<String>,
    /// Replacement current image payload.
    pub current_image: Option<ImagePayload>,
    /// Replacement in-flight edit flag.
    pub is_processing: Option<bool>,
}

impl SlidePatch {
    /// Set the headline text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the current image payload.
    pub fn current_image(mut self, image: ImagePayload) -> Self {
        self.current_image = Some(image);
        self
    }

    /// Set the in-flight edit flag.
    pub fn is_processing(mut self, value: bool) -> Self {
        self.is_processing = Some(value);
        self
    }

    pub(crate) fn apply_to(self, slide: &mut Slide) {
        if let Some(title) = self.title {
            slide.title = title;
        }
        if let Some(body) = self.body {
            slide.body = body;
        }
        if let Some(image) = self.current_image {
            slide.current_image = image;
        }
        if let Some(flag) = self.is_processing {
            slide.is_processing = flag;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slide/model.rs"]
mod tests;
