use std::sync::Arc;

use crate::{
    edit::editor::{EditFailure, ImageEditor},
    foundation::error::{CarouselError, CarouselResult},
    foundation::payload::{ImagePayload, JPEG_MIME},
    slide::model::{SlideId, SlidePatch},
    slide::store::SlideStore,
};

#[derive(Clone, Copy, Debug)]
/// Handle correlating an in-flight edit with the slide that requested it.
///
/// Completions are keyed by this ticket rather than by captured state, so
/// results arriving after the slide was removed degrade to a no-op instead
/// of touching the wrong slide.
pub struct EditTicket {
    slide_id: SlideId,
}

impl EditTicket {
    /// Id of the slide this edit belongs to.
    pub fn slide_id(self) -> SlideId {
        self.slide_id
    }
}

#[derive(Clone, Debug)]
/// Decomposed request parts handed to the [`ImageEditor`] collaborator.
pub struct EditRequest {
    /// Completion handle for [`complete_edit`].
    pub ticket: EditTicket,
    /// Raw encoded image bytes of the slide's current image.
    pub image: Arc<Vec<u8>>,
    /// Mime type of `image`.
    pub mime_type: String,
}

/// Start an AI edit for one slide.
///
/// Rejects unknown slides and slides that already have an edit in flight
/// (at most one per slide). Verifies the current image payload is in the
/// expected self-describing form before anything else, then marks the
/// slide as processing and returns the request parts for the collaborator.
pub fn begin_edit(store: &mut SlideStore, id: SlideId) -> CarouselResult<EditRequest> {
    let slide = store
        .get(id)
        .ok_or_else(|| CarouselError::ai_edit(format!("no slide with id {id}")))?;
    if slide.is_processing {
        return Err(CarouselError::ai_edit(format!(
            "slide {id} already has an edit in flight"
        )));
    }

    let payload = &slide.current_image;
    payload.verify_encoded()?;
    let image = Arc::new(payload.data().to_vec());
    let mime_type = payload.mime_type().to_string();

    store.update(id, SlidePatch::default().is_processing(true));
    Ok(EditRequest {
        ticket: EditTicket { slide_id: id },
        image,
        mime_type,
    })
}

/// Apply a finished edit back to the store.
///
/// If the slide was removed while the edit was in flight, the stale result
/// is dropped and this returns `Ok(())`. On success the returned bytes
/// (JPEG per the collaborator contract) replace the slide's current image;
/// on failure the current image is left untouched. Either way the
/// processing flag is cleared.
pub fn complete_edit(
    store: &mut SlideStore,
    ticket: EditTicket,
    outcome: Result<Vec<u8>, EditFailure>,
) -> CarouselResult<()> {
    let id = ticket.slide_id;
    if store.get(id).is_none() {
        tracing::debug!(slide = %id, "dropping edit result for removed slide");
        return Ok(());
    }

    match outcome {
        Ok(bytes) => {
            let patch = SlidePatch::default()
                .current_image(ImagePayload::new(JPEG_MIME, bytes))
                .is_processing(false);
            store.update(id, patch);
            Ok(())
        }
        Err(failure) => {
            store.update(id, SlidePatch::default().is_processing(false));
            Err(CarouselError::ai_edit(format!(
                "edit of slide {id} failed: {failure}"
            )))
        }
    }
}

/// Run a complete edit synchronously: begin, invoke the collaborator, apply.
pub fn edit_slide(
    store: &mut SlideStore,
    id: SlideId,
    editor: &mut dyn ImageEditor,
    instruction: &str,
) -> CarouselResult<()> {
    let request = begin_edit(store, id)?;
    let outcome = editor.edit_image(&request.image, &request.mime_type, instruction);
    complete_edit(store, request.ticket, outcome)
}

#[cfg(test)]
#[path = "../../tests/unit/edit/session.rs"]
mod tests;
