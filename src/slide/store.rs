use crate::{
    foundation::error::{CarouselError, CarouselResult},
    foundation::payload::ImagePayload,
    slide::model::{Slide, SlideId, SlidePatch},
};

/// Maximum number of live slides a store will hold.
pub const MAX_SLIDES: usize = 10;

#[derive(Debug, Default)]
/// In-memory ordered collection of slides, the single source of truth
/// rendered back into previews.
///
/// The store performs no IO and holds no behavior beyond add/update/remove
/// plus read access; callers treat returned slices and references as
/// immutable snapshots. Identifiers come from a monotonic counter and are
/// never reused, so a stale id from a removed slide can never alias a new
/// one.
pub struct SlideStore {
    slides: Vec<Slide>,
    next_id: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Outcome of one [`SlideStore::add`] call.
pub struct AddReport {
    /// Ids of the slides appended, in submission order.
    pub added: Vec<SlideId>,
    /// Count of payloads silently ignored because capacity ran out mid-call.
    pub dropped: usize,
}

impl SlideStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the store holds no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slots still available before [`MAX_SLIDES`] is reached.
    pub fn remaining_capacity(&self) -> usize {
        MAX_SLIDES.saturating_sub(self.slides.len())
    }

    /// Ordered snapshot of all live slides.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Look up one slide by id.
    pub fn get(&self, id: SlideId) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// Append up to `remaining_capacity` new slides in submission order.
    ///
    /// Payloads beyond the remaining capacity are silently dropped and
    /// counted in the report. When the store was already full before the
    /// call (and payloads were offered), nothing is added and a
    /// [`CarouselError::Capacity`] is returned so the caller can surface a
    /// blocking notice before retrying.
    pub fn add(&mut self, payloads: Vec<ImagePayload>) -> CarouselResult<AddReport> {
        let remaining = self.remaining_capacity();
        if remaining == 0 && !payloads.is_empty() {
            return Err(CarouselError::capacity(format!(
                "store already holds the maximum of {MAX_SLIDES} slides"
            )));
        }

        let offered = payloads.len();
        let mut report = AddReport {
            dropped: offered.saturating_sub(remaining),
            ..AddReport::default()
        };
        for payload in payloads.into_iter().take(remaining) {
            let id = SlideId(self.next_id);
            self.next_id += 1;
            self.slides.push(Slide::new(id, payload));
            report.added.push(id);
        }
        if report.dropped > 0 {
            tracing::debug!(offered, dropped = report.dropped, "add truncated to capacity");
        }
        Ok(report)
    }

    /// Merge only the set fields of `patch` into the slide matching `id`.
    ///
    /// Applied atomically per call. Absent ids are a no-op, not an error;
    /// the return value reports whether a slide was touched.
    pub fn update(&mut self, id: SlideId, patch: SlidePatch) -> bool {
        match self.slides.iter_mut().find(|s| s.id == id) {
            Some(slide) => {
                patch.apply_to(slide);
                true
            }
            None => false,
        }
    }

    /// Delete the slide matching `id`, preserving the order of the rest.
    ///
    /// Absent ids are a no-op.
    pub fn remove(&mut self, id: SlideId) -> bool {
        let before = self.slides.len();
        self.slides.retain(|s| s.id != id);
        before != self.slides.len()
    }

    /// Put the slide's original image back as its current image.
    ///
    /// Idempotent; absent ids are a no-op.
    pub fn reset_image(&mut self, id: SlideId) -> bool {
        match self.slides.iter_mut().find(|s| s.id == id) {
            Some(slide) => {
                slide.current_image = slide.original_image.clone();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slide/store.rs"]
mod tests;
