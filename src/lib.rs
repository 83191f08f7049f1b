//! Carousel is a compositing and export engine for multi-slide image
//! carousels: ingest photos, overlay headline/body text, swap in
//! AI-edited imagery, and serialize each slide as a fixed-resolution JPEG.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: uploaded file bytes -> self-describing [`ImagePayload`]
//! 2. **Store**: payloads -> ordered [`Slide`] records in a [`SlideStore`]
//!    (bounded add, partial update, removal)
//! 3. **Edit** (optional): one slide's current image through an opaque
//!    [`ImageEditor`] collaborator, applied back by ticket
//! 4. **Compose**: cover-fit scaling, bottom gradient, greedy-wrapped text,
//!    JPEG encoding ([`Compositor`])
//! 5. **Export**: sequential batch with download pacing into a
//!    [`DownloadSink`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: fit, wrap and gradient math are pure and
//!   stable for a given input.
//! - **Failures stay small**: one bad file, slide or export never aborts
//!   its siblings; errors carry the scope they apply to.
//! - **Premultiplied RGBA8** end-to-end until the final JPEG conversion.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod edit;
mod export;
mod foundation;
mod ingest;
mod slide;

pub use compose::fit::{CoverFit, cover_fit};
pub use compose::gradient::{composite_gradient, overlay_alpha};
pub use compose::renderer::{Compositor, RenderedSlide};
pub use compose::spec::{ExportSpec, FontSet, GradientSpec, GradientStop, TextBlockSpec};
pub use compose::text::{TextBrushRgba8, TextLayoutEngine};
pub use compose::wrap::wrap_greedy;
pub use edit::editor::{EditFailure, ImageEditor};
pub use edit::session::{EditRequest, EditTicket, begin_edit, complete_edit, edit_slide};
pub use export::batch::{EXPORT_GAP, ExportReport, export_all, export_all_to_dir};
pub use export::sink::{DirSink, DownloadSink};
pub use foundation::error::{CarouselError, CarouselResult};
pub use foundation::payload::{ImagePayload, JPEG_MIME};
pub use ingest::batch::{IngestReport, ingest_batch};
pub use ingest::decode::{PreparedImage, decode_image, ingest_file, sniff_mime};
pub use slide::model::{Slide, SlideId, SlidePatch};
pub use slide::store::{AddReport, MAX_SLIDES, SlideStore};
