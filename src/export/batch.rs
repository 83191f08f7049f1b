use std::time::Duration;

use crate::{
    compose::renderer::Compositor,
    compose::spec::ExportSpec,
    export::sink::DownloadSink,
    foundation::error::CarouselError,
    slide::model::{Slide, SlideId},
};

/// Pause inserted between completed exports.
///
/// Backpressure against host environments that throttle rapid successive
/// downloads. Deliberate serialization, not a performance choice.
pub const EXPORT_GAP: Duration = Duration::from_millis(500);

#[derive(Debug, Default)]
/// Outcome of a batch export.
pub struct ExportReport {
    /// Slides exported successfully, with the file name each was saved as.
    pub exported: Vec<(SlideId, String)>,
    /// Slides whose render or save failed, with the cause.
    pub failed: Vec<(SlideId, CarouselError)>,
}

/// Export every slide, strictly one at a time, pacing between completions.
///
/// `pace` is called with [`EXPORT_GAP`] after each slide except the last;
/// production callers pass a sleep, tests pass a recorder. One slide's
/// failure never prevents the remaining slides from being attempted.
#[tracing::instrument(skip_all, fields(slides = slides.len()))]
pub fn export_all(
    compositor: &mut Compositor,
    slides: &[Slide],
    spec: &ExportSpec,
    sink: &mut dyn DownloadSink,
    mut pace: impl FnMut(Duration),
) -> ExportReport {
    let mut report = ExportReport::default();
    for (idx, slide) in slides.iter().enumerate() {
        let outcome = compositor
            .render(slide, spec)
            .and_then(|rendered| {
                sink.save(&rendered.file_name, &rendered.jpeg)?;
                Ok(rendered.file_name)
            });
        match outcome {
            Ok(file_name) => report.exported.push((slide.id, file_name)),
            Err(err) => {
                tracing::warn!(slide = %slide.id, %err, "slide export failed");
                report.failed.push((slide.id, err));
            }
        }
        if idx + 1 < slides.len() {
            pace(EXPORT_GAP);
        }
    }
    report
}

/// Export every slide into a directory with real 500ms pacing.
pub fn export_all_to_dir(
    compositor: &mut Compositor,
    slides: &[Slide],
    spec: &ExportSpec,
    sink: &mut crate::export::sink::DirSink,
) -> ExportReport {
    export_all(compositor, slides, spec, sink, std::thread::sleep)
}

#[cfg(test)]
#[path = "../../tests/unit/export/batch.rs"]
mod tests;
