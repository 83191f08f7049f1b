use std::io::Cursor;

use super::*;
use crate::{
    compose::spec::{ExportSpec, FontSet},
    export::sink::DownloadSink,
    foundation::error::CarouselResult,
    foundation::payload::ImagePayload,
    slide::store::SlideStore,
};

#[derive(Default)]
struct MemorySink {
    saved: Vec<String>,
    fail_on: Option<String>,
}

impl DownloadSink for MemorySink {
    fn save(&mut self, file_name: &str, _jpeg: &[u8]) -> CarouselResult<()> {
        if self.fail_on.as_deref() == Some(file_name) {
            return Err(CarouselError::render("sink refused the file"));
        }
        self.saved.push(file_name.to_string());
        Ok(())
    }
}

fn png_payload() -> ImagePayload {
    let img = image::RgbaImage::from_raw(8, 8, vec![128; 8 * 8 * 4]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    ImagePayload::new("image/png", buf)
}

fn small_spec() -> ExportSpec {
    ExportSpec {
        width: 54,
        height: 68,
        ..ExportSpec::default()
    }
}

#[test]
fn batch_is_sequential_with_a_gap_between_completions() {
    let mut store = SlideStore::new();
    let ids = store
        .add(vec![png_payload(), png_payload(), png_payload()])
        .unwrap()
        .added;

    let mut compositor = Compositor::new(FontSet::from_bytes(Vec::new(), Vec::new()));
    let mut sink = MemorySink::default();
    let mut pauses = Vec::new();

    let report = export_all(
        &mut compositor,
        store.slides(),
        &small_spec(),
        &mut sink,
        |gap| pauses.push(gap),
    );

    assert_eq!(report.exported.len(), 3);
    assert!(report.failed.is_empty());
    // Gap after each slide except the last.
    assert_eq!(pauses, vec![EXPORT_GAP, EXPORT_GAP]);
    assert_eq!(EXPORT_GAP, Duration::from_millis(500));
    let names: Vec<_> = ids
        .iter()
        .map(|id| format!("instagram-slide-{id}.jpg"))
        .collect();
    assert_eq!(sink.saved, names);
}

#[test]
fn one_failed_slide_never_stops_the_rest() {
    let mut store = SlideStore::new();
    store.add(vec![png_payload(), png_payload()]).unwrap();
    // Corrupt the first slide's current image so its render fails.
    let first = store.slides()[0].id;
    store.update(
        first,
        crate::slide::model::SlidePatch::default()
            .current_image(ImagePayload::new("image/png", vec![0, 1, 2])),
    );

    let mut compositor = Compositor::new(FontSet::from_bytes(Vec::new(), Vec::new()));
    let mut sink = MemorySink::default();

    let report = export_all(
        &mut compositor,
        store.slides(),
        &small_spec(),
        &mut sink,
        |_| {},
    );

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, first);
    assert_eq!(report.exported.len(), 1);
    assert_eq!(sink.saved.len(), 1);
}

#[test]
fn sink_failures_are_scoped_to_their_slide() {
    let mut store = SlideStore::new();
    let ids = store.add(vec![png_payload(), png_payload()]).unwrap().added;

    let mut compositor = Compositor::new(FontSet::from_bytes(Vec::new(), Vec::new()));
    let mut sink = MemorySink {
        fail_on: Some(format!("instagram-slide-{}.jpg", ids[0])),
        ..MemorySink::default()
    };

    let report = export_all(
        &mut compositor,
        store.slides(),
        &small_spec(),
        &mut sink,
        |_| {},
    );

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.exported, vec![(
        ids[1],
        format!("instagram-slide-{}.jpg", ids[1])
    )]);
}
