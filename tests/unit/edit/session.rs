use super::*;

struct FixedEditor(Result<Vec<u8>, EditFailure>);

impl ImageEditor for FixedEditor {
    fn edit_image(
        &mut self,
        _image: &[u8],
        _mime_type: &str,
        _instruction: &str,
    ) -> Result<Vec<u8>, EditFailure> {
        self.0.clone()
    }
}

fn store_with_slides(n: usize) -> (SlideStore, Vec<SlideId>) {
    let mut store = SlideStore::new();
    let payloads = (0..n)
        .map(|i| ImagePayload::new("image/png", vec![i as u8; 8]))
        .collect();
    let ids = store.add(payloads).unwrap().added;
    (store, ids)
}

#[test]
fn begin_edit_marks_processing_and_decomposes_payload() {
    let (mut store, ids) = store_with_slides(1);
    let request = begin_edit(&mut store, ids[0]).unwrap();

    assert_eq!(request.ticket.slide_id(), ids[0]);
    assert_eq!(request.mime_type, "image/png");
    assert_eq!(request.image.as_slice(), &[0u8; 8]);
    assert!(store.get(ids[0]).unwrap().is_processing);
}

#[test]
fn begin_edit_rejects_a_slide_already_in_flight() {
    let (mut store, ids) = store_with_slides(1);
    begin_edit(&mut store, ids[0]).unwrap();

    let err = begin_edit(&mut store, ids[0]).unwrap_err();
    assert!(matches!(err, CarouselError::AiEdit(_)));
}

#[test]
fn begin_edit_rejects_unknown_slide() {
    let (mut store, _) = store_with_slides(1);
    let err = begin_edit(&mut store, SlideId::from_u64(42)).unwrap_err();
    assert!(matches!(err, CarouselError::AiEdit(_)));
}

#[test]
fn begin_edit_rejects_bad_payload_encoding() {
    let (mut store, ids) = store_with_slides(1);
    store.update(
        ids[0],
        SlidePatch::default().current_image(ImagePayload::new("text/plain", vec![1])),
    );

    let err = begin_edit(&mut store, ids[0]).unwrap_err();
    assert!(matches!(err, CarouselError::ImageEncoding(_)));
    assert!(!store.get(ids[0]).unwrap().is_processing);
}

#[test]
fn successful_edit_replaces_only_its_own_slide() {
    let (mut store, ids) = store_with_slides(3);
    let mut editor = FixedEditor(Ok(vec![9, 9, 9]));

    edit_slide(&mut store, ids[1], &mut editor, "add a retro filter").unwrap();

    let edited = store.get(ids[1]).unwrap();
    assert_eq!(edited.current_image.mime_type(), JPEG_MIME);
    assert_eq!(edited.current_image.data(), &[9, 9, 9]);
    assert_eq!(edited.original_image.data(), &[1u8; 8]);
    assert!(!edited.is_processing);

    for &other in [ids[0], ids[2]].iter() {
        let slide = store.get(other).unwrap();
        assert_eq!(slide.current_image, slide.original_image);
    }
}

#[test]
fn failed_edit_clears_flag_and_keeps_current_image() {
    let (mut store, ids) = store_with_slides(1);
    let mut editor = FixedEditor(Err(EditFailure::NoImageInResponse));

    let err = edit_slide(&mut store, ids[0], &mut editor, "prompt").unwrap_err();
    assert!(matches!(err, CarouselError::AiEdit(_)));

    let slide = store.get(ids[0]).unwrap();
    assert!(!slide.is_processing);
    assert_eq!(slide.current_image, slide.original_image);
}

#[test]
fn stale_completion_after_removal_is_a_noop() {
    let (mut store, ids) = store_with_slides(2);
    let request = begin_edit(&mut store, ids[0]).unwrap();
    store.remove(ids[0]);

    complete_edit(&mut store, request.ticket, Ok(vec![1, 2, 3])).unwrap();

    assert_eq!(store.len(), 1);
    let survivor = store.get(ids[1]).unwrap();
    assert_eq!(survivor.current_image, survivor.original_image);
}

#[test]
fn edits_on_different_slides_may_overlap() {
    let (mut store, ids) = store_with_slides(2);
    let first = begin_edit(&mut store, ids[0]).unwrap();
    let second = begin_edit(&mut store, ids[1]).unwrap();

    // Completions arrive out of order; each touches only its own slide.
    complete_edit(&mut store, second.ticket, Ok(vec![2])).unwrap();
    complete_edit(&mut store, first.ticket, Ok(vec![1])).unwrap();

    assert_eq!(store.get(ids[0]).unwrap().current_image.data(), &[1]);
    assert_eq!(store.get(ids[1]).unwrap().current_image.data(), &[2]);
}
