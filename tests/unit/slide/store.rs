use super::*;

fn payload(tag: u8) -> ImagePayload {
    ImagePayload::new("image/png", vec![tag; 4])
}

fn payloads(n: usize) -> Vec<ImagePayload> {
    (0..n).map(|i| payload(i as u8)).collect()
}

#[test]
fn add_appends_in_submission_order() {
    let mut store = SlideStore::new();
    let report = store.add(payloads(3)).unwrap();

    assert_eq!(report.added.len(), 3);
    assert_eq!(report.dropped, 0);
    assert_eq!(store.len(), 3);
    let ids: Vec<_> = store.slides().iter().map(|s| s.id).collect();
    assert_eq!(ids, report.added);
    for (i, slide) in store.slides().iter().enumerate() {
        assert_eq!(slide.original_image, payload(i as u8));
        assert_eq!(slide.current_image, slide.original_image);
    }
}

#[test]
fn add_truncates_to_remaining_capacity() {
    let mut store = SlideStore::new();
    store.add(payloads(8)).unwrap();

    let report = store.add(payloads(5)).unwrap();
    assert_eq!(report.added.len(), 2);
    assert_eq!(report.dropped, 3);
    assert_eq!(store.len(), MAX_SLIDES);
}

#[test]
fn add_when_full_reports_capacity_and_adds_nothing() {
    let mut store = SlideStore::new();
    store.add(payloads(MAX_SLIDES)).unwrap();

    let err = store.add(payloads(1)).unwrap_err();
    assert!(matches!(err, CarouselError::Capacity(_)));
    assert_eq!(store.len(), MAX_SLIDES);
}

#[test]
fn add_nothing_to_full_store_is_ok() {
    let mut store = SlideStore::new();
    store.add(payloads(MAX_SLIDES)).unwrap();
    let report = store.add(Vec::new()).unwrap();
    assert!(report.added.is_empty());
}

#[test]
fn update_merges_named_fields_only() {
    let mut store = SlideStore::new();
    let ids = store.add(payloads(2)).unwrap().added;

    assert!(store.update(ids[1], SlidePatch::default().title("X")));

    let untouched = store.get(ids[0]).unwrap();
    assert!(untouched.title.is_empty());
    let patched = store.get(ids[1]).unwrap();
    assert_eq!(patched.title, "X");
    assert!(patched.body.is_empty());
    assert_eq!(patched.current_image, payload(1));
}

#[test]
fn update_absent_id_is_a_noop() {
    let mut store = SlideStore::new();
    store.add(payloads(1)).unwrap();
    assert!(!store.update(SlideId::from_u64(999), SlidePatch::default().title("X")));
    assert!(store.slides()[0].title.is_empty());
}

#[test]
fn remove_preserves_order_of_the_rest() {
    let mut store = SlideStore::new();
    let ids = store.add(payloads(3)).unwrap().added;

    assert!(store.remove(ids[0]));
    assert!(!store.remove(ids[0]));

    let remaining: Vec<_> = store.slides().iter().map(|s| s.id).collect();
    assert_eq!(remaining, vec![ids[1], ids[2]]);
    assert_eq!(store.get(ids[1]).unwrap().original_image, payload(1));
}

#[test]
fn ids_are_never_reused_after_removal() {
    let mut store = SlideStore::new();
    let first = store.add(payloads(1)).unwrap().added[0];
    store.remove(first);

    let second = store.add(payloads(1)).unwrap().added[0];
    assert_ne!(first, second);
}

#[test]
fn reset_image_is_idempotent() {
    let mut store = SlideStore::new();
    let id = store.add(payloads(1)).unwrap().added[0];
    store.update(id, SlidePatch::default().current_image(payload(9)));

    assert!(store.reset_image(id));
    let once = store.get(id).unwrap().clone();
    assert!(store.reset_image(id));
    let twice = store.get(id).unwrap().clone();

    assert_eq!(once, twice);
    assert_eq!(once.current_image, once.original_image);
}
