use super::*;

#[test]
fn dir_sink_writes_named_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = DirSink::new(dir.path().join("out")).unwrap();

    sink.save("instagram-slide-1.jpg", &[0xff, 0xd8, 0xff]).unwrap();

    let written = std::fs::read(sink.root().join("instagram-slide-1.jpg")).unwrap();
    assert_eq!(written, vec![0xff, 0xd8, 0xff]);
}

#[test]
fn dir_sink_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let sink = DirSink::new(&nested).unwrap();
    assert!(sink.root().is_dir());
}
