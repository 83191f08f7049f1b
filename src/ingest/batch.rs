use crate::{
    foundation::error::CarouselError,
    foundation::payload::ImagePayload,
    ingest::decode::ingest_file,
};

#[derive(Debug, Default)]
/// Outcome of one upload batch: usable payloads plus per-file failures.
pub struct IngestReport {
    /// Payloads decoded successfully, in submission order.
    pub payloads: Vec<ImagePayload>,
    /// Files skipped because they failed to decode, with the cause.
    pub skipped: Vec<(String, CarouselError)>,
}

/// Decode a batch of uploaded files, skipping the ones that fail.
///
/// A failing file never aborts the batch: it is logged, recorded in the
/// report, and processing continues with the remainder.
pub fn ingest_batch<I, N>(files: I) -> IngestReport
where
    I: IntoIterator<Item = (N, Vec<u8>)>,
    N: AsRef<str>,
{
    let mut report = IngestReport::default();
    for (name, bytes) in files {
        let name = name.as_ref();
        match ingest_file(name, bytes) {
            Ok(payload) => report.payloads.push(payload),
            Err(err) => {
                tracing::warn!(file = name, %err, "skipping undecodable upload");
                report.skipped.push((name.to_string(), err));
            }
        }
    }
    report
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/batch.rs"]
mod tests;
