//! Image ingestion boundary: file bytes in, self-describing payloads out.

pub mod batch;
pub mod decode;
