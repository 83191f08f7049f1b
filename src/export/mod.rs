//! Export boundary: batch loop with download pacing and the sink trait.

pub mod batch;
pub mod sink;
