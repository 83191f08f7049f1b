//! Compositor/exporter: cover-fit scaling, gradient compositing, wrapped
//! text layout and JPEG serialization.

pub mod fit;
pub mod gradient;
pub mod renderer;
pub mod spec;
pub mod text;
pub mod wrap;
