//! Slide data model and the in-memory ordered slide store.

pub mod model;
pub mod store;
