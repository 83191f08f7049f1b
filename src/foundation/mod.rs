//! Shared foundation: error taxonomy and the image payload currency.

pub mod error;
pub mod payload;
