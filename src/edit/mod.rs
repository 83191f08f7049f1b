//! AI edit boundary: the collaborator trait and the per-slide edit
//! lifecycle (begin, invoke, complete).

pub mod editor;
pub mod session;
