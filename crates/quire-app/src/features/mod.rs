//! Feature slices (state/update per slice).

pub mod articles;
pub mod form;
pub mod session;
