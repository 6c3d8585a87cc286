//! Kitchen prep.

pub mod api;
pub(crate) mod prep;
