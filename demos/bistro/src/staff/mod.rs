//! Staff rotas.

pub mod api;
pub(crate) mod rota;

pub use rota::Shift;
