//! Input adapters feeding payment requests into the service.

pub mod csv;
