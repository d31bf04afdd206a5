//! Infrastructure layer: adapters implementing the domain ports.

pub mod gateway;
pub mod log;
pub mod notifiers;
pub mod processors;
