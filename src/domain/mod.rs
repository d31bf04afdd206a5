//! Domain layer: payment value objects and the ports adapters implement.

pub mod customer;
pub mod gateway;
pub mod payment;
pub mod ports;
pub mod record;
