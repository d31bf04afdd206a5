//! Concrete payment processors.

pub mod gateway;
pub mod local;
pub mod offline;

pub use gateway::GatewayProcessor;
pub use local::LocalProcessor;
pub use offline::OfflineProcessor;
