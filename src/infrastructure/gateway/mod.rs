//! External payment gateway adapters.

pub mod sandbox;
pub mod stripe;

pub use sandbox::SandboxGateway;
pub use stripe::StripeGateway;
