//! Application layer: validation, processor selection and the payment
//! service façade that orchestrates them.

pub mod builder;
pub mod factory;
pub mod service;
pub mod validator;
