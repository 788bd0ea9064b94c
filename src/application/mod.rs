//! Application layer.

pub mod services;
