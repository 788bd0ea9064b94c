//! HTTP middleware for authorization and observability.

pub mod guard;
pub mod tracing;
