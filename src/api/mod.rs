//! HTTP API layer: DTOs, handlers, middleware and routing.

pub mod dto;
pub mod envelope;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod routes;
