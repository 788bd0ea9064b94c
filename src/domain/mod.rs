//! Domain layer: entities, repository traits, and request-language types.

pub mod entities;
pub mod lang;
pub mod repositories;
