//! Infrastructure layer: storage-backend implementations of domain traits.

pub mod persistence;
