//! Domain Layer
//!
//! Content entities and repository traits.

pub mod entities;
pub mod repository;
