//! Portfolio Content Module
//!
//! Database-backed storage for everything the portfolio site renders,
//! plus the HTTP surface to read and manage it.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities with validating constructors, repository traits
//! - `application/` - Use cases (public view, contact form, admin CRUD)
//! - `infra/` - PostgreSQL implementations
//! - `presentation/` - DTOs, handlers, routers
//!
//! ## Surfaces
//! - Public: one aggregate payload with the profile copy and every
//!   published section, and the contact form (the only unauthenticated
//!   write in the system)
//! - Admin: full CRUD per section and the contact inbox; the API layer
//!   wraps this router with the admin session middleware

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentRepository;
pub use presentation::router::{admin_router, public_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
