//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    rate_limit::{AttemptRecord, RateLimitDecision, RateLimitPolicy},
    session::AdminSession,
    user::{User, UserIdentity},
};
pub use repository::{RateLimitRepository, SessionRepository, UserRepository};
