//! Presentation Layer
//!
//! HTTP surface: DTOs, handlers, and the public/admin routers.

pub mod dto;
pub mod handlers;
pub mod router;

// Re-exports
pub use handlers::ContentAppState;
pub use router::{admin_router, admin_router_generic, public_router, public_router_generic};
