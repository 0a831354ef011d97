//! Shared Kernel
//!
//! The smallest vocabulary every backend crate agrees on:
//! - The unified error type, its kinds, and conversions into HTTP
//! - Typed entity ids
//!
//! Anything that is specific to one domain belongs in that domain's
//! crate, not here. This crate should change rarely.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
