//! Entity Module

pub mod rate_limit;
pub mod session;
pub mod user;
