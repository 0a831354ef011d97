//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Client identification (IP extraction, session fingerprints)
//! - Cookie management
//! - Cryptographic utilities (SHA-256, secure randomness)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod password;
