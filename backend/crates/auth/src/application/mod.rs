//! Application Layer
//!
//! Use cases and application services.

pub mod change_password;
pub mod check_session;
pub mod config;
pub mod credentials;
pub mod provision;
pub mod rate_limit;
pub mod sign_in;
pub mod sign_out;
pub mod token;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use credentials::CredentialVerifier;
pub use provision::{ProvisionAdminInput, ProvisionAdminUseCase};
pub use rate_limit::LoginRateLimiter;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
