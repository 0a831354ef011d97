//! Application Layer
//!
//! Use cases over the content repositories.

pub mod manage_content;
pub mod submit_contact;
pub mod view_portfolio;

// Re-exports
pub use manage_content::ManageContentUseCase;
pub use submit_contact::{SubmitContactInput, SubmitContactUseCase};
pub use view_portfolio::{PortfolioView, ViewPortfolioUseCase};
