//! Submit Contact Use Case
//!
//! Accepts a contact-form submission from the public site. This is the
//! only unauthenticated write in the system; validation happens in the
//! [`ContactMessage`] constructor so nothing unvalidated reaches the
//! store.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::ContactMessage;
use crate::domain::repository::ContactMessageRepository;
use crate::error::ContentResult;

/// Input DTO for a contact submission
#[derive(Debug, Clone)]
pub struct SubmitContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Submit contact use case
pub struct SubmitContactUseCase<R>
where
    R: ContactMessageRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitContactUseCase<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SubmitContactInput) -> ContentResult<Uuid> {
        let message = ContactMessage::new(&input.name, &input.email, &input.message)?;

        self.repo.create_message(&message).await?;

        // The sender address is personal data; log the id only
        tracing::info!(message_id = %message.message_id, "Contact message received");

        Ok(message.message_id)
    }
}
