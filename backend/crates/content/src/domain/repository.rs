//! Repository Traits
//!
//! Interfaces for content persistence. Implementation is in the
//! infrastructure layer. Method names are prefixed per aggregate so a
//! single store type can implement all of them without call-site
//! ambiguity.

use uuid::Uuid;

use crate::domain::entities::{
    ContactMessage, ExperienceEntry, Profile, Project, Skill, Testimonial,
};
use crate::error::ContentResult;

/// Profile repository trait (singleton row)
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Fetch the profile; `None` until it is first saved
    async fn get_profile(&self) -> ContentResult<Option<Profile>>;

    /// Create or replace the profile
    async fn upsert_profile(&self, profile: &Profile) -> ContentResult<()>;
}

/// Project repository trait
#[trait_variant::make(ProjectRepository: Send)]
pub trait LocalProjectRepository {
    /// List projects in display order; unpublished ones only when asked
    async fn list_projects(&self, include_unpublished: bool) -> ContentResult<Vec<Project>>;

    /// Find a single project by id
    async fn find_project(&self, project_id: Uuid) -> ContentResult<Option<Project>>;

    /// Insert a new project
    async fn create_project(&self, project: &Project) -> ContentResult<()>;

    /// Update an existing project; `false` when the id is unknown
    async fn update_project(&self, project: &Project) -> ContentResult<bool>;

    /// Delete a project; `false` when the id is unknown
    async fn delete_project(&self, project_id: Uuid) -> ContentResult<bool>;
}

/// Skill repository trait
#[trait_variant::make(SkillRepository: Send)]
pub trait LocalSkillRepository {
    /// List skills grouped by category, then display order
    async fn list_skills(&self) -> ContentResult<Vec<Skill>>;

    /// Insert a new skill
    async fn create_skill(&self, skill: &Skill) -> ContentResult<()>;

    /// Update an existing skill; `false` when the id is unknown
    async fn update_skill(&self, skill: &Skill) -> ContentResult<bool>;

    /// Delete a skill; `false` when the id is unknown
    async fn delete_skill(&self, skill_id: Uuid) -> ContentResult<bool>;
}

/// Experience repository trait
#[trait_variant::make(ExperienceRepository: Send)]
pub trait LocalExperienceRepository {
    /// List experience entries, most recent first within display order
    async fn list_experience(&self) -> ContentResult<Vec<ExperienceEntry>>;

    /// Insert a new entry
    async fn create_experience(&self, entry: &ExperienceEntry) -> ContentResult<()>;

    /// Update an existing entry; `false` when the id is unknown
    async fn update_experience(&self, entry: &ExperienceEntry) -> ContentResult<bool>;

    /// Delete an entry; `false` when the id is unknown
    async fn delete_experience(&self, experience_id: Uuid) -> ContentResult<bool>;
}

/// Testimonial repository trait
#[trait_variant::make(TestimonialRepository: Send)]
pub trait LocalTestimonialRepository {
    /// List testimonials in display order; unpublished ones only when asked
    async fn list_testimonials(&self, include_unpublished: bool)
    -> ContentResult<Vec<Testimonial>>;

    /// Insert a new testimonial
    async fn create_testimonial(&self, testimonial: &Testimonial) -> ContentResult<()>;

    /// Update an existing testimonial; `false` when the id is unknown
    async fn update_testimonial(&self, testimonial: &Testimonial) -> ContentResult<bool>;

    /// Delete a testimonial; `false` when the id is unknown
    async fn delete_testimonial(&self, testimonial_id: Uuid) -> ContentResult<bool>;
}

/// Contact message repository trait
#[trait_variant::make(ContactMessageRepository: Send)]
pub trait LocalContactMessageRepository {
    /// Store a submitted message
    async fn create_message(&self, message: &ContactMessage) -> ContentResult<()>;

    /// List messages, newest first
    async fn list_messages(&self) -> ContentResult<Vec<ContactMessage>>;

    /// Set the read flag; `false` when the id is unknown
    async fn mark_message_read(&self, message_id: Uuid, is_read: bool) -> ContentResult<bool>;

    /// Delete a message; `false` when the id is unknown
    async fn delete_message(&self, message_id: Uuid) -> ContentResult<bool>;
}

/// Blanket alias over every content repository trait.
///
/// Handlers and the admin use case need all six aggregates; spelling
/// the full bound list on each of them would drown the signatures.
pub trait ContentRepository:
    ProfileRepository
    + ProjectRepository
    + SkillRepository
    + ExperienceRepository
    + TestimonialRepository
    + ContactMessageRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> ContentRepository for T where
    T: ProfileRepository
        + ProjectRepository
        + SkillRepository
        + ExperienceRepository
        + TestimonialRepository
        + ContactMessageRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
