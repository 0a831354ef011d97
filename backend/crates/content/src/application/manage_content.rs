//! Manage Content Use Case
//!
//! The admin panel's write surface: full CRUD over every section plus
//! the contact inbox. Updates and deletes against an unknown id surface
//! as [`ContentError::NotFound`]; the repositories report row counts
//! and this layer turns them into errors.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{
    ContactMessage, ExperienceEntry, Profile, Project, Skill, Testimonial,
};
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};

/// Manage content use case
pub struct ManageContentUseCase<R>
where
    R: ContentRepository,
{
    repo: Arc<R>,
}

impl<R> ManageContentUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ========================================================================
    // Profile
    // ========================================================================

    pub async fn save_profile(&self, profile: Profile) -> ContentResult<Profile> {
        self.repo.upsert_profile(&profile).await?;
        tracing::info!("Profile saved");
        Ok(profile)
    }

    // ========================================================================
    // Projects
    // ========================================================================

    pub async fn list_projects(&self) -> ContentResult<Vec<Project>> {
        self.repo.list_projects(true).await
    }

    pub async fn create_project(&self, project: Project) -> ContentResult<Project> {
        self.repo.create_project(&project).await?;
        tracing::info!(project_id = %project.project_id, title = %project.title, "Project created");
        Ok(project)
    }

    pub async fn update_project(&self, project: Project) -> ContentResult<Project> {
        if !self.repo.update_project(&project).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(project_id = %project.project_id, "Project updated");
        Ok(project)
    }

    pub async fn delete_project(&self, project_id: Uuid) -> ContentResult<()> {
        if !self.repo.delete_project(project_id).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(project_id = %project_id, "Project deleted");
        Ok(())
    }

    // ========================================================================
    // Skills
    // ========================================================================

    pub async fn create_skill(&self, skill: Skill) -> ContentResult<Skill> {
        self.repo.create_skill(&skill).await?;
        tracing::info!(skill_id = %skill.skill_id, name = %skill.name, "Skill created");
        Ok(skill)
    }

    pub async fn update_skill(&self, skill: Skill) -> ContentResult<Skill> {
        if !self.repo.update_skill(&skill).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(skill_id = %skill.skill_id, "Skill updated");
        Ok(skill)
    }

    pub async fn delete_skill(&self, skill_id: Uuid) -> ContentResult<()> {
        if !self.repo.delete_skill(skill_id).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(skill_id = %skill_id, "Skill deleted");
        Ok(())
    }

    // ========================================================================
    // Experience
    // ========================================================================

    pub async fn create_experience(&self, entry: ExperienceEntry) -> ContentResult<ExperienceEntry> {
        self.repo.create_experience(&entry).await?;
        tracing::info!(
            experience_id = %entry.experience_id,
            company = %entry.company,
            "Experience entry created"
        );
        Ok(entry)
    }

    pub async fn update_experience(&self, entry: ExperienceEntry) -> ContentResult<ExperienceEntry> {
        if !self.repo.update_experience(&entry).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(experience_id = %entry.experience_id, "Experience entry updated");
        Ok(entry)
    }

    pub async fn delete_experience(&self, experience_id: Uuid) -> ContentResult<()> {
        if !self.repo.delete_experience(experience_id).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(experience_id = %experience_id, "Experience entry deleted");
        Ok(())
    }

    // ========================================================================
    // Testimonials
    // ========================================================================

    pub async fn list_testimonials(&self) -> ContentResult<Vec<Testimonial>> {
        self.repo.list_testimonials(true).await
    }

    pub async fn create_testimonial(&self, testimonial: Testimonial) -> ContentResult<Testimonial> {
        self.repo.create_testimonial(&testimonial).await?;
        tracing::info!(
            testimonial_id = %testimonial.testimonial_id,
            "Testimonial created"
        );
        Ok(testimonial)
    }

    pub async fn update_testimonial(&self, testimonial: Testimonial) -> ContentResult<Testimonial> {
        if !self.repo.update_testimonial(&testimonial).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(testimonial_id = %testimonial.testimonial_id, "Testimonial updated");
        Ok(testimonial)
    }

    pub async fn delete_testimonial(&self, testimonial_id: Uuid) -> ContentResult<()> {
        if !self.repo.delete_testimonial(testimonial_id).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(testimonial_id = %testimonial_id, "Testimonial deleted");
        Ok(())
    }

    // ========================================================================
    // Contact inbox
    // ========================================================================

    pub async fn list_messages(&self) -> ContentResult<Vec<ContactMessage>> {
        self.repo.list_messages().await
    }

    pub async fn set_message_read(&self, message_id: Uuid, is_read: bool) -> ContentResult<()> {
        if !self.repo.mark_message_read(message_id, is_read).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(message_id = %message_id, is_read, "Contact message flagged");
        Ok(())
    }

    pub async fn delete_message(&self, message_id: Uuid) -> ContentResult<()> {
        if !self.repo.delete_message(message_id).await? {
            return Err(ContentError::NotFound);
        }
        tracing::info!(message_id = %message_id, "Contact message deleted");
        Ok(())
    }
}
