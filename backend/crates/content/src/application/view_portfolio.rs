//! View Portfolio Use Case
//!
//! Assembles everything the public site renders in one call: the
//! profile copy plus the published entries of each section, already in
//! display order. The frontend hydrates all sections from this single
//! response instead of chasing per-section endpoints.

use std::sync::Arc;

use crate::domain::entities::{ExperienceEntry, Profile, Project, Skill, Testimonial};
use crate::domain::repository::{
    ExperienceRepository, ProfileRepository, ProjectRepository, SkillRepository,
    TestimonialRepository,
};
use crate::error::ContentResult;

/// Everything the public site needs, in display order
#[derive(Debug, Clone)]
pub struct PortfolioView {
    /// `None` until the admin saves the profile for the first time
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<ExperienceEntry>,
    pub testimonials: Vec<Testimonial>,
}

/// View portfolio use case
pub struct ViewPortfolioUseCase<R>
where
    R: ProfileRepository
        + ProjectRepository
        + SkillRepository
        + ExperienceRepository
        + TestimonialRepository,
{
    repo: Arc<R>,
}

impl<R> ViewPortfolioUseCase<R>
where
    R: ProfileRepository
        + ProjectRepository
        + SkillRepository
        + ExperienceRepository
        + TestimonialRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Load the public view. Unpublished projects and testimonials are
    /// never part of it.
    pub async fn execute(&self) -> ContentResult<PortfolioView> {
        let profile = self.repo.get_profile().await?;
        let projects = self.repo.list_projects(false).await?;
        let skills = self.repo.list_skills().await?;
        let experience = self.repo.list_experience().await?;
        let testimonials = self.repo.list_testimonials(false).await?;

        Ok(PortfolioView {
            profile,
            projects,
            skills,
            experience,
            testimonials,
        })
    }
}
