//! API DTOs (Data Transfer Objects)
//!
//! Wire shapes for the public portfolio payload, the contact form, and
//! the admin CRUD payloads. Admin payloads convert into domain entities
//! through the validating constructors, so the error messages the panel
//! shows come from the domain layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::view_portfolio::PortfolioView;
use crate::domain::entities::{
    ContactMessage, ExperienceEntry, Profile, Project, Skill, Testimonial,
};
use crate::error::ContentResult;

fn default_true() -> bool {
    true
}

// ============================================================================
// Public portfolio payload
// ============================================================================

/// Response for GET /api/portfolio
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub profile: Option<ProfileDto>,
    pub projects: Vec<ProjectDto>,
    pub skills: Vec<SkillDto>,
    pub experience: Vec<ExperienceDto>,
    pub testimonials: Vec<TestimonialDto>,
}

impl From<PortfolioView> for PortfolioResponse {
    fn from(view: PortfolioView) -> Self {
        Self {
            profile: view.profile.as_ref().map(ProfileDto::from),
            projects: view.projects.iter().map(ProjectDto::from).collect(),
            skills: view.skills.iter().map(SkillDto::from).collect(),
            experience: view.experience.iter().map(ExperienceDto::from).collect(),
            testimonials: view.testimonials.iter().map(TestimonialDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub hero_headline: String,
    pub hero_tagline: String,
    pub about_text: String,
    pub footer_text: String,
    pub contact_email: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub resume_url: Option<String>,
}

impl From<&Profile> for ProfileDto {
    fn from(profile: &Profile) -> Self {
        Self {
            hero_headline: profile.hero_headline.clone(),
            hero_tagline: profile.hero_tagline.clone(),
            about_text: profile.about_text.clone(),
            footer_text: profile.footer_text.clone(),
            contact_email: profile.contact_email.clone(),
            location: profile.location.clone(),
            github_url: profile.github_url.clone(),
            linkedin_url: profile.linkedin_url.clone(),
            resume_url: profile.resume_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub sort_order: i32,
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        Self {
            id: project.project_id,
            title: project.title.clone(),
            summary: project.summary.clone(),
            description: project.description.clone(),
            tech_stack: project.tech_stack.clone(),
            repo_url: project.repo_url.clone(),
            live_url: project.live_url.clone(),
            image_url: project.image_url.clone(),
            featured: project.featured,
            published: project.published,
            sort_order: project.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDto {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub level: u8,
    pub sort_order: i32,
}

impl From<&Skill> for SkillDto {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.skill_id,
            name: skill.name.clone(),
            category: skill.category.clone(),
            level: skill.level,
            sort_order: skill.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDto {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub summary: String,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub current: bool,
    pub sort_order: i32,
}

impl From<&ExperienceEntry> for ExperienceDto {
    fn from(entry: &ExperienceEntry) -> Self {
        Self {
            id: entry.experience_id,
            company: entry.company.clone(),
            title: entry.title.clone(),
            summary: entry.summary.clone(),
            started_on: entry.started_on,
            ended_on: entry.ended_on,
            current: entry.is_current(),
            sort_order: entry.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDto {
    pub id: Uuid,
    pub author: String,
    pub author_title: String,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub published: bool,
    pub sort_order: i32,
}

impl From<&Testimonial> for TestimonialDto {
    fn from(testimonial: &Testimonial) -> Self {
        Self {
            id: testimonial.testimonial_id,
            author: testimonial.author.clone(),
            author_title: testimonial.author_title.clone(),
            quote: testimonial.quote.clone(),
            avatar_url: testimonial.avatar_url.clone(),
            published: testimonial.published,
            sort_order: testimonial.sort_order,
        }
    }
}

// ============================================================================
// Contact form
// ============================================================================

/// Request for POST /api/portfolio/contact
///
/// Fields default to empty so missing ones reach domain validation and
/// produce its messages instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Response for POST /api/portfolio/contact
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub message_id: Uuid,
}

// ============================================================================
// Admin payloads
// ============================================================================

/// Payload for PUT /api/admin/profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    #[serde(default)]
    pub hero_headline: String,
    #[serde(default)]
    pub hero_tagline: String,
    #[serde(default)]
    pub about_text: String,
    #[serde(default)]
    pub footer_text: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl ProfilePayload {
    pub fn into_profile(self) -> ContentResult<Profile> {
        Profile::new(
            self.hero_headline,
            self.hero_tagline,
            self.about_text,
            self.footer_text,
            self.contact_email,
            self.location,
            self.github_url,
            self.linkedin_url,
            self.resume_url,
        )
    }
}

/// Payload for POST/PUT project routes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl ProjectPayload {
    pub fn into_project(self) -> ContentResult<Project> {
        Project::new(
            self.title,
            self.summary,
            self.description,
            self.tech_stack,
            self.repo_url,
            self.live_url,
            self.image_url,
            self.featured,
            self.published,
            self.sort_order,
        )
    }
}

/// Payload for POST/PUT skill routes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub sort_order: i32,
}

impl SkillPayload {
    pub fn into_skill(self) -> ContentResult<Skill> {
        Skill::new(self.name, self.category, self.level, self.sort_order)
    }
}

/// Payload for POST/PUT experience routes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePayload {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub started_on: NaiveDate,
    #[serde(default)]
    pub ended_on: Option<NaiveDate>,
    #[serde(default)]
    pub sort_order: i32,
}

impl ExperiencePayload {
    pub fn into_entry(self) -> ContentResult<ExperienceEntry> {
        ExperienceEntry::new(
            self.company,
            self.title,
            self.summary,
            self.started_on,
            self.ended_on,
            self.sort_order,
        )
    }
}

/// Payload for POST/PUT testimonial routes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPayload {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_title: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl TestimonialPayload {
    pub fn into_testimonial(self) -> ContentResult<Testimonial> {
        Testimonial::new(
            self.author,
            self.author_title,
            self.quote,
            self.avatar_url,
            self.published,
            self.sort_order,
        )
    }
}

// ============================================================================
// Contact inbox (admin)
// ============================================================================

/// A contact message as the admin inbox sees it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: Uuid,
    pub sender_name: String,
    pub sender_email: String,
    pub body: String,
    #[serde(rename = "read")]
    pub is_read: bool,
    pub received_at: DateTime<Utc>,
}

impl From<&ContactMessage> for MessageDto {
    fn from(message: &ContactMessage) -> Self {
        Self {
            id: message.message_id,
            sender_name: message.sender_name.clone(),
            sender_email: message.sender_email.clone(),
            body: message.body.clone(),
            is_read: message.is_read,
            received_at: message.received_at,
        }
    }
}

/// Payload for PUT /api/admin/messages/{id}/read
#[derive(Debug, Clone, Deserialize)]
pub struct ReadFlagRequest {
    #[serde(default = "default_true")]
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_request_defaults_missing_fields() {
        let request: ContactRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.name, "");
        assert_eq!(request.email, "");
        assert_eq!(request.message, "");
    }

    #[test]
    fn test_project_payload_defaults() {
        let payload: ProjectPayload = serde_json::from_str(
            r#"{"title": "CLI toolkit", "summary": "A toolkit"}"#,
        )
        .unwrap();
        assert!(payload.published);
        assert!(!payload.featured);
        assert_eq!(payload.sort_order, 0);

        let project = payload.into_project().unwrap();
        assert_eq!(project.title, "CLI toolkit");
        assert!(project.tech_stack.is_empty());
    }

    #[test]
    fn test_message_dto_read_field_name() {
        let message = ContactMessage::new("Jamie", "jamie@example.com", "Hello").unwrap();
        let json = serde_json::to_value(MessageDto::from(&message)).unwrap();
        assert_eq!(json["read"], serde_json::json!(false));
        assert_eq!(json["senderName"], serde_json::json!("Jamie"));
    }

    #[test]
    fn test_experience_dto_marks_current_position() {
        let entry = ExperienceEntry::new(
            "Acme".to_string(),
            "Engineer".to_string(),
            String::new(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            None,
            0,
        )
        .unwrap();

        let json = serde_json::to_value(ExperienceDto::from(&entry)).unwrap();
        assert_eq!(json["current"], serde_json::json!(true));
        assert_eq!(json["endedOn"], serde_json::Value::Null);
    }
}
