//! Domain Entities
//!
//! Portfolio content entities. Every section the site renders is backed
//! by one of these; constructors validate the invariants so an invalid
//! entity cannot be constructed from a handler payload.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{ContentError, ContentResult};

/// Upper bound for the contact form's free-text body
pub const CONTACT_BODY_MAX: usize = 5_000;
/// Upper bound for the contact sender's name
pub const CONTACT_NAME_MAX: usize = 100;
/// Upper bound for an email address (RFC 5321 limit)
pub const CONTACT_EMAIL_MAX: usize = 254;

fn require(value: &str, field: &str) -> ContentResult<()> {
    if value.trim().is_empty() {
        return Err(ContentError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Site-wide copy rendered in the hero, about, and footer sections.
///
/// There is exactly one profile per site; the store enforces the
/// singleton with a fixed primary key.
#[derive(Debug, Clone)]
pub struct Profile {
    pub hero_headline: String,
    pub hero_tagline: String,
    pub about_text: String,
    pub footer_text: String,
    pub contact_email: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub resume_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hero_headline: String,
        hero_tagline: String,
        about_text: String,
        footer_text: String,
        contact_email: Option<String>,
        location: Option<String>,
        github_url: Option<String>,
        linkedin_url: Option<String>,
        resume_url: Option<String>,
    ) -> ContentResult<Self> {
        require(&hero_headline, "Hero headline")?;
        require(&about_text, "About text")?;

        Ok(Self {
            hero_headline,
            hero_tagline,
            about_text,
            footer_text,
            contact_email,
            location,
            github_url,
            linkedin_url,
            resume_url,
            updated_at: Utc::now(),
        })
    }
}

/// A portfolio project card
#[derive(Debug, Clone)]
pub struct Project {
    pub project_id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        summary: String,
        description: String,
        tech_stack: Vec<String>,
        repo_url: Option<String>,
        live_url: Option<String>,
        image_url: Option<String>,
        featured: bool,
        published: bool,
        sort_order: i32,
    ) -> ContentResult<Self> {
        require(&title, "Project title")?;
        require(&summary, "Project summary")?;

        let now = Utc::now();
        Ok(Self {
            project_id: Uuid::new_v4(),
            title,
            summary,
            description,
            tech_stack,
            repo_url,
            live_url,
            image_url,
            featured,
            published,
            sort_order,
            created_at: now,
            updated_at: now,
        })
    }
}

/// A skill badge, grouped by category in the skills section
#[derive(Debug, Clone)]
pub struct Skill {
    pub skill_id: Uuid,
    pub name: String,
    pub category: String,
    /// Proficiency in percent, rendered as the badge's progress bar
    pub level: u8,
    pub sort_order: i32,
}

impl Skill {
    pub fn new(name: String, category: String, level: u8, sort_order: i32) -> ContentResult<Self> {
        require(&name, "Skill name")?;
        require(&category, "Skill category")?;
        if level > 100 {
            return Err(ContentError::Validation(
                "Skill level must be between 0 and 100".to_string(),
            ));
        }

        Ok(Self {
            skill_id: Uuid::new_v4(),
            name,
            category,
            level,
            sort_order,
        })
    }
}

/// One position on the experience timeline
#[derive(Debug, Clone)]
pub struct ExperienceEntry {
    pub experience_id: Uuid,
    pub company: String,
    pub title: String,
    pub summary: String,
    pub started_on: NaiveDate,
    /// `None` marks the current position
    pub ended_on: Option<NaiveDate>,
    pub sort_order: i32,
}

impl ExperienceEntry {
    pub fn new(
        company: String,
        title: String,
        summary: String,
        started_on: NaiveDate,
        ended_on: Option<NaiveDate>,
        sort_order: i32,
    ) -> ContentResult<Self> {
        require(&company, "Company")?;
        require(&title, "Position title")?;
        if let Some(ended) = ended_on {
            if ended < started_on {
                return Err(ContentError::Validation(
                    "End date must not precede start date".to_string(),
                ));
            }
        }

        Ok(Self {
            experience_id: Uuid::new_v4(),
            company,
            title,
            summary,
            started_on,
            ended_on,
            sort_order,
        })
    }

    /// Whether this entry is the currently held position
    pub fn is_current(&self) -> bool {
        self.ended_on.is_none()
    }
}

/// A testimonial quote shown in the testimonials carousel
#[derive(Debug, Clone)]
pub struct Testimonial {
    pub testimonial_id: Uuid,
    pub author: String,
    pub author_title: String,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub published: bool,
    pub sort_order: i32,
}

impl Testimonial {
    pub fn new(
        author: String,
        author_title: String,
        quote: String,
        avatar_url: Option<String>,
        published: bool,
        sort_order: i32,
    ) -> ContentResult<Self> {
        require(&author, "Author")?;
        require(&quote, "Quote")?;

        Ok(Self {
            testimonial_id: Uuid::new_v4(),
            author,
            author_title,
            quote,
            avatar_url,
            published,
            sort_order,
        })
    }
}

/// A message submitted through the public contact form
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub message_id: Uuid,
    pub sender_name: String,
    pub sender_email: String,
    pub body: String,
    pub is_read: bool,
    pub received_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Validate and build a message from raw form input.
    ///
    /// The contact form is the only unauthenticated write surface, so
    /// limits are enforced here rather than trusted to the client.
    pub fn new(sender_name: &str, sender_email: &str, body: &str) -> ContentResult<Self> {
        let sender_name = sender_name.trim();
        let sender_email = sender_email.trim();
        let body = body.trim();

        require(sender_name, "Name")?;
        require(sender_email, "Email")?;
        require(body, "Message")?;

        if sender_name.len() > CONTACT_NAME_MAX {
            return Err(ContentError::Validation(format!(
                "Name must be at most {CONTACT_NAME_MAX} characters"
            )));
        }
        if sender_email.len() > CONTACT_EMAIL_MAX || !looks_like_email(sender_email) {
            return Err(ContentError::Validation(
                "A valid email address is required".to_string(),
            ));
        }
        if body.len() > CONTACT_BODY_MAX {
            return Err(ContentError::Validation(format!(
                "Message must be at most {CONTACT_BODY_MAX} characters"
            )));
        }

        Ok(Self {
            message_id: Uuid::new_v4(),
            sender_name: sender_name.to_string(),
            sender_email: sender_email.to_string(),
            body: body.to_string(),
            is_read: false,
            received_at: Utc::now(),
        })
    }
}

/// Shallow shape check; deliverability is out of scope for a contact form
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_requires_title_and_summary() {
        let result = Project::new(
            "  ".to_string(),
            "A summary".to_string(),
            String::new(),
            vec![],
            None,
            None,
            None,
            false,
            true,
            0,
        );
        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[test]
    fn test_skill_level_is_bounded() {
        let result = Skill::new("Rust".to_string(), "Backend".to_string(), 101, 0);
        assert!(matches!(result, Err(ContentError::Validation(_))));

        let skill = Skill::new("Rust".to_string(), "Backend".to_string(), 90, 0).unwrap();
        assert_eq!(skill.level, 90);
    }

    #[test]
    fn test_experience_rejects_inverted_dates() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

        let result = ExperienceEntry::new(
            "Acme".to_string(),
            "Engineer".to_string(),
            String::new(),
            start,
            Some(end),
            0,
        );
        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[test]
    fn test_experience_current_position() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let entry = ExperienceEntry::new(
            "Acme".to_string(),
            "Engineer".to_string(),
            String::new(),
            start,
            None,
            0,
        )
        .unwrap();
        assert!(entry.is_current());
    }

    #[test]
    fn test_contact_message_trims_and_validates() {
        let message =
            ContactMessage::new("  Jamie  ", " jamie@example.com ", "  Hello there  ").unwrap();
        assert_eq!(message.sender_name, "Jamie");
        assert_eq!(message.sender_email, "jamie@example.com");
        assert_eq!(message.body, "Hello there");
        assert!(!message.is_read);
    }

    #[test]
    fn test_contact_message_rejects_bad_email() {
        for email in ["not-an-email", "@example.com", "jamie@", "jamie@nodot"] {
            let result = ContactMessage::new("Jamie", email, "Hello");
            assert!(result.is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn test_contact_message_enforces_length_caps() {
        let long_body = "x".repeat(CONTACT_BODY_MAX + 1);
        let result = ContactMessage::new("Jamie", "jamie@example.com", &long_body);
        assert!(matches!(result, Err(ContentError::Validation(_))));
    }
}
