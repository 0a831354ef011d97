//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{
    ContactMessage, ExperienceEntry, Profile, Project, Skill, Testimonial,
};
use crate::domain::repository::{
    ContactMessageRepository, ExperienceRepository, ProfileRepository, ProjectRepository,
    SkillRepository, TestimonialRepository,
};
use crate::error::ContentResult;

/// The profile table is a singleton; every row shares this key.
const PROFILE_ROW_ID: i16 = 1;

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProfileRepository for PgContentRepository {
    async fn get_profile(&self) -> ContentResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                hero_headline,
                hero_tagline,
                about_text,
                footer_text,
                contact_email,
                location,
                github_url,
                linkedin_url,
                resume_url,
                updated_at
            FROM profile
            WHERE profile_id = $1
            "#,
        )
        .bind(PROFILE_ROW_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn upsert_profile(&self, profile: &Profile) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profile (
                profile_id,
                hero_headline,
                hero_tagline,
                about_text,
                footer_text,
                contact_email,
                location,
                github_url,
                linkedin_url,
                resume_url,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (profile_id) DO UPDATE SET
                hero_headline = EXCLUDED.hero_headline,
                hero_tagline = EXCLUDED.hero_tagline,
                about_text = EXCLUDED.about_text,
                footer_text = EXCLUDED.footer_text,
                contact_email = EXCLUDED.contact_email,
                location = EXCLUDED.location,
                github_url = EXCLUDED.github_url,
                linkedin_url = EXCLUDED.linkedin_url,
                resume_url = EXCLUDED.resume_url,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(PROFILE_ROW_ID)
        .bind(&profile.hero_headline)
        .bind(&profile.hero_tagline)
        .bind(&profile.about_text)
        .bind(&profile.footer_text)
        .bind(&profile.contact_email)
        .bind(&profile.location)
        .bind(&profile.github_url)
        .bind(&profile.linkedin_url)
        .bind(&profile.resume_url)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl ProjectRepository for PgContentRepository {
    async fn list_projects(&self, include_unpublished: bool) -> ContentResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT
                project_id,
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
                created_at,
                updated_at
            FROM projects
            WHERE ($1 OR published)
            ORDER BY sort_order ASC, created_at ASC
            "#,
        )
        .bind(include_unpublished)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProjectRow::into_project).collect())
    }

    async fn find_project(&self, project_id: Uuid) -> ContentResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT
                project_id,
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
                created_at,
                updated_at
            FROM projects
            WHERE project_id = $1
            "#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProjectRow::into_project))
    }

    async fn create_project(&self, project: &Project) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO projects (
                project_id,
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
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(project.project_id)
        .bind(&project.title)
        .bind(&project.summary)
        .bind(&project.description)
        .bind(&project.tech_stack)
        .bind(&project.repo_url)
        .bind(&project.live_url)
        .bind(&project.image_url)
        .bind(project.featured)
        .bind(project.published)
        .bind(project.sort_order)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_project(&self, project: &Project) -> ContentResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET
                title = $2,
                summary = $3,
                description = $4,
                tech_stack = $5,
                repo_url = $6,
                live_url = $7,
                image_url = $8,
                featured = $9,
                published = $10,
                sort_order = $11,
                updated_at = now()
            WHERE project_id = $1
            "#,
        )
        .bind(project.project_id)
        .bind(&project.title)
        .bind(&project.summary)
        .bind(&project.description)
        .bind(&project.tech_stack)
        .bind(&project.repo_url)
        .bind(&project.live_url)
        .bind(&project.image_url)
        .bind(project.featured)
        .bind(project.published)
        .bind(project.sort_order)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_project(&self, project_id: Uuid) -> ContentResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE project_id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl SkillRepository for PgContentRepository {
    async fn list_skills(&self) -> ContentResult<Vec<Skill>> {
        let rows = sqlx::query_as::<_, SkillRow>(
            r#"
            SELECT skill_id, name, category, level, sort_order
            FROM skills
            ORDER BY category ASC, sort_order ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SkillRow::into_skill).collect())
    }

    async fn create_skill(&self, skill: &Skill) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO skills (skill_id, name, category, level, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(skill.skill_id)
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.level as i16)
        .bind(skill.sort_order)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_skill(&self, skill: &Skill) -> ContentResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE skills SET
                name = $2,
                category = $3,
                level = $4,
                sort_order = $5
            WHERE skill_id = $1
            "#,
        )
        .bind(skill.skill_id)
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.level as i16)
        .bind(skill.sort_order)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_skill(&self, skill_id: Uuid) -> ContentResult<bool> {
        let result = sqlx::query("DELETE FROM skills WHERE skill_id = $1")
            .bind(skill_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl ExperienceRepository for PgContentRepository {
    async fn list_experience(&self) -> ContentResult<Vec<ExperienceEntry>> {
        let rows = sqlx::query_as::<_, ExperienceRow>(
            r#"
            SELECT experience_id, company, title, summary, started_on, ended_on, sort_order
            FROM experience
            ORDER BY sort_order ASC, started_on DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ExperienceRow::into_entry).collect())
    }

    async fn create_experience(&self, entry: &ExperienceEntry) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO experience (
                experience_id, company, title, summary, started_on, ended_on, sort_order
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.experience_id)
        .bind(&entry.company)
        .bind(&entry.title)
        .bind(&entry.summary)
        .bind(entry.started_on)
        .bind(entry.ended_on)
        .bind(entry.sort_order)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_experience(&self, entry: &ExperienceEntry) -> ContentResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE experience SET
                company = $2,
                title = $3,
                summary = $4,
                started_on = $5,
                ended_on = $6,
                sort_order = $7
            WHERE experience_id = $1
            "#,
        )
        .bind(entry.experience_id)
        .bind(&entry.company)
        .bind(&entry.title)
        .bind(&entry.summary)
        .bind(entry.started_on)
        .bind(entry.ended_on)
        .bind(entry.sort_order)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_experience(&self, experience_id: Uuid) -> ContentResult<bool> {
        let result = sqlx::query("DELETE FROM experience WHERE experience_id = $1")
            .bind(experience_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl TestimonialRepository for PgContentRepository {
    async fn list_testimonials(
        &self,
        include_unpublished: bool,
    ) -> ContentResult<Vec<Testimonial>> {
        let rows = sqlx::query_as::<_, TestimonialRow>(
            r#"
            SELECT testimonial_id, author, author_title, quote, avatar_url, published, sort_order
            FROM testimonials
            WHERE ($1 OR published)
            ORDER BY sort_order ASC
            "#,
        )
        .bind(include_unpublished)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(TestimonialRow::into_testimonial)
            .collect())
    }

    async fn create_testimonial(&self, testimonial: &Testimonial) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO testimonials (
                testimonial_id, author, author_title, quote, avatar_url, published, sort_order
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(testimonial.testimonial_id)
        .bind(&testimonial.author)
        .bind(&testimonial.author_title)
        .bind(&testimonial.quote)
        .bind(&testimonial.avatar_url)
        .bind(testimonial.published)
        .bind(testimonial.sort_order)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_testimonial(&self, testimonial: &Testimonial) -> ContentResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE testimonials SET
                author = $2,
                author_title = $3,
                quote = $4,
                avatar_url = $5,
                published = $6,
                sort_order = $7
            WHERE testimonial_id = $1
            "#,
        )
        .bind(testimonial.testimonial_id)
        .bind(&testimonial.author)
        .bind(&testimonial.author_title)
        .bind(&testimonial.quote)
        .bind(&testimonial.avatar_url)
        .bind(testimonial.published)
        .bind(testimonial.sort_order)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_testimonial(&self, testimonial_id: Uuid) -> ContentResult<bool> {
        let result = sqlx::query("DELETE FROM testimonials WHERE testimonial_id = $1")
            .bind(testimonial_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl ContactMessageRepository for PgContentRepository {
    async fn create_message(&self, message: &ContactMessage) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (
                message_id, sender_name, sender_email, body, is_read, received_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.message_id)
        .bind(&message.sender_name)
        .bind(&message.sender_email)
        .bind(&message.body)
        .bind(message.is_read)
        .bind(message.received_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_messages(&self) -> ContentResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT message_id, sender_name, sender_email, body, is_read, received_at
            FROM contact_messages
            ORDER BY received_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MessageRow::into_message).collect())
    }

    async fn mark_message_read(&self, message_id: Uuid, is_read: bool) -> ContentResult<bool> {
        let result = sqlx::query("UPDATE contact_messages SET is_read = $2 WHERE message_id = $1")
            .bind(message_id)
            .bind(is_read)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_message(&self, message_id: Uuid) -> ContentResult<bool> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE message_id = $1")
            .bind(message_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Internal row types for sqlx mapping

#[derive(sqlx::FromRow)]
struct ProfileRow {
    hero_headline: String,
    hero_tagline: String,
    about_text: String,
    footer_text: String,
    contact_email: Option<String>,
    location: Option<String>,
    github_url: Option<String>,
    linkedin_url: Option<String>,
    resume_url: Option<String>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            hero_headline: self.hero_headline,
            hero_tagline: self.hero_tagline,
            about_text: self.about_text,
            footer_text: self.footer_text,
            contact_email: self.contact_email,
            location: self.location,
            github_url: self.github_url,
            linkedin_url: self.linkedin_url,
            resume_url: self.resume_url,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    project_id: Uuid,
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
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectRow {
    fn into_project(self) -> Project {
        Project {
            project_id: self.project_id,
            title: self.title,
            summary: self.summary,
            description: self.description,
            tech_stack: self.tech_stack,
            repo_url: self.repo_url,
            live_url: self.live_url,
            image_url: self.image_url,
            featured: self.featured,
            published: self.published,
            sort_order: self.sort_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SkillRow {
    skill_id: Uuid,
    name: String,
    category: String,
    level: i16,
    sort_order: i32,
}

impl SkillRow {
    fn into_skill(self) -> Skill {
        Skill {
            skill_id: self.skill_id,
            name: self.name,
            category: self.category,
            level: self.level.clamp(0, 100) as u8,
            sort_order: self.sort_order,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ExperienceRow {
    experience_id: Uuid,
    company: String,
    title: String,
    summary: String,
    started_on: NaiveDate,
    ended_on: Option<NaiveDate>,
    sort_order: i32,
}

impl ExperienceRow {
    fn into_entry(self) -> ExperienceEntry {
        ExperienceEntry {
            experience_id: self.experience_id,
            company: self.company,
            title: self.title,
            summary: self.summary,
            started_on: self.started_on,
            ended_on: self.ended_on,
            sort_order: self.sort_order,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TestimonialRow {
    testimonial_id: Uuid,
    author: String,
    author_title: String,
    quote: String,
    avatar_url: Option<String>,
    published: bool,
    sort_order: i32,
}

impl TestimonialRow {
    fn into_testimonial(self) -> Testimonial {
        Testimonial {
            testimonial_id: self.testimonial_id,
            author: self.author,
            author_title: self.author_title,
            quote: self.quote,
            avatar_url: self.avatar_url,
            published: self.published,
            sort_order: self.sort_order,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    message_id: Uuid,
    sender_name: String,
    sender_email: String,
    body: String,
    is_read: bool,
    received_at: DateTime<Utc>,
}

impl MessageRow {
    fn into_message(self) -> ContactMessage {
        ContactMessage {
            message_id: self.message_id,
            sender_name: self.sender_name,
            sender_email: self.sender_email,
            body: self.body,
            is_read: self.is_read,
            received_at: self.received_at,
        }
    }
}
