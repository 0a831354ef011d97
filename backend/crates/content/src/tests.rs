//! Unit tests for content crate
//! Target: C0 coverage 100%, C1 coverage 80%

#[cfg(test)]
mod support {
    use std::cmp::Reverse;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use uuid::Uuid;

    use crate::domain::entities::{
        ContactMessage, ExperienceEntry, Profile, Project, Skill, Testimonial,
    };
    use crate::domain::repository::{
        ContactMessageRepository, ExperienceRepository, ProfileRepository, ProjectRepository,
        SkillRepository, TestimonialRepository,
    };
    use crate::error::ContentResult;

    /// In-memory repository mirroring the Postgres ordering rules
    #[derive(Clone, Default)]
    pub struct MemContentRepo {
        inner: Arc<MemState>,
    }

    #[derive(Default)]
    struct MemState {
        profile: Mutex<Option<Profile>>,
        projects: Mutex<HashMap<Uuid, Project>>,
        skills: Mutex<HashMap<Uuid, Skill>>,
        experience: Mutex<HashMap<Uuid, ExperienceEntry>>,
        testimonials: Mutex<HashMap<Uuid, Testimonial>>,
        messages: Mutex<HashMap<Uuid, ContactMessage>>,
    }

    impl MemContentRepo {
        pub fn message_count(&self) -> usize {
            self.inner.messages.lock().unwrap().len()
        }
    }

    impl ProfileRepository for MemContentRepo {
        async fn get_profile(&self) -> ContentResult<Option<Profile>> {
            Ok(self.inner.profile.lock().unwrap().clone())
        }

        async fn upsert_profile(&self, profile: &Profile) -> ContentResult<()> {
            *self.inner.profile.lock().unwrap() = Some(profile.clone());
            Ok(())
        }
    }

    impl ProjectRepository for MemContentRepo {
        async fn list_projects(&self, include_unpublished: bool) -> ContentResult<Vec<Project>> {
            let mut projects: Vec<Project> = self
                .inner
                .projects
                .lock()
                .unwrap()
                .values()
                .filter(|p| include_unpublished || p.published)
                .cloned()
                .collect();
            projects.sort_by_key(|p| (p.sort_order, p.created_at));
            Ok(projects)
        }

        async fn find_project(&self, project_id: Uuid) -> ContentResult<Option<Project>> {
            Ok(self.inner.projects.lock().unwrap().get(&project_id).cloned())
        }

        async fn create_project(&self, project: &Project) -> ContentResult<()> {
            self.inner
                .projects
                .lock()
                .unwrap()
                .insert(project.project_id, project.clone());
            Ok(())
        }

        async fn update_project(&self, project: &Project) -> ContentResult<bool> {
            let mut projects = self.inner.projects.lock().unwrap();
            if !projects.contains_key(&project.project_id) {
                return Ok(false);
            }
            projects.insert(project.project_id, project.clone());
            Ok(true)
        }

        async fn delete_project(&self, project_id: Uuid) -> ContentResult<bool> {
            Ok(self
                .inner
                .projects
                .lock()
                .unwrap()
                .remove(&project_id)
                .is_some())
        }
    }

    impl SkillRepository for MemContentRepo {
        async fn list_skills(&self) -> ContentResult<Vec<Skill>> {
            let mut skills: Vec<Skill> =
                self.inner.skills.lock().unwrap().values().cloned().collect();
            skills.sort_by(|a, b| {
                (&a.category, a.sort_order, &a.name).cmp(&(&b.category, b.sort_order, &b.name))
            });
            Ok(skills)
        }

        async fn create_skill(&self, skill: &Skill) -> ContentResult<()> {
            self.inner
                .skills
                .lock()
                .unwrap()
                .insert(skill.skill_id, skill.clone());
            Ok(())
        }

        async fn update_skill(&self, skill: &Skill) -> ContentResult<bool> {
            let mut skills = self.inner.skills.lock().unwrap();
            if !skills.contains_key(&skill.skill_id) {
                return Ok(false);
            }
            skills.insert(skill.skill_id, skill.clone());
            Ok(true)
        }

        async fn delete_skill(&self, skill_id: Uuid) -> ContentResult<bool> {
            Ok(self
                .inner
                .skills
                .lock()
                .unwrap()
                .remove(&skill_id)
                .is_some())
        }
    }

    impl ExperienceRepository for MemContentRepo {
        async fn list_experience(&self) -> ContentResult<Vec<ExperienceEntry>> {
            let mut entries: Vec<ExperienceEntry> = self
                .inner
                .experience
                .lock()
                .unwrap()
                .values()
                .cloned()
                .collect();
            entries.sort_by_key(|e| (e.sort_order, Reverse(e.started_on)));
            Ok(entries)
        }

        async fn create_experience(&self, entry: &ExperienceEntry) -> ContentResult<()> {
            self.inner
                .experience
                .lock()
                .unwrap()
                .insert(entry.experience_id, entry.clone());
            Ok(())
        }

        async fn update_experience(&self, entry: &ExperienceEntry) -> ContentResult<bool> {
            let mut entries = self.inner.experience.lock().unwrap();
            if !entries.contains_key(&entry.experience_id) {
                return Ok(false);
            }
            entries.insert(entry.experience_id, entry.clone());
            Ok(true)
        }

        async fn delete_experience(&self, experience_id: Uuid) -> ContentResult<bool> {
            Ok(self
                .inner
                .experience
                .lock()
                .unwrap()
                .remove(&experience_id)
                .is_some())
        }
    }

    impl TestimonialRepository for MemContentRepo {
        async fn list_testimonials(
            &self,
            include_unpublished: bool,
        ) -> ContentResult<Vec<Testimonial>> {
            let mut testimonials: Vec<Testimonial> = self
                .inner
                .testimonials
                .lock()
                .unwrap()
                .values()
                .filter(|t| include_unpublished || t.published)
                .cloned()
                .collect();
            testimonials.sort_by_key(|t| t.sort_order);
            Ok(testimonials)
        }

        async fn create_testimonial(&self, testimonial: &Testimonial) -> ContentResult<()> {
            self.inner
                .testimonials
                .lock()
                .unwrap()
                .insert(testimonial.testimonial_id, testimonial.clone());
            Ok(())
        }

        async fn update_testimonial(&self, testimonial: &Testimonial) -> ContentResult<bool> {
            let mut testimonials = self.inner.testimonials.lock().unwrap();
            if !testimonials.contains_key(&testimonial.testimonial_id) {
                return Ok(false);
            }
            testimonials.insert(testimonial.testimonial_id, testimonial.clone());
            Ok(true)
        }

        async fn delete_testimonial(&self, testimonial_id: Uuid) -> ContentResult<bool> {
            Ok(self
                .inner
                .testimonials
                .lock()
                .unwrap()
                .remove(&testimonial_id)
                .is_some())
        }
    }

    impl ContactMessageRepository for MemContentRepo {
        async fn create_message(&self, message: &ContactMessage) -> ContentResult<()> {
            self.inner
                .messages
                .lock()
                .unwrap()
                .insert(message.message_id, message.clone());
            Ok(())
        }

        async fn list_messages(&self) -> ContentResult<Vec<ContactMessage>> {
            let mut messages: Vec<ContactMessage> = self
                .inner
                .messages
                .lock()
                .unwrap()
                .values()
                .cloned()
                .collect();
            messages.sort_by_key(|m| Reverse(m.received_at));
            Ok(messages)
        }

        async fn mark_message_read(&self, message_id: Uuid, is_read: bool) -> ContentResult<bool> {
            let mut messages = self.inner.messages.lock().unwrap();
            match messages.get_mut(&message_id) {
                Some(message) => {
                    message.is_read = is_read;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_message(&self, message_id: Uuid) -> ContentResult<bool> {
            Ok(self
                .inner
                .messages
                .lock()
                .unwrap()
                .remove(&message_id)
                .is_some())
        }
    }

    pub fn project(title: &str, published: bool, sort_order: i32) -> Project {
        Project::new(
            title.to_string(),
            format!("{title} summary"),
            String::new(),
            vec!["Rust".to_string()],
            None,
            None,
            None,
            false,
            published,
            sort_order,
        )
        .unwrap()
    }

    pub fn testimonial(author: &str, published: bool, sort_order: i32) -> Testimonial {
        Testimonial::new(
            author.to_string(),
            "CTO".to_string(),
            "Great work".to_string(),
            None,
            published,
            sort_order,
        )
        .unwrap()
    }
}

#[cfg(test)]
mod view_portfolio_tests {
    use std::sync::Arc;

    use super::support::*;
    use crate::application::{ManageContentUseCase, ViewPortfolioUseCase};
    use crate::domain::entities::Profile;

    #[tokio::test]
    async fn test_empty_store_yields_empty_view() {
        let repo = Arc::new(MemContentRepo::default());
        let view = ViewPortfolioUseCase::new(repo).execute().await.unwrap();

        assert!(view.profile.is_none());
        assert!(view.projects.is_empty());
        assert!(view.skills.is_empty());
        assert!(view.experience.is_empty());
        assert!(view.testimonials.is_empty());
    }

    #[tokio::test]
    async fn test_unpublished_items_are_invisible_publicly() {
        let repo = Arc::new(MemContentRepo::default());
        let manage = ManageContentUseCase::new(repo.clone());

        manage.create_project(project("Shipped", true, 0)).await.unwrap();
        manage.create_project(project("Draft", false, 1)).await.unwrap();
        manage
            .create_testimonial(testimonial("Alex", false, 0))
            .await
            .unwrap();

        let view = ViewPortfolioUseCase::new(repo.clone())
            .execute()
            .await
            .unwrap();
        assert_eq!(view.projects.len(), 1);
        assert_eq!(view.projects[0].title, "Shipped");
        assert!(view.testimonials.is_empty());

        // The admin list still sees both
        assert_eq!(manage.list_projects().await.unwrap().len(), 2);
        assert_eq!(manage.list_testimonials().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_projects_follow_display_order() {
        let repo = Arc::new(MemContentRepo::default());
        let manage = ManageContentUseCase::new(repo.clone());

        manage.create_project(project("Second", true, 2)).await.unwrap();
        manage.create_project(project("First", true, 1)).await.unwrap();

        let view = ViewPortfolioUseCase::new(repo).execute().await.unwrap();
        let titles: Vec<&str> = view.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_profile_appears_once_saved() {
        let repo = Arc::new(MemContentRepo::default());
        let manage = ManageContentUseCase::new(repo.clone());

        let profile = Profile::new(
            "Hi, I build backends".to_string(),
            "Rust, mostly".to_string(),
            "About me".to_string(),
            String::new(),
            None,
            None,
            None,
            None,
            None,
        )
        .unwrap();
        manage.save_profile(profile).await.unwrap();

        let view = ViewPortfolioUseCase::new(repo).execute().await.unwrap();
        assert_eq!(
            view.profile.unwrap().hero_headline,
            "Hi, I build backends"
        );
    }
}

#[cfg(test)]
mod submit_contact_tests {
    use std::sync::Arc;

    use super::support::*;
    use crate::application::{ManageContentUseCase, SubmitContactInput, SubmitContactUseCase};
    use crate::error::ContentError;

    fn input(name: &str, email: &str, message: &str) -> SubmitContactInput {
        SubmitContactInput {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_submission_is_stored_unread() {
        let repo = Arc::new(MemContentRepo::default());
        let use_case = SubmitContactUseCase::new(repo.clone());

        let message_id = use_case
            .execute(input("Jamie", "jamie@example.com", "I have a project for you"))
            .await
            .unwrap();

        let messages = ManageContentUseCase::new(repo.clone())
            .list_messages()
            .await
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message_id, message_id);
        assert_eq!(messages[0].sender_name, "Jamie");
        assert!(!messages[0].is_read);
    }

    #[tokio::test]
    async fn test_invalid_submission_stores_nothing() {
        let repo = Arc::new(MemContentRepo::default());
        let use_case = SubmitContactUseCase::new(repo.clone());

        for bad in [
            input("", "jamie@example.com", "Hello"),
            input("Jamie", "not-an-email", "Hello"),
            input("Jamie", "jamie@example.com", "   "),
        ] {
            let err = use_case.execute(bad).await.unwrap_err();
            assert!(matches!(err, ContentError::Validation(_)));
        }

        assert_eq!(repo.message_count(), 0);
    }

    #[tokio::test]
    async fn test_validation_messages_name_the_field() {
        let repo = Arc::new(MemContentRepo::default());
        let use_case = SubmitContactUseCase::new(repo);

        let err = use_case
            .execute(input("Jamie", "jamie@example.com", ""))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Message is required");
    }
}

#[cfg(test)]
mod manage_content_tests {
    use std::sync::Arc;

    use super::support::*;
    use crate::application::{ManageContentUseCase, SubmitContactInput, SubmitContactUseCase};
    use crate::domain::entities::Skill;
    use crate::error::ContentError;

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = Arc::new(MemContentRepo::default());
        let manage = ManageContentUseCase::new(repo);

        let err = manage
            .update_project(project("Ghost", true, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NotFound));

        let skill = Skill::new("Rust".to_string(), "Backend".to_string(), 90, 0).unwrap();
        let err = manage.update_skill(skill).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound));
    }

    #[tokio::test]
    async fn test_project_crud_cycle() {
        let repo = Arc::new(MemContentRepo::default());
        let manage = ManageContentUseCase::new(repo);

        let created = manage.create_project(project("Old title", true, 0)).await.unwrap();

        let mut updated = project("New title", true, 0);
        updated.project_id = created.project_id;
        manage.update_project(updated).await.unwrap();

        let listed = manage.list_projects().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "New title");

        manage.delete_project(created.project_id).await.unwrap();
        assert!(manage.list_projects().await.unwrap().is_empty());

        let err = manage.delete_project(created.project_id).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound));
    }

    #[tokio::test]
    async fn test_read_flag_round_trip() {
        let repo = Arc::new(MemContentRepo::default());
        let manage = ManageContentUseCase::new(repo.clone());

        let message_id = SubmitContactUseCase::new(repo)
            .execute(SubmitContactInput {
                name: "Jamie".to_string(),
                email: "jamie@example.com".to_string(),
                message: "Hello".to_string(),
            })
            .await
            .unwrap();

        manage.set_message_read(message_id, true).await.unwrap();
        assert!(manage.list_messages().await.unwrap()[0].is_read);

        manage.set_message_read(message_id, false).await.unwrap();
        assert!(!manage.list_messages().await.unwrap()[0].is_read);

        manage.delete_message(message_id).await.unwrap();
        let err = manage.set_message_read(message_id, true).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound));
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::kind::ErrorKind;

    use crate::error::ContentError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(ContentError, StatusCode)> = vec![
            (ContentError::NotFound, StatusCode::NOT_FOUND),
            (
                ContentError::Validation("Name is required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ContentError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_validation_message_passes_through() {
        let error = ContentError::Validation("Skill level must be between 0 and 100".into());
        assert_eq!(error.to_string(), "Skill level must be between 0 and 100");
        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_not_found_kind() {
        assert_eq!(ContentError::NotFound.kind(), ErrorKind::NotFound);
    }
}
