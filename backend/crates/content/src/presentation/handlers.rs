//! HTTP Handlers
//!
//! Public surface: the aggregate portfolio payload and the contact
//! form. Admin surface: CRUD per section plus the contact inbox. Session
//! enforcement for the admin routes happens in the API composition
//! layer, not here.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::{
    ManageContentUseCase, SubmitContactInput, SubmitContactUseCase, ViewPortfolioUseCase,
};
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;
use crate::presentation::dto::{
    ContactRequest, ContactResponse, ExperienceDto, ExperiencePayload, MessageDto,
    PortfolioResponse, ProfileDto, ProfilePayload, ProjectDto, ProjectPayload, ReadFlagRequest,
    SkillDto, SkillPayload, TestimonialDto, TestimonialPayload,
};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: ContentRepository,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Public surface
// ============================================================================

/// GET /api/portfolio
pub async fn get_portfolio<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<PortfolioResponse>>
where
    R: ContentRepository,
{
    let use_case = ViewPortfolioUseCase::new(state.repo.clone());
    let view = use_case.execute().await?;

    Ok(Json(PortfolioResponse::from(view)))
}

/// POST /api/portfolio/contact
pub async fn submit_contact<R>(
    State(state): State<ContentAppState<R>>,
    Json(req): Json<ContactRequest>,
) -> ContentResult<impl IntoResponse>
where
    R: ContentRepository,
{
    let use_case = SubmitContactUseCase::new(state.repo.clone());

    let message_id = use_case
        .execute(SubmitContactInput {
            name: req.name,
            email: req.email,
            message: req.message,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ContactResponse { message_id })))
}

// ============================================================================
// Admin: profile
// ============================================================================

/// PUT /api/admin/profile
pub async fn save_profile<R>(
    State(state): State<ContentAppState<R>>,
    Json(payload): Json<ProfilePayload>,
) -> ContentResult<Json<ProfileDto>>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    let profile = use_case.save_profile(payload.into_profile()?).await?;

    Ok(Json(ProfileDto::from(&profile)))
}

// ============================================================================
// Admin: projects
// ============================================================================

/// GET /api/admin/projects (includes unpublished)
pub async fn list_admin_projects<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<ProjectDto>>>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    let projects = use_case.list_projects().await?;

    Ok(Json(projects.iter().map(ProjectDto::from).collect()))
}

/// POST /api/admin/projects
pub async fn create_project<R>(
    State(state): State<ContentAppState<R>>,
    Json(payload): Json<ProjectPayload>,
) -> ContentResult<impl IntoResponse>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    let project = use_case.create_project(payload.into_project()?).await?;

    Ok((StatusCode::CREATED, Json(ProjectDto::from(&project))))
}

/// PUT /api/admin/projects/{id}
pub async fn update_project<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProjectPayload>,
) -> ContentResult<Json<ProjectDto>>
where
    R: ContentRepository,
{
    let mut project = payload.into_project()?;
    project.project_id = id;

    let use_case = ManageContentUseCase::new(state.repo.clone());
    let project = use_case.update_project(project).await?;

    Ok(Json(ProjectDto::from(&project)))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete_project<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
) -> ContentResult<StatusCode>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    use_case.delete_project(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Admin: skills
// ============================================================================

/// POST /api/admin/skills
pub async fn create_skill<R>(
    State(state): State<ContentAppState<R>>,
    Json(payload): Json<SkillPayload>,
) -> ContentResult<impl IntoResponse>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    let skill = use_case.create_skill(payload.into_skill()?).await?;

    Ok((StatusCode::CREATED, Json(SkillDto::from(&skill))))
}

/// PUT /api/admin/skills/{id}
pub async fn update_skill<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SkillPayload>,
) -> ContentResult<Json<SkillDto>>
where
    R: ContentRepository,
{
    let mut skill = payload.into_skill()?;
    skill.skill_id = id;

    let use_case = ManageContentUseCase::new(state.repo.clone());
    let skill = use_case.update_skill(skill).await?;

    Ok(Json(SkillDto::from(&skill)))
}

/// DELETE /api/admin/skills/{id}
pub async fn delete_skill<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
) -> ContentResult<StatusCode>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    use_case.delete_skill(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Admin: experience
// ============================================================================

/// POST /api/admin/experience
pub async fn create_experience<R>(
    State(state): State<ContentAppState<R>>,
    Json(payload): Json<ExperiencePayload>,
) -> ContentResult<impl IntoResponse>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    let entry = use_case.create_experience(payload.into_entry()?).await?;

    Ok((StatusCode::CREATED, Json(ExperienceDto::from(&entry))))
}

/// PUT /api/admin/experience/{id}
pub async fn update_experience<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExperiencePayload>,
) -> ContentResult<Json<ExperienceDto>>
where
    R: ContentRepository,
{
    let mut entry = payload.into_entry()?;
    entry.experience_id = id;

    let use_case = ManageContentUseCase::new(state.repo.clone());
    let entry = use_case.update_experience(entry).await?;

    Ok(Json(ExperienceDto::from(&entry)))
}

/// DELETE /api/admin/experience/{id}
pub async fn delete_experience<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
) -> ContentResult<StatusCode>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    use_case.delete_experience(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Admin: testimonials
// ============================================================================

/// GET /api/admin/testimonials (includes unpublished)
pub async fn list_admin_testimonials<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<TestimonialDto>>>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    let testimonials = use_case.list_testimonials().await?;

    Ok(Json(testimonials.iter().map(TestimonialDto::from).collect()))
}

/// POST /api/admin/testimonials
pub async fn create_testimonial<R>(
    State(state): State<ContentAppState<R>>,
    Json(payload): Json<TestimonialPayload>,
) -> ContentResult<impl IntoResponse>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    let testimonial = use_case
        .create_testimonial(payload.into_testimonial()?)
        .await?;

    Ok((StatusCode::CREATED, Json(TestimonialDto::from(&testimonial))))
}

/// PUT /api/admin/testimonials/{id}
pub async fn update_testimonial<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TestimonialPayload>,
) -> ContentResult<Json<TestimonialDto>>
where
    R: ContentRepository,
{
    let mut testimonial = payload.into_testimonial()?;
    testimonial.testimonial_id = id;

    let use_case = ManageContentUseCase::new(state.repo.clone());
    let testimonial = use_case.update_testimonial(testimonial).await?;

    Ok(Json(TestimonialDto::from(&testimonial)))
}

/// DELETE /api/admin/testimonials/{id}
pub async fn delete_testimonial<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
) -> ContentResult<StatusCode>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    use_case.delete_testimonial(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Admin: contact inbox
// ============================================================================

/// GET /api/admin/messages
pub async fn list_messages<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<MessageDto>>>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    let messages = use_case.list_messages().await?;

    Ok(Json(messages.iter().map(MessageDto::from).collect()))
}

/// PUT /api/admin/messages/{id}/read
pub async fn set_message_read<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReadFlagRequest>,
) -> ContentResult<StatusCode>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    use_case.set_message_read(id, req.read).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/admin/messages/{id}
pub async fn delete_message<R>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<Uuid>,
) -> ContentResult<StatusCode>
where
    R: ContentRepository,
{
    let use_case = ManageContentUseCase::new(state.repo.clone());
    use_case.delete_message(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
