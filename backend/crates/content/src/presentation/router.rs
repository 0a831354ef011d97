//! Content Routers
//!
//! Two routers: the public portfolio surface and the admin CRUD
//! surface. The admin router carries no authentication itself; the API
//! composition layer wraps it with the session middleware.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::domain::repository::ContentRepository;
use crate::infra::postgres::PgContentRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// Create the public portfolio router with PostgreSQL repository
pub fn public_router(repo: PgContentRepository) -> Router {
    public_router_generic(repo)
}

/// Create a generic public router for any repository implementation
pub fn public_router_generic<R>(repo: R) -> Router
where
    R: ContentRepository,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::get_portfolio::<R>))
        .route("/contact", post(handlers::submit_contact::<R>))
        .with_state(state)
}

/// Create the admin content router with PostgreSQL repository
pub fn admin_router(repo: PgContentRepository) -> Router {
    admin_router_generic(repo)
}

/// Create a generic admin router for any repository implementation
pub fn admin_router_generic<R>(repo: R) -> Router
where
    R: ContentRepository,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/profile", put(handlers::save_profile::<R>))
        .route(
            "/projects",
            get(handlers::list_admin_projects::<R>).post(handlers::create_project::<R>),
        )
        .route(
            "/projects/{id}",
            put(handlers::update_project::<R>).delete(handlers::delete_project::<R>),
        )
        .route("/skills", post(handlers::create_skill::<R>))
        .route(
            "/skills/{id}",
            put(handlers::update_skill::<R>).delete(handlers::delete_skill::<R>),
        )
        .route("/experience", post(handlers::create_experience::<R>))
        .route(
            "/experience/{id}",
            put(handlers::update_experience::<R>).delete(handlers::delete_experience::<R>),
        )
        .route(
            "/testimonials",
            get(handlers::list_admin_testimonials::<R>).post(handlers::create_testimonial::<R>),
        )
        .route(
            "/testimonials/{id}",
            put(handlers::update_testimonial::<R>).delete(handlers::delete_testimonial::<R>),
        )
        .route("/messages", get(handlers::list_messages::<R>))
        .route("/messages/{id}/read", put(handlers::set_message_read::<R>))
        .route("/messages/{id}", delete(handlers::delete_message::<R>))
        .with_state(state)
}
