//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{
    AuthConfig, AuthMiddlewareState, PgAuthRepository, ProvisionAdminInput, ProvisionAdminUseCase,
    auth_router, require_admin_session,
};
use axum::{
    Router,
    extract::Request,
    http,
    http::{Method, header},
    middleware::{self, Next},
};
use base64::Engine;
use base64::engine::general_purpose;
use content::{PgContentRepository, admin_router, public_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,content=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions and stale lockout rows
    // Errors here should not prevent server startup
    let repo_for_cleanup = PgAuthRepository::new(pool.clone());
    match repo_for_cleanup.cleanup_expired_sessions().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }
    match repo_for_cleanup.cleanup_stale_rate_limits().await {
        Ok(rows) => {
            tracing::info!(rate_limits_deleted = rows, "Rate limit cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rate limit cleanup failed, continuing anyway");
        }
    }

    // Auth configuration
    let mut auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };

    if let Ok(pepper_b64) = env::var("PASSWORD_PEPPER") {
        auth_config.password_pepper =
            Some(Engine::decode(&general_purpose::STANDARD, &pepper_b64)?);
    }

    // Repositories
    let auth_repo = PgAuthRepository::new(pool.clone());
    let content_repo = PgContentRepository::new(pool.clone());

    // Provision the admin account from environment, if configured.
    // Failure is non-fatal: the account may already exist from a
    // previous boot, and login still works against the stored record.
    match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
        (Ok(email), Ok(password)) => {
            let display_name =
                env::var("ADMIN_NAME").unwrap_or_else(|_| "Site Admin".to_string());
            let provision = ProvisionAdminUseCase::new(
                Arc::new(auth_repo.clone()),
                Arc::new(auth_config.clone()),
            );
            match provision
                .execute(ProvisionAdminInput {
                    email,
                    password,
                    display_name,
                })
                .await
            {
                Ok(true) => tracing::info!("Admin account provisioned"),
                Ok(false) => tracing::debug!("Admin account already present"),
                Err(e) => {
                    tracing::warn!(error = %e, "Admin provisioning failed, continuing anyway");
                }
            }
        }
        _ => {
            tracing::warn!("ADMIN_EMAIL / ADMIN_PASSWORD not set, skipping admin provisioning");
        }
    }

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Admin routes sit behind the session guard; everything else is public
    let guard_state = AuthMiddlewareState {
        repo: Arc::new(auth_repo.clone()),
        config: Arc::new(auth_config.clone()),
    };
    let admin_api = admin_router(content_repo.clone()).layer(middleware::from_fn(
        move |req: Request, next: Next| {
            let state = guard_state.clone();
            async move { require_admin_session(state, req, next).await }
        },
    ));

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(auth_repo, auth_config))
        .nest("/api/portfolio", public_router(content_repo))
        .nest("/api/admin", admin_api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(31113);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
