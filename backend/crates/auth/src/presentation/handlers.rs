//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::client::{extract_client_ip, extract_fingerprint};

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, CheckSessionUseCase, SignInInput, SignInUseCase,
    SignOutUseCase,
};
use crate::domain::repository::{RateLimitRepository, SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ChangePasswordRequest, LoginRequest, LoginResponse, SessionStatusResponse, UserDto,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + RateLimitRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + RateLimitRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let fingerprint = extract_fingerprint(&headers, client_ip)?;

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    // req のムーブ後も使えるように remember_me を退避
    let remember_me = req.remember_me;

    let input = SignInInput {
        email: req.email,
        password: req.password,
        remember_me,
    };

    let output = use_case.execute(input, fingerprint).await?;

    // Success - set session cookie (Max-Age only for remember-me logins;
    // short sessions ride on the browser session and expire server-side)
    let cookie = session_cookie_header(&state.config, &output.session_token, remember_me);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            user: UserDto::from(&output.identity),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + RateLimitRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let cookie = clear_cookie_header(&state.config);

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/session
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: UserRepository + RateLimitRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let fingerprint = extract_fingerprint(&headers, client_ip)?;

    let Some(token) = extract_session_cookie(&headers, &state.config.session_cookie_name) else {
        return Ok(Json(SessionStatusResponse::unauthenticated()));
    };

    let check_use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let Ok(session) = check_use_case.get_session(&token, &fingerprint.hash).await else {
        return Ok(Json(SessionStatusResponse::unauthenticated()));
    };

    // The session stores ids only; resolve the account for the panel header.
    // A session surviving its account is treated as signed out.
    let user = UserRepository::find_by_id(state.repo.as_ref(), &session.user_id).await?;
    let Some(user) = user else {
        return Ok(Json(SessionStatusResponse::unauthenticated()));
    };

    Ok(Json(SessionStatusResponse {
        authenticated: true,
        user: Some(UserDto::from(&user.identity())),
        expires_at_ms: Some(session.expires_at_ms),
    }))
}

// ============================================================================
// Change Password (requires authentication)
// ============================================================================

/// PUT /api/auth/password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + RateLimitRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let fingerprint = extract_fingerprint(&headers, client_ip)?;

    // Get current session
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name)
        .ok_or(AuthError::SessionInvalid)?;

    let check_use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    let session = check_use_case.get_session(&token, &fingerprint.hash).await?;

    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());

    let input = ChangePasswordInput {
        current_password: req.current_password,
        new_password: req.new_password,
    };

    use_case.execute(&session.user_id, input).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}

fn session_cookie_header(config: &AuthConfig, token: &str, remember_me: bool) -> HeaderValue {
    let max_age = remember_me.then(|| config.session_ttl_long.as_secs() as i64);
    platform::cookie::set_cookie_header(&config.session_cookie(max_age), token)
}

fn clear_cookie_header(config: &AuthConfig) -> HeaderValue {
    platform::cookie::delete_cookie_header(&config.session_cookie(None))
}
