//! PostgreSQL Repository Implementations
//!
//! The rate limit transition runs as a single upsert so concurrent login
//! attempts from one client serialize on the row and never lose an
//! increment. The CASE arms mirror [`AttemptRecord::register`]; the row
//! stays untouched while a lockout is active.
//!
//! [`AttemptRecord::register`]: crate::domain::entity::rate_limit::AttemptRecord::register

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    rate_limit::{RateLimitDecision, RateLimitPolicy},
    session::AdminSession,
    user::User,
};
use crate::domain::repository::{RateLimitRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, password::PasswordHash, user_id::UserId, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// How long an idle rate limit row is kept before cleanup
const RATE_LIMIT_RETENTION_HOURS: i64 = 24;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired_sessions(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM admin_sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired admin sessions");

        Ok(deleted)
    }

    /// Clean up rate limit rows with no recent activity
    ///
    /// Rows reset themselves on the next attempt once a lockout expires,
    /// so this is pure hygiene. An active lockout is never deleted.
    pub async fn cleanup_stale_rate_limits(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let cutoff = now - Duration::hours(RATE_LIMIT_RETENTION_HOURS);

        let deleted = sqlx::query(
            r#"
            DELETE FROM login_rate_limits
            WHERE last_attempt_at < $1
              AND (locked_until IS NULL OR locked_until < $2)
            "#,
        )
        .bind(cutoff)
        .bind(now)
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::info!(rows_deleted = deleted, "Cleaned up stale rate limit rows");

        Ok(deleted)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                password_hash,
                display_name,
                user_role,
                is_active,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(&user.display_name)
        .bind(user.role.id())
        .bind(user.is_active)
        .bind(user.last_login_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                display_name,
                user_role,
                is_active,
                last_login_at,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                display_name,
                user_role,
                is_active,
                last_login_at,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn record_login(&self, user_id: &UserId, at: DateTime<Utc>) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                last_login_at = $2,
                updated_at = $2
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_password(
        &self,
        user_id: &UserId,
        password_hash: &PasswordHash,
        at: DateTime<Utc>,
    ) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                password_hash = $2,
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(password_hash.as_phc_string())
        .bind(at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Rate Limit Repository Implementation
// ============================================================================

impl RateLimitRepository for PgAuthRepository {
    async fn check(
        &self,
        identifier: &str,
        now: DateTime<Utc>,
        policy: &RateLimitPolicy,
    ) -> AuthResult<RateLimitDecision> {
        // First-ever attempt inserts the row at count 1. On conflict the
        // CASE arms apply the register transition against the stored row:
        // active lock keeps everything frozen, an expired lock starts a
        // fresh cycle, and crossing the threshold sets locked_until.
        // rl.* always reads the pre-update row, so the arms never see each
        // other's assignments.
        let locked_until = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            r#"
            INSERT INTO login_rate_limits AS rl (
                identifier,
                attempt_count,
                last_attempt_at,
                locked_until
            ) VALUES ($1, 1, $2, NULL)
            ON CONFLICT (identifier) DO UPDATE SET
                attempt_count = CASE
                    WHEN rl.locked_until IS NOT NULL AND rl.locked_until > $2 THEN rl.attempt_count
                    WHEN rl.locked_until IS NOT NULL THEN 1
                    ELSE rl.attempt_count + 1
                END,
                last_attempt_at = CASE
                    WHEN rl.locked_until IS NOT NULL AND rl.locked_until > $2 THEN rl.last_attempt_at
                    ELSE $2
                END,
                locked_until = CASE
                    WHEN rl.locked_until IS NOT NULL AND rl.locked_until > $2 THEN rl.locked_until
                    WHEN rl.locked_until IS NOT NULL THEN NULL
                    WHEN rl.attempt_count >= $3 THEN $4
                    ELSE NULL
                END
            RETURNING locked_until
            "#,
        )
        .bind(identifier)
        .bind(now)
        .bind(policy.max_attempts as i32)
        .bind(now + policy.lockout)
        .fetch_one(&self.pool)
        .await?;

        match locked_until {
            Some(until) if until > now => Ok(RateLimitDecision::Locked { until }),
            _ => Ok(RateLimitDecision::Allowed),
        }
    }

    async fn reset(&self, identifier: &str) -> AuthResult<()> {
        sqlx::query("DELETE FROM login_rate_limits WHERE identifier = $1")
            .bind(identifier)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create(&self, session: &AdminSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_sessions (
                session_id,
                user_id,
                user_role,
                expires_at_ms,
                remember_me,
                client_fingerprint_hash,
                ip_address,
                user_agent,
                created_at,
                last_accessed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_uuid())
        .bind(session.user_role.id())
        .bind(session.expires_at_ms)
        .bind(session.remember_me)
        .bind(&session.client_fingerprint_hash)
        .bind(&session.ip_address)
        .bind(&session.user_agent)
        .bind(session.created_at)
        .bind(session.last_accessed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        session_id: Uuid,
        fingerprint_hash: &[u8],
    ) -> AuthResult<Option<AdminSession>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                user_role,
                expires_at_ms,
                remember_me,
                client_fingerprint_hash,
                ip_address,
                user_agent,
                created_at,
                last_accessed_at
            FROM admin_sessions
            WHERE session_id = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(session_id)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                if !platform::crypto::constant_time_eq(&r.client_fingerprint_hash, fingerprint_hash)
                {
                    tracing::warn!(
                        session_id = %session_id,
                        "Admin session fingerprint mismatch"
                    );
                    return Err(AuthError::SessionFingerprintMismatch);
                }
                Ok(Some(r.into_session()))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, session: &AdminSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE admin_sessions SET
                expires_at_ms = $2,
                last_accessed_at = $3
            WHERE session_id = $1
            "#,
        )
        .bind(session.session_id)
        .bind(session.expires_at_ms)
        .bind(session.last_accessed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM admin_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password_hash: String,
    display_name: String,
    user_role: i16,
    is_active: bool,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = PasswordHash::from_phc_string(self.password_hash)?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            password_hash,
            display_name: self.display_name,
            // Unknown role ids degrade to the least-privileged role
            role: UserRole::from_id(self.user_role).unwrap_or_default(),
            is_active: self.is_active,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Uuid,
    user_role: i16,
    expires_at_ms: i64,
    remember_me: bool,
    client_fingerprint_hash: Vec<u8>,
    ip_address: String,
    user_agent: String,
    created_at: DateTime<Utc>,
    last_accessed_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> AdminSession {
        AdminSession {
            session_id: self.session_id,
            user_id: UserId::from_uuid(self.user_id),
            user_role: UserRole::from_id(self.user_role).unwrap_or_default(),
            expires_at_ms: self.expires_at_ms,
            remember_me: self.remember_me,
            client_fingerprint_hash: self.client_fingerprint_hash,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            created_at: self.created_at,
            last_accessed_at: self.last_accessed_at,
        }
    }
}
