//! Admin Session Entity
//!
//! Server-side session backing the panel session cookie. The cookie only
//! carries a signed session id; everything else lives here. Sessions are
//! bound to a client fingerprint at creation and expiry is tracked in epoch
//! milliseconds to avoid timezone ambiguity in storage.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

/// Persisted admin panel session
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Session identifier (the value signed into the cookie)
    pub session_id: Uuid,
    /// Account this session belongs to
    pub user_id: UserId,
    /// Role captured at login time
    pub user_role: UserRole,
    /// Whether the long TTL was requested at login
    pub remember_me: bool,
    /// SHA-256 fingerprint of the client User-Agent
    pub client_fingerprint_hash: Vec<u8>,
    /// Client IP at login, for the audit trail
    pub ip_address: String,
    /// Client User-Agent at login
    pub user_agent: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last time the session was used
    pub last_accessed_at: DateTime<Utc>,
    /// Expiry in epoch milliseconds (UTC)
    pub expires_at_ms: i64,
}

impl AdminSession {
    /// Create a new session expiring `ttl` from now
    pub fn new(
        user_id: UserId,
        user_role: UserRole,
        remember_me: bool,
        client_fingerprint_hash: Vec<u8>,
        ip_address: String,
        user_agent: String,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            user_role,
            remember_me,
            client_fingerprint_hash,
            ip_address,
            user_agent,
            created_at: now,
            last_accessed_at: now,
            expires_at_ms: now.timestamp_millis() + ttl.num_milliseconds(),
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at_ms
    }

    /// Milliseconds until expiry (negative when already expired)
    pub fn remaining_ms(&self) -> i64 {
        self.expires_at_ms - Utc::now().timestamp_millis()
    }

    /// Mark the session as used now
    pub fn touch(&mut self) {
        self.last_accessed_at = Utc::now();
    }

    /// Slide the expiry forward when less than half the TTL remains
    ///
    /// Returns true if the expiry moved. Remember-me sessions are renewed
    /// lazily on use rather than on every request, which keeps session
    /// updates off the hot path.
    pub fn extend_if_needed(&mut self, ttl: Duration) -> bool {
        if self.remaining_ms() < ttl.num_milliseconds() / 2 {
            self.expires_at_ms = Utc::now().timestamp_millis() + ttl.num_milliseconds();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(ttl: Duration) -> AdminSession {
        AdminSession::new(
            UserId::new(),
            UserRole::Admin,
            true,
            vec![0xab; 32],
            "203.0.113.7".to_string(),
            "Mozilla/5.0".to_string(),
            ttl,
        )
    }

    #[test]
    fn test_new_session_not_expired() {
        let session = session(Duration::hours(12));
        assert!(!session.is_expired());
        assert!(session.remaining_ms() > 0);
    }

    #[test]
    fn test_expired_session() {
        let session = session(Duration::milliseconds(-1));
        assert!(session.is_expired());
    }

    #[test]
    fn test_extend_if_needed_over_half_remaining() {
        // Fresh session has the full TTL remaining; no extension
        let mut session = session(Duration::days(7));
        assert!(!session.extend_if_needed(Duration::days(7)));
    }

    #[test]
    fn test_extend_if_needed_under_half_remaining() {
        // 2 days remaining of a 7-day TTL; extension kicks in
        let mut session = session(Duration::days(2));
        let before = session.expires_at_ms;

        assert!(session.extend_if_needed(Duration::days(7)));
        assert!(session.expires_at_ms > before);
    }
}
