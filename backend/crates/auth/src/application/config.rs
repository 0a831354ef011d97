//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

use crate::domain::entity::rate_limit::RateLimitPolicy;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL without "Remember Me" (12 hours)
    pub session_ttl_short: Duration,
    /// Session TTL with "Remember Me" (1 week)
    pub session_ttl_long: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Failed login attempts allowed per client before lockout
    pub max_login_attempts: u32,
    /// Lockout window in minutes once the threshold is crossed
    pub lockout_minutes: i64,
    /// Check new passwords against the HIBP corpus
    pub check_breached_passwords: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "admin_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl_short: Duration::from_secs(12 * 3600), // 12 hours
            session_ttl_long: Duration::from_secs(7 * 24 * 3600), // 1 week
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            max_login_attempts: RateLimitPolicy::MAX_ATTEMPTS,
            lockout_minutes: RateLimitPolicy::LOCKOUT_MINUTES,
            check_breached_passwords: true,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, no breach checks)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            check_breached_passwords: false,
            ..Self::with_random_secret()
        }
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_short_ms(&self) -> i64 {
        self.session_ttl_short.as_millis() as i64
    }

    /// Get session TTL with Remember Me in milliseconds
    pub fn session_ttl_long_ms(&self) -> i64 {
        self.session_ttl_long.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Rate limit policy derived from this config
    pub fn rate_limit_policy(&self) -> RateLimitPolicy {
        RateLimitPolicy::new(
            self.max_login_attempts,
            chrono::Duration::minutes(self.lockout_minutes),
        )
    }

    /// Cookie attributes for the session cookie
    ///
    /// `max_age_secs` is `None` for a session cookie (browser lifetime)
    /// and `Some` for remember-me logins.
    pub fn session_cookie(&self, max_age_secs: Option<i64>) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            http_only: true,
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_constants() {
        let config = AuthConfig::default();
        let policy = config.rate_limit_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.lockout, chrono::Duration::minutes(15));
    }

    #[test]
    fn test_session_cookie_attributes() {
        let config = AuthConfig::default();

        let session_scoped = config.session_cookie(None);
        assert_eq!(session_scoped.name, "admin_session");
        assert!(session_scoped.http_only);
        assert!(session_scoped.secure);
        assert_eq!(session_scoped.max_age_secs, None);

        let persistent = config.session_cookie(Some(7 * 24 * 3600));
        assert_eq!(persistent.max_age_secs, Some(604800));
    }

    #[test]
    fn test_development_relaxes_security() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert!(!config.check_breached_passwords);
        assert_ne!(config.session_secret, [0u8; 32]);
    }
}
