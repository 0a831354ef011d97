//! Login Rate Limiting
//!
//! Per-client failed-login tracking. Every login attempt registers against
//! an [`AttemptRecord`] keyed by client identifier (IP address). Crossing
//! the attempt threshold locks the identifier out for a fixed window;
//! while locked, attempts are denied without touching the record, so the
//! window never extends itself. A successful login clears the record.

use chrono::{DateTime, Duration, Utc};

/// Attempt threshold and lockout window
#[derive(Debug, Clone, Copy)]
pub struct RateLimitPolicy {
    /// Attempts allowed per cycle before the lockout triggers
    pub max_attempts: u32,
    /// How long a locked identifier stays locked
    pub lockout: Duration,
}

impl RateLimitPolicy {
    /// Default attempt threshold
    pub const MAX_ATTEMPTS: u32 = 5;

    /// Default lockout window in minutes
    pub const LOCKOUT_MINUTES: i64 = 15;

    pub fn new(max_attempts: u32, lockout: Duration) -> Self {
        Self {
            max_attempts,
            lockout,
        }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::MAX_ATTEMPTS,
            lockout: Duration::minutes(Self::LOCKOUT_MINUTES),
        }
    }
}

/// Outcome of registering a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// The attempt may proceed to credential verification
    Allowed,
    /// The identifier is locked out until the given instant
    Locked { until: DateTime<Utc> },
}

impl RateLimitDecision {
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allowed)
    }
}

/// Login attempt state for one client identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub identifier: String,
    pub attempt_count: u32,
    pub last_attempt_at: DateTime<Utc>,
    pub locked_until: Option<DateTime<Utc>>,
}

impl AttemptRecord {
    /// Record for an identifier seen for the first time
    ///
    /// The creating attempt counts as attempt one and is always allowed.
    pub fn first(identifier: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            identifier: identifier.into(),
            attempt_count: 1,
            last_attempt_at: now,
            locked_until: None,
        }
    }

    /// Whether the identifier is locked out at `now`
    ///
    /// The lockout ends exactly at `locked_until`: an attempt at that
    /// instant is no longer locked.
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.locked_until.is_some_and(|until| until > now)
    }

    /// Register one login attempt and report whether it may proceed
    ///
    /// State transitions:
    /// - locked: deny; the record stays exactly as it is
    /// - lockout expired: start a fresh cycle at attempt one, allow
    /// - threshold crossed: increment, lock until `now + lockout`, deny
    /// - otherwise: increment, allow
    pub fn register(&mut self, now: DateTime<Utc>, policy: &RateLimitPolicy) -> RateLimitDecision {
        if let Some(until) = self.locked_until {
            if until > now {
                return RateLimitDecision::Locked { until };
            }
            // Lockout has run out; this attempt starts a new cycle
            self.attempt_count = 0;
            self.locked_until = None;
        }

        self.attempt_count += 1;
        self.last_attempt_at = now;

        if self.attempt_count > policy.max_attempts {
            let until = now + policy.lockout;
            self.locked_until = Some(until);
            return RateLimitDecision::Locked { until };
        }

        RateLimitDecision::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RateLimitPolicy {
        RateLimitPolicy::default()
    }

    #[test]
    fn test_first_attempt_is_allowed() {
        let now = Utc::now();
        let record = AttemptRecord::first("203.0.113.7", now);

        assert_eq!(record.attempt_count, 1);
        assert_eq!(record.locked_until, None);
        assert!(!record.is_locked(now));
    }

    #[test]
    fn test_attempts_up_to_threshold_are_allowed() {
        let now = Utc::now();
        let mut record = AttemptRecord::first("203.0.113.7", now);

        // Attempts 2 through 5
        for expected_count in 2..=5 {
            let decision = record.register(now, &policy());
            assert_eq!(decision, RateLimitDecision::Allowed);
            assert_eq!(record.attempt_count, expected_count);
        }
        assert!(!record.is_locked(now));
    }

    #[test]
    fn test_sixth_attempt_locks() {
        let now = Utc::now();
        let mut record = AttemptRecord::first("203.0.113.7", now);
        for _ in 2..=5 {
            record.register(now, &policy());
        }

        let decision = record.register(now, &policy());

        let expected_until = now + Duration::minutes(RateLimitPolicy::LOCKOUT_MINUTES);
        assert_eq!(
            decision,
            RateLimitDecision::Locked {
                until: expected_until
            }
        );
        assert_eq!(record.attempt_count, 6);
        assert_eq!(record.locked_until, Some(expected_until));
        assert!(record.is_locked(now));
    }

    #[test]
    fn test_locked_record_is_frozen() {
        let now = Utc::now();
        let mut record = AttemptRecord::first("203.0.113.7", now);
        for _ in 2..=6 {
            record.register(now, &policy());
        }
        let frozen = record.clone();

        // Attempts during the lockout are denied and change nothing,
        // so the window cannot extend itself.
        let later = now + Duration::minutes(5);
        let decision = record.register(later, &policy());

        assert_eq!(
            decision,
            RateLimitDecision::Locked {
                until: frozen.locked_until.unwrap()
            }
        );
        assert_eq!(record, frozen);
    }

    #[test]
    fn test_lockout_expires_at_boundary() {
        let now = Utc::now();
        let mut record = AttemptRecord::first("203.0.113.7", now);
        for _ in 2..=6 {
            record.register(now, &policy());
        }
        let until = record.locked_until.unwrap();

        assert!(record.is_locked(until - Duration::seconds(1)));
        assert!(!record.is_locked(until));
        assert!(!record.is_locked(until + Duration::seconds(1)));
    }

    #[test]
    fn test_expired_lockout_starts_fresh_cycle() {
        let now = Utc::now();
        let mut record = AttemptRecord::first("203.0.113.7", now);
        for _ in 2..=6 {
            record.register(now, &policy());
        }
        let after = record.locked_until.unwrap() + Duration::seconds(1);

        let decision = record.register(after, &policy());

        assert_eq!(decision, RateLimitDecision::Allowed);
        assert_eq!(record.attempt_count, 1);
        assert_eq!(record.locked_until, None);
        assert_eq!(record.last_attempt_at, after);
    }

    #[test]
    fn test_custom_policy_threshold() {
        let now = Utc::now();
        let tight = RateLimitPolicy::new(2, Duration::minutes(1));
        let mut record = AttemptRecord::first("203.0.113.7", now);

        assert!(record.register(now, &tight).is_allowed());
        assert!(!record.register(now, &tight).is_allowed());
        assert_eq!(record.attempt_count, 3);
    }
}
