//! User Entity
//!
//! Panel account with login credentials. The password hash lives on the
//! entity because accounts are the unit of authentication here; anything
//! that leaves the auth layer goes through [`UserIdentity`] instead, which
//! never carries the hash.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, password::PasswordHash, user_id::UserId, user_role::UserRole,
};

/// Panel account entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login identifier (unique, lowercased)
    pub email: Email,
    /// Argon2id PHC hash of the password
    pub password_hash: PasswordHash,
    /// Name shown in the panel
    pub display_name: String,
    /// Role (Admin, Editor)
    pub role: UserRole,
    /// Deactivated accounts cannot log in
    pub is_active: bool,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active account
    pub fn new(
        email: Email,
        password_hash: PasswordHash,
        display_name: impl Into<String>,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            display_name: display_name.into().trim().to_string(),
            role,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the account may authenticate
    pub fn can_login(&self) -> bool {
        self.is_active
    }

    /// Record successful login
    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login_at = Some(at);
        self.updated_at = at;
    }

    /// Replace the stored password hash
    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Deactivate the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Snapshot safe to hand outside the auth layer
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
        }
    }
}

/// Authenticated account snapshot without credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: UserId,
    pub email: Email,
    pub display_name: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::password::NewPassword;

    fn user() -> User {
        let email = Email::new("admin@portfolio.com").unwrap();
        let password = NewPassword::new("Str0ng&Secure#2026").unwrap();
        let hash = PasswordHash::from_new(&password, None).unwrap();
        User::new(email, hash, "  Site Admin  ", UserRole::Admin)
    }

    #[test]
    fn test_new_user_defaults() {
        let user = user();
        assert!(user.is_active);
        assert!(user.can_login());
        assert_eq!(user.last_login_at, None);
        assert_eq!(user.display_name, "Site Admin");
    }

    #[test]
    fn test_deactivated_user_cannot_login() {
        let mut user = user();
        user.deactivate();
        assert!(!user.can_login());
    }

    #[test]
    fn test_record_login_sets_timestamp() {
        let mut user = user();
        let at = Utc::now();
        user.record_login(at);
        assert_eq!(user.last_login_at, Some(at));
        assert_eq!(user.updated_at, at);
    }

    #[test]
    fn test_identity_excludes_credentials() {
        let user = user();
        let identity = user.identity();

        assert_eq!(identity.user_id, user.user_id);
        assert_eq!(identity.email, user.email);
        assert_eq!(identity.role, UserRole::Admin);
        // The identity type has no hash field; make sure Debug output
        // cannot leak one either.
        let debug = format!("{:?}", identity);
        assert!(!debug.contains("argon2"));
    }
}
