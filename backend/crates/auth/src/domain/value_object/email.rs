//! Email Value Object
//!
//! Represents a validated email address. Email is the login identifier for
//! panel accounts, so values are normalized (trimmed, lowercased) before use.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Normalize and validate a raw address
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }
        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {EMAIL_MAX_LENGTH} characters"
            )));
        }
        if !Self::is_valid_format(&email) {
            return Err(AppError::bad_request("Invalid email format"));
        }

        Ok(Self(email))
    }

    /// Shape check only. Whether the mailbox actually exists is not this
    /// type's concern.
    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        // split_once only peels the first @; a second one hides in the domain
        if domain.contains('@') {
            return false;
        }

        if local.is_empty() || local.len() > 64 {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // No leading or trailing separators in the domain
        !(domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']))
    }

    /// Wrap a stored value without re-validating. Rows were validated on the
    /// way in.
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Redacted form for logs: keeps the first two characters and the domain
    ///
    /// Login attempts are logged, and full addresses do not belong in logs.
    pub fn redacted(&self) -> String {
        let (local, domain) = match self.0.split_once('@') {
            Some(parts) => parts,
            None => return "***".to_string(),
        };

        let visible: String = local.chars().take(2).collect();
        format!("{}***@{}", visible, domain)
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("admin@portfolio.com").is_ok());
        assert!(Email::new("Admin@Portfolio.COM").is_ok()); // Should lowercase
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
    }

    #[test]
    fn test_email_case_normalization() {
        let email = Email::new("Admin@Portfolio.COM").unwrap();
        assert_eq!(email.as_str(), "admin@portfolio.com");
    }

    #[test]
    fn test_email_redacted() {
        let email = Email::new("admin@portfolio.com").unwrap();
        assert_eq!(email.redacted(), "ad***@portfolio.com");

        let short = Email::new("a@example.com").unwrap();
        assert_eq!(short.redacted(), "a***@example.com");
    }
}
