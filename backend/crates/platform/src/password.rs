//! Password hashing and verification
//!
//! Argon2id with optional pepper, NIST SP 800-63B policy checks on new
//! passwords, and an optional HIBP breach lookup using the k-anonymity
//! range API. Clear-text material is zeroized on drop and redacted in
//! Debug output.
//!
//! The policy checks apply to *new* passwords only. Login verification uses
//! [`ClearTextPassword::for_verification`], which normalizes but never
//! rejects: a stored hash predating a policy change must keep verifying.

use std::fmt;
use std::fmt::Write as _;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use sha1::{Digest, Sha1};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// NIST: SHALL require at least 8 characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// NIST: SHOULD permit at least 64; we allow double that
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// HIBP range endpoint (k-anonymity: only a 5-char SHA-1 prefix is sent)
const HIBP_API_URL: &str = "https://api.pwnedpasswords.com/range/";

// ============================================================================
// Error Types
// ============================================================================

/// Why a new password was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("This password has been compromised in a data breach")]
    Compromised,

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Hashing and verification failures
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// HIBP lookup failed; callers treat this as non-blocking
    #[error("Breach check failed: {0}")]
    BreachCheckFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// A password still in clear text.
///
/// Not `Clone`, zeroized on drop, redacted in `Debug`. The only ways
/// out are hashing and verification.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Accept a new password, applying NFKC normalization and the
    /// policy checks: length bounds counted in code points, no control
    /// characters, and a small deny-list of predictable patterns.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        // NIST: normalize before any measurement so composed and
        // decomposed forms of the same text behave identically
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        let has_forbidden_control = normalized
            .chars()
            .any(|ch| ch.is_control() && ch != ' ' && ch != '\t' && ch != '\n');
        if has_forbidden_control {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if is_common_pattern(&normalized) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(Self(normalized))
    }

    /// Wrap a password submitted for verification against an existing hash.
    ///
    /// Applies the same NFKC normalization as [`ClearTextPassword::new`] but
    /// skips every policy check. A submitted password that violates the
    /// current policy must still be *compared*, not rejected: hashes created
    /// before a policy tightening remain valid until rotated.
    pub fn for_verification(raw: String) -> Self {
        Self(raw.nfkc().collect())
    }

    /// Skip validation entirely; test fixtures only
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    /// Number of Unicode code points after normalization
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id, folding in the pepper when one is configured.
    ///
    /// The pepper is appended to the password bytes before hashing, so a
    /// hash created with a pepper only verifies with that same pepper.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = peppered_bytes(self, pepper);

        let salt = SaltString::generate(OsRng);

        // Argon2::default is the OWASP-recommended argon2id v19
        // parameter set (m=19456 KiB, t=2, p=1)
        let hash = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// Look the password up in the HIBP corpus.
    ///
    /// Only the first five hex characters of the SHA-1 digest leave the
    /// server; the match against the returned suffix list happens here.
    /// Returns `Ok(true)` when the password appears in a known breach.
    pub async fn check_breach(&self) -> Result<bool, PasswordHashError> {
        let mut hasher = Sha1::new();
        hasher.update(self.as_bytes());
        let hash_hex = hex_encode_upper(&hasher.finalize());

        let (prefix, suffix) = hash_hex.split_at(5);

        let url = format!("{HIBP_API_URL}{prefix}");
        let response = reqwest::get(&url)
            .await
            .map_err(|e| PasswordHashError::BreachCheckFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PasswordHashError::BreachCheckFailed(format!(
                "API returned status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PasswordHashError::BreachCheckFailed(e.to_string()))?;

        // Response lines are SUFFIX:COUNT
        let compromised = body.lines().any(|line| {
            line.split_once(':')
                .is_some_and(|(candidate, _count)| candidate.eq_ignore_ascii_case(suffix))
        });

        Ok(compromised)
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// An Argon2id hash in PHC string format, safe to store and log-adjacent
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Re-wrap a PHC string loaded from storage, rejecting anything
    /// that does not parse as one
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// The PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a submitted password against this hash.
    ///
    /// The pepper must match the one used at hashing time. Comparison
    /// happens inside argon2 and is constant-time.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = peppered_bytes(password, pepper);

        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }

    /// Whether the stored hash predates the current algorithm choice
    /// and should be recomputed on the next successful login
    pub fn needs_rehash(&self) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return true;
        };

        parsed_hash.algorithm != argon2::Algorithm::Argon2id.ident()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn peppered_bytes(password: &ClearTextPassword, pepper: Option<&[u8]>) -> Vec<u8> {
    let mut bytes = password.as_bytes().to_vec();
    if let Some(p) = pepper {
        bytes.extend_from_slice(p);
    }
    bytes
}

/// Deny-list of predictable shapes: one repeated character, sequential
/// digit runs, keyboard walks, and the usual suspects
fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }

    if is_sequential_numbers(&lower) {
        return true;
    }

    const KEYBOARD_PATTERNS: &[&str] = &[
        "qwerty",
        "qwertyuiop",
        "asdfgh",
        "asdfghjkl",
        "zxcvbn",
        "qazwsx",
        "1qaz2wsx",
    ];
    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "12345678",
        "123456789",
        "1234567890",
        "abcdefgh",
        "letmein",
        "welcome",
        "admin123",
        "administrator",
        "iloveyou",
        "sunshine",
        "princess",
        "football",
        "monkey",
        "shadow",
        "master",
        "dragon",
        "baseball",
        "trustno1",
    ];
    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// An entirely numeric run counting up or down (wrapping 9->0 / 0->9)
fn is_sequential_numbers(s: &str) -> bool {
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 4 {
        return false;
    }

    let ascending = digits
        .windows(2)
        .all(|w| w[1] == w[0] + 1 || (w[0] == 9 && w[1] == 0));
    let descending = digits
        .windows(2)
        .all(|w| w[0] == w[1] + 1 || (w[0] == 0 && w[1] == 9));

    ascending || descending
}

fn hex_encode_upper(bytes: &[u8]) -> String {
    bytes.iter().fold(String::new(), |mut out, b| {
        let _ = write!(out, "{b:02X}");
        out
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { .. })));

        let result = ClearTextPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1));
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        for raw in ["", "        "] {
            let result = ClearTextPassword::new(raw.to_string());
            assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
        }
    }

    #[test]
    fn test_common_patterns_rejected() {
        for raw in ["password123", "qwertyuiop", "12345678", "aaaaaaaaaa"] {
            let result = ClearTextPassword::new(raw.to_string());
            assert!(
                matches!(result, Err(PasswordPolicyError::CommonPattern)),
                "{raw} should be rejected as a common pattern"
            );
        }
    }

    #[test]
    fn test_strong_passwords_accepted() {
        assert!(ClearTextPassword::new("MySecure#Pass2026!".to_string()).is_ok());
        assert!(ClearTextPassword::new("パスワード安全です!".to_string()).is_ok());
    }

    #[test]
    fn test_for_verification_skips_policy() {
        // Policy violations are still comparable
        let weak = ClearTextPassword::for_verification("short".to_string());
        assert_eq!(weak.char_count(), 5);

        let empty = ClearTextPassword::for_verification("".to_string());
        assert_eq!(empty.char_count(), 0);
    }

    #[test]
    fn test_for_verification_normalizes_like_new() {
        // NFKC: fullwidth "ABC123" folds to ASCII; both paths must agree
        let stored = ClearTextPassword::new("ＡＢＣ１２３ab!?".to_string()).unwrap();
        let hashed = stored.hash(None).unwrap();

        let submitted = ClearTextPassword::for_verification("ABC123ab!?".to_string());
        assert!(hashed.verify(&submitted, None));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong = ClearTextPassword::new_unchecked("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_pepper_must_match() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        let phc_string = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify(&password, None));
        assert!(!restored.needs_rehash());
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new_unchecked("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }

    #[test]
    fn test_hex_encode_upper() {
        assert_eq!(hex_encode_upper(&[0xab, 0xcd, 0xef]), "ABCDEF");
    }
}
