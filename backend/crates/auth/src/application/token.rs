//! Session Token Signing
//!
//! The session cookie value is `{session_id}.{signature}` where the
//! signature is HMAC-SHA256 over the raw UUID bytes, base64url encoded
//! without padding. Verification recomputes the MAC, so a token forged
//! or tampered with client-side never reaches the session store.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Sign a session id into a cookie-ready token
pub fn sign_session_id(secret: &[u8; 32], session_id: Uuid) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a token and extract the session id
///
/// Returns `None` for malformed tokens, bad signatures, or signatures
/// made with a different secret. The MAC comparison is constant-time.
pub fn verify_session_token(secret: &[u8; 32], token: &str) -> Option<Uuid> {
    let (id_part, sig_part) = token.split_once('.')?;
    let session_id = Uuid::parse_str(id_part).ok()?;
    let signature = URL_SAFE_NO_PAD.decode(sig_part).ok()?;

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    mac.verify_slice(&signature).ok()?;

    Some(session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_sign_and_verify_roundtrip() {
        let session_id = Uuid::new_v4();
        let token = sign_session_id(&SECRET, session_id);

        assert_eq!(verify_session_token(&SECRET, &token), Some(session_id));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let session_id = Uuid::new_v4();
        let token = sign_session_id(&SECRET, session_id);

        let other_secret = [8u8; 32];
        assert_eq!(verify_session_token(&other_secret, &token), None);
    }

    #[test]
    fn test_tampered_id_rejected() {
        let token = sign_session_id(&SECRET, Uuid::new_v4());
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), sig);

        assert_eq!(verify_session_token(&SECRET, &forged), None);
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let session_id = Uuid::new_v4();
        let token = sign_session_id(&SECRET, session_id);
        let (id, _) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", id, URL_SAFE_NO_PAD.encode(b"forged-signature"));

        assert_eq!(verify_session_token(&SECRET, &forged), None);
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert_eq!(verify_session_token(&SECRET, ""), None);
        assert_eq!(verify_session_token(&SECRET, "no-dot-here"), None);
        assert_eq!(verify_session_token(&SECRET, "not-a-uuid.c2ln"), None);
        assert_eq!(
            verify_session_token(&SECRET, &format!("{}.!!!", Uuid::new_v4())),
            None
        );
    }
}
