//! Cookie handling
//!
//! Builds and parses `Cookie` / `Set-Cookie` headers without pulling in
//! a full cookie jar. The session layer only ever deals with one named
//! cookie, so a small string builder is all that is needed.

use axum::http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes of a cookie the server issues
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    /// `None` issues a session cookie that dies with the browser
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Render a `Set-Cookie` value carrying `value`
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut parts = vec![format!("{}={}", self.name, value)];

        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));
        parts.push(format!("Path={}", self.path));
        if let Some(max_age) = self.max_age_secs {
            parts.push(format!("Max-Age={max_age}"));
        }

        parts.join("; ")
    }

    /// Render a `Set-Cookie` value that clears the cookie.
    ///
    /// Browsers only clear a cookie when the attributes match the one
    /// that was set, so this repeats them and adds an epoch `Expires`
    /// for clients that ignore `Max-Age`.
    pub fn build_delete_cookie(&self) -> String {
        let mut parts = vec![format!("{}=", self.name)];

        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));
        parts.push(format!("Path={}", self.path));
        parts.push("Max-Age=0".to_string());
        parts.push("Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string());

        parts.join("; ")
    }
}

/// Find a cookie by name in the request's `Cookie` header
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

/// `Set-Cookie` header value carrying `value`
pub fn set_cookie_header(config: &CookieConfig, value: &str) -> HeaderValue {
    HeaderValue::from_str(&config.build_set_cookie(value))
        .unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// `Set-Cookie` header value that deletes the cookie
pub fn delete_cookie_header(config: &CookieConfig) -> HeaderValue {
    HeaderValue::from_str(&config.build_delete_cookie())
        .unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(same_site: SameSite) -> CookieConfig {
        CookieConfig {
            name: "test".to_string(),
            secure: true,
            http_only: true,
            same_site,
            path: "/api".to_string(),
            max_age_secs: Some(3600),
        }
    }

    #[test]
    fn test_set_cookie_carries_all_attributes() {
        let cookie = config(SameSite::Lax).build_set_cookie("value123");
        assert_eq!(
            cookie,
            "test=value123; HttpOnly; Secure; SameSite=Lax; Path=/api; Max-Age=3600"
        );
    }

    #[test]
    fn test_session_cookie_has_no_max_age() {
        let mut cfg = config(SameSite::Lax);
        cfg.max_age_secs = None;

        let cookie = cfg.build_set_cookie("v");
        assert!(!cookie.contains("Max-Age"));
    }

    #[test]
    fn test_delete_cookie_matches_attributes() {
        let cookie = config(SameSite::Strict).build_delete_cookie();
        assert!(cookie.starts_with("test="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/api"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; session=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "session"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }
}
