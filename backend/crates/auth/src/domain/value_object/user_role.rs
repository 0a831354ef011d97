use serde::{Deserialize, Serialize};
use std::fmt;

/// Panel account role
///
/// The panel is single-tenant: `Admin` owns everything, `Editor` exists for
/// content-only accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    Admin = 0,
    #[default]
    Editor = 1,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Admin => "admin",
            Editor => "editor",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Resolve a role from its stored id. Unknown ids map to `None` rather
    /// than panicking; rows written by a newer schema must not take the
    /// process down.
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use UserRole::*;
        match id {
            0 => Some(Admin),
            1 => Some(Editor),
            _ => {
                tracing::error!("Invalid UserRole id: {}", id);
                None
            }
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "admin" => Some(Admin),
            "editor" => Some(Editor),
            _ => {
                tracing::error!("Invalid UserRole code: {}", code);
                None
            }
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
