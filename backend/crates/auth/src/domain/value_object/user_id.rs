//! User ID Value Object

use kernel::id::Id;

/// Marker type for user IDs
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserMarker;

/// Type-safe user ID
pub type UserId = Id<UserMarker>;
