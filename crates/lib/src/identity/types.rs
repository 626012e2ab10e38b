//! Data types for identity resolution

use serde::{Deserialize, Serialize};

use crate::auth::SessionIdentity;

/// Snapshot of the signed-in user's profile fields.
///
/// Built from a [`SessionIdentity`] at resolution time. Any field other than
/// the id may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub user_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserDetails {
    /// Create details with only the user id set.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            display_name: None,
            avatar_url: None,
        }
    }

    /// Set the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl From<&SessionIdentity> for UserDetails {
    fn from(session: &SessionIdentity) -> Self {
        Self {
            user_id: session.id.clone(),
            email: session.email.clone(),
            display_name: session.display_name.clone(),
            avatar_url: session.avatar_url.clone(),
        }
    }
}
