//! Session types handed out by auth providers.

use serde::{Deserialize, Serialize};

/// The live, provider-issued identity of the signed-in user.
///
/// Field names use camelCase on the wire so session files line up with the
/// claim names the provider emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    /// Unique user id assigned by the provider
    pub id: String,
    /// Whether this is an anonymous (guest) session
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl SessionIdentity {
    /// Create a signed-in (non-anonymous) session with only an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_anonymous: false,
            email: None,
            display_name: None,
            avatar_url: None,
        }
    }

    /// Create an anonymous session.
    #[must_use]
    pub fn anonymous(id: impl Into<String>) -> Self {
        Self {
            is_anonymous: true,
            ..Self::new(id)
        }
    }

    /// Set the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the avatar URL.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}
