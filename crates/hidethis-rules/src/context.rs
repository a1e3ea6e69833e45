//! Viewer context supplied by the host for rule evaluation.
//!
//! The context is a read-only snapshot of the requesting viewer. It is passed
//! explicitly to every evaluation call; nothing in this crate reads ambient or
//! global state.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Host-provided capability check, used instead of the static capability set
/// when the host resolves capabilities dynamically.
pub type CapabilityCheck = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Snapshot of the viewer a content block is being rendered for.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerContext {
    pub is_logged_in: bool,
    pub roles: HashSet<String>,
    pub user_id: String,
    pub username: String,
    pub user_email: String,
    /// Capabilities granted to the viewer. Ignored when `capability_check` is set.
    pub capabilities: HashSet<String>,
    #[serde(skip)]
    capability_check: Option<CapabilityCheck>,
}

impl fmt::Debug for ViewerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewerContext")
            .field("is_logged_in", &self.is_logged_in)
            .field("roles", &self.roles)
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("user_email", &self.user_email)
            .field("capabilities", &self.capabilities)
            .field("capability_check", &self.capability_check.is_some())
            .finish()
    }
}

impl ViewerContext {
    /// A viewer that is not logged in and holds no roles or capabilities.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A logged-in viewer with the given identity.
    pub fn logged_in(
        user_id: impl Into<String>,
        username: impl Into<String>,
        user_email: impl Into<String>,
    ) -> Self {
        Self {
            is_logged_in: true,
            user_id: user_id.into(),
            username: username.into(),
            user_email: user_email.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    /// Delegate capability checks to the host.
    pub fn with_capability_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.capability_check = Some(Arc::new(check));
        self
    }

    /// Whether the viewer holds `role`. Always false for a viewer without roles.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn has_capability(&self, capability: &str) -> bool {
        match &self.capability_check {
            Some(check) => check(capability),
            None => self.capabilities.contains(capability),
        }
    }
}
