//! Explicit session context.
//!
//! The current user is not an ambient singleton: this context object is
//! created once at startup (loaded from the store), passed to the
//! components that need it, and cleared on logout.

use crate::user::{Theme, User};

/// The single logged-in identity the application currently acts as.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current: Option<User>,
}

impl SessionContext {
    /// A context with nobody logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context acting as the given user.
    pub fn authenticated(user: User) -> Self {
        Self {
            current: Some(user),
        }
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Replaces the current user (login, registration, profile update).
    pub fn set(&mut self, user: User) {
        self.current = Some(user);
    }

    /// Teardown on logout. The user collection is untouched.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The derived presentation theme: the current user's preference, or
    /// light when nobody is logged in.
    pub fn theme(&self) -> Theme {
        self.current
            .as_ref()
            .map(|u| u.theme())
            .unwrap_or_default()
    }
}
