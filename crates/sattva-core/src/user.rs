//! User identity and preference domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Presentation theme. Two states, no intermediate transitions.
///
/// The active theme is derived from the current user's stored preference,
/// or [`Theme::Light`] when nobody is logged in. Applying a theme flips a
/// single boolean flag on the rendering root; re-applying the current
/// state is a no-op.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// True when this theme sets the dark presentation flag.
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Per-user preferences. Currently only the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
}

/// User identity record.
///
/// Passwords are stored and compared in plaintext. This mirrors the
/// observed behavior the product was specified against; it is flagged as
/// insecure in DESIGN.md and must not be treated as a reference for
/// credential handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque, stable identifier.
    pub id: String,
    pub name: String,
    /// Unique within the user set (case-sensitive exact match).
    pub email: String,
    pub password: String,
    pub preferences: Preferences,
}

impl User {
    /// Creates a new user with a fresh id and the default (light) theme.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            preferences: Preferences::default(),
        }
    }

    /// The user's preferred theme.
    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    /// First word of the display name, used for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults_to_light_theme() {
        let user = User::new("Asha Rao", "asha@example.com", "secret");
        assert_eq!(user.theme(), Theme::Light);
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = User::new("A", "a@example.com", "pw");
        let b = User::new("B", "b@example.com", "pw");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_theme_string_forms() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn test_first_name() {
        let user = User::new("Asha Rao", "asha@example.com", "secret");
        assert_eq!(user.first_name(), "Asha");
    }
}
