//! The closed set of views and the navigation state.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Every view the application can display.
///
/// Rendering matches on this enum exhaustively, so adding or removing a
/// view is a compile-time-checked change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    LogMood,
    History,
    Chat,
    Explore,
    Meditate,
    Resources,
    Profile,
}

impl View {
    /// Short label used in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::LogMood => "Log Mood",
            View::History => "History",
            View::Chat => "AI Buddy",
            View::Explore => "Explore",
            View::Meditate => "Breathe",
            View::Resources => "Resources",
            View::Profile => "Profile",
        }
    }

    /// All views in navigation order.
    pub fn all() -> Vec<View> {
        View::iter().collect()
    }
}

/// The entire navigation state: which view is currently displayed.
///
/// No guards, no history stack, no deep-linking. The router always starts
/// at [`View::Home`] and is not persisted across restarts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Router {
    current: View,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Switches to the given view.
    pub fn navigate(&mut self, view: View) {
        self.current = view;
    }

    /// Returns to the default view. Used after a successful mood
    /// submission and on logout.
    pub fn go_home(&mut self) {
        self.current = View::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_starts_at_home() {
        assert_eq!(Router::new().current(), View::Home);
    }

    #[test]
    fn test_navigate_and_return_home() {
        let mut router = Router::new();
        router.navigate(View::Chat);
        assert_eq!(router.current(), View::Chat);
        router.go_home();
        assert_eq!(router.current(), View::Home);
    }

    #[test]
    fn test_view_names_parse() {
        assert_eq!("log-mood".parse::<View>().unwrap(), View::LogMood);
        assert_eq!(View::Resources.to_string(), "resources");
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_all_views_listed_once() {
        let all = View::all();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], View::Home);
    }
}
