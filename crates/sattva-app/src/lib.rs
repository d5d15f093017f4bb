pub mod auth;
pub mod dashboard;
pub mod journal;

pub use crate::auth::{AuthService, ProfilePatch};
pub use crate::dashboard::DashboardService;
pub use crate::journal::JournalService;

use std::sync::Arc;

use sattva_core::Result;
use sattva_core::assistant::Assistant;
use sattva_core::mood::{Mood, MoodEntry};
use sattva_core::session::SessionContext;
use sattva_core::view::Router;
use sattva_infrastructure::{
    JsonMoodRepository, JsonQuoteRepository, JsonSessionRepository, JsonStore, JsonUserRepository,
};

/// The assembled application: services, the explicit session context,
/// and the navigation state.
///
/// Construction is the load phase: the persisted session is read and
/// reconciled, and the mood log is adopted or seeded. The router always
/// starts at home regardless of what was open before the restart.
pub struct App {
    pub auth: AuthService,
    pub journal: JournalService,
    pub dashboard: DashboardService,
    pub assistant: Arc<dyn Assistant>,
    pub session: SessionContext,
    pub router: Router,
}

impl App {
    /// Wires every service over one store and loads initial state.
    pub fn new(store: JsonStore, assistant: Arc<dyn Assistant>) -> Result<Self> {
        let auth = AuthService::new(
            Arc::new(JsonUserRepository::new(store.clone())),
            Arc::new(JsonSessionRepository::new(store.clone())),
        );
        let mut journal = JournalService::new(Arc::new(JsonMoodRepository::new(store.clone())));
        journal.seed_if_empty()?;
        let dashboard = DashboardService::new(
            Arc::new(JsonQuoteRepository::new(store)),
            Arc::clone(&assistant),
        );

        let session = auth.load_session()?;

        Ok(Self {
            auth,
            journal,
            dashboard,
            assistant,
            session,
            router: Router::new(),
        })
    }

    /// Logs a mood and returns to the home view, as every successful
    /// submission does.
    pub fn log_mood(&mut self, mood: Mood, stress_level: u8, note: &str) -> Result<MoodEntry> {
        let entry = self.journal.add_entry(mood, stress_level, note)?;
        self.router.go_home();
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sattva_core::chat::ChatMessage;
    use sattva_core::quote::DailyQuote;
    use sattva_core::user::Theme;
    use sattva_core::view::View;
    use tempfile::TempDir;

    struct SilentAssistant;

    #[async_trait::async_trait]
    impl Assistant for SilentAssistant {
        async fn chat_reply(&self, _history: &[ChatMessage], _message: &str) -> String {
            String::new()
        }

        async fn daily_quote(&self) -> DailyQuote {
            DailyQuote::new("", "", chrono::Local::now().date_naive())
        }

        async fn mood_insight(&self, _entries: &[MoodEntry]) -> String {
            String::new()
        }
    }

    fn app(dir: &TempDir) -> App {
        let store = JsonStore::new(dir.path().to_path_buf());
        App::new(store, Arc::new(SilentAssistant)).unwrap()
    }

    #[test]
    fn test_first_start_is_anonymous_at_home_with_seed() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        assert!(!app.session.is_authenticated());
        assert_eq!(app.router.current(), View::Home);
        assert_eq!(app.journal.total(), 4);
    }

    #[test]
    fn test_log_mood_returns_home() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.router.navigate(View::LogMood);

        app.log_mood(Mood::Good, 2, "walked outside").unwrap();

        assert_eq!(app.router.current(), View::Home);
        assert_eq!(app.journal.total(), 5);
    }

    #[test]
    fn test_session_and_theme_survive_restart_but_view_does_not() {
        let dir = TempDir::new().unwrap();
        {
            let mut app = app(&dir);
            app.auth
                .register(&mut app.session, "Asha", "asha@example.com", "pw")
                .unwrap();
            app.auth
                .update_profile(
                    &mut app.session,
                    ProfilePatch {
                        theme: Some(Theme::Dark),
                        ..Default::default()
                    },
                )
                .unwrap();
            app.router.navigate(View::Chat);
        }

        // "Restart": a fresh App over the same store.
        let app = app(&dir);
        assert!(app.session.is_authenticated());
        assert_eq!(app.session.theme(), Theme::Dark);
        // Navigation state is not persisted.
        assert_eq!(app.router.current(), View::Home);
        // The seed ran once; the restart adopted it instead of reseeding.
        assert_eq!(app.journal.total(), 4);
    }
}
