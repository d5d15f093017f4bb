//! Session and authentication use-cases.
//!
//! Operates on an explicit [`SessionContext`] rather than ambient global
//! state: the context is loaded from the store once at startup and
//! cleared on logout. Every mutation is written through to the store
//! before the context is updated, so a validation failure never leaves
//! partial state behind.

use std::sync::Arc;

use sattva_core::repository::{SessionRepository, UserRepository};
use sattva_core::session::SessionContext;
use sattva_core::user::{Theme, User};
use sattva_core::{Result, SattvaError};

/// Fields that can be merged into the current user's profile.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub theme: Option<Theme>,
}

/// Registration, login, logout, and profile updates over the stored
/// user collection and the single current-user pointer.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    session: Arc<dyn SessionRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, session: Arc<dyn SessionRepository>) -> Self {
        Self { users, session }
    }

    /// Loads the persisted session at startup.
    ///
    /// A pointer referencing a user that no longer exists in the user
    /// set is treated as no session: it is logged and cleared rather
    /// than crashing or acting as a ghost identity.
    pub fn load_session(&self) -> Result<SessionContext> {
        let Some(user_id) = self.session.load()? else {
            return Ok(SessionContext::anonymous());
        };

        let users = self.users.load_all()?;
        match users.into_iter().find(|u| u.id == user_id) {
            Some(user) => Ok(SessionContext::authenticated(user)),
            None => {
                tracing::warn!(%user_id, "session pointer references a missing user; clearing");
                self.session.clear()?;
                Ok(SessionContext::anonymous())
            }
        }
    }

    /// Creates a new account and signs it in.
    ///
    /// Fails with a validation error when the email is already present
    /// (case-sensitive exact match); the user collection is unchanged in
    /// that case.
    pub fn register(
        &self,
        ctx: &mut SessionContext,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(SattvaError::validation(
                "Name, email, and password are all required.",
            ));
        }

        let mut users = self.users.load_all()?;
        if users.iter().any(|u| u.email == email) {
            return Err(SattvaError::validation("This email is already registered."));
        }

        let user = User::new(name, email, password);
        users.push(user.clone());
        self.users.save_all(&users)?;
        self.session.save(&user.id)?;
        ctx.set(user.clone());

        tracing::info!(user_id = %user.id, "registered new user");
        Ok(user)
    }

    /// Signs in on an exact email and password match.
    ///
    /// The error is identical whether the email or the password was
    /// wrong.
    pub fn login(&self, ctx: &mut SessionContext, email: &str, password: &str) -> Result<User> {
        let users = self.users.load_all()?;
        let user = users
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(SattvaError::InvalidCredentials)?;

        self.session.save(&user.id)?;
        ctx.set(user.clone());
        Ok(user)
    }

    /// Clears the session pointer. The user collection is untouched.
    pub fn logout(&self, ctx: &mut SessionContext) -> Result<()> {
        self.session.clear()?;
        ctx.clear();
        Ok(())
    }

    /// Merges the patch into the current user and persists the merged
    /// record into both the user collection and the session.
    pub fn update_profile(&self, ctx: &mut SessionContext, patch: ProfilePatch) -> Result<User> {
        let current = ctx
            .current()
            .ok_or_else(|| SattvaError::validation("No user is signed in."))?;

        let mut updated = current.clone();
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(email) = patch.email {
            updated.email = email;
        }
        if let Some(password) = patch.password {
            updated.password = password;
        }
        if let Some(theme) = patch.theme {
            updated.preferences.theme = theme;
        }

        let mut users = self.users.load_all()?;
        if users
            .iter()
            .any(|u| u.id != updated.id && u.email == updated.email)
        {
            return Err(SattvaError::validation("This email is already registered."));
        }

        let slot = users
            .iter_mut()
            .find(|u| u.id == updated.id)
            .ok_or_else(|| SattvaError::not_found("user", updated.id.clone()))?;
        *slot = updated.clone();

        self.users.save_all(&users)?;
        self.session.save(&updated.id)?;
        ctx.set(updated.clone());

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sattva_infrastructure::{JsonSessionRepository, JsonStore, JsonUserRepository};
    use tempfile::TempDir;

    fn service() -> (TempDir, AuthService) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());
        let service = AuthService::new(
            Arc::new(JsonUserRepository::new(store.clone())),
            Arc::new(JsonSessionRepository::new(store)),
        );
        (dir, service)
    }

    #[test]
    fn test_register_assigns_unique_ids() {
        let (_dir, auth) = service();
        let mut ctx = SessionContext::anonymous();

        let a = auth.register(&mut ctx, "Asha", "asha@example.com", "pw").unwrap();
        let b = auth.register(&mut ctx, "Ravi", "ravi@example.com", "pw").unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(ctx.current().unwrap().id, b.id);
    }

    #[test]
    fn test_register_duplicate_email_leaves_collection_unchanged() {
        let (_dir, auth) = service();
        let mut ctx = SessionContext::anonymous();
        auth.register(&mut ctx, "Asha", "asha@example.com", "pw").unwrap();

        let before = auth.users.load_all().unwrap();
        let err = auth
            .register(&mut ctx, "Imposter", "asha@example.com", "other")
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(auth.users.load_all().unwrap(), before);
    }

    #[test]
    fn test_login_requires_exact_match_and_fails_identically() {
        let (_dir, auth) = service();
        let mut ctx = SessionContext::anonymous();
        auth.register(&mut ctx, "Asha", "asha@example.com", "pw").unwrap();
        auth.logout(&mut ctx).unwrap();

        assert!(auth.login(&mut ctx, "asha@example.com", "pw").is_ok());
        auth.logout(&mut ctx).unwrap();

        let wrong_password = auth
            .login(&mut ctx, "asha@example.com", "nope")
            .unwrap_err();
        let wrong_email = auth.login(&mut ctx, "nobody@example.com", "pw").unwrap_err();

        // Same variant, same message: the cause is not disclosed.
        assert!(wrong_password.is_auth());
        assert!(wrong_email.is_auth());
        assert_eq!(wrong_password.to_string(), wrong_email.to_string());
    }

    #[test]
    fn test_logout_clears_pointer_only() {
        let (_dir, auth) = service();
        let mut ctx = SessionContext::anonymous();
        auth.register(&mut ctx, "Asha", "asha@example.com", "pw").unwrap();

        auth.logout(&mut ctx).unwrap();
        assert!(!ctx.is_authenticated());
        assert!(auth.session.load().unwrap().is_none());
        assert_eq!(auth.users.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_theme_round_trip_across_sessions() {
        let (_dir, auth) = service();
        let mut ctx = SessionContext::anonymous();

        auth.register(&mut ctx, "Asha", "asha@example.com", "pw").unwrap();
        auth.update_profile(
            &mut ctx,
            ProfilePatch {
                theme: Some(Theme::Dark),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(ctx.theme(), Theme::Dark);

        // A different, never-touched user keeps their own preference.
        auth.logout(&mut ctx).unwrap();
        assert_eq!(ctx.theme(), Theme::Light);
        auth.register(&mut ctx, "Ravi", "ravi@example.com", "pw").unwrap();
        assert_eq!(ctx.theme(), Theme::Light);

        // And the first user's dark preference survived.
        auth.logout(&mut ctx).unwrap();
        auth.login(&mut ctx, "asha@example.com", "pw").unwrap();
        assert_eq!(ctx.theme(), Theme::Dark);
    }

    #[test]
    fn test_update_profile_persists_to_collection_and_session() {
        let (_dir, auth) = service();
        let mut ctx = SessionContext::anonymous();
        let user = auth.register(&mut ctx, "Asha", "asha@example.com", "pw").unwrap();

        auth.update_profile(
            &mut ctx,
            ProfilePatch {
                name: Some("Asha Rao".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let stored = auth.users.load_all().unwrap();
        let record = stored.iter().find(|u| u.id == user.id).unwrap();
        assert_eq!(record.name, "Asha Rao");

        let reloaded = auth.load_session().unwrap();
        assert_eq!(reloaded.current().unwrap().name, "Asha Rao");
    }

    #[test]
    fn test_update_profile_rejects_colliding_email() {
        let (_dir, auth) = service();
        let mut ctx = SessionContext::anonymous();
        auth.register(&mut ctx, "Asha", "asha@example.com", "pw").unwrap();
        auth.register(&mut ctx, "Ravi", "ravi@example.com", "pw").unwrap();

        let err = auth
            .update_profile(
                &mut ctx,
                ProfilePatch {
                    email: Some("asha@example.com".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        // No partial state change.
        assert_eq!(ctx.current().unwrap().email, "ravi@example.com");
    }

    #[test]
    fn test_dangling_session_pointer_loads_as_anonymous() {
        let (_dir, auth) = service();
        auth.session.save("ghost").unwrap();

        let ctx = auth.load_session().unwrap();
        assert!(!ctx.is_authenticated());
        // The pointer was reconciled away.
        assert!(auth.session.load().unwrap().is_none());
    }
}
