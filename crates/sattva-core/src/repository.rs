//! Repository traits implemented by the infrastructure crate.
//!
//! Repositories are synchronous: the backing store is local files, and
//! only assistant calls are allowed to suspend. Implementations treat a
//! corrupt stored value as absent (logging it) so corruption never
//! escapes as a session-ending failure; genuine write failures are
//! surfaced as errors.

use crate::error::Result;
use crate::mood::MoodEntry;
use crate::quote::DailyQuote;
use crate::user::User;

/// Persistence for the user collection.
pub trait UserRepository: Send + Sync {
    /// The full user set, in insertion order. Missing or corrupt data
    /// loads as an empty collection.
    fn load_all(&self) -> Result<Vec<User>>;

    /// Replaces the persisted user set (write-through).
    fn save_all(&self, users: &[User]) -> Result<()>;
}

/// Persistence for the current-user pointer.
pub trait SessionRepository: Send + Sync {
    /// The persisted user id, if a session exists.
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, user_id: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// Persistence for the mood-entry collection.
pub trait MoodRepository: Send + Sync {
    /// The persisted collection in insertion order, or `None` when no
    /// collection exists yet (first run, or an unreadable blob). The
    /// distinction drives first-run seeding.
    fn load_all(&self) -> Result<Option<Vec<MoodEntry>>>;

    /// Replaces the persisted collection (write-through).
    fn save_all(&self, entries: &[MoodEntry]) -> Result<()>;
}

/// Persistence for the cached daily quote.
pub trait QuoteRepository: Send + Sync {
    fn load(&self) -> Result<Option<DailyQuote>>;

    fn save(&self, quote: &DailyQuote) -> Result<()>;
}
