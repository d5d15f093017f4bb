//! Mood-entry collection DTOs.

use crate::migration::MigrationChain;
use semver::Version;
use serde::{Deserialize, Serialize};

use sattva_core::mood::{Mood, MoodEntry};

/// Latest mood-log schema version.
pub const MOOD_LOG_VERSION: &str = "1.0.0";

/// Mood entry V1.0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntryV1 {
    pub id: String,
    pub timestamp: i64,
    pub mood: Mood,
    pub stress_level: u8,
    #[serde(default)]
    pub note: String,
}

/// Mood collection envelope V1.0.0. Entries are stored in insertion
/// order, which is the canonical chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodLogV1 {
    pub schema_version: String,
    pub entries: Vec<MoodEntryV1>,
}

/// Type alias for the latest mood-log envelope.
pub type MoodLogDto = MoodLogV1;

impl MoodLogV1 {
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        Self {
            schema_version: MOOD_LOG_VERSION.to_string(),
            entries: entries.iter().map(MoodEntryV1::from).collect(),
        }
    }

    pub fn into_entries(self) -> Vec<MoodEntry> {
        self.entries
            .into_iter()
            .map(MoodEntryV1::into_domain)
            .collect()
    }
}

impl From<&MoodEntry> for MoodEntryV1 {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            id: entry.id.clone(),
            timestamp: entry.timestamp,
            mood: entry.mood,
            stress_level: entry.stress_level,
            note: entry.note.clone(),
        }
    }
}

impl MoodEntryV1 {
    pub fn into_domain(self) -> MoodEntry {
        MoodEntry {
            id: self.id,
            timestamp: self.timestamp,
            mood: self.mood,
            stress_level: self.stress_level,
            note: self.note,
        }
    }
}

/// The migration chain for the mood log. One schema version so far.
pub fn mood_log_chain() -> MigrationChain {
    MigrationChain::new("mood_log", Version::new(1, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let entries = vec![
            MoodEntry::at(1_000, Mood::Neutral, 3, "Feeling a bit tired today."),
            MoodEntry::at(2_000, Mood::Good, 2, ""),
        ];

        let dto = MoodLogDto::from_entries(&entries);
        assert_eq!(dto.schema_version, MOOD_LOG_VERSION);

        let back = dto.into_entries();
        assert_eq!(back, entries);
    }

    #[test]
    fn test_current_version_passes_chain_untouched() {
        let dto = MoodLogDto::from_entries(&[]);
        let value = serde_json::to_value(&dto).unwrap();
        let upgraded = mood_log_chain().upgrade(value.clone()).unwrap();
        assert_eq!(upgraded, value);
    }
}
