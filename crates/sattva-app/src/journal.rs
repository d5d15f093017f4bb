//! Mood log use-cases.
//!
//! The service holds the in-memory working copy of the append-only
//! collection; every mutation is written through to the store before it
//! returns. Entries are never mutated or deleted once created.

use std::sync::Arc;

use chrono::{Duration, Utc};
use sattva_core::mood::{self, Mood, MoodEntry, STRESS_MAX, STRESS_MIN};
use sattva_core::repository::MoodRepository;
use sattva_core::{Result, SattvaError};

/// The fixed first-run seed: mood, stress, note, and age in days.
const SEED: [(Mood, u8, &str, i64); 4] = [
    (Mood::Neutral, 3, "Feeling a bit tired today.", 4),
    (Mood::Good, 2, "Productive day at work.", 3),
    (Mood::Excellent, 1, "Spent time with friends!", 2),
    (Mood::Fair, 4, "A bit stressed out.", 1),
];

/// Append-only mood log backed by the store.
pub struct JournalService {
    moods: Arc<dyn MoodRepository>,
    entries: Vec<MoodEntry>,
}

impl JournalService {
    pub fn new(moods: Arc<dyn MoodRepository>) -> Self {
        Self {
            moods,
            entries: Vec::new(),
        }
    }

    /// Adopts the persisted collection, or writes the deterministic
    /// four-entry example set when no collection exists yet. A corrupt
    /// collection counts as absent (the store already logged it).
    pub fn seed_if_empty(&mut self) -> Result<()> {
        match self.moods.load_all()? {
            Some(entries) => {
                self.entries = entries;
            }
            None => {
                let now = Utc::now();
                self.entries = SEED
                    .iter()
                    .map(|&(mood, stress, note, days_ago)| {
                        MoodEntry::at(
                            (now - Duration::days(days_ago)).timestamp_millis(),
                            mood,
                            stress,
                            note,
                        )
                    })
                    .collect();
                self.moods.save_all(&self.entries)?;
                tracing::info!("seeded mood log with {} example entries", self.entries.len());
            }
        }
        Ok(())
    }

    /// Appends a new observation stamped with the current time.
    ///
    /// After a successful call the caller navigates back to the home
    /// view.
    pub fn add_entry(&mut self, mood: Mood, stress_level: u8, note: &str) -> Result<MoodEntry> {
        if !(STRESS_MIN..=STRESS_MAX).contains(&stress_level) {
            return Err(SattvaError::validation(format!(
                "Stress level must be between {STRESS_MIN} and {STRESS_MAX}."
            )));
        }

        let entry = MoodEntry::now(mood, stress_level, note);
        self.entries.push(entry.clone());
        self.moods.save_all(&self.entries)?;
        Ok(entry)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// The trailing window of the last `n` entries in insertion order.
    pub fn recent(&self, n: usize) -> &[MoodEntry] {
        mood::recent(&self.entries, n)
    }

    /// Mean stress level over all entries, one decimal place.
    pub fn average_stress(&self) -> f64 {
        mood::average_stress(&self.entries)
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}
