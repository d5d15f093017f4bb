//! Mood observation domain models and chart aggregates.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use uuid::Uuid;

/// Self-reported mood, from best to worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    Excellent,
    Good,
    Neutral,
    Fair,
    Poor,
}

impl Mood {
    /// Numeric chart value: excellent=5 down to poor=1.
    pub fn score(self) -> u8 {
        match self {
            Mood::Excellent => 5,
            Mood::Good => 4,
            Mood::Neutral => 3,
            Mood::Fair => 2,
            Mood::Poor => 1,
        }
    }

    /// Human label for rendering.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Excellent => "Excellent",
            Mood::Good => "Good",
            Mood::Neutral => "Neutral",
            Mood::Fair => "Fair",
            Mood::Poor => "Poor",
        }
    }

    /// All moods in picker order (best first).
    pub fn all() -> Vec<Mood> {
        Mood::iter().collect()
    }

    /// Emoji used next to the label in mood pickers and history rows.
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Excellent => "🤩",
            Mood::Good => "😊",
            Mood::Neutral => "😐",
            Mood::Fair => "😔",
            Mood::Poor => "😢",
        }
    }
}

/// Chart value for a raw mood label; unrecognized labels map to 0.
///
/// Persisted data may carry labels written by older or foreign builds, so
/// charting never rejects an entry over its mood string.
pub fn chart_value(label: &str) -> u8 {
    label.parse::<Mood>().map(Mood::score).unwrap_or(0)
}

/// Inclusive bounds for a stress self-report.
pub const STRESS_MIN: u8 = 1;
pub const STRESS_MAX: u8 = 5;

/// One timestamped self-report of emotional state and stress level.
///
/// Entries are append-only observations; no entry is mutated or deleted
/// once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique, time-derived identifier (UUID v7).
    pub id: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub mood: Mood,
    /// 1..=5 inclusive.
    pub stress_level: u8,
    /// Free text, may be empty.
    pub note: String,
}

impl MoodEntry {
    /// Creates an entry stamped with the current time and a fresh id.
    pub fn now(mood: Mood, stress_level: u8, note: impl Into<String>) -> Self {
        Self::at(Utc::now().timestamp_millis(), mood, stress_level, note)
    }

    /// Creates an entry at an explicit timestamp. Used by the first-run
    /// seed and by tests.
    pub fn at(timestamp: i64, mood: Mood, stress_level: u8, note: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            timestamp,
            mood,
            stress_level,
            note: note.into(),
        }
    }

    /// Local wall-clock time of the observation.
    pub fn recorded_at(&self) -> DateTime<Local> {
        Local
            .timestamp_millis_opt(self.timestamp)
            .single()
            .unwrap_or_else(Local::now)
    }
}

/// Arithmetic mean of stress levels, rounded to one decimal place.
/// Returns 0.0 for an empty collection.
pub fn average_stress(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: u32 = entries.iter().map(|e| u32::from(e.stress_level)).sum();
    let mean = f64::from(sum) / entries.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Trailing window of the last `n` entries in insertion order.
/// Returns the whole slice when fewer than `n` exist.
pub fn recent(entries: &[MoodEntry], n: usize) -> &[MoodEntry] {
    let start = entries.len().saturating_sub(n);
    &entries[start..]
}
