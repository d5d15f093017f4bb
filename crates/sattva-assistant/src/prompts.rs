//! Prompt construction for the assistant calls.

use sattva_core::mood::{MoodEntry, recent};

/// System instruction sent alongside every chat request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a warm, empathetic, and supportive AI companion for a mental health journaling app.
Your goal is to provide supportive listening, helpful information about mental health, and suggest healthy coping mechanisms.
You are NOT a doctor or a licensed therapist. If a user expresses severe distress or thoughts of self-harm, gently and firmly provide resources for emergency hotlines and professional help.
Keep your responses concise, comforting, and conversational.";

/// Prompt for the structured daily-quote call.
pub const QUOTE_PROMPT: &str = "Generate a short, powerful, and calming inspirational quote \
for a mental health app. Focus on themes of peace, resilience, or mindfulness. \
Include the author's name.";

/// How many trailing entries feed the insight prompt.
pub const INSIGHT_WINDOW: usize = 5;

/// Builds the insight prompt over the trailing window of entries.
pub fn insight_prompt(entries: &[MoodEntry]) -> String {
    let history: Vec<String> = recent(entries, INSIGHT_WINDOW)
        .iter()
        .map(|entry| {
            format!(
                "Date: {}, Mood: {}, Stress: {}/5, Note: {}",
                entry.recorded_at().format("%Y-%m-%d"),
                entry.mood,
                entry.stress_level,
                entry.note
            )
        })
        .collect();

    format!(
        "Based on my recent mood logs, give me a short, 2-sentence empathetic insight and \
         one small actionable tip for my mental well-being. Keep it friendly and supportive.\n\n\
         Logs:\n{}",
        history.join("\n")
    )
}
