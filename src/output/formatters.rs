//! Formatting utilities for solution text

use crate::api::Notification;
use crate::core::{PuzzleRecord, ResolvedDate};

/// Marker appended to the notification body
pub const NOTIFICATION_EMOJI: &str = "🔠";

/// Tags sent with every notification
pub const NOTIFICATION_TAGS: &str = "book,wordle,";

/// Render a date as e.g. `15 June 2024`
#[must_use]
pub fn long_date(date: &ResolvedDate) -> String {
    date.naive().format("%d %B %Y").to_string()
}

/// The line printed, saved and used as the notification title stem
#[must_use]
pub fn solution_line(date: &ResolvedDate, record: &PuzzleRecord) -> String {
    format!("{}: {}", solution_title(date), record.solution)
}

/// `Wordle Solution (<long date>)`
#[must_use]
pub fn solution_title(date: &ResolvedDate) -> String {
    format!("Wordle Solution ({})", long_date(date))
}

/// File name a date's solution is saved under
#[must_use]
pub fn solution_file_name(date: &ResolvedDate) -> String {
    format!("Wordle_Solution_{}.txt", date.iso())
}

/// Build the push message for a solved day
#[must_use]
pub fn notification_for(date: &ResolvedDate, record: &PuzzleRecord) -> Notification {
    Notification {
        title: solution_title(date),
        tags: NOTIFICATION_TAGS.to_string(),
        body: format!("Wordle of the Day: {} {NOTIFICATION_EMOJI}", record.solution),
    }
}
