#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::date;

/// Feedback identifier. Derived from the creation timestamp in milliseconds.
pub type EntryId = i64;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// One feedback record as stored and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: EntryId,
    pub author: String,
    pub text: String,
    /// Creation date, or the date of the most recent edit.
    #[serde(with = "iso_date")]
    pub date: Date,
}

/// Sample entries, newest first.
const SAMPLES: [(&str, &str, Date); 4] = [
    (
        "Maria González",
        "Participating in Robeurope was an incredible experience! My students learned so much about teamwork and problem-solving. The organization was impeccable.",
        date!(2024-11-15),
    ),
    (
        "Thomas Schmidt",
        "As a teacher, I've seen my students' passion for technology grow exponentially. Robeurope provides the perfect platform for young innovators.",
        date!(2024-11-10),
    ),
    (
        "Sophie Dubois",
        "The competition format is excellent. It challenges students while maintaining a supportive and educational atmosphere. Highly recommended!",
        date!(2024-11-05),
    ),
    (
        "Alessandro Rossi",
        "Our school has participated for three years now. Each year, the event gets better. The impact on our students' STEM skills is remarkable.",
        date!(2024-10-28),
    ),
];

/// The sample entries installed into an empty board, with ids `now + 1..=4`.
#[must_use]
pub fn default_entries(now_millis: i64) -> Vec<FeedbackEntry> {
    (1..)
        .zip(SAMPLES)
        .map(|(offset, (author, text, date))| FeedbackEntry {
            id: now_millis + offset,
            author: author.to_owned(),
            text: text.to_owned(),
            date,
        })
        .collect()
}
