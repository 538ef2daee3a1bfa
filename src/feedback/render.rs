//! HTML for the feedback grid.
//!
//! The host assigns the returned markup to the grid's `innerHTML`, so every
//! stored string goes through [`escape_html`]. Buttons carry `data-action`
//! and `data-id` attributes; the host routes clicks through one delegated
//! listener instead of inline handlers.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use time::Date;

use crate::feedback::entry::FeedbackEntry;

pub const EMPTY_MESSAGE: &str = "No feedback yet. Be the first to share your experience!";

pub const ACTION_EDIT: &str = "edit";
pub const ACTION_DELETE: &str = "delete";

/// Render the whole grid, newest first (the collection's order).
#[must_use]
pub fn render_list(entries: &[FeedbackEntry]) -> String {
    if entries.is_empty() {
        return format!(
            "<p style=\"text-align: center; color: var(--text-secondary); grid-column: 1 / -1; font-size: 18px;\">{EMPTY_MESSAGE}</p>"
        );
    }
    entries.iter().fold(String::new(), |mut html, entry| {
        write_card(&mut html, entry);
        html
    })
}

fn write_card(out: &mut String, entry: &FeedbackEntry) {
    if write!(
        out,
        concat!(
            "<div class=\"feedback-card\">",
            "<p class=\"feedback-text\">\"{text}\"</p>",
            "<div class=\"feedback-meta\"><div>",
            "<div class=\"feedback-author\">{author}</div>",
            "<div class=\"feedback-date\">{date}</div>",
            "</div></div>",
            "<div class=\"feedback-actions\">",
            "<button class=\"btn-edit\" data-action=\"{edit}\" data-id=\"{id}\">Edit</button>",
            "<button class=\"btn-delete\" data-action=\"{delete}\" data-id=\"{id}\">Delete</button>",
            "</div></div>",
        ),
        text = escape_html(&entry.text),
        author = escape_html(&entry.author),
        date = format_date(entry.date),
        edit = ACTION_EDIT,
        delete = ACTION_DELETE,
        id = entry.id,
    )
    .is_err()
    {
        log::error!("failed to render feedback card {}", entry.id);
    }
}

/// Long-form US date, e.g. `November 15, 2024`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
