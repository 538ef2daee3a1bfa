use time::macros::date;

use super::*;

fn entry(id: i64, author: &str, text: &str) -> FeedbackEntry {
    FeedbackEntry { id, author: author.into(), text: text.into(), date: date!(2024-11-15) }
}

// =============================================================
// Escaping
// =============================================================

#[test]
fn escapes_markup_characters() {
    assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
}

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(escape_html("Maria González"), "Maria González");
}

#[test]
fn script_in_text_is_not_live() {
    let html = render_list(&[entry(1, "Eve", "<script>x</script>")]);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
}

#[test]
fn markup_in_author_is_escaped() {
    let html = render_list(&[entry(1, "<img src=x onerror=alert(1)>", "ok")]);
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn ampersand_is_escaped_once() {
    let html = render_list(&[entry(1, "Tom & Jerry", "a &amp; b")]);
    assert!(html.contains("Tom &amp; Jerry"));
    assert!(html.contains("a &amp;amp; b"));
}

// =============================================================
// Layout
// =============================================================

#[test]
fn empty_list_renders_placeholder() {
    let html = render_list(&[]);
    assert!(html.contains(EMPTY_MESSAGE));
    assert!(!html.contains("feedback-card"));
}

#[test]
fn renders_one_card_per_entry_in_order() {
    let html = render_list(&[entry(2, "Newer", "b"), entry(1, "Older", "a")]);
    assert_eq!(html.matches("class=\"feedback-card\"").count(), 2);
    let newer = html.find("Newer").unwrap();
    let older = html.find("Older").unwrap();
    assert!(newer < older);
}

#[test]
fn card_has_wired_edit_and_delete_buttons() {
    let html = render_list(&[entry(1_731_628_800_001, "Ana", "hi")]);
    assert!(html.contains("data-action=\"edit\" data-id=\"1731628800001\""));
    assert!(html.contains("data-action=\"delete\" data-id=\"1731628800001\""));
}

#[test]
fn card_shows_quoted_text_and_formatted_date() {
    let html = render_list(&[entry(1, "Ana", "Great day")]);
    assert!(html.contains("\"Great day\""));
    assert!(html.contains("November 15, 2024"));
}

// =============================================================
// Dates
// =============================================================

#[test]
fn format_date_long_form() {
    assert_eq!(format_date(date!(2024-10-28)), "October 28, 2024");
    assert_eq!(format_date(date!(2025-01-05)), "January 5, 2025");
}
