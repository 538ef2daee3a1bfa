//! End-to-end feedback board sessions against in-memory storage.
//!
//! Each "page load" opens a fresh store over the storage left behind by the
//! previous one, the way a browser reload re-reads `localStorage`.

use robeurope_site::clock::FixedClock;
use robeurope_site::feedback::render::EMPTY_MESSAGE;
use robeurope_site::feedback::{
    ConfirmPrompt, FeedbackController, FeedbackEntry, FeedbackStore, FeedbackView, ModalForm, ModalState,
    STORAGE_KEY, SubmitOutcome,
};
use robeurope_site::notice::{Notice, NoticeKind};
use robeurope_site::storage::MemoryStorage;
use time::macros::date;

#[derive(Default)]
struct PageView {
    grid: String,
    modal: Option<ModalForm>,
    confirm: Option<ConfirmPrompt>,
    notices: Vec<Notice>,
}

impl FeedbackView for PageView {
    fn render_list(&mut self, html: &str) {
        html.clone_into(&mut self.grid);
    }
    fn show_modal(&mut self, form: &ModalForm) {
        self.modal = Some(form.clone());
    }
    fn hide_modal(&mut self) {
        self.modal = None;
    }
    fn show_confirm(&mut self, prompt: &ConfirmPrompt) {
        self.confirm = Some(*prompt);
    }
    fn hide_confirm(&mut self) {
        self.confirm = None;
    }
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

type Page<'a> = FeedbackController<MemoryStorage, &'a FixedClock, PageView>;

fn load_page(storage: MemoryStorage, clock: &FixedClock) -> Page<'_> {
    FeedbackController::new(FeedbackStore::open(storage, clock), PageView::default())
}

fn persisted(storage: &MemoryStorage) -> Vec<FeedbackEntry> {
    let raw = storage.raw(STORAGE_KEY).unwrap_or("[]");
    serde_json::from_str(raw).unwrap()
}

// =============================================================
// Sessions
// =============================================================

#[test]
fn first_visit_seeds_and_reload_keeps_the_same_entries() {
    let clock = FixedClock::new(1_700_000_000_000, date!(2025 - 03 - 01));
    let page = load_page(MemoryStorage::new(), &clock);
    assert_eq!(page.store().list().len(), 4);
    assert!(page.view().grid.contains("Maria González"));
    let seeded: Vec<_> = page.store().list().to_vec();

    let (store, _) = page.into_parts();
    clock.advance_millis(60_000);
    let page = load_page(store.into_storage(), &clock);
    assert_eq!(page.store().list(), seeded.as_slice());
}

#[test]
fn create_edit_delete_survive_reloads() {
    let clock = FixedClock::new(1_700_000_000_000, date!(2025 - 03 - 01));
    let mut page = load_page(MemoryStorage::new(), &clock);

    page.open_create();
    clock.advance_millis(10);
    let SubmitOutcome::Created(id) = page.submit("  Ana  ", "  Loved the robots  ") else {
        panic!("expected a created entry");
    };
    assert_eq!(page.modal_state(), ModalState::Closed);
    assert_eq!(page.store().list()[0].id, id);

    let (store, _) = page.into_parts();
    clock.set_today(date!(2025 - 03 - 02));
    let mut page = load_page(store.into_storage(), &clock);
    assert_eq!(page.store().list().len(), 5);
    assert_eq!(page.store().get(id).map(|e| e.author.as_str()), Some("Ana"));

    assert!(page.open_edit(id));
    assert_eq!(page.view().modal.as_ref().map(|m| m.text.as_str()), Some("Loved the robots"));
    assert_eq!(page.submit("Ana P.", "Loved them even more"), SubmitOutcome::Updated(id));

    assert!(page.request_delete(id));
    assert_eq!(page.confirm_delete(), Some(id));

    let (store, _) = page.into_parts();
    let storage = store.into_storage();
    let saved = persisted(&storage);
    assert_eq!(saved.len(), 4);
    assert!(saved.iter().all(|e| e.id != id));
}

#[test]
fn edit_round_trip_stamps_the_edit_date() {
    let clock = FixedClock::new(1_700_000_000_000, date!(2025 - 03 - 01));
    let mut page = load_page(MemoryStorage::new(), &clock);
    let id = page.store().list()[2].id;

    clock.set_today(date!(2025 - 06 - 20));
    page.open_edit(id);
    page.submit("Sophie Dubois", "Updated words");

    let (store, _) = page.into_parts();
    let saved = persisted(&store.into_storage());
    let entry = saved.iter().find(|e| e.id == id).unwrap();
    assert_eq!(entry.date, date!(2025 - 06 - 20));
    assert_eq!(entry.text, "Updated words");
}

#[test]
fn deleting_everything_reseeds_on_next_visit() {
    let clock = FixedClock::new(1_700_000_000_000, date!(2025 - 03 - 01));
    let mut page = load_page(MemoryStorage::new(), &clock);
    let ids: Vec<_> = page.store().list().iter().map(|e| e.id).collect();
    for id in ids {
        assert!(page.request_delete(id));
        page.confirm_delete();
    }
    assert!(page.store().list().is_empty());
    assert!(page.view().grid.contains(EMPTY_MESSAGE));

    let (store, _) = page.into_parts();
    let storage = store.into_storage();
    assert_eq!(storage.raw(STORAGE_KEY), Some("[]"));

    clock.advance_millis(5_000);
    let page = load_page(storage, &clock);
    assert_eq!(page.store().list().len(), 4);
}

// =============================================================
// Degraded storage
// =============================================================

#[test]
fn corrupt_storage_falls_back_to_samples() {
    let clock = FixedClock::new(1_700_000_000_000, date!(2025 - 03 - 01));
    let mut storage = MemoryStorage::new();
    storage.insert_raw(STORAGE_KEY, "{not json");
    let page = load_page(storage, &clock);
    assert_eq!(page.store().list().len(), 4);
    assert!(page.view().notices.is_empty());
}

#[test]
fn full_storage_warns_once_and_keeps_session_state() {
    let clock = FixedClock::new(1_700_000_000_000, date!(2025 - 03 - 01));
    let mut page = load_page(MemoryStorage::with_quota(16), &clock);
    assert_eq!(page.view().notices.len(), 1);
    assert_eq!(page.view().notices[0].kind, NoticeKind::Error);

    page.open_create();
    page.submit("Ana", "Still shown this session");
    assert_eq!(page.store().list().len(), 5);
    assert!(page.view().grid.contains("Still shown this session"));
    assert_eq!(page.view().notices.len(), 1);
}

#[test]
fn unavailable_storage_still_renders_the_board() {
    let clock = FixedClock::new(1_700_000_000_000, date!(2025 - 03 - 01));
    let page = load_page(MemoryStorage::disabled(), &clock);
    assert_eq!(page.store().list().len(), 4);
    assert!(page.view().grid.contains("feedback-card"));
}

// =============================================================
// Rendering through the controller
// =============================================================

#[test]
fn submitted_markup_is_escaped_in_the_grid() {
    let clock = FixedClock::new(1_700_000_000_000, date!(2025 - 03 - 01));
    let mut page = load_page(MemoryStorage::new(), &clock);
    page.open_create();
    page.submit("<b>Eve</b>", "<script>alert(1)</script>");
    let grid = &page.view().grid;
    assert!(!grid.contains("<script>"));
    assert!(grid.contains("&lt;script&gt;"));
    assert!(grid.contains("&lt;b&gt;Eve&lt;/b&gt;"));
}
