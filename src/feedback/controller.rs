//! Modal-driven create/edit flow and confirmation-gated deletion.
//!
//! `FeedbackController` sits between the page's feedback modal and the
//! [`FeedbackStore`]. It owns which entry (if any) the modal is editing and
//! which deletion (if any) is awaiting confirmation. Every successful
//! mutation re-renders the full list through the injected [`FeedbackView`].
//!
//! ```text
//!            open_create            submit ok / cancel / Escape
//!   Closed ───────────────► OpenForCreate ─────────────────────► Closed
//!      │     open_edit(id)                  submit ok / cancel / Escape
//!      └──────────────────► OpenForEdit(id) ───────────────────► Closed
//! ```

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::clock::Clock;
use crate::feedback::entry::EntryId;
use crate::feedback::render::render_list;
use crate::feedback::store::FeedbackStore;
use crate::notice::Notice;
use crate::storage::KeyValueStore;

pub const TITLE_CREATE: &str = "Add Your Feedback";
pub const TITLE_EDIT: &str = "Edit Your Feedback";
pub const EMPTY_FIELDS_NOTICE: &str = "❗ Please fill in all the fields";
pub const SAVE_FAILED_NOTICE: &str = "Unable to save feedback. Storage might be full.";
pub const CONFIRM_MESSAGE: &str = "Are you sure you want to delete this feedback?";
pub const CONFIRM_LABEL: &str = "Yes, Delete";
pub const CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    OpenForCreate,
    OpenForEdit(EntryId),
}

impl ModalState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self != Self::Closed
    }
}

/// Contents the modal form should show when it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalForm {
    pub title: &'static str,
    pub author: String,
    pub text: String,
}

/// The delete confirmation prompt. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub id: EntryId,
    pub message: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl ConfirmPrompt {
    fn for_entry(id: EntryId) -> Self {
        Self { id, message: CONFIRM_MESSAGE, confirm_label: CONFIRM_LABEL, cancel_label: CANCEL_LABEL }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(EntryId),
    Updated(EntryId),
    /// The edit target disappeared before submit; the modal closed anyway.
    Stale(EntryId),
    /// A field was blank; the modal stays open.
    Rejected,
    /// No modal was open.
    Ignored,
}

/// Render target for the feedback board, implemented by the host adapter.
pub trait FeedbackView {
    /// Replace the grid contents with `html`.
    fn render_list(&mut self, html: &str);
    fn show_modal(&mut self, form: &ModalForm);
    fn hide_modal(&mut self);
    fn show_confirm(&mut self, prompt: &ConfirmPrompt);
    fn hide_confirm(&mut self);
    fn notify(&mut self, notice: &Notice);
}

pub struct FeedbackController<S, C, V> {
    store: FeedbackStore<S, C>,
    view: V,
    modal: ModalState,
    confirm: Option<ConfirmPrompt>,
}

impl<S: KeyValueStore, C: Clock, V: FeedbackView> FeedbackController<S, C, V> {
    /// Seed an empty board, then draw the initial list.
    pub fn new(mut store: FeedbackStore<S, C>, view: V) -> Self {
        store.ensure_seeded();
        let mut controller = Self { store, view, modal: ModalState::Closed, confirm: None };
        controller.refresh();
        controller
    }

    // --- Modal ---

    /// Open an empty form for a new entry.
    pub fn open_create(&mut self) {
        self.modal = ModalState::OpenForCreate;
        self.view.show_modal(&ModalForm { title: TITLE_CREATE, author: String::new(), text: String::new() });
    }

    /// Open the form pre-filled with entry `id`. Unknown ids leave the modal
    /// as it was. Returns whether the modal opened.
    pub fn open_edit(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.store.get(id) else {
            log::debug!("edit requested for missing feedback {id}");
            return false;
        };
        let form = ModalForm { title: TITLE_EDIT, author: entry.author.clone(), text: entry.text.clone() };
        self.modal = ModalState::OpenForEdit(id);
        self.view.show_modal(&form);
        true
    }

    /// Validate and apply the form.
    pub fn submit(&mut self, author: &str, text: &str) -> SubmitOutcome {
        if !self.modal.is_open() {
            return SubmitOutcome::Ignored;
        }
        let (author, text) = (author.trim(), text.trim());
        if author.is_empty() || text.is_empty() {
            self.view.notify(&Notice::error(EMPTY_FIELDS_NOTICE));
            return SubmitOutcome::Rejected;
        }

        let outcome = match self.modal {
            ModalState::OpenForEdit(id) => {
                if self.store.update(id, author, text) {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Stale(id)
                }
            }
            _ => SubmitOutcome::Created(self.store.create(author, text).id),
        };
        self.refresh();
        self.cancel();
        outcome
    }

    /// Close the modal, discarding unsaved input.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
        self.view.hide_modal();
    }

    /// Escape dismisses the confirmation prompt first, then the modal.
    /// Returns whether anything closed.
    pub fn handle_escape(&mut self) -> bool {
        if self.confirm.is_some() {
            self.cancel_delete();
            true
        } else if self.modal.is_open() {
            self.cancel();
            true
        } else {
            false
        }
    }

    // --- Deletion ---

    /// Ask for confirmation before deleting `id`. Ignored when a prompt is
    /// already showing or the entry is gone. Returns whether a prompt opened.
    pub fn request_delete(&mut self, id: EntryId) -> bool {
        if self.confirm.is_some() || self.store.get(id).is_none() {
            return false;
        }
        let prompt = ConfirmPrompt::for_entry(id);
        self.confirm = Some(prompt);
        self.view.show_confirm(&prompt);
        true
    }

    /// Delete the entry awaiting confirmation. Returns the deleted id.
    pub fn confirm_delete(&mut self) -> Option<EntryId> {
        let prompt = self.confirm.take()?;
        self.store.delete(prompt.id);
        self.refresh();
        self.view.hide_confirm();
        Some(prompt.id)
    }

    /// Dismiss the prompt without deleting. Covers Cancel, backdrop clicks,
    /// and Escape. Returns whether a prompt was showing.
    pub fn cancel_delete(&mut self) -> bool {
        if self.confirm.take().is_none() {
            return false;
        }
        self.view.hide_confirm();
        true
    }

    // --- Queries ---

    #[must_use]
    pub fn modal_state(&self) -> ModalState {
        self.modal
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<EntryId> {
        self.confirm.map(|prompt| prompt.id)
    }

    #[must_use]
    pub fn store(&self) -> &FeedbackStore<S, C> {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Tear down, handing back the store and view.
    #[must_use]
    pub fn into_parts(self) -> (FeedbackStore<S, C>, V) {
        (self.store, self.view)
    }

    /// Redraw the list and surface a pending storage warning.
    fn refresh(&mut self) {
        self.view.render_list(&render_list(self.store.list()));
        if let Some(err) = self.store.take_warning() {
            log::warn!("feedback storage warning surfaced to user: {err}");
            self.view.notify(&Notice::error(SAVE_FAILED_NOTICE));
        }
    }
}
