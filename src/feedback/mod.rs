//! Feedback board: a browser-persisted list of visitor testimonials.
//!
//! | Module | Role |
//! |--------|------|
//! | [`entry`] | `FeedbackEntry` record and the default sample entries |
//! | [`store`] | `FeedbackStore`: CRUD over a [`crate::storage::KeyValueStore`] |
//! | [`controller`] | Modal and delete-confirmation state machine |
//! | [`render`] | HTML for the feedback grid, with escaping |

pub mod controller;
pub mod entry;
pub mod render;
pub mod store;

pub use controller::{ConfirmPrompt, FeedbackController, FeedbackView, ModalForm, ModalState, SubmitOutcome};
pub use entry::{EntryId, FeedbackEntry};
pub use store::{FeedbackStore, STORAGE_KEY};
