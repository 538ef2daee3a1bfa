//! DOM binding for the feedback board.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement};

use super::dom;
use crate::clock::SystemClock;
use crate::feedback::render::{ACTION_DELETE, ACTION_EDIT};
use crate::feedback::{ConfirmPrompt, EntryId, FeedbackController, FeedbackStore, FeedbackView, ModalForm};
use crate::notice::Notice;
use crate::storage::BrowserStorage;

const GRID_ID: &str = "feedback-grid";
const MODAL_ID: &str = "feedback-modal";
const MODAL_TITLE_ID: &str = "modal-title";
const FORM_ID: &str = "feedback-form";
const AUTHOR_ID: &str = "feedback-author";
const TEXT_ID: &str = "feedback-text";
const ADD_BUTTON_ID: &str = "add-feedback-btn";
const CLOSE_BUTTON_ID: &str = "modal-close";
const BACKDROP_SELECTOR: &str = ".modal-backdrop";
const CONFIRM_OVERLAY_ID: &str = "delete-confirm-modal";
const ACTION_CONFIRM: &str = "confirm-delete";
const ACTION_CANCEL: &str = "cancel-delete";

type Controller = FeedbackController<BrowserStorage, SystemClock, DomFeedbackView>;

struct DomFeedbackView {
    document: Document,
    grid: Element,
    modal: Element,
    title: Element,
    form: HtmlFormElement,
    author: Element,
    text: Element,
}

impl DomFeedbackView {
    fn lookup(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            grid: dom::by_id(document, GRID_ID)?,
            modal: dom::by_id(document, MODAL_ID)?,
            title: dom::by_id(document, MODAL_TITLE_ID)?,
            form: dom::by_id(document, FORM_ID)?,
            author: dom::by_id(document, AUTHOR_ID)?,
            text: dom::by_id(document, TEXT_ID)?,
        })
    }

    fn build_confirm(&self, prompt: &ConfirmPrompt) -> Result<Element, JsValue> {
        let overlay = self.document.create_element("div")?.dyn_into::<HtmlElement>()?;
        overlay.set_id(CONFIRM_OVERLAY_ID);
        overlay.style().set_css_text(
            "position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); \
             z-index: 9999; display: flex; align-items: center; justify-content: center;",
        );

        let content = self.document.create_element("div")?.dyn_into::<HtmlElement>()?;
        content.style().set_css_text(
            "background: white; padding: 30px; border-radius: 12px; max-width: 400px; text-align: center; \
             box-shadow: 0 10px 30px rgba(0,0,0,0.3); max-height: 80vh; overflow: auto;",
        );

        let message = self.document.create_element("p")?.dyn_into::<HtmlElement>()?;
        message.set_text_content(Some(prompt.message));
        message.style().set_css_text("margin: 0 0 20px 0; font-size: 18px; line-height: 1.4; color: black;");

        let confirm = self.button(
            prompt.confirm_label,
            ACTION_CONFIRM,
            "background: #c94040; color: white; border: none; padding: 12px 24px; border-radius: 6px; \
             cursor: pointer; margin-right: 10px; font-size: 16px;",
        )?;
        let cancel = self.button(
            prompt.cancel_label,
            ACTION_CANCEL,
            "background: #f0f0f0; color: #333; border: none; padding: 12px 24px; border-radius: 6px; \
             cursor: pointer; font-size: 16px;",
        )?;

        content.append_child(&message)?;
        content.append_child(&confirm)?;
        content.append_child(&cancel)?;
        overlay.append_child(&content)?;
        Ok(overlay.into())
    }

    fn button(&self, label: &str, action: &str, css: &str) -> Result<HtmlElement, JsValue> {
        let button = self.document.create_element("button")?.dyn_into::<HtmlElement>()?;
        button.set_text_content(Some(label));
        button.set_attribute("data-action", action)?;
        button.style().set_css_text(css);
        Ok(button)
    }
}

impl FeedbackView for DomFeedbackView {
    fn render_list(&mut self, html: &str) {
        self.grid.set_inner_html(html);
    }

    fn show_modal(&mut self, form: &ModalForm) {
        self.form.reset();
        self.title.set_text_content(Some(form.title));
        dom::set_field_value(&self.author, &form.author);
        dom::set_field_value(&self.text, &form.text);
        if let Err(err) = self.modal.class_list().add_1("show") {
            log::warn!("could not open feedback modal: {err:?}");
        }
        dom::set_scroll_lock(true);
    }

    fn hide_modal(&mut self) {
        if let Err(err) = self.modal.class_list().remove_1("show") {
            log::warn!("could not close feedback modal: {err:?}");
        }
        dom::set_scroll_lock(false);
    }

    fn show_confirm(&mut self, prompt: &ConfirmPrompt) {
        let mounted = self.build_confirm(prompt).and_then(|overlay| {
            let body = self.document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
            body.append_child(&overlay)
        });
        match mounted {
            Ok(_) => dom::set_scroll_lock(true),
            Err(err) => log::warn!("could not show delete confirmation: {err:?}"),
        }
    }

    fn hide_confirm(&mut self) {
        if let Some(overlay) = self.document.get_element_by_id(CONFIRM_OVERLAY_ID) {
            overlay.remove();
        }
        dom::set_scroll_lock(false);
    }

    fn notify(&mut self, notice: &Notice) {
        dom::show_notice(notice);
    }
}

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let view = DomFeedbackView::lookup(document)?;
    let author = view.author.clone();
    let text = view.text.clone();
    let form = view.form.clone();
    let store = FeedbackStore::open(BrowserStorage::local(), SystemClock);
    let controller = Rc::new(RefCell::new(FeedbackController::new(store, view)));

    if let Ok(add) = dom::by_id::<Element>(document, ADD_BUTTON_ID) {
        let controller = Rc::clone(&controller);
        dom::listen(&add, "click", move |_| with(&controller, Controller::open_create))?;
    }
    if let Ok(close) = dom::by_id::<Element>(document, CLOSE_BUTTON_ID) {
        let controller = Rc::clone(&controller);
        dom::listen(&close, "click", move |_| with(&controller, Controller::cancel))?;
    }
    if let Ok(backdrop) = dom::query::<Element>(document, BACKDROP_SELECTOR) {
        let controller = Rc::clone(&controller);
        dom::listen(&backdrop, "click", move |_| with(&controller, Controller::cancel))?;
    }

    {
        let controller = Rc::clone(&controller);
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let (author, text) = (dom::field_value(&author), dom::field_value(&text));
            with(&controller, |c| {
                c.submit(&author, &text);
            });
        })?;
    }

    {
        let controller = Rc::clone(&controller);
        dom::listen(document, "keydown", move |event: Event| {
            if dom::key_of(&event) == "Escape" {
                with(&controller, |c| {
                    c.handle_escape();
                });
            }
        })?;
    }

    dom::listen(document, "click", move |event: Event| {
        let Some(target) = dom::event_element(&event) else {
            return;
        };
        if target.id() == CONFIRM_OVERLAY_ID {
            with(&controller, |c| {
                c.cancel_delete();
            });
            return;
        }
        let Ok(Some(actor)) = target.closest("[data-action]") else {
            return;
        };
        let action = actor.get_attribute("data-action").unwrap_or_default();
        let id = actor.get_attribute("data-id").map(|raw| raw.parse::<EntryId>());
        with(&controller, |c| match (action.as_str(), id) {
            (ACTION_EDIT, Some(Ok(id))) => {
                c.open_edit(id);
            }
            (ACTION_DELETE, Some(Ok(id))) => {
                c.request_delete(id);
            }
            (ACTION_CONFIRM, _) => {
                c.confirm_delete();
            }
            (ACTION_CANCEL, _) => {
                c.cancel_delete();
            }
            _ => {}
        });
    })?;

    Ok(())
}

/// Run `f` against the controller unless a handler further up the stack
/// already holds it.
fn with(controller: &Rc<RefCell<Controller>>, f: impl FnOnce(&mut Controller)) {
    match controller.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => log::warn!("feedback event dropped: controller busy"),
    }
}
