//! DOM binding for the contact form. Sending is simulated with a timer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement};

use super::dom;
use crate::contact::{ContactForm, ContactSubmission, SENDING_LABEL, SIMULATED_SEND_MS};
use crate::notice::Notice;

const FORM_ID: &str = "contact-form";
const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";

struct Host {
    state: RefCell<ContactForm>,
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
}

impl Host {
    fn field(&self, name: &str) -> String {
        match self.form.query_selector(&format!("[name=\"{name}\"]")) {
            Ok(Some(element)) => dom::field_value(&element),
            Ok(None) => String::new(),
            Err(err) => {
                log::debug!("contact field {name} unreadable: {err:?}");
                String::new()
            }
        }
    }

    fn read(&self) -> ContactSubmission {
        ContactSubmission {
            first_name: self.field("firstName"),
            last_name: self.field("lastName"),
            email: self.field("email"),
            message: self.field("message"),
        }
    }

    /// Swap the button into its busy state, returning the label to restore.
    fn mark_sending(&self) -> Option<String> {
        let button = self.button.as_ref()?;
        let label = button.text_content();
        button.set_text_content(Some(SENDING_LABEL));
        button.set_disabled(true);
        label
    }

    fn restore(&self, label: Option<&str>) {
        if let Some(button) = &self.button {
            button.set_text_content(label);
            button.set_disabled(false);
        }
    }
}

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let form = dom::by_id::<HtmlFormElement>(document, FORM_ID)?;
    let button = form
        .query_selector(SUBMIT_SELECTOR)?
        .and_then(|el: Element| el.dyn_ref::<HtmlButtonElement>().cloned());
    let host = Rc::new(Host { state: RefCell::new(ContactForm::new()), form: form.clone(), button });

    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        submit(&host);
    })
}

fn submit(host: &Rc<Host>) {
    let submission = host.read();
    let accepted = match host.state.try_borrow_mut() {
        Ok(mut state) => state.submit(&submission),
        Err(_) => return,
    };
    match accepted {
        Ok(true) => {}
        Ok(false) => return,
        Err(err) => {
            dom::show_notice(&Notice::error(err.to_string()));
            return;
        }
    }

    let label = host.mark_sending();
    let host = Rc::clone(host);
    Timeout::new(SIMULATED_SEND_MS, move || {
        let finished = host.state.borrow_mut().finish();
        if let Some(notice) = finished {
            dom::show_notice(&notice);
            host.form.reset();
        }
        host.restore(label.as_deref());
    })
    .forget();
}
