//! Small web-sys helpers shared by the mount functions.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::notice::{NOTICE_EXIT_MS, NOTICE_VISIBLE_MS, Notice};

const NOTICE_KEYFRAMES: &str = "\
@keyframes slideInRight { from { transform: translateX(400px); opacity: 0; } to { transform: translateX(0); opacity: 1; } }
@keyframes slideOutRight { from { transform: translateX(0); opacity: 1; } to { transform: translateX(400px); opacity: 0; } }";

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Look up `#id` and cast it to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} has an unexpected element type")))
}

/// First element matching `selector`, cast to `T`.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("nothing matches {selector}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("{selector} has an unexpected element type")))
}

/// Attach `handler` to `target` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// The element an event was dispatched to.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_ref::<Element>().cloned())
}

/// Key name of a keyboard event; empty for other events.
pub fn key_of(event: &Event) -> String {
    event.dyn_ref::<web_sys::KeyboardEvent>().map(web_sys::KeyboardEvent::key).unwrap_or_default()
}

/// Current value of an `<input>` or `<textarea>`.
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn set_field_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Lock or release page scrolling behind overlays.
pub fn set_scroll_lock(locked: bool) {
    let body = match document() {
        Ok(document) => document.body(),
        Err(err) => {
            log::warn!("scroll lock unavailable: {err:?}");
            return;
        }
    };
    let Some(body) = body else {
        return;
    };
    let result = if locked {
        body.style().set_property("overflow", "hidden")
    } else {
        body.style().remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        log::warn!("could not change scroll lock: {err:?}");
    }
}

pub fn install_notice_styles(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(NOTICE_KEYFRAMES));
    let head = document.head().ok_or_else(|| JsValue::from_str("document has no head"))?;
    head.append_child(&style)?;
    Ok(())
}

/// Show `notice` as a corner toast, then slide it out and remove it.
pub fn show_notice(notice: &Notice) {
    if let Err(err) = try_show_notice(notice) {
        log::warn!("could not show notice {:?}: {err:?}", notice.message);
    }
}

fn try_show_notice(notice: &Notice) -> Result<(), JsValue> {
    let document = document()?;
    let toast = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    toast.style().set_css_text(&format!(
        "position: fixed; top: 100px; right: 40px; background: {}; color: white; padding: 16px 24px; \
         border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); z-index: 3000; \
         animation: slideInRight 0.3s ease;",
        notice.background()
    ));
    toast.set_text_content(Some(&notice.message));
    document.body().ok_or_else(|| JsValue::from_str("document has no body"))?.append_child(&toast)?;

    Timeout::new(NOTICE_VISIBLE_MS, move || {
        if let Err(err) = toast.style().set_property("animation", "slideOutRight 0.3s ease") {
            log::debug!("notice exit animation failed: {err:?}");
        }
        Timeout::new(NOTICE_EXIT_MS, move || toast.remove()).forget();
    })
    .forget();
    Ok(())
}
