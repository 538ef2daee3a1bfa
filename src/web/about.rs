//! DOM binding for the scroll-driven about section.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlImageElement, Window};

use super::dom;
use crate::about::{AboutScroll, ScrollUpdate, scroll_progress};

const SECTION_SELECTOR: &str = ".about-section-scroll";
const CONTAINER_SELECTOR: &str = ".about-scroll-container";
const TITLE_ID: &str = "aboutTitle";
const DESCRIPTION_ID: &str = "aboutDescription";
const IMAGE_ID: &str = "aboutImage";

struct Host {
    state: RefCell<AboutScroll>,
    window: Window,
    container: HtmlElement,
    title: HtmlElement,
    description: HtmlElement,
    image: HtmlImageElement,
}

impl Host {
    fn progress(&self) -> f64 {
        let rect = self.container.get_bounding_client_rect();
        let viewport = viewport_dimension(self.window.inner_height());
        scroll_progress(rect.top(), f64::from(self.container.offset_height()), viewport)
    }

    fn set_opacity(&self, opacity: f64) {
        let value = opacity.to_string();
        let image: &HtmlElement = &self.image;
        for element in [&self.title, &self.description, image] {
            if let Err(err) = element.style().set_property("opacity", &value) {
                log::debug!("about opacity not applied: {err:?}");
            }
        }
    }

    fn apply_style(&self) {
        let style = self.state.borrow().style();
        let text_transform = format!("translateY({}px)", style.text_offset_px);
        let image_transform = format!("scale({})", style.image_scale);
        self.set_opacity(style.opacity);
        let applied = self
            .title
            .style()
            .set_property("transform", &text_transform)
            .and_then(|()| self.description.style().set_property("transform", &text_transform))
            .and_then(|()| self.image.style().set_property("transform", &image_transform));
        if let Err(err) = applied {
            log::warn!("about transition style failed: {err:?}");
        }
    }

    fn show_current(&self) {
        let Some(panel) = self.state.borrow().shown_panel() else {
            return;
        };
        self.title.set_text_content(Some(panel.title));
        self.description.set_text_content(Some(panel.description));
        self.image.set_src(panel.image);
    }
}

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    dom::query::<HtmlElement>(document, SECTION_SELECTOR)?;
    let mut state = AboutScroll::default();
    if !state.set_viewport_width(viewport_dimension(window.inner_width())) {
        log::debug!("about section left static on a narrow viewport");
        return Ok(());
    }

    let host = Rc::new(Host {
        state: RefCell::new(state),
        window: window.clone(),
        container: dom::query(document, CONTAINER_SELECTOR)?,
        title: dom::by_id(document, TITLE_ID)?,
        description: dom::by_id(document, DESCRIPTION_ID)?,
        image: dom::by_id(document, IMAGE_ID)?,
    });

    {
        let host = Rc::clone(&host);
        dom::listen(&window, "resize", move |_| {
            let width = viewport_dimension(host.window.inner_width());
            if let Ok(mut state) = host.state.try_borrow_mut() {
                state.set_viewport_width(width);
            }
        })?;
    }
    dom::listen(&window, "scroll", move |_| on_scroll(&host))
}

fn on_scroll(host: &Rc<Host>) {
    let progress = host.progress();
    let update = match host.state.try_borrow_mut() {
        Ok(mut state) => state.on_scroll(progress),
        Err(_) => return,
    };
    match update {
        ScrollUpdate::Opacity(opacity) => host.set_opacity(opacity),
        ScrollUpdate::SwapStarted(_) => {
            host.apply_style();
            schedule(host);
        }
        ScrollUpdate::Retargeted(_) | ScrollUpdate::None => {}
    }
}

/// Wait out the current phase, then step to the next one.
fn schedule(host: &Rc<Host>) {
    let Some(delay) = host.state.borrow().phase().duration_ms() else {
        return;
    };
    let host = Rc::clone(host);
    Timeout::new(delay, move || {
        let swapped = host.state.borrow_mut().advance();
        if swapped {
            host.show_current();
        }
        host.apply_style();
        schedule(&host);
    })
    .forget();
}

/// `innerWidth`/`innerHeight` as a number; zero when unavailable.
fn viewport_dimension(value: Result<JsValue, JsValue>) -> f64 {
    match value {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::debug!("viewport size unavailable: {err:?}");
            0.0
        }
    }
}
