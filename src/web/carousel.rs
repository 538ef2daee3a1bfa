//! DOM binding for the video carousel.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlIFrameElement};

use super::dom;
use crate::carousel::VideoCarousel;

const FRAME_ID: &str = "video-frame";
const PREV_ID: &str = "prevBtn";
const NEXT_ID: &str = "nextBtn";
const DOTS_ID: &str = "carouselDots";
const WRAPPER_SELECTOR: &str = ".video-wrapper";
const DOT_CLASS: &str = "carousel-dot";

struct Host {
    carousel: RefCell<VideoCarousel>,
    frame: HtmlIFrameElement,
    wrapper: HtmlElement,
    dots: Vec<Element>,
}

impl Host {
    fn apply_style(&self) {
        let (opacity, offset) = self.carousel.borrow().phase().wrapper_style();
        let style = self.wrapper.style();
        let applied = style
            .set_property("opacity", &opacity.to_string())
            .and_then(|()| style.set_property("transform", &format!("translateX({offset}px)")));
        if let Err(err) = applied {
            log::warn!("carousel style update failed: {err:?}");
        }
    }

    fn show_current(&self) {
        let carousel = self.carousel.borrow();
        if let Some(url) = carousel.embed_url() {
            self.frame.set_src(&url);
        }
        for (index, dot) in self.dots.iter().enumerate() {
            if let Err(err) = dot.class_list().toggle_with_force("active", index == carousel.shown_index()) {
                log::debug!("dot {index} not updated: {err:?}");
            }
        }
    }
}

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let frame = dom::by_id::<HtmlIFrameElement>(document, FRAME_ID)?;
    let wrapper = dom::query::<HtmlElement>(document, WRAPPER_SELECTOR)?;
    let container = dom::by_id::<Element>(document, DOTS_ID)?;
    let carousel = VideoCarousel::default();

    container.set_inner_html("");
    let mut dots = Vec::with_capacity(carousel.len());
    for index in 0..carousel.len() {
        let dot = document.create_element("div")?;
        dot.set_class_name(DOT_CLASS);
        dot.set_attribute("data-index", &index.to_string())?;
        container.append_child(&dot)?;
        dots.push(dot);
    }

    let host = Rc::new(Host { carousel: RefCell::new(carousel), frame, wrapper, dots });
    host.show_current();

    for (index, dot) in host.dots.iter().enumerate() {
        let host = Rc::clone(&host);
        dom::listen(dot, "click", move |_| navigate(&host, |c| c.go_to(index)))?;
    }
    {
        let host = Rc::clone(&host);
        let prev = dom::by_id::<Element>(document, PREV_ID)?;
        dom::listen(&prev, "click", move |_| navigate(&host, VideoCarousel::prev))?;
    }
    {
        let host = Rc::clone(&host);
        let next = dom::by_id::<Element>(document, NEXT_ID)?;
        dom::listen(&next, "click", move |_| navigate(&host, VideoCarousel::next))?;
    }
    dom::listen(document, "keydown", move |event: Event| {
        let key = dom::key_of(&event);
        navigate(&host, |c| c.handle_key(&key));
    })?;

    Ok(())
}

/// Apply a navigation request and, when accepted, run the transition.
fn navigate(host: &Rc<Host>, request: impl FnOnce(&mut VideoCarousel) -> bool) {
    let started = match host.carousel.try_borrow_mut() {
        Ok(mut carousel) => request(&mut carousel),
        Err(_) => false,
    };
    if started {
        host.apply_style();
        schedule(host);
    }
}

/// Wait out the current phase, then step to the next one.
fn schedule(host: &Rc<Host>) {
    let Some(delay) = host.carousel.borrow().phase().duration_ms() else {
        return;
    };
    let host = Rc::clone(host);
    Timeout::new(delay, move || {
        let swapped = host.carousel.borrow_mut().advance();
        if swapped {
            host.show_current();
        }
        host.apply_style();
        schedule(&host);
    })
    .forget();
}
