//! DOM binding for the slide-out menu.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use super::dom;
use crate::menu::SlideMenu;

const TOGGLE_SELECTOR: &str = ".menu-box";
const MENU_ID: &str = "slide-menu";
const LINK_SELECTOR: &str = ".menu-link";

struct Host {
    menu: RefCell<SlideMenu>,
    panel: Element,
}

impl Host {
    fn update(&self, change: impl FnOnce(&mut SlideMenu)) {
        let Ok(mut menu) = self.menu.try_borrow_mut() else {
            return;
        };
        change(&mut menu);
        if let Err(err) = self.panel.class_list().toggle_with_force("active", menu.is_open()) {
            log::warn!("slide menu class update failed: {err:?}");
        }
        dom::set_scroll_lock(menu.scroll_locked());
    }
}

pub fn mount(document: &Document) -> Result<(), JsValue> {
    let panel = dom::by_id::<Element>(document, MENU_ID)?;
    let host = Rc::new(Host { menu: RefCell::new(SlideMenu::default()), panel: panel.clone() });

    if let Ok(toggle) = dom::query::<Element>(document, TOGGLE_SELECTOR) {
        let host = Rc::clone(&host);
        dom::listen(&toggle, "click", move |_| {
            host.update(|menu| {
                menu.toggle();
            });
        })?;
    }

    let links = document.query_selector_all(LINK_SELECTOR)?;
    for index in 0..links.length() {
        let Some(link) = links.item(index) else {
            continue;
        };
        let host = Rc::clone(&host);
        dom::listen(&link, "click", move |_| host.update(SlideMenu::close))?;
    }

    {
        let host = Rc::clone(&host);
        dom::listen(&panel, "click", move |event: Event| {
            let on_overlay = dom::event_element(&event).is_some_and(|target| target == host.panel);
            if on_overlay {
                host.update(SlideMenu::close);
            }
        })?;
    }

    dom::listen(document, "keydown", move |event: Event| {
        if dom::key_of(&event) == "Escape" && host.menu.borrow().is_open() {
            host.update(|menu| {
                menu.handle_escape();
            });
        }
    })
}
