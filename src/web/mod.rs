//! Browser adapter: binds DOM events to the crate's plain state machines.
//!
//! Each `mount` looks up the elements it needs by id and installs listeners
//! for the page's lifetime. A missing section is logged and skipped so one
//! absent element never takes the rest of the page down.

mod about;
mod carousel;
mod contact;
mod dom;
mod feedback;
mod menu;
mod particles;

use wasm_bindgen::prelude::*;

/// Entry point run when the wasm module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("no document to mount into: {err:?}");
            return;
        }
    };
    if let Err(err) = dom::install_notice_styles(&document) {
        log::warn!("notice animations unavailable: {err:?}");
    }

    report("feedback board", feedback::mount(&document));
    report("hero particles", particles::mount(&document, particles::HERO_CANVAS_ID, ::particles::config::FieldConfig::hero()));
    report(
        "contact particles",
        particles::mount(&document, particles::CONTACT_CANVAS_ID, ::particles::config::FieldConfig::contact()),
    );
    report("about section", about::mount(&document));
    report("video carousel", carousel::mount(&document));
    report("contact form", contact::mount(&document));
    report("slide menu", menu::mount(&document));
}

fn report(section: &str, result: Result<(), JsValue>) {
    match result {
        Ok(()) => log::debug!("{section} mounted"),
        Err(err) => log::warn!("{section} not mounted: {err:?}"),
    }
}
