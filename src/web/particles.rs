//! Canvas hosts for the particle backgrounds.
//!
//! Each canvas gets its own `Engine` behind `Rc<RefCell<..>>`, shared between
//! its event listeners and a self-rescheduling animation frame callback.

use std::cell::RefCell;
use std::rc::Rc;

use ::particles::config::FieldConfig;
use ::particles::engine::Engine;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlCanvasElement, MouseEvent, Window};

use super::dom;

pub const HERO_CANVAS_ID: &str = "particle-canvas";
pub const CONTACT_CANVAS_ID: &str = "contact-canvas";

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Markup may override the preset with a JSON options object.
const CONFIG_ATTRIBUTE: &str = "data-particles";

pub fn mount(document: &Document, canvas_id: &str, preset: FieldConfig) -> Result<(), JsValue> {
    let canvas = dom::by_id::<HtmlCanvasElement>(document, canvas_id)?;
    let config = match canvas.get_attribute(CONFIG_ATTRIBUTE) {
        Some(raw) => FieldConfig::from_json(&raw),
        None => preset.validate().map(|()| preset),
    }
    .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let engine = Rc::new(RefCell::new(Engine::new(canvas.clone(), config)?));

    {
        let engine = Rc::clone(&engine);
        dom::listen(&canvas, "mousemove", move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Ok(mut engine) = engine.try_borrow_mut() {
                engine.on_pointer_move(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            }
        })?;
    }
    {
        let engine = Rc::clone(&engine);
        dom::listen(&canvas, "mouseleave", move |_| {
            if let Ok(mut engine) = engine.try_borrow_mut() {
                engine.on_pointer_leave();
            }
        })?;
    }
    {
        let engine = Rc::clone(&engine);
        dom::listen(&window, "resize", move |_| {
            if let Ok(mut engine) = engine.try_borrow_mut()
                && engine.sync_size()
            {
                log::debug!("particle field respawned after resize");
            }
        })?;
    }

    start_loop(&window, engine)
}

/// Drive `engine` from `requestAnimationFrame` until the page unloads.
fn start_loop(window: &Window, engine: Rc<RefCell<Engine>>) -> Result<(), JsValue> {
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let slot_for_cb = Rc::clone(&slot);
    let window_for_cb = window.clone();

    let cb = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
        if let Ok(mut engine) = engine.try_borrow_mut()
            && let Err(err) = engine.frame()
        {
            log::warn!("particle frame failed: {err:?}");
        }
        if let Some(next) = slot_for_cb.borrow().as_ref()
            && let Err(err) = window_for_cb.request_animation_frame(next.as_ref().unchecked_ref())
        {
            log::error!("particle loop stopped: {err:?}");
        }
    });

    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    *slot.borrow_mut() = Some(cb);
    Ok(())
}
