//! Rendering: draws a particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the field and produces pixels; it never mutates simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use rand::Rng;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{CONNECTION_LINE_WIDTH, PARTICLE_FILL};
use crate::field::{Connection, ParticleField};

/// Clear the arena, then draw connections beneath particle discs.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw<R: Rng>(ctx: &CanvasRenderingContext2d, field: &ParticleField<R>) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);

    ctx.set_line_width(CONNECTION_LINE_WIDTH);
    for link in field.connections() {
        draw_connection(ctx, &link);
    }

    ctx.set_fill_style_str(PARTICLE_FILL);
    for particle in &field.particles {
        ctx.begin_path();
        ctx.arc(particle.x, particle.y, particle.radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

fn draw_connection(ctx: &CanvasRenderingContext2d, link: &Connection) {
    ctx.set_stroke_style_str(&connection_style(link.opacity));
    ctx.begin_path();
    ctx.move_to(link.from.x, link.from.y);
    ctx.line_to(link.to.x, link.to.y);
    ctx.stroke();
}

/// CSS stroke color for a connection of the given opacity.
#[must_use]
pub fn connection_style(opacity: f64) -> String {
    format!("rgba(255, 255, 255, {opacity})")
}
