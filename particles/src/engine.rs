use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::point::Point;
use crate::render;

/// The full particle engine: a canvas element, its 2D context and the
/// simulation driving it.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub field: ParticleField<SmallRng>,
}

impl Engine {
    /// Bind a new engine to `canvas`, sized to the element's layout box.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let (width, height) = layout_size(&canvas);
        apply_backing_size(&canvas, width, height);
        let field = ParticleField::new(config, f64::from(width), f64::from(height), SmallRng::seed_from_u64(entropy_seed()));
        log::debug!("particle engine bound to #{} at {width}x{height}", canvas.id());
        Ok(Self { canvas, ctx, field })
    }

    // --- Viewport ---

    /// Match the backing store to the element's layout size. Particles are
    /// respawned when the size changed. Returns whether it did.
    pub fn sync_size(&mut self) -> bool {
        let (width, height) = layout_size(&self.canvas);
        if width != self.canvas.width() || height != self.canvas.height() {
            apply_backing_size(&self.canvas, width, height);
        }
        self.field.resize(f64::from(width), f64::from(height))
    }

    // --- Input events ---

    /// Track the pointer from viewport (`clientX`/`clientY`) coordinates.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        let rect = self.canvas.get_bounding_client_rect();
        self.field.set_pointer(Some(Point::new(client_x - rect.left(), client_y - rect.top())));
    }

    pub fn on_pointer_leave(&mut self) {
        self.field.set_pointer(None);
    }

    // --- Frame ---

    /// Advance one tick and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.field.tick();
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.field)
    }
}

fn layout_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let width = u32::try_from(canvas.offset_width()).unwrap_or(0);
    let height = u32::try_from(canvas.offset_height()).unwrap_or(0);
    (width, height)
}

fn apply_backing_size(canvas: &HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width);
    canvas.set_height(height);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn entropy_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
