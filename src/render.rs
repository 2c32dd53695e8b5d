//! Rendering: draws the starfield to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the starfield and produces pixels; it
//! does not mutate any state.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::STAR_ALPHA;
use crate::starfield::{Star, Starfield};

/// Clear the canvas and draw every star.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, field: &Starfield) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    ctx.set_image_smoothing_enabled(false);
    for star in field.stars() {
        draw_star(ctx, star)?;
    }
    Ok(())
}

fn draw_star(ctx: &CanvasRenderingContext2d, star: &Star) -> Result<(), JsValue> {
    ctx.set_global_alpha(STAR_ALPHA);
    ctx.begin_path();
    ctx.arc(star.pos.x, star.pos.y, star.radius, 0.0, TAU)?;
    ctx.set_fill_style_str(star.color.css());
    ctx.fill();
    ctx.set_global_alpha(1.0);
    Ok(())
}
