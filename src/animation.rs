//! Starfield animation loop on `#stars-canvas`.
//!
//! Owns the [`Starfield`] and its RNG behind an `Rc<RefCell<_>>` shared by
//! three callbacks: the `requestAnimationFrame` loop, canvas `mousemove`,
//! and window `resize`. The loop re-arms itself every frame and runs until
//! the page unloads.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::config::PageConfig;
use crate::consts::STARS_CANVAS_ID;
use crate::dom;
use crate::error::PageError;
use crate::render;
use crate::starfield::Starfield;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Scene {
    field: Starfield,
    rng: SmallRng,
}

fn inner_size(window: &Window) -> Result<(f64, f64), PageError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(to_px(width));
    canvas.set_height(to_px(height));
}

fn seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, PageError> {
    canvas
        .get_context("2d")
        .map_err(|_| PageError::CanvasUnsupported)?
        .ok_or(PageError::CanvasUnsupported)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| PageError::CanvasUnsupported)
}

fn request_frame(window: &Window, frame: &FrameCallback) -> Result<(), PageError> {
    if let Some(cb) = frame.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Size the canvas to the window, scatter the stars, and start the loop.
///
/// # Errors
///
/// Returns [`PageError::CanvasUnsupported`] when `#stars-canvas` is missing,
/// is not a canvas, or has no 2D context. Nothing is animated in that case.
pub fn mount(config: &PageConfig) -> Result<(), PageError> {
    let window = dom::window()?;
    let canvas = dom::document()?
        .get_element_by_id(STARS_CANVAS_ID)
        .ok_or(PageError::CanvasUnsupported)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PageError::CanvasUnsupported)?;
    let ctx = context_2d(&canvas)?;

    let (width, height) = inner_size(&window)?;
    size_canvas(&canvas, width, height);

    let mut rng = SmallRng::seed_from_u64(seed());
    let field = Starfield::new(width, height, config, &mut rng);
    let scene = Rc::new(RefCell::new(Scene { field, rng }));

    {
        let scene = Rc::clone(&scene);
        dom::listen(&canvas, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                scene
                    .borrow_mut()
                    .field
                    .set_pointer(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            }
        })?;
    }

    {
        let scene = Rc::clone(&scene);
        let canvas = canvas.clone();
        let resize_window = window.clone();
        dom::listen(&window, "resize", move |_| match inner_size(&resize_window) {
            Ok((width, height)) => {
                size_canvas(&canvas, width, height);
                scene.borrow_mut().field.resize(width, height);
            }
            Err(e) => log::warn!("starfield resize: {e}"),
        })?;
    }

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let frame_for_cb = Rc::clone(&frame);
    let loop_window = window.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        {
            let mut scene = scene.borrow_mut();
            let Scene { field, rng } = &mut *scene;
            field.step(rng);
            if let Err(e) = render::draw(&ctx, field) {
                log::warn!("starfield draw failed: {e:?}");
            }
        }
        if let Err(e) = request_frame(&loop_window, &frame_for_cb) {
            log::warn!("starfield stopped: {e}");
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&window, &frame)?;
    log::info!("starfield running with {} stars", config.star_count);
    Ok(())
}
