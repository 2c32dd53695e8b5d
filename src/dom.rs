//! Thin DOM helpers shared by the browser-side components.
//!
//! Lookups return [`PageError`] instead of `Option` so wiring code can use
//! `?` and the boot sequence can report exactly which hook is missing.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoWindow)
}

/// First element matching `selector`.
pub fn query(selector: &'static str) -> Result<Element, PageError> {
    document()?
        .query_selector(selector)?
        .ok_or(PageError::MissingElement(selector))
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &'static str) -> Result<Vec<Element>, PageError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
