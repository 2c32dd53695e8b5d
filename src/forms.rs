//! Filter form and listing conveniences.
//!
//! - `.reset-button` clears `.search-filter-bar` and resubmits it at once.
//! - Submitting the filter form or following a `.pagination a` link marks
//!   `.deals-grid` as `loading` until the next page replaces it.
//! - A page restored from the back/forward cache drops the stale `loading`
//!   class, since no navigation will follow to clear it.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::consts::LOADING_CLASS;
use crate::error::PageError;

/// The filter form, `HtmlFormElement` in the browser.
pub trait FilterForm {
    fn reset(&self);

    /// # Errors
    ///
    /// Returns an error if the browser refuses the submission.
    fn submit(&self) -> Result<(), PageError>;
}

/// Anything whose class list can be edited.
pub trait ClassTarget {
    /// # Errors
    ///
    /// Returns an error if the class list rejects the token.
    fn add_class(&self, class: &str) -> Result<(), PageError>;

    /// # Errors
    ///
    /// Returns an error if the class list rejects the token.
    fn remove_class(&self, class: &str) -> Result<(), PageError>;
}

/// Clear every field, then submit. Both happen before this returns.
///
/// # Errors
///
/// Propagates a failed submission.
pub fn reset_and_resubmit<F: FilterForm + ?Sized>(form: &F) -> Result<(), PageError> {
    form.reset();
    form.submit()
}

/// # Errors
///
/// Propagates a class list failure.
pub fn mark_loading<T: ClassTarget + ?Sized>(grid: &T) -> Result<(), PageError> {
    grid.add_class(LOADING_CLASS)
}

/// # Errors
///
/// Propagates a class list failure.
pub fn clear_loading<T: ClassTarget + ?Sized>(grid: &T) -> Result<(), PageError> {
    grid.remove_class(LOADING_CLASS)
}

#[cfg(feature = "hydrate")]
pub use browser::{bind_loading, bind_reset};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlFormElement, PageTransitionEvent};

    use super::{ClassTarget, FilterForm, clear_loading, mark_loading, reset_and_resubmit};
    use crate::consts::{DEALS_GRID, FILTER_FORM, PAGINATION_LINKS, RESET_BUTTON};
    use crate::dom;
    use crate::error::PageError;

    impl FilterForm for HtmlFormElement {
        fn reset(&self) {
            HtmlFormElement::reset(self);
        }

        fn submit(&self) -> Result<(), PageError> {
            HtmlFormElement::submit(self)?;
            Ok(())
        }
    }

    impl ClassTarget for Element {
        fn add_class(&self, class: &str) -> Result<(), PageError> {
            self.class_list().add_1(class)?;
            Ok(())
        }

        fn remove_class(&self, class: &str) -> Result<(), PageError> {
            self.class_list().remove_1(class)?;
            Ok(())
        }
    }

    fn filter_form() -> Result<HtmlFormElement, PageError> {
        dom::query(FILTER_FORM)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PageError::MissingElement(FILTER_FORM))
    }

    fn with_grid(action: fn(&Element) -> Result<(), PageError>) {
        if let Err(e) = dom::query(DEALS_GRID).and_then(|grid| action(&grid)) {
            log::warn!("loading state: {e}");
        }
    }

    /// Wire `.reset-button`. Pages without one are left alone.
    pub fn bind_reset() -> Result<(), PageError> {
        let button = match dom::query(RESET_BUTTON) {
            Ok(button) => button,
            Err(PageError::MissingElement(_)) => return Ok(()),
            Err(e) => return Err(e),
        };
        dom::listen(&button, "click", |_| {
            if let Err(e) = filter_form().and_then(|form| reset_and_resubmit(&form)) {
                log::warn!("filter reset: {e}");
            }
        })
    }

    /// Wire the loading indicator to form submission, pagination clicks,
    /// and back/forward cache restores.
    pub fn bind_loading() -> Result<(), PageError> {
        match dom::query(FILTER_FORM) {
            Ok(form) => dom::listen(&form, "submit", |_| with_grid(mark_loading))?,
            Err(PageError::MissingElement(_)) => {}
            Err(e) => return Err(e),
        }
        for link in dom::query_all(PAGINATION_LINKS)? {
            dom::listen(&link, "click", |_| with_grid(mark_loading))?;
        }
        let window = dom::window()?;
        dom::listen(&window, "pageshow", |event| {
            let restored = event
                .dyn_ref::<PageTransitionEvent>()
                .is_some_and(PageTransitionEvent::persisted);
            if restored {
                with_grid(clear_loading);
            }
        })
    }
}
