//! Light/dark theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `light-mode` class to `<body>` plus the matching glyph on `.theme-icon`.
//! Clicking `.theme-toggle` flips the theme and writes it back. Anything
//! other than exactly `"light"` in storage means dark.
//!
//! Persistence is best-effort: when storage is unavailable the toggle still
//! works for the current page and the failure is logged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_ICON, LIGHT_ICON, THEME_STORAGE_KEY};
use crate::error::PageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored flag. Only `"light"` selects the light theme.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => LIGHT_ICON,
            Self::Dark => DARK_ICON,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

/// String key/value persistence, `localStorage` in the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Read the saved theme, defaulting to dark.
pub fn read_preference<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref())
}

/// Flip `current`, persist the result, and return it.
///
/// A failed write is logged; the returned theme is still the flipped one.
pub fn toggle<S: KeyValueStore + ?Sized>(store: &mut S, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.set(THEME_STORAGE_KEY, next.as_str()) {
        log::warn!("theme not persisted: {e}");
    }
    log::debug!("theme -> {}", next.as_str());
    next
}

#[cfg(feature = "hydrate")]
pub use browser::{BrowserStore, apply, bind};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use web_sys::Storage;

    use super::{KeyValueStore, Theme, read_preference, toggle};
    use crate::consts::{LIGHT_MODE_CLASS, THEME_ICON, THEME_TOGGLE};
    use crate::dom;
    use crate::error::PageError;

    /// `localStorage`, or nothing when the browser denies access.
    pub struct BrowserStore(Option<Storage>);

    impl BrowserStore {
        #[must_use]
        pub fn local() -> Self {
            let storage = match web_sys::window().map(|w| w.local_storage()) {
                Some(Ok(storage)) => storage,
                _ => None,
            };
            Self(storage)
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            match self.0.as_ref()?.get_item(key) {
                Ok(value) => value,
                Err(_) => None,
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
            let storage = self.0.as_ref().ok_or_else(|| PageError::Js("local storage unavailable".to_owned()))?;
            storage.set_item(key, value)?;
            Ok(())
        }
    }

    /// Apply `theme` to `<body>` and the `.theme-icon` glyph.
    pub fn apply(theme: Theme) -> Result<(), PageError> {
        let body = dom::document()?.body().ok_or(PageError::MissingElement("body"))?;
        body.class_list().toggle_with_force(LIGHT_MODE_CLASS, theme.is_light())?;
        dom::query(THEME_ICON)?.set_text_content(Some(theme.icon()));
        Ok(())
    }

    /// Apply the saved theme and wire the `.theme-toggle` click handler.
    pub fn bind() -> Result<(), PageError> {
        let store = Rc::new(RefCell::new(BrowserStore::local()));
        let current = Rc::new(Cell::new(read_preference(&*store.borrow())));
        apply(current.get())?;

        let button = dom::query(THEME_TOGGLE)?;
        dom::listen(&button, "click", move |_| {
            let next = toggle(&mut *store.borrow_mut(), current.get());
            current.set(next);
            if let Err(e) = apply(next) {
                log::warn!("theme toggle: {e}");
            }
        })
    }
}
