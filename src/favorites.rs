//! Favorite products, kept client-side in the `favorites` cookie.
//!
//! The cookie holds a URL-encoded JSON array of product ids. Clicking a
//! `.btn-favorite` flips membership of its `data-product`, updates the star
//! glyph and the enclosing `.deal-card[data-favorite]`, and rewrites the
//! cookie with a one-hour lifetime. There is no server sync; concurrent tabs
//! race and the last write wins.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use crate::consts::{FAVORITE_OFF_GLYPH, FAVORITE_ON_GLYPH, FAVORITES_COOKIE, FAVORITES_COOKIE_PATH};
use crate::error::PageError;

/// Ordered, duplicate-free list of favorite product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    /// Extract the favorites list from a `document.cookie` string.
    ///
    /// A missing cookie is an empty list. Duplicate ids written by some
    /// other party collapse to their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::CookieEncoding`] or [`PageError::MalformedCookie`]
    /// if the cookie value does not decode to a JSON array of strings.
    pub fn from_cookie_header(header: &str) -> Result<Self, PageError> {
        let Some(raw) = header
            .split("; ")
            .find_map(|row| row.split_once('=').filter(|(name, _)| *name == FAVORITES_COOKIE))
            .map(|(_, value)| value)
        else {
            return Ok(Self::default());
        };
        let decoded = urlencoding::decode(raw)?;
        let parsed: Vec<String> = serde_json::from_str(&decoded).map_err(PageError::MalformedCookie)?;
        let mut favorites = Self::default();
        for id in parsed {
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        Ok(favorites)
    }

    #[must_use]
    pub fn contains(&self, product: &str) -> bool {
        self.ids.iter().any(|id| id == product)
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Add `product` if absent, remove it if present.
    ///
    /// Returns `true` when `product` is a favorite afterwards.
    pub fn toggle(&mut self, product: &str) -> bool {
        if self.contains(product) {
            self.ids.retain(|id| id != product);
            false
        } else {
            self.ids.push(product.to_owned());
            true
        }
    }

    /// The URL-encoded JSON array stored as the cookie value.
    #[must_use]
    pub fn cookie_value(&self) -> String {
        let json = serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_owned());
        urlencoding::encode(&json).into_owned()
    }

    /// A full assignment string for `document.cookie`.
    #[must_use]
    pub fn to_set_cookie(&self, max_age_secs: u32) -> String {
        format!(
            "{FAVORITES_COOKIE}={}; path={FAVORITES_COOKIE_PATH}; max-age={max_age_secs}",
            self.cookie_value()
        )
    }
}

/// Outcome of one favorite click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteChange {
    pub is_favorite: bool,
    /// Assignment string for `document.cookie`.
    pub set_cookie: String,
}

/// Flip `product` in the favorites held by the `document.cookie` string
/// `header`.
///
/// # Errors
///
/// Propagates the parse error when the existing cookie is unreadable. The
/// caller must then leave the cookie and the page untouched, so favorites
/// written in another format survive.
pub fn toggle_in_cookie(header: &str, product: &str, max_age_secs: u32) -> Result<FavoriteChange, PageError> {
    let mut favorites = Favorites::from_cookie_header(header)?;
    let is_favorite = favorites.toggle(product);
    Ok(FavoriteChange { is_favorite, set_cookie: favorites.to_set_cookie(max_age_secs) })
}

/// Button text for a product's favorite state.
#[must_use]
pub fn glyph(is_favorite: bool) -> &'static str {
    if is_favorite { FAVORITE_ON_GLYPH } else { FAVORITE_OFF_GLYPH }
}

#[cfg(feature = "hydrate")]
pub use browser::bind;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlDocument};

    use super::{FavoriteChange, glyph, toggle_in_cookie};
    use crate::consts::{DEAL_CARD, FAVORITE_BUTTONS};
    use crate::dom;
    use crate::error::PageError;

    fn html_document() -> Result<HtmlDocument, PageError> {
        dom::document()?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| PageError::Js("document is not an HTML document".to_owned()))
    }

    fn on_click(button: &Element, max_age_secs: u32) -> Result<(), PageError> {
        let product = button
            .get_attribute("data-product")
            .ok_or(PageError::MissingElement("[data-product]"))?;
        let doc = html_document()?;
        let FavoriteChange { is_favorite, set_cookie } = toggle_in_cookie(&doc.cookie()?, &product, max_age_secs)?;

        button.set_text_content(Some(glyph(is_favorite)));
        match button.closest(DEAL_CARD)? {
            Some(card) => card.set_attribute("data-favorite", if is_favorite { "true" } else { "false" })?,
            None => log::warn!("favorite button for {product} has no enclosing deal card"),
        }
        doc.set_cookie(&set_cookie)?;
        log::debug!("favorite {product} -> {is_favorite}");
        Ok(())
    }

    /// Wire every `.btn-favorite` on the page.
    pub fn bind(max_age_secs: u32) -> Result<(), PageError> {
        for button in dom::query_all(FAVORITE_BUTTONS)? {
            let target = button.clone();
            dom::listen(&button, "click", move |_| {
                if let Err(e) = on_click(&target, max_age_secs) {
                    log::warn!("favorite toggle: {e}");
                }
            })?;
        }
        Ok(())
    }
}
