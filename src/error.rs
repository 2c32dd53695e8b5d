//! Error type shared by every page component.
//!
//! Components never throw into the browser. Wiring functions return
//! `Result<(), PageError>` and the boot sequence logs failures and moves on
//! to the next component.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no browser window")]
    NoWindow,
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("canvas element not found or unsupported")]
    CanvasUnsupported,
    #[error("malformed favorites cookie: {0}")]
    MalformedCookie(#[source] serde_json::Error),
    #[error("favorites cookie is not valid UTF-8: {0}")]
    CookieEncoding(#[from] std::string::FromUtf8Error),
    #[error("invalid page config: {0}")]
    Config(#[source] serde_json::Error),
    #[error("invalid page config: {field} = {value} is out of range")]
    ConfigOutOfRange { field: &'static str, value: f64 },
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
