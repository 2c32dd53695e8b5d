//! Periodic full-page reload with a cache-busting query.
//!
//! The timer is armed once per page load and never cancelled; the reload
//! itself arms the next one.

#[cfg(test)]
#[path = "reload_test.rs"]
mod reload_test;

use crate::consts::{RELOAD_PATH, RELOAD_QUERY_PARAM};

/// Target URL for a reload at `now_ms` (milliseconds since the epoch).
#[must_use]
pub fn reload_url(now_ms: f64) -> String {
    format!("{RELOAD_PATH}?{RELOAD_QUERY_PARAM}={:.0}", now_ms.max(0.0).trunc())
}

/// Arm the reload timer.
#[cfg(feature = "hydrate")]
pub fn schedule(delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, || {
        let url = reload_url(js_sys::Date::now());
        log::info!("reloading page: {url}");
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(&url) {
            log::warn!("reload navigation failed: {e:?}");
        }
    })
    .forget();
}
