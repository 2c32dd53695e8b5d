//! Boot sequence: wire every component independently.
//!
//! A component that fails to wire is logged and skipped; the rest still run.
//! Wiring waits for `DOMContentLoaded` when the module is instantiated
//! before the document has finished parsing.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Whether a document in `ready_state` is still parsing, so its hooks may
/// not exist yet.
#[must_use]
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(feature = "hydrate")]
pub use browser::{boot, boot_when_ready};

#[cfg(feature = "hydrate")]
mod browser {
    use super::waits_for_dom;
    use crate::config::PageConfig;
    use crate::dom;
    use crate::error::PageError;
    use crate::{animation, favorites, forms, reload, theme};

    fn report(component: &str, result: Result<(), PageError>) {
        if let Err(e) = result {
            log::warn!("{component} disabled: {e}");
        }
    }

    /// Arm the reload timer and attach every page behavior.
    pub fn boot(config: &PageConfig) {
        reload::schedule(config.reload_delay_ms);
        report("starfield", animation::mount(config));
        report("theme toggle", theme::bind());
        report("filter reset", forms::bind_reset());
        report("loading indicator", forms::bind_loading());
        report("favorites", favorites::bind(config.favorites_max_age_secs));
    }

    /// Run [`boot`] now, or once the document finishes parsing.
    pub fn boot_when_ready(config: PageConfig) {
        let document = match dom::document() {
            Ok(document) => document,
            Err(e) => {
                log::warn!("page glue disabled: {e}");
                return;
            }
        };
        if !waits_for_dom(&document.ready_state()) {
            boot(&config);
            return;
        }
        log::debug!("document still loading; deferring boot");
        report("boot", dom::listen(&document, "DOMContentLoaded", move |_| boot(&config)));
    }
}
