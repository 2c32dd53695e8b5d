//! Page configuration.
//!
//! Every knob defaults to the value in [`crate::consts`]. The server may embed
//! a `<script id="page-config" type="application/json">` block to override
//! any subset of them; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ACCENT_PROBABILITY, EASE_RATE, FAVORITES_MAX_AGE_SECS, RELOAD_DELAY_MS, REPEL_DIVISOR, REPEL_RADIUS, STAR_COUNT,
};
use crate::error::PageError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub reload_delay_ms: u32,
    pub star_count: usize,
    pub repel_radius: f64,
    pub repel_divisor: f64,
    pub ease_rate: f64,
    pub accent_probability: f64,
    pub favorites_max_age_secs: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reload_delay_ms: RELOAD_DELAY_MS,
            star_count: STAR_COUNT,
            repel_radius: REPEL_RADIUS,
            repel_divisor: REPEL_DIVISOR,
            ease_rate: EASE_RATE,
            accent_probability: ACCENT_PROBABILITY,
            favorites_max_age_secs: FAVORITES_MAX_AGE_SECS,
        }
    }
}

impl PageConfig {
    /// Parse overrides from the embedded JSON block.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] if `raw` is not a JSON object matching
    /// the config shape, or [`PageError::ConfigOutOfRange`] if a motion
    /// parameter would make the starfield diverge.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw).map_err(PageError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the motion parameters.
    ///
    /// The repel radius and divisor must be positive, the ease rate in
    /// `(0, 1]`, and the accent probability in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ConfigOutOfRange`] naming the first bad field.
    pub fn validate(&self) -> Result<(), PageError> {
        let checks = [
            ("repelRadius", self.repel_radius, self.repel_radius > 0.0),
            ("repelDivisor", self.repel_divisor, self.repel_divisor > 0.0),
            ("easeRate", self.ease_rate, self.ease_rate > 0.0 && self.ease_rate <= 1.0),
            ("accentProbability", self.accent_probability, (0.0..=1.0).contains(&self.accent_probability)),
        ];
        match checks.into_iter().find(|(_, _, ok)| !ok) {
            Some((field, value, _)) => Err(PageError::ConfigOutOfRange { field, value }),
            None => Ok(()),
        }
    }

    /// Read the `#page-config` element, falling back to defaults when it is
    /// absent, unparsable, or out of range.
    #[cfg(feature = "hydrate")]
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(crate::consts::PAGE_CONFIG_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}
