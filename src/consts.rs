//! Shared constants for the storefront page glue.

// ── Reload ──────────────────────────────────────────────────────

/// Delay before the page reloads itself (30 minutes).
pub const RELOAD_DELAY_MS: u32 = 1_800_000;

/// Path the reload navigates to, before the cache-busting query.
pub const RELOAD_PATH: &str = "/";

/// Query parameter carrying the cache-busting timestamp.
pub const RELOAD_QUERY_PARAM: &str = "_";

// ── Starfield ───────────────────────────────────────────────────

pub const STAR_COUNT: usize = 200;

/// Pointer distance (CSS pixels) inside which stars are pushed away.
pub const REPEL_RADIUS: f64 = 150.0;

/// Penetration depth is divided by this to get the per-frame push.
pub const REPEL_DIVISOR: f64 = 50.0;

/// Fraction of the remaining distance to the base point covered per frame.
pub const EASE_RATE: f64 = 0.01;

pub const STAR_RADIUS_MIN: f64 = 0.3;
pub const STAR_RADIUS_SPAN: f64 = 0.5;

pub const STAR_SPEED_MIN: f64 = 0.1;
pub const STAR_SPEED_SPAN: f64 = 0.5;

/// Chance that a star is drawn in the accent color instead of white.
pub const ACCENT_PROBABILITY: f64 = 0.2;

pub const STAR_ACCENT_COLOR: &str = "#10b981";
pub const STAR_WHITE_COLOR: &str = "#ffffff";

pub const STAR_ALPHA: f64 = 0.7;

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "theme";
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const LIGHT_ICON: &str = "☀️";
pub const DARK_ICON: &str = "🌙";

// ── Favorites ───────────────────────────────────────────────────

pub const FAVORITES_COOKIE: &str = "favorites";
pub const FAVORITES_COOKIE_PATH: &str = "/";
pub const FAVORITES_MAX_AGE_SECS: u32 = 3600;
pub const FAVORITE_ON_GLYPH: &str = "★";
pub const FAVORITE_OFF_GLYPH: &str = "☆";

// ── DOM hooks ───────────────────────────────────────────────────

pub const STARS_CANVAS_ID: &str = "stars-canvas";
pub const PAGE_CONFIG_ID: &str = "page-config";
pub const THEME_TOGGLE: &str = ".theme-toggle";
pub const THEME_ICON: &str = ".theme-icon";
pub const RESET_BUTTON: &str = ".reset-button";
pub const FILTER_FORM: &str = ".search-filter-bar";
pub const DEALS_GRID: &str = ".deals-grid";
pub const PAGINATION_LINKS: &str = ".pagination a";
pub const FAVORITE_BUTTONS: &str = ".btn-favorite";
pub const DEAL_CARD: &str = ".deal-card";
pub const LOADING_CLASS: &str = "loading";
