use std::collections::HashMap;

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct MemoryStore {
    items: HashMap<String, String>,
    fail_writes: bool,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        if self.fail_writes {
            return Err(PageError::Js("quota exceeded".to_owned()));
        }
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn only_exact_light_selects_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn icons_follow_theme() {
    assert_eq!(Theme::Light.icon(), "☀️");
    assert_eq!(Theme::Dark.icon(), "🌙");
}

#[test]
fn toggled_twice_is_identity() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn empty_store_reads_as_dark() {
    assert_eq!(read_preference(&MemoryStore::default()), Theme::Dark);
}

#[test]
fn toggle_persists_new_value() {
    let mut store = MemoryStore::default();
    let next = toggle(&mut store, Theme::Dark);
    assert_eq!(next, Theme::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));

    let next = toggle(&mut store, next);
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn double_click_returns_to_original_and_survives_reload() {
    let mut store = MemoryStore::default();
    let start = read_preference(&store);
    let once = toggle(&mut store, start);
    // Reload after a single click picks up the new theme.
    assert_eq!(read_preference(&store), once);
    let twice = toggle(&mut store, once);
    assert_eq!(twice, start);
    assert_eq!(read_preference(&store), start);
}

#[test]
fn failed_write_still_flips_theme() {
    let mut store = MemoryStore { fail_writes: true, ..MemoryStore::default() };
    assert_eq!(toggle(&mut store, Theme::Dark), Theme::Light);
    assert_eq!(read_preference(&store), Theme::Dark);
}
