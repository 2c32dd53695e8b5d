//! Hygiene: production code under `src/` must not panic or swallow errors.
//!
//! Each pattern has a budget of zero. Sibling `*_test.rs` files are exempt.

use std::fs;
use std::path::Path;

/// (pattern, why it is banned)
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics"),
    (".expect(", "panics"),
    ("panic!(", "panics"),
    ("unreachable!(", "panics"),
    ("todo!(", "stub left behind"),
    ("unimplemented!(", "stub left behind"),
    ("let _ =", "discards a result without inspecting it"),
    (".ok()", "discards an error without logging it"),
    ("#[allow(dead_code)]", "hides unused code"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn source_tree_is_found() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(name, _)| name.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn banned_patterns_stay_at_zero() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut violations = Vec::new();
    for (pattern, why) in BANNED {
        for (name, content) in &files {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 {
                violations.push(format!("  {name}: {count} x `{pattern}` ({why})"));
            }
        }
    }
    assert!(violations.is_empty(), "hygiene budget exceeded:\n{}", violations.join("\n"));
}
