//! Hygiene — enforces coding standards at test time
//!
//! Scans the floorplan crate's production sources for antipatterns. Each
//! pattern has a budget (zero); adding an occurrence means fixing one first.

use std::fs;
use std::path::{Path, PathBuf};

/// Patterns that must not appear in non-test sources, with their budgets.
const BUDGETS: &[(&str, usize)] = &[
    // Panics crash the whole widget inside the host page.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent error loss.
    ("let _ =", 0),
    (".ok()", 0),
    // Structure.
    ("#[allow(dead_code)]", 0),
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");
    files
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            // Sibling `*_test.rs` files are test code; budgets don't apply.
            if path.to_string_lossy().ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn antipattern_budgets() {
    let files = production_sources();
    let mut report = String::new();

    for &(pattern, budget) in BUDGETS {
        let mut count = 0;
        for (path, content) in &files {
            for (lineno, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    count += 1;
                    report.push_str(&format!("  {}:{}: {pattern}\n", path.display(), lineno + 1));
                }
            }
        }
        assert!(
            count <= budget,
            "budget exceeded for {pattern:?}: found {count}, max {budget}\n{report}"
        );
    }
}
