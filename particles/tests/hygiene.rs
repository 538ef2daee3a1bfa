//! Hygiene: keeps panics and swallowed errors out of the simulation
//!
//! Scans the particles crate source tree for antipatterns. Each has a budget
//! of zero; a frame callback that panics takes the whole page's animation
//! down with it.

use std::fs;
use std::path::Path;

const BUDGETS: &[(&str, &str)] = &[
    (".unwrap()", ".unwrap()"),
    (".expect(", ".expect()"),
    ("panic!(", "panic!()"),
    ("unreachable!(", "unreachable!()"),
    ("todo!(", "todo!()"),
    ("unimplemented!(", "unimplemented!()"),
    ("let _ =", "let _ ="),
    (".ok()", ".ok()"),
    ("map_or(None", "map_or(None, ..)"),
    ("#[allow(dead_code)]", "#[allow(dead_code)]"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "no sources under src/");
}

#[test]
fn antipattern_budgets_are_zero() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, label) in BUDGETS {
        for (path, count) in hits(&files, pattern) {
            report.push(format!("  {label}: {path}: {count}"));
        }
    }
    assert!(report.is_empty(), "hygiene budget exceeded:\n{}", report.join("\n"));
}
