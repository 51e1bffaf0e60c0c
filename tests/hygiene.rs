//! Hygiene: source-level rules for the site crate, checked at test time.
//!
//! Production files under `src/` (sibling `*_test.rs` files excluded) are
//! scanned line by line. Each rule has a budget; budgets only go down.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, why: "panics" },
    Rule { pattern: ".expect(", budget: 0, why: "panics" },
    Rule { pattern: "panic!(", budget: 0, why: "panics" },
    Rule { pattern: "unreachable!(", budget: 0, why: "panics" },
    Rule { pattern: "todo!(", budget: 0, why: "unfinished stub" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "unfinished stub" },
    Rule { pattern: "let _ =", budget: 0, why: "discards a value without inspecting it" },
    // Both remaining uses log the browser error before converting it.
    Rule { pattern: ".ok()", budget: 2, why: "discards an error without inspecting it" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "hides unused code" },
    Rule { pattern: "Instant::now", budget: 0, why: "wall clock instead of the injected scheduler" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
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
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("lib.rs")),
        "hygiene scan found no lib.rs; is the working directory the crate root?"
    );
}

#[test]
fn every_rule_within_budget() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` ({}): found {count}, budget {}\n{detail}",
                rule.pattern, rule.why, rule.budget
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
