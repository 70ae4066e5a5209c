//! Every message id referenced through the `t!` macro must exist in the
//! fallback locale, otherwise the dashboard shows raw ids.
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "ocev-ui.ftl";

fn is_id_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message ids defined in a Fluent file. Terms, attributes, comments and
/// continuation lines are skipped.
fn defined_ids(ftl: &str) -> BTreeSet<String> {
    ftl.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.starts_with('-') && id.chars().all(is_id_char))
        .map(str::to_string)
        .collect()
}

/// Literal ids passed to the `t!` macro in one source file.
fn referenced_ids(source: &str) -> Vec<String> {
    let needle = concat!("t!(", "\"");
    source
        .match_indices(needle)
        .filter_map(|(pos, _)| {
            let rest = &source[pos + needle.len()..];
            let end = rest.find('"')?;
            let id = &rest[..end];
            id.chars().all(is_id_char).then(|| id.to_string())
        })
        .collect()
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|e| e.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

#[test]
fn referenced_ids_exist_in_fallback_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = crate_root.join("i18n").join("en-US").join(FTL_FILENAME);
    let ftl = fs::read_to_string(&fallback).expect("fallback FTL file is readable");
    let defined = defined_ids(&ftl);
    assert!(!defined.is_empty(), "no messages parsed from {fallback:?}");

    let mut missing = BTreeSet::new();
    let mut referenced = BTreeSet::new();
    for file in rust_sources(&crate_root.join("src")) {
        let source = fs::read_to_string(&file).expect("source file is readable");
        for id in referenced_ids(&source) {
            if !defined.contains(&id) {
                missing.insert(format!("{id} ({})", file.display()));
            }
            referenced.insert(id);
        }
    }

    assert!(
        missing.is_empty(),
        "message ids used in code but absent from en-US/{FTL_FILENAME}:\n  {}",
        missing.into_iter().collect::<Vec<_>>().join("\n  ")
    );

    let unused: Vec<_> = defined.difference(&referenced).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] {} fallback ids not referenced from code: {unused:?}", unused.len());
    }
}

#[test]
fn parser_skips_terms_and_attributes() {
    let ftl = "# comment\n-brand = OCEV\nnav-dashboard = Dashboard\n    .title = hover\nmulti =\n    continued = no\n";
    let ids = defined_ids(ftl);
    assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["multi", "nav-dashboard"]);
}
