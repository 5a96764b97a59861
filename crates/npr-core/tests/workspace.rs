use std::fs;
use std::path::Path;

use npr_core::manifest::Manifest;
use npr_core::workspace::{candidate_scripts, discover};
use tempfile::TempDir;

fn write_package(dir: &Path, json: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("package.json"), json).unwrap();
}

fn manifest(json: &str) -> Manifest {
    Manifest::from_str(json, Path::new("package.json")).unwrap()
}

#[test]
fn test_discover_without_patterns_is_empty() {
    let tmp = TempDir::new().unwrap();
    let root = manifest(r#"{"scripts": {"dev": "vite"}}"#);
    let set = discover(tmp.path(), &root).unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_discover_finds_named_packages_sorted() {
    let tmp = TempDir::new().unwrap();
    write_package(
        &tmp.path().join("packages/zeta"),
        r#"{"name": "@acme/zeta", "scripts": {"build": "tsc"}}"#,
    );
    write_package(
        &tmp.path().join("packages/alpha"),
        r#"{"name": "@acme/alpha", "scripts": {"build": "tsc"}}"#,
    );
    let root = manifest(r#"{"workspaces": ["packages/*"]}"#);

    let set = discover(tmp.path(), &root).unwrap();
    assert_eq!(set.names(), vec!["@acme/alpha", "@acme/zeta"]);
    let alpha = set.get("@acme/alpha").unwrap();
    assert_eq!(alpha.dir, Path::new("packages/alpha"));
    assert!(alpha.manifest.scripts.contains_key("build"));
    assert!(set.unmatched_patterns().is_empty());
}

#[test]
fn test_discover_single_star_does_not_cross_directories() {
    let tmp = TempDir::new().unwrap();
    write_package(&tmp.path().join("packages/a"), r#"{"name": "a"}"#);
    write_package(&tmp.path().join("packages/a/nested"), r#"{"name": "nested"}"#);
    let root = manifest(r#"{"workspaces": ["./packages/*/"]}"#);

    let set = discover(tmp.path(), &root).unwrap();
    assert_eq!(set.names(), vec!["a"]);
}

#[test]
fn test_discover_double_star_skips_node_modules() {
    let tmp = TempDir::new().unwrap();
    write_package(&tmp.path().join("libs/core/util"), r#"{"name": "util"}"#);
    write_package(
        &tmp.path().join("libs/node_modules/util"),
        r#"{"name": "vendored-util"}"#,
    );
    let root = manifest(r#"{"workspaces": ["libs/**/util"]}"#);

    let set = discover(tmp.path(), &root).unwrap();
    assert_eq!(set.names(), vec!["util"]);
}

#[test]
fn test_discover_negated_pattern_excludes() {
    let tmp = TempDir::new().unwrap();
    write_package(&tmp.path().join("packages/a"), r#"{"name": "a"}"#);
    write_package(&tmp.path().join("packages/legacy"), r#"{"name": "legacy"}"#);
    let root = manifest(r#"{"workspaces": ["packages/*", "!packages/legacy"]}"#);

    let set = discover(tmp.path(), &root).unwrap();
    assert_eq!(set.names(), vec!["a"]);
}

#[test]
fn test_discover_unnamed_package_uses_path() {
    let tmp = TempDir::new().unwrap();
    write_package(&tmp.path().join("apps/web"), r#"{"scripts": {}}"#);
    let root = manifest(r#"{"workspaces": ["apps/*"]}"#);

    let set = discover(tmp.path(), &root).unwrap();
    assert_eq!(set.names(), vec!["apps/web"]);
}

#[test]
fn test_discover_duplicate_name_fails() {
    let tmp = TempDir::new().unwrap();
    write_package(&tmp.path().join("packages/a"), r#"{"name": "shared"}"#);
    write_package(&tmp.path().join("packages/b"), r#"{"name": "shared"}"#);
    let root = manifest(r#"{"workspaces": ["packages/*"]}"#);

    let err = discover(tmp.path(), &root).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Duplicate workspace name 'shared'"), "got: {msg}");
}

#[test]
fn test_discover_matched_dir_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("packages/empty")).unwrap();
    let root = manifest(r#"{"workspaces": ["packages/*"]}"#);

    let err = discover(tmp.path(), &root).unwrap_err();
    assert!(err.to_string().contains("package.json not found"), "got: {err}");
}

#[test]
fn test_discover_reports_unmatched_patterns() {
    let tmp = TempDir::new().unwrap();
    write_package(&tmp.path().join("packages/a"), r#"{"name": "a"}"#);
    let root = manifest(r#"{"workspaces": ["packages/*", "tools/*"]}"#);

    let set = discover(tmp.path(), &root).unwrap();
    assert_eq!(set.unmatched_patterns(), ["tools/*".to_string()]);
}

#[test]
fn test_discover_invalid_pattern_fails() {
    let tmp = TempDir::new().unwrap();
    let root = manifest(r#"{"workspaces": ["packages/[a"]}"#);
    let err = discover(tmp.path(), &root).unwrap_err();
    assert!(err.to_string().contains("Invalid workspace pattern"), "got: {err}");
}

#[test]
fn test_candidates_without_selection_are_root_scripts() {
    let root = manifest(r#"{"scripts": {"dev": "vite", "build": "tsc"}}"#);
    assert_eq!(candidate_scripts(&root, &[]), vec!["build", "dev"]);
}

#[test]
fn test_candidates_single_workspace() {
    let root = manifest(r#"{"scripts": {"dev": "vite"}}"#);
    let a = manifest(r#"{"scripts": {"test": "jest", "build": "tsc"}}"#);
    assert_eq!(candidate_scripts(&root, &[&a]), vec!["build", "test"]);
}

#[test]
fn test_candidates_intersect_selected_workspaces() {
    let root = manifest(r#"{"scripts": {"dev": "vite"}}"#);
    let a = manifest(r#"{"scripts": {"build": "tsc", "test": "jest"}}"#);
    let b = manifest(r#"{"scripts": {"build": "tsc", "lint": "eslint"}}"#);
    assert_eq!(candidate_scripts(&root, &[&a, &b]), vec!["build"]);
}

#[test]
fn test_candidates_disjoint_workspaces_are_empty() {
    let root = manifest(r#"{"scripts": {"dev": "vite"}}"#);
    let a = manifest(r#"{"scripts": {"test": "jest"}}"#);
    let b = manifest(r#"{"scripts": {"lint": "eslint"}}"#);
    assert!(candidate_scripts(&root, &[&a, &b]).is_empty());
}
