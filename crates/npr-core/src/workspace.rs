//! Workspace discovery and script intersection.
//!
//! Workspaces are the directories under the project root matched by the glob
//! patterns in the root manifest's `workspaces` field, each with its own
//! `package.json`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use npr_util::errors::NprError;
use walkdir::{DirEntry, WalkDir};

use crate::manifest::Manifest;

/// A single workspace package.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub name: String,
    /// Directory relative to the project root.
    pub dir: PathBuf,
    pub manifest: Manifest,
}

/// All workspaces of a project, keyed and ordered by name.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceSet {
    members: BTreeMap<String, Workspace>,
    unmatched_patterns: Vec<String>,
}

impl WorkspaceSet {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Workspace names in lexicographic order.
    pub fn names(&self) -> Vec<String> {
        self.members.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Workspace> {
        self.members.get(name)
    }

    /// Manifests of the named workspaces, skipping unknown names.
    pub fn manifests<'a>(&'a self, names: &[String]) -> Vec<&'a Manifest> {
        names
            .iter()
            .filter_map(|name| self.members.get(name).map(|ws| &ws.manifest))
            .collect()
    }

    /// Inclusion patterns that matched no directory.
    pub fn unmatched_patterns(&self) -> &[String] {
        &self.unmatched_patterns
    }
}

/// Compiled `workspaces` patterns.
struct WorkspacePatterns {
    include: GlobSet,
    include_sources: Vec<String>,
    exclude: GlobSet,
    /// `None` when a `**` pattern allows unbounded depth.
    max_depth: Option<usize>,
}

impl WorkspacePatterns {
    fn compile(patterns: &[String]) -> Result<Self, NprError> {
        let mut include = GlobSetBuilder::new();
        let mut include_sources = Vec::new();
        let mut exclude = GlobSetBuilder::new();
        let mut max_depth = Some(0);

        for raw in patterns {
            let (negated, pattern) = match raw.trim().strip_prefix('!') {
                Some(rest) => (true, normalize_pattern(rest)),
                None => (false, normalize_pattern(raw)),
            };
            if pattern.is_empty() {
                continue;
            }

            let glob = build_glob(&pattern)?;
            if negated {
                exclude.add(glob);
                continue;
            }

            max_depth = match max_depth {
                _ if pattern.contains("**") => None,
                Some(depth) => Some(depth.max(pattern.split('/').count())),
                None => None,
            };
            include.add(glob);
            include_sources.push(raw.clone());
        }

        Ok(Self {
            include: include.build().map_err(|e| NprError::InvalidWorkspacePattern {
                pattern: patterns.join(", "),
                message: e.to_string(),
            })?,
            include_sources,
            exclude: exclude.build().map_err(|e| NprError::InvalidWorkspacePattern {
                pattern: patterns.join(", "),
                message: e.to_string(),
            })?,
            max_depth,
        })
    }
}

fn build_glob(pattern: &str) -> Result<Glob, NprError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| NprError::InvalidWorkspacePattern {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })
}

/// Strip `./` prefixes and trailing slashes so patterns line up with walked paths.
fn normalize_pattern(pattern: &str) -> String {
    let mut p = pattern.trim();
    while let Some(rest) = p.strip_prefix("./") {
        p = rest;
    }
    p.trim_end_matches('/').to_string()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name == "node_modules" || name.starts_with('.'))
            .unwrap_or(false)
}

/// `/`-separated path of `path` relative to `root`.
fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = rel
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();
    Some(parts?.join("/"))
}

/// Find and load every workspace declared by `root`.
///
/// Fails on the first unreadable workspace manifest or on two directories
/// declaring the same package name.
pub fn discover(root_dir: &Path, root: &Manifest) -> miette::Result<WorkspaceSet> {
    let mut set = WorkspaceSet::default();
    if !root.has_workspaces() {
        return Ok(set);
    }

    let patterns = WorkspacePatterns::compile(&root.workspaces)?;
    let mut matched = vec![false; patterns.include_sources.len()];

    let mut walker = WalkDir::new(root_dir).min_depth(1).sort_by_file_name();
    if let Some(depth) = patterns.max_depth {
        walker = walker.max_depth(depth);
    }

    let entries = walker
        .into_iter()
        .filter_entry(|e| e.file_type().is_dir() && !is_skipped_dir(e));

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable directory: {e}");
                continue;
            }
        };
        let Some(rel) = relative_slash_path(root_dir, entry.path()) else {
            continue;
        };

        let hits = patterns.include.matches(&rel);
        if hits.is_empty() || patterns.exclude.is_match(&rel) {
            continue;
        }
        for idx in hits {
            matched[idx] = true;
        }

        let manifest = Manifest::from_dir(entry.path())?;
        let name = manifest
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from)
            .unwrap_or_else(|| rel.clone());

        if let Some(existing) = set.members.get(&name) {
            return Err(NprError::DuplicateWorkspaceName {
                name,
                first: existing.dir.clone(),
                second: PathBuf::from(&rel),
            }
            .into());
        }

        tracing::debug!(name = %name, dir = %rel, "found workspace");
        set.members.insert(
            name.clone(),
            Workspace {
                name,
                dir: PathBuf::from(rel),
                manifest,
            },
        );
    }

    set.unmatched_patterns = patterns
        .include_sources
        .iter()
        .zip(matched)
        .filter(|(_, hit)| !hit)
        .map(|(p, _)| p.clone())
        .collect();

    Ok(set)
}

/// Scripts offered for selection, sorted.
///
/// With no workspaces selected these are the root manifest's scripts;
/// otherwise only scripts defined by every selected workspace.
pub fn candidate_scripts(root: &Manifest, selected: &[&Manifest]) -> Vec<String> {
    let mut rest = selected.iter();
    let Some(first) = rest.next() else {
        return root.script_names();
    };

    let mut common: BTreeSet<&String> = first.scripts.keys().collect();
    for manifest in rest {
        common.retain(|script| manifest.scripts.contains_key(*script));
    }
    common.into_iter().cloned().collect()
}
