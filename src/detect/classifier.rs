//! Priority-ordered heuristic classification.
//!
//! Every decision here is either a first-match-wins walk over a table in
//! [`super::tables`] or a boolean OR of independent markers. Absence of all
//! signals leaves the field unset; nothing in this module errors.

use super::tables;
use crate::fs::FileSystem;
use crate::manifest::{DependencySet, PackageManifest, WORKSPACE_PARENTS};
use std::path::Path;
use tracing::debug;

/// Detects the primary language by an ordered chain of marker files.
///
/// Monorepos often keep tsconfig only inside workspace members, so when the
/// root markers are absent the chain scans one level into each
/// workspace-parent directory before falling through to other languages.
pub fn detect_language(fs: &dyn FileSystem, root: &Path) -> Option<&'static str> {
    for marker in tables::TYPESCRIPT_MARKERS {
        if fs.is_file(&root.join(marker)) {
            return Some("typescript");
        }
    }

    for parent in WORKSPACE_PARENTS {
        let parent_dir = root.join(parent);
        if !fs.is_dir(&parent_dir) {
            continue;
        }
        if let Ok(entries) = fs.read_dir(&parent_dir) {
            for entry in entries {
                if fs.is_file(&entry.path().join("tsconfig.json")) {
                    return Some("typescript");
                }
            }
        }
    }

    if fs.is_file(&root.join("package.json")) {
        return Some("javascript");
    }
    if fs.is_file(&root.join("Cargo.toml")) {
        return Some("rust");
    }
    if fs.is_file(&root.join("pyproject.toml")) || fs.is_file(&root.join("setup.py")) {
        return Some("python");
    }
    if fs.is_file(&root.join("go.mod")) {
        return Some("go");
    }

    None
}

/// Detects the package manager from lockfile names, first match wins.
pub fn detect_package_manager(fs: &dyn FileSystem, root: &Path) -> Option<&'static str> {
    tables::LOCKFILES
        .iter()
        .find(|(lockfile, _)| fs.is_file(&root.join(lockfile)))
        .map(|(_, manager)| *manager)
}

/// Derives the runtime: bun overrides everything, otherwise a JS-family
/// language implies node.
pub fn detect_runtime(
    language: Option<&str>,
    package_manager: Option<&str>,
) -> Option<&'static str> {
    if package_manager == Some("bun") {
        return Some("bun");
    }
    if matches!(language, Some("typescript") | Some("javascript")) {
        return Some("node");
    }
    None
}

/// True if any monorepo marker file exists or the root manifest declares a
/// workspaces field. Independent signals, not a priority chain.
pub fn detect_monorepo(
    fs: &dyn FileSystem,
    root: &Path,
    root_manifest: Option<&PackageManifest>,
) -> bool {
    tables::MONOREPO_MARKERS
        .iter()
        .any(|marker| fs.is_file(&root.join(marker)))
        || root_manifest.is_some_and(PackageManifest::has_workspaces)
}

fn scan_table(table: &[(&str, &str)], deps: &DependencySet) -> Option<String> {
    table
        .iter()
        .find(|(dep, _)| deps.contains(dep))
        .map(|(_, value)| (*value).to_string())
}

/// Fills the six dependency-driven categories of `stack` from the collected
/// dependency set. Scans are independent of each other; within each table
/// declared order is the tie-break.
pub fn classify_dependencies(
    stack: &mut crate::detect::StackProfile,
    deps: &DependencySet,
    root_manifest: Option<&PackageManifest>,
) {
    stack.frontend = scan_table(&tables::FRONTEND_DEPS, deps);

    // next serves both halves: it implies a backend unless it already claimed
    // the frontend slot, and any dedicated backend framework overrides it.
    if deps.contains("next") && stack.frontend.is_none() {
        stack.backend = Some("next".to_string());
    }
    if let Some(backend) = scan_table(&tables::BACKEND_DEPS, deps) {
        stack.backend = Some(backend);
    }

    stack.validation = scan_table(&tables::VALIDATION_DEPS, deps);
    stack.styling = scan_table(&tables::STYLING_DEPS, deps);

    stack.testing = scan_table(&tables::TESTING_DEPS, deps);
    if stack.testing.is_none() && stack.package_manager.as_deref() == Some("bun") {
        let test_script = root_manifest.and_then(|m| m.script("test")).unwrap_or("");
        if test_script.contains("bun test") || test_script.contains("bun run test") {
            stack.testing = Some("bun-test".to_string());
        }
    }

    stack.orm = scan_table(&tables::ORM_DEPS, deps);

    debug!(
        frontend = ?stack.frontend,
        backend = ?stack.backend,
        testing = ?stack.testing,
        "classified dependency categories"
    );
}
