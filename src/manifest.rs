//! package.json access and dependency collection.
//!
//! A manifest that is missing, unreadable, or malformed contributes nothing:
//! it collapses to `None` rather than being partially parsed, and detection
//! proceeds without it.

use crate::fs::FileSystem;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, warn};

/// Root manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Directories that may hold workspace members, probed in this order.
/// Only one level of listing is done inside each; never recursive.
pub const WORKSPACE_PARENTS: [&str; 4] = ["apps", "packages", "services", "libs"];

/// The subset of package.json that detection reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(rename = "peerDependencies")]
    pub peer_dependencies: BTreeMap<String, serde_json::Value>,
    pub scripts: BTreeMap<String, String>,
    /// Presence alone matters; the shape (array or object) does not.
    pub workspaces: Option<serde_json::Value>,
}

impl PackageManifest {
    /// Reads and deserializes a manifest at the exact given path.
    pub fn read(fs: &dyn FileSystem, path: &Path) -> Option<Self> {
        if !fs.is_file(path) {
            return None;
        }

        let raw = match fs.read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "manifest unreadable, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(manifest) => Some(manifest),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring malformed manifest");
                None
            }
        }
    }

    pub fn has_workspaces(&self) -> bool {
        self.workspaces.is_some()
    }

    /// Script command for a given script name, if declared.
    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    fn dependency_names(&self) -> impl Iterator<Item = &String> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .chain(self.peer_dependencies.keys())
    }
}

/// Deduplicated union of dependency names across the root manifest and all
/// workspace-member manifests. Built once per run; immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    names: BTreeSet<String>,
}

impl DependencySet {
    /// Unions production, dev, and peer dependency names from the root
    /// manifest, then from each manifest one level under every existing
    /// workspace-parent directory.
    pub fn collect(fs: &dyn FileSystem, root: &Path) -> Self {
        let mut names = BTreeSet::new();

        if let Some(manifest) = PackageManifest::read(fs, &root.join(MANIFEST_FILE)) {
            names.extend(manifest.dependency_names().cloned());
        }

        for parent in WORKSPACE_PARENTS {
            let parent_dir = root.join(parent);
            if !fs.is_dir(&parent_dir) {
                continue;
            }
            let entries = match fs.read_dir(&parent_dir) {
                Ok(entries) => entries,
                Err(err) => {
                    debug!(dir = %parent_dir.display(), error = %err, "workspace parent unlistable");
                    continue;
                }
            };
            for entry in entries {
                let manifest_path = entry.path().join(MANIFEST_FILE);
                if let Some(manifest) = PackageManifest::read(fs, &manifest_path) {
                    names.extend(manifest.dependency_names().cloned());
                }
            }
        }

        debug!(count = names.len(), "collected dependency names");
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl FromIterator<String> for DependencySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
