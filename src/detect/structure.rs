//! Workspace member role inference for monorepos.

use super::profile::StructureProfile;
use super::tables::{API_DIR_LABELS, WEB_DIR_LABELS};
use crate::fs::FileSystem;
use crate::manifest::{PackageManifest, MANIFEST_FILE, WORKSPACE_PARENTS};
use std::path::Path;
use tracing::debug;

/// Classifies workspace member directories into semantic roles.
///
/// No-op unless the project is a monorepo. Listings are sorted by name so
/// the result does not depend on filesystem iteration order; when several
/// entries match the same role label, the last one in sorted order wins.
pub fn infer_structure(fs: &dyn FileSystem, root: &Path, monorepo: bool) -> StructureProfile {
    let mut structure = StructureProfile::default();
    if !monorepo {
        return structure;
    }

    for parent in WORKSPACE_PARENTS {
        let parent_dir = root.join(parent);
        if !fs.is_dir(&parent_dir) {
            continue;
        }
        let mut entries = match fs.read_dir(&parent_dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %parent_dir.display(), error = %err, "workspace parent unlistable");
                continue;
            }
        };
        entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

        for entry in entries {
            let Some(manifest) = PackageManifest::read(fs, &entry.path().join(MANIFEST_FILE)) else {
                continue;
            };
            let entry_path = format!("{parent}/{}", entry.file_name());
            let package_name = manifest.name.as_deref().unwrap_or("");

            match parent {
                "packages" => {
                    if entry.file_name().to_lowercase().contains("api") && !package_name.is_empty() {
                        structure.shared_api_package = Some(package_name.to_string());
                        structure.shared_api_dir = Some(entry_path.clone());
                    }
                    if !package_name.is_empty() {
                        structure.shared_packages.push(entry_path);
                    }
                }
                "apps" => {
                    let label = entry.file_name().to_lowercase();
                    if API_DIR_LABELS.contains(&label.as_str()) {
                        structure.api_dir = Some(entry_path);
                    } else if WEB_DIR_LABELS.contains(&label.as_str()) {
                        structure.web_dir = Some(entry_path);
                    }
                }
                _ => {}
            }
        }
    }

    structure
}
