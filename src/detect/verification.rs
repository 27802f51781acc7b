//! Verification script extraction from the root manifest.

use super::profile::VerificationMap;
use super::tables::VERIFICATION_SCRIPTS;
use crate::manifest::PackageManifest;

/// Maps well-known script names to verification categories. The table is
/// walked in declared order; once a category is filled it is never
/// overwritten. The recorded value is the script name itself.
pub fn extract_verification(root_manifest: Option<&PackageManifest>) -> VerificationMap {
    let mut map = VerificationMap::default();
    let Some(manifest) = root_manifest else {
        return map;
    };

    for (script_name, category) in VERIFICATION_SCRIPTS {
        if !manifest.scripts.contains_key(script_name) {
            continue;
        }
        if let Some(slot) = map.slot_mut(category) {
            if slot.is_none() {
                *slot = Some(script_name.to_string());
            }
        }
    }

    map
}
