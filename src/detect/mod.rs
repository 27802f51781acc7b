//! Heuristic stack detection.
//!
//! One bounded, synchronous pass: probe a fixed set of paths, collect
//! dependency names from the root and workspace-member manifests, then walk
//! the priority tables. Every failed probe degrades to "absent" and the run
//! proceeds; nothing here returns an error.

pub mod classifier;
pub mod profile;
pub mod structure;
pub mod tables;
pub mod verification;

pub use profile::{
    DisciplineFlags, ProjectConfig, StackProfile, StructureProfile, VerificationMap,
    PLAN_ENFORCEMENT_DEFAULT,
};

use crate::fs::FileSystem;
use crate::manifest::{DependencySet, PackageManifest, MANIFEST_FILE};
use std::path::Path;
use tracing::debug;

/// Runs the full detection pass against a project root.
///
/// Idempotent: two runs over an unchanged tree produce identical configs.
pub fn detect(fs: &dyn FileSystem, root: &Path) -> ProjectConfig {
    debug!(root = %root.display(), "detecting project stack");

    let root_manifest = PackageManifest::read(fs, &root.join(MANIFEST_FILE));

    let language = classifier::detect_language(fs, root);
    let package_manager = classifier::detect_package_manager(fs, root);
    let runtime = classifier::detect_runtime(language, package_manager);
    let monorepo = classifier::detect_monorepo(fs, root, root_manifest.as_ref());

    let mut stack = StackProfile {
        language: language.map(str::to_string),
        runtime: runtime.map(str::to_string),
        package_manager: package_manager.map(str::to_string),
        monorepo,
        ..Default::default()
    };

    // Dependency tables only apply to the JS family; other ecosystems get an
    // empty set and the category fields stay unset.
    if matches!(language, Some("typescript") | Some("javascript")) {
        let deps = DependencySet::collect(fs, root);
        classifier::classify_dependencies(&mut stack, &deps, root_manifest.as_ref());
    }

    let structure = structure::infer_structure(fs, root, monorepo);
    let verification = verification::extract_verification(root_manifest.as_ref());
    let disciplines = DisciplineFlags::for_stack(&stack);

    debug!(
        language = ?stack.language,
        monorepo = stack.monorepo,
        "detection complete"
    );

    ProjectConfig {
        stack,
        structure,
        verification,
        disciplines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_react_express_vitest_scenario() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "package.json",
            r#"{"dependencies": {"react": "^18", "express": "^4"}, "devDependencies": {"vitest": "^1"}}"#,
        );

        let config = detect(&fs, fs.root());
        assert_eq!(config.stack.language.as_deref(), Some("javascript"));
        assert_eq!(config.stack.runtime.as_deref(), Some("node"));
        assert_eq!(config.stack.package_manager, None);
        assert!(!config.stack.monorepo);
        assert_eq!(config.stack.frontend.as_deref(), Some("react"));
        assert_eq!(config.stack.backend.as_deref(), Some("express"));
        assert_eq!(config.stack.testing.as_deref(), Some("vitest"));
        assert!(config.disciplines.api_contracts);
        assert!(config.disciplines.plan_enforcement);
    }

    #[test]
    fn test_empty_root_manifest_boundary() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", "{}");

        let config = detect(&fs, fs.root());
        assert_eq!(config.stack.language.as_deref(), Some("javascript"));
        assert!(!config.stack.monorepo);
        assert_eq!(config.stack.frontend, None);
        assert_eq!(config.stack.backend, None);
        assert!(config.structure.is_empty());
        assert!(config.verification.is_empty());
        assert!(!config.disciplines.api_contracts);
        assert!(config.disciplines.plan_enforcement);
    }

    #[test]
    fn test_rust_project_skips_dependency_tables() {
        let fs = MockFileSystem::new();
        fs.add_file("Cargo.toml", "[package]\nname = \"demo\"\n");

        let config = detect(&fs, fs.root());
        assert_eq!(config.stack.language.as_deref(), Some("rust"));
        assert_eq!(config.stack.runtime, None);
        assert_eq!(config.stack.frontend, None);
    }

    #[test]
    fn test_monorepo_end_to_end() {
        let fs = MockFileSystem::new();
        fs.add_file("pnpm-workspace.yaml", "packages:\n  - apps/*\n");
        fs.add_file("pnpm-lock.yaml", "");
        fs.add_file(
            "package.json",
            r#"{"scripts": {"lint": "eslint .", "build": "turbo build"}}"#,
        );
        fs.add_file("apps/api/tsconfig.json", "{}");
        fs.add_file(
            "apps/api/package.json",
            r#"{"name": "@demo/api", "dependencies": {"hono": "^4", "zod": "^3"}}"#,
        );
        fs.add_file(
            "apps/web/package.json",
            r#"{"name": "@demo/web", "dependencies": {"react": "^18"}}"#,
        );
        fs.add_file(
            "packages/api-schema/package.json",
            r#"{"name": "@demo/api-schema"}"#,
        );

        let config = detect(&fs, fs.root());
        assert_eq!(config.stack.language.as_deref(), Some("typescript"));
        assert_eq!(config.stack.runtime.as_deref(), Some("node"));
        assert_eq!(config.stack.package_manager.as_deref(), Some("pnpm"));
        assert!(config.stack.monorepo);
        assert_eq!(config.stack.frontend.as_deref(), Some("react"));
        assert_eq!(config.stack.backend.as_deref(), Some("hono"));
        assert_eq!(config.stack.validation.as_deref(), Some("zod"));

        assert_eq!(config.structure.api_dir.as_deref(), Some("apps/api"));
        assert_eq!(config.structure.web_dir.as_deref(), Some("apps/web"));
        assert_eq!(
            config.structure.shared_api_package.as_deref(),
            Some("@demo/api-schema")
        );
        assert_eq!(
            config.structure.shared_packages,
            vec!["packages/api-schema"]
        );

        assert_eq!(config.verification.lint.as_deref(), Some("lint"));
        assert_eq!(config.verification.build.as_deref(), Some("build"));
        assert!(config.verification.typecheck.is_none());
    }

    #[test]
    fn test_detection_is_idempotent() {
        let fs = MockFileSystem::new();
        fs.add_file("turbo.json", "{}");
        fs.add_file(
            "package.json",
            r#"{"workspaces": ["apps/*"], "dependencies": {"next": "^14"}, "scripts": {"test": "jest"}}"#,
        );
        fs.add_file("apps/web/package.json", r#"{"name": "web"}"#);

        let first = detect(&fs, fs.root());
        let second = detect(&fs, fs.root());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_directory() {
        let fs = MockFileSystem::new();
        fs.add_dir("empty");

        let config = detect(&fs, fs.root());
        assert_eq!(config.stack.language, None);
        assert!(!config.stack.monorepo);
        assert!(config.structure.is_empty());
        assert!(config.verification.is_empty());
    }
}
