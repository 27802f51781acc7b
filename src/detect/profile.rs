//! Typed results of a detection run.

/// Flat record of detected language/runtime/framework choices.
///
/// `monorepo` is always meaningful; every other field is present only when a
/// priority table produced a match. At most one value wins per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackProfile {
    pub language: Option<String>,
    pub runtime: Option<String>,
    pub package_manager: Option<String>,
    pub monorepo: bool,
    pub frontend: Option<String>,
    pub backend: Option<String>,
    pub validation: Option<String>,
    pub styling: Option<String>,
    pub testing: Option<String>,
    pub orm: Option<String>,
}

/// Semantic roles of workspace member directories. Empty unless the project
/// is a monorepo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureProfile {
    pub api_dir: Option<String>,
    pub web_dir: Option<String>,
    pub shared_api_package: Option<String>,
    pub shared_api_dir: Option<String>,
    pub shared_packages: Vec<String>,
}

impl StructureProfile {
    pub fn is_empty(&self) -> bool {
        self.api_dir.is_none()
            && self.web_dir.is_none()
            && self.shared_api_package.is_none()
            && self.shared_api_dir.is_none()
            && self.shared_packages.is_empty()
    }
}

/// Manifest script names satisfying each verification category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationMap {
    pub typecheck: Option<String>,
    pub lint: Option<String>,
    pub test: Option<String>,
    pub build: Option<String>,
}

impl VerificationMap {
    pub fn is_empty(&self) -> bool {
        self.typecheck.is_none()
            && self.lint.is_none()
            && self.test.is_none()
            && self.build.is_none()
    }

    /// Mutable slot for a category name; unknown categories map to None.
    pub fn slot_mut(&mut self, category: &str) -> Option<&mut Option<String>> {
        match category {
            "typecheck" => Some(&mut self.typecheck),
            "lint" => Some(&mut self.lint),
            "test" => Some(&mut self.test),
            "build" => Some(&mut self.build),
            _ => None,
        }
    }
}

/// Plan enforcement is unconditional for every detected project.
pub const PLAN_ENFORCEMENT_DEFAULT: bool = true;

/// Discipline toggles derived from the stack profile. A pure function of the
/// profile; no filesystem input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineFlags {
    pub api_contracts: bool,
    pub plan_enforcement: bool,
}

impl DisciplineFlags {
    pub fn for_stack(stack: &StackProfile) -> Self {
        Self {
            api_contracts: stack.backend.is_some(),
            plan_enforcement: PLAN_ENFORCEMENT_DEFAULT,
        }
    }
}

/// Everything one detection run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub stack: StackProfile,
    pub structure: StructureProfile,
    pub verification: VerificationMap,
    pub disciplines: DisciplineFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_profile_empty() {
        assert!(StructureProfile::default().is_empty());

        let populated = StructureProfile {
            api_dir: Some("apps/api".to_string()),
            ..Default::default()
        };
        assert!(!populated.is_empty());
    }

    #[test]
    fn test_verification_map_slots() {
        let mut map = VerificationMap::default();
        *map.slot_mut("lint").unwrap() = Some("lint".to_string());

        assert_eq!(map.lint.as_deref(), Some("lint"));
        assert!(map.slot_mut("deploy").is_none());
        assert!(!map.is_empty());
    }

    #[test]
    fn test_disciplines_follow_backend() {
        let mut stack = StackProfile::default();
        let flags = DisciplineFlags::for_stack(&stack);
        assert!(!flags.api_contracts);
        assert!(flags.plan_enforcement);

        stack.backend = Some("express".to_string());
        let flags = DisciplineFlags::for_stack(&stack);
        assert!(flags.api_contracts);
        assert!(flags.plan_enforcement);
    }
}
