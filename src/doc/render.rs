//! Document renderer.
//!
//! Serializes a [`ProjectConfig`] into the front-matter dialect. Block and
//! field order is fixed so that re-running detection over an unchanged tree
//! yields a byte-identical document.

use super::FRONT_MATTER_MARKER;
use crate::detect::ProjectConfig;

const NOTES_HEADER: &str = "# Project Notes";
const NOTES_PLACEHOLDER: &str = "Add project-specific context here (optional, free-form).";

/// Renders the full document: front-matter plus the trailing free-form
/// section. Empty blocks are omitted entirely; the `stack:` block always
/// carries at least `monorepo`.
pub fn render(config: &ProjectConfig) -> String {
    let mut lines: Vec<String> = vec![FRONT_MATTER_MARKER.to_string()];

    lines.push("stack:".to_string());
    push_opt(&mut lines, "language", &config.stack.language);
    push_opt(&mut lines, "runtime", &config.stack.runtime);
    push_opt(&mut lines, "package_manager", &config.stack.package_manager);
    push_bool(&mut lines, "monorepo", config.stack.monorepo);
    push_opt(&mut lines, "frontend", &config.stack.frontend);
    push_opt(&mut lines, "backend", &config.stack.backend);
    push_opt(&mut lines, "validation", &config.stack.validation);
    push_opt(&mut lines, "styling", &config.stack.styling);
    push_opt(&mut lines, "testing", &config.stack.testing);
    push_opt(&mut lines, "orm", &config.stack.orm);

    if !config.structure.is_empty() {
        lines.push("structure:".to_string());
        push_opt(&mut lines, "api_dir", &config.structure.api_dir);
        push_opt(&mut lines, "web_dir", &config.structure.web_dir);
        push_opt(
            &mut lines,
            "shared_api_package",
            &config.structure.shared_api_package,
        );
        push_opt(&mut lines, "shared_api_dir", &config.structure.shared_api_dir);
        if !config.structure.shared_packages.is_empty() {
            lines.push("  shared_packages:".to_string());
            for item in &config.structure.shared_packages {
                lines.push(format!("    - {item}"));
            }
        }
    }

    if !config.verification.is_empty() {
        lines.push("verification:".to_string());
        push_opt(&mut lines, "typecheck", &config.verification.typecheck);
        push_opt(&mut lines, "lint", &config.verification.lint);
        push_opt(&mut lines, "test", &config.verification.test);
        push_opt(&mut lines, "build", &config.verification.build);
    }

    lines.push("disciplines:".to_string());
    push_bool(&mut lines, "api_contracts", config.disciplines.api_contracts);
    push_bool(
        &mut lines,
        "plan_enforcement",
        config.disciplines.plan_enforcement,
    );

    lines.push(FRONT_MATTER_MARKER.to_string());
    lines.push(String::new());
    lines.push(NOTES_HEADER.to_string());
    lines.push(String::new());
    lines.push(NOTES_PLACEHOLDER.to_string());
    lines.push(String::new());

    lines.join("\n")
}

fn push_opt(lines: &mut Vec<String>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        lines.push(format!("  {key}: {value}"));
    }
}

fn push_bool(lines: &mut Vec<String>, key: &str, value: bool) {
    lines.push(format!("  {key}: {value}"));
}
