//! Renderer/parser agreement: everything the renderer emits must parse back
//! with no information loss.

use serde_json::json;
use stackscan::{
    parse_front_matter, render, DisciplineFlags, ProjectConfig, StackProfile, StructureProfile,
    VerificationMap,
};

fn config(
    stack: StackProfile,
    structure: StructureProfile,
    verification: VerificationMap,
) -> ProjectConfig {
    let disciplines = DisciplineFlags::for_stack(&stack);
    ProjectConfig {
        stack,
        structure,
        verification,
        disciplines,
    }
}

#[test]
fn test_full_config_round_trip() {
    let cfg = config(
        StackProfile {
            language: Some("typescript".to_string()),
            runtime: Some("node".to_string()),
            package_manager: Some("pnpm".to_string()),
            monorepo: true,
            frontend: Some("react".to_string()),
            backend: Some("hono".to_string()),
            validation: Some("zod".to_string()),
            styling: Some("tailwind".to_string()),
            testing: Some("vitest".to_string()),
            orm: Some("drizzle".to_string()),
        },
        StructureProfile {
            api_dir: Some("apps/api".to_string()),
            web_dir: Some("apps/web".to_string()),
            shared_api_package: Some("@acme/api-contracts".to_string()),
            shared_api_dir: Some("packages/api-contracts".to_string()),
            shared_packages: vec![
                "packages/api-contracts".to_string(),
                "packages/i18n".to_string(),
                "packages/ui".to_string(),
            ],
        },
        VerificationMap {
            typecheck: Some("typecheck".to_string()),
            lint: Some("lint".to_string()),
            test: Some("test".to_string()),
            build: Some("build".to_string()),
        },
    );

    let parsed = parse_front_matter(&render(&cfg));
    assert_eq!(
        parsed,
        json!({
            "stack": {
                "language": "typescript",
                "runtime": "node",
                "package_manager": "pnpm",
                "monorepo": true,
                "frontend": "react",
                "backend": "hono",
                "validation": "zod",
                "styling": "tailwind",
                "testing": "vitest",
                "orm": "drizzle"
            },
            "structure": {
                "api_dir": "apps/api",
                "web_dir": "apps/web",
                "shared_api_package": "@acme/api-contracts",
                "shared_api_dir": "packages/api-contracts",
                "shared_packages": [
                    "packages/api-contracts",
                    "packages/i18n",
                    "packages/ui"
                ]
            },
            "verification": {
                "typecheck": "typecheck",
                "lint": "lint",
                "test": "test",
                "build": "build"
            },
            "disciplines": {
                "api_contracts": true,
                "plan_enforcement": true
            }
        })
    );
}

#[test]
fn test_minimal_config_round_trip() {
    let cfg = config(
        StackProfile::default(),
        StructureProfile::default(),
        VerificationMap::default(),
    );

    let parsed = parse_front_matter(&render(&cfg));
    assert_eq!(
        parsed,
        json!({
            "stack": {"monorepo": false},
            "disciplines": {"api_contracts": false, "plan_enforcement": true}
        })
    );
}

#[test]
fn test_structure_without_list_round_trip() {
    let cfg = config(
        StackProfile {
            monorepo: true,
            ..Default::default()
        },
        StructureProfile {
            api_dir: Some("apps/server".to_string()),
            ..Default::default()
        },
        VerificationMap::default(),
    );

    let parsed = parse_front_matter(&render(&cfg));
    assert_eq!(parsed["structure"], json!({"api_dir": "apps/server"}));
    assert!(parsed.get("verification").is_none());
}

#[test]
fn test_verification_only_round_trip() {
    let cfg = config(
        StackProfile {
            language: Some("javascript".to_string()),
            runtime: Some("node".to_string()),
            ..Default::default()
        },
        StructureProfile::default(),
        VerificationMap {
            test: Some("test".to_string()),
            ..Default::default()
        },
    );

    let parsed = parse_front_matter(&render(&cfg));
    assert_eq!(parsed["verification"], json!({"test": "test"}));
    assert!(parsed.get("structure").is_none());
}

#[test]
fn test_list_order_is_preserved() {
    let cfg = config(
        StackProfile {
            monorepo: true,
            ..Default::default()
        },
        StructureProfile {
            shared_packages: vec![
                "packages/zeta".to_string(),
                "packages/alpha".to_string(),
                "packages/mid".to_string(),
            ],
            ..Default::default()
        },
        VerificationMap::default(),
    );

    let parsed = parse_front_matter(&render(&cfg));
    assert_eq!(
        parsed["structure"]["shared_packages"],
        json!(["packages/zeta", "packages/alpha", "packages/mid"])
    );
}

#[test]
fn test_hand_edited_document_still_parses() {
    let cfg = config(
        StackProfile {
            language: Some("typescript".to_string()),
            monorepo: true,
            ..Default::default()
        },
        StructureProfile::default(),
        VerificationMap::default(),
    );

    // Simulate a user appending notes and a comment inside the block.
    let document = render(&cfg).replace(
        "disciplines:",
        "# reviewed 2024-06-01\ndisciplines:",
    ) + "\nExtra prose at the end.\n";

    let parsed = parse_front_matter(&document);
    assert_eq!(parsed["stack"]["language"], json!("typescript"));
    assert_eq!(parsed["disciplines"]["plan_enforcement"], json!(true));
}

#[test]
fn test_unparseable_inputs_yield_empty_object() {
    for text in ["", "no markers here", "---", "--- incomplete", "-- -\nstack:\n"] {
        assert_eq!(parse_front_matter(text), json!({}), "input: {text:?}");
    }
}
