//! Fixed inputs used when a job has nothing to reuse and for the
//! per-artifact customization pass.

use serde_json::json;

use crate::contracts::{
    Breakpoint, CodeArtifacts, ElementSchema, JsonMap, MutationDsl, MutationOperation,
    ResponsiveRules, TestRequirements,
};

pub const DEFAULT_BUTTON_LABEL: &str = "Continue";
pub const CUSTOMIZED_PRIMARY_TOKEN: &str = "{brand.color.primary.700}";

/// Button schema synthesized when no library item clears the reuse threshold.
pub fn default_button_schema() -> ElementSchema {
    let mut props_schema = JsonMap::new();
    props_schema.insert("variant".into(), json!(["primary", "secondary"]));

    let mut aria = JsonMap::new();
    aria.insert("role".into(), json!("button"));

    let mut base_tokens = JsonMap::new();
    base_tokens.insert("color".into(), json!("{brand.color.primary.600}"));
    base_tokens.insert("radius".into(), json!("{brand.radius.sm}"));

    ElementSchema {
        name: "Button".into(),
        props_schema,
        states: ["default", "hover", "focus", "disabled"]
            .map(String::from)
            .to_vec(),
        aria,
        interaction_model: ["click", "keyboardEnter", "keyboardSpace"]
            .map(String::from)
            .to_vec(),
        responsive_rules: ResponsiveRules {
            min_tap_target: 44,
            breakpoints: vec![Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg],
        },
        base_tokens,
        code_artifacts: CodeArtifacts::default(),
        tests: TestRequirements {
            unit: true,
            visual: true,
            a11y: true,
        },
    }
}

/// Customization applied to every candidate artifact of a job.
pub fn customization_dsl(target: &str) -> MutationDsl {
    MutationDsl {
        target: target.to_string(),
        ops: vec![
            MutationOperation::copy_edit("props.children", DEFAULT_BUTTON_LABEL),
            MutationOperation::set_token("baseTokens.color", CUSTOMIZED_PRIMARY_TOKEN),
        ],
        constraints: ["a11y.pass", "token.allowlist", "contrast>=4.5", "bundleDelta<=5kb"]
            .map(String::from)
            .to_vec(),
    }
}
