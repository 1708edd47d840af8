use serde::{Deserialize, Serialize};

use super::JsonMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveRules {
    pub min_tap_target: u32,
    pub breakpoints: Vec<Breakpoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CodeTemplate {
    #[default]
    #[serde(rename = "react-ts")]
    ReactTs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StyleStrategy {
    #[default]
    #[serde(rename = "css-vars")]
    CssVars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodeArtifacts {
    pub template: CodeTemplate,
    pub style: StyleStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRequirements {
    pub unit: bool,
    pub visual: bool,
    pub a11y: bool,
}

/// Declarative description of a UI element to synthesize. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSchema {
    pub name: String,
    #[serde(default)]
    pub props_schema: JsonMap,
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub aria: JsonMap,
    #[serde(default)]
    pub interaction_model: Vec<String>,
    pub responsive_rules: ResponsiveRules,
    #[serde(default)]
    pub base_tokens: JsonMap,
    #[serde(default)]
    pub code_artifacts: CodeArtifacts,
    pub tests: TestRequirements,
}

impl ElementSchema {
    /// ARIA role as text; `None` when absent or null.
    pub fn aria_role(&self) -> Option<String> {
        match self.aria.get("role")? {
            serde_json::Value::Null => None,
            serde_json::Value::String(role) => Some(role.clone()),
            other => Some(other.to_string()),
        }
    }
}
