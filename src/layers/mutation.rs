use serde_json::Value;

use crate::contracts::{Artifact, JsonMap, MutationDsl, MutationKind, MutationOperation};

const COPY_EDIT_PATH: &str = "props.children";
const TOKEN_PATH_PREFIX: &str = "baseTokens";

/// Applies a mutation script to an artifact, producing a new artifact.
///
/// Supported operations:
/// - `copyEdit` at `props.children` replaces the first `>text<` span of
///   `content.code` (the span may not cross a line break); no span, no change.
/// - `setToken` at `baseTokens.*` sets `content.tokens[<last segment>]`,
///   keeping the other tokens. Without a `value` the token is removed.
///
/// Everything else is skipped so newer scripts still apply to older engines.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutationEngine;

impl MutationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, artifact: &Artifact, dsl: &MutationDsl) -> anyhow::Result<Artifact> {
        let mut updated = artifact.clone();

        for op in &dsl.ops {
            match op.kind {
                MutationKind::CopyEdit if op.path == COPY_EDIT_PATH => {
                    copy_edit(&mut updated.content, op);
                }
                MutationKind::SetToken if op.path.starts_with(TOKEN_PATH_PREFIX) => {
                    set_token(&mut updated.content, op);
                }
                _ => {
                    tracing::trace!(kind = %op.kind, path = %op.path, "mutation skipped");
                }
            }
        }

        let mut metadata = updated.metadata.take().unwrap_or_default();
        metadata.insert("mutations".into(), serde_json::to_value(dsl)?);
        updated.metadata = Some(metadata);
        Ok(updated)
    }
}

fn copy_edit(content: &mut Value, op: &MutationOperation) {
    let Some(replacement) = op.value.as_ref().map(display_value) else {
        return;
    };
    let Some(code) = content.get_mut("code") else {
        return;
    };
    let Some(edited) = code
        .as_str()
        .and_then(|code| replace_first_inner_text(code, &replacement))
    else {
        return;
    };
    *code = Value::String(edited);
}

fn set_token(content: &mut Value, op: &MutationOperation) {
    let Some(object) = content.as_object_mut() else {
        return;
    };
    let key = op.path.rsplit('.').next().unwrap_or(TOKEN_PATH_PREFIX);

    let tokens = object
        .entry("tokens")
        .or_insert_with(|| Value::Object(JsonMap::new()));
    if !tokens.is_object() {
        *tokens = Value::Object(JsonMap::new());
    }
    if let Some(tokens) = tokens.as_object_mut() {
        match &op.value {
            Some(value) => {
                tokens.insert(key.to_string(), value.clone());
            }
            None => {
                tokens.remove(key);
            }
        }
    }
}

/// Text form of an operation value: strings verbatim, anything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Replace the text of the first `>...<` span that does not cross a line break.
fn replace_first_inner_text(code: &str, text: &str) -> Option<String> {
    const STOPS: [char; 5] = ['<', '\n', '\r', '\u{2028}', '\u{2029}'];

    for (open, _) in code.match_indices('>') {
        let rest = &code[open + 1..];
        if let Some(close) = rest.find(STOPS)
            && rest[close..].starts_with('<')
        {
            return Some(format!("{}>{text}<{}", &code[..open], &rest[close + 1..]));
        }
    }
    None
}
