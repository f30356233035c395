//! Template compilation with size caps.

use cue_core::EnhanceError;
use prompt::{build_variables, replace_placeholders, CapPolicy, VariableInputs};
use tracing::debug;

/// Compiled prompt plus the file context sent alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPrompt {
    pub text: String,
    /// Per-file blocks; only filled when there is no template to embed them in.
    pub file_context: Vec<String>,
}

/// Compiles `template` (or the capped input when `None`) and checks the ceiling.
pub fn compile(
    template: Option<&str>,
    inputs: &VariableInputs<'_>,
    caps: &CapPolicy,
) -> Result<CompiledPrompt, EnhanceError> {
    let vars = build_variables(inputs, caps);
    let compiled = match template {
        Some(template) => CompiledPrompt {
            text: replace_placeholders(template, &vars),
            file_context: Vec::new(),
        },
        None => CompiledPrompt {
            text: vars.user_input,
            file_context: caps.file_blocks(&inputs.files),
        },
    };
    caps.check_compiled(&compiled.text)?;
    debug!(
        templated = template.is_some(),
        length = compiled.text.chars().count(),
        file_blocks = compiled.file_context.len(),
        "Prompt compiled"
    );
    Ok(compiled)
}
