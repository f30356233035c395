//! Provider, model, agent, tone and output format chosen for a tool session.

use catalog::ToolDefinition;
use tracing::warn;

/// Tone used until the user picks another one.
pub const DEFAULT_TONE: &str = "professional";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub provider: String,
    /// Display model name.
    pub model: String,
    /// Coding agent, for tools that target one.
    pub agent: Option<String>,
    pub tone: String,
    pub output_format: String,
}

impl Selection {
    /// First provider, its first model, first agent, professional tone, default format.
    pub fn defaults(tool: &ToolDefinition) -> Self {
        let provider = tool.default_provider().unwrap_or_default().to_string();
        let model = tool.default_model(&provider).unwrap_or_default().to_string();
        Self {
            model,
            provider,
            agent: tool.default_agent().map(str::to_string),
            tone: DEFAULT_TONE.to_string(),
            output_format: tool.output_formats.default_format.clone(),
        }
    }

    /// Switches provider and resets the model to that provider's first model.
    ///
    /// Providers outside the tool's list are accepted only when the tool allows custom providers.
    pub fn set_provider(&mut self, tool: &ToolDefinition, provider: &str) -> bool {
        let provider = provider.trim();
        let allowed = tool.supports_provider(provider) || tool.allow_custom_provider;
        if provider.is_empty() || !allowed {
            warn!(tool = %tool.id, provider = %provider, "Provider not available for tool");
            return false;
        }
        self.provider = provider.to_string();
        self.model = tool.default_model(provider).unwrap_or_default().to_string();
        true
    }

    pub fn set_model(&mut self, tool: &ToolDefinition, model: &str) -> bool {
        let model = model.trim();
        let listed = tool.models_for(&self.provider).iter().any(|m| m == model);
        if model.is_empty() || !(listed || tool.allow_custom_model) {
            warn!(
                tool = %tool.id,
                provider = %self.provider,
                model = %model,
                "Model not available for provider"
            );
            return false;
        }
        self.model = model.to_string();
        true
    }

    pub fn set_agent(&mut self, tool: &ToolDefinition, agent: &str) -> bool {
        let agent = agent.trim();
        let listed = tool.agents.iter().any(|a| a == agent);
        if agent.is_empty() || !(listed || tool.allow_custom_agent) {
            warn!(tool = %tool.id, agent = %agent, "Agent not available for tool");
            return false;
        }
        self.agent = Some(agent.to_string());
        true
    }

    /// Any non-blank tone; unknown tones sample at the default temperature.
    pub fn set_tone(&mut self, tone: &str) -> bool {
        let tone = tone.trim();
        if tone.is_empty() {
            return false;
        }
        self.tone = tone.to_string();
        true
    }

    /// Accepts one of the tool's output formats (case-insensitive).
    pub fn set_output_format(&mut self, tool: &ToolDefinition, format: &str) -> bool {
        match tool
            .output_formats
            .options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(format.trim()))
        {
            Some(option) => {
                self.output_format = option.clone();
                true
            }
            None => {
                warn!(tool = %tool.id, format = %format, "Output format not offered by tool");
                false
            }
        }
    }
}
