//! Enhancement request: the system/user message pair, model id resolution and tone temperature.

use crate::ChatMessage;

/// Fixed output budget sent as `max_tokens`.
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// Temperature for tones missing from the tone table.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// (provider, display model name) -> provider-native model id.
const MODEL_IDS: &[(&str, &str, &str)] = &[
    ("OpenAI", "GPT-4", "gpt-4"),
    ("OpenAI", "GPT-5", "gpt-4"),
    ("OpenAI", "GPT-4 Turbo", "gpt-4-turbo-preview"),
    ("Anthropic", "Claude 3.7", "claude-3-opus-20240229"),
    ("Anthropic", "Claude 3 Sonnet", "claude-3-sonnet-20240229"),
    ("Anthropic", "Claude 3 Haiku", "claude-3-haiku-20240307"),
];

const TONE_TEMPERATURES: &[(&str, f32)] = &[
    ("professional", 0.3),
    ("casual", 0.7),
    ("creative", 0.9),
    ("technical", 0.2),
    ("friendly", 0.6),
    ("educational", 0.4),
    ("marketing", 0.8),
    ("storytelling", 0.9),
    ("persuasive", 0.7),
    ("funny", 0.9),
];

/// Provider-native id for a display model name; unknown pairs fall back to the lower-cased display name.
pub fn resolve_model_id(provider: &str, display_model: &str) -> String {
    MODEL_IDS
        .iter()
        .find(|(p, m, _)| *p == provider && *m == display_model)
        .map(|(_, _, id)| (*id).to_string())
        .unwrap_or_else(|| display_model.to_lowercase())
}

/// Sampling temperature for a tone (case-insensitive); [`DEFAULT_TEMPERATURE`] when unknown.
pub fn tone_temperature(tone: &str) -> f32 {
    let tone = tone.trim();
    TONE_TEMPERATURES
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(tone))
        .map(|(_, temp)| *temp)
        .unwrap_or(DEFAULT_TEMPERATURE)
}

/// One "generate" action, built after compilation and dropped once the HTTP call returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnhancementRequest {
    /// Compiled prompt text.
    pub prompt: String,
    pub provider: String,
    /// Display model name as chosen by the user.
    pub model: String,
    pub tone: String,
    pub output_format: String,
    /// Tool display name.
    pub tool_type: String,
    /// Per-file context blocks appended to the user message.
    pub file_context: Vec<String>,
}

impl EnhancementRequest {
    pub fn system_prompt(&self) -> String {
        format!(
            "You are an expert AI prompt engineer. Your task is to enhance and optimize prompts for {provider} {model}.\n\
             \n\
             Guidelines:\n\
             - Tool Type: {tool}\n\
             - Tone: {tone}\n\
             - Output Format: {format}\n\
             - Make prompts specific, detailed, and actionable\n\
             - Include relevant context and constraints\n\
             - Optimize for the target AI model's strengths\n\
             - Ensure clarity and precision in instructions\n\
             \n\
             Enhance the user's prompt to achieve maximum effectiveness with {provider} {model}.",
            provider = self.provider,
            model = self.model,
            tool = self.tool_type,
            tone = self.tone,
            format = self.output_format,
        )
    }

    pub fn user_prompt(&self) -> String {
        let mut out = format!("Original prompt: \"{}\"\n\n", self.prompt);
        if !self.file_context.is_empty() {
            out.push_str("Additional context from uploaded files:\n");
            out.push_str(&self.file_context.join("\n\n"));
            out.push_str("\n\n");
        }
        out.push_str(&format!(
            "Please enhance this prompt for optimal results with {} {}. Format the output as {} with a {} tone.",
            self.provider, self.model, self.output_format, self.tone
        ));
        out
    }

    /// `[system, user]`.
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_prompt()),
            ChatMessage::user(self.user_prompt()),
        ]
    }

    pub fn model_id(&self) -> String {
        resolve_model_id(&self.provider, &self.model)
    }

    pub fn temperature(&self) -> f32 {
        tone_temperature(&self.tone)
    }
}
