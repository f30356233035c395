//! The total placeholder record.
//!
//! Every recognized placeholder is a `String` field defaulting to `""`, so a compiled
//! template can never see a missing key.

use tracing::warn;

use crate::placeholder::Variables;
use crate::truncate::{CapPolicy, FileContext};

macro_rules! prompt_variables {
    ($($field:ident),+ $(,)?) => {
        /// Values for every placeholder the templates may use.
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct PromptVariables {
            $(pub $field: String,)+
        }

        impl PromptVariables {
            /// Recognized placeholder names.
            pub const KEYS: &'static [&'static str] = &[$(stringify!($field)),+];

            pub fn get(&self, key: &str) -> Option<&str> {
                match key {
                    $(stringify!($field) => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }

            /// Sets a recognized key; returns `false` (and changes nothing) for unknown keys.
            pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
                match key {
                    $(stringify!($field) => {
                        self.$field = value.into();
                        true
                    })+
                    _ => false,
                }
            }
        }
    };
}

prompt_variables! {
    // core
    provider, model, tone, output_format, user_input, uploaded_files, coding_agent,
    // code
    language, framework, libraries, environment, io_contracts, constraints, style_guide,
    codebase_context,
    // image
    style, aspect_ratio, camera_settings, lighting, color_palette, mood, details,
    negative_prompts, quality, composition, lens_camera, location, time_weather, color_mood,
    // writing
    audience, length, key_points, sources, seo_keywords, outline, references,
    // social / marketing
    platform, hashtags, cta, usp, product, benefits, features, social_proof, brand_voice,
    differentiators, sections, context_channel, uvp,
    // data
    database, schema, samples, query_type, expected_output,
    // email
    recipient, context, signature,
    // seo
    target_url, primary_keyword, secondary_keywords, brand,
    // video
    duration, hook_style,
    // resume
    job_description, experience, achievements, skills, format_pref,
    // education
    level, objectives, prerequisites, materials, assessment, question_types, difficulty,
    num_questions, include_answers,
    // research
    key_questions, depth, thesis, citation_style, key_concepts,
    // press release
    company, headline_angle, facts, quotes, media_contact, date,
    // fiction
    genre, setting, characters, pov_tense, themes,
}

impl Variables for PromptVariables {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

/// Raw inputs for one enhancement, before capping.
#[derive(Debug, Clone, Default)]
pub struct VariableInputs<'a> {
    pub provider: &'a str,
    pub model: &'a str,
    pub tone: &'a str,
    pub output_format: &'a str,
    pub coding_agent: &'a str,
    pub user_input: &'a str,
    pub files: Vec<FileContext<'a>>,
    /// Tool-specific optional keys (e.g. `language`, `audience`).
    pub extras: Vec<(&'a str, &'a str)>,
}

/// Builds the variable record for one request.
///
/// Extras are applied first so the core keys always reflect the current selection;
/// unknown extra keys are logged and dropped. `user_input` and `uploaded_files` are capped.
pub fn build_variables(inputs: &VariableInputs<'_>, caps: &CapPolicy) -> PromptVariables {
    let mut vars = PromptVariables::default();

    for (key, value) in &inputs.extras {
        if !vars.set(key, *value) {
            warn!(key = %key, "Ignoring unknown template variable");
        }
    }

    vars.provider = inputs.provider.to_string();
    vars.model = inputs.model.to_string();
    vars.tone = inputs.tone.to_string();
    vars.output_format = inputs.output_format.to_string();
    vars.coding_agent = inputs.coding_agent.to_string();
    vars.user_input = caps.cap_prompt(inputs.user_input).into_owned();
    vars.uploaded_files = caps.files_block(&inputs.files);
    vars
}
