//! Tool session: the state behind one tool page.

use std::sync::Arc;

use catalog::{Catalog, ToolDefinition};
use cue_core::{Credentials, CueError, EnhanceError, IngestError};
use file_ingest::{BatchReport, FileId, FileSet, IncomingFile, UploadedFile};
use llm_client::{EnhancementResult, LlmClient};
use output_format::{download_file_name, format_for_download, DownloadArtifact};
use prompt::{CapPolicy, EnhancementRequest, VariableInputs};
use storage::{NewSavedPrompt, PromptStore, SavedPrompt};
use tracing::{info, instrument};

use crate::compile::compile;
use crate::selection::Selection;

const TITLE_PREVIEW_CHARS: usize = 50;

/// `"<tool name> - <first 50 chars of input>"`, with `...` when the input is longer.
pub fn saved_prompt_title(tool_name: &str, input: &str) -> String {
    let preview: String = input.chars().take(TITLE_PREVIEW_CHARS).collect();
    let ellipsis = if input.chars().count() > TITLE_PREVIEW_CHARS {
        "..."
    } else {
        ""
    };
    format!("{} - {}{}", tool_name, preview, ellipsis)
}

/// Files, selection and client for one tool.
///
/// `enhance` takes `&mut self`, so a session never has two requests in flight.
pub struct ToolSession {
    tool: ToolDefinition,
    template: Option<String>,
    selection: Selection,
    files: FileSet,
    caps: CapPolicy,
    client: Arc<dyn LlmClient>,
}

impl ToolSession {
    /// Opens a session on `tool_id` with the tool's default selection.
    pub fn new(
        catalog: &Catalog,
        tool_id: &str,
        client: Arc<dyn LlmClient>,
        caps: CapPolicy,
        max_files: usize,
    ) -> Result<Self, EnhanceError> {
        let tool = catalog
            .tool(tool_id)
            .ok_or_else(|| EnhanceError::UnknownTool(tool_id.to_string()))?
            .clone();
        let template = catalog.template(tool_id).map(str::to_string);
        let selection = Selection::defaults(&tool);
        info!(
            tool = %tool.id,
            provider = %selection.provider,
            model = %selection.model,
            templated = template.is_some(),
            "Tool session opened"
        );
        Ok(Self {
            tool,
            template,
            selection,
            files: FileSet::new(max_files),
            caps,
            client,
        })
    }

    pub fn tool(&self) -> &ToolDefinition {
        &self.tool
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn caps(&self) -> &CapPolicy {
        &self.caps
    }

    pub fn set_provider(&mut self, provider: &str) -> bool {
        self.selection.set_provider(&self.tool, provider)
    }

    pub fn set_model(&mut self, model: &str) -> bool {
        self.selection.set_model(&self.tool, model)
    }

    pub fn set_agent(&mut self, agent: &str) -> bool {
        self.selection.set_agent(&self.tool, agent)
    }

    pub fn set_tone(&mut self, tone: &str) -> bool {
        self.selection.set_tone(tone)
    }

    pub fn set_output_format(&mut self, format: &str) -> bool {
        self.selection.set_output_format(&self.tool, format)
    }

    pub fn files(&self) -> &[UploadedFile] {
        self.files.files()
    }

    /// Admits a batch of files under the tool's upload rules.
    pub async fn add_files(
        &mut self,
        batch: Vec<IncomingFile>,
    ) -> Result<BatchReport, IngestError> {
        self.files
            .add_batch(batch, &self.tool.file_upload_rules)
            .await
    }

    pub fn remove_file(&mut self, id: &FileId) -> Option<UploadedFile> {
        self.files.remove(id)
    }

    /// Compiles `input` against the tool template and sends it for enhancement.
    ///
    /// `extras` fills tool-specific template keys such as `language` or `audience`.
    #[instrument(skip(self, input, credentials, extras), fields(tool = %self.tool.id))]
    pub async fn enhance(
        &mut self,
        input: &str,
        credentials: &Credentials,
        extras: &[(&str, &str)],
    ) -> Result<EnhancementResult, EnhanceError> {
        if input.trim().is_empty() {
            return Err(EnhanceError::EmptyInput);
        }
        credentials.require()?;

        let request = self.build_request(input, extras)?;
        info!(
            provider = %request.provider,
            model = %request.model,
            prompt_len = request.prompt.chars().count(),
            "Sending enhancement request"
        );
        self.client.enhance(&request, credentials).await
    }

    /// Runs every pre-network step and returns the request that `enhance` would send.
    pub fn build_request(
        &self,
        input: &str,
        extras: &[(&str, &str)],
    ) -> Result<EnhancementRequest, EnhanceError> {
        let selection = &self.selection;
        let inputs = VariableInputs {
            provider: &selection.provider,
            model: &selection.model,
            tone: &selection.tone,
            output_format: &selection.output_format,
            coding_agent: selection.agent.as_deref().unwrap_or_default(),
            user_input: input,
            files: self.files.contexts(),
            extras: extras.to_vec(),
        };
        let compiled = compile(self.template.as_deref(), &inputs, &self.caps)?;

        Ok(EnhancementRequest {
            prompt: compiled.text,
            provider: selection.provider.clone(),
            model: selection.model.clone(),
            tone: selection.tone.clone(),
            output_format: selection.output_format.clone(),
            tool_type: self.tool.name.clone(),
            file_context: compiled.file_context,
        })
    }

    /// The enhanced text, to be used as the next input.
    pub fn improve(&self, result: &EnhancementResult) -> String {
        result.enhanced_prompt.clone()
    }

    /// Suggested file name and artifact for downloading `result` in the selected format.
    pub fn download(&self, result: &EnhancementResult) -> (String, DownloadArtifact) {
        let artifact = format_for_download(&result.enhanced_prompt, &self.selection.output_format);
        let name = download_file_name(&self.tool.name, &artifact.file_extension);
        (name, artifact)
    }

    /// Library record for `input` and its enhancement.
    pub fn saved_prompt(
        &self,
        user_id: &str,
        input: &str,
        result: &EnhancementResult,
    ) -> NewSavedPrompt {
        let tool = &self.tool;
        let selection = &self.selection;
        let file_attachments = self
            .files
            .contexts()
            .iter()
            .map(|f| format!("{}: {}", f.name, self.caps.cap_file(f.content)))
            .collect();
        NewSavedPrompt {
            user_id: user_id.to_string(),
            title: saved_prompt_title(&tool.name, input),
            input_text: input.to_string(),
            enhanced_text: result.enhanced_prompt.clone(),
            tool_type: tool.name.clone(),
            provider: selection.provider.clone(),
            model: selection.model.clone(),
            tone: selection.tone.clone(),
            output_format: selection.output_format.clone(),
            file_attachments,
            tags: vec![
                tool.name.clone(),
                selection.tone.clone(),
                selection.output_format.clone(),
            ],
        }
    }

    /// Stores `input` and its enhancement in the caller's library.
    pub async fn save(
        &self,
        store: &dyn PromptStore,
        user_id: &str,
        input: &str,
        result: &EnhancementResult,
    ) -> cue_core::Result<SavedPrompt> {
        let saved = store
            .save(&self.saved_prompt(user_id, input, result))
            .await
            .map_err(|e| CueError::Storage(e.to_string()))?;
        info!(id = %saved.id, tool = %self.tool.id, "Prompt saved to library");
        Ok(saved)
    }
}
