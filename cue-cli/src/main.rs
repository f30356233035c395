//! cue CLI: list tools, enhance prompts, manage the saved prompt library. Config from env.

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::Parser;
use cue_cli::{Cli, Commands, EnhanceArgs, LibraryCommand};
use cue_core::init_tracing;
use enhancer::{EnhancerConfig, ToolSession};
use file_ingest::IncomingFile;
use llm_client::{EnvLlmConfig, HttpLlmClient, LlmClient, LlmConfig};
use storage::{PromptQuery, PromptRepository, PromptStore, SavedPrompt};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EnhancerConfig::load();
    init_tracing(&config.log_file)?;

    match cli.command {
        Commands::Tools { category } => {
            let catalog = config.load_catalog()?;
            handle_tools(&catalog, category.as_deref());
            Ok(())
        }
        Commands::Enhance(args) => handle_enhance(&config, args).await,
        Commands::Library { command } => handle_library(&config, command).await,
    }
}

fn handle_tools(catalog: &Catalog, category: Option<&str>) {
    let tools: Vec<_> = match category {
        Some(c) => catalog.tools_in_category(c).collect(),
        None => catalog.tools().iter().collect(),
    };
    if tools.is_empty() {
        println!("No tools.");
        return;
    }
    println!("{:<20} {:<24} {:<28} {}", "id", "name", "providers", "formats");
    println!("{}", "-".repeat(100));
    for tool in tools {
        println!(
            "{:<20} {:<24} {:<28} {}",
            tool.id,
            tool.name,
            tool.providers.join(", "),
            tool.output_formats.options.join(", ")
        );
    }
}

/// Builds a session from the args, uploads files, enhances, then downloads and saves on request.
async fn handle_enhance(config: &EnhancerConfig, args: EnhanceArgs) -> Result<()> {
    let catalog = config.load_catalog()?;
    let credentials = EnvLlmConfig::from_env().credentials();
    let client: Arc<dyn LlmClient> = Arc::new(HttpLlmClient::new());
    let mut session =
        ToolSession::new(&catalog, &args.tool, client, config.caps, config.max_files)?;

    if let Some(provider) = &args.provider {
        if !session.set_provider(provider) {
            eprintln!("Ignoring provider `{}`", provider);
        }
    }
    if let Some(model) = &args.model {
        if !session.set_model(model) {
            eprintln!("Ignoring model `{}`", model);
        }
    }
    if let Some(agent) = &args.agent {
        if !session.set_agent(agent) {
            eprintln!("Ignoring agent `{}`", agent);
        }
    }
    if let Some(tone) = &args.tone {
        session.set_tone(tone);
    }
    if let Some(format) = &args.format {
        if !session.set_output_format(format) {
            eprintln!("Ignoring output format `{}`", format);
        }
    }

    let input = match (&args.input, &args.input_file) {
        (Some(input), _) => input.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Read input file {}", path.display()))?,
        (None, None) => anyhow::bail!("Either --input or --input-file is required"),
    };

    if !args.files.is_empty() {
        let mut batch = Vec::with_capacity(args.files.len());
        for path in &args.files {
            batch.push(
                IncomingFile::read(path)
                    .await
                    .with_context(|| format!("Read file {}", path.display()))?,
            );
        }
        let report = session.add_files(batch).await?;
        for rejected in &report.rejected {
            eprintln!("Skipped: {}", rejected);
        }
        info!(admitted = report.admitted.len(), "Files attached");
    }

    let extras: Vec<(&str, &str)> = args
        .vars
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let result = session.enhance(&input, &credentials, &extras).await?;

    println!("{}", result.enhanced_prompt);
    eprintln!(
        "{} {} | {} tokens | ~${:.4}",
        result.provider, result.model, result.usage.tokens, result.usage.cost
    );

    if let Some(dir) = &args.out_dir {
        let (name, artifact) = session.download(&result);
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Create output directory {}", dir.display()))?;
        let path = dir.join(name);
        tokio::fs::write(&path, artifact.content.as_bytes())
            .await
            .with_context(|| format!("Write {}", path.display()))?;
        eprintln!("Wrote {} ({})", path.display(), artifact.mime_type);
    }

    if args.save {
        let repo = PromptRepository::new(&config.database_url)
            .await
            .context("Open prompt library (check DATABASE_URL)")?;
        let saved = session
            .save(&repo, &config.user_id, &input, &result)
            .await?;
        eprintln!("Saved as {}", saved.id);
    }

    Ok(())
}

async fn handle_library(config: &EnhancerConfig, command: LibraryCommand) -> Result<()> {
    let repo = PromptRepository::new(&config.database_url)
        .await
        .context("Open prompt library (check DATABASE_URL)")?;
    let user_id = config.user_id.as_str();

    match command {
        LibraryCommand::List { limit } => {
            let prompts = repo
                .search(&PromptQuery::for_user(user_id).limit(limit))
                .await?;
            print_prompts(&prompts);
        }
        LibraryCommand::Search { term, tool } => {
            let mut query = PromptQuery::for_user(user_id).term(term);
            query.tool_type = tool;
            let prompts = repo.search(&query).await?;
            print_prompts(&prompts);
        }
        LibraryCommand::Show { id } => match repo.get(user_id, &id).await? {
            Some(p) => {
                println!("{}\n", p.title);
                println!(
                    "Tool: {} | {} {} | {} | {}",
                    p.tool_type, p.provider, p.model, p.tone, p.output_format
                );
                println!("Tags: {}", p.tags.join(", "));
                println!("Created: {}\n", p.created_at.format("%Y-%m-%d %H:%M:%S"));
                println!("--- Input ---\n{}\n", p.input_text);
                println!("--- Enhanced ---\n{}", p.enhanced_text);
                for attachment in &p.file_attachments {
                    println!("\n--- Attachment ---\n{}", attachment);
                }
            }
            None => println!("No saved prompt {}.", id),
        },
        LibraryCommand::Delete { id } => {
            if repo.delete(user_id, &id).await? {
                println!("Deleted {}.", id);
            } else {
                println!("No saved prompt {}.", id);
            }
        }
    }
    Ok(())
}

fn print_prompts(prompts: &[SavedPrompt]) {
    if prompts.is_empty() {
        println!("No saved prompts.");
        return;
    }

    const TITLE_PREVIEW_LEN: usize = 60;
    println!("{:<36} {:<19} {:<22} {}", "id", "created", "tool", "title");
    println!("{}", "-".repeat(120));
    for p in prompts {
        let title: String = p.title.chars().take(TITLE_PREVIEW_LEN).collect();
        println!(
            "{:<36} {:<19} {:<22} {}",
            p.id,
            p.created_at.format("%Y-%m-%d %H:%M:%S"),
            p.tool_type,
            title.replace('\n', " ")
        );
    }
}
