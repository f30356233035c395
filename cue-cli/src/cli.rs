//! CLI parser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cue")]
#[command(about = "Prompt enhancement CLI: tools, enhance, library", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available tools.
    Tools {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Compile a prompt for a tool and send it for enhancement (credentials from env).
    Enhance(EnhanceArgs),
    /// Browse and manage saved prompts.
    Library {
        #[command(subcommand)]
        command: LibraryCommand,
    },
}

#[derive(Args, Debug)]
pub struct EnhanceArgs {
    /// Tool id, see `cue tools`.
    #[arg(short, long)]
    pub tool: String,
    #[arg(short, long, conflicts_with = "input_file", required_unless_present = "input_file")]
    pub input: Option<String>,
    /// Read the input from a file.
    #[arg(long)]
    pub input_file: Option<PathBuf>,
    /// Context file to upload (repeatable).
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,
    #[arg(long)]
    pub provider: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub agent: Option<String>,
    #[arg(long)]
    pub tone: Option<String>,
    /// Output format label, e.g. Markdown or JSON.
    #[arg(long)]
    pub format: Option<String>,
    /// Template variable as KEY=VALUE (repeatable).
    #[arg(long = "var", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
    /// Save the result to the library.
    #[arg(long)]
    pub save: bool,
    /// Write a download artifact into this directory.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum LibraryCommand {
    /// Saved prompts, newest first.
    List {
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },
    /// Search title, input, enhanced text and tags.
    Search {
        term: String,
        /// Only prompts of this tool (display name).
        #[arg(long)]
        tool: Option<String>,
    },
    Show {
        id: String,
    },
    Delete {
        id: String,
    },
}

/// Parses `KEY=VALUE`; the value may contain `=`.
pub fn parse_var(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{}`", s));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_splits_on_first_equals() {
        assert_eq!(
            parse_var("constraints=a=b").unwrap(),
            ("constraints".to_string(), "a=b".to_string())
        );
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=x").is_err());
    }

    #[test]
    fn enhance_args_parse() {
        let cli = Cli::try_parse_from([
            "cue", "enhance", "--tool", "code-generator", "--input", "add tests", "-f", "a.py",
            "--file", "b.py", "--var", "language=Rust", "--save",
        ])
        .unwrap();
        let Commands::Enhance(args) = cli.command else {
            panic!("expected enhance");
        };
        assert_eq!(args.tool, "code-generator");
        assert_eq!(args.input.as_deref(), Some("add tests"));
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.vars, vec![("language".to_string(), "Rust".to_string())]);
        assert!(args.save);
        assert!(args.out_dir.is_none());
    }

    #[test]
    fn enhance_requires_exactly_one_input_source() {
        assert!(Cli::try_parse_from(["cue", "enhance", "--tool", "x"]).is_err());
        assert!(Cli::try_parse_from([
            "cue", "enhance", "--tool", "x", "--input", "a", "--input-file", "b.txt"
        ])
        .is_err());
        assert!(
            Cli::try_parse_from(["cue", "enhance", "--tool", "x", "--input-file", "b.txt"]).is_ok()
        );
    }

    #[test]
    fn library_subcommands_parse() {
        let args = ["cue", "library", "search", "email", "--tool", "Email Writer"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Library {
                command: LibraryCommand::Search { term, tool },
            } => {
                assert_eq!(term, "email");
                assert_eq!(tool.as_deref(), Some("Email Writer"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
