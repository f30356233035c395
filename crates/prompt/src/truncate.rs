//! Character budgets for user input, file text and the compiled prompt.
//!
//! Soft caps truncate and append a marker; the compiled-prompt ceiling rejects instead,
//! because cutting a compiled template could break its structure.

use std::borrow::Cow;

use cue_core::EnhanceError;
use tracing::debug;

const MARKER_PREFIX: &str = "\n\n--- TRUNCATED (original length ";
const MARKER_SUFFIX: &str = ") ---";

/// Returns `text` unchanged when it has at most `cap` chars, otherwise its first `cap`
/// chars followed by `"\n\n--- TRUNCATED (original length N) ---"`.
pub fn truncate_with_marker(text: &str, cap: usize) -> Cow<'_, str> {
    let len = text.chars().count();
    if len <= cap {
        return Cow::Borrowed(text);
    }
    let cut = text
        .char_indices()
        .nth(cap)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    debug!(original_len = len, cap, "Truncating text");
    Cow::Owned(format!(
        "{}{}{}{}",
        &text[..cut],
        MARKER_PREFIX,
        len,
        MARKER_SUFFIX
    ))
}

/// Original length recorded by a trailing truncation marker, if `text` ends with one.
pub fn parse_truncation_marker(text: &str) -> Option<usize> {
    let body = text.strip_suffix(MARKER_SUFFIX)?;
    let start = body.rfind(MARKER_PREFIX)?;
    body[start + MARKER_PREFIX.len()..].parse().ok()
}

/// Extracted text of one uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileContext<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

impl<'a> FileContext<'a> {
    pub fn new(name: &'a str, content: &'a str) -> Self {
        Self { name, content }
    }
}

/// `--- File: name ---` / `--- End of name ---` framing around file text.
pub fn file_block(name: &str, content: &str) -> String {
    format!("--- File: {name} ---\n{content}\n--- End of {name} ---")
}

/// The four character budgets of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapPolicy {
    /// Per-file extracted text.
    pub per_file_chars: usize,
    /// All file blocks joined together.
    pub total_file_chars: usize,
    /// Raw user input.
    pub prompt_chars: usize,
    /// Hard ceiling on the compiled prompt.
    pub compiled_chars: usize,
}

impl Default for CapPolicy {
    fn default() -> Self {
        Self {
            per_file_chars: 4000,
            total_file_chars: 12000,
            prompt_chars: 12000,
            compiled_chars: 24000,
        }
    }
}

impl CapPolicy {
    pub fn cap_file<'t>(&self, content: &'t str) -> Cow<'t, str> {
        truncate_with_marker(content, self.per_file_chars)
    }

    pub fn cap_prompt<'t>(&self, input: &'t str) -> Cow<'t, str> {
        truncate_with_marker(input, self.prompt_chars)
    }

    /// Individually capped file blocks in the given order; files with empty content are skipped.
    pub fn file_blocks(&self, files: &[FileContext<'_>]) -> Vec<String> {
        files
            .iter()
            .filter(|f| !f.content.is_empty())
            .map(|f| file_block(f.name, &self.cap_file(f.content)))
            .collect()
    }

    /// File blocks joined by a blank line, then capped as a whole.
    pub fn files_block(&self, files: &[FileContext<'_>]) -> String {
        let joined = self.file_blocks(files).join("\n\n");
        truncate_with_marker(&joined, self.total_file_chars).into_owned()
    }

    /// Fails with [`EnhanceError::CompiledPromptTooLarge`] when `compiled` exceeds the ceiling.
    pub fn check_compiled(&self, compiled: &str) -> Result<(), EnhanceError> {
        let length = compiled.chars().count();
        if length > self.compiled_chars {
            return Err(EnhanceError::CompiledPromptTooLarge {
                length,
                ceiling: self.compiled_chars,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_marker_is_exact() {
        let input = "a".repeat(5000);
        let out = truncate_with_marker(&input, 4000);
        let expected = format!(
            "{}\n\n--- TRUNCATED (original length 5000) ---",
            "a".repeat(4000)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn at_or_below_cap_is_unchanged() {
        let at = "b".repeat(4000);
        assert!(matches!(truncate_with_marker(&at, 4000), Cow::Borrowed(_)));
        assert_eq!(truncate_with_marker(&at, 4000), at);
        assert_eq!(truncate_with_marker("", 0), "");
        assert_eq!(truncate_with_marker("short", 4000), "short");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let input = "é".repeat(10);
        let out = truncate_with_marker(&input, 4);
        assert_eq!(
            out,
            format!("{}\n\n--- TRUNCATED (original length 10) ---", "é".repeat(4))
        );
    }

    #[test]
    fn marker_parses_back() {
        let input = "x".repeat(30);
        let out = truncate_with_marker(&input, 10);
        assert_eq!(parse_truncation_marker(&out), Some(30));
        assert_eq!(parse_truncation_marker("no marker here"), None);
    }

    #[test]
    fn files_block_caps_each_file_then_total() {
        let caps = CapPolicy {
            per_file_chars: 5,
            total_file_chars: 1000,
            ..CapPolicy::default()
        };
        let files = [
            FileContext::new("a.txt", "0123456789"),
            FileContext::new("empty.txt", ""),
            FileContext::new("b.md", "hi"),
        ];
        let block = caps.files_block(&files);
        assert_eq!(
            block,
            "--- File: a.txt ---\n01234\n\n--- TRUNCATED (original length 10) ---\n--- End of a.txt ---\n\n--- File: b.md ---\nhi\n--- End of b.md ---"
        );
    }

    #[test]
    fn files_block_applies_aggregate_cap() {
        let caps = CapPolicy {
            per_file_chars: 100,
            total_file_chars: 20,
            ..CapPolicy::default()
        };
        let files = [FileContext::new("a.txt", "content that is long enough")];
        let block = caps.files_block(&files);
        assert!(block.starts_with("--- File: a.txt ---\n"));
        let full_len = file_block("a.txt", "content that is long enough")
            .chars()
            .count();
        assert_eq!(parse_truncation_marker(&block), Some(full_len));
    }

    #[test]
    fn ceiling_rejects_one_over() {
        let caps = CapPolicy::default();
        assert!(caps.check_compiled(&"c".repeat(24000)).is_ok());
        assert_eq!(
            caps.check_compiled(&"c".repeat(24001)),
            Err(EnhanceError::CompiledPromptTooLarge {
                length: 24001,
                ceiling: 24000
            })
        );
    }
}
