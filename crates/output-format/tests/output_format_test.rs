//! Tests for [`output_format::format_for_download`] and [`output_format::download_file_name`].

use output_format::{download_file_name, format_for_download, DownloadFormat};

/// **Test: Valid JSON is re-encoded pretty-printed.**
///
/// **Expected:** Content parses to the same value as the input and spans multiple lines.
#[test]
fn json_is_pretty_printed() {
    let raw = r#"{"prompt":"hi","steps":[1,2]}"#;
    let artifact = format_for_download(raw, "JSON");

    assert_eq!(artifact.mime_type, "application/json");
    assert_eq!(artifact.file_extension, "json");
    assert!(artifact.content.contains('\n'));
    let reparsed: serde_json::Value = serde_json::from_str(&artifact.content).unwrap();
    let original: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(reparsed, original);
}

/// **Test: Invalid JSON passes through unchanged.**
#[test]
fn invalid_json_passes_through() {
    let artifact = format_for_download("Here is your prompt: {oops", "json");
    assert_eq!(artifact.content, "Here is your prompt: {oops");
    assert_eq!(artifact.mime_type, "application/json");
}

/// **Test: Pass-through formats keep their mime type and extension.**
#[test]
fn pass_through_formats() {
    let cases = [
        ("CSV", "text/csv", "csv"),
        ("HTML", "text/html", "html"),
        ("SQL", "application/sql", "sql"),
        ("SRT", "application/x-subrip", "srt"),
        ("Markdown", "text/markdown", "md"),
        ("md", "text/markdown", "md"),
    ];
    for (label, mime, ext) in cases {
        let artifact = format_for_download("a,b\n1,2", label);
        assert_eq!(artifact.mime_type, mime, "label {}", label);
        assert_eq!(artifact.file_extension, ext, "label {}", label);
        assert_eq!(artifact.content, "a,b\n1,2");
    }
}

/// **Test: PDF and Word render as Markdown; unknown labels as plain text.**
#[test]
fn document_and_unknown_labels() {
    assert_eq!(DownloadFormat::from_label("PDF"), DownloadFormat::Markdown);
    assert_eq!(DownloadFormat::from_label("Word"), DownloadFormat::Markdown);
    let artifact = format_for_download("text", "Plain Text");
    assert_eq!(artifact.mime_type, "text/plain");
    assert_eq!(artifact.file_extension, "txt");
    assert_eq!(format_for_download("", "").file_extension, "txt");
}

/// **Test: Download file name derives from the tool name.**
#[test]
fn file_name_from_tool_name() {
    assert_eq!(download_file_name("Email Writer", "md"), "email-writer-prompt.md");
    assert_eq!(
        download_file_name("  SQL   Query Builder ", "sql"),
        "sql-query-builder-prompt.sql"
    );
}
