//! Classification and text extraction.

use std::io::{Cursor, Read};

use base64::Engine;
use thiserror::Error;

use crate::file::FileKind;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "py", "js", "ts", "java", "cpp", "json", "csv", "sql", "docx", "pdf",
];

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),
}

fn extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

pub fn classify(file_name: &str) -> FileKind {
    let ext = extension(file_name);
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        FileKind::Image
    } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        FileKind::Text
    } else {
        FileKind::Other
    }
}

/// Full text of a text-like file: PDF and DOCX are parsed, everything else is decoded as UTF-8.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    match extension(file_name).as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string())),
        "docx" => extract_docx(bytes),
        _ => {
            let text = String::from_utf8(bytes.to_vec())?;
            Ok(text
                .strip_prefix('\u{feff}')
                .map(str::to_string)
                .unwrap_or(text))
        }
    }
}

/// Paragraph text from `word/document.xml`, one paragraph per line.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    use quick_xml::events::Event;

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(format!("not a ZIP archive: {}", e)))?;

    let mut doc_xml = String::new();
    {
        let mut entry = archive
            .by_name("word/document.xml")
            .map_err(|_| ExtractError::Docx("missing word/document.xml".to_string()))?;
        entry
            .read_to_string(&mut doc_xml)
            .map_err(|e| ExtractError::Docx(e.to_string()))?;
    }

    let mut reader = quick_xml::Reader::from_str(&doc_xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut paragraph = String::new();
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => paragraph.clear(),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    if !paragraph.is_empty() {
                        paragraphs.push(std::mem::take(&mut paragraph));
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                if let Ok(text) = e.unescape() {
                    paragraph.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}

/// `data:<mime>;base64,<payload>` preview reference for an image.
pub fn image_data_url(file_name: &str, bytes: &[u8]) -> String {
    let mime = match extension(file_name).as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    };
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, b64)
}
