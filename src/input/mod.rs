//! Resume ingestion: file-type detection and text decoding

pub mod text_extractor;

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
}

impl FileType {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeAnalyzerError::InvalidInput(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        match extension.to_lowercase().as_str() {
            "pdf" => Ok(FileType::Pdf),
            "txt" => Ok(FileType::Text),
            "md" | "markdown" => Ok(FileType::Markdown),
            other => Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                ".{} ({})",
                other,
                path.display()
            ))),
        }
    }
}

/// Read a resume file and return its decoded text with normalized newlines.
pub async fn read_resume(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ResumeAnalyzerError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    let text = match FileType::from_path(path)? {
        FileType::Pdf => {
            info!("Extracting text from PDF: {}", path.display());
            PdfExtractor.extract(path).await?
        }
        FileType::Text => {
            info!("Reading plain text file: {}", path.display());
            PlainTextExtractor.extract(path).await?
        }
        FileType::Markdown => {
            info!("Converting markdown file: {}", path.display());
            MarkdownExtractor.extract(path).await?
        }
    };

    Ok(text.replace("\r\n", "\n"))
}
