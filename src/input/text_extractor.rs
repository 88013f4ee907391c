//! Text extraction from the supported resume formats

use crate::error::{Result, ResumeAnalyzerError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Flatten markdown to plain text. Headings become their own lines with a
/// blank line before them, so labeled sections stay detectable.
fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::Start(Tag::Heading(..)) => {
                if !text.is_empty() {
                    text.push('\n');
                }
            }
            Event::End(Tag::Heading(..)) | Event::End(Tag::Paragraph) | Event::End(Tag::Item) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_formatting_is_stripped() {
        let text = markdown_to_text("# John Doe\n\n**Senior** Engineer at `Acme Inc`");

        assert!(text.contains("John Doe"));
        assert!(text.contains("Senior Engineer at Acme Inc"));
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
    }

    #[test]
    fn test_markdown_headings_separate_sections() {
        let text = markdown_to_text("## Skills\n\n- Python\n- AWS\n\n## Education\n\nMIT");

        let skills_part = text.split("Education").next().unwrap();
        assert!(skills_part.contains("Skills"));
        assert!(skills_part.contains("Python"));
        // A blank line must separate the sections.
        assert!(text.contains("\n\nEducation"));
    }
}
