//! Output formatters for the analysis report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::llm::analyzer::AnalysisSource;
use crate::processing::analyzer::ResumeReport;
use colored::Colorize;
use std::collections::BTreeSet;

/// Trait for rendering a finished report
pub trait OutputFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String>;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter;

pub struct MarkdownFormatter;

/// Coordinates the individual formatters behind one entry point.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter {
                use_colors,
                detailed,
            },
            json_formatter: JsonFormatter,
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn render(&self, report: &ResumeReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

/// One-line provenance note for the analysis lists.
fn source_note(source: &AnalysisSource) -> Option<&'static str> {
    match source {
        AnalysisSource::Model => None,
        AnalysisSource::StaticFallback => {
            Some("No API credential configured; showing illustrative guidance.")
        }
        AnalysisSource::DegradedFallback => {
            Some("Model analysis unavailable; showing generic guidance.")
        }
    }
}

impl ConsoleFormatter {
    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn push_set(&self, out: &mut String, title: &str, entries: &BTreeSet<String>, empty_note: &str) {
        out.push_str(&format!("\n{}\n", self.heading(title)));
        if entries.is_empty() {
            out.push_str(&format!("  {}\n", empty_note));
        } else {
            for entry in entries {
                out.push_str(&format!("  • {}\n", entry));
            }
        }
    }

    fn push_list(&self, out: &mut String, title: &str, entries: &[String]) {
        out.push_str(&format!("\n{}\n", self.heading(title)));
        for entry in entries {
            out.push_str(&format!("  • {}\n", entry));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "{}\n",
            self.heading(&format!("📄 Resume Analysis for {}", report.target_job))
        ));
        out.push_str(&format!(
            "  Skills found: {}  |  Education entries: {}  |  Work experiences: {}\n",
            report.skills.len(),
            report.education.len(),
            report.experience.len()
        ));

        self.push_set(
            &mut out,
            "🛠  Skills Identified",
            &report.skills,
            "No skills identified. Try improving the format of your resume.",
        );
        self.push_set(
            &mut out,
            "🎓 Education",
            &report.education,
            "No education information found.",
        );
        self.push_set(
            &mut out,
            "💼 Work Experience",
            &report.experience,
            "No work experience found.",
        );

        out.push_str(&format!("\n{}\n", self.heading("🤖 AI-Powered Suggestions")));
        if let Some(note) = source_note(&report.analysis.source) {
            let note = if self.use_colors {
                note.yellow().to_string()
            } else {
                note.to_string()
            };
            out.push_str(&format!("  ⚠️  {}\n", note));
        }

        let analysis = &report.analysis.result;
        self.push_list(&mut out, "Strengths", &analysis.strengths);
        self.push_list(&mut out, "Areas for Improvement", &analysis.improvements);
        self.push_list(&mut out, "Missing Skills", &analysis.missing_skills);
        self.push_list(
            &mut out,
            "Wording & Formatting Suggestions",
            &analysis.wording_suggestions,
        );

        if self.detailed {
            out.push_str(&format!("\n{}\n", self.heading("📊 Details")));
            out.push_str(&format!(
                "  Words: {}  |  Characters: {}  |  Lines: {}\n",
                report.metadata.stats.word_count,
                report.metadata.stats.character_count,
                report.metadata.stats.line_count
            ));
            out.push_str(&format!("  Model: {}\n", report.metadata.model));
            out.push_str(&format!(
                "  Generated: {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(|e| {
            crate::error::ResumeAnalyzerError::OutputFormatting(format!(
                "Failed to serialize report: {}",
                e
            ))
        })
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ResumeReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("# Resume Analysis for {}\n\n", report.target_job));
        out.push_str(&format!(
            "Generated {} by model `{}`.\n",
            report.metadata.generated_at.format("%Y-%m-%d"),
            report.metadata.model
        ));

        for (title, entries) in [
            ("Skills", &report.skills),
            ("Education", &report.education),
            ("Work Experience", &report.experience),
        ] {
            out.push_str(&format!("\n## {}\n\n", title));
            if entries.is_empty() {
                out.push_str("_None found._\n");
            } else {
                for entry in entries {
                    out.push_str(&format!("- {}\n", entry));
                }
            }
        }

        out.push_str("\n## AI-Powered Suggestions\n");
        if let Some(note) = source_note(&report.analysis.source) {
            out.push_str(&format!("\n> {}\n", note));
        }

        let analysis = &report.analysis.result;
        for (title, entries) in [
            ("Strengths", &analysis.strengths),
            ("Areas for Improvement", &analysis.improvements),
            ("Missing Skills", &analysis.missing_skills),
            ("Wording & Formatting Suggestions", &analysis.wording_suggestions),
        ] {
            out.push_str(&format!("\n### {}\n\n", title));
            for entry in entries {
                out.push_str(&format!("- {}\n", entry));
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::processing::analyzer::AnalysisEngine;

    async fn sample_report() -> ResumeReport {
        let engine = AnalysisEngine::new(&Config::default());
        engine
            .analyze(
                "Skills: Python, AWS\n\nWork Experience:\nAcme Inc - Senior Engineer",
                "Data Scientist",
            )
            .await
    }

    #[tokio::test]
    async fn test_console_output_lists_extracted_facts() {
        let report = sample_report().await;
        let generator = ReportGenerator::new(false, false);

        let rendered = generator.render(&report, &OutputFormat::Console).unwrap();

        assert!(rendered.contains("Data Scientist"));
        assert!(rendered.contains("Python"));
        assert!(rendered.contains("Senior Engineer at Acme Inc"));
        assert!(rendered.contains("No API credential configured"));
    }

    #[tokio::test]
    async fn test_json_output_round_trips() {
        let report = sample_report().await;
        let generator = ReportGenerator::new(false, false);

        let rendered = generator.render(&report, &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["target_job"], "Data Scientist");
        assert!(value["analysis"]["result"]["strengths"].is_array());
        assert!(value["analysis"]["result"]["wording_suggestions"].is_array());
    }

    #[tokio::test]
    async fn test_markdown_output_has_all_sections() {
        let report = sample_report().await;
        let generator = ReportGenerator::new(false, true);

        let rendered = generator.render(&report, &OutputFormat::Markdown).unwrap();

        for heading in [
            "## Skills",
            "## Education",
            "## Work Experience",
            "### Strengths",
            "### Missing Skills",
        ] {
            assert!(rendered.contains(heading), "missing {}", heading);
        }
    }
}
