//! Resume analyzer: AI-assisted resume analysis and improvement feedback tool

mod cli;
mod config;
mod error;
mod input;
mod llm;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeAnalyzerError};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use output::formatter::ReportGenerator;
use processing::analyzer::AnalysisEngine;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            no_llm,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            let target_job = job.trim();
            if target_job.is_empty() {
                return Err(ResumeAnalyzerError::InvalidInput(
                    "Target job role must not be empty".to_string(),
                ));
            }

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            if no_llm {
                // ConfigCheck short-circuits to the illustrative result.
                config.llm.api_key = None;
            } else if !config.has_credential() {
                info!("OPENROUTER_API_KEY is not set; analysis will use illustrative guidance");
            }

            println!("📄 Resume: {}", resume.display());
            println!("🎯 Target role: {}", target_job);

            let resume_text = input::read_resume(&resume).await?;
            if resume_text.trim().is_empty() {
                return Err(ResumeAnalyzerError::InvalidInput(format!(
                    "No text could be extracted from {}",
                    resume.display()
                )));
            }
            info!("extracted {} characters of resume text", resume_text.len());

            let engine = AnalysisEngine::new(&config);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .expect("invalid spinner template"),
            );
            spinner.set_message("Analyzing your resume...");
            spinner.enable_steady_tick(Duration::from_millis(120));

            let report = engine.analyze(&resume_text, target_job).await;

            spinner.finish_and_clear();

            let generator = ReportGenerator::new(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
            );
            let rendered = generator.render(&report, &output_format)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("\n{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Model: {}", config.llm.model);
                println!("Endpoint: {}", config.llm.api_url);
                println!("Temperature: {}", config.llm.temperature);
                println!("Max tokens: {}", config.llm.max_tokens);
                println!("Reasoning enabled: {}", config.llm.reasoning_enabled);
                println!(
                    "Credential: {}",
                    if config.has_credential() {
                        "configured"
                    } else {
                        "not configured (set OPENROUTER_API_KEY)"
                    }
                );
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
