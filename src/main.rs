//! Resume analyzer: resume quality and ATS compatibility scoring tool

mod cli;
mod config;
mod error;
mod input;
mod analysis;
mod output;

use analysis::engine::AnalysisEngine;
use analysis::report::{AnalysisInput, ResumeRecord};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{AnalyzerError, Result};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::{failure_envelope, ConsoleFormatter, JsonFormatter};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        // Boundary failures surface as the structured envelope, never a
        // bare fault
        eprintln!("{}", failure_envelope(&e));
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Check {
            resume,
            job_title,
            job,
            output,
            save,
            detailed,
        } => {
            info!("Starting quick resume check");

            let output_format = cli::parse_output_format(&output).map_err(AnalyzerError::InvalidInput)?;

            let mut input_manager = InputManager::new(config.input.clone());
            let resume_text = input_manager.extract_text(&resume).await?;

            let job_description = match &job {
                Some(path) => Some(input_manager.extract_text(path).await?),
                None => None,
            };

            info!(
                "Extracted {} characters of resume text",
                resume_text.len()
            );

            let engine = AnalysisEngine::new();
            let analysis_input = AnalysisInput::new(resume_text, job_description, job_title);
            let result = engine.quick_check(&analysis_input);

            let rendered = match output_format {
                OutputFormat::Console => ConsoleFormatter::new(
                    config.output.color_output,
                    detailed || config.output.detailed,
                )
                .format_quick(&result)?,
                OutputFormat::Json => JsonFormatter::new(true).format_quick(&result)?,
            };

            emit(rendered, save).await
        }

        Commands::Ats {
            record,
            job,
            output,
            save,
            detailed,
        } => {
            info!("Starting deep ATS analysis");

            let output_format = cli::parse_output_format(&output).map_err(AnalyzerError::InvalidInput)?;

            cli::validate_file_extension(&record, &["json"])
                .map_err(|e| AnalyzerError::InvalidInput(format!("Record file: {}", e)))?;

            let record_json = tokio::fs::read_to_string(&record).await?;
            let resume_record: ResumeRecord = serde_json::from_str(&record_json)?;

            let job_description = match &job {
                Some(path) => {
                    let mut input_manager = InputManager::new(config.input.clone());
                    Some(input_manager.extract_text(path).await?)
                }
                None => None,
            };

            let engine = AnalysisEngine::new();
            let report = engine.deep_analyze(&resume_record, job_description.as_deref());

            let rendered = match output_format {
                OutputFormat::Console => ConsoleFormatter::new(
                    config.output.color_output,
                    detailed || config.output.detailed,
                )
                .format_deep(&report)?,
                OutputFormat::Json => JsonFormatter::new(true).format_deep(&report)?,
            };

            emit(rendered, save).await
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        AnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::reset()?;
                    println!("Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}

async fn emit(rendered: String, save: Option<PathBuf>) -> Result<()> {
    match save {
        Some(path) => {
            tokio::fs::write(&path, &rendered).await?;
            info!("Saved output to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
