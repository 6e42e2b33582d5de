//! ATS engine: deterministic resume / job-description compatibility scorer

mod cli;
mod config;
mod error;
mod model;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{AtsEngineError, Result};
use log::{error, info};
use model::resume::ResumeProfile;
use output::formatter::OutputFormatter;
use processing::engine::AnalysisEngine;
use std::process;

fn main() {
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

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            info!("Starting resume compatibility analysis");

            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| AtsEngineError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| AtsEngineError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(AtsEngineError::InvalidInput)?
                }
                None => config.output.format,
            };

            let resume_json = std::fs::read_to_string(&resume)?;
            let resume_profile: ResumeProfile = serde_json::from_str(&resume_json)?;
            let job_description = std::fs::read_to_string(&job)?;

            let engine = AnalysisEngine::new();
            let result = engine.analyze(&resume_profile, &job_description)?;
            info!("Analysis complete: overall score {}", result.overall);

            let formatter = OutputFormatter::new(
                config.output.color_output,
                detailed || config.output.detailed,
            );
            let rendered = formatter.format(&result, output_format)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("Saved analysis to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    AtsEngineError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("{}", rendered);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::reset()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}
