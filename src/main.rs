//! CV matcher: CV analysis and job matching engine

use clap::Parser;
use colored::Colorize;
use cv_matcher::analysis::AnalysisEngine;
use cv_matcher::cli::{self, Cli, Commands, ConfigAction};
use cv_matcher::config::{Config, OutputFormat};
use cv_matcher::error::{CvMatchError, Result};
use cv_matcher::input::{load_jobs, load_user, InputManager};
use cv_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use log::{error, info};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            cv,
            jobs,
            output,
            save,
            reference_year,
        } => {
            info!("Starting CV analysis");

            cli::validate_file_extension(&cv, &["txt", "text", "md", "markdown"])
                .map_err(|e| CvMatchError::InvalidInput(format!("CV file: {}", e)))?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| CvMatchError::InvalidInput(format!("Jobs file: {}", e)))?;
            let format = resolve_format(output.as_deref(), &config)?;

            if reference_year.is_some() {
                config.extraction.reference_year = reference_year;
            }

            let input_manager = InputManager::new();
            let cv_text = input_manager.extract_text(&cv).await?;
            let postings = load_jobs(&jobs).await?;

            let engine = AnalysisEngine::new(&config)?;
            let report = engine.analyze_cv(&cv_text, &postings)?;

            let generator = generator_for(&config, save.as_deref());
            let content = generator.formatter(format).format_cv_analysis(&report)?;
            emit(&content, save.as_deref())?;
        }

        Commands::Recommend {
            user,
            jobs,
            output,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let user = load_user(&user).await?;
            let postings = load_jobs(&jobs).await?;

            let engine = AnalysisEngine::new(&config)?;
            let report = engine.recommend_jobs(&user, &postings)?;

            let generator = generator_for(&config, save.as_deref());
            let content = generator.formatter(format).format_recommendations(&report)?;
            emit(&content, save.as_deref())?;
        }

        Commands::SkillGap {
            user,
            jobs,
            output,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let user = load_user(&user).await?;
            let postings = load_jobs(&jobs).await?;

            let engine = AnalysisEngine::new(&config)?;
            let report = engine.profile_skill_gaps(&user, &postings)?;

            let generator = generator_for(&config, save.as_deref());
            let content = generator.formatter(format).format_skill_gaps(&report)?;
            emit(&content, save.as_deref())?;
        }

        Commands::Strength { user } => {
            let user = load_user(&user).await?;
            let strength = user.profile_strength();
            let label = format!("{}%", strength);
            let label = match strength {
                80..=100 => label.green(),
                50..=79 => label.yellow(),
                _ => label.red(),
            };
            println!("Profile strength: {}", label.bold());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| CvMatchError::Configuration(e.to_string()))?;
                println!("Configuration ({})\n", config_path.display());
                println!("{}", rendered);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset to defaults: {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(name) => cli::parse_output_format(name).map_err(CvMatchError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn generator_for(config: &Config, save: Option<&Path>) -> ReportGenerator {
    // saved console reports stay free of escape codes
    ReportGenerator::with_options(config.output.color_output && save.is_none(), true)
}

fn emit(content: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(content, path)?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
