//! CLI interface for the CV matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cv-matcher")]
#[command(about = "CV analysis and job matching engine")]
#[command(
    long_about = "Extract skills, experience and contact details from a CV, rank job postings \
                  against it, and report the skills worth learning next"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a CV and match it against job postings
    Analyze {
        /// Path to CV file (TXT, MD)
        #[arg(long)]
        cv: PathBuf,

        /// Path to job postings (JSON)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Year used in place of "present" when computing experience
        #[arg(long)]
        reference_year: Option<i32>,
    },

    /// Recommend jobs for a stored user profile
    Recommend {
        /// Path to user profile (JSON)
        #[arg(short, long)]
        user: PathBuf,

        /// Path to job postings (JSON)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show skills missing from a stored profile across well-matched jobs
    SkillGap {
        /// Path to user profile (JSON)
        #[arg(short, long)]
        user: PathBuf,

        /// Path to job postings (JSON)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show profile completeness score
    Strength {
        /// Path to user profile (JSON)
        #[arg(short, long)]
        user: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.MD"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["txt"]).is_err());
    }

    #[test]
    fn test_parses_analyze_command() {
        let cli = Cli::try_parse_from([
            "cv-matcher", "analyze", "--cv", "cv.txt", "--jobs", "jobs.json", "-o", "json",
            "--reference-year", "2024",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze { cv, output, reference_year, .. } => {
                assert_eq!(cv, PathBuf::from("cv.txt"));
                assert_eq!(output.as_deref(), Some("json"));
                assert_eq!(reference_year, Some(2024));
            }
            _ => panic!("expected analyze command"),
        }
    }
}
