//! Configuration management for the CV matcher

use crate::error::{CvMatchError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Characters inspected on each side of a skill mention
    pub context_window: usize,
    pub default_years: u32,
    pub max_positions: usize,
    pub extra_skills: Vec<String>,
    /// Year used for "present" ranges; the system clock when unset
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub top_matches: usize,
    pub gap_job_pool: usize,
    pub cv_gap_limit: usize,
    pub profile_gap_limit: usize,
    pub good_match_threshold: u8,
    pub recommendation_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            context_window: 100,
            default_years: 1,
            max_positions: 5,
            extra_skills: Vec::new(),
            reference_year: None,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            top_matches: 10,
            gap_job_pool: 20,
            cv_gap_limit: 8,
            profile_gap_limit: 10,
            good_match_threshold: 70,
            recommendation_limit: 20,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from `path`, writing defaults on first use
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                CvMatchError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            info!("Writing default configuration to {}", path.display());
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CvMatchError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.matching.good_match_threshold > 100 {
            return Err(CvMatchError::Configuration(format!(
                "matching.good_match_threshold must be within 0..=100, got {}",
                self.matching.good_match_threshold
            )));
        }
        if let Some(year) = self.extraction.reference_year {
            if !(1900..=9999).contains(&year) {
                return Err(CvMatchError::Configuration(format!(
                    "extraction.reference_year out of range: {}",
                    year
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.extraction.context_window, 100);
        assert_eq!(config.matching.cv_gap_limit, 8);
        assert_eq!(config.matching.profile_gap_limit, 10);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_round_trip_and_partial_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.extraction.extra_skills = vec!["Design Systems".to_string()];
        config.extraction.reference_year = Some(2024);
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        std::fs::write(&path, "[matching]\ntop_matches = 3\n").unwrap();
        let partial = Config::load_from(&path).unwrap();
        assert_eq!(partial.matching.top_matches, 3);
        assert_eq!(partial.matching.gap_job_pool, 20);
        assert_eq!(partial.extraction, ExtractionConfig::default());
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching]\ngood_match_threshold = 150\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(CvMatchError::Configuration(_))
        ));
    }
}
