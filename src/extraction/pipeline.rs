//! CV analysis pipeline: text in, candidate profile out

use crate::config::ExtractionConfig;
use crate::error::{CvMatchError, Result};
use crate::extraction::contact::ContactExtractor;
use crate::extraction::dictionary::{KeywordSets, SkillDictionary};
use crate::extraction::experience::ExperienceExtractor;
use crate::extraction::skills::SkillExtractor;
use crate::extraction::summary::ProfileSummarizer;
use crate::models::CandidateProfile;
use log::{debug, info, warn};

/// Runs every extractor over a document. Holds only compiled patterns, so a
/// single instance can serve any number of concurrent analyses.
pub struct CvAnalyzer {
    skills: SkillExtractor,
    experience: ExperienceExtractor,
    contact: ContactExtractor,
    summarizer: ProfileSummarizer,
}

impl CvAnalyzer {
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        let dictionary = SkillDictionary::with_additional_skills(&config.extra_skills);
        Self::with_vocabulary(&dictionary, &KeywordSets::default(), config)
    }

    pub fn with_vocabulary(
        dictionary: &SkillDictionary,
        keywords: &KeywordSets,
        config: &ExtractionConfig,
    ) -> Result<Self> {
        debug!("Building CV analyzer with {} dictionary skills", dictionary.len());

        Ok(Self {
            skills: SkillExtractor::new(dictionary, keywords)?
                .with_context_window(config.context_window)
                .with_default_years(config.default_years),
            experience: ExperienceExtractor::new(keywords)?
                .with_max_positions(config.max_positions)
                .with_reference_year(config.reference_year),
            contact: ContactExtractor::new()?,
            summarizer: ProfileSummarizer,
        })
    }

    /// Entry point for callers that may not have a document at all
    pub fn extract_profile(&self, text: Option<&str>) -> Result<CandidateProfile> {
        let text = text.ok_or_else(|| {
            CvMatchError::EmptyInput("no document text was provided".to_string())
        })?;
        Ok(self.analyze(text))
    }

    pub fn analyze(&self, text: &str) -> CandidateProfile {
        let skills = self.skills.extract(text);
        let experience = self.experience.extract_experience(text);
        let education = self.experience.extract_education(text);
        let contact = self.contact.extract(text);
        let summary = self.summarizer.summarize(&skills, &experience);

        if skills.is_empty() && !text.trim().is_empty() {
            warn!("No known skills found in a {} character document", text.chars().count());
        }

        info!(
            "Extracted {} skills, {} years of experience, {} education entries",
            skills.len(),
            experience.total_years,
            education.len()
        );

        CandidateProfile {
            skills,
            experience,
            education,
            contact,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CV: &str = "Jane Roe\n\
        jane@example.com | github.com/janeroe\n\
        Senior Frontend Developer, Acme 2019-2022\n\
        Built design systems in React and TypeScript\n\
        Lead Engineer, Globex 2022-Present\n\
        5 years of React experience, expert in Python\n\
        Bachelor of Science, State University\n";

    fn analyzer() -> CvAnalyzer {
        let config = ExtractionConfig {
            reference_year: Some(2024),
            ..Default::default()
        };
        CvAnalyzer::from_config(&config).unwrap()
    }

    #[test]
    fn test_full_profile() {
        let profile = analyzer().analyze(SAMPLE_CV);

        let names: Vec<&str> = profile.skills.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"React"));
        assert!(names.contains(&"TypeScript"));
        assert!(names.contains(&"Python"));
        assert_eq!(profile.experience.total_years, 5);
        assert_eq!(profile.experience.positions.len(), 2);
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.contact.email.as_deref(), Some("jane@example.com"));
        assert!(profile.summary.starts_with("Mid-level professional with 5 years"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let analyzer = analyzer();
        assert_eq!(analyzer.analyze(SAMPLE_CV), analyzer.analyze(SAMPLE_CV));
    }

    #[test]
    fn test_missing_document_is_an_error() {
        assert!(matches!(
            analyzer().extract_profile(None),
            Err(CvMatchError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_empty_document_gives_empty_profile() {
        let profile = analyzer().extract_profile(Some("")).unwrap();
        assert!(profile.is_empty());
        assert!(profile.education.is_empty());
        assert_eq!(profile.contact.email, None);
    }

    #[test]
    fn test_extra_skills_from_config() {
        let config = ExtractionConfig {
            extra_skills: vec!["Design Systems".to_string()],
            ..Default::default()
        };
        let analyzer = CvAnalyzer::from_config(&config).unwrap();
        let profile = analyzer.analyze("Built design systems in React");
        assert!(profile.skills.iter().any(|s| s.name == "Design Systems"));
    }
}
