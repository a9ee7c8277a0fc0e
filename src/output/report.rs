//! Report structures returned by the analysis flows

use crate::matching::{JobMatch, SkillGapEntry};
use crate::models::{CandidateProfile, Skill};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything produced from one uploaded CV
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvAnalysisReport {
    pub extracted_data: CandidateProfile,
    pub matched_jobs: Vec<JobMatch>,
    pub skill_gaps: Vec<SkillGapEntry>,
    pub statistics: AnalysisStatistics,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStatistics {
    pub total_skills_found: usize,
    pub years_of_experience: u32,
    pub average_match_score: u8,
}

impl AnalysisStatistics {
    pub fn from_matches(profile: &CandidateProfile, matches: &[JobMatch]) -> Self {
        let average_match_score = if matches.is_empty() {
            0
        } else {
            let sum: u32 = matches.iter().map(|m| m.result.percentage as u32).sum();
            (sum as f64 / matches.len() as f64).round() as u8
        };

        Self {
            total_skills_found: profile.skills.len(),
            years_of_experience: profile.experience.total_years,
            average_match_score,
        }
    }
}

/// Stored-profile job recommendations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub count: usize,
    pub recommendations: Vec<JobMatch>,
    pub generated_at: DateTime<Utc>,
}

/// Gaps between a stored profile and its well-matched jobs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapReport {
    pub skill_gaps: Vec<SkillGapEntry>,
    pub user_skills: Vec<Skill>,
    pub jobs_considered: usize,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchResult;
    use crate::models::{ExperienceLevel, JobPosting, JobType, LocationType, Salary};

    fn job_match(percentage: u8) -> JobMatch {
        JobMatch {
            job: JobPosting {
                id: None,
                title: "QA".to_string(),
                company: String::new(),
                location: "Oslo".to_string(),
                location_type: LocationType::Hybrid,
                job_type: JobType::PartTime,
                salary: Salary {
                    min: 0.0,
                    max: 0.0,
                    currency: "NOK".to_string(),
                },
                experience_level: ExperienceLevel::Mid,
                required_skills: Vec::new(),
                nice_to_have_skills: Vec::new(),
            },
            result: MatchResult {
                percentage,
                reasons: Vec::new(),
                skills_matched: Vec::new(),
                skills_missing: Vec::new(),
            },
        }
    }

    #[test]
    fn test_average_of_matches() {
        let stats = AnalysisStatistics::from_matches(
            &CandidateProfile::default(),
            &[job_match(80), job_match(75), job_match(70)],
        );
        assert_eq!(stats.average_match_score, 75);
        assert_eq!(stats.total_skills_found, 0);
    }

    #[test]
    fn test_average_without_matches_is_zero() {
        let stats = AnalysisStatistics::from_matches(&CandidateProfile::default(), &[]);
        assert_eq!(stats.average_match_score, 0);
    }
}
