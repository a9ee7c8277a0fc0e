//! Analysis flows combining extraction, scoring and gap aggregation

use crate::config::{Config, MatchingConfig};
use crate::error::Result;
use crate::extraction::CvAnalyzer;
use crate::matching::{aggregate_skill_gaps, rank_jobs, ScoringScheme};
use crate::models::{JobPosting, UserRecord};
use crate::output::report::{
    AnalysisStatistics, CvAnalysisReport, RecommendationReport, SkillGapReport,
};
use chrono::Utc;
use log::info;

/// Coordinates the CV analyzer and the matching engine
pub struct AnalysisEngine {
    analyzer: CvAnalyzer,
    matching: MatchingConfig,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            analyzer: CvAnalyzer::from_config(&config.extraction)?,
            matching: config.matching.clone(),
        })
    }

    /// Extract a profile from `text` and match it against `jobs`
    pub fn analyze_cv(&self, text: &str, jobs: &[JobPosting]) -> Result<CvAnalysisReport> {
        let profile = self.analyzer.analyze(text);
        let ranked = rank_jobs(&profile, jobs, ScoringScheme::Cv)?;

        let gap_pool = ranked.iter().take(self.matching.gap_job_pool).map(|m| &m.job);
        let skill_gaps =
            aggregate_skill_gaps(&profile.skills, gap_pool, self.matching.cv_gap_limit);

        let matched_jobs: Vec<_> = ranked.into_iter().take(self.matching.top_matches).collect();
        let statistics = AnalysisStatistics::from_matches(&profile, &matched_jobs);

        info!(
            "CV matched against {} jobs, average top score {}%",
            jobs.len(),
            statistics.average_match_score
        );

        Ok(CvAnalysisReport {
            extracted_data: profile,
            matched_jobs,
            skill_gaps,
            statistics,
            generated_at: Utc::now(),
        })
    }

    /// Best jobs for a stored user profile
    pub fn recommend_jobs(
        &self,
        user: &UserRecord,
        jobs: &[JobPosting],
    ) -> Result<RecommendationReport> {
        let mut recommendations = rank_jobs(user, jobs, ScoringScheme::Stored)?;
        recommendations.truncate(self.matching.recommendation_limit);

        Ok(RecommendationReport {
            count: recommendations.len(),
            recommendations,
            generated_at: Utc::now(),
        })
    }

    /// Skills missing from a stored profile across its good matches
    pub fn profile_skill_gaps(
        &self,
        user: &UserRecord,
        jobs: &[JobPosting],
    ) -> Result<SkillGapReport> {
        let threshold = self.matching.good_match_threshold;
        let mut good_matches: Vec<&JobPosting> = Vec::new();
        for job in jobs {
            if ScoringScheme::Stored.score(user, job)?.percentage > threshold {
                good_matches.push(job);
            }
        }

        info!(
            "{} of {} jobs score above {}% for the stored profile",
            good_matches.len(),
            jobs.len(),
            threshold
        );

        Ok(SkillGapReport {
            skill_gaps: aggregate_skill_gaps(
                &user.skills,
                good_matches.iter().copied(),
                self.matching.profile_gap_limit,
            ),
            user_skills: user.skills.clone(),
            jobs_considered: good_matches.len(),
            generated_at: Utc::now(),
        })
    }
}
