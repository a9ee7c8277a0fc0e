//! Match scoring between a profile and a job posting
//!
//! Two weighting schemes share the same skill-overlap computation:
//!
//! | component  | stored | cv |
//! |------------|--------|----|
//! | skills     | 40     | 50 |
//! | experience | 20     | 25 |
//! | location   | 15     | -  |
//! | job type   | 15     | -  |
//! | salary     | 10     | -  |
//! | education  | -      | 15 |
//! | breadth    | -      | 10 |

use crate::error::Result;
use crate::models::{
    CandidateProfile, JobPosting, Preferences, Skill, SkillLevel, UserRecord,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Anything that can be scored against a job
pub trait MatchSubject {
    fn skills(&self) -> &[Skill];

    fn years_of_experience(&self) -> u32;

    fn has_education(&self) -> bool {
        false
    }

    fn preferences(&self) -> Option<&Preferences> {
        None
    }
}

impl MatchSubject for CandidateProfile {
    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn years_of_experience(&self) -> u32 {
        self.experience.total_years
    }

    fn has_education(&self) -> bool {
        !self.education.is_empty()
    }
}

impl MatchSubject for UserRecord {
    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn years_of_experience(&self) -> u32 {
        self.profile.experience
    }

    fn preferences(&self) -> Option<&Preferences> {
        Some(&self.preferences)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub name: String,
    pub your_level: SkillLevel,
    pub required_level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingSkill {
    pub name: String,
    pub required_level: SkillLevel,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub percentage: u8,
    pub reasons: Vec<String>,
    pub skills_matched: Vec<SkillMatch>,
    pub skills_missing: Vec<MissingSkill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringScheme {
    /// Stored user profile with preferences
    Stored,
    /// Profile freshly extracted from a CV
    Cv,
}

/// Required skills of a job split by whether the candidate holds them
#[derive(Debug, Clone, PartialEq)]
pub struct SkillOverlap {
    pub matched: Vec<SkillMatch>,
    pub missing: Vec<MissingSkill>,
}

impl SkillOverlap {
    pub fn compute(candidate: &[Skill], job: &JobPosting) -> Self {
        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for required in &job.required_skills {
            match candidate.iter().find(|s| s.matches_name(&required.name)) {
                Some(held) => matched.push(SkillMatch {
                    name: required.name.clone(),
                    your_level: held.level,
                    required_level: required.level,
                }),
                None => missing.push(MissingSkill {
                    name: required.name.clone(),
                    required_level: required.level,
                    required: required.required,
                }),
            }
        }

        Self { matched, missing }
    }

    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Matched share of required skills; 0 when the job lists none
    pub fn ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.matched.len() as f64 / total as f64,
        }
    }

    fn reason(&self) -> Option<String> {
        (!self.matched.is_empty()).then(|| {
            format!(
                "Strong match: {} out of {} required skills",
                self.matched.len(),
                self.total()
            )
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFit {
    Remote,
    Preferred,
    Elsewhere,
}

impl LocationFit {
    pub fn assess(job: &JobPosting, preferences: Option<&Preferences>) -> Self {
        if job.is_remote() {
            LocationFit::Remote
        } else if preferences.map_or(false, |p| p.prefers_location(&job.location)) {
            LocationFit::Preferred
        } else {
            LocationFit::Elsewhere
        }
    }

    pub fn percent(self) -> f64 {
        match self {
            LocationFit::Remote | LocationFit::Preferred => 100.0,
            LocationFit::Elsewhere => 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryFit {
    Meets,
    Below,
    NoPreference,
}

impl SalaryFit {
    pub fn assess(job: &JobPosting, preferences: Option<&Preferences>) -> Self {
        match preferences.and_then(Preferences::minimum_salary) {
            Some(min) if job.salary.max >= min => SalaryFit::Meets,
            Some(_) => SalaryFit::Below,
            None => SalaryFit::NoPreference,
        }
    }

    pub fn percent(self) -> f64 {
        match self {
            SalaryFit::Meets => 100.0,
            SalaryFit::Below => 30.0,
            SalaryFit::NoPreference => 50.0,
        }
    }
}

fn finish(total: f64) -> u8 {
    total.min(100.0).max(0.0).round() as u8
}

impl ScoringScheme {
    pub fn score<S: MatchSubject + ?Sized>(
        &self,
        subject: &S,
        job: &JobPosting,
    ) -> Result<MatchResult> {
        job.validate()?;

        let overlap = SkillOverlap::compute(subject.skills(), job);
        let result = match self {
            ScoringScheme::Stored => score_stored(subject, job, overlap),
            ScoringScheme::Cv => score_cv(subject, job, overlap),
        };

        debug!(
            "{:?} score for '{}': {}%",
            self,
            job.display_name(),
            result.percentage
        );
        Ok(result)
    }
}

fn score_stored<S: MatchSubject + ?Sized>(
    subject: &S,
    job: &JobPosting,
    overlap: SkillOverlap,
) -> MatchResult {
    let preferences = subject.preferences();
    let mut reasons = Vec::new();

    let skills = overlap.ratio() * 40.0;
    reasons.extend(overlap.reason());

    let years = subject.years_of_experience();
    let bucket = (years / 2).min(4);
    let distance = bucket.abs_diff(job.experience_level.ordinal());
    let experience_percent = 100.0 - (distance as f64 * 25.0).min(100.0);
    let experience = experience_percent / 100.0 * 20.0;
    if distance == 0 {
        reasons.push(format!(
            "Experience level matches: {} years fits a {} role",
            years, job.experience_level
        ));
    }

    let location_fit = LocationFit::assess(job, preferences);
    let location = location_fit.percent() / 100.0 * 15.0;
    match location_fit {
        LocationFit::Remote => reasons.push("Remote position".to_string()),
        LocationFit::Preferred => {
            reasons.push(format!("Located in a preferred area: {}", job.location))
        }
        LocationFit::Elsewhere => {}
    }

    let preferred_type = preferences.map_or(false, |p| p.prefers_job_type(job.job_type));
    let job_type_percent = if preferred_type { 100.0 } else { 50.0 };
    let job_type = job_type_percent / 100.0 * 15.0;
    if preferred_type {
        reasons.push(format!("Matches preferred job type: {}", job.job_type));
    }

    let salary_fit = SalaryFit::assess(job, preferences);
    let salary = salary_fit.percent() / 100.0 * 10.0;
    if salary_fit == SalaryFit::Meets {
        reasons.push("Salary meets your expectations".to_string());
    }

    MatchResult {
        percentage: finish(skills + experience + location + job_type + salary),
        reasons,
        skills_matched: overlap.matched,
        skills_missing: overlap.missing,
    }
}

fn score_cv<S: MatchSubject + ?Sized>(
    subject: &S,
    job: &JobPosting,
    overlap: SkillOverlap,
) -> MatchResult {
    let mut reasons = Vec::new();

    let skills = overlap.ratio() * 50.0;
    reasons.extend(overlap.reason());

    let years = subject.years_of_experience();
    let threshold = job.experience_level.year_threshold();
    let experience = if years >= threshold {
        reasons.push(format!(
            "Experience level matches: {} years meets {} requirement",
            years, job.experience_level
        ));
        25.0
    } else {
        reasons.push(format!(
            "Experience: {} years ({} level typically requires {}+ years)",
            years, job.experience_level, threshold
        ));
        years as f64 / threshold as f64 * 25.0
    };

    // Flat score; an education section only earns the reason line.
    let education = 15.0;
    if subject.has_education() {
        reasons.push("Educational qualifications verified".to_string());
    }

    let skill_count = subject.skills().len();
    let breadth = (skill_count as f64 / 10.0 * 10.0).min(10.0);
    if skill_count >= 8 {
        reasons.push(format!(
            "Diverse technical skillset: {} skills identified",
            skill_count
        ));
    }

    MatchResult {
        percentage: finish(skills + experience + education + breadth),
        reasons,
        skills_matched: overlap.matched,
        skills_missing: overlap.missing,
    }
}

/// Score `subject` against `job` under `scheme`
pub fn score_against_job<S: MatchSubject + ?Sized>(
    subject: &S,
    job: &JobPosting,
    scheme: ScoringScheme,
) -> Result<MatchResult> {
    scheme.score(subject, job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CvMatchError;
    use crate::models::{
        EducationEntry, ExperienceLevel, ExperienceSummary, JobType, LocationType, RequiredSkill,
        Salary, SalaryRange, UserProfile,
    };

    fn job(level: ExperienceLevel, skills: &[(&str, SkillLevel, bool)]) -> JobPosting {
        JobPosting {
            id: None,
            title: "Product Designer".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            location_type: LocationType::Onsite,
            job_type: JobType::FullTime,
            salary: Salary {
                min: 50000.0,
                max: 70000.0,
                currency: "EUR".to_string(),
            },
            experience_level: level,
            required_skills: skills
                .iter()
                .map(|(name, level, required)| RequiredSkill {
                    name: name.to_string(),
                    level: *level,
                    required: *required,
                })
                .collect(),
            nice_to_have_skills: Vec::new(),
        }
    }

    fn designer_job() -> JobPosting {
        job(
            ExperienceLevel::Senior,
            &[
                ("UI/UX", SkillLevel::Advanced, true),
                ("Figma", SkillLevel::Advanced, true),
                ("Design Systems", SkillLevel::Intermediate, true),
            ],
        )
    }

    fn candidate(skills: &[(&str, SkillLevel)], years: u32, educated: bool) -> CandidateProfile {
        CandidateProfile {
            skills: skills
                .iter()
                .map(|(name, level)| Skill::new(*name, *level, 1))
                .collect(),
            experience: ExperienceSummary {
                total_years: years,
                positions: Vec::new(),
            },
            education: if educated {
                vec![EducationEntry {
                    degree: "BA Design".to_string(),
                    context: "BA Design".to_string(),
                }]
            } else {
                Vec::new()
            },
            ..Default::default()
        }
    }

    fn user(skills: &[&str], years: u32) -> UserRecord {
        UserRecord {
            profile: UserProfile {
                experience: years,
                ..Default::default()
            },
            skills: skills
                .iter()
                .map(|name| Skill::new(*name, SkillLevel::Intermediate, 1))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cv_scheme_designer_scenario() {
        let profile = candidate(
            &[("UI/UX", SkillLevel::Advanced), ("Figma", SkillLevel::Advanced)],
            5,
            true,
        );
        let result = score_against_job(&profile, &designer_job(), ScoringScheme::Cv).unwrap();

        // 33.3 skills + 25 experience + 15 education + 2 breadth
        assert_eq!(result.percentage, 75);
        assert_eq!(result.skills_matched.len(), 2);
        assert_eq!(result.skills_missing.len(), 1);
        assert_eq!(result.skills_missing[0].name, "Design Systems");
        assert!(result.skills_missing[0].required);
        assert_eq!(
            result.reasons,
            vec![
                "Strong match: 2 out of 3 required skills".to_string(),
                "Experience level matches: 5 years meets senior requirement".to_string(),
                "Educational qualifications verified".to_string(),
            ]
        );
    }

    #[test]
    fn test_cv_scheme_partial_experience() {
        let profile = candidate(&[], 4, false);
        let job = job(ExperienceLevel::Lead, &[("Rust", SkillLevel::Expert, true)]);
        let result = score_against_job(&profile, &job, ScoringScheme::Cv).unwrap();

        // 0 skills + 4/8*25 + 15 + 0
        assert_eq!(result.percentage, 28);
        assert_eq!(
            result.reasons,
            vec!["Experience: 4 years (lead level typically requires 8+ years)".to_string()]
        );
    }

    #[test]
    fn test_entry_level_threshold_never_divides_by_zero() {
        let profile = candidate(&[], 0, false);
        let job = job(ExperienceLevel::Entry, &[]);
        let result = score_against_job(&profile, &job, ScoringScheme::Cv).unwrap();
        assert_eq!(result.percentage, 40);
    }

    #[test]
    fn test_breadth_is_capped() {
        let names = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];
        let skills: Vec<(&str, SkillLevel)> =
            names.iter().map(|n| (*n, SkillLevel::Beginner)).collect();
        let profile = candidate(&skills, 10, false);
        let empty_job = job(ExperienceLevel::Mid, &[]);
        let result = score_against_job(&profile, &empty_job, ScoringScheme::Cv).unwrap();

        assert_eq!(result.percentage, 50);
        assert!(result
            .reasons
            .contains(&"Diverse technical skillset: 12 skills identified".to_string()));
    }

    #[test]
    fn test_skill_matching_ignores_case() {
        let profile = candidate(&[("React", SkillLevel::Expert)], 0, false);
        let job = job(ExperienceLevel::Entry, &[("react", SkillLevel::Advanced, true)]);
        let result = score_against_job(&profile, &job, ScoringScheme::Cv).unwrap();

        assert_eq!(result.skills_matched.len(), 1);
        assert_eq!(result.skills_matched[0].your_level, SkillLevel::Expert);
        assert_eq!(result.skills_matched[0].required_level, SkillLevel::Advanced);
    }

    #[test]
    fn test_no_required_skills_contributes_nothing() {
        let job = job(ExperienceLevel::Mid, &[]);
        let overlap = SkillOverlap::compute(&[Skill::new("Go", SkillLevel::Expert, 3)], &job);
        assert_eq!(overlap.ratio(), 0.0);

        // 0 skills + 20 experience + 7.5 location + 7.5 job type + 5 salary
        let result = score_against_job(&user(&["Go"], 2), &job, ScoringScheme::Stored).unwrap();
        assert_eq!(result.percentage, 40);
    }

    #[test]
    fn test_stored_scheme_all_preferences_met() {
        let mut record = user(&["ui/ux", "FIGMA", "design systems"], 5);
        record.preferences.locations = vec!["berlin".to_string()];
        record.preferences.job_types = vec![JobType::FullTime];
        record.preferences.salary_range = Some(SalaryRange {
            min: Some(65000.0),
            max: None,
        });

        let result = score_against_job(&record, &designer_job(), ScoringScheme::Stored).unwrap();

        // bucket min(5/2, 4) = 2 = senior
        assert_eq!(result.percentage, 100);
        assert_eq!(result.skills_missing.len(), 0);
        assert_eq!(result.reasons.len(), 5);
    }

    #[test]
    fn test_stored_scheme_unmet_preferences() {
        let mut record = user(&["Figma"], 0);
        record.preferences.salary_range = Some(SalaryRange {
            min: Some(90000.0),
            max: None,
        });

        let result = score_against_job(&record, &designer_job(), ScoringScheme::Stored).unwrap();

        // 13.33 skills + 10 experience (distance 2) + 7.5 + 7.5 + 3 salary
        assert_eq!(result.percentage, 41);
    }

    #[test]
    fn test_remote_and_salary_fit_helpers() {
        let mut remote = designer_job();
        remote.location_type = LocationType::Remote;
        assert_eq!(LocationFit::assess(&remote, None), LocationFit::Remote);
        assert_eq!(LocationFit::assess(&designer_job(), None), LocationFit::Elsewhere);

        assert_eq!(SalaryFit::assess(&designer_job(), None), SalaryFit::NoPreference);
        let prefs = Preferences {
            salary_range: Some(SalaryRange { min: Some(70000.0), max: None }),
            ..Default::default()
        };
        assert_eq!(SalaryFit::assess(&designer_job(), Some(&prefs)), SalaryFit::Meets);
    }

    #[test]
    fn test_experience_distance_floors_at_zero() {
        let job = job(ExperienceLevel::Executive, &[]);
        let result = score_against_job(&user(&[], 0), &job, ScoringScheme::Stored).unwrap();
        // 0 + 0 + 7.5 + 7.5 + 5
        assert_eq!(result.percentage, 20);
    }

    #[test]
    fn test_scoring_is_idempotent_and_bounded() {
        let profile = candidate(&[("Figma", SkillLevel::Advanced)], 30, true);
        for scheme in [ScoringScheme::Cv, ScoringScheme::Stored] {
            let first = score_against_job(&profile, &designer_job(), scheme).unwrap();
            let second = score_against_job(&profile, &designer_job(), scheme).unwrap();
            assert_eq!(first, second);
            assert!(first.percentage <= 100);
        }
    }

    #[test]
    fn test_malformed_job_is_rejected() {
        let mut broken = designer_job();
        broken.required_skills[1].name.clear();
        let err = score_against_job(&user(&[], 1), &broken, ScoringScheme::Stored).unwrap_err();
        assert!(matches!(err, CvMatchError::InvalidInput(_)));
    }
}
