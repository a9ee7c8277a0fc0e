//! Read-only view of a stored user record

use crate::models::job::JobType;
use crate::models::profile::Skill;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Total years of professional experience
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub job_types: Vec<JobType>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
}

impl Preferences {
    /// Minimum acceptable salary, if the user stated a non-zero one
    pub fn minimum_salary(&self) -> Option<f64> {
        self.salary_range
            .as_ref()
            .and_then(|range| range.min)
            .filter(|min| *min > 0.0)
    }

    pub fn prefers_location(&self, location: &str) -> bool {
        let wanted = location.trim().to_lowercase();
        self.locations
            .iter()
            .any(|l| l.trim().to_lowercase() == wanted)
    }

    pub fn prefers_job_type(&self, job_type: JobType) -> bool {
        self.job_types.contains(&job_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub preferences: Preferences,
}

fn is_filled(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |s| !s.trim().is_empty())
}

impl UserRecord {
    /// Completeness score in [0, 100] for the stored profile
    pub fn profile_strength(&self) -> u8 {
        let mut strength: u32 = 0;

        if is_filled(&self.profile.title) {
            strength += 10;
        }
        if is_filled(&self.profile.location) {
            strength += 10;
        }
        if is_filled(&self.profile.bio) {
            strength += 15;
        }
        if is_filled(&self.profile.resume) {
            strength += 20;
        }
        if !self.skills.is_empty() {
            strength += 20;
        }
        if self.skills.len() >= 5 {
            strength += 10;
        }
        if self.profile.experience > 0 {
            strength += 10;
        }
        if !self.preferences.job_types.is_empty() {
            strength += 5;
        }

        strength.min(100) as u8
    }
}
