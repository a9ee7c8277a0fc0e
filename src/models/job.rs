//! Read-only view of a job posting

use crate::error::{CvMatchError, Result};
use crate::models::profile::SkillLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    /// Position on the entry..executive ladder
    pub fn ordinal(&self) -> u32 {
        match self {
            ExperienceLevel::Entry => 0,
            ExperienceLevel::Mid => 1,
            ExperienceLevel::Senior => 2,
            ExperienceLevel::Lead => 3,
            ExperienceLevel::Executive => 4,
        }
    }

    /// Years of experience usually expected at this level
    pub fn year_threshold(&self) -> u32 {
        match self {
            ExperienceLevel::Entry => 0,
            ExperienceLevel::Mid => 2,
            ExperienceLevel::Senior => 5,
            ExperienceLevel::Lead => 8,
            ExperienceLevel::Executive => 10,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
            ExperienceLevel::Executive => "executive",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Remote,
    Hybrid,
    Onsite,
}

impl Default for LocationType {
    fn default() -> Self {
        LocationType::Onsite
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
            JobType::Freelance => "freelance",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NiceToHaveSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub location_type: LocationType,
    pub job_type: JobType,
    pub salary: Salary,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<NiceToHaveSkill>,
}

impl JobPosting {
    pub fn is_remote(&self) -> bool {
        self.location_type == LocationType::Remote
    }

    /// Reject structurally broken postings before they reach scoring
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self
            .required_skills
            .iter()
            .position(|skill| skill.name.trim().is_empty())
        {
            return Err(CvMatchError::InvalidInput(format!(
                "Job '{}': required skill #{} has no name",
                self.display_name(),
                index + 1
            )));
        }

        if !self.salary.min.is_finite() || !self.salary.max.is_finite() {
            return Err(CvMatchError::InvalidInput(format!(
                "Job '{}': salary bounds must be finite numbers",
                self.display_name()
            )));
        }

        if self.salary.min > self.salary.max {
            return Err(CvMatchError::InvalidInput(format!(
                "Job '{}': salary min {} exceeds max {}",
                self.display_name(),
                self.salary.min,
                self.salary.max
            )));
        }

        Ok(())
    }

    pub fn display_name(&self) -> String {
        match (self.title.is_empty(), self.company.is_empty()) {
            (false, false) => format!("{} at {}", self.title, self.company),
            (false, true) => self.title.clone(),
            _ => self.id.clone().unwrap_or_else(|| "untitled".to_string()),
        }
    }
}
