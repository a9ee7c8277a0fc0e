//! Data model shared by extraction and matching

pub mod job;
pub mod profile;
pub mod user;

pub use job::{ExperienceLevel, JobPosting, JobType, LocationType, RequiredSkill, Salary};
pub use profile::{
    CandidateProfile, ContactInfo, EducationEntry, ExperienceSummary, Position, Skill, SkillLevel,
};
pub use user::{Preferences, SalaryRange, UserProfile, UserRecord};
