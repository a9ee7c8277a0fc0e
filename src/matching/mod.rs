//! Match scoring, ranking and skill gap analysis

pub mod gaps;
pub mod ranking;
pub mod scoring;

pub use gaps::{aggregate_skill_gaps, Importance, SkillGapEntry};
pub use ranking::{rank_jobs, JobMatch};
pub use scoring::{score_against_job, MatchResult, MatchSubject, ScoringScheme};
