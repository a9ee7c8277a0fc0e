//! Ranking of job postings by match score

use crate::error::Result;
use crate::matching::scoring::{MatchResult, MatchSubject, ScoringScheme};
use crate::models::JobPosting;
use serde::Serialize;

/// A job posting together with its score for one subject
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    #[serde(flatten)]
    pub job: JobPosting,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Score every job and sort by descending percentage. The sort is stable, so
/// equal scores keep their input order. Any malformed job aborts the ranking.
pub fn rank_jobs<S: MatchSubject + ?Sized>(
    subject: &S,
    jobs: &[JobPosting],
    scheme: ScoringScheme,
) -> Result<Vec<JobMatch>> {
    let mut ranked = jobs
        .iter()
        .map(|job| {
            Ok(JobMatch {
                result: scheme.score(subject, job)?,
                job: job.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ranked.sort_by(|a, b| b.result.percentage.cmp(&a.result.percentage));
    Ok(ranked)
}
