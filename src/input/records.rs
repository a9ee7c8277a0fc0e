//! Loading job postings and stored user profiles from JSON

use crate::error::{CvMatchError, Result};
use crate::models::{JobPosting, UserRecord};
use anyhow::Context;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// A jobs file is either a bare array or an object with a `jobs` array
#[derive(Deserialize)]
#[serde(untagged)]
enum JobsFile {
    List(Vec<JobPosting>),
    Wrapped { jobs: Vec<JobPosting> },
}

async fn read_json(path: &Path, what: &str) -> Result<String> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {} file {}", what, path.display()))?;
    Ok(content)
}

pub fn parse_jobs(content: &str) -> Result<Vec<JobPosting>> {
    let jobs = match serde_json::from_str::<JobsFile>(content) {
        Ok(JobsFile::List(jobs)) | Ok(JobsFile::Wrapped { jobs }) => jobs,
        Err(e) => {
            return Err(CvMatchError::InvalidInput(format!(
                "Job postings are not valid JSON: {}",
                e
            )))
        }
    };

    for job in &jobs {
        job.validate()?;
    }
    Ok(jobs)
}

pub async fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    let content = read_json(path, "jobs").await?;
    let jobs = parse_jobs(&content)?;
    info!("Loaded {} job postings from {}", jobs.len(), path.display());
    Ok(jobs)
}

pub async fn load_user(path: &Path) -> Result<UserRecord> {
    let content = read_json(path, "user").await?;
    let user: UserRecord = serde_json::from_str(&content)
        .with_context(|| format!("Invalid user profile in {}", path.display()))?;
    debug!("Loaded user profile with {} skills", user.skills.len());
    Ok(user)
}
