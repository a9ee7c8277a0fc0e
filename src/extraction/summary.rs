//! Templated profile narrative

use crate::models::{ExperienceSummary, Skill};

const HIGHLIGHTED_SKILLS: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileSummarizer;

impl ProfileSummarizer {
    pub fn summarize(&self, skills: &[Skill], experience: &ExperienceSummary) -> String {
        let years = experience.total_years;
        let mut summary = if years > 5 {
            format!("Experienced professional with {}+ years in the industry. ", years)
        } else if years > 2 {
            format!("Mid-level professional with {} years of experience. ", years)
        } else {
            "Entry-level professional. ".to_string()
        };

        let count = skills.len();
        if count > 10 {
            summary.push_str(&format!(
                "Highly skilled with expertise in {}+ technologies. ",
                count
            ));
        } else if count > 5 {
            summary.push_str(&format!("Skilled in {} key technologies. ", count));
        }

        if !skills.is_empty() {
            let top: Vec<&str> = skills
                .iter()
                .take(HIGHLIGHTED_SKILLS)
                .map(|s| s.name.as_str())
                .collect();
            summary.push_str(&format!("Strong background in {}.", top.join(", ")));
        }

        summary.trim_end().to_string()
    }
}
