//! Skill gap aggregation across matched jobs

use crate::models::{JobPosting, Skill};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapEntry {
    pub skill: String,
    pub importance: Importance,
    pub appears_in: u32,
    pub recommended_level: String,
}

/// Upper-case the first character, leave the rest untouched
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Required skills of `jobs` that the candidate lacks, most frequent first.
///
/// Entries are keyed by lower-cased name. The last seen level wins, while
/// `High` importance sticks once any contributing job marks the skill as
/// required. Ties keep first-seen order.
pub fn aggregate_skill_gaps<'a, I>(
    candidate_skills: &[Skill],
    jobs: I,
    top_n: usize,
) -> Vec<SkillGapEntry>
where
    I: IntoIterator<Item = &'a JobPosting>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut gaps: Vec<SkillGapEntry> = Vec::new();

    for job in jobs {
        for required in &job.required_skills {
            if candidate_skills.iter().any(|s| s.matches_name(&required.name)) {
                continue;
            }

            let key = required.name.to_lowercase();
            let importance = if required.required {
                Importance::High
            } else {
                Importance::Medium
            };

            match index.get(&key) {
                Some(&slot) => {
                    let entry = &mut gaps[slot];
                    entry.appears_in += 1;
                    entry.recommended_level = required.level.to_string();
                    if importance == Importance::High {
                        entry.importance = Importance::High;
                    }
                }
                None => {
                    gaps.push(SkillGapEntry {
                        skill: capitalize(&key),
                        importance,
                        appears_in: 1,
                        recommended_level: required.level.to_string(),
                    });
                    index.insert(key, gaps.len() - 1);
                }
            }
        }
    }

    gaps.sort_by(|a, b| b.appears_in.cmp(&a.appears_in));
    gaps.truncate(top_n);
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ExperienceLevel, JobType, LocationType, RequiredSkill, Salary, SkillLevel,
    };

    fn job(skills: &[(&str, SkillLevel, bool)]) -> JobPosting {
        JobPosting {
            id: None,
            title: "Engineer".to_string(),
            company: String::new(),
            location: "Remote".to_string(),
            location_type: LocationType::Remote,
            job_type: JobType::Contract,
            salary: Salary {
                min: 1.0,
                max: 2.0,
                currency: "USD".to_string(),
            },
            experience_level: ExperienceLevel::Mid,
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

    #[test]
    fn test_same_gap_across_jobs() {
        let jobs: Vec<JobPosting> = (0..3)
            .map(|_| job(&[("Docker", SkillLevel::Intermediate, true)]))
            .collect();
        let gaps = aggregate_skill_gaps(&[], &jobs, 8);

        assert_eq!(
            gaps,
            vec![SkillGapEntry {
                skill: "Docker".to_string(),
                importance: Importance::High,
                appears_in: 3,
                recommended_level: "intermediate".to_string(),
            }]
        );
    }

    #[test]
    fn test_held_skills_are_not_gaps() {
        let jobs = vec![job(&[
            ("docker", SkillLevel::Advanced, true),
            ("AWS", SkillLevel::Beginner, false),
        ])];
        let held = vec![Skill::new("Docker", SkillLevel::Beginner, 1)];
        let gaps = aggregate_skill_gaps(&held, &jobs, 8);

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].skill, "Aws");
        assert_eq!(gaps[0].importance, Importance::Medium);
    }

    #[test]
    fn test_high_importance_is_sticky_and_last_level_wins() {
        let jobs = vec![
            job(&[("Kubernetes", SkillLevel::Beginner, false)]),
            job(&[("kubernetes", SkillLevel::Advanced, true)]),
            job(&[("KUBERNETES", SkillLevel::Expert, false)]),
        ];
        let gaps = aggregate_skill_gaps(&[], &jobs, 8);

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].skill, "Kubernetes");
        assert_eq!(gaps[0].importance, Importance::High);
        assert_eq!(gaps[0].appears_in, 3);
        assert_eq!(gaps[0].recommended_level, "expert");
    }

    #[test]
    fn test_ranked_by_frequency_with_stable_ties_and_truncated() {
        let mid = SkillLevel::Intermediate;
        let jobs = vec![
            job(&[("Go", mid, true), ("Redis", mid, true)]),
            job(&[("Redis", mid, true), ("Kafka", mid, true)]),
            job(&[("Terraform", mid, false)]),
        ];
        let gaps = aggregate_skill_gaps(&[], &jobs, 3);
        let names: Vec<&str> = gaps.iter().map(|g| g.skill.as_str()).collect();

        assert_eq!(names, vec!["Redis", "Go", "Kafka"]);
    }

    #[test]
    fn test_serialized_shape() {
        let jobs = vec![job(&[("Figma", SkillLevel::Advanced, true)])];
        let json = serde_json::to_value(aggregate_skill_gaps(&[], &jobs, 1)).unwrap();
        assert_eq!(json[0]["appearsIn"], 1);
        assert_eq!(json[0]["importance"], "High");
        assert_eq!(json[0]["recommendedLevel"], "advanced");
    }
}
