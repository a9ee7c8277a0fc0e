//! Skill detection with proficiency and years-of-experience heuristics

use crate::error::Result;
use crate::extraction::dictionary::{KeywordSets, SkillDictionary};
use crate::models::{Skill, SkillLevel};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;

/// Outcome of scanning a context window for proficiency keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelInference {
    Found(SkillLevel),
    Default,
}

impl LevelInference {
    pub fn level(self) -> SkillLevel {
        match self {
            LevelInference::Found(level) => level,
            LevelInference::Default => SkillLevel::Intermediate,
        }
    }
}

/// Classifies a lower-cased context window by keyword priority:
/// expert, then intermediate, then beginner.
pub struct LevelClassifier {
    tiers: Vec<(SkillLevel, AhoCorasick)>,
}

impl LevelClassifier {
    pub fn new(keywords: &KeywordSets) -> Result<Self> {
        let tiers = vec![
            (SkillLevel::Expert, AhoCorasick::new(&keywords.expert)?),
            (SkillLevel::Intermediate, AhoCorasick::new(&keywords.intermediate)?),
            (SkillLevel::Beginner, AhoCorasick::new(&keywords.beginner)?),
        ];
        Ok(Self { tiers })
    }

    pub fn classify(&self, window: &str) -> LevelInference {
        self.tiers
            .iter()
            .find(|(_, matcher)| matcher.is_match(window))
            .map(|(level, _)| LevelInference::Found(*level))
            .unwrap_or(LevelInference::Default)
    }
}

struct SkillPattern {
    name: String,
    lower: String,
    presence: Regex,
    years_before: Regex,
    years_after: Regex,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl SkillPattern {
    fn compile(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        let escaped = regex::escape(&lower);

        // `\b` only makes sense next to a word character; "C++" or "C#"
        // would otherwise never match at the end of a token.
        let lead = if name.chars().next().map_or(false, is_word_char) { r"\b" } else { "" };
        let tail = if name.chars().last().map_or(false, is_word_char) { r"\b" } else { "" };

        Ok(Self {
            name: name.to_string(),
            presence: Regex::new(&format!("(?i){}{}{}", lead, escaped, tail))?,
            years_before: Regex::new(&format!(r"(?i)([0-9]+)\+?\s*years?.*{}", escaped))?,
            // First "N years" after the skill on the same line, whole number kept
            years_after: Regex::new(&format!(r"(?i){}.*?([0-9]+)\+?\s*years?", escaped))?,
            lower,
        })
    }
}

/// Take `radius` characters on each side of `byte_idx`
pub fn context_window(text: &str, byte_idx: usize, radius: usize) -> &str {
    let start = text[..byte_idx]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(byte_idx);
    let end = text[byte_idx..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| byte_idx + i)
        .unwrap_or(text.len());
    &text[start..end]
}

pub struct SkillExtractor {
    patterns: Vec<SkillPattern>,
    classifier: LevelClassifier,
    context_window: usize,
    default_years: u32,
}

impl SkillExtractor {
    pub fn new(dictionary: &SkillDictionary, keywords: &KeywordSets) -> Result<Self> {
        let patterns = dictionary
            .iter()
            .map(SkillPattern::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            classifier: LevelClassifier::new(keywords)?,
            context_window: 100,
            default_years: 1,
        })
    }

    pub fn with_context_window(mut self, radius: usize) -> Self {
        self.context_window = radius;
        self
    }

    pub fn with_default_years(mut self, years: u32) -> Self {
        self.default_years = years;
        self
    }

    /// One skill per dictionary entry mentioned in `text`, in dictionary order
    pub fn extract(&self, text: &str) -> Vec<Skill> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lower_text = text.to_lowercase();

        let skills: Vec<Skill> = self
            .patterns
            .iter()
            .filter(|pattern| pattern.presence.is_match(text))
            .map(|pattern| Skill {
                name: pattern.name.clone(),
                level: self.infer_level(&lower_text, &pattern.lower).level(),
                years_of_experience: self.estimate_years(text, pattern),
            })
            .collect();

        debug!("Detected {} skills", skills.len());
        skills
    }

    /// Classify the window around the first occurrence of `skill_lower`
    pub fn infer_level(&self, lower_text: &str, skill_lower: &str) -> LevelInference {
        match lower_text.find(skill_lower) {
            Some(idx) => self
                .classifier
                .classify(context_window(lower_text, idx, self.context_window)),
            None => LevelInference::Default,
        }
    }

    fn estimate_years(&self, text: &str, pattern: &SkillPattern) -> u32 {
        [&pattern.years_before, &pattern.years_after]
            .iter()
            .find_map(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(self.default_years)
    }
}
