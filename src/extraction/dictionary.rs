//! Skill vocabulary and keyword sets used by the extractors
//!
//! Both are plain immutable values built once and handed to the extractors
//! at construction time.

use std::collections::HashSet;

#[rustfmt::skip]
const DEFAULT_SKILLS: &[&str] = &[
    // Programming languages
    "JavaScript", "Python", "Java", "C++", "C#", "Ruby", "PHP", "Swift", "Kotlin", "Go", "Rust",
    "TypeScript", "Scala", "R",
    // Frontend
    "React", "Vue", "Angular", "HTML", "CSS", "Tailwind", "Bootstrap", "SASS", "jQuery",
    "Next.js", "Gatsby", "Svelte",
    // Backend
    "Node.js", "Express", "Django", "Flask", "Spring", "Laravel", "Ruby on Rails", "ASP.NET",
    "FastAPI",
    // Databases
    "MongoDB", "MySQL", "PostgreSQL", "Redis", "Cassandra", "Oracle", "SQL Server", "SQLite",
    "Firebase",
    // DevOps and cloud
    "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins", "CI/CD", "Git", "GitHub",
    "GitLab",
    // Design
    "Figma", "Sketch", "Adobe XD", "Photoshop", "Illustrator", "UI/UX", "Wireframing",
    "Prototyping",
    // Data and AI
    "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Data Analysis", "Pandas",
    "NumPy", "Scikit-learn",
    // Mobile
    "React Native", "Flutter", "iOS", "Android", "Xamarin",
    // Other
    "GraphQL", "REST API", "Microservices", "Agile", "Scrum", "Testing", "Jest", "Selenium",
    "Blockchain",
];

const EXPERT_KEYWORDS: &[&str] = &[
    "expert",
    "advanced",
    "senior",
    "lead",
    "architect",
    "proficient",
];
const INTERMEDIATE_KEYWORDS: &[&str] = &["intermediate", "solid", "working knowledge", "familiar"];
const BEGINNER_KEYWORDS: &[&str] = &["beginner", "basic", "learning", "exposure"];

#[rustfmt::skip]
const TITLE_KEYWORDS: &[&str] = &[
    "developer", "engineer", "designer", "manager", "analyst", "specialist", "consultant",
    "architect", "lead", "senior", "junior",
];

#[rustfmt::skip]
const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "mba", "b.sc", "m.sc", "b.tech", "m.tech", "b.e",
    "m.e", "diploma", "associate", "certification",
];

/// Ordered catalog of canonical skill names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDictionary {
    skills: Vec<String>,
}

impl SkillDictionary {
    /// Build a dictionary, dropping case-insensitive duplicates and blanks
    /// while keeping first-seen order.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(Into::into)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
            .collect();

        Self { skills }
    }

    /// Default dictionary followed by caller-supplied additions
    pub fn with_additional_skills(additional: &[String]) -> Self {
        Self::new(
            DEFAULT_SKILLS
                .iter()
                .map(|s| s.to_string())
                .chain(additional.iter().cloned()),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == needle)
    }
}

impl Default for SkillDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

/// Keyword lists driving level inference and line classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSets {
    pub expert: Vec<String>,
    pub intermediate: Vec<String>,
    pub beginner: Vec<String>,
    pub titles: Vec<String>,
    pub degrees: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            expert: owned(EXPERT_KEYWORDS),
            intermediate: owned(INTERMEDIATE_KEYWORDS),
            beginner: owned(BEGINNER_KEYWORDS),
            titles: owned(TITLE_KEYWORDS),
            degrees: owned(DEGREE_KEYWORDS),
        }
    }
}
