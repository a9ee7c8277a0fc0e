//! Experience and education extraction from date ranges and keyword lines

use crate::error::Result;
use crate::extraction::dictionary::KeywordSets;
use crate::models::{EducationEntry, ExperienceSummary, Position};
use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use chrono::Datelike;
use log::debug;
use regex::Regex;

pub struct ExperienceExtractor {
    date_range: Regex,
    title_matcher: AhoCorasick,
    degree_matcher: AhoCorasick,
    max_positions: usize,
    reference_year: Option<i32>,
}

fn case_insensitive(words: &[String]) -> Result<AhoCorasick> {
    Ok(AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(words)?)
}

impl ExperienceExtractor {
    pub fn new(keywords: &KeywordSets) -> Result<Self> {
        let date_range = Regex::new(r"(?i)([0-9]{4})\s*[-–—]\s*([0-9]{4}|present|current)")?;

        Ok(Self {
            date_range,
            title_matcher: case_insensitive(&keywords.titles)?,
            degree_matcher: case_insensitive(&keywords.degrees)?,
            max_positions: 5,
            reference_year: None,
        })
    }

    pub fn with_max_positions(mut self, max_positions: usize) -> Self {
        self.max_positions = max_positions;
        self
    }

    /// Pin the year used for open-ended ranges ("2021 - Present")
    pub fn with_reference_year(mut self, year: Option<i32>) -> Self {
        self.reference_year = year;
        self
    }

    fn current_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    pub fn extract_experience(&self, text: &str) -> ExperienceSummary {
        ExperienceSummary {
            total_years: self.total_years(text),
            positions: self.positions(text),
        }
    }

    /// Sum of every date range found. Overlapping ranges are counted twice.
    pub fn total_years(&self, text: &str) -> u32 {
        let current_year = self.current_year() as i64;

        let total: i64 = self
            .date_range
            .captures_iter(text)
            .filter_map(|caps| {
                let start: i64 = caps.get(1)?.as_str().parse().ok()?;
                let end_token = caps.get(2)?.as_str();
                let end = if end_token.eq_ignore_ascii_case("present")
                    || end_token.eq_ignore_ascii_case("current")
                {
                    current_year
                } else {
                    end_token.parse().ok()?
                };
                Some(end - start)
            })
            .sum();

        debug!("Date ranges add up to {} years", total);
        total.max(0).min(u32::MAX as i64) as u32
    }

    /// Lines mentioning a job title, with the two lines that follow
    pub fn positions(&self, text: &str) -> Vec<Position> {
        let lines: Vec<&str> = text.lines().collect();

        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.title_matcher.is_match(*line))
            .take(self.max_positions)
            .map(|(index, line)| Position {
                title: line.trim().to_string(),
                context: join_lines(&lines, index, 3),
            })
            .collect()
    }

    /// Lines mentioning a degree, with the line that follows
    pub fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        let lines: Vec<&str> = text.lines().collect();

        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.degree_matcher.is_match(*line))
            .map(|(index, line)| EducationEntry {
                degree: line.trim().to_string(),
                context: join_lines(&lines, index, 2),
            })
            .collect()
    }
}

fn join_lines(lines: &[&str], start: usize, count: usize) -> String {
    let end = (start + count).min(lines.len());
    lines[start..end].join(" ")
}
