//! Output formatters for console, Markdown and JSON

use crate::config::OutputFormat;
use crate::error::{CvMatchError, Result};
use crate::matching::{Importance, JobMatch, SkillGapEntry};
use crate::output::report::{CvAnalysisReport, RecommendationReport, SkillGapReport};
use colored::{Color, Colorize};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Trait for rendering analysis reports
pub trait OutputFormatter {
    fn format_cv_analysis(&self, report: &CvAnalysisReport) -> Result<String>;
    fn format_recommendations(&self, report: &RecommendationReport) -> Result<String>;
    fn format_skill_gaps(&self, report: &SkillGapReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

/// Picks the formatter for a configured output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn fmt_err(err: std::fmt::Error) -> CvMatchError {
    CvMatchError::OutputFormatting(err.to_string())
}

fn job_heading(job_match: &JobMatch) -> String {
    let job = &job_match.job;
    if job.company.is_empty() {
        job.title.clone()
    } else {
        format!("{} at {}", job.title, job.company)
    }
}

fn importance_label(importance: Importance) -> &'static str {
    match importance {
        Importance::High => "High",
        Importance::Medium => "Medium",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            75..=89 => ("STRONG", Color::BrightGreen),
            60..=74 => ("GOOD", Color::Yellow),
            40..=59 => ("FAIR", Color::BrightYellow),
            _ => ("WEAK", Color::Red),
        };
        format!("[{}]", self.colorize(badge, color))
    }

    fn write_matches(&self, out: &mut String, matches: &[JobMatch]) -> std::fmt::Result {
        if matches.is_empty() {
            writeln!(out, "  No jobs to match against.")?;
            return Ok(());
        }

        for (i, job_match) in matches.iter().enumerate() {
            writeln!(
                out,
                "{:>2}. {} {}% {}",
                i + 1,
                job_heading(job_match),
                job_match.result.percentage,
                self.format_score_badge(job_match.result.percentage)
            )?;
            for reason in &job_match.result.reasons {
                writeln!(out, "      • {}", self.colorize(reason, Color::Cyan))?;
            }
            if !job_match.result.skills_missing.is_empty() {
                let missing: Vec<&str> = job_match
                    .result
                    .skills_missing
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect();
                writeln!(
                    out,
                    "      missing: {}",
                    self.colorize(&missing.join(", "), Color::Yellow)
                )?;
            }
        }
        Ok(())
    }

    fn write_gaps(&self, out: &mut String, gaps: &[SkillGapEntry]) -> std::fmt::Result {
        if gaps.is_empty() {
            writeln!(out, "  No skill gaps found.")?;
            return Ok(());
        }

        for gap in gaps {
            let importance = match gap.importance {
                Importance::High => self.colorize("High", Color::Red),
                Importance::Medium => self.colorize("Medium", Color::Yellow),
            };
            writeln!(
                out,
                "  • {} ({}, {} level) appears in {} job(s)",
                gap.skill, importance, gap.recommended_level, gap.appears_in
            )?;
        }
        Ok(())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_cv_analysis(&self, report: &CvAnalysisReport) -> Result<String> {
        let mut out = String::new();
        let profile = &report.extracted_data;

        out.push_str(&self.format_header("CV ANALYSIS", 1));
        writeln!(out, "Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))
            .map_err(fmt_err)?;
        writeln!(out, "{}", self.colorize(&profile.summary, Color::Cyan)).map_err(fmt_err)?;

        out.push_str(&self.format_header("Statistics", 2));
        let stats = &report.statistics;
        writeln!(out, "  Skills found: {}", stats.total_skills_found).map_err(fmt_err)?;
        writeln!(out, "  Years of experience: {}", stats.years_of_experience).map_err(fmt_err)?;
        writeln!(
            out,
            "  Average match score: {}% {}",
            stats.average_match_score,
            self.format_score_badge(stats.average_match_score)
        )
        .map_err(fmt_err)?;

        if profile.is_empty() {
            writeln!(out, "  No data could be extracted from this document.").map_err(fmt_err)?;
        }

        out.push_str(&self.format_header("Skills", 2));
        for skill in &profile.skills {
            writeln!(
                out,
                "  • {} ({}, {} yr)",
                skill.name, skill.level, skill.years_of_experience
            )
            .map_err(fmt_err)?;
        }

        if !profile.experience.positions.is_empty() {
            out.push_str(&self.format_header("Positions", 3));
            for position in &profile.experience.positions {
                writeln!(out, "  • {}", position.title).map_err(fmt_err)?;
            }
        }

        if !profile.education.is_empty() {
            out.push_str(&self.format_header("Education", 3));
            for entry in &profile.education {
                writeln!(out, "  • {}", entry.degree).map_err(fmt_err)?;
            }
        }

        let contact = &profile.contact;
        let fields = [
            ("Email", &contact.email),
            ("Phone", &contact.phone),
            ("LinkedIn", &contact.linkedin),
            ("GitHub", &contact.github),
        ];
        if fields.iter().any(|(_, v)| v.is_some()) {
            out.push_str(&self.format_header("Contact", 3));
            for (label, value) in fields {
                if let Some(value) = value {
                    writeln!(out, "  {}: {}", label, value).map_err(fmt_err)?;
                }
            }
        }

        out.push_str(&self.format_header("Top Matches", 2));
        self.write_matches(&mut out, &report.matched_jobs).map_err(fmt_err)?;

        out.push_str(&self.format_header("Skill Gaps", 2));
        self.write_gaps(&mut out, &report.skill_gaps).map_err(fmt_err)?;

        Ok(out)
    }

    fn format_recommendations(&self, report: &RecommendationReport) -> Result<String> {
        let mut out = self.format_header(&format!("RECOMMENDED JOBS ({})", report.count), 1);
        self.write_matches(&mut out, &report.recommendations).map_err(fmt_err)?;
        Ok(out)
    }

    fn format_skill_gaps(&self, report: &SkillGapReport) -> Result<String> {
        let mut out = self.format_header("SKILL GAP ANALYSIS", 1);
        writeln!(out, "Jobs above the match threshold: {}", report.jobs_considered)
            .map_err(fmt_err)?;
        self.write_gaps(&mut out, &report.skill_gaps).map_err(fmt_err)?;

        out.push_str(&self.format_header("Your Skills", 2));
        for skill in &report.user_skills {
            writeln!(out, "  • {} ({})", skill.name, skill.level).map_err(fmt_err)?;
        }
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_cv_analysis(&self, report: &CvAnalysisReport) -> Result<String> {
        self.render(report)
    }

    fn format_recommendations(&self, report: &RecommendationReport) -> Result<String> {
        self.render(report)
    }

    fn format_skill_gaps(&self, report: &SkillGapReport) -> Result<String> {
        self.render(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    fn write_matches(out: &mut String, matches: &[JobMatch]) -> std::fmt::Result {
        writeln!(out, "| # | Job | Match | Missing skills |")?;
        writeln!(out, "|---|-----|-------|----------------|")?;
        for (i, job_match) in matches.iter().enumerate() {
            let missing: Vec<&str> = job_match
                .result
                .skills_missing
                .iter()
                .map(|s| s.name.as_str())
                .collect();
            writeln!(
                out,
                "| {} | {} | {}% | {} |",
                i + 1,
                job_heading(job_match),
                job_match.result.percentage,
                missing.join(", ")
            )?;
        }
        Ok(())
    }

    fn write_gaps(out: &mut String, gaps: &[SkillGapEntry]) -> std::fmt::Result {
        writeln!(out, "| Skill | Importance | Appears in | Level |")?;
        writeln!(out, "|-------|------------|------------|-------|")?;
        for gap in gaps {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                gap.skill,
                importance_label(gap.importance),
                gap.appears_in,
                gap.recommended_level
            )?;
        }
        Ok(())
    }

    fn cv_analysis(report: &CvAnalysisReport) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();
        let profile = &report.extracted_data;

        writeln!(out, "# CV Analysis\n")?;
        writeln!(out, "_Generated {}_\n", report.generated_at.format("%Y-%m-%d %H:%M UTC"))?;
        writeln!(out, "{}\n", profile.summary)?;

        writeln!(out, "## Statistics\n")?;
        writeln!(out, "- **Skills found:** {}", report.statistics.total_skills_found)?;
        writeln!(out, "- **Years of experience:** {}", report.statistics.years_of_experience)?;
        writeln!(out, "- **Average match score:** {}%\n", report.statistics.average_match_score)?;

        writeln!(out, "## Skills\n")?;
        for skill in &profile.skills {
            writeln!(out, "- {} ({}, {} yr)", skill.name, skill.level, skill.years_of_experience)?;
        }

        writeln!(out, "\n## Top Matches\n")?;
        Self::write_matches(&mut out, &report.matched_jobs)?;

        writeln!(out, "\n## Skill Gaps\n")?;
        Self::write_gaps(&mut out, &report.skill_gaps)?;
        Ok(out)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_cv_analysis(&self, report: &CvAnalysisReport) -> Result<String> {
        Self::cv_analysis(report).map_err(fmt_err)
    }

    fn format_recommendations(&self, report: &RecommendationReport) -> Result<String> {
        let mut out = format!("# Recommended Jobs ({})\n\n", report.count);
        Self::write_matches(&mut out, &report.recommendations).map_err(fmt_err)?;
        Ok(out)
    }

    fn format_skill_gaps(&self, report: &SkillGapReport) -> Result<String> {
        let mut out = format!(
            "# Skill Gap Analysis\n\nBased on {} well-matched job(s).\n\n",
            report.jobs_considered
        );
        Self::write_gaps(&mut out, &report.skill_gaps).map_err(fmt_err)?;
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
