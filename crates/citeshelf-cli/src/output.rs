//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use citeshelf_domain::{Citation, RiskFactor, Statistics};
use citeshelf_present::{format_citation, get_source_label};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const TITLE_WIDTH: usize = 60;

/// A domain with its citation count and description.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DomainSummary<'a> {
    /// Domain code
    pub domain: &'a str,
    /// Citations in the domain
    pub count: usize,
    /// Description, if the dataset has one
    pub description: Option<&'a str>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a citation listing.
    pub fn format_citations(&self, citations: &[&Citation]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(citations)?),
            OutputFormat::Table => Ok(self.format_citations_table(citations)),
            OutputFormat::Quiet => Ok(citations.iter().map(|c| c.id.as_str()).collect::<Vec<_>>().join("\n")),
        }
    }

    fn format_citations_table(&self, citations: &[&Citation]) -> String {
        if citations.is_empty() {
            return self.colorize("No citations found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Year", "Domain", "Authors", "Title", "Effect"]);

        for citation in citations {
            let effect = citation
                .effect_size
                .map(|e| format!("{} {}", e, citation.effect_size_type.as_deref().unwrap_or_default()).trim_end().to_string())
                .unwrap_or_default();
            builder.push_record([
                citation.id.clone(),
                citation.year_label(),
                citation.domain.clone(),
                truncate(&citation.authors, TITLE_WIDTH / 2),
                truncate(&citation.title, TITLE_WIDTH),
                effect,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", table, self.info(&format!("{} citation(s)", citations.len())))
    }

    /// Format a single citation in full.
    pub fn format_citation_detail(&self, citation: &Citation) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(citation)?),
            OutputFormat::Quiet => Ok(citation.id.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["ID".to_string(), citation.id.clone()]);
                builder.push_record(["Citation".to_string(), format_citation(citation)]);
                builder.push_record(["Domain".to_string(), citation.domain.clone()]);
                builder.push_record(["Study type".to_string(), citation.study_type.clone()]);
                builder.push_record(["Keywords".to_string(), citation.keywords.join(", ")]);
                builder.push_record(["Synthesis".to_string(), citation.synthesis.clone()]);
                if let Some(url) = citation.url() {
                    builder.push_record([format!("Link ({})", get_source_label(citation)), url.to_string()]);
                }
                if let Some(effect) = citation.effect_size {
                    builder.push_record([
                        "Effect size".to_string(),
                        format!("{} {}", effect, citation.effect_size_type.as_deref().unwrap_or_default()),
                    ]);
                }
                if let Some(quality) = citation.evidence_quality {
                    builder.push_record(["Evidence quality".to_string(), quality.to_string()]);
                }

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format library statistics.
    pub fn format_statistics(&self, stats: &Statistics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Quiet => Ok(stats.total_citations.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record(["Total citations".to_string(), stats.total_citations.to_string()]);
                builder.push_record(["With effect sizes".to_string(), stats.with_effect_sizes.to_string()]);
                builder.push_record([
                    "Avg evidence quality".to_string(),
                    stats
                        .avg_evidence_quality
                        .map(|q| format!("{:.2}", q))
                        .unwrap_or_else(|| "no data".to_string()),
                ]);
                for d in &stats.by_domain {
                    builder.push_record([format!("Domain: {}", d.domain), d.count.to_string()]);
                }
                for t in &stats.by_study_type {
                    builder.push_record([format!("Study type: {}", t.study_type), t.count.to_string()]);
                }
                for y in &stats.by_year {
                    builder.push_record([format!("Year: {}", y.year), y.count.to_string()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format domains with counts and descriptions.
    pub fn format_domains(&self, domains: &[DomainSummary<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(domains)?),
            OutputFormat::Quiet => Ok(domains.iter().map(|d| d.domain).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if domains.is_empty() {
                    return Ok(self.colorize("No domains found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Domain", "Citations", "Description"]);
                for d in domains {
                    builder.push_record([
                        d.domain.to_string(),
                        d.count.to_string(),
                        d.description.unwrap_or("-").to_string(),
                    ]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format the distinct years.
    pub fn format_years(&self, years: &[i32]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(years)?),
            OutputFormat::Table | OutputFormat::Quiet => {
                Ok(years.iter().map(i32::to_string).collect::<Vec<_>>().join("\n"))
            }
        }
    }

    /// Format risk factors.
    pub fn format_risk_factors(&self, risk_factors: &[RiskFactor]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(risk_factors)?),
            OutputFormat::Quiet => Ok(risk_factors.iter().map(|rf| rf.name.as_str()).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if risk_factors.is_empty() {
                    return Ok(self.colorize("No risk factors found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Risk factor", "Magnitude", "Unit"]);
                for rf in risk_factors {
                    builder.push_record([rf.name.clone(), rf.magnitude.to_string(), rf.unit.clone()]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Shorten text to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_citation() -> Citation {
        let mut c = Citation::new("anderson2002", "Human aggression", "Anderson, C. A.", 2002);
        c.domain = "Theory".to_string();
        c.effect_size = Some(0.3);
        c.effect_size_type = Some("r".to_string());
        c
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let citation = create_test_citation();
        let output = formatter.format_citations(&[&citation]).unwrap();
        assert!(output.contains("\"id\": \"anderson2002\""));
        assert!(output.contains("\"effectSize\": 0.3"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let a = create_test_citation();
        let mut b = create_test_citation();
        b.id = "second".to_string();
        let output = formatter.format_citations(&[&a, &b]).unwrap();
        assert_eq!(output, "anderson2002\nsecond");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let citation = create_test_citation();
        let output = formatter.format_citations(&[&citation]).unwrap();
        assert!(output.contains("Authors"));
        assert!(output.contains("Human aggression"));
        assert!(output.contains("0.3 r"));
        assert!(output.contains("1 citation(s)"));
    }

    #[test]
    fn test_empty_citations() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_citations(&[]).unwrap();
        assert!(output.contains("No citations found"));
    }

    #[test]
    fn test_statistics_without_quality_shows_no_data() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let stats = Statistics {
            total_citations: 0,
            by_domain: vec![],
            by_year: vec![],
            with_effect_sizes: 0,
            by_study_type: vec![],
            avg_evidence_quality: None,
        };
        assert!(formatter.format_statistics(&stats).unwrap().contains("no data"));

        let json = Formatter::new(OutputFormat::Json, false).format_statistics(&stats).unwrap();
        assert!(json.contains("\"avgEvidenceQuality\": null"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("Über alles", 4), "Übe…");
    }
}
