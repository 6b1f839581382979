//! CLI command implementations.

pub mod demo;
pub mod report;

use crate::error::CliResult;
use bikelane_core::Report;

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text report layout.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parses a `--format` value. Anything other than `json` is text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Renders a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Text => Ok(report.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikelane_core::SegmentRegistry;

    #[test]
    fn parse_format() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(" JSON "), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("yaml"), OutputFormat::Text);
    }

    #[test]
    fn render_json() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("Tramo A", 2.5).unwrap();

        let out = render(&registry.report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["segments"][0]["status"], "in service");
        assert_eq!(value["total_length"], 2.5);
    }
}
