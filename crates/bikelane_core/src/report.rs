//! Segment reports.
//!
//! A [`Report`] is a structured snapshot of the registry. Its `Display`
//! implementation renders the plain-text layout:
//!
//! ```text
//! BIKE LANE REPORT
//! ================
//! - Tramo A (2.5 km): closed for maintenance
//! - Tramo B (1.2 km): in service
//! Total length: 3.7 km
//! ```

use crate::config::RegistryConfig;
use crate::types::{Kilometers, Segment};
use serde::Serialize;
use std::fmt;

/// One segment entry in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    /// Segment name.
    pub name: String,
    /// Segment length.
    pub length: Kilometers,
    /// Segment status at the time the report was built.
    pub status: String,
}

/// Summary of every registered segment and the total lane length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Report title.
    pub title: String,
    /// Segments in insertion order.
    pub segments: Vec<ReportLine>,
    /// Sum of all segment lengths.
    pub total_length: Kilometers,
    #[serde(skip)]
    precision: Option<usize>,
}

impl Report {
    pub(crate) fn build<'a>(
        config: &RegistryConfig,
        segments: impl Iterator<Item = &'a Segment>,
    ) -> Self {
        let segments: Vec<ReportLine> = segments
            .map(|s| ReportLine {
                name: s.name.clone(),
                length: s.length,
                status: s.status.clone(),
            })
            .collect();
        let total_length = segments.iter().map(|line| line.length).sum();

        Self {
            title: config.report_title.clone(),
            segments,
            total_length,
            precision: config.length_precision,
        }
    }

    /// Returns true if the report lists no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn write_length(&self, f: &mut fmt::Formatter<'_>, km: Kilometers) -> fmt::Result {
        match self.precision {
            Some(precision) => write!(f, "{km:.precision$}"),
            None => write!(f, "{km}"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for line in &self.segments {
            write!(f, "- {} (", line.name)?;
            self.write_length(f, line.length)?;
            writeln!(f, " km): {}", line.status)?;
        }
        write!(f, "Total length: ")?;
        self.write_length(f, self.total_length)?;
        writeln!(f, " km")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(name: &str, km: f64, status: &str) -> Segment {
        Segment {
            name: name.to_string(),
            length: Kilometers::new(km),
            status: status.to_string(),
        }
    }

    #[test]
    fn empty_report() {
        let report = Report::build(&RegistryConfig::default(), std::iter::empty());
        assert!(report.is_empty());
        assert_eq!(
            report.to_string(),
            "BIKE LANE REPORT\n================\nTotal length: 0 km\n"
        );
    }

    #[test]
    fn renders_lines_in_order() {
        let segments = [
            segment("Tramo A", 2.5, "closed for maintenance"),
            segment("Tramo B", 1.2, "in service"),
        ];
        let report = Report::build(&RegistryConfig::default(), segments.iter());

        assert_eq!(
            report.to_string(),
            "BIKE LANE REPORT\n\
             ================\n\
             - Tramo A (2.5 km): closed for maintenance\n\
             - Tramo B (1.2 km): in service\n\
             Total length: 3.7 km\n"
        );
    }

    #[test]
    fn fixed_precision_and_custom_title() {
        let config = RegistryConfig::new()
            .report_title("Bahía de Cádiz")
            .length_precision(Some(2));
        let segments = [segment("Tramo A", 3.0, "in service")];
        let report = Report::build(&config, segments.iter());

        let text = report.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Bahía de Cádiz"));
        assert_eq!(lines.next(), Some("=============="));
        assert_eq!(lines.next(), Some("- Tramo A (3.00 km): in service"));
        assert_eq!(lines.next(), Some("Total length: 3.00 km"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn serializes_without_precision() {
        let segments = [segment("Tramo A", 2.5, "in service")];
        let report = Report::build(&RegistryConfig::default(), segments.iter());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["title"], "BIKE LANE REPORT");
        assert_eq!(value["total_length"], 2.5);
        assert_eq!(value["segments"][0]["name"], "Tramo A");
        assert!(value.get("precision").is_none());
    }
}
