//! Registry configuration.

/// Status assigned to a segment when it is added.
pub const DEFAULT_STATUS: &str = "in service";

/// First line of a rendered report.
pub const DEFAULT_REPORT_TITLE: &str = "BIKE LANE REPORT";

/// Configuration for a [`SegmentRegistry`](crate::SegmentRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Status given to newly added (or re-added) segments.
    pub default_status: String,

    /// Title line of the plain-text report.
    pub report_title: String,

    /// Fixed number of decimals for lengths in reports.
    ///
    /// `None` prints the shortest decimal form that round-trips.
    pub length_precision: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_status: DEFAULT_STATUS.to_string(),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
            length_precision: None,
        }
    }
}

impl RegistryConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status assigned on add.
    #[must_use]
    pub fn default_status(mut self, status: impl Into<String>) -> Self {
        self.default_status = status.into();
        self
    }

    /// Sets the report title.
    #[must_use]
    pub fn report_title(mut self, title: impl Into<String>) -> Self {
        self.report_title = title.into();
        self
    }

    /// Sets a fixed number of decimals for report lengths.
    #[must_use]
    pub const fn length_precision(mut self, precision: Option<usize>) -> Self {
        self.length_precision = precision;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.default_status, "in service");
        assert_eq!(config.report_title, "BIKE LANE REPORT");
        assert_eq!(config.length_precision, None);
    }

    #[test]
    fn builder_pattern() {
        let config = RegistryConfig::new()
            .default_status("open")
            .report_title("Bahía de Cádiz")
            .length_precision(Some(2));

        assert_eq!(config.default_status, "open");
        assert_eq!(config.report_title, "Bahía de Cádiz");
        assert_eq!(config.length_precision, Some(2));
    }
}
