//! The segment registry.

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::report::Report;
use crate::stats::RegistryStats;
use crate::types::{Kilometers, Segment};
use std::collections::HashMap;
use tracing::{debug, warn, Level};

/// In-memory registry of bike-lane segments.
///
/// Each name maps to a single record holding the segment's length and
/// status, so the two can never disagree about which segments exist.
/// Iteration follows insertion order; re-adding a name keeps its slot.
///
/// Mutation requires `&mut self`. Callers that share a registry across
/// threads must wrap it in their own lock.
#[derive(Debug, Default)]
pub struct SegmentRegistry {
    /// Records in insertion order. Never shrinks.
    segments: Vec<Segment>,
    /// Name to position in `segments`.
    index: HashMap<String, usize>,
    config: RegistryConfig,
    stats: RegistryStats,
}

impl SegmentRegistry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with a custom configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Registers a segment, or replaces the one with the same name.
    ///
    /// The segment's status is (re)set to the configured default status,
    /// `"in service"` unless overridden.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidArgument`] if `name` is empty or
    /// whitespace-only, if `length` is not a finite number greater than
    /// zero, or if the resulting total length would not be finite. The
    /// registry is unchanged in that case.
    pub fn add_segment(
        &mut self,
        name: impl Into<String>,
        length: impl Into<Kilometers>,
    ) -> RegistryResult<()> {
        let name = name.into();
        let length = length.into();

        if name.trim().is_empty() {
            return Err(self.reject(RegistryError::invalid_argument(
                "segment name must not be blank",
            )));
        }
        if !length.is_valid_length() {
            return Err(self.reject(RegistryError::invalid_argument(format!(
                "segment length must be greater than zero, got {length}"
            ))));
        }

        let existing = self.index.get(&name).copied();
        let total = self.total_with(existing, length);
        if !total.as_f64().is_finite() {
            return Err(self.reject(RegistryError::invalid_argument(format!(
                "adding {length} km to segment {name:?} would overflow the total length"
            ))));
        }

        let status = self.config.default_status.clone();
        let replaced = match existing {
            Some(pos) => {
                let segment = &mut self.segments[pos];
                segment.length = length;
                segment.status = status;
                true
            }
            None => {
                self.index.insert(name.clone(), self.segments.len());
                self.segments.push(Segment {
                    name: name.clone(),
                    length,
                    status,
                });
                false
            }
        };

        self.stats.record_add(replaced);
        debug!(segment = %name, %length, replaced, "segment added");
        Ok(())
    }

    /// Replaces the status of an existing segment.
    ///
    /// The new status is free-form text and is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no segment has this name.
    pub fn update_status(
        &mut self,
        name: &str,
        new_status: impl Into<String>,
    ) -> RegistryResult<()> {
        let Some(pos) = self.index.get(name).copied() else {
            return Err(self.reject(RegistryError::not_found(name)));
        };

        let new_status = new_status.into();
        debug!(
            segment = %name,
            from = %self.segments[pos].status,
            to = %new_status,
            "status updated"
        );
        self.segments[pos].status = new_status;
        self.stats.record_status_update();
        Ok(())
    }

    /// Alias for [`update_status`](Self::update_status).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no segment has this name.
    pub fn change_status(
        &mut self,
        name: &str,
        status: impl Into<String>,
    ) -> RegistryResult<()> {
        self.update_status(name, status)
    }

    /// Returns the current status of a segment.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no segment has this name.
    pub fn get_status(&self, name: &str) -> RegistryResult<&str> {
        match self.segment(name) {
            Some(segment) => {
                self.stats.record_status_lookup();
                Ok(segment.status())
            }
            None => Err(self.reject(RegistryError::not_found(name))),
        }
    }

    /// Returns the sum of all segment lengths, zero when empty.
    pub fn total_length(&self) -> Kilometers {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Returns a read-only view of segment lengths by name.
    pub fn list_segments(&self) -> LengthView<'_> {
        LengthView {
            segments: &self.segments,
            index: &self.index,
        }
    }

    /// Renders the plain-text report.
    pub fn generate_report(&self) -> String {
        self.report().to_string()
    }

    /// Builds a structured report of every segment.
    pub fn report(&self) -> Report {
        Report::build(&self.config, self.segments.iter())
    }

    /// Returns the segment registered under `name`.
    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.index.get(name).map(|&pos| &self.segments[pos])
    }

    /// Returns true if a segment is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over segments in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the number of registered segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if no segments are registered.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the operation counters.
    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    /// Total length after storing `length` at `slot`, or appending it.
    ///
    /// Sums in slot order so the result matches [`total_length`](Self::total_length).
    fn total_with(&self, slot: Option<usize>, length: Kilometers) -> Kilometers {
        let appended = slot.is_none().then_some(length);
        self.segments
            .iter()
            .enumerate()
            .map(|(pos, s)| if Some(pos) == slot { length } else { s.length })
            .chain(appended)
            .sum()
    }

    fn reject(&self, err: RegistryError) -> RegistryError {
        self.stats.record_rejected();
        if rejection_level(&err) == Level::WARN {
            warn!(error = %err, "registry operation rejected");
        } else {
            debug!(error = %err, "segment lookup missed");
        }
        err
    }
}

/// Misses on unknown names are routine for callers; bad input is not.
fn rejection_level(err: &RegistryError) -> Level {
    match err {
        RegistryError::NotFound { .. } => Level::DEBUG,
        RegistryError::InvalidArgument { .. } => Level::WARN,
    }
}

impl<'a> IntoIterator for &'a SegmentRegistry {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowed, read-only mapping of segment name to length.
///
/// Returned by [`SegmentRegistry::list_segments`]. Iterates in insertion
/// order.
#[derive(Debug, Clone, Copy)]
pub struct LengthView<'a> {
    segments: &'a [Segment],
    index: &'a HashMap<String, usize>,
}

impl<'a> LengthView<'a> {
    /// Returns the length of the named segment.
    pub fn get(&self, name: &str) -> Option<Kilometers> {
        self.index.get(name).map(|&pos| self.segments[pos].length)
    }

    /// Returns true if the named segment exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over `(name, length)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Kilometers)> + 'a {
        let segments = self.segments;
        segments.iter().map(|s| (s.name.as_str(), s.length))
    }

    /// Returns the segment names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + 'a {
        let segments = self.segments;
        segments.iter().map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sets_default_status() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("Tramo A", 2.5).unwrap();

        assert_eq!(registry.get_status("Tramo A").unwrap(), "in service");
        assert_eq!(
            registry.list_segments().get("Tramo A"),
            Some(Kilometers::new(2.5))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut registry = SegmentRegistry::new();

        for name in ["", "   ", "\t\n"] {
            let err = registry.add_segment(name, 1.0).unwrap_err();
            assert!(err.is_invalid_argument(), "{name:?} accepted");
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn add_rejects_non_positive_length() {
        let mut registry = SegmentRegistry::new();

        for km in [0.0, -0.0, -3.2, f64::NAN, f64::INFINITY] {
            let err = registry.add_segment("Tramo A", km).unwrap_err();
            assert!(err.is_invalid_argument(), "{km} accepted");
        }
        assert!(registry.is_empty());
        assert_eq!(registry.stats().rejected(), 5);
    }

    #[test]
    fn rejected_add_leaves_existing_segment_untouched() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("Tramo A", 2.5).unwrap();
        registry.update_status("Tramo A", "closed").unwrap();

        assert!(registry.add_segment("Tramo A", -1.0).is_err());

        assert_eq!(registry.get_status("Tramo A").unwrap(), "closed");
        assert_eq!(
            registry.list_segments().get("Tramo A"),
            Some(Kilometers::new(2.5))
        );
    }

    #[test]
    fn readd_resets_status_and_keeps_position() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("Tramo A", 2.5).unwrap();
        registry.add_segment("Tramo B", 1.2).unwrap();
        registry.update_status("Tramo A", "closed").unwrap();

        registry.add_segment("Tramo A", 4.0).unwrap();

        assert_eq!(registry.get_status("Tramo A").unwrap(), "in service");
        assert_eq!(
            registry.list_segments().get("Tramo A"),
            Some(Kilometers::new(4.0))
        );
        let names: Vec<_> = registry.list_segments().names().collect();
        assert_eq!(names, ["Tramo A", "Tramo B"]);
        assert_eq!(registry.stats().segments_added(), 2);
        assert_eq!(registry.stats().segments_replaced(), 1);
    }

    #[test]
    fn add_rejects_total_overflow() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("a", f64::MAX).unwrap();
        let before = registry.generate_report();

        let err = registry.add_segment("b", f64::MAX).unwrap_err();
        assert!(err.is_invalid_argument());

        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("b"));
        assert_eq!(registry.total_length().as_f64(), f64::MAX);
        assert_eq!(registry.generate_report(), before);
        assert_eq!(registry.stats().rejected(), 1);
    }

    #[test]
    fn readd_overflow_check_excludes_old_length() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("a", f64::MAX).unwrap();
        registry.add_segment("b", 1.0).unwrap();
        registry.update_status("a", "closed").unwrap();

        // Replacing "a" drops its old length from the total.
        registry.add_segment("a", f64::MAX / 2.0).unwrap();
        assert_eq!(
            registry.list_segments().get("a"),
            Some(Kilometers::new(f64::MAX / 2.0))
        );

        // Growing "b" past the limit is rejected and nothing changes.
        let err = registry.add_segment("b", f64::MAX).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(registry.list_segments().get("b"), Some(Kilometers::new(1.0)));
        assert!(registry.total_length().as_f64().is_finite());
    }

    #[test]
    fn lookup_misses_log_below_warn() {
        assert_eq!(rejection_level(&RegistryError::not_found("Tramo C")), Level::DEBUG);
        assert_eq!(
            rejection_level(&RegistryError::invalid_argument("blank")),
            Level::WARN
        );
    }

    #[test]
    fn update_unknown_segment_is_not_found() {
        let mut registry = SegmentRegistry::new();
        let err = registry.update_status("Tramo C", "closed").unwrap_err();
        assert_eq!(err, RegistryError::not_found("Tramo C"));
        assert!(registry.is_empty());
    }

    #[test]
    fn change_status_delegates() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("Tramo A", 2.5).unwrap();

        registry.change_status("Tramo A", "under repair").unwrap();
        assert_eq!(registry.get_status("Tramo A").unwrap(), "under repair");

        assert!(registry
            .change_status("missing", "x")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn status_is_free_form() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("Tramo A", 2.5).unwrap();

        registry.update_status("Tramo A", "").unwrap();
        assert_eq!(registry.get_status("Tramo A").unwrap(), "");
    }

    #[test]
    fn get_status_unknown_is_not_found() {
        let registry = SegmentRegistry::new();
        assert!(registry.get_status("Tramo C").unwrap_err().is_not_found());
        assert_eq!(registry.stats().rejected(), 1);
    }

    #[test]
    fn get_status_is_idempotent() {
        let mut registry = SegmentRegistry::new();
        registry.add_segment("Tramo A", 2.5).unwrap();

        let first = registry.get_status("Tramo A").unwrap().to_string();
        for _ in 0..3 {
            assert_eq!(registry.get_status("Tramo A").unwrap(), first);
        }
        assert_eq!(registry.stats().status_lookups(), 4);
    }

    #[test]
    fn total_length() {
        let mut registry = SegmentRegistry::new();
        assert_eq!(registry.total_length(), Kilometers::ZERO);

        registry.add_segment("Tramo A", 2.5).unwrap();
        registry.add_segment("Tramo B", 1.2).unwrap();
        assert_eq!(registry.total_length().as_f64(), 3.7);
    }

    #[test]
    fn list_segments_in_insertion_order() {
        let mut registry = SegmentRegistry::new();
        for (name, km) in [("Zeta", 1.0), ("Alfa", 2.0), ("Mu", 3.0)] {
            registry.add_segment(name, km).unwrap();
        }

        let view = registry.list_segments();
        let pairs: Vec<_> = view.iter().map(|(n, km)| (n, km.as_f64())).collect();
        assert_eq!(pairs, [("Zeta", 1.0), ("Alfa", 2.0), ("Mu", 3.0)]);
        assert_eq!(view.len(), 3);
        assert!(view.contains_key("Mu"));
        assert_eq!(view.get("Nope"), None);
    }

    #[test]
    fn custom_default_status() {
        let config = RegistryConfig::new().default_status("planned");
        let mut registry = SegmentRegistry::with_config(config);
        registry.add_segment("Tramo A", 2.5).unwrap();

        assert_eq!(registry.get_status("Tramo A").unwrap(), "planned");
    }

    #[test]
    fn empty_report_is_header_only() {
        let registry = SegmentRegistry::new();
        assert_eq!(
            registry.generate_report(),
            "BIKE LANE REPORT\n================\nTotal length: 0 km\n"
        );
    }
}
