//! Registry fixtures.
//!
//! Provides ready-made registries for common test scenarios.

use bikelane_core::SegmentRegistry;

/// Name of the first segment in [`sample_registry`].
pub const SAMPLE_SEGMENT_A: &str = "Tramo A";
/// Name of the second segment in [`sample_registry`].
pub const SAMPLE_SEGMENT_B: &str = "Tramo B";
/// Status applied to [`SAMPLE_SEGMENT_A`] in [`sample_registry`].
pub const SAMPLE_MAINTENANCE_STATUS: &str = "closed for maintenance";

/// Builds the two-segment maintenance scenario.
///
/// `Tramo A` (2.5 km) is closed for maintenance, `Tramo B` (1.2 km) is in
/// service. Total length is 3.7 km.
pub fn sample_registry() -> SegmentRegistry {
    let mut registry = SegmentRegistry::new();
    registry
        .add_segment(SAMPLE_SEGMENT_A, 2.5)
        .expect("Failed to add sample segment");
    registry
        .update_status(SAMPLE_SEGMENT_A, SAMPLE_MAINTENANCE_STATUS)
        .expect("Failed to update sample status");
    registry
        .add_segment(SAMPLE_SEGMENT_B, 1.2)
        .expect("Failed to add sample segment");
    registry
}

/// Builds a registry holding the given segments, all in service.
///
/// # Panics
///
/// Panics if any entry is rejected by the registry.
pub fn registry_with(segments: &[(&str, f64)]) -> SegmentRegistry {
    let mut registry = SegmentRegistry::new();
    for &(name, km) in segments {
        registry
            .add_segment(name, km)
            .unwrap_or_else(|e| panic!("Failed to add fixture segment {name:?}: {e}"));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_registry_state() {
        let registry = sample_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get_status(SAMPLE_SEGMENT_A).unwrap(),
            SAMPLE_MAINTENANCE_STATUS
        );
        assert_eq!(registry.get_status(SAMPLE_SEGMENT_B).unwrap(), "in service");
        assert_eq!(registry.total_length().as_f64(), 3.7);
    }

    #[test]
    fn registry_with_segments() {
        let registry = registry_with(&[("North", 1.0), ("South", 2.0)]);
        let names: Vec<_> = registry.list_segments().names().collect();
        assert_eq!(names, ["North", "South"]);
    }

    #[test]
    #[should_panic(expected = "Failed to add fixture segment")]
    fn registry_with_rejects_invalid() {
        registry_with(&[("North", 0.0)]);
    }
}
