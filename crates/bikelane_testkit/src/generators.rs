//! Property-based test generators using proptest.
//!
//! Provides strategies for generating registry inputs, both valid and
//! deliberately invalid.

use bikelane_core::{RegistryResult, SegmentRegistry};
use proptest::prelude::*;

/// Strategy for generating valid segment names.
pub fn segment_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9 _-]{0,31}").expect("Invalid regex")
}

/// Strategy for generating empty or whitespace-only names.
pub fn blank_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{0,8}").expect("Invalid regex")
}

/// Strategy for generating valid segment lengths (0.001 to 1000 km).
pub fn length_strategy() -> impl Strategy<Value = f64> {
    (1u32..=1_000_000).prop_map(|meters| f64::from(meters) / 1000.0)
}

/// Strategy for generating lengths the registry must reject.
pub fn invalid_length_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        length_strategy().prop_map(|km| -km),
    ]
}

/// Strategy for generating free-form statuses.
pub fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("in service".to_string()),
        Just("closed for maintenance".to_string()),
        Just("under construction".to_string()),
        ".{0,24}",
    ]
}

/// A registry operation.
#[derive(Debug, Clone)]
pub enum RegistryOperation {
    /// Add or replace a segment
    Add {
        /// Segment name
        name: String,
        /// Length in kilometers
        length: f64,
    },
    /// Update a segment's status
    UpdateStatus {
        /// Segment name
        name: String,
        /// New status
        status: String,
    },
    /// Read a segment's status
    GetStatus {
        /// Segment name
        name: String,
    },
}

impl RegistryOperation {
    /// Applies this operation to a registry.
    pub fn apply(&self, registry: &mut SegmentRegistry) -> RegistryResult<()> {
        match self {
            Self::Add { name, length } => registry.add_segment(name.as_str(), *length),
            Self::UpdateStatus { name, status } => registry.update_status(name, status.as_str()),
            Self::GetStatus { name } => registry.get_status(name).map(|_| ()),
        }
    }
}

/// Strategy for generating a single operation over a small name pool.
///
/// A small pool makes re-adds and hits on existing names likely.
pub fn operation_strategy() -> impl Strategy<Value = RegistryOperation> {
    let name = prop::sample::select(vec!["Tramo A", "Tramo B", "Tramo C", "Tramo D"])
        .prop_map(String::from);
    prop_oneof![
        (name.clone(), length_strategy())
            .prop_map(|(name, length)| RegistryOperation::Add { name, length }),
        (name.clone(), status_strategy())
            .prop_map(|(name, status)| RegistryOperation::UpdateStatus { name, status }),
        name.prop_map(|name| RegistryOperation::GetStatus { name }),
    ]
}

/// Strategy for generating a batch of operations.
pub fn operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<RegistryOperation>> {
    prop::collection::vec(operation_strategy(), 0..=max_ops)
}
