//! # Bikelane Testkit
//!
//! Test utilities for the segment registry.
//!
//! This crate provides:
//! - Registry fixtures for common scenarios
//! - Property-based test generators using proptest

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
