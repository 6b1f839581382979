//! # Bikelane Core
//!
//! In-memory registry of bike-lane segments.
//!
//! This crate provides:
//! - [`SegmentRegistry`] recording each segment's length and operational status
//! - Plain-text and structured reports over the registered segments
//! - Operation counters for diagnostics
//!
//! ```
//! use bikelane_core::SegmentRegistry;
//!
//! let mut registry = SegmentRegistry::new();
//! registry.add_segment("Tramo A", 2.5)?;
//! registry.update_status("Tramo A", "closed for maintenance")?;
//! assert_eq!(registry.get_status("Tramo A")?, "closed for maintenance");
//! # Ok::<(), bikelane_core::RegistryError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod registry;
mod report;
mod stats;
mod types;

pub use config::{RegistryConfig, DEFAULT_REPORT_TITLE, DEFAULT_STATUS};
pub use error::{RegistryError, RegistryResult};
pub use registry::{LengthView, SegmentRegistry};
pub use report::{Report, ReportLine};
pub use stats::{RegistryStats, StatsSnapshot};
pub use types::{Kilometers, Segment};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
