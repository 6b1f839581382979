//! Demo command implementation.

use super::{render, OutputFormat};
use crate::error::CliResult;
use bikelane_core::SegmentRegistry;
use tracing::{debug, info};

/// Builds the maintenance scenario: two segments, one closed.
pub fn build_scenario() -> CliResult<SegmentRegistry> {
    let mut registry = SegmentRegistry::new();
    registry.add_segment("Tramo A", 2.5)?;
    registry.update_status("Tramo A", "closed for maintenance")?;
    registry.add_segment("Tramo B", 1.2)?;

    if let Err(e) = registry.get_status("Tramo C") {
        debug!(error = %e, "unregistered segment lookup");
    }
    Ok(registry)
}

/// Runs the demo command.
pub fn run(format: OutputFormat) -> CliResult<()> {
    let registry = build_scenario()?;
    print!("{}", render(&registry.report(), format)?);
    info!(stats = ?registry.stats().snapshot(), "demo finished");
    Ok(())
}
