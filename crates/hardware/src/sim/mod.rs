//! Simulation context, program loading, and reporting.
//!
//! Provides the `Simulator` facade used by the command shell, the program
//! image loader, and the text formatter behind every dump command.

/// Program image parsing and file reading.
pub mod loader;

/// Register, memory, program, pipeline, and statistics reports.
pub mod report;

/// The `Simulator` context and its `Snapshot` view.
pub mod simulator;

pub use simulator::{Simulator, Snapshot};
