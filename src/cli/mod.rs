//! CLI command handlers for padseq.
//!
//! This module provides headless, scriptable access to the sequence
//! generator and graph inspection for automation and testing.

pub mod common;
pub mod generate;
pub mod neighbors;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use generate::GenerateArgs;
pub use neighbors::NeighborsArgs;
