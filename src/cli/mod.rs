//! CLI command handlers
//!
//! - Argument parsing structures
//! - Command implementations
//! - Log level selection

pub mod args;
pub mod commands;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands, ConfigCommands};
pub use router::execute_command;

/// Tracing filter for a `-v` count, falling back to the configured level
pub fn log_filter(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
