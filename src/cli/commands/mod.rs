//! Command implementation modules
//!
//! Each command is implemented as a separate module.

pub mod calculate;
pub mod check;
pub mod config;
pub mod fee;

// Re-export command execution functions
pub use calculate::{render_report, run_calculate, CalculationReport};
pub use check::run_check;
pub use config::run_config_command;
pub use fee::{describe_fee, run_fee, FeeParams};
