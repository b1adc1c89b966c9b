//! Command routing and execution
//!
//! This module routes parsed CLI commands to their implementations.

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::EconomicsConfig;
use anyhow::Result;

/// Execute a CLI command against the loaded configuration
pub async fn execute_command(command: Commands, config: &EconomicsConfig) -> Result<()> {
    match command {
        Commands::Calculate {
            retreat,
            json,
            platform_fee_rate,
        } => run_calculate(&retreat, json, platform_fee_rate, config).await,
        Commands::Check { retreat, json } => run_check(&retreat, json, config).await,
        Commands::Fee {
            fee_type,
            amount,
            price,
            attendees,
            nights,
        } => run_fee(
            FeeParams {
                fee_type,
                amount,
                price,
                attendees,
                nights,
            },
            config,
        ),
        Commands::Config { command } => run_config_command(command, config),
    }
}
