//! CLI argument structures

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Work out team payouts, platform fee and host profit for a retreat
#[derive(Parser)]
#[command(name = "retreat-econ")]
#[command(about = "retreat-econ - Team payouts, platform fee and host profit for retreats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv adds thread ids and line numbers)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a configuration file (TOML or YAML)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the economics of a retreat file
    #[command(name = "calculate")]
    Calculate {
        /// Retreat record (.json, .yaml, .yml or .toml)
        retreat: PathBuf,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,

        /// Platform fee as a fraction of revenue, overriding configuration
        #[arg(long, value_name = "RATE")]
        platform_fee_rate: Option<Decimal>,
    },

    /// Check a retreat file for negative amounts and unknown fee types
    #[command(name = "check")]
    Check {
        /// Retreat record (.json, .yaml, .yml or .toml)
        retreat: PathBuf,

        /// Print issues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute a single team member's fee
    #[command(name = "fee")]
    Fee {
        /// One of flat, per_person, per_night, per_person_per_night, percentage
        fee_type: String,

        /// Fee amount (a percentage value for percentage fees)
        amount: Decimal,

        /// Attendee ticket price
        #[arg(long, default_value = "0")]
        price: Decimal,

        /// Attendee capacity
        #[arg(long, default_value = "0")]
        attendees: u32,

        /// Number of nights
        #[arg(long, default_value = "0")]
        nights: u32,
    },

    /// Inspect configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration after all layers are applied
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
