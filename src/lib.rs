//! # Retreat Economics
//!
//! Team payouts, platform fee and host profit for retreat listings.
//!
//! ## Usage
//!
//! ```bash
//! retreat-econ calculate retreat.json [--json] [--platform-fee-rate 0.25]
//! ```
//!
//! ## Modules
//!
//! - `economics` - Fee agreements, the economics calculator, payout schedules and input checks
//! - `team` - Team editing with change notification for persistence
//! - `retreat` - Retreat records as stored by the persistence service
//! - `config` - Layered configuration (files and `RETREAT_*` environment variables)
//! - `format` - Currency and percentage display formatting
//! - `error` - Error type with numeric codes
//! - `cli` - Command-line argument parsing and command handlers
//! - `testing` - Mocks and fixtures for tests
pub mod cli;
pub mod config;
pub mod economics;
pub mod error;
pub mod format;
pub mod retreat;
pub mod team;

pub mod testing;


pub use economics::{
    compute_economics, compute_economics_with_rate, compute_member_fee, FeeType, PlatformFeeRate,
    RetreatEconomicsInput, RetreatEconomicsResult, TeamMemberAgreement, TeamRole,
};
pub use error::{RetreatError, Result};
