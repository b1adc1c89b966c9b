//! Retreat economics: team fees, platform fee and host profit
//!
//! - `fee` - fee agreements and the per-member fee formula
//! - `calculator` - totals, platform fee and host profit
//! - `payout` - per-member payout schedule for display
//! - `validation` - optional checks callers run before trusting the numbers

pub mod calculator;
pub mod fee;
pub mod payout;
pub mod validation;

pub use calculator::{
    compute_economics, compute_economics_with_rate, PlatformFeeRate, RetreatEconomicsInput,
    RetreatEconomicsResult,
};
pub use fee::{compute_member_fee, FeeType, TeamMemberAgreement, TeamRole};
pub use payout::{PayoutLine, PayoutSchedule, PAYOUT_SCHEDULE_NOTE};
pub use validation::{validate_input, Issue, Severity, UnknownFeePolicy, ValidationReport};
