//! Retreat economics calculator
//!
//! Turns a retreat's price, capacity, night count and team fee agreements
//! into team payouts, gross revenue, the platform fee and the host's profit.
//! Everything here is pure: the same input always yields the same result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::fee::{compute_member_fee, TeamMemberAgreement};

/// Share of gross revenue retained by the marketplace.
///
/// Stored as a fraction (`0.30` is thirty percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformFeeRate(Decimal);

impl PlatformFeeRate {
    /// Thirty percent of gross revenue
    pub const DEFAULT: PlatformFeeRate = PlatformFeeRate(Decimal::from_parts(30, 0, 0, false, 2));

    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Fraction of revenue left for the host and team
    pub fn remainder(&self) -> Decimal {
        Decimal::ONE - self.0
    }

    /// Whether the rate lies within `[0, 1]`
    pub fn is_valid(&self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE
    }
}

impl Default for PlatformFeeRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PlatformFeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}

/// Everything the calculator needs to know about a retreat
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetreatEconomicsInput {
    /// Attendee ticket price
    pub price_per_person: Decimal,
    /// Capacity used for revenue and per-person fees
    pub max_attendees: u32,
    /// Night count used for per-night fees
    pub num_nights: u32,
    /// Fee agreements in display order
    #[serde(default)]
    pub team_members: Vec<TeamMemberAgreement>,
}

impl RetreatEconomicsInput {
    pub fn new(price_per_person: Decimal, max_attendees: u32, num_nights: u32) -> Self {
        Self {
            price_per_person,
            max_attendees,
            num_nights,
            team_members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: TeamMemberAgreement) -> Self {
        self.team_members.push(member);
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = TeamMemberAgreement>) -> Self {
        self.team_members.extend(members);
        self
    }

    /// Gross revenue at full capacity
    pub fn total_revenue(&self) -> Decimal {
        self.price_per_person
            .saturating_mul(Decimal::from(self.max_attendees))
    }
}

/// Derived economics of a retreat. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetreatEconomicsResult {
    /// Payout of each member, indexed like `RetreatEconomicsInput::team_members`
    pub per_member_fee: Vec<Decimal>,
    pub total_team_cost: Decimal,
    pub total_revenue: Decimal,
    pub platform_fee: Decimal,
    /// May be negative when the team costs more than the host's share
    pub host_profit: Decimal,
}

impl RetreatEconomicsResult {
    /// Payout of the member at `index`, if there is one
    pub fn fee_for(&self, index: usize) -> Option<Decimal> {
        self.per_member_fee.get(index).copied()
    }

    /// True when team cost and platform fee exceed revenue
    pub fn is_over_committed(&self) -> bool {
        self.host_profit < Decimal::ZERO
    }

    /// Host profit as a fraction of revenue. `None` when there is no revenue.
    pub fn host_margin(&self) -> Option<Decimal> {
        if self.total_revenue.is_zero() {
            None
        } else {
            self.host_profit.checked_div(self.total_revenue)
        }
    }
}

/// Compute retreat economics at the default thirty percent platform fee.
pub fn compute_economics(input: &RetreatEconomicsInput) -> RetreatEconomicsResult {
    compute_economics_with_rate(input, PlatformFeeRate::DEFAULT)
}

/// Compute retreat economics with an explicit platform fee rate.
///
/// Recomputes every member fee from scratch on each call.
pub fn compute_economics_with_rate(
    input: &RetreatEconomicsInput,
    rate: PlatformFeeRate,
) -> RetreatEconomicsResult {
    let per_member_fee: Vec<Decimal> = input
        .team_members
        .iter()
        .map(|member| compute_member_fee(member, input))
        .collect();

    let total_team_cost = per_member_fee
        .iter()
        .fold(Decimal::ZERO, |total, fee| total.saturating_add(*fee));
    let total_revenue = input.total_revenue();
    let platform_fee = total_revenue.saturating_mul(rate.value());
    let host_profit = total_revenue
        .saturating_sub(total_team_cost)
        .saturating_sub(platform_fee);

    debug!(
        members = per_member_fee.len(),
        %total_revenue,
        %total_team_cost,
        %platform_fee,
        %host_profit,
        "Computed retreat economics"
    );

    RetreatEconomicsResult {
        per_member_fee,
        total_team_cost,
        total_revenue,
        platform_fee,
        host_profit,
    }
}
