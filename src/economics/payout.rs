//! Payout schedule for a retreat team
//!
//! One line per team member with the amount owed and how it was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::{RetreatEconomicsInput, RetreatEconomicsResult};
use super::fee::{FeeType, TeamMemberAgreement, TeamRole};
use crate::format::{format_currency, format_percent};

/// Settlement order shown alongside every schedule.
pub const PAYOUT_SCHEDULE_NOTE: &str = "Team payouts are settled from gross ticket revenue \
after the platform fee is withheld; the host receives whatever remains.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutLine {
    pub index: usize,
    pub role: TeamRole,
    pub fee_type: FeeType,
    pub description: String,
    /// How the amount was derived, e.g. `$50.00 × 20 attendees`
    pub basis: String,
    pub amount: Decimal,
    /// Fraction of the total team cost. `None` when the team costs nothing.
    pub share_of_team_cost: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutSchedule {
    pub lines: Vec<PayoutLine>,
    pub total_team_cost: Decimal,
    pub note: String,
}

impl PayoutSchedule {
    /// Build the schedule from an input and the result computed for it.
    pub fn build(
        input: &RetreatEconomicsInput,
        result: &RetreatEconomicsResult,
        currency_symbol: &str,
    ) -> Self {
        let total = result.total_team_cost;
        let lines = input
            .team_members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let amount = result.fee_for(index).unwrap_or(Decimal::ZERO);
                let share_of_team_cost = if total.is_zero() {
                    None
                } else {
                    amount.checked_div(total)
                };

                PayoutLine {
                    index,
                    role: member.role,
                    fee_type: member.fee_type.clone(),
                    description: member.description.clone(),
                    basis: fee_basis(member, input, currency_symbol),
                    amount,
                    share_of_team_cost,
                }
            })
            .collect();

        Self {
            lines,
            total_team_cost: total,
            note: PAYOUT_SCHEDULE_NOTE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Describe the formula behind a member's fee
pub fn fee_basis(
    member: &TeamMemberAgreement,
    input: &RetreatEconomicsInput,
    currency_symbol: &str,
) -> String {
    let amount = format_currency(member.fee_amount, currency_symbol);
    let attendees = plural(input.max_attendees, "attendee");
    let nights = plural(input.num_nights, "night");

    match &member.fee_type {
        FeeType::Flat => format!("{} flat", amount),
        FeeType::PerPerson => format!("{} × {}", amount, attendees),
        FeeType::PerNight => format!("{} × {}", amount, nights),
        FeeType::PerPersonPerNight => format!("{} × {} × {}", amount, attendees, nights),
        FeeType::Percentage => format!(
            "{} of {}",
            format_percent(member.fee_amount / Decimal::ONE_HUNDRED),
            format_currency(input.total_revenue(), currency_symbol)
        ),
        FeeType::Unrecognized(raw) => format!("unrecognized fee type '{}'", raw),
    }
}

fn plural(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
