//! Test data builders for retreat scenarios

use rust_decimal::Decimal;

use crate::economics::{FeeType, RetreatEconomicsInput, TeamMemberAgreement, TeamRole};

/// Builder for retreat economics inputs
pub struct RetreatBuilder {
    input: RetreatEconomicsInput,
}

impl Default for RetreatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RetreatBuilder {
    pub fn new() -> Self {
        Self {
            input: RetreatEconomicsInput::default(),
        }
    }

    pub fn with_price(mut self, price_per_person: Decimal) -> Self {
        self.input.price_per_person = price_per_person;
        self
    }

    pub fn with_attendees(mut self, max_attendees: u32) -> Self {
        self.input.max_attendees = max_attendees;
        self
    }

    pub fn with_nights(mut self, num_nights: u32) -> Self {
        self.input.num_nights = num_nights;
        self
    }

    pub fn with_member(mut self, role: TeamRole, fee_type: FeeType, amount: Decimal) -> Self {
        self.input
            .team_members
            .push(TeamMemberAgreement::new(role, fee_type, amount));
        self
    }

    pub fn build(self) -> RetreatEconomicsInput {
        self.input
    }
}
