//! Team member fee agreements
//!
//! A team member (venue, co-host, chef, staff) is paid according to one of
//! five fee arrangements. Each arrangement maps to a fixed formula over the
//! retreat's price, capacity and night count.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::calculator::RetreatEconomicsInput;

/// Role a team member plays on a retreat. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TeamRole {
    Venue,
    Cohost,
    Chef,
    Staff,
    /// Any role outside the four named ones, including the literal `other`
    #[default]
    Other,
}

impl TeamRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Venue => "venue",
            Self::Cohost => "cohost",
            Self::Chef => "chef",
            Self::Staff => "staff",
            Self::Other => "other",
        }
    }
}

impl From<&str> for TeamRole {
    fn from(value: &str) -> Self {
        match value {
            "venue" => Self::Venue,
            "cohost" => Self::Cohost,
            "chef" => Self::Chef,
            "staff" => Self::Staff,
            _ => Self::Other,
        }
    }
}

impl From<String> for TeamRole {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TeamRole> for String {
    fn from(role: TeamRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a team member's fee is computed.
///
/// Values outside the five known literals are kept verbatim in
/// [`FeeType::Unrecognized`] and contribute nothing to the team cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeeType {
    /// A fixed amount for the whole retreat
    Flat,
    /// Amount multiplied by the attendee capacity
    PerPerson,
    /// Amount multiplied by the number of nights
    PerNight,
    /// Amount multiplied by capacity and nights
    PerPersonPerNight,
    /// Percentage of gross revenue
    Percentage,
    /// A fee type literal this version does not know
    Unrecognized(String),
}

impl FeeType {
    /// The five fee types with a defined formula
    pub const KNOWN: [FeeType; 5] = [
        FeeType::Flat,
        FeeType::PerPerson,
        FeeType::PerNight,
        FeeType::PerPersonPerNight,
        FeeType::Percentage,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Flat => "flat",
            Self::PerPerson => "per_person",
            Self::PerNight => "per_night",
            Self::PerPersonPerNight => "per_person_per_night",
            Self::Percentage => "percentage",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for FeeType {
    fn from(value: &str) -> Self {
        match value {
            "flat" => Self::Flat,
            "per_person" => Self::PerPerson,
            "per_night" => Self::PerNight,
            "per_person_per_night" => Self::PerPersonPerNight,
            "percentage" => Self::Percentage,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for FeeType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<FeeType> for String {
    fn from(fee_type: FeeType) -> Self {
        match fee_type {
            FeeType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One team member's fee agreement for a retreat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberAgreement {
    #[serde(default)]
    pub role: TeamRole,
    pub fee_type: FeeType,
    /// Currency amount, or a percentage value for [`FeeType::Percentage`]
    pub fee_amount: Decimal,
    #[serde(default)]
    pub description: String,
}

impl TeamMemberAgreement {
    pub fn new(role: TeamRole, fee_type: FeeType, fee_amount: Decimal) -> Self {
        Self {
            role,
            fee_type,
            fee_amount,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Compute one member's payout for the given retreat.
///
/// Never fails. Arithmetic saturates at the bounds of [`Decimal`] and an
/// unrecognized fee type yields zero.
pub fn compute_member_fee(member: &TeamMemberAgreement, input: &RetreatEconomicsInput) -> Decimal {
    let attendees = Decimal::from(input.max_attendees);
    let nights = Decimal::from(input.num_nights);
    let amount = member.fee_amount;

    match &member.fee_type {
        FeeType::Flat => amount,
        FeeType::PerPerson => amount.saturating_mul(attendees),
        FeeType::PerNight => amount.saturating_mul(nights),
        FeeType::PerPersonPerNight => amount.saturating_mul(attendees).saturating_mul(nights),
        FeeType::Percentage => percentage_of_revenue(amount, input.price_per_person, attendees),
        FeeType::Unrecognized(raw) => {
            warn!(
                fee_type = %raw,
                role = %member.role,
                "Unrecognized fee type contributes no cost"
            );
            Decimal::ZERO
        }
    }
}

/// `percent / 100 × price × attendees`, dividing last so small percentages
/// keep every digit. Products past the `Decimal` range divide first and saturate.
fn percentage_of_revenue(percent: Decimal, price: Decimal, attendees: Decimal) -> Decimal {
    percent
        .checked_mul(price)
        .and_then(|product| product.checked_mul(attendees))
        .map(|product| product / Decimal::ONE_HUNDRED)
        .unwrap_or_else(|| {
            (percent / Decimal::ONE_HUNDRED)
                .saturating_mul(price)
                .saturating_mul(attendees)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn retreat(price: Decimal, attendees: u32, nights: u32) -> RetreatEconomicsInput {
        RetreatEconomicsInput::new(price, attendees, nights)
    }

    fn member(fee_type: FeeType, amount: Decimal) -> TeamMemberAgreement {
        TeamMemberAgreement::new(TeamRole::Staff, fee_type, amount)
    }

    #[test]
    fn test_flat_fee_ignores_attendees_and_nights() {
        let flat = member(FeeType::Flat, dec!(500));
        assert_eq!(compute_member_fee(&flat, &retreat(dec!(1000), 20, 5)), dec!(500));
        assert_eq!(compute_member_fee(&flat, &retreat(dec!(0), 0, 0)), dec!(500));
        assert_eq!(compute_member_fee(&flat, &retreat(dec!(75), 300, 14)), dec!(500));
    }

    #[test]
    fn test_per_person_fee() {
        let fee = compute_member_fee(
            &member(FeeType::PerPerson, dec!(50)),
            &retreat(dec!(1000), 20, 5),
        );
        assert_eq!(fee, dec!(1000));
    }

    #[test]
    fn test_per_night_fee() {
        let fee = compute_member_fee(
            &member(FeeType::PerNight, dec!(100)),
            &retreat(dec!(1000), 20, 5),
        );
        assert_eq!(fee, dec!(500));
    }

    #[test]
    fn test_per_person_per_night_fee() {
        let fee = compute_member_fee(
            &member(FeeType::PerPersonPerNight, dec!(10)),
            &retreat(dec!(1000), 20, 5),
        );
        assert_eq!(fee, dec!(1000));
    }

    #[test]
    fn test_percentage_fee() {
        let fee = compute_member_fee(
            &member(FeeType::Percentage, dec!(10)),
            &retreat(dec!(1000), 20, 5),
        );
        assert_eq!(fee, dec!(2000));
    }

    #[test]
    fn test_fractional_percentage_is_exact() {
        let fee = compute_member_fee(
            &member(FeeType::Percentage, dec!(12.5)),
            &retreat(dec!(999.99), 3, 2),
        );
        assert_eq!(fee, dec!(374.99625));
    }

    #[test]
    fn test_percentage_keeps_smallest_digits() {
        let fee = compute_member_fee(
            &member(FeeType::Percentage, dec!(0.0000000000000000000000000001)),
            &retreat(dec!(100), 1, 1),
        );
        assert_eq!(fee, dec!(0.0000000000000000000000000001));
    }

    #[test]
    fn test_percentage_of_huge_revenue_divides_first() {
        let fee = compute_member_fee(
            &member(FeeType::Percentage, dec!(10)),
            &retreat(dec!(10000000000000000000000000000), 2, 1),
        );
        assert_eq!(fee, dec!(2000000000000000000000000000));
    }

    #[test]
    fn test_unrecognized_fee_type_is_zero() {
        let odd = member(FeeType::from("per_week"), dec!(750));
        assert_eq!(compute_member_fee(&odd, &retreat(dec!(1000), 20, 5)), Decimal::ZERO);
    }

    #[test]
    fn test_fee_type_literals_round_trip() {
        for known in FeeType::KNOWN {
            assert_eq!(FeeType::from(known.as_str()), known);
            assert!(known.is_recognized());
        }

        let raw = FeeType::from("hourly".to_string());
        assert_eq!(raw, FeeType::Unrecognized("hourly".to_string()));
        assert_eq!(String::from(raw), "hourly");
    }

    #[test]
    fn test_agreement_deserializes_from_row() {
        let json = r#"{
            "role": "chef",
            "fee_type": "per_person_per_night",
            "fee_amount": 12.5,
            "description": "Three meals a day"
        }"#;

        let agreement: TeamMemberAgreement = serde_json::from_str(json).unwrap();
        assert_eq!(agreement.role, TeamRole::Chef);
        assert_eq!(agreement.fee_type, FeeType::PerPersonPerNight);
        assert_eq!(agreement.fee_amount, dec!(12.5));
        assert_eq!(agreement.description, "Three meals a day");
    }

    #[test]
    fn test_unknown_role_and_fee_type_survive_serialization() {
        let json = r#"{"role": "photographer", "fee_type": "bespoke", "fee_amount": "10"}"#;
        let agreement: TeamMemberAgreement = serde_json::from_str(json).unwrap();
        assert_eq!(agreement.role, TeamRole::Other);
        assert_eq!(agreement.description, "");

        let value = serde_json::to_value(&agreement).unwrap();
        assert_eq!(value["fee_type"], "bespoke");
        assert_eq!(value["role"], "other");
    }
}
