//! `retreat-econ fee`

use anyhow::{bail, Result};
use rust_decimal::Decimal;

use crate::config::EconomicsConfig;
use crate::economics::payout::fee_basis;
use crate::economics::{
    compute_member_fee, FeeType, RetreatEconomicsInput, TeamMemberAgreement, TeamRole,
    UnknownFeePolicy,
};
use crate::format::format_currency;

pub struct FeeParams {
    pub fee_type: String,
    pub amount: Decimal,
    pub price: Decimal,
    pub attendees: u32,
    pub nights: u32,
}

pub fn run_fee(params: FeeParams, config: &EconomicsConfig) -> Result<()> {
    println!("{}", describe_fee(params, config)?);
    Ok(())
}

/// One line: the fee's basis and the computed amount
pub fn describe_fee(params: FeeParams, config: &EconomicsConfig) -> Result<String> {
    let fee_type = FeeType::from(params.fee_type.as_str());
    if !fee_type.is_recognized() && config.unknown_fee_type == UnknownFeePolicy::Reject {
        bail!(
            "unrecognized fee type '{}' (expected one of: {})",
            fee_type,
            FeeType::KNOWN
                .iter()
                .map(FeeType::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let input = RetreatEconomicsInput::new(params.price, params.attendees, params.nights);
    let member = TeamMemberAgreement::new(TeamRole::Other, fee_type, params.amount);
    let amount = compute_member_fee(&member, &input);

    Ok(format!(
        "{} = {}",
        fee_basis(&member, &input, &config.currency_symbol),
        format_currency(amount, &config.currency_symbol)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(fee_type: &str, amount: Decimal) -> FeeParams {
        FeeParams {
            fee_type: fee_type.to_string(),
            amount,
            price: dec!(1000),
            attendees: 20,
            nights: 5,
        }
    }

    #[test]
    fn test_describe_percentage_fee() {
        let line = describe_fee(params("percentage", dec!(10)), &EconomicsConfig::default()).unwrap();
        assert_eq!(line, "10% of $20,000.00 = $2,000.00");
    }

    #[test]
    fn test_describe_per_person_per_night_fee() {
        let line = describe_fee(
            params("per_person_per_night", dec!(10)),
            &EconomicsConfig::default(),
        )
        .unwrap();
        assert_eq!(line, "$10.00 × 20 attendees × 5 nights = $1,000.00");
    }

    #[test]
    fn test_unknown_fee_type_respects_policy() {
        let line = describe_fee(params("per_week", dec!(10)), &EconomicsConfig::default()).unwrap();
        assert!(line.ends_with("= $0.00"));

        let strict = EconomicsConfig {
            unknown_fee_type: UnknownFeePolicy::Reject,
            ..Default::default()
        };
        let err = describe_fee(params("per_week", dec!(10)), &strict).unwrap_err();
        assert!(err.to_string().contains("per_person_per_night"));
    }
}
