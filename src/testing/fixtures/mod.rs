//! Shared retreat fixtures

pub mod builders;

pub use builders::RetreatBuilder;

use rust_decimal::Decimal;

use crate::economics::{FeeType, RetreatEconomicsInput, TeamRole};

/// $1,000 tickets, 20 attendees, 5 nights, with a flat venue, a per-person
/// chef and a 10% co-host. Revenue 20,000; team cost 3,500; host profit 10,500.
pub fn reference_retreat() -> RetreatEconomicsInput {
    RetreatBuilder::new()
        .with_price(Decimal::from(1000))
        .with_attendees(20)
        .with_nights(5)
        .with_member(TeamRole::Venue, FeeType::Flat, Decimal::from(500))
        .with_member(TeamRole::Chef, FeeType::PerPerson, Decimal::from(50))
        .with_member(TeamRole::Cohost, FeeType::Percentage, Decimal::from(10))
        .build()
}

/// The reference retreat as a persisted JSON row with dates instead of a night count
pub const REFERENCE_RETREAT_JSON: &str = r#"{
  "title": "Lakeside Reset",
  "price_per_person": 1000,
  "max_attendees": 20,
  "start_date": "2026-05-01",
  "end_date": "2026-05-06",
  "team_members": [
    { "role": "venue", "fee_type": "flat", "fee_amount": 500, "description": "Lodge buyout" },
    { "role": "chef", "fee_type": "per_person", "fee_amount": 50, "description": "Catering" },
    { "role": "cohost", "fee_type": "percentage", "fee_amount": 10, "description": "Facilitation" }
  ]
}"#;
