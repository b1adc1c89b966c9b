//! Optional checks over a retreat's economics input
//!
//! The calculator accepts anything. This pass is run by callers that want to
//! reject or flag suspicious rows before showing or saving numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::calculator::RetreatEconomicsInput;
use super::fee::FeeType;
use crate::error::{ErrorCode, RetreatError};

/// What to do with a fee type literal outside the known five
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFeePolicy {
    /// Count it as a zero fee and report a warning
    #[default]
    Zero,
    /// Report an error
    Reject,
}

impl std::str::FromStr for UnknownFeePolicy {
    type Err = RetreatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "reject" => Ok(Self::Reject),
            other => Err(RetreatError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("unknown fee type policy '{}' (expected zero or reject)", other),
            )),
        }
    }
}

impl fmt::Display for UnknownFeePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("zero"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub code: u16,
    /// Path of the offending field, e.g. `team_members[2].fee_amount`
    pub field: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{} [E{:04}] {}: {}", label, self.code, self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }

    /// Fail with the first error, listing the total count when there are several.
    pub fn into_result(self) -> Result<Vec<Issue>, RetreatError> {
        let error_count = self.errors().count();
        let first = self
            .errors()
            .next()
            .map(|issue| (issue.code, issue.field.clone(), issue.message.clone()));

        match first {
            None => Ok(self.issues),
            Some((code, field, mut message)) => {
                if error_count > 1 {
                    message = format!("{} (and {} more)", message, error_count - 1);
                }
                Err(RetreatError::validation_with_code(code, message, Some(field)))
            }
        }
    }

    fn push(&mut self, severity: Severity, code: u16, field: String, message: impl Into<String>) {
        self.issues.push(Issue {
            severity,
            code,
            field,
            message: message.into(),
        });
    }
}

/// Check an input for negative amounts, percentages above 100 and
/// unrecognized fee types.
pub fn validate_input(input: &RetreatEconomicsInput, policy: UnknownFeePolicy) -> ValidationReport {
    let mut report = ValidationReport::default();

    if input.price_per_person < Decimal::ZERO {
        report.push(
            Severity::Error,
            ErrorCode::VALIDATION_NEGATIVE_AMOUNT,
            "price_per_person".to_string(),
            format!("price per person is negative ({})", input.price_per_person),
        );
    }

    for (index, member) in input.team_members.iter().enumerate() {
        if member.fee_amount < Decimal::ZERO {
            report.push(
                Severity::Error,
                ErrorCode::VALIDATION_NEGATIVE_AMOUNT,
                format!("team_members[{}].fee_amount", index),
                format!("fee amount is negative ({})", member.fee_amount),
            );
        }

        match &member.fee_type {
            FeeType::Percentage if member.fee_amount > Decimal::ONE_HUNDRED => {
                report.push(
                    Severity::Warning,
                    ErrorCode::VALIDATION_OUT_OF_RANGE,
                    format!("team_members[{}].fee_amount", index),
                    format!(
                        "percentage fee of {}% exceeds gross revenue",
                        member.fee_amount.normalize()
                    ),
                );
            }
            FeeType::Unrecognized(raw) => {
                let severity = match policy {
                    UnknownFeePolicy::Zero => Severity::Warning,
                    UnknownFeePolicy::Reject => Severity::Error,
                };
                report.push(
                    severity,
                    ErrorCode::VALIDATION_UNKNOWN_FEE_TYPE,
                    format!("team_members[{}].fee_type", index),
                    format!("unrecognized fee type '{}'", raw),
                );
            }
            _ => {}
        }
    }

    debug!(
        issues = report.issues.len(),
        errors = report.errors().count(),
        "Validated retreat economics input"
    );
    report
}
