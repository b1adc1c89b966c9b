//! Retreat records as stored by the persistence service
//!
//! A record carries the retreat's price, capacity, dates and team rows. It
//! is read from JSON, YAML or TOML and converted into a calculator input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::economics::{
    validate_input, Issue, RetreatEconomicsInput, Severity, TeamMemberAgreement,
    UnknownFeePolicy, ValidationReport,
};
use crate::error::{common, ErrorCode, Result, RetreatError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetreatRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub price_per_person: Decimal,
    pub max_attendees: u32,
    /// Explicit night count; takes precedence over the dates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_nights: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub team_members: Vec<TeamMemberAgreement>,
}

/// Whole nights between check-in and check-out. Zero unless `end` is after `start`.
pub fn nights_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = end.signed_duration_since(start).num_days();
    if days <= 0 {
        0
    } else {
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

impl RetreatRecord {
    /// Night count: the explicit value, else derived from the dates, else zero
    pub fn num_nights(&self) -> u32 {
        if let Some(nights) = self.num_nights {
            return nights;
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => nights_between(start, end),
            _ => 0,
        }
    }

    pub fn to_input(&self) -> RetreatEconomicsInput {
        RetreatEconomicsInput {
            price_per_person: self.price_per_person,
            max_attendees: self.max_attendees,
            num_nights: self.num_nights(),
            team_members: self.team_members.clone(),
        }
    }

    /// Validate the economics input plus the record's dates
    pub fn validate(&self, policy: UnknownFeePolicy) -> ValidationReport {
        let mut report = validate_input(&self.to_input(), policy);

        if self.num_nights.is_none() {
            if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
                if end < start {
                    report.issues.push(Issue {
                        severity: Severity::Warning,
                        code: ErrorCode::VALIDATION_OUT_OF_RANGE,
                        field: "end_date".to_string(),
                        message: format!("end date {} is before start date {}", end, start),
                    });
                }
            }
        }

        report
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled retreat")
    }
}

/// Serialization format of a retreat file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
    Toml,
}

impl RecordFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

pub fn parse_record(content: &str, format: RecordFormat) -> Result<RetreatRecord> {
    let record = match format {
        RecordFormat::Json => serde_json::from_str(content)?,
        RecordFormat::Yaml => serde_yaml::from_str(content)?,
        RecordFormat::Toml => toml::from_str(content)?,
    };
    Ok(record)
}

/// Read a retreat record, picking the parser from the file extension
pub async fn load_record(path: &Path) -> Result<RetreatRecord> {
    let format = RecordFormat::from_path(path).ok_or_else(|| common::unsupported_format(path))?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RetreatError::from(e).with_path(path))?;

    let record = parse_record(&content, format).map_err(|e| e.with_path(path))?;
    debug!(
        path = %path.display(),
        members = record.team_members.len(),
        "Loaded retreat record"
    );
    Ok(record)
}
