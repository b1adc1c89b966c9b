//! `retreat-econ check`

use anyhow::Result;
use std::path::Path;

use crate::config::EconomicsConfig;
use crate::economics::ValidationReport;
use crate::retreat::load_record;

/// Validate a retreat file. Fails when any issue is an error.
pub async fn run_check(retreat: &Path, json: bool, config: &EconomicsConfig) -> Result<()> {
    let record = load_record(retreat).await?;
    let report = record.validate(config.unknown_fee_type);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", summarize(&report));
    }

    report.into_result()?;
    Ok(())
}

fn summarize(report: &ValidationReport) -> String {
    if report.is_clean() {
        return "No issues found\n".to_string();
    }

    let mut out = String::new();
    for issue in &report.issues {
        out.push_str(&issue.to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "{} error(s), {} warning(s)\n",
        report.errors().count(),
        report.warnings().count()
    ));
    out
}
