//! `retreat-econ calculate`

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{info, warn};

use crate::config::EconomicsConfig;
use crate::economics::{
    compute_economics_with_rate, Issue, PayoutSchedule, PlatformFeeRate, RetreatEconomicsInput,
    RetreatEconomicsResult,
};
use crate::error::common;
use crate::format::{format_currency, format_percent};
use crate::retreat::load_record;

/// Everything printed by `calculate --json`
#[derive(Debug, Serialize)]
pub struct CalculationReport {
    pub title: String,
    pub platform_fee_rate: PlatformFeeRate,
    pub input: RetreatEconomicsInput,
    pub economics: RetreatEconomicsResult,
    pub payout_schedule: PayoutSchedule,
    pub warnings: Vec<Issue>,
}

impl CalculationReport {
    pub fn new(
        title: impl Into<String>,
        input: RetreatEconomicsInput,
        rate: PlatformFeeRate,
        currency_symbol: &str,
        warnings: Vec<Issue>,
    ) -> Self {
        let economics = compute_economics_with_rate(&input, rate);
        let payout_schedule = PayoutSchedule::build(&input, &economics, currency_symbol);
        Self {
            title: title.into(),
            platform_fee_rate: rate,
            input,
            economics,
            payout_schedule,
            warnings,
        }
    }
}

pub async fn run_calculate(
    retreat: &Path,
    json: bool,
    rate_override: Option<Decimal>,
    config: &EconomicsConfig,
) -> Result<()> {
    let rate = match rate_override {
        Some(rate) => {
            let rate = PlatformFeeRate::new(rate);
            if !rate.is_valid() {
                return Err(common::out_of_range(
                    "platform_fee_rate",
                    "platform fee rate must be between 0 and 1",
                )
                .into());
            }
            rate
        }
        None => config.platform_fee_rate,
    };

    let record = load_record(retreat).await?;
    let warnings = record.validate(config.unknown_fee_type).into_result()?;
    for issue in &warnings {
        warn!(field = %issue.field, "{}", issue.message);
    }

    info!(
        retreat = record.display_title(),
        members = record.team_members.len(),
        %rate,
        "Calculating retreat economics"
    );
    let report = CalculationReport::new(
        record.display_title(),
        record.to_input(),
        rate,
        &config.currency_symbol,
        warnings,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, &config.currency_symbol));
    }
    Ok(())
}

/// Plain-text breakdown: payout table, totals and the settlement note
pub fn render_report(report: &CalculationReport, symbol: &str) -> String {
    let input = &report.input;
    let economics = &report.economics;
    let mut out = String::new();

    let _ = writeln!(out, "{}", report.title);
    let _ = writeln!(
        out,
        "  {} per person, {} attendees, {} nights",
        format_currency(input.price_per_person, symbol),
        input.max_attendees,
        input.num_nights
    );
    let _ = writeln!(out);

    if report.payout_schedule.is_empty() {
        let _ = writeln!(out, "No team members");
    } else {
        let _ = writeln!(out, "Team payouts");
        for line in &report.payout_schedule.lines {
            let _ = writeln!(
                out,
                "  {:>2}  {:<7} {:<21} {:<32} {:>14}",
                line.index,
                line.role.as_str(),
                line.fee_type.as_str(),
                line.basis,
                format_currency(line.amount, symbol)
            );
        }
    }
    let _ = writeln!(out);

    let fee_label = format!("Platform fee ({})", report.platform_fee_rate);
    let rows = [
        ("Total revenue".to_string(), economics.total_revenue),
        ("Team cost".to_string(), economics.total_team_cost),
        (fee_label, economics.platform_fee),
        ("Host profit".to_string(), economics.host_profit),
    ];
    for (label, amount) in rows {
        let _ = writeln!(out, "  {:<22} {:>16}", label, format_currency(amount, symbol));
    }

    match economics.host_margin() {
        Some(margin) => {
            let _ = writeln!(out, "  {:<22} {:>16}", "Host margin", format_percent(margin));
        }
        None => {
            let _ = writeln!(out, "  {:<22} {:>16}", "Host margin", "n/a");
        }
    }

    if economics.is_over_committed() {
        let _ = writeln!(
            out,
            "\nOver-committed: team cost and platform fee exceed revenue"
        );
    }

    let _ = writeln!(out, "\n{}", report.payout_schedule.note);
    out
}
