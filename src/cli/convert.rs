use super::ui;
use crate::core::{CurrencyCode, Money, RateTable, convert_with, lookup_rate};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// Outcome of a single conversion, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub source: Money,
    pub target: CurrencyCode,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub rate: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub converted: Option<Decimal>,
}

impl ConversionReport {
    pub fn new(rates: &RateTable, source: Money, target: CurrencyCode) -> Self {
        let rate = lookup_rate(rates, &source.currency, &target);
        let converted = convert_with(rates, &source, &target);
        Self {
            source,
            target,
            rate,
            converted,
        }
    }

    pub fn display(&self) -> String {
        let converted = match self.converted {
            Some(value) => ui::style_text(&value.to_string(), ui::StyleType::TotalValue),
            None => ui::style_text("N/A", ui::StyleType::Error),
        };
        let rate = self
            .rate
            .map_or("no rate known".to_string(), |r| format!("rate {}", r.normalize()));

        format!(
            "{} = {} {} ({rate})",
            ui::style_text(&self.source.to_string(), ui::StyleType::TotalLabel),
            converted,
            self.target
        )
    }
}

/// Parses the raw command line values into a report.
pub fn build_report(
    rates: &RateTable,
    amount: &str,
    from: &str,
    to: &CurrencyCode,
) -> Result<ConversionReport> {
    let amount = Decimal::from_str(amount.trim())
        .with_context(|| format!("Invalid amount: {amount}"))?;
    let from: CurrencyCode = from.parse().context("Invalid source currency")?;
    debug!("Converting {amount} {from} to {to}");

    Ok(ConversionReport::new(rates, Money::new(amount, from), to.clone()))
}

pub fn run(
    rates: &RateTable,
    amount: &str,
    from: &str,
    to: &CurrencyCode,
    json: bool,
) -> Result<()> {
    let report = build_report(rates, amount, from, to)?;
    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
    } else {
        println!("{}", report.display());
    }
    Ok(())
}
