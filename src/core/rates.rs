//! Immutable exchange rate tables

use crate::core::currency::{CurrencyCode, CurrencyRateProvider};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

/// A single one-directional rate as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: Decimal,
}

static DEFAULT_RATES: LazyLock<RateTable> = LazyLock::new(|| {
    let entries = [("USD", "EUR", 85), ("CHF", "EUR", 86), ("GBP", "EUR", 113)];
    RateTable::from_entries(entries.into_iter().filter_map(|(from, to, cents)| {
        Some(RateEntry {
            from: from.parse().ok()?,
            to: to.parse().ok()?,
            rate: Decimal::new(cents, 2),
        })
    }))
});

/// Maps a (source, target) pair to a multiplier. Reverse rates are never inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<(CurrencyCode, CurrencyCode), Decimal>,
}

impl RateTable {
    /// The built-in table shared by the whole process.
    pub fn default_table() -> &'static RateTable {
        &DEFAULT_RATES
    }

    /// Builds a table from entries. A repeated pair keeps the last rate.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RateEntry>,
    {
        let rates = entries
            .into_iter()
            .map(|e| ((e.from, e.to), e.rate))
            .collect();
        Self { rates }
    }

    /// Returns a copy of `base` with `overrides` applied on top.
    pub fn layered<I>(base: &RateTable, overrides: I) -> Self
    where
        I: IntoIterator<Item = RateEntry>,
    {
        let mut rates = base.rates.clone();
        for entry in overrides {
            debug!(
                "Layering rate {} -> {}: {}",
                entry.from, entry.to, entry.rate
            );
            rates.insert((entry.from, entry.to), entry.rate);
        }
        Self { rates }
    }

    pub fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<Decimal> {
        self.rates.get(&(from.clone(), to.clone())).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates entries ordered by (source, target).
    pub fn iter(&self) -> impl Iterator<Item = RateEntry> + '_ {
        self.rates.iter().map(|((from, to), rate)| RateEntry {
            from: from.clone(),
            to: to.clone(),
            rate: *rate,
        })
    }
}

impl CurrencyRateProvider for RateTable {
    fn get_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<Decimal> {
        self.rate(from, to)
    }
}
