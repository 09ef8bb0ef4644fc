//! Currency codes, money amounts and the rate lookup abstraction

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A three letter currency identifier such as `USD`, always stored upper-case.
///
/// Any well-formed code is accepted, whether or not a rate exists for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Default target currency.
    pub fn euro() -> Self {
        CurrencyCode("EUR".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(anyhow!("Invalid currency code: {}", s));
        }
        Ok(CurrencyCode(code.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An amount tagged with the currency it is expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

impl Money {
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }
}

impl TryFrom<(i64, &str)> for Money {
    type Error = anyhow::Error;

    fn try_from((amount, currency): (i64, &str)) -> Result<Self, Self::Error> {
        Ok(Money::new(Decimal::from(amount), currency.parse()?))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Source of one-directional exchange rates.
pub trait CurrencyRateProvider: Send + Sync {
    fn get_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<Decimal>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_is_normalised() {
        let code: CurrencyCode = " usd ".parse().unwrap();
        assert_eq!(code.as_str(), "USD");
        assert_eq!(code.to_string(), "USD");
    }

    #[test]
    fn test_currency_code_rejects_malformed_input() {
        assert!("".parse::<CurrencyCode>().is_err());
        assert!("US".parse::<CurrencyCode>().is_err());
        assert!("EURO".parse::<CurrencyCode>().is_err());
        assert!("U$D".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_unknown_but_well_formed_code_is_accepted() {
        let code: CurrencyCode = "RMB".parse().unwrap();
        assert_eq!(code.as_str(), "RMB");
    }

    #[test]
    fn test_money_from_tuple() {
        let money = Money::try_from((100_i64, "usd")).unwrap();
        assert_eq!(money.amount, Decimal::from(100));
        assert_eq!(money.currency.as_str(), "USD");
        assert_eq!(money.to_string(), "100 USD");

        assert!(Money::try_from((100_i64, "dollars")).is_err());
    }

    #[test]
    fn test_currency_code_deserialization() {
        let code: CurrencyCode = serde_yaml::from_str("\"chf\"").unwrap();
        assert_eq!(code.as_str(), "CHF");

        let err = serde_yaml::from_str::<CurrencyCode>("\"swiss\"");
        assert!(err.is_err());
    }
}
