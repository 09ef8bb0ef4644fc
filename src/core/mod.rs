//! Core conversion logic and its supporting types

pub mod config;
pub mod convert;
pub mod currency;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use convert::{convert, convert_with, lookup_rate};
pub use currency::{CurrencyCode, CurrencyRateProvider, Money};
pub use rates::{RateEntry, RateTable};
