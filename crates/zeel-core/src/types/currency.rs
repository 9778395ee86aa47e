//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency codes.
///
/// Represents the currencies the lending platform quotes in. The home
/// currency is the Mongolian tögrög, which is priced in whole ₮ — its minor
/// unit is ₮1, so amounts round to zero decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Currency {
    /// Mongolian Tögrög
    #[default]
    MNT,
    /// United States Dollar
    USD,
    /// Euro
    EUR,
    /// Chinese Yuan Renminbi
    CNY,
    /// Japanese Yen
    JPY,
    /// South Korean Won
    KRW,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::MNT => "MNT",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::CNY => "CNY",
            Currency::JPY => "JPY",
            Currency::KRW => "KRW",
        }
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::MNT => "₮",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::CNY => "¥",
            Currency::JPY => "¥",
            Currency::KRW => "₩",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::MNT => "Mongolian Tögrög",
            Currency::USD => "United States Dollar",
            Currency::EUR => "Euro",
            Currency::CNY => "Chinese Yuan Renminbi",
            Currency::JPY => "Japanese Yen",
            Currency::KRW => "South Korean Won",
        }
    }

    /// Returns the number of decimal places in the currency's minor unit.
    ///
    /// This is the precision every presented amount is rounded to. The
    /// tögrög is quoted in whole ₮ across the platform.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::MNT | Currency::JPY | Currency::KRW => 0,
            Currency::USD | Currency::EUR | Currency::CNY => 2,
        }
    }

    /// Parses a currency from a string code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "MNT" => Some(Currency::MNT),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "CNY" => Some(Currency::CNY),
            "JPY" => Some(Currency::JPY),
            "KRW" => Some(Currency::KRW),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
