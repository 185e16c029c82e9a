//! Currency display metadata
//!
//! A fixed, closed set of currency codes, each mapped to a display symbol
//! and locale label. This is presentation-only: amounts are never converted
//! between currencies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currency codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
    AUD,
    CAD,
}

/// Display metadata for a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: CurrencyCode,
    pub symbol: &'static str,
    pub name: &'static str,
    pub locale: &'static str,
}

impl CurrencyCode {
    /// All supported currencies, in display order
    pub const ALL: [CurrencyCode; 7] = [
        Self::INR,
        Self::USD,
        Self::EUR,
        Self::GBP,
        Self::JPY,
        Self::AUD,
        Self::CAD,
    ];

    /// Display metadata for this currency
    pub fn info(&self) -> CurrencyInfo {
        match self {
            Self::INR => CurrencyInfo {
                code: Self::INR,
                symbol: "₹",
                name: "Indian Rupee",
                locale: "en-IN",
            },
            Self::USD => CurrencyInfo {
                code: Self::USD,
                symbol: "$",
                name: "US Dollar",
                locale: "en-US",
            },
            Self::EUR => CurrencyInfo {
                code: Self::EUR,
                symbol: "€",
                name: "Euro",
                locale: "de-DE",
            },
            Self::GBP => CurrencyInfo {
                code: Self::GBP,
                symbol: "£",
                name: "British Pound",
                locale: "en-GB",
            },
            Self::JPY => CurrencyInfo {
                code: Self::JPY,
                symbol: "¥",
                name: "Japanese Yen",
                locale: "ja-JP",
            },
            Self::AUD => CurrencyInfo {
                code: Self::AUD,
                symbol: "A$",
                name: "Australian Dollar",
                locale: "en-AU",
            },
            Self::CAD => CurrencyInfo {
                code: Self::CAD,
                symbol: "C$",
                name: "Canadian Dollar",
                locale: "en-CA",
            },
        }
    }

    /// Parse a currency code from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "INR" => Some(Self::INR),
            "USD" => Some(Self::USD),
            "EUR" => Some(Self::EUR),
            "GBP" => Some(Self::GBP),
            "JPY" => Some(Self::JPY),
            "AUD" => Some(Self::AUD),
            "CAD" => Some(Self::CAD),
            _ => None,
        }
    }

    /// Format an amount with this currency's symbol
    pub fn format(&self, amount: f64) -> String {
        let symbol = self.info().symbol;
        if amount < 0.0 {
            format!("-{}{:.2}", symbol, amount.abs())
        } else {
            format!("{}{:.2}", symbol, amount)
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(CurrencyCode::parse("usd"), Some(CurrencyCode::USD));
        assert_eq!(CurrencyCode::parse("INR"), Some(CurrencyCode::INR));
        assert_eq!(CurrencyCode::parse("BTC"), None);
    }

    #[test]
    fn test_info() {
        let info = CurrencyCode::GBP.info();
        assert_eq!(info.symbol, "£");
        assert_eq!(info.name, "British Pound");
        assert_eq!(info.locale, "en-GB");
    }

    #[test]
    fn test_format() {
        assert_eq!(CurrencyCode::USD.format(1234.5), "$1234.50");
        assert_eq!(CurrencyCode::USD.format(-42.0), "-$42.00");
        assert_eq!(CurrencyCode::INR.format(0.0), "₹0.00");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CurrencyCode::EUR).unwrap();
        assert_eq!(json, "\"EUR\"");
        let parsed: CurrencyCode = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(parsed, CurrencyCode::JPY);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CurrencyCode::CAD), "CAD");
    }
}
