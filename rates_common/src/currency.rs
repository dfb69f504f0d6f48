//! Three-letter currency codes as accepted by the exchange-rate service.

use std::fmt;
use std::str::FromStr;

use crate::error::RatesError;

/// ISO-style currency code, always stored in uppercase (e.g. `USD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = RatesError;

    /// Trims surrounding whitespace, requires exactly three ASCII letters and
    /// normalizes them to uppercase.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RatesError::InvalidCurrency(raw.to_string()));
        }
        Ok(CurrencyCode(trimmed.to_ascii_uppercase()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_uppercase() {
        let code: CurrencyCode = " eUr\n".parse().unwrap();
        assert_eq!(code.as_str(), "EUR");
        assert_eq!(code.to_string(), "EUR");
    }

    #[test]
    fn rejects_wrong_shape() {
        for raw in ["", "US", "USDT", "U5D", "дол"] {
            assert!(
                matches!(raw.parse::<CurrencyCode>(), Err(RatesError::InvalidCurrency(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
