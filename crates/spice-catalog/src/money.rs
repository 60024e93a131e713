//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that price comparisons in
//! the query engine are exact.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    NPR,
    INR,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "NPR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::NPR => "NPR",
            Currency::INR => "INR",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::NPR => "\u{20a8}",
            Currency::INR => "\u{20b9}",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "NPR" => Some(Currency::NPR),
            "INR" => Some(Currency::INR),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use spice_catalog::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Exact conversion from a decimal amount. `None` when the amount is not
    /// finite or has digits below the currency's smallest unit.
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let scaled = amount * 10_i64.pow(currency.decimal_places()) as f64;
        let rounded = scaled.round();
        // Decimal inputs like 19.99 scale to 1998.9999999999998.
        if (scaled - rounded).abs() > 1e-6 || rounded.abs() > i64::MAX as f64 {
            return None;
        }
        Some(Self::new(rounded as i64, currency))
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Convert into another currency at a fixed rate (units of `to` per unit of `self`).
    pub fn convert(&self, to: Currency, rate: f64) -> Money {
        Money::from_decimal(self.to_decimal() * rate, to)
    }

    /// Compare amounts, ignoring currency.
    ///
    /// Callers are expected to hold amounts of a single currency, as the
    /// catalog loader guarantees.
    pub fn cmp_amount(&self, other: &Money) -> Ordering {
        self.amount_cents.cmp(&other.amount_cents)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Format with thousand separators (e.g., "₨15,960.00").
    pub fn display_grouped(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let whole = abs / divisor as u64;
        let fraction = abs % divisor as u64;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if places == 0 {
            format!("{}{}{}", sign, self.currency.symbol(), grouped)
        } else {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency.symbol(),
                grouped,
                fraction,
                width = places as usize
            )
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(120.0, Currency::USD);
        assert_eq!(m.amount_cents, 12000);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_display_grouped() {
        assert_eq!(
            Money::new(1_596_000, Currency::NPR).display_grouped(),
            "\u{20a8}15,960.00"
        );
        assert_eq!(Money::new(99_905, Currency::USD).display_grouped(), "$999.05");
        assert_eq!(
            Money::new(123_456_789, Currency::USD).display_grouped(),
            "$1,234,567.89"
        );
        assert_eq!(Money::new(-150_000, Currency::USD).display_grouped(), "-$1,500.00");
    }

    #[test]
    fn test_money_convert() {
        let usd = Money::from_decimal(120.0, Currency::USD);
        let npr = usd.convert(Currency::NPR, 133.0);
        assert_eq!(npr.currency, Currency::NPR);
        assert_eq!(npr.amount_cents, 1_596_000);
    }

    #[test]
    fn test_money_try_from_decimal() {
        assert_eq!(Money::try_from_decimal(19.99, Currency::USD).map(|m| m.amount_cents), Some(1999));
        assert_eq!(Money::try_from_decimal(160.0, Currency::USD).map(|m| m.amount_cents), Some(16000));
        assert_eq!(Money::try_from_decimal(0.004, Currency::USD), None);
        assert_eq!(Money::try_from_decimal(1.001, Currency::USD), None);
        assert_eq!(Money::try_from_decimal(f64::NAN, Currency::USD), None);
        assert!(!Money::new(0, Currency::USD).is_positive());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("npr"), Some(Currency::NPR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
