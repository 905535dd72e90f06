//! Money amounts as the platform represents them (integer cent amounts).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the currency's smallest unit.
///
/// The platform exchanges prices as `{ "currencyCode": "EUR", "centAmount": 1999 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
    /// Amount in cents.
    pub cent_amount: i64,
}

impl Money {
    /// Create an amount from cents.
    #[must_use]
    pub const fn from_cents(cent_amount: i64, currency_code: CurrencyCode) -> Self {
        Self {
            currency_code,
            cent_amount,
        }
    }

    /// Create a EUR amount from cents.
    #[must_use]
    pub const fn eur(cent_amount: i64) -> Self {
        Self::from_cents(cent_amount, CurrencyCode::EUR)
    }

    /// Amount in the currency's standard unit (e.g., euros, not cents).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.cent_amount, 2)
    }

    /// Return a copy with `cents` added.
    #[must_use]
    pub const fn plus_cents(self, cents: i64) -> Self {
        Self::from_cents(self.cent_amount + cents, self.currency_code)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {:?}", self.amount(), self.currency_code)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EUR,
    USD,
    GBP,
    CHF,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_money_wire_format() {
        let json = serde_json::to_value(Money::eur(1999)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"currencyCode": "EUR", "centAmount": 1999})
        );
    }

    #[test]
    fn test_money_amount_and_display() {
        let price = Money::eur(1599).plus_cents(500);
        assert_eq!(price.cent_amount, 2099);
        assert_eq!(price.amount(), Decimal::new(2099, 2));
        assert_eq!(price.to_string(), "20.99 EUR");
    }
}
