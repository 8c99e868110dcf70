//! Monetary amount value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A positive purchase amount in major currency units.
///
/// Wraps `rust_decimal::Decimal` so arithmetic stays exact. At most two
/// fraction digits are accepted; card networks settle in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an Amount, rejecting zero, negative, and sub-cent values.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::invalid_format(
                "amount",
                "must be greater than zero",
            ));
        }
        if value.normalize().scale() > 2 {
            return Err(ValidationError::invalid_format(
                "amount",
                "at most two decimal places",
            ));
        }
        Ok(Self(value))
    }

    /// Parses an Amount from its decimal string form, e.g. `"50.00"`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value: Decimal = input
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("amount", "not a decimal number"))?;
        Self::new(value)
    }

    /// Returns the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Renders the amount with exactly two fraction digits.
    ///
    /// Payment providers require the padded form: `50` becomes `"50.00"`.
    pub fn to_provider_string(&self) -> String {
        let mut value = self.0;
        value.rescale(2);
        value.to_string()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_provider_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_accepts_positive_value() {
        let amount = Amount::new(dec!(50.00)).unwrap();
        assert_eq!(amount.value(), dec!(50.00));
    }

    #[test]
    fn amount_rejects_zero() {
        assert!(Amount::new(Decimal::ZERO).is_err());
    }

    #[test]
    fn amount_rejects_negative_value() {
        assert!(Amount::new(dec!(-1.00)).is_err());
    }

    #[test]
    fn amount_rejects_sub_cent_precision() {
        let result = Amount::new(dec!(9.999));
        assert!(result.is_err());
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "amount"),
            _ => panic!("Expected InvalidFormat error"),
        }
    }

    #[test]
    fn amount_accepts_trailing_zeros_beyond_two_places() {
        // 49.9900 normalizes to 49.99
        let amount = Amount::new(dec!(49.9900)).unwrap();
        assert_eq!(amount.to_provider_string(), "49.99");
    }

    #[test]
    fn amount_parses_from_string() {
        let amount = Amount::parse("19.99").unwrap();
        assert_eq!(amount.value(), dec!(19.99));
    }

    #[test]
    fn amount_parse_rejects_garbage() {
        assert!(Amount::parse("not-a-number").is_err());
    }

    #[test]
    fn provider_string_pads_to_two_fraction_digits() {
        assert_eq!(Amount::new(dec!(50)).unwrap().to_provider_string(), "50.00");
        assert_eq!(Amount::new(dec!(9.5)).unwrap().to_provider_string(), "9.50");
        assert_eq!(Amount::new(dec!(49.99)).unwrap().to_provider_string(), "49.99");
    }

    #[test]
    fn amount_displays_provider_form() {
        let amount = Amount::new(dec!(120)).unwrap();
        assert_eq!(format!("{}", amount), "120.00");
    }
}
