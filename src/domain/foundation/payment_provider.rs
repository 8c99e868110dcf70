//! PaymentProviderKind enum identifying the payment provider of a purchase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Supported payment providers.
///
/// Closed enum: unrecognized tags are rejected at the boundary rather
/// than stored as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentProviderKind {
    Paypal,
}

impl PaymentProviderKind {
    /// Returns the wire tag for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentProviderKind::Paypal => "paypal",
        }
    }
}

impl fmt::Display for PaymentProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentProviderKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paypal" => Ok(PaymentProviderKind::Paypal),
            other => Err(ValidationError::invalid_format(
                "payment_provider",
                format!("unknown provider '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_serializes_to_lowercase_tag() {
        let json = serde_json::to_string(&PaymentProviderKind::Paypal).unwrap();
        assert_eq!(json, "\"paypal\"");
    }

    #[test]
    fn provider_kind_deserializes_from_tag() {
        let kind: PaymentProviderKind = serde_json::from_str("\"paypal\"").unwrap();
        assert_eq!(kind, PaymentProviderKind::Paypal);
    }

    #[test]
    fn provider_kind_rejects_unknown_tag() {
        let result: Result<PaymentProviderKind, _> = serde_json::from_str("\"stripe\"");
        assert!(result.is_err());
    }

    #[test]
    fn provider_kind_parses_from_str() {
        assert_eq!(
            "paypal".parse::<PaymentProviderKind>().unwrap(),
            PaymentProviderKind::Paypal
        );
        assert!("venmo".parse::<PaymentProviderKind>().is_err());
    }

    #[test]
    fn provider_kind_displays_tag() {
        assert_eq!(format!("{}", PaymentProviderKind::Paypal), "paypal");
    }
}
