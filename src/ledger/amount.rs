use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// How strictly monetary input is validated.
///
/// The strict policy caps amounts at two fractional digits; the lax policy
/// only checks the sign. Carried in [`TrackerConfig`](crate::config::TrackerConfig)
/// so the choice is explicit configuration rather than an implied rule.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationPolicy {
    #[default]
    Strict,
    SignOnly,
}

impl ValidationPolicy {
    /// True when `value` carries more fractional digits than the policy allows.
    pub fn rejects_precision(&self, value: f64) -> bool {
        match self {
            ValidationPolicy::Strict => (value * 100.0).round() / 100.0 != value,
            ValidationPolicy::SignOnly => false,
        }
    }
}

/// Parses a raw form field into a decimal amount.
///
/// Sign and precision rules are applied later by the ledger; this only
/// rejects input that is not a finite number.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField("amount"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(trimmed.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_amount("12.25").unwrap(), 12.25);
        assert_eq!(parse_amount("  500 ").unwrap(), 500.0);
        assert_eq!(parse_amount("-5").unwrap(), -5.0);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(
            parse_amount("abc"),
            Err(ValidationError::NotANumber("abc".into()))
        );
        assert_eq!(parse_amount("   "), Err(ValidationError::EmptyField("amount")));
        assert!(matches!(
            parse_amount("NaN"),
            Err(ValidationError::NotANumber(_))
        ));
        assert!(matches!(
            parse_amount("inf"),
            Err(ValidationError::NotANumber(_))
        ));
    }

    #[test]
    fn strict_policy_caps_two_decimal_places() {
        let strict = ValidationPolicy::Strict;
        assert!(strict.rejects_precision(12.345));
        assert!(!strict.rejects_precision(12.34));
        assert!(!strict.rejects_precision(0.1));
        assert!(!strict.rejects_precision(450.0));
    }

    #[test]
    fn sign_only_policy_ignores_precision() {
        assert!(!ValidationPolicy::SignOnly.rejects_precision(12.345));
    }
}
