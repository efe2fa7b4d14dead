//! FHIR `decimal` with preserved lexical precision.

use crate::primitive::{PrimitiveError, PrimitiveValue};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// A decimal that remembers its scale: `100.0` stays `100.0` and `10.00`
/// stays `10.00` on the way back out.
///
/// Equality is numeric (`1.0 == 1.00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FhirDecimal(Decimal);

impl FhirDecimal {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Number of digits after the decimal point as written.
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl From<Decimal> for FhirDecimal {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for FhirDecimal {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl FromStr for FhirDecimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(['e', 'E']) {
            Decimal::from_scientific(s).map(Self)
        } else {
            Decimal::from_str_exact(s).map(Self)
        }
    }
}

impl fmt::Display for FhirDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PrimitiveValue for FhirDecimal {
    const TYPE_NAME: &'static str = "decimal";

    fn from_json(value: &Value) -> Result<Self, PrimitiveError> {
        match value {
            // With `arbitrary_precision` this is the literal as written.
            Value::Number(n) => {
                let text = n.to_string();
                text.parse()
                    .map_err(|err| PrimitiveError::malformed(format!("'{text}': {err}")))
            }
            other => Err(PrimitiveError::unexpected("a number", other)),
        }
    }

    fn to_json(&self) -> Value {
        let number = serde_json::from_str::<Number>(&self.0.to_string())
            .expect("Decimal displays as a JSON number");
        Value::Number(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> FhirDecimal {
        let value: Value = serde_json::from_str(text).unwrap();
        FhirDecimal::from_json(&value).unwrap()
    }

    #[test]
    fn keeps_trailing_zeros() {
        for literal in ["100.0", "10.00", "135.57", "0.001", "-2.50", "7"] {
            let decimal = decode(literal);
            assert_eq!(decimal.to_string(), literal);
            assert_eq!(serde_json::to_string(&decimal.to_json()).unwrap(), literal);
        }
    }

    #[test]
    fn numeric_equality_ignores_scale() {
        assert_eq!(decode("1.0"), decode("1.00"));
        assert_eq!(decode("100.0").scale(), 1);
        assert_eq!(decode("10.00").to_f64(), Some(10.0));
    }

    #[test]
    fn exponent_notation_is_accepted() {
        assert_eq!(decode("1.5e2").value(), Decimal::from(150));
    }

    #[test]
    fn extreme_values_encode_as_numbers() {
        for value in [Decimal::MAX, Decimal::MIN, Decimal::new(1, 28)] {
            let encoded = FhirDecimal::new(value).to_json();
            assert!(encoded.is_number());
            assert_eq!(encoded.to_string(), value.to_string());
        }
    }

    #[test]
    fn scale_above_28_is_rejected() {
        let value: Value = serde_json::from_str("0.000000000000000000000000000001").unwrap();
        assert!(matches!(
            FhirDecimal::from_json(&value),
            Err(PrimitiveError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_strings() {
        assert!(FhirDecimal::from_json(&Value::String("1.0".into())).is_err());
    }
}
