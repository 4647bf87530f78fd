//! Decoding for MongoDB decimal fields
//!
//! The backend serializes money amounts in three shapes: a bare JSON number,
//! a numeric string, or the wrapped `{"$numberDecimal": "…"}` form. `Decimal`
//! accepts all three and rejects anything else.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;

/// A money amount decoded from any of the backend's decimal shapes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Decimal(f64);

impl Decimal {
    pub fn new(value: f64) -> Self {
        Decimal(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Decimal {
    /// Whole amounts print without a fraction, others with two places
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Number(f64),
    Wrapped {
        #[serde(rename = "$numberDecimal")]
        value: String,
    },
    Text(String),
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match DecimalRepr::deserialize(deserializer)? {
            DecimalRepr::Number(n) => n,
            DecimalRepr::Wrapped { value } | DecimalRepr::Text(value) => value
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid decimal value: {value:?}")))?,
        };

        Ok(Decimal(value))
    }
}
