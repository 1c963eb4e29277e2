//! Serde adapters for `f64` fields that may hold `NaN` or infinities.
//!
//! JSON has no non-finite numbers and `serde_json` writes them as `null`. These
//! adapters read that `null` back as `NaN`, so a lenient-mode report that carries
//! `NaN` samples survives a save/load cycle. Infinities come back as `NaN` too.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Sample {
//!     #[serde(with = "beam_core::nullable")]
//!     y: f64,
//! }
//!
//! let json = serde_json::to_string(&Sample { y: f64::NAN }).unwrap();
//! assert_eq!(json, r#"{"y":null}"#);
//! let back: Sample = serde_json::from_str(&json).unwrap();
//! assert!(back.y.is_nan());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Same mapping for a `Vec<f64>`
pub mod vec {
    use super::*;

    pub fn serialize<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mapped: Vec<Option<f64>> = values
            .iter()
            .map(|v| v.is_finite().then_some(*v))
            .collect();
        mapped.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }
}
