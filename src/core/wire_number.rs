//! Serde adapter for pair fields that may hold non-finite bounds.
//!
//! JSON numbers cannot express infinities, so `±∞` and `NaN` travel as the
//! strings `"Infinity"`, `"-Infinity"` and `"NaN"`. Finite values stay numbers.
//! The top-level functions handle one optional pair; [`list`] handles point lists.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Pair;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Number(f64),
    Named(String),
}

impl WireNumber {
    fn encode(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else if value.is_nan() {
            Self::Named("NaN".to_owned())
        } else if value.is_sign_positive() {
            Self::Named("Infinity".to_owned())
        } else {
            Self::Named("-Infinity".to_owned())
        }
    }

    fn decode(self) -> Result<f64, String> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Named(name) => match name.as_str() {
                "Infinity" | "+Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(format!(
                    "expected a number or Infinity/-Infinity/NaN, got `{other}`"
                )),
            },
        }
    }
}

pub(crate) fn serialize<S: Serializer>(
    value: &Option<Pair>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    value
        .map(|[first, second]| [WireNumber::encode(first), WireNumber::encode(second)])
        .serialize(serializer)
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Pair>, D::Error> {
    let Some([first, second]) = Option::<[WireNumber; 2]>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let first = first.decode().map_err(D::Error::custom)?;
    let second = second.decode().map_err(D::Error::custom)?;
    Ok(Some([first, second]))
}

/// Same encoding for every pair of a point list.
pub(crate) mod list {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Pair, WireNumber};

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<Vec<Pair>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value
            .as_ref()
            .map(|points| {
                points
                    .iter()
                    .map(|&[x, y]| [WireNumber::encode(x), WireNumber::encode(y)])
                    .collect::<Vec<_>>()
            })
            .serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<Pair>>, D::Error> {
        let Some(points) = Option::<Vec<[WireNumber; 2]>>::deserialize(deserializer)? else {
            return Ok(None);
        };
        points
            .into_iter()
            .map(|[x, y]| {
                let x = x.decode().map_err(D::Error::custom)?;
                let y = y.decode().map_err(D::Error::custom)?;
                Ok([x, y])
            })
            .collect::<Result<Vec<_>, D::Error>>()
            .map(Some)
    }
}
