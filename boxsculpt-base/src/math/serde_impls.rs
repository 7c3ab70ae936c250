#![allow(clippy::missing_inline_in_public_items)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::{Aab, Grid};

#[derive(Debug, Deserialize, Serialize)]
struct AabSer {
    lower: [f64; 3],
    upper: [f64; 3],
}

impl Serialize for Aab {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        AabSer {
            lower: self.lower_bounds_p().into(),
            upper: self.upper_bounds_p().into(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Aab {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let AabSer { lower, upper } = AabSer::deserialize(deserializer)?;
        Aab::try_from_lower_upper(lower.into(), upper.into()).map_err(serde::de::Error::custom)
    }
}

/// A [`Grid`] is written as its three dimensions.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let size = self.size();
        [size.width, size.height, size.depth].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [width, height, depth] = <[f64; 3]>::deserialize(deserializer)?;
        Grid::new(width, height, depth).map_err(serde::de::Error::custom)
    }
}
