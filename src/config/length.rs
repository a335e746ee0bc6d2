use std::{fmt, str::FromStr};

use crate::foundation::error::{LiquidError, LiquidResult};

/// A pixel value or a percentage of some base length chosen by the consumer.
///
/// Deserializes from a number (`12`, pixels) or a string (`"12"`, `"12px"`, `"12%"`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub fn resolve(self, base: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => p / 100.0 * base,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Self::Px(v) | Self::Percent(v) => v.is_finite(),
        }
    }
}

impl FromStr for Length {
    type Err = LiquidError;

    fn from_str(s: &str) -> LiquidResult<Self> {
        let s = s.trim();
        let (num, pct) = match s.strip_suffix('%') {
            Some(n) => (n, true),
            None => (s.strip_suffix("px").unwrap_or(s), false),
        };
        let v: f64 = num
            .trim()
            .parse()
            .map_err(|_| LiquidError::config(format!("invalid length \"{s}\"")))?;
        Ok(if pct { Self::Percent(v) } else { Self::Px(v) })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(Self::Px(v)),
            Repr::Str(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/length.rs"]
mod tests;
