use std::{fmt, sync::Arc};

/// Signature of a caller-supplied label formatter.
pub type FormatFn = dyn Fn(f64) -> String + Send + Sync;

/// How the gauge label turns the first datum's value into text.
#[derive(Clone, Default)]
pub enum LabelFormatter {
    /// `ceil(value * 100)` followed by `%`.
    #[default]
    Default,
    /// Every `{value}` is replaced with the raw value.
    Template(String),
    Function(Arc<FormatFn>),
}

impl LabelFormatter {
    pub fn function(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(f))
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => percent_label(value),
            Self::Template(t) => t.replace("{value}", &value.to_string()),
            Self::Function(f) => f(value),
        }
    }
}

/// `0.4215` -> `"43%"`. The product is rounded to 1e-9 first so `0.3 * 100` stays `30`.
pub fn percent_label(value: f64) -> String {
    let pct = (value * 100.0 * 1e9).round() / 1e9;
    format!("{}%", pct.ceil())
}

impl fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for LabelFormatter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(t) => Self::Template(t),
            None => Self::Default,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/label/format.rs"]
mod tests;
