use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of the lower bound inside a limit set.
pub const MIN: &str = "min";
/// Name of the upper bound inside a limit set.
pub const MAX: &str = "max";

/// One legal discrete state of a channel: the raw value and an optional display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl StateOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: Some(label.into()) }
    }

    #[must_use]
    pub fn unlabeled(value: impl Into<String>) -> Self {
        Self { value: value.into(), label: None }
    }
}

impl<V, L> From<(V, L)> for StateOption
where
    V: Into<String>,
    L: Into<String>,
{
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// Numeric bounds of a channel, keyed by the fixed names [`MIN`] and [`MAX`].
///
/// A missing side means no bound is asserted for it. Nothing checks that `min <= max`;
/// bounds are handed to the host exactly as they were set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
}

impl Limits {
    #[must_use]
    pub const fn new(min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn range(min: Decimal, max: Decimal) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    #[must_use]
    pub const fn at_least(min: Decimal) -> Self {
        Self { min: Some(min), max: None }
    }

    #[must_use]
    pub const fn at_most(max: Decimal) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// Looks a bound up by name. Names other than `min` and `max` never match.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Decimal> {
        match name {
            MIN => self.min,
            MAX => self.max,
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Collects `(name, bound)` pairs. Only `min` and `max` are read; the last pair for a
/// name wins and unknown names are dropped.
impl<K: AsRef<str>> FromIterator<(K, Decimal)> for Limits {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut limits, (name, bound)| {
            match name.as_ref() {
                MIN => limits.min = Some(bound),
                MAX => limits.max = Some(bound),
                _ => {},
            }
            limits
        })
    }
}

/// How a channel's value is presented and constrained by the host UI.
///
/// The default value is the empty description: no bounds, no step, no pattern,
/// writable, and no options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StateDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub read_only: bool,
    pub options: Vec<StateOption>,
}

impl StateDescription {
    #[must_use]
    pub const fn with_minimum(mut self, minimum: Decimal) -> Self {
        self.minimum = Some(minimum);
        self
    }

    #[must_use]
    pub const fn with_maximum(mut self, maximum: Decimal) -> Self {
        self.maximum = Some(maximum);
        self
    }

    #[must_use]
    pub const fn with_step(mut self, step: Decimal) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    #[must_use]
    pub fn with_options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<StateOption>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}
