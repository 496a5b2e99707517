//! The result of evaluating one factor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open key-value payload attached to a [`FactorResult`].
///
/// Diagnostics and display only. The aggregation engine never reads it, so
/// its shape is not validated beyond being a JSON object.
pub type Meta = serde_json::Map<String, Value>;

/// Default `max_score` when a factor does not declare one.
pub const DEFAULT_MAX_SCORE: f64 = 10.0;

fn default_max_score() -> f64 {
    DEFAULT_MAX_SCORE
}

/// Output of one factor evaluation.
///
/// Constructed fresh on each [`Factor::evaluate`](crate::Factor::evaluate)
/// call and immutable once returned; no state persists across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorResult {
    /// Factor identifier, e.g. `"financial"`.
    pub name: String,
    /// Score on the factor's local scale.
    pub score: f64,
    /// Upper bound of this factor's scale; used to normalize across factors.
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    /// Relative importance in the composite; not required to sum to 1.
    #[serde(default)]
    pub weight: f64,
    /// Free-form explanatory values.
    #[serde(default)]
    pub meta: Meta,
}

impl FactorResult {
    /// Create a result with the default 0..10 scale and zero weight.
    #[must_use]
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
            max_score: DEFAULT_MAX_SCORE,
            weight: 0.0,
            meta: Meta::new(),
        }
    }

    /// Set the scale ceiling.
    #[must_use]
    pub const fn with_max_score(mut self, max_score: f64) -> Self {
        self.max_score = max_score;
        self
    }

    /// Set the aggregation weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Attach one meta entry.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Build the fail-soft result for a factor whose data acquisition or
    /// computation failed: zero score on the declared scale, with the
    /// failure described under `meta.error`.
    #[must_use]
    pub fn failed(
        name: impl Into<String>,
        max_score: f64,
        weight: f64,
        error: impl std::fmt::Display,
    ) -> Self {
        Self::new(name, 0.0)
            .with_max_score(max_score)
            .with_weight(weight)
            .with_meta("error", error.to_string())
    }

    /// Whether this result reports a contained failure.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.meta.contains_key("error")
    }
}
