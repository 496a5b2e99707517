//! Factor trait: the capability interface every scoring rule implements.
//!
//! A factor is constructed for one instrument (together with a handle to an
//! [`InstrumentData`](crate::InstrumentData) source) and exposes a single
//! infallible operation, [`Factor::evaluate`]. The fail-soft contract lives
//! here: inner computation returns a `Result`, and `evaluate` converts any
//! error into a zero-score [`FactorResult`] carrying `meta.error`, so one
//! degraded factor can never abort the rest of a scoring run.

use crate::{FactorResult, Result};

/// An independent scoring rule producing a bounded assessment of one
/// instrument along one dimension.
///
/// Implementations must be thread-safe (`Send + Sync`); evaluations of
/// different factors are independent and may run concurrently.
pub trait Factor: Send + Sync {
    /// Unique factor identifier, e.g. `"daily_change"`.
    fn name(&self) -> &str;

    /// Human-readable one-line description.
    fn description(&self) -> &str;

    /// Upper bound of this factor's score scale.
    fn max_score(&self) -> f64;

    /// Relative importance in the composite score.
    fn weight(&self) -> f64;

    /// Fallible scoring pass: pull data, compute, build the result.
    ///
    /// # Errors
    ///
    /// Returns an error on any data-acquisition or data-shape failure.
    /// Callers should prefer [`Factor::evaluate`], which contains the error.
    fn compute(&self) -> Result<FactorResult>;

    /// Evaluate the factor, never propagating a failure.
    ///
    /// Any error from [`Factor::compute`] becomes a [`FactorResult`] with
    /// `score = 0`, the declared [`Factor::max_score`], and the failure text
    /// under `meta.error`.
    fn evaluate(&self) -> FactorResult {
        match self.compute() {
            Ok(result) => result,
            Err(e) => FactorResult::failed(self.name(), self.max_score(), self.weight(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BolsaError;

    struct HealthyFactor;

    impl Factor for HealthyFactor {
        fn name(&self) -> &str {
            "healthy"
        }

        fn description(&self) -> &str {
            "always succeeds"
        }

        fn max_score(&self) -> f64 {
            10.0
        }

        fn weight(&self) -> f64 {
            1.0
        }

        fn compute(&self) -> Result<FactorResult> {
            Ok(FactorResult::new(self.name(), 6.0)
                .with_max_score(self.max_score())
                .with_weight(self.weight()))
        }
    }

    struct BrokenFactor;

    impl Factor for BrokenFactor {
        fn name(&self) -> &str {
            "broken"
        }

        fn description(&self) -> &str {
            "always fails"
        }

        fn max_score(&self) -> f64 {
            20.0
        }

        fn weight(&self) -> f64 {
            1.0
        }

        fn compute(&self) -> Result<FactorResult> {
            Err(BolsaError::DataUnavailable("upstream empty".to_string()))
        }
    }

    #[test]
    fn test_evaluate_passes_through_success() {
        let result = HealthyFactor.evaluate();
        assert_eq!(result.score, 6.0);
        assert!(!result.is_failed());
    }

    #[test]
    fn test_evaluate_contains_failure() {
        let result = BrokenFactor.evaluate();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.max_score, 20.0);
        assert_eq!(result.meta["error"], "Data unavailable: upstream empty");
    }

    #[test]
    fn test_factor_is_object_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn Factor>>();

        let factors: Vec<Box<dyn Factor>> = vec![Box::new(HealthyFactor), Box::new(BrokenFactor)];
        assert_eq!(factors.len(), 2);
    }
}
