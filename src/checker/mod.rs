pub mod config;
mod metrics;

#[cfg(test)]
mod test;

use crate::checker::config::{CheckerConfig, SecondaryValidator};
use crate::checker::metrics::Metrics;
use crate::{TaxCode, TaxCodeError};
use rayon::prelude::*;

/// Checks tax codes with the configured validator and reports the outcome of every check
/// through the `metrics` facade.
///
/// Metric handles are registered when the checker is built, so the recorder must be installed
/// before that.
pub struct TaxCodeChecker {
    validator: SecondaryValidator,
    parallel_batch_threshold: usize,
    metrics: Metrics,
}

impl TaxCodeChecker {
    pub fn new(config: &CheckerConfig) -> Self {
        TaxCodeChecker {
            validator: config.validator.clone(),
            parallel_batch_threshold: config.parallel_batch_threshold,
            metrics: Metrics::new(&config.labels),
        }
    }

    /// Same answer as [crate::is_valid_tax_code].
    pub fn check(&self, candidate: Option<&str>) -> bool {
        self.explain(candidate).is_ok()
    }

    pub fn explain(&self, candidate: Option<&str>) -> Result<TaxCode, TaxCodeError> {
        self.metrics.checks.increment(1);

        let result = match candidate {
            Some(candidate) => self.validator.explain(candidate),
            None => Err(TaxCodeError::Missing),
        };

        match &result {
            Ok(_) => self.metrics.accepted.increment(1),
            Err(err) => self.metrics.rejected(err.reason()).increment(1),
        }
        result
    }

    /// Checks every candidate. The returned vector is in the same order as `candidates`.
    pub fn check_batch(&self, candidates: &[&str]) -> Vec<bool> {
        if candidates.len() >= self.parallel_batch_threshold {
            candidates
                .par_iter()
                .map(|&candidate| self.check(Some(candidate)))
                .collect()
        } else {
            candidates
                .iter()
                .map(|&candidate| self.check(Some(candidate)))
                .collect()
        }
    }
}

impl Default for TaxCodeChecker {
    fn default() -> Self {
        TaxCodeChecker::new(&CheckerConfig::default())
    }
}
