use crate::checker::TaxCodeChecker;
use crate::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

const DEFAULT_PARALLEL_BATCH_THRESHOLD: usize = 256;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CheckerConfig {
    #[serde(default)]
    pub validator: SecondaryValidator,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
    /// Batches with at least this many candidates are checked on the rayon thread pool.
    #[serde(default = "default_parallel_batch_threshold")]
    pub parallel_batch_threshold: usize,
}

fn default_parallel_batch_threshold() -> usize {
    DEFAULT_PARALLEL_BATCH_THRESHOLD
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            validator: SecondaryValidator::default(),
            labels: Labels::empty(),
            parallel_batch_threshold: DEFAULT_PARALLEL_BATCH_THRESHOLD,
        }
    }
}

impl CheckerConfig {
    pub fn validator(&self, validator: SecondaryValidator) -> Self {
        self.mutate_clone(|x| x.validator = validator)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn parallel_batch_threshold(&self, parallel_batch_threshold: usize) -> Self {
        self.mutate_clone(|x| x.parallel_batch_threshold = parallel_batch_threshold)
    }

    pub fn build(&self) -> TaxCodeChecker {
        TaxCodeChecker::new(self)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    #[default]
    ItalianTaxCodeChecksum,
}
