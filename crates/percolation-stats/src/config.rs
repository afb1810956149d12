//! Experiment configuration.

use crate::{Error, Result, SiteSampling};

/// Configuration for a Monte Carlo experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Side length N of each grid
    pub grid_size: usize,
    /// Number of independent trials T
    pub trials: usize,
    /// Base seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// How blocked sites are chosen
    pub sampling: SiteSampling,
    /// Run trials on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            grid_size: 200,
            trials: 100,
            seed: None,
            sampling: SiteSampling::Rejection,
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    /// Configuration for T trials on N-by-N grids.
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            grid_size,
            trials,
            ..Self::default()
        }
    }

    /// Configuration from signed arguments, rejecting zero and negatives.
    pub fn from_signed(grid_size: i64, trials: i64) -> Result<Self> {
        Ok(Self::new(
            positive(grid_size, "grid size")?,
            positive(trials, "trial count")?,
        ))
    }

    /// Fix the base seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose the site sampling strategy.
    pub fn with_sampling(mut self, sampling: SiteSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Run trials in parallel.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that both grid size and trial count are positive.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidArgument("grid size must be positive, got 0".into()));
        }
        if self.trials == 0 {
            return Err(Error::InvalidArgument("trial count must be positive, got 0".into()));
        }
        Ok(())
    }
}

fn positive(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| Error::InvalidArgument(format!("{} must be positive, got {}", what, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = ExperimentConfig::new(50, 30)
            .with_seed(9)
            .with_sampling(SiteSampling::ShrinkingPool)
            .parallel(true);

        assert_eq!(config.grid_size, 50);
        assert_eq!(config.trials, 30);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.sampling, SiteSampling::ShrinkingPool);
        assert!(config.parallel);
    }

    #[test]
    fn default_is_valid() {
        assert!(ExperimentConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_arguments_rejected() {
        assert!(matches!(
            ExperimentConfig::new(0, 10).validate(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            ExperimentConfig::new(10, 0).validate(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn signed_arguments() {
        assert_eq!(
            ExperimentConfig::from_signed(20, 5).unwrap(),
            ExperimentConfig::new(20, 5)
        );
        for (n, t) in [(-3, 5), (5, -1), (0, 5), (5, 0)] {
            assert!(
                matches!(ExperimentConfig::from_signed(n, t), Err(Error::InvalidArgument(_))),
                "({}, {}) should be rejected",
                n,
                t
            );
        }
    }
}
