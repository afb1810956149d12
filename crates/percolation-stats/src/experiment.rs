//! Monte Carlo percolation experiment.
//!
//! Each trial opens random blocked sites of a fresh grid until it percolates
//! and records the fraction of sites open at that moment. No state survives
//! between trials.
//!
//! # Random streams
//!
//! A seeded experiment gives trial `i` its own `StdRng` seeded from
//! `(base_seed, i)`. Trials never share a generator, so the same seed yields
//! the same fractions whether trials run one after another or on the rayon
//! pool. [`PercolationStats::with_rng`] instead draws every trial from the one
//! generator it is handed, in order.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::sampling::run_trial;
use crate::stats::{confidence_interval, mean, stddev};
use crate::{ExperimentConfig, Result, SiteSampling};

/// Odd 64-bit constant (2⁶⁴ / φ) spreading trial indices across seed space.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed for one trial of a seeded experiment.
pub fn trial_seed(base_seed: u64, trial: usize) -> u64 {
    base_seed.wrapping_add((trial as u64).wrapping_add(1).wrapping_mul(SEED_STRIDE))
}

/// Per-trial thresholds of a finished experiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentResult {
    /// Side length N of each grid
    pub grid_size: usize,
    /// Base seed, absent when the caller supplied the generator
    pub seed: Option<u64>,
    /// Fraction of sites open at percolation, one per trial, in trial order
    pub fractions: Vec<f64>,
}

impl ExperimentResult {
    /// Number of trials.
    pub fn trials(&self) -> usize {
        self.fractions.len()
    }

    /// Sample mean of the threshold.
    pub fn mean(&self) -> f64 {
        mean(&self.fractions)
    }

    /// Sample standard deviation of the threshold.
    pub fn stddev(&self) -> f64 {
        stddev(&self.fractions)
    }

    /// Lower bound of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        confidence_interval(self.mean(), self.stddev(), self.trials()).0
    }

    /// Upper bound of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        confidence_interval(self.mean(), self.stddev(), self.trials()).1
    }
}

/// T independent percolation trials on N-by-N grids.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    result: ExperimentResult,
}

impl PercolationStats {
    /// Run T trials on N-by-N grids with an entropy-seeded generator.
    pub fn new(grid_size: usize, trials: usize) -> Result<Self> {
        Self::with_config(&ExperimentConfig::new(grid_size, trials))
    }

    /// Run T trials drawing every site from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(grid_size: usize, trials: usize, rng: &mut R) -> Result<Self> {
        let config = ExperimentConfig::new(grid_size, trials);
        config.validate()?;
        tracing::info!(
            "Running {} trials on {}x{} grid with caller-supplied generator",
            trials,
            grid_size,
            grid_size
        );

        let fractions = (0..trials)
            .map(|trial| threshold_fraction(trial, grid_size, config.sampling, &mut *rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::finish(ExperimentResult {
            grid_size,
            seed: None,
            fractions,
        }))
    }

    /// Run an experiment as configured.
    pub fn with_config(config: &ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(
            "Running {} trials on {}x{} grid (seed={}, sampling={}, parallel={})",
            config.trials,
            config.grid_size,
            config.grid_size,
            seed,
            config.sampling,
            config.parallel
        );

        let fractions = if config.parallel {
            run_parallel(config, seed)?
        } else {
            run_sequential(config, seed)?
        };

        Ok(Self::finish(ExperimentResult {
            grid_size: config.grid_size,
            seed: Some(seed),
            fractions,
        }))
    }

    fn finish(result: ExperimentResult) -> Self {
        tracing::info!(
            "Experiment complete: mean={:.6} stddev={:.6} over {} trials",
            result.mean(),
            result.stddev(),
            result.trials()
        );
        Self { result }
    }

    /// Side length N of each grid.
    pub fn grid_size(&self) -> usize {
        self.result.grid_size
    }

    /// Number of trials T.
    pub fn trials(&self) -> usize {
        self.result.trials()
    }

    /// Recorded thresholds in trial order.
    pub fn fractions(&self) -> &[f64] {
        &self.result.fractions
    }

    /// The full result.
    pub fn result(&self) -> &ExperimentResult {
        &self.result
    }

    /// Consume into the result.
    pub fn into_result(self) -> ExperimentResult {
        self.result
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.result.mean()
    }

    /// Sample standard deviation of the percolation threshold.
    pub fn stddev(&self) -> f64 {
        self.result.stddev()
    }

    /// Lower bound of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.result.confidence_lo()
    }

    /// Upper bound of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.result.confidence_hi()
    }
}

/// One trial, reported as the fraction of sites open at percolation.
fn threshold_fraction<R: Rng + ?Sized>(
    trial: usize,
    grid_size: usize,
    sampling: SiteSampling,
    rng: &mut R,
) -> Result<f64> {
    let opened = run_trial(grid_size, sampling, rng)?;
    let sites = grid_size * grid_size;
    let fraction = opened as f64 / sites as f64;
    tracing::debug!("Trial {} percolated after {} of {} sites ({:.4})", trial, opened, sites, fraction);
    Ok(fraction)
}

fn seeded_trial(config: &ExperimentConfig, seed: u64, trial: usize) -> Result<f64> {
    let mut rng = StdRng::seed_from_u64(trial_seed(seed, trial));
    threshold_fraction(trial, config.grid_size, config.sampling, &mut rng)
}

fn run_sequential(config: &ExperimentConfig, seed: u64) -> Result<Vec<f64>> {
    (0..config.trials)
        .map(|trial| seeded_trial(config, seed, trial))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_parallel(config: &ExperimentConfig, seed: u64) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    (0..config.trials)
        .into_par_iter()
        .map(|trial| seeded_trial(config, seed, trial))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(config: &ExperimentConfig, seed: u64) -> Result<Vec<f64>> {
    tracing::warn!("Parallel trials requested but the `parallel` feature is disabled; running sequentially");
    run_sequential(config, seed)
}
