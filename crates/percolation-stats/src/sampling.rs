//! Choosing the next blocked site to open.
//!
//! Both strategies pick uniformly among the sites that are still blocked, so
//! the distribution of thresholds is the same. They consume the random stream
//! differently and therefore give different sequences for the same seed.
//!
//! - [`SiteSampling::Rejection`] draws any site and redraws while it is open.
//!   Expected draws per pick are `N² / blocked`, which grows without bound as
//!   the grid fills.
//! - [`SiteSampling::ShrinkingPool`] keeps the blocked sites in a vector and
//!   removes the chosen one with `swap_remove`, one draw per pick.

use std::str::FromStr;

use percolation_grid::{Percolation, Site};
use rand::Rng;

use crate::{Error, Result};

/// Strategy for picking the next site to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SiteSampling {
    /// Uniform draw over the whole grid, redrawn until blocked
    #[default]
    Rejection,
    /// Uniform draw over an explicit list of blocked sites
    ShrinkingPool,
}

impl FromStr for SiteSampling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rejection" => Ok(Self::Rejection),
            "pool" | "shrinking_pool" | "shrinking-pool" => Ok(Self::ShrinkingPool),
            other => Err(Error::InvalidArgument(format!(
                "unknown sampling strategy {:?} (expected \"rejection\" or \"pool\")",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SiteSampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejection => write!(f, "rejection"),
            Self::ShrinkingPool => write!(f, "pool"),
        }
    }
}

/// Uniform site in `[1, size] × [1, size]`.
fn uniform_site<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Site {
    Site::new(rng.gen_range(0..size) + 1, rng.gen_range(0..size) + 1)
}

/// Redraw until the site is blocked. The grid must have a blocked site.
fn reject_until_blocked<R: Rng + ?Sized>(grid: &Percolation, rng: &mut R) -> Result<Site> {
    loop {
        let site = uniform_site(grid.size(), &mut *rng);
        if !grid.is_open_site(site)? {
            return Ok(site);
        }
    }
}

/// Blocked sites of a grid that only this pool opens.
#[derive(Debug, Clone)]
pub struct BlockedPool {
    blocked: Vec<Site>,
}

impl BlockedPool {
    /// Every site of a fresh N-by-N grid.
    pub fn new(size: usize) -> Self {
        Self {
            blocked: Site::all(size).collect(),
        }
    }

    /// Sites still blocked.
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Whether every site has been taken.
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Remove and return a uniformly chosen blocked site.
    pub fn take<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Site> {
        if self.blocked.is_empty() {
            return None;
        }
        let i = rng.gen_range(0..self.blocked.len());
        Some(self.blocked.swap_remove(i))
    }
}

/// Open random blocked sites of a fresh grid until it percolates.
///
/// Returns the number of sites opened.
pub fn run_trial<R: Rng + ?Sized>(size: usize, sampling: SiteSampling, rng: &mut R) -> Result<usize> {
    let mut grid = Percolation::new(size)?;

    match sampling {
        SiteSampling::Rejection => {
            while !grid.percolates() {
                let site = reject_until_blocked(&grid, &mut *rng)?;
                grid.open_site(site)?;
            }
        }
        SiteSampling::ShrinkingPool => {
            let mut pool = BlockedPool::new(size);
            while !grid.percolates() {
                // A full grid always percolates, so the pool cannot run dry first
                let Some(site) = pool.take(&mut *rng) else { break };
                grid.open_site(site)?;
            }
        }
    }

    Ok(grid.number_of_open_sites())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn parse_strategy_names() {
        assert_eq!("rejection".parse::<SiteSampling>().unwrap(), SiteSampling::Rejection);
        assert_eq!("POOL".parse::<SiteSampling>().unwrap(), SiteSampling::ShrinkingPool);
        assert_eq!(
            "shrinking-pool".parse::<SiteSampling>().unwrap(),
            SiteSampling::ShrinkingPool
        );
        assert!(matches!(
            "bogus".parse::<SiteSampling>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn display_parses_back() {
        for sampling in [SiteSampling::Rejection, SiteSampling::ShrinkingPool] {
            assert_eq!(sampling.to_string().parse::<SiteSampling>().unwrap(), sampling);
        }
    }

    #[test]
    fn uniform_site_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            assert!(uniform_site(5, &mut rng).in_bounds(5));
        }
    }

    #[test]
    fn rejection_skips_open_sites() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = Percolation::new(3).unwrap();
        for site in Site::all(3).filter(|s| *s != Site::new(2, 2)) {
            grid.open_site(site).unwrap();
        }
        for _ in 0..20 {
            assert_eq!(reject_until_blocked(&grid, &mut rng).unwrap(), Site::new(2, 2));
        }
    }

    #[test]
    fn pool_yields_every_site_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = BlockedPool::new(4);
        assert_eq!(pool.len(), 16);

        let mut taken = Vec::new();
        while let Some(site) = pool.take(&mut rng) {
            taken.push(site);
        }
        assert!(pool.is_empty());

        taken.sort();
        assert_eq!(taken, Site::all(4).collect::<Vec<_>>());
    }

    #[test]
    fn single_site_trial_opens_one_site() {
        let mut rng = StdRng::seed_from_u64(4);
        for sampling in [SiteSampling::Rejection, SiteSampling::ShrinkingPool] {
            assert_eq!(run_trial(1, sampling, &mut rng).unwrap(), 1);
        }
    }

    #[test]
    fn trial_needs_at_least_one_site_per_row() {
        let mut rng = StdRng::seed_from_u64(5);
        for sampling in [SiteSampling::Rejection, SiteSampling::ShrinkingPool] {
            for _ in 0..20 {
                let opened = run_trial(6, sampling, &mut rng).unwrap();
                assert!((6..=36).contains(&opened), "opened {}", opened);
            }
        }
    }

    #[test]
    fn trial_rejects_zero_size() {
        let mut rng = StdRng::seed_from_u64(6);
        assert!(matches!(
            run_trial(0, SiteSampling::Rejection, &mut rng),
            Err(Error::Grid(percolation_grid::Error::InvalidArgument(_)))
        ));
    }
}
