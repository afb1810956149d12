//! The percolation grid.
//!
//! Connectivity is tracked in two independent union-find views over the same
//! site indices:
//!
//! | view     | virtual node it may contain | answers                |
//! |----------|-----------------------------|------------------------|
//! | `top`    | [`TOP_VIRTUAL`]             | is this site full?     |
//! | `bottom` | `N² + 1`                    | does this site drain?  |
//!
//! An ordinary open neighbor is unioned into both views. A virtual node is
//! unioned only into its own view, so a path through the bottom boundary can
//! never make a site look full.

use crate::{Boundary, Error, Neighbor, Neighbors, Result, Site, WeightedQuickUnion, TOP_VIRTUAL, VIRTUAL_NODES};

/// N-by-N site percolation system.
#[derive(Debug, Clone)]
pub struct Percolation {
    size: usize,
    /// Indexed by linear site index; slots 0 and N² + 1 stay `false`
    open: Vec<bool>,
    top: WeightedQuickUnion,
    bottom: WeightedQuickUnion,
    open_count: usize,
    percolates: bool,
}

impl Percolation {
    /// Create an N-by-N grid with every site blocked.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument(format!(
                "grid size must be positive, got {}",
                size
            )));
        }
        let slots = size
            .checked_mul(size)
            .and_then(|sites| sites.checked_add(VIRTUAL_NODES))
            .ok_or_else(|| Error::InvalidArgument(format!("grid size {} is too large", size)))?;

        Ok(Self {
            size,
            open: vec![false; slots],
            top: WeightedQuickUnion::new(slots),
            bottom: WeightedQuickUnion::new(slots),
            open_count: 0,
            percolates: false,
        })
    }

    /// Create a grid from a signed size, rejecting zero and negatives alike.
    pub fn try_from_signed(size: i64) -> Result<Self> {
        let size = usize::try_from(size).map_err(|_| {
            Error::InvalidArgument(format!("grid size must be positive, got {}", size))
        })?;
        Self::new(size)
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Open site `(row, col)` if it is not open already.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.open_site(Site::new(row, col))
    }

    /// Is site `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.is_open_site(Site::new(row, col))
    }

    /// Is site `(row, col)` connected to the top row through open sites?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.is_full_site(Site::new(row, col))
    }

    /// Does some open path join the top row to the bottom row?
    pub fn percolates(&self) -> bool {
        self.percolates
    }

    /// Open a site. Bounds are checked before anything is touched, and
    /// reopening an open site changes nothing.
    pub fn open_site(&mut self, site: Site) -> Result<()> {
        let index = site.checked_index(self.size)?;
        if self.open[index] {
            return Ok(());
        }

        self.open[index] = true;
        self.open_count += 1;

        let bottom_virtual = Site::bottom_virtual(self.size);
        for neighbor in Neighbors::new(self.size).of(site).into_iter().flatten() {
            match neighbor {
                Neighbor::Site(other) => {
                    let other = other.index(self.size);
                    if self.open[other] {
                        self.top.union(index, other);
                        self.bottom.union(index, other);
                    }
                }
                Neighbor::Boundary(Boundary::Top) => self.top.union(index, TOP_VIRTUAL),
                Neighbor::Boundary(Boundary::Bottom) => self.bottom.union(index, bottom_virtual),
            }
        }

        if !self.percolates
            && self.top.connected(index, TOP_VIRTUAL)
            && self.bottom.connected(index, bottom_virtual)
        {
            self.percolates = true;
        }

        Ok(())
    }

    /// Typed-coordinate form of [`Percolation::is_open`].
    pub fn is_open_site(&self, site: Site) -> Result<bool> {
        let index = site.checked_index(self.size)?;
        Ok(self.open[index])
    }

    /// Typed-coordinate form of [`Percolation::is_full`].
    ///
    /// Takes `&mut self` because lookups compress union-find paths.
    pub fn is_full_site(&mut self, site: Site) -> Result<bool> {
        let index = site.checked_index(self.size)?;
        Ok(self.top.connected(index, TOP_VIRTUAL))
    }
}
