//! Site coordinates and their linear union-find indices.
//!
//! Sites use 1-based `(row, col)` coordinates. Row 1 is the top of the grid,
//! row N the bottom. The linear index of a site is `N·(row − 1) + col`, which
//! packs the N² sites into `1..=N²` and leaves `0` and `N² + 1` free for the
//! two virtual boundary nodes.

use crate::{Error, Result};

/// Union-find index of the virtual top node.
pub const TOP_VIRTUAL: usize = 0;

/// A position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    /// Row, 1 at the top
    pub row: usize,
    /// Column, 1 at the left
    pub col: usize,
}

impl Site {
    /// Top-left corner.
    pub const ORIGIN: Self = Self { row: 1, col: 1 };

    /// Create a new site. No bounds are checked until it meets a grid.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the site lies inside an N-by-N grid.
    pub const fn in_bounds(&self, size: usize) -> bool {
        self.row >= 1 && self.row <= size && self.col >= 1 && self.col <= size
    }

    /// Check bounds, returning the linear index on success.
    pub fn checked_index(&self, size: usize) -> Result<usize> {
        if self.in_bounds(size) {
            Ok(self.index(size))
        } else {
            Err(Error::IndexOutOfRange {
                row: self.row,
                col: self.col,
                size,
            })
        }
    }

    /// Linear index in `1..=size²`. The site must be in bounds.
    #[inline]
    pub const fn index(&self, size: usize) -> usize {
        size * (self.row - 1) + self.col
    }

    /// Inverse of [`Site::index`] for indices in `1..=size²`.
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: (index - 1) / size + 1,
            col: (index - 1) % size + 1,
        }
    }

    /// Union-find index of the virtual bottom node for an N-by-N grid.
    #[inline]
    pub const fn bottom_virtual(size: usize) -> usize {
        size * size + 1
    }

    /// Whether the site touches the top boundary.
    pub const fn is_top_row(&self) -> bool {
        self.row == 1
    }

    /// Whether the site touches the bottom boundary of an N-by-N grid.
    pub const fn is_bottom_row(&self, size: usize) -> bool {
        self.row == size
    }

    /// Every site of an N-by-N grid in row-major order.
    pub fn all(size: usize) -> impl Iterator<Item = Self> {
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Self { row, col }))
    }
}

impl From<(usize, usize)> for Site {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
