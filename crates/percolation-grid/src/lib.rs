//! Percolation Grid
//!
//! An N-by-N site percolation system with incremental connectivity queries.
//!
//! # Model
//!
//! Every site of the grid is either blocked or open. A site is *full* when an
//! open path of 4-connected sites joins it to the top row, and the system
//! *percolates* when some full site sits in the bottom row.
//!
//! Sites are addressed with 1-based `(row, col)` pairs and stored row-major at
//! linear indices `1..=N²`. Index `0` is the virtual top node and `N² + 1` the
//! virtual bottom node.
//!
//! # Backwash
//!
//! A single union-find holding both virtual nodes answers `percolates` cheaply
//! but, once the system percolates, reports every site joined to the bottom
//! row as full. [`Percolation`] keeps two independent views instead:
//!
//! - the top view only ever sees the virtual top node
//! - the bottom view only ever sees the virtual bottom node
//!
//! `is_full` consults the top view alone; percolation is latched when the site
//! just opened is reachable from both boundaries in their own views.

mod error;
mod grid;
mod neighbors;
mod site;
mod union_find;

pub use error::{Error, Result};
pub use grid::Percolation;
pub use neighbors::{Boundary, Neighbor, Neighbors};
pub use site::{Site, TOP_VIRTUAL};
pub use union_find::WeightedQuickUnion;

/// Neighbors of an interior site on a square lattice.
pub const LATTICE_NEIGHBORS: usize = 4;

/// Extra union-find slots beyond the N² sites: one per virtual boundary node.
pub const VIRTUAL_NODES: usize = 2;
