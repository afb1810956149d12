//! 4-connected neighbor computation with boundary conditions.
//!
//! Every site has four lattice directions. Moving up off row 1 reaches the top
//! boundary and moving down off row N reaches the bottom boundary. Moving left
//! or right off the grid reaches nothing: the side walls are closed.

use crate::{Site, LATTICE_NEIGHBORS};

/// One of the two open boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Above row 1
    Top,
    /// Below row N
    Bottom,
}

/// Something adjacent to a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// An ordinary grid site
    Site(Site),
    /// A virtual boundary node
    Boundary(Boundary),
}

/// Neighbor lookup for an N-by-N grid.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors {
    size: usize,
}

impl Neighbors {
    /// Row/column offsets in the order up, down, left, right.
    pub const DIRECTIONS: [(isize, isize); LATTICE_NEIGHBORS] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    /// Neighbor lookup for a grid of the given size.
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Neighbors of an in-bounds site, `None` where a side wall blocks.
    ///
    /// The result is indexed like [`Neighbors::DIRECTIONS`].
    pub fn of(&self, site: Site) -> [Option<Neighbor>; LATTICE_NEIGHBORS] {
        Self::DIRECTIONS.map(|(dr, dc)| self.step(site, dr, dc))
    }

    fn step(&self, site: Site, dr: isize, dc: isize) -> Option<Neighbor> {
        let row = site.row as isize + dr;
        let col = site.col as isize + dc;
        let size = self.size as isize;

        if row < 1 {
            return Some(Neighbor::Boundary(Boundary::Top));
        }
        if row > size {
            return Some(Neighbor::Boundary(Boundary::Bottom));
        }
        if col < 1 || col > size {
            return None;
        }
        Some(Neighbor::Site(Site::new(row as usize, col as usize)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_site_has_four_site_neighbors() {
        let n = Neighbors::new(3).of(Site::new(2, 2));
        assert_eq!(
            n,
            [
                Some(Neighbor::Site(Site::new(1, 2))),
                Some(Neighbor::Site(Site::new(3, 2))),
                Some(Neighbor::Site(Site::new(2, 1))),
                Some(Neighbor::Site(Site::new(2, 3))),
            ]
        );
    }

    #[test]
    fn top_row_sees_top_boundary() {
        let [up, down, left, right] = Neighbors::new(3).of(Site::new(1, 1));
        assert_eq!(up, Some(Neighbor::Boundary(Boundary::Top)));
        assert_eq!(down, Some(Neighbor::Site(Site::new(2, 1))));
        assert_eq!(left, None);
        assert_eq!(right, Some(Neighbor::Site(Site::new(1, 2))));
    }

    #[test]
    fn bottom_row_sees_bottom_boundary() {
        let [up, down, _, right] = Neighbors::new(3).of(Site::new(3, 3));
        assert_eq!(up, Some(Neighbor::Site(Site::new(2, 3))));
        assert_eq!(down, Some(Neighbor::Boundary(Boundary::Bottom)));
        assert_eq!(right, None);
    }

    #[test]
    fn single_site_touches_both_boundaries() {
        let n = Neighbors::new(1).of(Site::ORIGIN);
        assert_eq!(
            n,
            [
                Some(Neighbor::Boundary(Boundary::Top)),
                Some(Neighbor::Boundary(Boundary::Bottom)),
                None,
                None,
            ]
        );
    }

    #[test]
    fn neighbor_relation_symmetric() {
        let lookup = Neighbors::new(4);
        for site in Site::all(4) {
            for neighbor in lookup.of(site).into_iter().flatten() {
                if let Neighbor::Site(other) = neighbor {
                    assert!(
                        lookup.of(other).contains(&Some(Neighbor::Site(site))),
                        "{} lists {} but not vice versa",
                        site,
                        other
                    );
                }
            }
        }
    }
}
