//! Eight-neighbor graph over numbered subdomains
//!
//! "North" is the previous tile row in storage order (towards grid row 0).
//! Output coordinates flip the vertical axis so downstream consumers see rows
//! increasing upward.

use crate::algorithm::numbering::SubdomainIds;
use crate::io::configuration::{NEIGHBOR_COUNT, NO_SUBDOMAIN};

/// Neighbor slot of a subdomain record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous tile column
    West,
    /// Previous tile column, previous tile row
    NorthWest,
    /// Previous tile row
    North,
    /// Next tile column, previous tile row
    NorthEast,
    /// Next tile column
    East,
    /// Next tile column, next tile row
    SouthEast,
    /// Next tile row
    South,
    /// Previous tile column, next tile row
    SouthWest,
}

impl Direction {
    /// Directions in record order
    pub const ALL: [Self; NEIGHBOR_COUNT] = [
        Self::West,
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
    ];

    /// Tile-grid step `(dj, di)` towards this neighbor
    pub const fn step(self) -> (i64, i64) {
        match self {
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
        }
    }

    /// Direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
        }
    }

    /// Slot of this direction in a neighbor array
    pub const fn slot(self) -> usize {
        self as usize
    }
}

/// A numbered tile with its output coordinates and neighbors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdomain {
    /// Dense subdomain id
    pub id: usize,
    /// Tile row index
    pub jsub: usize,
    /// Tile column index
    pub isub: usize,
    /// Grid column of the tile's left edge (unclipped, may be negative)
    pub x: i64,
    /// Grid height minus the tile's last row index
    pub y: i64,
    /// Neighbor ids in [`Direction::ALL`] order, [`NO_SUBDOMAIN`] when absent
    pub neighbors: [i64; NEIGHBOR_COUNT],
}

impl Subdomain {
    /// Neighbor id in one direction
    pub fn neighbor(&self, direction: Direction) -> i64 {
        self.neighbors
            .get(direction.slot())
            .copied()
            .unwrap_or(NO_SUBDOMAIN)
    }

    /// Number of neighbor slots holding a real subdomain
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().filter(|&&id| id != NO_SUBDOMAIN).count()
    }
}

/// Look up the eight neighbors of every numbered tile
///
/// Subdomains come back in id order, which is also row-major tile order.
pub fn build_neighbor_graph(ids: &SubdomainIds) -> Vec<Subdomain> {
    let layout = ids.layout();
    let ny = layout.size().ny as i64;
    let height = layout.height() as i64;

    let mut subdomains = Vec::with_capacity(ids.count());
    for position in layout.positions() {
        let (jsub, isub) = (position.jsub as i64, position.isub as i64);
        let id = ids.get(jsub, isub);
        if id == NO_SUBDOMAIN {
            continue;
        }

        let neighbors = Direction::ALL.map(|direction| {
            let (dj, di) = direction.step();
            ids.get(jsub + dj, isub + di)
        });

        subdomains.push(Subdomain {
            id: id as usize,
            jsub: position.jsub,
            isub: position.isub,
            x: position.istart,
            y: height - (position.jstart + ny - 1),
            neighbors,
        });
    }
    subdomains
}
