use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the four table positions, in turn order East -> South -> West ->
/// North. Seat relations (who is upstream of whom) are always computed from
/// this cycle, never hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Seat {
    pub const LOOP: [Seat; 4] = [Seat::East, Seat::South, Seat::West, Seat::North];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::East),
            1 => Some(Seat::South),
            2 => Some(Seat::West),
            3 => Some(Seat::North),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The seat that acts after this one.
    pub const fn next(self) -> Seat {
        match self {
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
            Seat::North => Seat::East,
        }
    }

    /// The seat that acts before this one; only this seat's discards may be
    /// claimed for a chow.
    pub const fn previous(self) -> Seat {
        match self {
            Seat::East => Seat::North,
            Seat::South => Seat::East,
            Seat::West => Seat::South,
            Seat::North => Seat::West,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
            Seat::North => "North",
        };
        f.write_str(label)
    }
}
