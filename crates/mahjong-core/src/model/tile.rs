use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Number of distinct tile values in the closed tile universe: four
/// sequential suits of nine ranks plus seven honor categories.
pub const TILE_KINDS: usize = 43;

const HONOR_BASE: usize = 36;

/// A single tile identity. Equality is by (suit, rank); rank is 1-9 for
/// sequential suits and 0 for honors. The constructors enforce that
/// invariant, so a `Tile` value is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile {
    suit: Suit,
    rank: u8,
}

impl Tile {
    pub const fn new(suit: Suit, rank: u8) -> Option<Self> {
        if suit.is_sequential() {
            if rank >= 1 && rank <= 9 {
                Some(Self { suit, rank })
            } else {
                None
            }
        } else if rank == 0 {
            Some(Self { suit, rank })
        } else {
            None
        }
    }

    pub const fn honor(suit: Suit) -> Option<Self> {
        if suit.is_sequential() {
            None
        } else {
            Some(Self { suit, rank: 0 })
        }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    pub const fn is_honor(self) -> bool {
        !self.suit.is_sequential()
    }

    /// Dense index in `0..TILE_KINDS`, laid out suit-major so the nine
    /// ranks of each sequential suit occupy a contiguous block.
    pub const fn ordinal(self) -> usize {
        if self.suit.is_sequential() {
            self.suit.index() * 9 + (self.rank as usize - 1)
        } else {
            HONOR_BASE + (self.suit.index() - Suit::SEQUENTIAL.len())
        }
    }

    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal < HONOR_BASE {
            match Suit::from_index(ordinal / 9) {
                Some(suit) => Tile::new(suit, (ordinal % 9) as u8 + 1),
                None => None,
            }
        } else if ordinal < TILE_KINDS {
            match Suit::from_index(Suit::SEQUENTIAL.len() + ordinal - HONOR_BASE) {
                Some(suit) => Tile::honor(suit),
                None => None,
            }
        } else {
            None
        }
    }

    /// The next rank in the same sequential suit, if any.
    pub const fn successor(self) -> Option<Self> {
        if self.suit.is_sequential() && self.rank < 9 {
            Tile::new(self.suit, self.rank + 1)
        } else {
            None
        }
    }

    /// Every tile value in the closed universe, in ordinal order.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..TILE_KINDS).filter_map(Tile::from_ordinal)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suit.is_sequential() {
            write!(f, "{}{}", self.suit, self.rank)
        } else {
            write!(f, "{}", self.suit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TILE_KINDS, Tile};
    use crate::model::suit::Suit;

    #[test]
    fn constructors_enforce_rank_ranges() {
        assert!(Tile::new(Suit::Wan, 0).is_none());
        assert!(Tile::new(Suit::Wan, 10).is_none());
        assert!(Tile::new(Suit::Wan, 9).is_some());
        assert!(Tile::new(Suit::EastWind, 1).is_none());
        assert!(Tile::new(Suit::EastWind, 0).is_some());
        assert!(Tile::honor(Suit::Suo).is_none());
        assert!(Tile::honor(Suit::RedDragon).is_some());
    }

    #[test]
    fn ordinal_round_trips_over_the_universe() {
        let mut seen = 0;
        for (expected, tile) in Tile::all().enumerate() {
            assert_eq!(tile.ordinal(), expected);
            assert_eq!(Tile::from_ordinal(expected), Some(tile));
            seen += 1;
        }
        assert_eq!(seen, TILE_KINDS);
        assert_eq!(Tile::from_ordinal(TILE_KINDS), None);
    }

    #[test]
    fn successor_stays_inside_the_suit() {
        let eight = Tile::new(Suit::Tiao, 8).unwrap();
        assert_eq!(eight.successor(), Tile::new(Suit::Tiao, 9));
        let nine = Tile::new(Suit::Tiao, 9).unwrap();
        assert_eq!(nine.successor(), None);
        let east = Tile::honor(Suit::EastWind).unwrap();
        assert_eq!(east.successor(), None);
    }

    #[test]
    fn display_matches_default_codes() {
        assert_eq!(Tile::new(Suit::Wan, 3).unwrap().to_string(), "W3");
        assert_eq!(Tile::new(Suit::Suo, 7).unwrap().to_string(), "S7");
        assert_eq!(Tile::honor(Suit::EastWind).unwrap().to_string(), "E");
        assert_eq!(Tile::honor(Suit::RedDragon).unwrap().to_string(), "Z1");
    }

    #[test]
    fn tiles_order_by_suit_then_rank() {
        let w9 = Tile::new(Suit::Wan, 9).unwrap();
        let t1 = Tile::new(Suit::Tiao, 1).unwrap();
        assert!(w9 < t1);
        assert!(t1 < Tile::honor(Suit::EastWind).unwrap());
    }
}
