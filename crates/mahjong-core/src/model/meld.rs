use crate::model::tile::Tile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a kong was formed: claimed from a discard, declared from four
/// concealed copies, or upgraded from an existing exposed pong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KongStyle {
    Exposed,
    Concealed,
    Upgraded,
}

/// A committed, face-up group. Melds are created once by a successful call
/// and never removed; an upgraded kong replaces its pong in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meld {
    Chow([Tile; 3]),
    Pong(Tile),
    Kong(Tile, KongStyle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeldError {
    NotARun([Tile; 3]),
}

impl fmt::Display for MeldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeldError::NotARun([a, b, c]) => {
                write!(f, "{a} {b} {c} is not a consecutive same-suit run")
            }
        }
    }
}

impl std::error::Error for MeldError {}

impl Meld {
    /// Builds a chow, sorting the tiles and rejecting anything that is not
    /// three consecutive ranks of one sequential suit.
    pub fn chow(mut run: [Tile; 3]) -> Result<Meld, MeldError> {
        run.sort();
        let suit = run[0].suit();
        let valid = suit.is_sequential()
            && run[1].suit() == suit
            && run[2].suit() == suit
            && run[1].rank() == run[0].rank() + 1
            && run[2].rank() == run[0].rank() + 2;
        if valid {
            Ok(Meld::Chow(run))
        } else {
            Err(MeldError::NotARun(run))
        }
    }

    pub const fn pong(tile: Tile) -> Meld {
        Meld::Pong(tile)
    }

    pub const fn kong(tile: Tile, style: KongStyle) -> Meld {
        Meld::Kong(tile, style)
    }

    pub fn tiles(&self) -> Vec<Tile> {
        match self {
            Meld::Chow(run) => run.to_vec(),
            Meld::Pong(tile) => vec![*tile; 3],
            Meld::Kong(tile, _) => vec![*tile; 4],
        }
    }

    pub fn is_pong_of(&self, tile: Tile) -> bool {
        matches!(self, Meld::Pong(t) if *t == tile)
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meld::Chow([a, b, c]) => write!(f, "chow {a} {b} {c}"),
            Meld::Pong(tile) => write!(f, "pong {tile}"),
            Meld::Kong(tile, KongStyle::Exposed) => write!(f, "kong {tile}"),
            Meld::Kong(tile, KongStyle::Concealed) => write!(f, "concealed kong {tile}"),
            Meld::Kong(tile, KongStyle::Upgraded) => write!(f, "upgraded kong {tile}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KongStyle, Meld, MeldError};
    use crate::model::suit::Suit;
    use crate::model::tile::Tile;

    fn tile(suit: Suit, rank: u8) -> Tile {
        Tile::new(suit, rank).unwrap()
    }

    #[test]
    fn chow_accepts_any_tile_order() {
        let run = [tile(Suit::Wan, 5), tile(Suit::Wan, 3), tile(Suit::Wan, 4)];
        let meld = Meld::chow(run).unwrap();
        assert_eq!(
            meld,
            Meld::Chow([tile(Suit::Wan, 3), tile(Suit::Wan, 4), tile(Suit::Wan, 5)])
        );
    }

    #[test]
    fn chow_rejects_gaps_and_mixed_suits() {
        let gapped = [tile(Suit::Wan, 3), tile(Suit::Wan, 4), tile(Suit::Wan, 6)];
        assert!(matches!(Meld::chow(gapped), Err(MeldError::NotARun(_))));
        let mixed = [tile(Suit::Wan, 3), tile(Suit::Tiao, 4), tile(Suit::Wan, 5)];
        assert!(Meld::chow(mixed).is_err());
    }

    #[test]
    fn meld_tiles_expand_constituents() {
        let pong = Meld::pong(tile(Suit::Bing, 2));
        assert_eq!(pong.tiles().len(), 3);
        let kong = Meld::kong(tile(Suit::Bing, 2), KongStyle::Concealed);
        assert_eq!(kong.tiles().len(), 4);
        assert!(pong.is_pong_of(tile(Suit::Bing, 2)));
        assert!(!kong.is_pong_of(tile(Suit::Bing, 2)));
    }
}
