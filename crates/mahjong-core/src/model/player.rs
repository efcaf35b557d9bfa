use crate::model::hand::Hand;
use crate::model::meld::{KongStyle, Meld, MeldError};
use crate::model::tile::Tile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One seat's owned state: the concealed hand, committed melds (append-only,
/// except a pong upgraded to a kong in place), and the discard pile in
/// discard order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    hand: Hand,
    melds: Vec<Meld>,
    discards: Vec<Tile>,
}

/// A requested mutation whose precondition does not hold against the hand or
/// melds. Every operation validates fully before touching any tile, so a
/// failed call leaves the state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    MissingTiles { tile: Tile, needed: usize, held: usize },
    TileNotInHand(Tile),
    NoMatchingPong(Tile),
    NotARun([Tile; 3]),
    RunWithoutClaimedTile(Tile),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::MissingTiles { tile, needed, held } => {
                write!(f, "need {needed} copies of {tile} in hand but hold {held}")
            }
            ActionError::TileNotInHand(tile) => write!(f, "{tile} is not in hand"),
            ActionError::NoMatchingPong(tile) => {
                write!(f, "no exposed pong of {tile} to upgrade")
            }
            ActionError::NotARun([a, b, c]) => {
                write!(f, "{a} {b} {c} is not a consecutive same-suit run")
            }
            ActionError::RunWithoutClaimedTile(tile) => {
                write!(f, "run does not contain the claimed tile {tile}")
            }
        }
    }
}

impl std::error::Error for ActionError {}

impl From<MeldError> for ActionError {
    fn from(value: MeldError) -> Self {
        match value {
            MeldError::NotARun(run) => ActionError::NotARun(run),
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hand(hand: Hand) -> Self {
        Self {
            hand,
            melds: Vec::new(),
            discards: Vec::new(),
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    pub fn discards(&self) -> &[Tile] {
        &self.discards
    }

    /// Adds a drawn tile to the hand.
    pub fn draw(&mut self, tile: Tile) {
        self.hand.add(tile);
    }

    /// Removes one tile from the hand and appends it to this seat's discard
    /// pile.
    pub fn discard(&mut self, tile: Tile) -> Result<(), ActionError> {
        if !self.hand.remove(tile) {
            return Err(ActionError::TileNotInHand(tile));
        }
        self.discards.push(tile);
        Ok(())
    }

    /// Records a discard observed from this seat without touching the hand;
    /// used for opponents whose concealed tiles are unknown.
    pub fn record_discard(&mut self, tile: Tile) {
        self.discards.push(tile);
    }

    /// Removes the most recent discard if it matches; a successful claim of
    /// this seat's tile takes it off the pile.
    pub fn retract_discard(&mut self, tile: Tile) -> bool {
        if self.discards.last() == Some(&tile) {
            self.discards.pop();
            true
        } else {
            false
        }
    }

    /// Claims a discarded `tile` as a pong: removes two copies from the hand
    /// and commits the meld.
    pub fn call_pong(&mut self, tile: Tile) -> Result<(), ActionError> {
        let held = self.hand.count(tile);
        if held < 2 {
            return Err(ActionError::MissingTiles {
                tile,
                needed: 2,
                held,
            });
        }
        self.hand.remove(tile);
        self.hand.remove(tile);
        self.melds.push(Meld::pong(tile));
        Ok(())
    }

    /// Claims a discarded `tile` as part of `run`: removes the two other run
    /// tiles from the hand and commits the meld.
    pub fn call_chow(&mut self, tile: Tile, run: [Tile; 3]) -> Result<(), ActionError> {
        let meld = Meld::chow(run)?;
        if !run.contains(&tile) {
            return Err(ActionError::RunWithoutClaimedTile(tile));
        }
        let others: Vec<Tile> = run.iter().copied().filter(|&t| t != tile).collect();
        for &other in &others {
            let held = self.hand.count(other);
            if held < 1 {
                return Err(ActionError::MissingTiles {
                    tile: other,
                    needed: 1,
                    held,
                });
            }
        }
        for &other in &others {
            self.hand.remove(other);
        }
        self.melds.push(meld);
        Ok(())
    }

    /// Commits a kong of `tile`. Exposed kongs consume three hand copies
    /// (the fourth is the claimed discard); concealed kongs consume four;
    /// an upgrade consumes the single drawn copy and converts the existing
    /// pong in place.
    pub fn call_kong(&mut self, tile: Tile, style: KongStyle) -> Result<(), ActionError> {
        match style {
            KongStyle::Exposed | KongStyle::Concealed => {
                let needed = if matches!(style, KongStyle::Exposed) { 3 } else { 4 };
                let held = self.hand.count(tile);
                if held < needed {
                    return Err(ActionError::MissingTiles { tile, needed, held });
                }
                for _ in 0..needed {
                    self.hand.remove(tile);
                }
                self.melds.push(Meld::kong(tile, style));
                Ok(())
            }
            KongStyle::Upgraded => {
                let held = self.hand.count(tile);
                if held < 1 {
                    return Err(ActionError::MissingTiles {
                        tile,
                        needed: 1,
                        held,
                    });
                }
                let Some(position) = self.melds.iter().position(|meld| meld.is_pong_of(tile))
                else {
                    return Err(ActionError::NoMatchingPong(tile));
                };
                self.hand.remove(tile);
                self.melds[position] = Meld::kong(tile, KongStyle::Upgraded);
                Ok(())
            }
        }
    }

    /// Copies of `tile` visible in or owned by this seat: hand, melds, and
    /// discard pile combined.
    pub fn copies_of(&self, tile: Tile) -> usize {
        self.hand.count(tile)
            + self
                .melds
                .iter()
                .map(|meld| meld.tiles().iter().filter(|&&t| t == tile).count())
                .sum::<usize>()
            + self.discards.iter().filter(|&&t| t == tile).count()
    }
}
