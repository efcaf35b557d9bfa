use crate::model::meld::KongStyle;
use crate::model::tile::Tile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One legal reaction to a decision point. Each variant carries exactly the
/// data its kind needs; the chow run always includes the claimed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Win(Tile),
    Kong(Tile, KongStyle),
    Pong(Tile),
    Chow(Tile, [Tile; 3]),
    Discard(Tile),
}

impl Action {
    /// The tile this action pivots on: the winning, claimed, declared, or
    /// discarded tile.
    pub const fn tile(&self) -> Tile {
        match self {
            Action::Win(tile)
            | Action::Kong(tile, _)
            | Action::Pong(tile)
            | Action::Chow(tile, _)
            | Action::Discard(tile) => *tile,
        }
    }

    /// True for actions that claim or declare a meld.
    pub const fn is_call(&self) -> bool {
        matches!(self, Action::Kong(..) | Action::Pong(_) | Action::Chow(..))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Win(tile) => write!(f, "win on {tile}"),
            Action::Kong(tile, KongStyle::Exposed) => write!(f, "kong {tile}"),
            Action::Kong(tile, KongStyle::Concealed) => write!(f, "concealed kong {tile}"),
            Action::Kong(tile, KongStyle::Upgraded) => write!(f, "upgrade pong of {tile} to kong"),
            Action::Pong(tile) => write!(f, "pong {tile}"),
            Action::Chow(tile, [a, b, c]) => write!(f, "chow {tile} as {a} {b} {c}"),
            Action::Discard(tile) => write!(f, "discard {tile}"),
        }
    }
}
