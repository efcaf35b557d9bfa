use crate::model::tile::Tile;
use serde::{Deserialize, Serialize};
use std::vec::Vec;

/// A player's concealed tiles: an order-irrelevant multiset, stored sorted.
///
/// Speculative play never mutates a shared `Hand`; simulation builds derived
/// values with [`Hand::with`] and [`Hand::without`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    pub fn with_tiles(tiles: Vec<Tile>) -> Self {
        let mut hand = Self { tiles };
        hand.sort();
        hand
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
        self.sort();
    }

    pub fn remove(&mut self, tile: Tile) -> bool {
        if let Some(index) = self.tiles.iter().position(|&t| t == tile) {
            self.tiles.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Each distinct tile value once, in sorted order.
    pub fn distinct(&self) -> impl Iterator<Item = Tile> + '_ {
        let tiles = &self.tiles;
        tiles.iter().enumerate().filter_map(
            move |(i, &tile)| {
                if i == 0 || tiles[i - 1] != tile { Some(tile) } else { None }
            },
        )
    }

    /// A new hand holding this hand's tiles plus `tile`.
    pub fn with(&self, tile: Tile) -> Hand {
        let mut derived = self.clone();
        derived.add(tile);
        derived
    }

    /// A new hand with one copy of `tile` removed, or `None` if the tile is
    /// not held.
    pub fn without(&self, tile: Tile) -> Option<Hand> {
        let mut derived = self.clone();
        if derived.remove(tile) { Some(derived) } else { None }
    }

    fn sort(&mut self) {
        self.tiles.sort();
    }
}
