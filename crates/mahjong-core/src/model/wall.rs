use crate::model::tile::{TILE_KINDS, Tile};
use rand::Rng;
use std::fmt;

/// Physical copies of each tile value in the full set.
pub const COPIES_PER_TILE: u8 = 4;

/// Remaining-tile tracker for everything not yet seen from the advised
/// player's perspective. Revealing a fifth copy of any value is a
/// conservation violation and is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    remaining: [u8; TILE_KINDS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallError {
    TileExhausted(Tile),
}

impl fmt::Display for WallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallError::TileExhausted(tile) => {
                write!(f, "all {COPIES_PER_TILE} copies of {tile} are already visible")
            }
        }
    }
}

impl std::error::Error for WallError {}

impl Wall {
    /// A wall with no tiles seen yet.
    pub fn full() -> Self {
        Self {
            remaining: [COPIES_PER_TILE; TILE_KINDS],
        }
    }

    pub fn remaining(&self, tile: Tile) -> u8 {
        self.remaining[tile.ordinal()]
    }

    pub fn total_remaining(&self) -> usize {
        self.remaining.iter().map(|&c| c as usize).sum()
    }

    /// Marks one copy of `tile` as seen (drawn or discarded anywhere).
    pub fn reveal(&mut self, tile: Tile) -> Result<(), WallError> {
        let slot = &mut self.remaining[tile.ordinal()];
        if *slot == 0 {
            return Err(WallError::TileExhausted(tile));
        }
        *slot -= 1;
        Ok(())
    }

    /// Draws a uniformly random tile among the remaining physical copies.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        let total = self.total_remaining();
        if total == 0 {
            return None;
        }
        let mut pick = rng.gen_range(0..total);
        for ordinal in 0..TILE_KINDS {
            let copies = self.remaining[ordinal] as usize;
            if pick < copies {
                self.remaining[ordinal] -= 1;
                return Tile::from_ordinal(ordinal);
            }
            pick -= copies;
        }
        None
    }

    pub fn reset(&mut self) {
        self.remaining = [COPIES_PER_TILE; TILE_KINDS];
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::{COPIES_PER_TILE, Wall, WallError};
    use crate::model::suit::Suit;
    use crate::model::tile::{TILE_KINDS, Tile};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn full_wall_holds_four_of_each_value() {
        let wall = Wall::full();
        assert_eq!(wall.total_remaining(), TILE_KINDS * COPIES_PER_TILE as usize);
        for tile in Tile::all() {
            assert_eq!(wall.remaining(tile), COPIES_PER_TILE);
        }
    }

    #[test]
    fn fifth_reveal_is_a_conservation_error() {
        let five = Tile::new(Suit::Wan, 5).unwrap();
        let mut wall = Wall::full();
        for _ in 0..COPIES_PER_TILE {
            wall.reveal(five).unwrap();
        }
        assert_eq!(wall.reveal(five), Err(WallError::TileExhausted(five)));
        assert_eq!(wall.remaining(five), 0);
    }

    #[test]
    fn seeded_draws_are_deterministic() {
        let mut first = Wall::full();
        let mut second = Wall::full();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(first.draw_random(&mut rng_a), second.draw_random(&mut rng_b));
        }
        assert_eq!(first, second);
    }

    #[test]
    fn drawing_depletes_the_wall() {
        let mut wall = Wall::full();
        let mut rng = StdRng::seed_from_u64(7);
        let total = wall.total_remaining();
        for _ in 0..total {
            assert!(wall.draw_random(&mut rng).is_some());
        }
        assert_eq!(wall.draw_random(&mut rng), None);
        wall.reset();
        assert_eq!(wall.total_remaining(), total);
    }
}
