//! Winning-hand detection and distance-to-win over tile multisets.
//!
//! Everything here works on dense per-value count vectors indexed by
//! [`Tile::ordinal`], which keeps the backtracking searches allocation-free
//! and makes memoization keys cheap.

mod shanten;

pub use shanten::{distance_to_win, waiting_tile_count, waiting_tiles};

use crate::model::hand::Hand;
use crate::model::tile::{TILE_KINDS, Tile};
use std::collections::HashMap;

const HONOR_BASE: usize = 36;

pub(crate) fn counts_of(hand: &Hand) -> [u8; TILE_KINDS] {
    let mut counts = [0u8; TILE_KINDS];
    for tile in hand.iter() {
        counts[tile.ordinal()] += 1;
    }
    counts
}

/// A run may start at this ordinal: sequential suit, rank at most 7.
pub(crate) fn run_start_allowed(ordinal: usize) -> bool {
    ordinal < HONOR_BASE && ordinal % 9 <= 6
}

/// Two adjacent ranks fit at this ordinal: sequential suit, rank at most 8.
pub(crate) fn adjacent_allowed(ordinal: usize) -> bool {
    ordinal < HONOR_BASE && ordinal % 9 <= 7
}

/// True when the hand (plus `extra`, if given) decomposes into four sets and
/// one pair. Any total not congruent to 2 modulo 3 fails immediately; hands
/// of fewer than two tiles are never winning.
pub fn is_winning_hand(hand: &Hand, extra: Option<Tile>) -> bool {
    let mut counts = counts_of(hand);
    let mut total = hand.len();
    if let Some(tile) = extra {
        counts[tile.ordinal()] += 1;
        total += 1;
    }
    if total % 3 != 2 {
        return false;
    }
    let mut memo = HashMap::new();
    for pair in 0..TILE_KINDS {
        if counts[pair] >= 2 {
            counts[pair] -= 2;
            let complete = sets_only(&mut counts, &mut memo);
            counts[pair] += 2;
            if complete {
                return true;
            }
        }
    }
    false
}

/// True when the hand decomposes entirely into triplets and runs. Requires a
/// size that is a multiple of three.
pub fn decomposes_into_sets(hand: &Hand) -> bool {
    if hand.len() % 3 != 0 {
        return false;
    }
    let mut counts = counts_of(hand);
    sets_only(&mut counts, &mut HashMap::new())
}

/// Backtracking decomposition: the smallest remaining value must open either
/// a triplet or a run, so those are the only branches. Memoized on the
/// remaining count vector.
fn sets_only(
    counts: &mut [u8; TILE_KINDS],
    memo: &mut HashMap<[u8; TILE_KINDS], bool>,
) -> bool {
    let Some(first) = counts.iter().position(|&c| c > 0) else {
        return true;
    };
    if let Some(&known) = memo.get(&*counts) {
        return known;
    }
    let key = *counts;

    let mut complete = false;
    if counts[first] >= 3 {
        counts[first] -= 3;
        complete = sets_only(counts, memo);
        counts[first] += 3;
    }
    if !complete && run_start_allowed(first) && counts[first + 1] > 0 && counts[first + 2] > 0 {
        counts[first] -= 1;
        counts[first + 1] -= 1;
        counts[first + 2] -= 1;
        complete = sets_only(counts, memo);
        counts[first] += 1;
        counts[first + 1] += 1;
        counts[first + 2] += 1;
    }

    memo.insert(key, complete);
    complete
}
