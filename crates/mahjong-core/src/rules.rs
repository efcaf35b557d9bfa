//! Seat-relative call legality. Every function here is a pure predicate:
//! out-of-domain input (an honor offered for a chow, a discard from the
//! wrong seat) yields `false` or an empty list, never an error.

use crate::eval;
use crate::model::hand::Hand;
use crate::model::meld::{KongStyle, Meld};
use crate::model::seat::Seat;
use crate::model::tile::Tile;

/// Runs that could claim `tile` discarded by `discarder`. Only the seat
/// immediately upstream of `seat` may be claimed from, and only sequential
/// tiles form runs. Each returned run contains the claimed tile; zero to
/// three combinations are possible.
pub fn chow_combinations(
    hand: &Hand,
    tile: Tile,
    discarder: Seat,
    seat: Seat,
) -> Vec<[Tile; 3]> {
    if discarder != seat.previous() {
        return Vec::new();
    }
    if !tile.suit().is_sequential() {
        return Vec::new();
    }

    let rank = tile.rank() as i8;
    let mut combinations = Vec::new();
    for (low, high) in [(-2i8, -1i8), (-1, 1), (1, 2)] {
        let first = rank + low;
        let second = rank + high;
        if first < 1 || second > 9 {
            continue;
        }
        let Some(a) = Tile::new(tile.suit(), first as u8) else {
            continue;
        };
        let Some(b) = Tile::new(tile.suit(), second as u8) else {
            continue;
        };
        if hand.contains(a) && hand.contains(b) {
            let mut run = [tile, a, b];
            run.sort();
            combinations.push(run);
        }
    }
    combinations
}

/// A discarded tile may be claimed as a pong when two copies are held,
/// regardless of which seat discarded it.
pub fn can_pong(hand: &Hand, tile: Tile) -> bool {
    hand.count(tile) >= 2
}

/// Which kind of kong, if any, `tile` opens. When another seat revealed the
/// tile it can only be an exposed kong over three held copies; when the
/// player just drew it themselves it is a concealed kong over three held
/// copies, or an upgrade of an existing exposed pong. At most one kind
/// applies.
pub fn kong_kind(
    hand: &Hand,
    tile: Tile,
    seat: Seat,
    acting: Seat,
    melds: &[Meld],
) -> Option<KongStyle> {
    if acting != seat {
        (hand.count(tile) == 3).then_some(KongStyle::Exposed)
    } else if hand.count(tile) == 3 {
        Some(KongStyle::Concealed)
    } else if melds.iter().any(|meld| meld.is_pong_of(tile)) {
        Some(KongStyle::Upgraded)
    } else {
        None
    }
}

/// Values held four times, each declarable as a concealed kong directly
/// after a self-draw without any trigger tile.
pub fn concealed_kong_tiles(hand: &Hand) -> Vec<Tile> {
    hand.distinct().filter(|&tile| hand.count(tile) == 4).collect()
}

/// Whether the hand (plus the completing tile, if given) is a winning hand.
pub fn can_win(hand: &Hand, extra: Option<Tile>) -> bool {
    eval::is_winning_hand(hand, extra)
}
