use super::{adjacent_allowed, counts_of, is_winning_hand, run_start_allowed};
use crate::model::hand::Hand;
use crate::model::tile::{TILE_KINDS, Tile};
use crate::model::wall::COPIES_PER_TILE;

/// Exact minimum number of tile exchanges needed to bring the hand within
/// one tile of winning, clamped at 0 for hands already waiting or complete.
///
/// Exhaustive backtracking over every way to carve the hand into complete
/// sets, partial sets (pairs and two-tile proto-runs), and a reserved pair.
/// The hand is bounded at 14 tiles, so the search is cheap and needs no
/// precomputed tables.
pub fn distance_to_win(hand: &Hand) -> u8 {
    let mut counts = counts_of(hand);
    let needed = (hand.len() / 3).min(4) as i32;
    let mut best = 2 * needed;
    search(&mut counts, 0, 0, 0, 0, needed, &mut best);
    best.max(0) as u8
}

/// Every tile value whose draw completes the hand. Non-empty only for
/// waiting hands; values the hand already holds four of cannot be drawn and
/// are skipped.
pub fn waiting_tiles(hand: &Hand) -> Vec<Tile> {
    let mut waits = Vec::new();
    for ordinal in 0..TILE_KINDS {
        let Some(tile) = Tile::from_ordinal(ordinal) else {
            continue;
        };
        if hand.count(tile) >= COPIES_PER_TILE as usize {
            continue;
        }
        if is_winning_hand(hand, Some(tile)) {
            waits.push(tile);
        }
    }
    waits
}

pub fn waiting_tile_count(hand: &Hand) -> usize {
    waiting_tiles(hand).len()
}

fn search(
    counts: &mut [u8; TILE_KINDS],
    mut index: usize,
    sets: i32,
    protos: i32,
    pairs: i32,
    needed: i32,
    best: &mut i32,
) {
    while index < TILE_KINDS && counts[index] == 0 {
        index += 1;
    }
    if index >= TILE_KINDS {
        record(sets, protos, pairs, needed, best);
        return;
    }

    // Complete sets first: triplet of this value.
    if counts[index] >= 3 {
        counts[index] -= 3;
        search(counts, index, sets + 1, protos, pairs, needed, best);
        counts[index] += 3;
    }
    // Complete run starting here.
    if run_start_allowed(index) && counts[index + 1] > 0 && counts[index + 2] > 0 {
        counts[index] -= 1;
        counts[index + 1] -= 1;
        counts[index + 2] -= 1;
        search(counts, index, sets + 1, protos, pairs, needed, best);
        counts[index] += 1;
        counts[index + 1] += 1;
        counts[index + 2] += 1;
    }
    // Partial sets: a pair of this value.
    if counts[index] >= 2 {
        counts[index] -= 2;
        search(counts, index, sets, protos, pairs + 1, needed, best);
        counts[index] += 2;
    }
    // Partial sets: adjacent proto-run.
    if adjacent_allowed(index) && counts[index + 1] > 0 {
        counts[index] -= 1;
        counts[index + 1] -= 1;
        search(counts, index, sets, protos + 1, pairs, needed, best);
        counts[index] += 1;
        counts[index + 1] += 1;
    }
    // Partial sets: one-gap proto-run.
    if run_start_allowed(index) && counts[index + 2] > 0 {
        counts[index] -= 1;
        counts[index + 2] -= 1;
        search(counts, index, sets, protos + 1, pairs, needed, best);
        counts[index] += 1;
        counts[index + 2] += 1;
    }
    // Leave the remaining copies of this value as floaters.
    let floaters = counts[index];
    counts[index] = 0;
    search(counts, index + 1, sets, protos, pairs, needed, best);
    counts[index] = floaters;
}

/// Scores one complete carve-up. A pair may serve as the reserved pair or as
/// a partial set toward a triplet; both readings are tried. Partial sets
/// beyond the blocks still needed cannot help and are capped.
fn record(sets: i32, protos: i32, pairs: i32, needed: i32, best: &mut i32) {
    let sets = sets.min(needed);
    let spare = needed - sets;
    if pairs > 0 {
        let partials = (protos + pairs - 1).min(spare);
        *best = (*best).min(2 * spare - partials - 1);
    }
    let partials = (protos + pairs).min(spare);
    *best = (*best).min(2 * spare - partials);
}

#[cfg(test)]
mod tests {
    use super::{distance_to_win, waiting_tile_count, waiting_tiles};
    use crate::catalog::TileCatalog;
    use crate::model::hand::Hand;
    use crate::model::suit::Suit;
    use crate::model::tile::Tile;

    fn hand(codes: &str) -> Hand {
        let catalog = TileCatalog::standard();
        Hand::with_tiles(
            codes
                .split_whitespace()
                .map(|code| catalog.tile(code).unwrap())
                .collect(),
        )
    }

    #[test]
    fn complete_hand_is_at_distance_zero() {
        assert_eq!(
            distance_to_win(&hand("T1 T2 T3 B4 B4 W6 W6 W6 E E E B7 B8 B9")),
            0
        );
    }

    #[test]
    fn waiting_hand_is_at_distance_zero() {
        // Four complete sets plus a lone tile waiting to pair.
        assert_eq!(
            distance_to_win(&hand("T1 T2 T3 W6 W6 W6 E E E B7 B8 B9 Z1")),
            0
        );
    }

    #[test]
    fn one_exchange_from_waiting() {
        // Three sets, a pair, and two floaters: swap one floater into any
        // partial set and the hand is waiting.
        assert_eq!(
            distance_to_win(&hand("T1 T2 T3 W6 W6 W6 E E E B4 B4 W1 S9")),
            1
        );
    }

    #[test]
    fn pair_heavy_hands_are_not_waiting() {
        // Six pairs and a floater: three triplets away from a waiting shape.
        assert_eq!(
            distance_to_win(&hand("W1 W1 W4 W4 W7 W7 T2 T2 T5 T5 T8 T8 B9")),
            3
        );
    }

    #[test]
    fn structureless_hand_is_far_from_winning() {
        // Thirteen isolated tiles: no sets, no partial sets.
        assert_eq!(
            distance_to_win(&hand("W1 W4 W7 T2 T5 T8 B3 B6 B9 E S W N")),
            8
        );
    }

    #[test]
    fn adding_a_useful_tile_never_increases_distance() {
        let start = hand("W1 W2 W3 W5 T3 T3 T4 T7 S6 S7 Z1 Z1 Z2");
        let before = distance_to_win(&start);
        let improved = start.with(hand("T2").tiles()[0]);
        let improved = improved.without(hand("Z2").tiles()[0]).unwrap();
        assert!(distance_to_win(&improved) <= before);
    }

    #[test]
    fn waits_cover_every_completing_value() {
        // Waiting on the pair: only the lone honor completes.
        let pair_wait = hand("T1 T2 T3 W6 W6 W6 E E E B7 B8 B9 Z1");
        let red = Tile::honor(Suit::RedDragon).unwrap();
        assert_eq!(waiting_tiles(&pair_wait), vec![red]);

        // Open wait on a run: either end completes.
        let open_wait = hand("T2 T3 W6 W6 W6 E E E B7 B8 B9 Z1 Z1");
        let waits = waiting_tiles(&open_wait);
        assert_eq!(waits.len(), 2);
        assert!(waits.contains(&Tile::new(Suit::Tiao, 1).unwrap()));
        assert!(waits.contains(&Tile::new(Suit::Tiao, 4).unwrap()));
    }

    #[test]
    fn exhausted_values_are_not_counted_as_waits() {
        // The hand already holds all four copies of the pair candidate.
        let hand_with_four = hand("Z1 Z1 Z1 Z1 T1 T2 T3 W6 W6 W6 B7 B8 B9");
        for tile in waiting_tiles(&hand_with_four) {
            assert!(hand_with_four.count(tile) < 4);
        }
    }

    #[test]
    fn non_waiting_hand_has_no_waits() {
        let scattered = hand("W1 W4 W7 T2 T5 T8 B3 B6 B9 E S W N");
        assert_eq!(waiting_tile_count(&scattered), 0);
    }
}
