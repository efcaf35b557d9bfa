use mahjong_core::catalog::TileCatalog;
use mahjong_core::eval::{distance_to_win, is_winning_hand, waiting_tiles};
use mahjong_core::model::hand::Hand;
use mahjong_core::model::seat::Seat;
use mahjong_core::rules::chow_combinations;

fn hand(catalog: &TileCatalog, codes: &str) -> Hand {
    Hand::with_tiles(
        codes
            .split_whitespace()
            .map(|code| catalog.tile(code).unwrap())
            .collect(),
    )
}

#[test]
fn every_catalog_code_round_trips() {
    let catalog = TileCatalog::standard();
    let codes: Vec<String> = catalog.codes().map(str::to_string).collect();
    for code in codes {
        let tile = catalog.tile(&code).unwrap();
        assert_eq!(catalog.code(tile).unwrap(), code);
    }
}

#[test]
fn literal_winning_hand_and_its_near_misses() {
    let catalog = TileCatalog::standard();
    let complete = hand(&catalog, "T1 T2 T3 B4 B4 W6 W6 W6 E E E B7 B8 B9");
    assert!(is_winning_hand(&complete, None));
    assert_eq!(distance_to_win(&complete), 0);

    for tile in complete.distinct() {
        let broken = complete.without(tile).unwrap();
        assert!(!is_winning_hand(&broken, None));
    }
}

#[test]
fn off_cardinality_hands_never_win() {
    let catalog = TileCatalog::standard();
    for codes in ["W1 W1 W1", "W1 W2 W3 W4", "E E E E E E"] {
        assert!(!is_winning_hand(&hand(&catalog, codes), None));
    }
}

#[test]
fn chow_results_respect_rank_bounds_and_seat_relation() {
    let catalog = TileCatalog::standard();
    let holding = hand(&catalog, "S1 S2 S3 S4 S8 S9");
    for seat in Seat::LOOP {
        let upstream = seat.previous();
        for trigger in ["S1", "S2", "S9"] {
            let tile = catalog.tile(trigger).unwrap();
            for discarder in Seat::LOOP {
                let combos = chow_combinations(&holding, tile, discarder, seat);
                if discarder != upstream {
                    assert!(combos.is_empty());
                }
                for run in combos {
                    assert!(run.iter().all(|t| (1..=9).contains(&t.rank())));
                    assert!(run.contains(&tile));
                }
            }
        }
    }
}

#[test]
fn distance_shrinks_as_the_hand_approaches_completion() {
    let catalog = TileCatalog::standard();
    // Build up toward a fixed winning hand one useful exchange at a time.
    let steps = [
        "W1 W4 W7 T2 T5 T8 B3 B6 B9 E S W N",
        "T1 T2 T3 W6 W6 T5 T8 B3 B6 B9 E S N",
        "T1 T2 T3 W6 W6 W6 E E B3 B6 B9 S N",
        "T1 T2 T3 W6 W6 W6 E E E B7 B8 B9 N",
    ];
    let mut previous = u8::MAX;
    for codes in steps {
        let distance = distance_to_win(&hand(&catalog, codes));
        assert!(
            distance <= previous,
            "distance {distance} for '{codes}' exceeds previous {previous}"
        );
        previous = distance;
    }
    assert_eq!(previous, 0);
}

#[test]
fn waiting_tiles_complete_the_hand_when_drawn() {
    let catalog = TileCatalog::standard();
    let waiting = hand(&catalog, "T2 T3 W6 W6 W6 E E E B7 B8 B9 Z1 Z1");
    assert_eq!(distance_to_win(&waiting), 0);
    let waits = waiting_tiles(&waiting);
    assert!(!waits.is_empty());
    for tile in waits {
        assert!(is_winning_hand(&waiting, Some(tile)));
    }
}
