mod params;
mod simulate;

pub use params::EngineParams;
pub use simulate::Simulation;

use mahjong_core::eval;
use mahjong_core::model::action::Action;
use mahjong_core::model::hand::Hand;
use mahjong_core::model::meld::KongStyle;
use mahjong_core::model::player::ActionError;
use mahjong_core::model::table::TableState;
use mahjong_core::model::tile::Tile;
use mahjong_core::rules;
use std::fmt;
use tracing::{Level, event};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecideError {
    EmptyHand,
    Illegal(ActionError),
}

impl fmt::Display for DecideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecideError::EmptyHand => write!(f, "cannot choose a discard from an empty hand"),
            DecideError::Illegal(err) => write!(f, "illegal action: {err}"),
        }
    }
}

impl std::error::Error for DecideError {}

impl From<ActionError> for DecideError {
    fn from(value: ActionError) -> Self {
        DecideError::Illegal(value)
    }
}

/// One-shot decision solver: gather every legal reaction to the table's
/// pending trigger, simulate each one ply ahead on a private copy, score the
/// outcomes, and return the best action. Reads the table, never writes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine {
    params: EngineParams,
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: EngineParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> EngineParams {
        self.params
    }

    /// Every legal action at the current decision point, in gathering order:
    /// win, kongs, pong, chows, then discards when it is the viewer's turn
    /// to shed a tile. Ordering never decides the outcome; scores do, with
    /// the earliest candidate winning ties.
    pub fn gather_candidates(&self, table: &TableState) -> Vec<Action> {
        let viewer = table.viewer();
        let player = table.player(viewer);
        let hand = player.hand();
        let mut candidates = Vec::new();

        match table.trigger() {
            Some(trigger) if trigger.seat == viewer => {
                let drawn = trigger.tile;
                if rules::can_win(hand, Some(drawn)) {
                    candidates.push(Action::Win(drawn));
                }
                if let Some(style) =
                    rules::kong_kind(hand, drawn, viewer, viewer, player.melds())
                {
                    candidates.push(Action::Kong(drawn, style));
                }
                for tile in rules::concealed_kong_tiles(hand) {
                    candidates.push(Action::Kong(tile, KongStyle::Concealed));
                }
                let full = hand.with(drawn);
                for tile in full.distinct() {
                    candidates.push(Action::Discard(tile));
                }
            }
            Some(trigger) => {
                let tile = trigger.tile;
                if rules::can_win(hand, Some(tile)) {
                    candidates.push(Action::Win(tile));
                }
                if let Some(style) =
                    rules::kong_kind(hand, tile, viewer, trigger.seat, player.melds())
                {
                    candidates.push(Action::Kong(tile, style));
                }
                if rules::can_pong(hand, tile) {
                    candidates.push(Action::Pong(tile));
                }
                for run in rules::chow_combinations(hand, tile, trigger.seat, viewer) {
                    candidates.push(Action::Chow(tile, run));
                }
            }
            None => {
                for tile in rules::concealed_kong_tiles(hand) {
                    candidates.push(Action::Kong(tile, KongStyle::Concealed));
                }
                for tile in hand.distinct() {
                    candidates.push(Action::Discard(tile));
                }
            }
        }

        candidates
    }

    /// Picks the best action for the pending decision point. An empty
    /// candidate list falls back to the best discard (this path never fails
    /// while the hand is non-empty); a single candidate is returned without
    /// evaluation; otherwise every candidate is simulated and scored.
    pub fn decide(&self, table: &TableState) -> Result<Action, DecideError> {
        let viewer = table.viewer();
        let player = table.player(viewer);
        let drawn = table
            .trigger()
            .filter(|t| t.seat == viewer)
            .map(|t| t.tile);
        let candidates = self.gather_candidates(table);

        if candidates.is_empty() {
            let action = Action::Discard(best_discard(player.hand())?);
            log_decision(table, &candidates, action, None, "fallback_discard");
            return Ok(action);
        }
        if candidates.len() == 1 {
            let action = candidates[0];
            log_decision(table, &candidates, action, None, "forced");
            return Ok(action);
        }

        let mut best: Option<(Action, i32)> = None;
        for &action in &candidates {
            let mut sim = match drawn {
                Some(tile) => Simulation::with_drawn(player, tile),
                None => Simulation::from_player(player),
            };
            sim.apply(action)?;
            let score = self.score_state(&sim);
            match best {
                None => best = Some((action, score)),
                Some((_, top)) if score > top => best = Some((action, score)),
                _ => {}
            }
        }

        let (action, score) = best.expect("scoring a non-empty candidate list yields a best");
        log_decision(table, &candidates, action, Some(score), "scored");
        Ok(action)
    }

    /// Heuristic value of a simulated outcome: a huge constant for a win,
    /// otherwise closeness to winning with a bonus for wide waits.
    pub fn score_state(&self, sim: &Simulation) -> i32 {
        if sim.won() {
            return self.params.win_score;
        }
        let hand = sim.player().hand();
        let distance = i32::from(eval::distance_to_win(hand));
        let mut score = -self.params.distance_penalty * distance;
        if distance == 0 {
            score += self.params.wait_bonus * eval::waiting_tile_count(hand) as i32;
        }
        score
    }
}

/// The distinct tile whose removal leaves the hand closest to winning,
/// first-seen winning ties. This is both the engine's fallback and the
/// forced follow-up after a simulated pong or chow.
pub fn best_discard(hand: &Hand) -> Result<Tile, DecideError> {
    let mut best: Option<(Tile, u8)> = None;
    for tile in hand.distinct() {
        let Some(remainder) = hand.without(tile) else {
            continue;
        };
        let distance = eval::distance_to_win(&remainder);
        match best {
            None => best = Some((tile, distance)),
            Some((_, top)) if distance < top => best = Some((tile, distance)),
            _ => {}
        }
    }
    best.map(|(tile, _)| tile).ok_or(DecideError::EmptyHand)
}

fn log_decision(
    table: &TableState,
    candidates: &[Action],
    chosen: Action,
    score: Option<i32>,
    reason: &str,
) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    let preview = if candidates.len() <= 8 {
        candidates
            .iter()
            .map(|action| format!("{action}"))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        format!("{} candidates", candidates.len())
    };

    event!(
        target: "mahjong_bot::decide",
        Level::INFO,
        seat = %table.viewer(),
        trigger = ?table.trigger(),
        hand_size = table.viewer_player().hand().len(),
        candidate_count = candidates.len(),
        candidates = %preview,
        chosen = %chosen,
        score = ?score,
        reason,
    );
}
