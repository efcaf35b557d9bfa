use crate::model::action::Action;
use crate::model::meld::KongStyle;
use crate::model::player::{ActionError, PlayerState};
use crate::model::seat::Seat;
use crate::model::tile::Tile;
use serde::{Deserialize, Serialize};
use std::array;

/// The tile that opened the current decision point and the seat that
/// revealed it. A trigger from the viewer's own seat is a self-draw whose
/// tile is not yet part of the hand; any other seat is an opponent discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub seat: Seat,
    pub tile: Tile,
}

/// Authoritative table state: the four seats, whose turn it is, the advised
/// seat, and the pending trigger. Only the surrounding game loop mutates
/// this; the decision engine reads it and simulates on its own copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    players: [PlayerState; 4],
    active: Seat,
    viewer: Seat,
    trigger: Option<Trigger>,
}

impl TableState {
    pub fn new(viewer: Seat) -> Self {
        Self {
            players: array::from_fn(|_| PlayerState::new()),
            active: viewer,
            viewer,
            trigger: None,
        }
    }

    pub fn from_players(players: [PlayerState; 4], viewer: Seat, active: Seat) -> Self {
        Self {
            players,
            active,
            viewer,
            trigger: None,
        }
    }

    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut PlayerState {
        &mut self.players[seat.index()]
    }

    pub fn viewer(&self) -> Seat {
        self.viewer
    }

    pub fn viewer_player(&self) -> &PlayerState {
        self.player(self.viewer)
    }

    pub fn active(&self) -> Seat {
        self.active
    }

    pub fn set_active(&mut self, seat: Seat) {
        self.active = seat;
    }

    pub fn trigger(&self) -> Option<Trigger> {
        self.trigger
    }

    pub fn set_trigger(&mut self, trigger: Option<Trigger>) {
        self.trigger = trigger;
    }

    /// Copies of `tile` visible across every seat; the full tile set holds
    /// four of each, so anything above that signals corrupted bookkeeping.
    pub fn copies_of(&self, tile: Tile) -> usize {
        self.players
            .iter()
            .map(|player| player.copies_of(tile))
            .sum()
    }

    /// Applies an advised action for the viewer against the authoritative
    /// state: merges a self-drawn trigger tile into the hand, routes the
    /// action through the checked player operations, takes a claimed tile
    /// off the discarder's pile, and advances the active seat. On error the
    /// table is left untouched.
    pub fn apply_viewer_action(&mut self, action: Action) -> Result<(), ActionError> {
        let viewer = self.viewer;
        let trigger = self.trigger;
        let drawn = trigger
            .filter(|t| t.seat == viewer)
            .map(|t| t.tile);
        if let Some(tile) = drawn {
            self.players[viewer.index()].draw(tile);
        }

        let result = match action {
            Action::Win(_) => Ok(()),
            Action::Discard(tile) => self.players[viewer.index()].discard(tile),
            Action::Pong(tile) => self.players[viewer.index()].call_pong(tile),
            Action::Chow(tile, run) => self.players[viewer.index()].call_chow(tile, run),
            Action::Kong(tile, style) => self.players[viewer.index()].call_kong(tile, style),
        };

        if let Err(err) = result {
            if let Some(tile) = drawn {
                self.players[viewer.index()].hand_mut().remove(tile);
            }
            return Err(err);
        }

        let claimed_exposed = matches!(
            action,
            Action::Pong(_) | Action::Chow(..) | Action::Kong(_, KongStyle::Exposed)
        );
        if claimed_exposed {
            if let Some(t) = trigger.filter(|t| t.seat != viewer) {
                self.players[t.seat.index()].retract_discard(t.tile);
            }
        }

        self.active = match action {
            Action::Discard(_) => viewer.next(),
            _ => viewer,
        };
        self.trigger = None;
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
