use super::{DecideError, best_discard};
use mahjong_core::model::action::Action;
use mahjong_core::model::player::PlayerState;
use mahjong_core::model::tile::Tile;

/// Disposable copy of the advised player's state used to evaluate a single
/// candidate action one ply ahead. The authoritative table is never touched;
/// the copy is scored and dropped.
#[derive(Debug, Clone)]
pub struct Simulation {
    player: PlayerState,
    won: bool,
}

impl Simulation {
    /// Simulation over the player's current hand, for reactions to an
    /// opponent's discard or a bare discard decision.
    pub fn from_player(player: &PlayerState) -> Self {
        Self {
            player: player.clone(),
            won: false,
        }
    }

    /// Simulation with a freshly drawn tile merged into the hand, for
    /// self-draw decision points.
    pub fn with_drawn(player: &PlayerState, tile: Tile) -> Self {
        let mut player = player.clone();
        player.draw(tile);
        Self { player, won: false }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Applies one candidate action. Winning only flags the state; calls
    /// commit the meld through the checked player operations, and a pong or
    /// chow is followed by the forced best-discard a real player must make.
    /// Illegal requests are rejected before any tile moves.
    pub fn apply(&mut self, action: Action) -> Result<(), DecideError> {
        match action {
            Action::Win(_) => {
                self.won = true;
            }
            Action::Kong(tile, style) => self.player.call_kong(tile, style)?,
            Action::Pong(tile) => {
                self.player.call_pong(tile)?;
                self.forced_discard()?;
            }
            Action::Chow(tile, run) => {
                self.player.call_chow(tile, run)?;
                self.forced_discard()?;
            }
            Action::Discard(tile) => self.player.discard(tile)?,
        }
        Ok(())
    }

    fn forced_discard(&mut self) -> Result<(), DecideError> {
        let tile = best_discard(self.player.hand())?;
        self.player.discard(tile)?;
        Ok(())
    }
}
