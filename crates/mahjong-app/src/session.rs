use anyhow::{Context, Result, anyhow, bail};
use mahjong_bot::engine::DecisionEngine;
use mahjong_core::catalog::TileCatalog;
use mahjong_core::model::action::Action;
use mahjong_core::model::seat::Seat;
use mahjong_core::model::table::{TableState, Trigger};
use mahjong_core::model::tile::Tile;
use mahjong_core::model::wall::Wall;
use rand::Rng;
use std::fs;
use std::path::Path;

/// The game-loop collaborator: owns the authoritative table, the wall
/// tracker, and the decision engine, and is the only place advised actions
/// are applied back onto real state. The engine itself only ever touches its
/// own simulation copies.
pub struct GameSession {
    catalog: TileCatalog,
    wall: Wall,
    table: TableState,
    engine: DecisionEngine,
    finished: bool,
}

/// What one decision point produced: the advised reaction and, after a pong
/// or chow, the follow-up discard the player is then forced to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub action: Action,
    pub follow_up: Option<Action>,
}

impl GameSession {
    pub fn new(catalog: TileCatalog) -> Self {
        Self {
            catalog,
            wall: Wall::full(),
            table: TableState::new(Seat::East),
            engine: DecisionEngine::new(),
            finished: false,
        }
    }

    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn parse_tile(&self, code: &str) -> Result<Tile> {
        self.catalog
            .tile(code)
            .with_context(|| format!("unknown tile code '{code}'"))
    }

    /// Seeds the advised player's concealed hand, revealing every tile
    /// against the wall.
    pub fn deal(&mut self, codes: &[&str]) -> Result<()> {
        let mut tiles = Vec::with_capacity(codes.len());
        for code in codes {
            tiles.push(self.parse_tile(code)?);
        }
        for &tile in &tiles {
            self.wall
                .reveal(tile)
                .with_context(|| format!("dealing {tile}"))?;
        }
        let viewer = self.table.viewer();
        let player = self.table.player_mut(viewer);
        for tile in tiles {
            player.draw(tile);
        }
        Ok(())
    }

    /// Opens a self-draw decision point: the advised player drew `code`.
    pub fn self_draw(&mut self, code: &str) -> Result<Advice> {
        let tile = self.parse_tile(code)?;
        self.wall
            .reveal(tile)
            .with_context(|| format!("drawing {tile}"))?;
        let viewer = self.table.viewer();
        self.table.set_trigger(Some(Trigger { seat: viewer, tile }));
        self.advise_and_apply()
    }

    /// Opens a self-draw decision point with a tile drawn at random from the
    /// remaining wall, for drills against an imagined deal. Returns the drawn
    /// tile alongside the advice.
    pub fn random_self_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(Tile, Advice)> {
        let Some(tile) = self.wall.draw_random(rng) else {
            bail!("the wall is exhausted");
        };
        let viewer = self.table.viewer();
        self.table.set_trigger(Some(Trigger { seat: viewer, tile }));
        let advice = self.advise_and_apply()?;
        Ok((tile, advice))
    }

    /// Opens a reaction decision point: the opponent at `seat_index` (1-3,
    /// counting clockwise from the advised player) discarded `code`.
    pub fn opponent_discard(&mut self, seat_index: usize, code: &str) -> Result<Advice> {
        let seat = Seat::from_index(seat_index)
            .ok_or_else(|| anyhow!("seat index {seat_index} out of range (expected 1-3)"))?;
        if seat == self.table.viewer() {
            bail!("seat {seat_index} is the advised player; enter a draw event instead");
        }
        let tile = self.parse_tile(code)?;
        self.wall
            .reveal(tile)
            .with_context(|| format!("observing {tile}"))?;
        self.table.player_mut(seat).record_discard(tile);
        self.table.set_trigger(Some(Trigger { seat, tile }));
        self.advise_and_apply()
    }

    fn advise_and_apply(&mut self) -> Result<Advice> {
        let action = self.engine.decide(&self.table)?;
        let viewer = self.table.viewer();
        let from_opponent = self
            .table
            .trigger()
            .is_some_and(|t| t.seat != viewer);

        // A discard advised against an opponent's tile means "no call":
        // pass and leave the table untouched.
        if from_opponent && matches!(action, Action::Discard(_)) {
            if let Some(trigger) = self.table.trigger() {
                self.table.set_active(trigger.seat.next());
            }
            self.table.set_trigger(None);
            return Ok(Advice {
                action,
                follow_up: None,
            });
        }

        if matches!(action, Action::Win(_)) {
            self.finished = true;
        }
        self.table.apply_viewer_action(action)?;

        // A committed pong or chow obliges an immediate discard; ask the
        // engine again on the trigger-less table.
        let follow_up = match action {
            Action::Pong(_) | Action::Chow(..) => {
                let discard = self.engine.decide(&self.table)?;
                self.table.apply_viewer_action(discard)?;
                Some(discard)
            }
            _ => None,
        };

        Ok(Advice { action, follow_up })
    }

    /// Writes the authoritative table to `path` as a JSON snapshot.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.table.to_json().context("serializing the table")?;
        fs::write(path, json).with_context(|| format!("writing snapshot {}", path.display()))?;
        Ok(())
    }

    /// Restores the table from a JSON snapshot and rebuilds the wall from
    /// everything visible in it; a snapshot that claims more than four
    /// copies of any tile is rejected.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?;
        let table = TableState::from_json(&json).context("parsing snapshot")?;

        let mut wall = Wall::full();
        for seat in Seat::LOOP {
            let player = table.player(seat);
            for &tile in player.hand().tiles() {
                wall.reveal(tile).context("snapshot overcounts a tile")?;
            }
            for meld in player.melds() {
                for tile in meld.tiles() {
                    wall.reveal(tile).context("snapshot overcounts a tile")?;
                }
            }
            for &tile in player.discards() {
                wall.reveal(tile).context("snapshot overcounts a tile")?;
            }
        }
        if let Some(trigger) = table.trigger() {
            if trigger.seat == table.viewer() {
                wall.reveal(trigger.tile)
                    .context("snapshot overcounts a tile")?;
            }
        }

        self.table = table;
        self.wall = wall;
        self.finished = false;
        Ok(())
    }

    /// Renders an action with this session's catalog codes.
    pub fn describe(&self, action: Action) -> String {
        let code = |tile: Tile| -> String {
            self.catalog
                .code(tile)
                .map(str::to_string)
                .unwrap_or_else(|_| tile.to_string())
        };
        match action {
            Action::Win(tile) => format!("declare the win on {}", code(tile)),
            Action::Kong(tile, style) => format!("kong {} ({style:?})", code(tile)),
            Action::Pong(tile) => format!("pong {}", code(tile)),
            Action::Chow(tile, run) => format!(
                "chow {} forming {} {} {}",
                code(tile),
                code(run[0]),
                code(run[1]),
                code(run[2])
            ),
            Action::Discard(tile) => format!("discard {}", code(tile)),
        }
    }

    /// One-line table summary for the interactive loop.
    pub fn render(&self) -> String {
        let viewer = self.table.viewer();
        let player = self.table.player(viewer);
        let hand = player
            .hand()
            .iter()
            .map(|&tile| {
                self.catalog
                    .code(tile)
                    .map(str::to_string)
                    .unwrap_or_else(|_| tile.to_string())
            })
            .collect::<Vec<_>>()
            .join(" ");
        let melds = player
            .melds()
            .iter()
            .map(|meld| meld.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let melds = if melds.is_empty() {
            "none".to_string()
        } else {
            melds
        };
        format!(
            "hand: [{hand}]  melds: {melds}  unseen tiles: {}",
            self.wall.total_remaining()
        )
    }
}
