//! Session controller: the single owner of the live [`GameState`].
//!
//! Every host command enters through [`SessionController`], which mutates the
//! state, classifies the result (playing, won, lost, leveled up) and drives the
//! [`Presenter`]. Loads and restarts build a complete replacement state first
//! and only swap it in once nothing can fail, so an error always leaves the
//! previous session playable.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use game_core::{CardinalDirection, GameState, Inventory, Item, ItemKind};

use crate::api::{Notice, Presenter, RenderFrame, Result, RuntimeError};
use crate::economy::{Economy, PurchaseOutcome};
use crate::repository::{FileSaveRepository, SaveLocation};

/// Lifecycle of a session. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum SessionStatus {
    Playing,
    Won,
    Lost,
}

impl SessionStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::Playing)
    }
}

/// Inventory held at the most recent level-up, per kind.
///
/// Each level-up overwrites the kinds held at that moment; kinds not held then
/// keep their older entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelUpSnapshot {
    kinds: BTreeMap<ItemKind, Vec<Item>>,
}

impl LevelUpSnapshot {
    pub fn capture(&mut self, inventory: &Inventory) {
        for (kind, sequence) in inventory.items() {
            self.kinds.insert(*kind, sequence.clone());
        }
    }

    /// Overwrites the inventory's sequence for every captured kind.
    pub fn restore_into(&self, inventory: &mut Inventory) {
        for (kind, sequence) in &self.kinds {
            inventory.replace(*kind, sequence.clone());
        }
    }

    pub fn get(&self, kind: ItemKind) -> Option<&[Item]> {
        self.kinds.get(&kind).map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Files the current session was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveReference {
    /// Game definition (or saved `maze.txt`) that restarts reload.
    pub game_file: PathBuf,
    /// Stats applied on top of every newly loaded game, when set.
    pub stats_file: Option<PathBuf>,
}

pub struct SessionController<P: Presenter> {
    state: GameState,
    status: SessionStatus,
    presenter: P,
    economy: Economy,
    snapshot: LevelUpSnapshot,
    save_ref: SaveReference,
}

impl<P: Presenter> SessionController<P> {
    /// Starts a session on the game defined in `game_file` and draws it.
    pub fn new(game_file: impl Into<PathBuf>, presenter: P, economy: Economy) -> Result<Self> {
        let game_file = game_file.into();
        let mut state = FileSaveRepository::load_game(&game_file)?;
        state.attempt_unlock_door();
        tracing::info!("Started session from {}", game_file.display());

        let mut controller = Self {
            state,
            status: SessionStatus::Playing,
            presenter,
            economy,
            snapshot: LevelUpSnapshot::default(),
            save_ref: SaveReference {
                game_file,
                stats_file: None,
            },
        };
        controller.refresh();
        Ok(controller)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn snapshot(&self) -> &LevelUpSnapshot {
        &self.snapshot
    }

    pub fn save_reference(&self) -> &SaveReference {
        &self.save_ref
    }

    pub fn move_player(&mut self, direction: CardinalDirection) -> Result<SessionStatus> {
        self.ensure_playing()?;
        let outcome = self.state.move_player(direction);
        tracing::debug!(%direction, ?outcome, "move");
        Ok(self.refresh())
    }

    /// Classifies the current state, notifies the presenter and redraws.
    ///
    /// Win is checked before loss, and loss before level-up. Terminal states
    /// are not drawn.
    pub fn refresh(&mut self) -> SessionStatus {
        if self.state.has_won() {
            self.enter_terminal(SessionStatus::Won, Notice::Won);
            return self.status;
        }
        if self.state.has_lost() {
            self.enter_terminal(SessionStatus::Lost, Notice::Lost);
            return self.status;
        }

        if self.state.did_level_up() {
            self.state.clear_level_up();
            self.snapshot.capture(self.state.inventory());
            let level = self.state.level_index() + 1;
            tracing::info!(level, "Level up");
            self.presenter.notify(&Notice::LevelUp { level });
        }

        self.status = SessionStatus::Playing;
        self.draw();
        self.status
    }

    /// Replays the current game up to the level reached, restoring the
    /// inventory captured at the last level-up. Saved stats are not reapplied.
    pub fn restart(&mut self) -> Result<SessionStatus> {
        let levels_reached = self.state.level_index();
        let mut fresh = FileSaveRepository::load_game(&self.save_ref.game_file)?;
        for _ in 0..levels_reached {
            fresh.level_up();
            fresh.clear_level_up();
        }
        self.snapshot.restore_into(fresh.inventory_mut());

        self.state = fresh;
        self.status = SessionStatus::Playing;
        tracing::info!(levels_reached, "Restarted session");
        Ok(self.refresh())
    }

    /// Starts `game_file` from scratch, applying the referenced saved stats if
    /// any, and forgets the level-up snapshot.
    pub fn load_new_game(&mut self, game_file: &Path) -> Result<SessionStatus> {
        let stats_file = self.save_ref.stats_file.clone();
        self.replace_game(game_file, stats_file)
    }

    /// Validates `game_file` as a game definition, then loads it.
    pub fn new_game(&mut self, game_file: &Path) -> Result<SessionStatus> {
        FileSaveRepository::validate_game_file(game_file).inspect_err(|err| {
            tracing::warn!("Rejected new game: {err}");
        })?;
        self.load_new_game(game_file)
    }

    /// Resumes a save directory written by [`save_game`](Self::save_game).
    pub fn load_game(&mut self, directory: &Path) -> Result<SessionStatus> {
        let location =
            FileSaveRepository::validate_save_directory(directory).inspect_err(|err| {
                tracing::warn!("Rejected save directory: {err}");
            })?;
        self.replace_game(&location.maze, Some(location.stats))
    }

    pub fn save_game(&self, directory: &Path) -> Result<SaveLocation> {
        self.ensure_playing()?;
        let location = FileSaveRepository::save(directory, &self.state)?;
        tracing::info!("Saved session to {}", directory.display());
        Ok(location)
    }

    /// Consumes the oldest held instance of `kind`.
    pub fn use_item(&mut self, kind: ItemKind) -> Result<SessionStatus> {
        self.ensure_playing()?;
        self.state.use_item(kind).inspect_err(|err| {
            tracing::warn!("Rejected item use: {err}");
        })?;
        tracing::debug!(%kind, "used item");
        Ok(self.refresh())
    }

    pub fn purchase(&mut self, kind: ItemKind) -> Result<PurchaseOutcome> {
        self.ensure_playing()?;
        let outcome = self
            .economy
            .purchase(self.state.inventory_mut(), kind)
            .inspect_err(|err| tracing::warn!("Rejected purchase: {err}"))?;

        match outcome {
            PurchaseOutcome::Purchased(_) => {
                self.refresh();
            }
            PurchaseOutcome::InsufficientFunds { coins, price } => {
                tracing::warn!(%kind, coins, price, "Insufficient funds");
                self.presenter
                    .notify(&Notice::InsufficientFunds { kind, coins, price });
            }
        }
        Ok(outcome)
    }

    fn replace_game(
        &mut self,
        game_file: &Path,
        stats_file: Option<PathBuf>,
    ) -> Result<SessionStatus> {
        let mut fresh = FileSaveRepository::load_game(game_file)?;
        if let Some(stats) = &stats_file {
            FileSaveRepository::deserialize_stats(stats, &mut fresh)?;
        }
        fresh.attempt_unlock_door();

        self.snapshot.clear();
        self.state = fresh;
        self.save_ref = SaveReference {
            game_file: game_file.to_path_buf(),
            stats_file,
        };
        self.status = SessionStatus::Playing;
        tracing::info!("Loaded game from {}", game_file.display());
        Ok(self.refresh())
    }

    fn ensure_playing(&self) -> Result<()> {
        if self.status.is_terminal() {
            tracing::warn!(status = %self.status, "Command rejected in terminal state");
            return Err(RuntimeError::NotPlaying {
                status: self.status,
            });
        }
        Ok(())
    }

    fn enter_terminal(&mut self, status: SessionStatus, notice: Notice) {
        self.status = status;
        tracing::info!(%status, "Session over");
        self.presenter.notify(&notice);
    }

    fn draw(&mut self) {
        let Some(level) = self.state.current_level() else {
            return;
        };
        let frame = RenderFrame {
            maze: level.maze(),
            items: level.items(),
            player: self.state.player().position(),
            inventory: self.state.inventory(),
            stats: self.state.player_stats(),
            level: self.state.level_index() + 1,
        };
        self.presenter.draw(&frame);
    }
}
