//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Field movement only
//! runs in `PlayState::Field`, battle turns only in `PlayState::Battle`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while config, catalog and map are read
/// - Move to `Title` when loading completes
/// - Enter `InGame` when the player confirms on the title screen
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - reading data files
    #[default]
    Loading,
    /// Title screen
    Title,
    /// Active gameplay
    InGame,
}

/// Sub-states for gameplay - only active when `GameState::InGame`.
///
/// Which side acts inside a battle is tracked by the battle itself
/// (see `combat::BattleTurn`), not by another state layer.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Free movement, encounters, chests and NPCs
    #[default]
    Field,
    /// Turn-based battle against one enemy symbol
    Battle,
}

impl PlayState {
    /// Short lowercase label used by the debug overlay.
    pub fn label(&self) -> &'static str {
        match self {
            PlayState::Field => "field",
            PlayState::Battle => "battle",
        }
    }
}
