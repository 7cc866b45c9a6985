//! Core plugin that sets up game states, events, the fixed tick and the
//! title flow.

use bevy::prelude::*;

use crate::input::{Action, ActionState};

use super::config::{load_game_config, GameConfig};
use super::events::*;
use super::states::*;

/// Tick rate of the simulation.
pub const TICK_HZ: f64 = 60.0;

/// Ordered stages of one simulation tick.
///
/// Every gameplay system lives in one of these sets inside `FixedUpdate`.
/// The sets are chained so a tick always reads input, moves, updates the
/// camera, checks encounters, resolves battle turns, handles interaction,
/// updates the HUD and finally drops unconsumed presses.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Control,
    Movement,
    Camera,
    Encounter,
    Battle,
    Interaction,
    Hud,
    Cleanup,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, Title, InGame) and the Field/Battle sub-state
/// - Global events (EncounterEvent, BattleEndedEvent, HudMessage)
/// - The 60 Hz fixed tick and its ordered system sets
/// - Title screen and back-to-title handling
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register global events
            .add_event::<EncounterEvent>()
            .add_event::<BattleEndedEvent>()
            .add_event::<HudMessage>()

            // Fixed simulation tick
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Control,
                    TickSet::Movement,
                    TickSet::Camera,
                    TickSet::Encounter,
                    TickSet::Battle,
                    TickSet::Interaction,
                    TickSet::Hud,
                    TickSet::Cleanup,
                )
                    .chain(),
            )

            // A config inserted by the binary or a test is kept
            .add_systems(
                PreStartup,
                load_game_config.run_if(not(resource_exists::<GameConfig>)),
            )

            // Loading state - data files are read at startup, so move on
            .add_systems(OnEnter(GameState::Loading), transition_to_title)
            .add_systems(OnEnter(GameState::Title), log_title)

            .add_systems(
                FixedUpdate,
                (
                    title_input.run_if(in_state(GameState::Title)),
                    back_to_title.run_if(in_state(GameState::InGame)),
                )
                    .in_set(TickSet::Control),
            );
    }
}

fn transition_to_title(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Title);
}

fn log_title() {
    info!("Title screen: Confirm to start, Back to quit");
}

/// Confirm starts the field, Back quits the application.
fn title_input(
    mut actions: ResMut<ActionState>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    if actions.consume(Action::Confirm) {
        info!("Starting field");
        next_state.set(GameState::InGame);
    } else if actions.consume(Action::Back) {
        info!("Quit from title");
        exit.send(AppExit::Success);
    }
}

/// Back leaves the field (or a battle) and returns to the title.
fn back_to_title(mut actions: ResMut<ActionState>, mut next_state: ResMut<NextState<GameState>>) {
    if actions.consume(Action::Back) {
        info!("Returning to title");
        next_state.set(GameState::Title);
    }
}
