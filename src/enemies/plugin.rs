//! Enemy plugin - registers encounter detection.

use bevy::prelude::*;

use super::encounter::{detect_encounter, EncounterGuard};
use crate::core::{GameState, PlayState, TickSet};

/// Enemy plugin - watches for the player touching enemy symbols.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EncounterGuard>()
            .add_systems(OnEnter(GameState::InGame), reset_guard)
            .add_systems(
                FixedUpdate,
                detect_encounter
                    .in_set(TickSet::Encounter)
                    .run_if(in_state(PlayState::Field)),
            );
    }
}

fn reset_guard(mut guard: ResMut<EncounterGuard>) {
    guard.suppressed = None;
}
