//! Input plugin - key bindings and the per-tick action state.

use bevy::input::InputSystem;
use bevy::prelude::*;

use crate::core::TickSet;

use super::actions::*;

/// Folds keyboard state into [`ActionState`] every frame.
pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ActionBindings>()
            .init_resource::<ActionState>()
            .add_systems(PreUpdate, collect_actions.after(InputSystem))
            .add_systems(FixedUpdate, clear_pressed.in_set(TickSet::Cleanup));
    }
}
