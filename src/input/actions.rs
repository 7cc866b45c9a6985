//! Symbolic actions and the bindings that map raw keys onto them.
//!
//! Raw key codes are folded into an [`ActionState`] once per frame. Every
//! gameplay system reads actions, never keys.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

/// Everything the player can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Held to move faster on the field
    Run,
    /// Start from the title, attack in battle
    Confirm,
    /// Talk to an NPC or open an adjacent chest
    Interact,
    UseSlot1,
    UseSlot2,
    ToggleInventory,
    ToggleDebug,
    /// Leave the field, or quit from the title
    Back,
}

impl Action {
    pub const ALL: [Action; 12] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Run,
        Action::Confirm,
        Action::Interact,
        Action::UseSlot1,
        Action::UseSlot2,
        Action::ToggleInventory,
        Action::ToggleDebug,
        Action::Back,
    ];
}

/// Maps each action to the keys that trigger it.
#[derive(Resource, Debug, Clone)]
pub struct ActionBindings {
    bindings: HashMap<Action, Vec<KeyCode>>,
}

impl Default for ActionBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        bindings.bind(Action::MoveUp, &[KeyCode::ArrowUp, KeyCode::KeyW]);
        bindings.bind(Action::MoveDown, &[KeyCode::ArrowDown, KeyCode::KeyS]);
        bindings.bind(Action::MoveLeft, &[KeyCode::ArrowLeft, KeyCode::KeyA]);
        bindings.bind(Action::MoveRight, &[KeyCode::ArrowRight, KeyCode::KeyD]);
        bindings.bind(Action::Run, &[KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        bindings.bind(Action::Confirm, &[KeyCode::Space, KeyCode::Enter]);
        bindings.bind(Action::Interact, &[KeyCode::KeyE]);
        bindings.bind(Action::UseSlot1, &[KeyCode::Digit1]);
        bindings.bind(Action::UseSlot2, &[KeyCode::Digit2]);
        bindings.bind(Action::ToggleInventory, &[KeyCode::KeyI]);
        bindings.bind(Action::ToggleDebug, &[KeyCode::KeyH]);
        bindings.bind(Action::Back, &[KeyCode::Escape]);
        bindings
    }
}

impl ActionBindings {
    /// Replace the keys bound to `action`.
    pub fn bind(&mut self, action: Action, keys: &[KeyCode]) {
        self.bindings.insert(action, keys.to_vec());
    }

    pub fn keys(&self, action: Action) -> &[KeyCode] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Per-tick view of the player's intent.
///
/// `held` mirrors the keys currently down. `pressed` latches a new press
/// until a tick consumes it or the tick ends.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActionState {
    held: HashSet<Action>,
    pressed: HashSet<Action>,
}

impl ActionState {
    pub fn held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Take a latched press. Returns false if there was none.
    pub fn consume(&mut self, action: Action) -> bool {
        self.pressed.remove(&action)
    }

    /// Mark an action as pressed and held.
    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
        self.pressed.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn clear_pressed(&mut self) {
        self.pressed.clear();
    }

    /// Unit movement direction from the held move actions.
    ///
    /// World space is y-down, so `MoveDown` is +y. Opposed actions cancel
    /// and diagonals are normalized.
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: Action, pos: Action| {
            (self.held(pos) as i32 - self.held(neg) as i32) as f32
        };
        Vec2::new(
            axis(Action::MoveLeft, Action::MoveRight),
            axis(Action::MoveUp, Action::MoveDown),
        )
        .normalize_or_zero()
    }
}

/// Fold raw keyboard state into the action state.
pub fn collect_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<ActionBindings>,
    mut actions: ResMut<ActionState>,
) {
    for action in Action::ALL {
        let keys = bindings.keys(action);
        if keyboard.any_just_pressed(keys.iter().copied()) {
            actions.press(action);
        } else if keyboard.any_pressed(keys.iter().copied()) {
            actions.held.insert(action);
        } else {
            actions.release(action);
        }
    }
}

/// Drop presses no system consumed this tick.
pub fn clear_pressed(mut actions: ResMut<ActionState>) {
    actions.clear_pressed();
}
