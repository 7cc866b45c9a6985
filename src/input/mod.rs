//! Input module - symbolic actions mapped from raw keys.

mod actions;
mod plugin;

pub use actions::{Action, ActionBindings, ActionState};
pub use plugin::ActionsPlugin;
