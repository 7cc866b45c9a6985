//! Global events used for cross-system communication.
//!
//! The encounter check, the battle systems and the interaction systems never
//! talk to the HUD directly; they send these events and the UI picks them up.

use bevy::prelude::*;

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattleOutcome {
    /// The enemy's HP reached 0.
    Victory,
    /// The player's HP reached 0.
    Defeat,
}

/// Sent when the player touches a live enemy symbol on the field.
#[derive(Event, Debug, Clone)]
pub struct EncounterEvent {
    /// The enemy symbol entity that was touched
    pub enemy: Entity,
    /// Display name of the enemy
    pub name: String,
}

/// Sent when either combatant's HP reaches 0.
#[derive(Event, Debug, Clone, Copy)]
pub struct BattleEndedEvent {
    /// The enemy symbol entity the battle was fought against
    pub enemy: Entity,
    pub outcome: BattleOutcome,
}

/// A one-line message for the HUD toast.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct HudMessage(pub String);

impl HudMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}
