//! Battle systems - starting, resolving and ending battles.

use bevy::prelude::*;

use super::battle::{ActiveBattle, BattleLog, TurnResult};
use super::components::*;
use crate::core::{
    BattleEndedEvent, EncounterEvent, GameConfig, GameState, HudMessage, PlayState, TickSet,
};
use crate::enemies::{EncounterGuard, EnemySymbol};
use crate::input::{Action, ActionState};
use crate::player::Player;

/// Configure battle systems.
pub fn setup_battle_systems(app: &mut App) {
    app.init_resource::<BattleLog>()
        .add_systems(
            FixedUpdate,
            (
                start_battle,
                player_turn
                    .run_if(in_state(PlayState::Battle))
                    .run_if(resource_exists::<ActiveBattle>),
                enemy_turn
                    .run_if(in_state(PlayState::Battle))
                    .run_if(resource_exists::<ActiveBattle>),
                end_battle,
            )
                .chain()
                .in_set(TickSet::Battle),
        )
        .add_systems(OnExit(GameState::InGame), discard_battle);
}

/// Create the battle for an encounter found this tick.
fn start_battle(
    mut commands: Commands,
    mut encounters: EventReader<EncounterEvent>,
    config: Res<GameConfig>,
    enemy_query: Query<&EnemySymbol>,
    mut log: ResMut<BattleLog>,
) {
    // Only one battle at a time; the first encounter wins.
    let Some(enemy) = encounters.read().map(|e| e.enemy).next() else {
        return;
    };
    encounters.clear();
    let Ok(symbol) = enemy_query.get(enemy) else {
        warn!("Encounter with missing enemy {:?}", enemy);
        return;
    };

    info!("Battle started against {}", symbol.name);
    commands.insert_resource(ActiveBattle::begin(
        enemy,
        symbol,
        config.enemy_turn_delay,
        &mut log,
    ));
}

/// The player attacks when Confirm is pressed on their turn.
fn player_turn(
    mut actions: ResMut<ActionState>,
    mut battle: ResMut<ActiveBattle>,
    mut log: ResMut<BattleLog>,
    mut player_query: Query<&mut BattleStatus, With<Player>>,
    mut ended: EventWriter<BattleEndedEvent>,
) {
    let Ok(mut player) = player_query.get_single_mut() else {
        return;
    };
    if !actions.consume(Action::Confirm) {
        return;
    }
    if let Some(TurnResult::Ended(outcome)) = battle.player_attack(&mut player, &mut log) {
        ended.send(BattleEndedEvent {
            enemy: battle.enemy_entity,
            outcome,
        });
    }
}

/// The enemy attacks once its delay has elapsed.
fn enemy_turn(
    time: Res<Time>,
    mut battle: ResMut<ActiveBattle>,
    mut log: ResMut<BattleLog>,
    mut player_query: Query<&mut BattleStatus, With<Player>>,
    mut ended: EventWriter<BattleEndedEvent>,
) {
    let Ok(mut player) = player_query.get_single_mut() else {
        return;
    };
    if let Some(TurnResult::Ended(outcome)) =
        battle.advance_enemy(time.delta(), &mut player, &mut log)
    {
        ended.send(BattleEndedEvent {
            enemy: battle.enemy_entity,
            outcome,
        });
    }
}

/// Apply a finished battle to the field and return to it.
///
/// A won battle marks the enemy symbol defeated for good. A lost one revives
/// the player and keeps that enemy from re-triggering until stepped off.
fn end_battle(
    mut commands: Commands,
    mut ended: EventReader<BattleEndedEvent>,
    mut enemy_query: Query<&mut EnemySymbol>,
    mut player_query: Query<&mut BattleStatus, With<Player>>,
    mut guard: ResMut<EncounterGuard>,
    mut messages: EventWriter<HudMessage>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    for event in ended.read() {
        let name = enemy_query
            .get(event.enemy)
            .map(|enemy| enemy.name.clone())
            .unwrap_or_default();

        match event.outcome {
            BattleOutcome::Victory => {
                if let Ok(mut enemy) = enemy_query.get_mut(event.enemy) {
                    enemy.hp = 0;
                    enemy.defeated = true;
                }
                info!("Victory against {}", name);
                messages.send(HudMessage::new(format!("Defeated {}!", name)));
            }
            BattleOutcome::Defeat => {
                guard.suppress(event.enemy);
                if let Ok(mut player) = player_query.get_single_mut() {
                    player.hp = player.max_hp;
                }
                info!("Defeated by {}", name);
                messages.send(HudMessage::new(format!("Lost to {}...", name)));
            }
        }

        commands.remove_resource::<ActiveBattle>();
        next_state.set(PlayState::Field);
    }
}

fn discard_battle(mut commands: Commands) {
    commands.remove_resource::<ActiveBattle>();
}
