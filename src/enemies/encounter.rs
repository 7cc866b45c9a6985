//! Encounter detection: the player touching an enemy symbol on the field.

use bevy::prelude::*;

use super::components::EnemySymbol;
use crate::core::{EncounterEvent, GameConfig, PlayState};
use crate::player::{Actor, Player};
use crate::world::{rects_overlap, SpawnOrder};

/// Enemy that may not start a battle until the player steps off it.
///
/// Set after a lost battle so the player is not dragged straight back in.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct EncounterGuard {
    pub suppressed: Option<Entity>,
}

impl EncounterGuard {
    pub fn suppress(&mut self, enemy: Entity) {
        self.suppressed = Some(enemy);
    }
}

/// Index of the first live enemy whose hitbox overlaps `player_rect`.
///
/// `enemies` must already be in spawn order.
pub fn find_touched(
    player_rect: Rect,
    enemies: &[&EnemySymbol],
    tile_size: f32,
    margin: f32,
) -> Option<usize> {
    enemies.iter().position(|enemy| {
        !enemy.defeated && rects_overlap(player_rect, enemy.hitbox(tile_size, margin))
    })
}

/// Start a battle with the first enemy the player touches.
pub fn detect_encounter(
    config: Res<GameConfig>,
    mut guard: ResMut<EncounterGuard>,
    player_query: Query<&Actor, With<Player>>,
    enemy_query: Query<(Entity, &EnemySymbol, &SpawnOrder)>,
    mut encounters: EventWriter<EncounterEvent>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    let Ok(actor) = player_query.get_single() else {
        return;
    };
    let player_rect = actor.rect();
    let (ts, margin) = (config.tile_size, config.actor_margin);

    if let Some(suppressed) = guard.suppressed {
        let still_touching = enemy_query
            .get(suppressed)
            .map(|(_, enemy, _)| {
                !enemy.defeated && rects_overlap(player_rect, enemy.hitbox(ts, margin))
            })
            .unwrap_or(false);
        if !still_touching {
            guard.suppressed = None;
        }
    }

    let mut candidates: Vec<_> = enemy_query
        .iter()
        .filter(|(entity, _, _)| guard.suppressed != Some(*entity))
        .collect();
    candidates.sort_by_key(|(_, _, order)| **order);
    let symbols: Vec<&EnemySymbol> = candidates.iter().map(|(_, enemy, _)| *enemy).collect();

    if let Some(index) = find_touched(player_rect, &symbols, ts, margin) {
        let (entity, enemy, _) = candidates[index];
        info!("Encountered {}", enemy.name);
        encounters.send(EncounterEvent {
            enemy: entity,
            name: enemy.name.clone(),
        });
        next_state.set(PlayState::Battle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Rect {
        Rect::from_corners(Vec2::new(x, y), Vec2::new(x + 26.0, y + 26.0))
    }

    #[test]
    fn touching_a_live_enemy() {
        let slime = EnemySymbol::new("Slime", IVec2::new(10, 5), 12, 3);
        // Slime hitbox is 323..349 x 163..189.
        assert_eq!(find_touched(player_at(300.0, 163.0), &[&slime], 32.0, 6.0), Some(0));
        assert_eq!(find_touched(player_at(297.0, 163.0), &[&slime], 32.0, 6.0), None);
    }

    #[test]
    fn defeated_enemies_are_ignored() {
        let mut slime = EnemySymbol::new("Slime", IVec2::new(10, 5), 12, 3);
        slime.defeated = true;
        let bat = EnemySymbol::new("Bat", IVec2::new(10, 5), 8, 4);
        assert_eq!(find_touched(player_at(323.0, 163.0), &[&slime, &bat], 32.0, 6.0), Some(1));
    }

    #[test]
    fn first_in_order_wins() {
        let slime = EnemySymbol::new("Slime", IVec2::new(10, 5), 12, 3);
        let bat = EnemySymbol::new("Bat", IVec2::new(11, 5), 8, 4);
        // Straddles both hitboxes.
        let rect = player_at(340.0, 163.0);
        assert_eq!(find_touched(rect, &[&bat, &slime], 32.0, 6.0), Some(0));
        assert_eq!(find_touched(rect, &[&slime, &bat], 32.0, 6.0), Some(0));
    }
}
